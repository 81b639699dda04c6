use dotenvy::dotenv;
use std::env;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct Config {
    pub gemini_api_key: String,
    pub gemini_base_url: String,
    pub gemini_model: String,
    pub embedding_model: String,
    pub request_timeout: Duration,
    pub knowledge_file: String,
    pub faqs_file: String,
    pub appointments_file: String,
    /// How many passages a retrieval forwards as context.
    pub max_chunks: usize,
    /// Minimum cosine similarity a passage must clear.
    pub min_score: f32,
    pub clinic_name: String,
    pub clinic_address: String,
    pub clinic_phone: String,
}

fn env_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}

fn env_parse_or<T: std::str::FromStr>(key: &str, default: T) -> T {
    env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

impl Config {
    pub fn load() -> Self {
        dotenv().ok();
        Self {
            gemini_api_key: env::var("GEMINI_API_KEY").unwrap_or_default(),
            gemini_base_url: env_or(
                "GEMINI_BASE_URL",
                "https://generativelanguage.googleapis.com/v1beta",
            ),
            gemini_model: env_or("GEMINI_MODEL", "gemini-1.5-flash"),
            embedding_model: env_or("EMBEDDING_MODEL", "text-embedding-004"),
            request_timeout: Duration::from_secs(env_parse_or("REQUEST_TIMEOUT_SECS", 30)),
            knowledge_file: env_or("KNOWLEDGE_FILE", "data/knowledge_base.txt"),
            faqs_file: env_or("FAQS_FILE", "data/faqs.json"),
            appointments_file: env_or("APPOINTMENTS_FILE", "data/appointments.json"),
            max_chunks: env_parse_or("MAX_CHUNKS", 3),
            min_score: env_parse_or("MIN_SCORE", 0.1),
            clinic_name: env_or("CLINIC_NAME", "Bright Smile Dental Clinic"),
            clinic_address: env_or("CLINIC_ADDRESS", "123 Health Street, Medical District"),
            clinic_phone: env_or("CLINIC_PHONE", "(555) 123-DENT"),
        }
    }
}

/// Coarse category of a user request; decides which subsystem handles
/// the turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    Booking,
    Faq,
    Knowledge,
    Fallback,
}

impl Intent {
    pub fn label(&self) -> &'static str {
        match self {
            Intent::Booking => "booking",
            Intent::Faq => "faq",
            Intent::Knowledge => "knowledge",
            Intent::Fallback => "fallback",
        }
    }
}

/// Phrases that mark an appointment request. Checked before anything
/// else so a booking request is never misrouted to retrieval.
const BOOKING_KEYWORDS: &[&str] = &[
    "book",
    "schedule",
    "appointment",
    "reserve",
    "available",
    "slot",
    "when can",
    "make appointment",
    "see doctor",
    "visit",
    "come in",
];

/// Phrases that mark a knowledge-base question.
const KNOWLEDGE_KEYWORDS: &[&str] = &[
    "what is",
    "how to",
    "tell me about",
    "explain",
    "information",
    "learn",
    "treatment",
    "procedure",
    "pain",
    "care",
    "recovery",
    "healing",
    "advice",
    "recommend",
    "cleaning",
    "filling",
    "crown",
    "root canal",
    "whitening",
    "braces",
    "implant",
];

struct IntentRule {
    intent: Intent,
    keywords: Vec<String>,
}

impl IntentRule {
    fn matches(&self, haystack: &str) -> bool {
        self.keywords.iter().any(|k| haystack.contains(k.as_str()))
    }
}

/// Keyword classifier over an ordered rule list. Rule priority is fixed:
/// booking, then FAQ-table keywords, then knowledge phrases; anything
/// that matches nothing falls back.
pub struct IntentClassifier {
    rules: Vec<IntentRule>,
}

impl IntentClassifier {
    /// `faq_keywords` is the pooled keyword list of the loaded FAQ table;
    /// a single shared keyword is enough to route a turn there.
    pub fn new(faq_keywords: Vec<String>) -> Self {
        let rules = vec![
            IntentRule {
                intent: Intent::Booking,
                keywords: BOOKING_KEYWORDS.iter().map(|k| k.to_string()).collect(),
            },
            IntentRule {
                intent: Intent::Faq,
                keywords: faq_keywords.into_iter().map(|k| k.to_lowercase()).collect(),
            },
            IntentRule {
                intent: Intent::Knowledge,
                keywords: KNOWLEDGE_KEYWORDS.iter().map(|k| k.to_string()).collect(),
            },
        ];
        Self { rules }
    }

    pub fn classify(&self, utterance: &str) -> Intent {
        let haystack = utterance.to_lowercase();
        for rule in &self.rules {
            if rule.matches(&haystack) {
                return rule.intent;
            }
        }
        Intent::Fallback
    }
}

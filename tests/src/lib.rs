//! Deterministic fakes and fixtures for cross-layer tests. Everything
//! here runs offline; the network-backed providers are swapped for
//! vocabulary-count embeddings and canned generators.

pub mod fakes {
    use domain::providers::{EmbedError, GenerateError, ReplyGenerator, TextEmbedder};

    /// Embeds a text as counts of a small fixed vocabulary, one
    /// dimension per word. Shared vocabulary drives cosine similarity,
    /// so ranking outcomes are fully predictable.
    #[derive(Clone)]
    pub struct VocabEmbedder {
        vocab: Vec<&'static str>,
    }

    impl VocabEmbedder {
        pub fn dental() -> Self {
            Self {
                vocab: vec![
                    "root", "canal", "cleaning", "whitening", "crown", "implant", "braces",
                    "gum", "plaque", "tooth",
                ],
            }
        }

        pub fn vector(&self, text: &str) -> Vec<f32> {
            let lowered = text.to_lowercase();
            let tokens: Vec<&str> = lowered
                .split(|c: char| !c.is_alphanumeric())
                .filter(|t| !t.is_empty())
                .collect();
            self.vocab
                .iter()
                .map(|word| tokens.iter().filter(|t| *t == word).count() as f32)
                .collect()
        }
    }

    impl TextEmbedder for VocabEmbedder {
        fn embed(
            &self,
            text: &str,
        ) -> impl std::future::Future<Output = Result<Vec<f32>, EmbedError>> + Send {
            let vector = self.vector(text);
            async move { Ok(vector) }
        }
    }

    /// Always-down embedder, for exercising the keyword fallback path.
    pub struct OfflineEmbedder;

    impl TextEmbedder for OfflineEmbedder {
        fn embed(
            &self,
            _text: &str,
        ) -> impl std::future::Future<Output = Result<Vec<f32>, EmbedError>> + Send {
            async { Err(EmbedError::ModelUnavailable("offline".to_string())) }
        }
    }

    /// Echoes the assembled prompt so tests can assert on the context
    /// the orchestrator forwarded.
    pub struct EchoGenerator;

    impl ReplyGenerator for EchoGenerator {
        fn complete(
            &self,
            prompt: &str,
            _system_context: &str,
        ) -> impl std::future::Future<Output = Result<String, GenerateError>> + Send {
            let reply = prompt.to_string();
            async move { Ok(reply) }
        }
    }

    /// Generation service that is always down.
    pub struct FailingGenerator;

    impl ReplyGenerator for FailingGenerator {
        fn complete(
            &self,
            _prompt: &str,
            _system_context: &str,
        ) -> impl std::future::Future<Output = Result<String, GenerateError>> + Send {
            async { Err(GenerateError::Service("unreachable".to_string())) }
        }
    }
}

pub mod fixtures {
    use domain::booking::{AppointmentBook, Slot, SlotStatus};
    use domain::models::FaqEntry;

    pub const KNOWLEDGE_TEXT: &str = "\
Dental Cleanings
Regular cleanings remove plaque and tartar before they harden. Most
patients benefit from a cleaning every six months.

Root Canal Treatment
A root canal removes infected pulp from inside the tooth. The root canal
procedure saves the natural tooth and relieves pain.

Teeth Whitening
Professional whitening lightens surface stains on enamel and is safe
when supervised by a dentist.";

    pub fn faqs() -> Vec<FaqEntry> {
        vec![
            FaqEntry {
                question: "What are your office hours?".to_string(),
                answer: "We are open 9am to 5pm, Monday through Friday.".to_string(),
                keywords: vec!["hours".to_string(), "open".to_string()],
            },
            FaqEntry {
                question: "What is the cost of a cleaning?".to_string(),
                answer: "A standard cleaning is $120.".to_string(),
                keywords: vec![
                    "cleaning".to_string(),
                    "cost".to_string(),
                    "price".to_string(),
                ],
            },
            FaqEntry {
                question: "Do you accept insurance?".to_string(),
                answer: "We accept most major dental insurance plans.".to_string(),
                keywords: vec!["insurance".to_string()],
            },
        ]
    }

    pub fn slot(id: u32, status: SlotStatus) -> Slot {
        Slot {
            id,
            date: "2026-08-11".to_string(),
            time: "09:00".to_string(),
            duration: "30 min".to_string(),
            kind: "Cleaning".to_string(),
            status,
        }
    }

    pub fn appointment_book() -> AppointmentBook {
        AppointmentBook {
            slots: vec![
                slot(1, SlotStatus::Available),
                Slot {
                    id: 2,
                    date: "2026-08-12".to_string(),
                    time: "14:00".to_string(),
                    duration: "60 min".to_string(),
                    kind: "Root Canal".to_string(),
                    status: SlotStatus::Available,
                },
                Slot {
                    id: 3,
                    date: "2026-08-12".to_string(),
                    time: "15:30".to_string(),
                    duration: "45 min".to_string(),
                    kind: "Whitening".to_string(),
                    status: SlotStatus::Booked,
                },
            ],
            bookings: Vec::new(),
        }
    }
}

pub mod harness {
    use application::booking_service::BookingService;
    use application::chat_service::{ChatService, ClinicInfo};
    use application::faq_service::FaqService;
    use application::rag_service::RagService;
    use domain::providers::{ReplyGenerator, TextEmbedder};
    use infrastructure::booking_store::BookingStore;
    use infrastructure::knowledge::build_passages;

    use crate::fixtures;

    pub fn clinic() -> ClinicInfo {
        ClinicInfo {
            name: "Bright Smile Dental Clinic".to_string(),
            address: "123 Health Street, Medical District".to_string(),
            phone: "(555) 123-DENT".to_string(),
        }
    }

    /// Fully wired chat service over the fixture data, with the given
    /// providers standing in for the network.
    pub async fn chat_service<E: TextEmbedder, G: ReplyGenerator>(
        embedder: E,
        generator: G,
    ) -> ChatService<E, G> {
        let passages = build_passages(fixtures::KNOWLEDGE_TEXT);
        let mut rag = RagService::new(passages, embedder, 3, 0.1);
        rag.build_index().await;

        ChatService::new(
            rag,
            FaqService::new(fixtures::faqs()),
            BookingService::new(BookingStore::in_memory(fixtures::appointment_book())),
            generator,
            clinic(),
        )
    }
}

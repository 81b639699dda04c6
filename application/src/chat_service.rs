use domain::intent::{Intent, IntentClassifier};
use domain::providers::{ReplyGenerator, TextEmbedder};

use crate::booking_service::BookingService;
use crate::faq_service::FaqService;
use crate::rag_service::RagService;

/// Fixed reply when the generation service fails mid-turn.
pub const APOLOGY_REPLY: &str = "I'm sorry, I'm having trouble answering right now. \
Please try again in a moment or call the clinic directly.";

/// Fixed reply when retrieval finds nothing relevant.
pub const NO_CONTEXT_REPLY: &str = "I couldn't find any relevant information on that. \
You can ask me about our services, appointments, or general dental care.";

/// Fixed reply for an empty utterance.
pub const EMPTY_UTTERANCE_REPLY: &str = "I didn't receive any message. How can I help you today?";

/// How many open slots a booking turn offers at once.
const SLOT_DISPLAY_LIMIT: usize = 5;

#[derive(Debug, Clone)]
pub struct ClinicInfo {
    pub name: String,
    pub address: String,
    pub phone: String,
}

#[derive(Debug, Clone)]
pub struct TurnReply {
    pub text: String,
    pub intent: Intent,
}

/// Per-turn orchestrator: classify the utterance, gather context from
/// the matching subsystem, phrase the reply through the generation
/// service. Every branch terminates in a string; failures degrade to
/// fixed replies and never escape the turn.
pub struct ChatService<E, G> {
    classifier: IntentClassifier,
    rag: RagService<E>,
    faqs: FaqService,
    booking: BookingService,
    generator: G,
    clinic: ClinicInfo,
}

impl<E: TextEmbedder, G: ReplyGenerator> ChatService<E, G> {
    pub fn new(
        rag: RagService<E>,
        faqs: FaqService,
        booking: BookingService,
        generator: G,
        clinic: ClinicInfo,
    ) -> Self {
        let classifier = IntentClassifier::new(faqs.keyword_pool());
        Self {
            classifier,
            rag,
            faqs,
            booking,
            generator,
            clinic,
        }
    }

    pub fn clinic(&self) -> &ClinicInfo {
        &self.clinic
    }

    pub fn booking(&self) -> &BookingService {
        &self.booking
    }

    pub fn booking_mut(&mut self) -> &mut BookingService {
        &mut self.booking
    }

    pub async fn handle_turn(&mut self, utterance: &str) -> TurnReply {
        if utterance.trim().is_empty() {
            return TurnReply {
                text: EMPTY_UTTERANCE_REPLY.to_string(),
                intent: Intent::Fallback,
            };
        }

        let intent = self.classifier.classify(utterance);
        let text = match intent {
            Intent::Booking => self.booking_turn(utterance).await,
            Intent::Faq => self.faq_turn(utterance).await,
            Intent::Knowledge => self.knowledge_turn(utterance).await,
            Intent::Fallback => self.phrase(utterance, "").await,
        };
        TurnReply { text, intent }
    }

    /// Clinic identity and status lines for the operator surface.
    pub fn status_summary(&self) -> String {
        format!(
            "{}\n{}\n{}\n\nKnowledge passages: {}\nSemantic index: {}\nFAQ entries: {}\nAvailable slots: {}",
            self.clinic.name,
            self.clinic.address,
            self.clinic.phone,
            self.rag.passage_count(),
            if self.rag.index_ready() {
                "ready"
            } else {
                "keyword fallback"
            },
            self.faqs.len(),
            self.booking.available_count(),
        )
    }

    fn persona(&self) -> String {
        format!(
            "You are a helpful assistant for {}. Answer professionally and warmly, \
keep replies concise, and suggest calling {} for anything the provided context \
does not cover.",
            self.clinic.name, self.clinic.phone
        )
    }

    /// Forward context plus utterance to the generation service; a
    /// failure there becomes the fixed apology instead of propagating.
    async fn phrase(&self, utterance: &str, context: &str) -> String {
        let prompt = if context.is_empty() {
            format!("User message: {utterance}\n\nReply helpfully:")
        } else {
            format!(
                "Context:\n{context}\n\nUser message: {utterance}\n\nUsing only the context above, reply helpfully:"
            )
        };
        match self.generator.complete(&prompt, &self.persona()).await {
            Ok(reply) => reply,
            Err(err) => {
                tracing::warn!("generation failed: {err}");
                APOLOGY_REPLY.to_string()
            }
        }
    }

    /// Book the named slot, or list what is open. A full calendar is
    /// answered locally without a generation call.
    async fn booking_turn(&mut self, utterance: &str) -> String {
        if let Some(slot_id) = BookingService::parse_slot_request(utterance) {
            let context = match self.booking.book(slot_id, None) {
                Ok(outcome) => BookingService::describe_outcome(&outcome),
                Err(err) => {
                    tracing::error!("booking store write failed: {err}");
                    return APOLOGY_REPLY.to_string();
                }
            };
            return self.phrase(utterance, &context).await;
        }

        match self.booking.summarize_available(SLOT_DISPLAY_LIMIT) {
            Some(listing) => {
                let context = format!(
                    "Available appointment slots:\n{listing}\n\nTo book one, the user should \
name its slot id, for example \"book slot 2\"."
                );
                self.phrase(utterance, &context).await
            }
            None => format!(
                "There are no available appointment slots at the moment. \
Please call us at {} for assistance.",
                self.clinic.phone
            ),
        }
    }

    /// Best FAQ entry as context; with no entry sharing a keyword the
    /// turn falls through to knowledge retrieval.
    async fn faq_turn(&mut self, utterance: &str) -> String {
        match self.faqs.best_match(utterance) {
            Some(entry) => {
                let context = format!("Q: {}\nA: {}", entry.question, entry.answer);
                self.phrase(utterance, &context).await
            }
            None => self.knowledge_turn(utterance).await,
        }
    }

    async fn knowledge_turn(&self, utterance: &str) -> String {
        match self.rag.context_for(utterance).await {
            Some(context) => self.phrase(utterance, &context).await,
            None => NO_CONTEXT_REPLY.to_string(),
        }
    }
}

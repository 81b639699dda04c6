use domain::booking::{BookingOutcome, PatientInfo, Slot};
use infrastructure::booking_store::BookingStore;
use shared::types::Result;
use shared::utils::format_date;

/// Appointment operations over the booking store, plus the plain-text
/// renderings the orchestrator forwards to the generation service.
pub struct BookingService {
    store: BookingStore,
}

impl BookingService {
    pub fn new(store: BookingStore) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &BookingStore {
        &self.store
    }

    pub fn available_count(&self) -> usize {
        self.store.available_count()
    }

    pub fn book(&mut self, slot_id: u32, patient: Option<PatientInfo>) -> Result<BookingOutcome> {
        self.store.book_slot(slot_id, patient)
    }

    /// Numbered, human-readable listing of open slots, or None when the
    /// calendar is full.
    pub fn summarize_available(&self, limit: usize) -> Option<String> {
        let slots = self.store.available_slots(limit);
        if slots.is_empty() {
            return None;
        }
        let lines: Vec<String> = slots
            .iter()
            .enumerate()
            .map(|(i, slot)| Self::describe_slot(i + 1, slot))
            .collect();
        Some(lines.join("\n"))
    }

    fn describe_slot(position: usize, slot: &Slot) -> String {
        format!(
            "{}. {} at {} ({}, {}) [slot {}]",
            position,
            format_date(&slot.date),
            slot.time,
            slot.duration,
            slot.kind,
            slot.id
        )
    }

    /// One-line rendering of a booking attempt for prompting and display.
    pub fn describe_outcome(outcome: &BookingOutcome) -> String {
        match outcome {
            BookingOutcome::Confirmed(booking) => format!(
                "Appointment booked: {} on {} at {} (booking id {}).",
                booking.kind,
                format_date(&booking.date),
                booking.time,
                booking.booking_id
            ),
            BookingOutcome::SlotUnavailable => {
                "That appointment slot is no longer available.".to_string()
            }
            BookingOutcome::SlotNotFound => "No appointment slot with that id exists.".to_string(),
        }
    }

    /// Find a slot reference like "slot 3", "book 3" or "id 3" in free
    /// text; the first marker word followed by a number wins.
    pub fn parse_slot_request(utterance: &str) -> Option<u32> {
        let lowered = utterance.to_lowercase();
        let tokens: Vec<&str> = lowered
            .split(|c: char| !c.is_ascii_alphanumeric())
            .filter(|t| !t.is_empty())
            .collect();
        for window in tokens.windows(2) {
            if matches!(window[0], "slot" | "book" | "id") {
                if let Ok(id) = window[1].parse::<u32>() {
                    return Some(id);
                }
            }
        }
        None
    }
}

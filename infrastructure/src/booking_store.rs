use anyhow::Context;
use chrono::Utc;
use domain::booking::{AppointmentBook, Booking, BookingOutcome, PatientInfo, Slot};
use shared::types::Result;
use std::fs;
use std::path::{Path, PathBuf};

/// Exclusive owner of the appointments file. Every mutation goes through
/// `&mut self`, which serializes writers; the status check in
/// `book_slot` keeps a stale caller from double-booking a slot.
pub struct BookingStore {
    path: Option<PathBuf>,
    book: AppointmentBook,
}

impl BookingStore {
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path)
            .with_context(|| format!("appointments file not found: {}", path.display()))?;
        let book: AppointmentBook = serde_json::from_str(&raw)
            .with_context(|| format!("invalid appointments file: {}", path.display()))?;
        Ok(Self {
            path: Some(path.to_path_buf()),
            book,
        })
    }

    /// Store without a backing file, for tests and dry runs.
    pub fn in_memory(book: AppointmentBook) -> Self {
        Self { path: None, book }
    }

    pub fn available_slots(&self, limit: usize) -> Vec<&Slot> {
        self.book
            .slots
            .iter()
            .filter(|slot| slot.is_available())
            .take(limit)
            .collect()
    }

    pub fn available_count(&self) -> usize {
        self.book.slots.iter().filter(|s| s.is_available()).count()
    }

    pub fn slot(&self, id: u32) -> Option<&Slot> {
        self.book.slots.iter().find(|slot| slot.id == id)
    }

    pub fn booking(&self, booking_id: &str) -> Option<&Booking> {
        self.book
            .bookings
            .iter()
            .find(|b| b.booking_id == booking_id)
    }

    pub fn available_dates(&self) -> Vec<String> {
        let mut dates: Vec<String> = self
            .book
            .slots
            .iter()
            .filter(|s| s.is_available())
            .map(|s| s.date.clone())
            .collect();
        dates.sort();
        dates.dedup();
        dates
    }

    pub fn available_kinds(&self) -> Vec<String> {
        let mut kinds: Vec<String> = self
            .book
            .slots
            .iter()
            .filter(|s| s.is_available())
            .map(|s| s.kind.clone())
            .collect();
        kinds.sort();
        kinds.dedup();
        kinds
    }

    /// Book a slot: compare-and-set on its status, append the booking
    /// record, persist the whole file. Unknown or already-booked slots
    /// report an outcome instead of erroring.
    pub fn book_slot(
        &mut self,
        slot_id: u32,
        patient: Option<PatientInfo>,
    ) -> Result<BookingOutcome> {
        let Some(slot) = self.book.slots.iter_mut().find(|s| s.id == slot_id) else {
            return Ok(BookingOutcome::SlotNotFound);
        };
        if !slot.claim() {
            return Ok(BookingOutcome::SlotUnavailable);
        }

        let booked_at = Utc::now();
        let booking = Booking {
            booking_id: format!("BOOK-{}", booked_at.format("%Y%m%d-%H%M%S")),
            slot_id,
            date: slot.date.clone(),
            time: slot.time.clone(),
            kind: slot.kind.clone(),
            patient,
            booked_at,
        };
        self.book.bookings.push(booking.clone());
        self.persist()?;
        tracing::info!(slot_id, booking_id = %booking.booking_id, "slot booked");
        Ok(BookingOutcome::Confirmed(booking))
    }

    /// Whole-file write, last-writer-wins. Pretty-printed so the file
    /// stays hand-editable by clinic staff.
    fn persist(&self) -> Result<()> {
        let Some(path) = &self.path else {
            return Ok(());
        };
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let serialized = serde_json::to_string_pretty(&self.book)?;
        fs::write(path, serialized)?;
        Ok(())
    }
}

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SlotStatus {
    Available,
    Booked,
}

/// One appointment slot as stored in the appointments file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Slot {
    pub id: u32,
    pub date: String,
    pub time: String,
    pub duration: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub status: SlotStatus,
}

impl Slot {
    pub fn is_available(&self) -> bool {
        self.status == SlotStatus::Available
    }

    /// Compare-and-set on status: flips available to booked, refuses
    /// anything else. The transition is one-directional.
    pub fn claim(&mut self) -> bool {
        if self.status == SlotStatus::Available {
            self.status = SlotStatus::Booked;
            true
        } else {
            false
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PatientInfo {
    pub name: String,
    pub phone: String,
}

/// A confirmed booking, appended to the store. Patient details are
/// optional for chat-initiated bookings and collected at the desk.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Booking {
    pub booking_id: String,
    pub slot_id: u32,
    pub date: String,
    pub time: String,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub patient: Option<PatientInfo>,
    pub booked_at: DateTime<Utc>,
}

/// Root document of the appointments file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppointmentBook {
    pub slots: Vec<Slot>,
    #[serde(default)]
    pub bookings: Vec<Booking>,
}

#[derive(Debug, Clone)]
pub enum BookingOutcome {
    Confirmed(Booking),
    SlotUnavailable,
    SlotNotFound,
}

use application::booking_service::BookingService;
use application::chat_service::{ChatService, ClinicInfo};
use application::faq_service::FaqService;
use application::rag_service::RagService;
use domain::booking::{AppointmentBook, SlotStatus};
use domain::intent::Intent;
use infrastructure::booking_store::BookingStore;
use infrastructure::knowledge::build_passages;
use tests::fakes::{EchoGenerator, VocabEmbedder};
use tests::fixtures::{self, KNOWLEDGE_TEXT};
use tests::harness::{chat_service, clinic};

#[tokio::test]
async fn booking_a_named_slot_confirms_and_consumes_it() {
    let mut chat = chat_service(VocabEmbedder::dental(), EchoGenerator).await;

    let first = chat.handle_turn("please book slot 1").await;
    assert_eq!(first.intent, Intent::Booking);
    assert!(first.text.contains("Appointment booked: Cleaning"));
    assert!(first.text.contains("August 11, 2026"));

    // The slot is gone from the listing and cannot be booked twice.
    let listing = chat.booking().summarize_available(10).unwrap();
    assert!(!listing.contains("[slot 1]"));

    let second = chat.handle_turn("book slot 1 again please").await;
    assert!(second.text.contains("no longer available"));
}

#[tokio::test]
async fn availability_questions_list_open_slots() {
    let mut chat = chat_service(VocabEmbedder::dental(), EchoGenerator).await;
    let reply = chat.handle_turn("show me available appointments").await;

    assert_eq!(reply.intent, Intent::Booking);
    assert!(reply.text.contains("[slot 1]"));
    assert!(reply.text.contains("[slot 2]"));
    assert!(!reply.text.contains("[slot 3]"));
}

#[tokio::test]
async fn a_full_calendar_is_answered_locally_with_the_clinic_phone() {
    let book = AppointmentBook {
        slots: vec![fixtures::slot(1, SlotStatus::Booked)],
        bookings: Vec::new(),
    };
    let mut rag = RagService::new(
        build_passages(KNOWLEDGE_TEXT),
        VocabEmbedder::dental(),
        3,
        0.1,
    );
    rag.build_index().await;
    let mut chat = ChatService::new(
        rag,
        FaqService::new(fixtures::faqs()),
        BookingService::new(BookingStore::in_memory(book)),
        EchoGenerator,
        clinic(),
    );

    let reply = chat.handle_turn("when can I come in?").await;
    assert_eq!(reply.intent, Intent::Booking);
    assert!(reply.text.contains("no available appointment slots"));
    assert!(reply.text.contains("(555) 123-DENT"));
}

#[tokio::test]
async fn unknown_slot_ids_are_reported_not_errored() {
    let mut chat = chat_service(VocabEmbedder::dental(), EchoGenerator).await;
    let reply = chat.handle_turn("book slot 42").await;
    assert!(reply.text.contains("No appointment slot with that id exists."));
}

use application::chat_service::{APOLOGY_REPLY, EMPTY_UTTERANCE_REPLY, NO_CONTEXT_REPLY};
use domain::intent::Intent;
use tests::fakes::{EchoGenerator, FailingGenerator, OfflineEmbedder, VocabEmbedder};
use tests::harness::chat_service;

#[tokio::test]
async fn cleaning_cost_question_is_answered_from_the_faq_table() {
    let mut chat = chat_service(VocabEmbedder::dental(), EchoGenerator).await;
    let reply = chat.handle_turn("how much is a cleaning").await;

    assert_eq!(reply.intent, Intent::Faq);
    assert!(reply.text.contains("What is the cost of a cleaning?"));
    assert!(reply.text.contains("A standard cleaning is $120."));
}

#[tokio::test]
async fn root_canal_question_is_answered_from_the_knowledge_base() {
    let mut chat = chat_service(VocabEmbedder::dental(), EchoGenerator).await;
    let reply = chat.handle_turn("what is a root canal").await;

    assert_eq!(reply.intent, Intent::Knowledge);
    assert!(reply.text.contains("Root Canal Treatment"));
    assert!(reply.text.contains("removes infected pulp"));
}

#[tokio::test]
async fn knowledge_turn_without_relevant_passages_says_so() {
    let mut chat = chat_service(VocabEmbedder::dental(), EchoGenerator).await;
    let reply = chat.handle_turn("tell me about stock markets").await;

    assert_eq!(reply.intent, Intent::Knowledge);
    assert_eq!(reply.text, NO_CONTEXT_REPLY);
}

#[tokio::test]
async fn generation_failure_degrades_to_the_apology_reply() {
    let mut chat = chat_service(VocabEmbedder::dental(), FailingGenerator).await;

    let faq = chat.handle_turn("how much is a cleaning").await;
    assert_eq!(faq.text, APOLOGY_REPLY);

    let knowledge = chat.handle_turn("what is a root canal").await;
    assert_eq!(knowledge.text, APOLOGY_REPLY);

    let fallback = chat.handle_turn("hello there").await;
    assert_eq!(fallback.intent, Intent::Fallback);
    assert_eq!(fallback.text, APOLOGY_REPLY);
}

#[tokio::test]
async fn empty_utterances_get_the_greeting_prompt() {
    let mut chat = chat_service(VocabEmbedder::dental(), EchoGenerator).await;
    let reply = chat.handle_turn("   ").await;
    assert_eq!(reply.text, EMPTY_UTTERANCE_REPLY);
}

#[tokio::test]
async fn faq_and_booking_survive_an_offline_embedding_model() {
    let mut chat = chat_service(OfflineEmbedder, EchoGenerator).await;

    let faq = chat.handle_turn("how much is a cleaning").await;
    assert_eq!(faq.intent, Intent::Faq);
    assert!(faq.text.contains("A standard cleaning is $120."));

    let booking = chat.handle_turn("show me available appointments").await;
    assert_eq!(booking.intent, Intent::Booking);
    assert!(booking.text.contains("[slot 1]"));
}

#[tokio::test]
async fn offline_embeddings_still_answer_via_keyword_fallback() {
    let mut chat = chat_service(OfflineEmbedder, EchoGenerator).await;
    let reply = chat.handle_turn("what is a root canal").await;

    assert_eq!(reply.intent, Intent::Knowledge);
    assert!(reply.text.contains("Root Canal Treatment"));
}

pub mod booking_service;
pub mod chat_service;
pub mod faq_service;
pub mod rag_service;

use anyhow::Context as _;
use application::booking_service::BookingService;
use application::chat_service::{ChatService, ClinicInfo};
use application::faq_service::FaqService;
use application::rag_service::RagService;
use clap::Parser;
use colored::Colorize;
use dialoguer::{theme::ColorfulTheme, Input};
use domain::booking::{BookingOutcome, PatientInfo};
use domain::session::Session;
use infrastructure::booking_store::BookingStore;
use infrastructure::config::Config;
use infrastructure::embedder::GeminiEmbedder;
use infrastructure::gemini::GeminiClient;
use infrastructure::{faq, knowledge};
use shared::confirmation::ask_confirmation;
use shared::telemetry::Telemetry;
use shared::types::Result;

#[derive(Parser)]
#[command(name = "dental-cli")]
#[command(about = "Dental clinic assistant with FAQ answers, appointment booking and RAG")]
pub struct Cli {
    /// Enter interactive chat mode
    #[arg(long)]
    pub chat: bool,

    /// List available appointment slots
    #[arg(long)]
    pub slots: bool,

    /// Book an appointment slot by id
    #[arg(long, value_name = "SLOT_ID")]
    pub book: Option<u32>,

    /// Show clinic and assistant status
    #[arg(long)]
    pub status: bool,

    /// One-shot question for the assistant
    #[arg(trailing_var_arg = true)]
    pub args: Vec<String>,
}

pub struct CliApp {
    chat: ChatService<GeminiEmbedder, GeminiClient>,
    session: Session,
}

impl CliApp {
    /// Build the whole turn context once at startup. Missing data files
    /// are fatal here and reported to the operator; an unreachable
    /// embedding model only degrades retrieval.
    pub async fn bootstrap(config: &Config) -> Result<Self> {
        let knowledge_text = knowledge::load_knowledge(&config.knowledge_file)?;
        let passages = knowledge::build_passages(&knowledge_text);
        let faqs = faq::load_faqs(&config.faqs_file)?;
        let store = BookingStore::open(&config.appointments_file)?;

        let client = GeminiClient::new(config).context("failed to build the api client")?;
        if !client.is_configured() {
            eprintln!(
                "{}",
                "GEMINI_API_KEY is not set; generated replies will be unavailable.".yellow()
            );
        }
        let embedder = GeminiEmbedder::new(client.clone());

        let mut rag = RagService::new(passages, embedder, config.max_chunks, config.min_score);
        eprintln!("Indexing knowledge base...");
        rag.build_index().await;
        if !rag.index_ready() {
            eprintln!(
                "{}",
                "Embedding model unavailable; falling back to keyword retrieval.".yellow()
            );
        }

        let chat = ChatService::new(
            rag,
            FaqService::new(faqs),
            BookingService::new(store),
            client,
            ClinicInfo {
                name: config.clinic_name.clone(),
                address: config.clinic_address.clone(),
                phone: config.clinic_phone.clone(),
            },
        );

        Ok(Self {
            chat,
            session: Session::new(),
        })
    }

    pub async fn run(&mut self, cli: Cli) -> Result<()> {
        if cli.status {
            println!("{}", self.chat.status_summary());
            return Ok(());
        }
        if cli.slots {
            self.print_slots();
            return Ok(());
        }
        if let Some(slot_id) = cli.book {
            return self.book_interactive(slot_id);
        }
        if cli.chat {
            return self.run_chat().await;
        }

        let utterance = cli.args.join(" ");
        if utterance.trim().is_empty() {
            self.run_chat().await
        } else {
            let reply = self.chat.handle_turn(&utterance).await;
            println!("{}", reply.text);
            Ok(())
        }
    }

    async fn run_chat(&mut self) -> Result<()> {
        println!(
            "{}",
            format!(
                "Welcome to {}. Ask about our services, or type 'exit' to quit.",
                self.chat.clinic().name
            )
            .cyan()
        );

        loop {
            let input: String = Input::with_theme(&ColorfulTheme::default())
                .with_prompt("You")
                .allow_empty(true)
                .interact_text()?;
            let trimmed = input.trim();
            if trimmed.eq_ignore_ascii_case("exit") || trimmed.eq_ignore_ascii_case("quit") {
                break;
            }

            let timer = Telemetry::new();
            let reply = self.chat.handle_turn(&input).await;
            println!(
                "{} {}",
                format!("[{}]", reply.intent.label()).blue(),
                reply.text
            );
            eprintln!("{}", format!("({} ms)", timer.elapsed_ms()).dimmed());
            self.session.record(&input, &reply.text, reply.intent.label());
        }
        Ok(())
    }

    fn print_slots(&self) {
        let store = self.chat.booking().store();
        match self.chat.booking().summarize_available(10) {
            Some(listing) => {
                println!("{listing}");
                println!();
                println!("Appointment types: {}", store.available_kinds().join(", "));
                println!("Dates with openings: {}", store.available_dates().join(", "));
            }
            None => println!("No available appointment slots right now."),
        }
    }

    /// Booking outside the chat loop: collect patient details, confirm,
    /// then write through the store.
    fn book_interactive(&mut self, slot_id: u32) -> Result<()> {
        let description = match self.chat.booking().store().slot(slot_id) {
            Some(slot) => format!(
                "{} on {} at {} ({})",
                slot.kind,
                shared::utils::format_date(&slot.date),
                slot.time,
                slot.duration
            ),
            None => {
                println!("{}", format!("No slot with id {slot_id}.").red());
                return Ok(());
            }
        };
        println!("Booking {description}");

        let name: String = Input::new().with_prompt("Your name").interact_text()?;
        let phone: String = Input::new().with_prompt("Phone number").interact_text()?;
        if !ask_confirmation(&format!("Book slot {slot_id} ({description})?"), true)? {
            println!("{}", "Booking cancelled.".yellow());
            return Ok(());
        }

        match self
            .chat
            .booking_mut()
            .book(slot_id, Some(PatientInfo { name, phone }))?
        {
            BookingOutcome::Confirmed(booking) => println!(
                "{}",
                format!("Booked! Your booking id is {}.", booking.booking_id).green()
            ),
            BookingOutcome::SlotUnavailable => println!(
                "{}",
                "That slot is no longer available, sorry.".red()
            ),
            BookingOutcome::SlotNotFound => {
                println!("{}", format!("No slot with id {slot_id}.").red())
            }
        }
        Ok(())
    }
}

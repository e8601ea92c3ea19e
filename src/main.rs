use std::error::Error;
use std::io::{self, BufRead, Write};
use std::path::Path;

use rusqlite::Connection;
use tracing_subscriber::EnvFilter;

use docfolio::config;
use docfolio::db;
use docfolio::ingest;
use docfolio::pipeline::ollama::{OllamaClient, OllamaGateway};
use docfolio::pipeline::session::ChatSession;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config::default_log_filter())),
        )
        .init();

    tracing::info!("{} starting v{}", config::APP_NAME, config::APP_VERSION);

    let args: Vec<String> = std::env::args().collect();
    let result = match args.get(1).map(String::as_str) {
        Some("ingest") => match args.get(2) {
            Some(path) => run_ingest(Path::new(path)),
            None => {
                eprintln!("usage: docfolio ingest <seed.json>");
                std::process::exit(2);
            }
        },
        Some("chat") | None => run_chat(),
        Some(other) => {
            eprintln!("unknown command: {other}");
            eprintln!("usage: docfolio [chat | ingest <seed.json>]");
            std::process::exit(2);
        }
    };

    if let Err(e) = result {
        tracing::error!(error = %e, "Fatal");
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

fn open_store() -> Result<Connection, Box<dyn Error>> {
    std::fs::create_dir_all(config::app_data_dir())?;
    Ok(db::open_database(&config::db_path())?)
}

fn run_ingest(path: &Path) -> Result<(), Box<dyn Error>> {
    let conn = open_store()?;
    let seed = ingest::load_seed_file(path)?;
    let doctor_id = ingest::ingest_seed(&conn, &seed)?;
    println!("Seed ingested (doctor id {doctor_id}).");
    Ok(())
}

fn run_chat() -> Result<(), Box<dyn Error>> {
    let conn = open_store()?;

    let client = OllamaClient::new(
        &config::completion_base_url(),
        config::COMPLETION_TIMEOUT_SECS,
    );
    let gateway = match config::completion_model() {
        Some(model) => OllamaGateway::new(client, model),
        None => OllamaGateway::with_resolved_model(client)?,
    };

    let mut session = ChatSession::new(&conn, &gateway)?;
    println!(
        "Ask about the doctor — model {} (Ctrl-D to quit)",
        gateway.model()
    );

    let stdin = io::stdin();
    let mut input = String::new();
    loop {
        print!("> ");
        io::stdout().flush()?;

        input.clear();
        if stdin.lock().read_line(&mut input)? == 0 {
            break;
        }
        let text = input.trim();
        if text.is_empty() {
            continue;
        }

        let response = session.handle_turn(text)?;
        println!("{response}\n");
    }

    Ok(())
}

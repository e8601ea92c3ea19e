use std::path::PathBuf;

/// Application-level constants
pub const APP_NAME: &str = "Docfolio";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Completion request timeout. Local models can take minutes on CPU.
pub const COMPLETION_TIMEOUT_SECS: u64 = 300;

/// Get the application data directory
/// ~/Docfolio/ on all platforms (user-visible)
pub fn app_data_dir() -> PathBuf {
    let home = dirs::home_dir().expect("Cannot determine home directory");
    home.join("Docfolio")
}

/// Path of the doctor record store
pub fn db_path() -> PathBuf {
    app_data_dir().join("docfolio.db")
}

/// Base URL of the Ollama-compatible completion service.
pub fn completion_base_url() -> String {
    std::env::var("DOCFOLIO_OLLAMA_URL").unwrap_or_else(|_| "http://localhost:11434".to_string())
}

/// Pinned completion model, if any; otherwise the gateway probes the
/// instance for a preferred one.
pub fn completion_model() -> Option<String> {
    std::env::var("DOCFOLIO_MODEL").ok().filter(|m| !m.is_empty())
}

pub fn default_log_filter() -> String {
    "docfolio=info".to_string()
}

use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_MODEL_PATH: &str = "vosk-model-en-us-0.22-lgraph";
pub const DEFAULT_MAILBOX_PATH: &str = "live_output.json";
pub const DEFAULT_POLL_MS: u64 = 400;

/// Process configuration shared by the producer and the dashboard,
/// resolved from the environment with sane defaults.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Directory of the acoustic model for the vosk backend.
    pub model_path: String,
    /// The mailbox slot both processes rendezvous on.
    pub mailbox_path: PathBuf,
    /// Dashboard poll cadence. Values above ~500 ms stop feeling live.
    pub poll_interval: Duration,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            model_path: DEFAULT_MODEL_PATH.to_string(),
            mailbox_path: PathBuf::from(DEFAULT_MAILBOX_PATH),
            poll_interval: Duration::from_millis(DEFAULT_POLL_MS),
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            model_path: std::env::var("CALLSENSE_MODEL_PATH")
                .unwrap_or(defaults.model_path),
            mailbox_path: std::env::var("CALLSENSE_MAILBOX")
                .map(PathBuf::from)
                .unwrap_or(defaults.mailbox_path),
            poll_interval: std::env::var("CALLSENSE_POLL_MS")
                .ok()
                .and_then(|v| v.parse().ok())
                .map(Duration::from_millis)
                .unwrap_or(defaults.poll_interval),
        }
    }
}

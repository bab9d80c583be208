pub mod auth;
pub mod feed;
pub mod listing;
pub mod notification;
pub mod profile;
pub mod session;
pub mod ui;

pub use auth::{AuthFocus, AuthMode, AuthScreenState};
pub use feed::{FeedFocus, FeedState};
pub use listing::{Directory, PaneFocus, PapersState, UploadFocus, UploadForm};
pub use notification::NotificationState;
pub use profile::{ProfileEditFocus, ProfileState};
pub use session::SessionState;
pub use ui::{Screen, UiState};

/// Configuration constants for the application
pub struct AppConfig {
    pub tick_ms: u64,
    pub auth_delay_ms: u64,
    pub notification_timeout_ms: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            tick_ms: 50,
            auth_delay_ms: 1500,
            notification_timeout_ms: 4000,
        }
    }
}

/// Application error types
#[derive(Debug)]
pub enum AppError {
    Validation(String),
    IO(std::io::Error),
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::Validation(msg) => write!(f, "Validation error: {}", msg),
            AppError::IO(err) => write!(f, "IO error: {}", err),
        }
    }
}

impl std::error::Error for AppError {}

pub type AppResult<T> = Result<T, AppError>;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DashboardError {
    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("CBS API returned HTTP status {status}")]
    FetchFailed { status: u16 },

    #[error("API response did not match the expected schema: {message}")]
    SchemaError { message: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {field} = {value:?}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

impl DashboardError {
    /// The single user-visible line for a failed dashboard load. Details stay
    /// in the logs.
    pub fn user_friendly_message(&self) -> &'static str {
        match self {
            DashboardError::FetchFailed { .. } => "Fout bij het ophalen van data van de CBS API.",
            DashboardError::SchemaError { .. } => {
                "De response van de API bevatte geen geldige data."
            }
            _ => "Er is een onverwachte fout opgetreden. Herlaad de pagina om het opnieuw te proberen.",
        }
    }
}

pub type Result<T> = std::result::Result<T, DashboardError>;

use crate::error::*;
use tracing::{error, warn};

pub trait ErrorExt {
    fn log_error(&self) -> &Self;
    fn log_warn(&self) -> &Self;
    fn user_friendly_message(&self) -> String;
    fn error_code(&self) -> String;
}

impl ErrorExt for CoreError {
    fn log_error(&self) -> &Self {
        error!("CoreError: {}", self);
        match self {
            CoreError::AdsApi(e) => {
                error!("Google Ads API error details: {:?}", e);
            }
            CoreError::Config(e) => {
                error!("Configuration error details: {:?}", e);
            }
            _ => {}
        }
        self
    }

    fn log_warn(&self) -> &Self {
        warn!("CoreError (warning): {}", self);
        self
    }

    fn user_friendly_message(&self) -> String {
        match self {
            CoreError::AdsApi(e) => e.user_friendly_message(),
            CoreError::Config(e) => e.user_friendly_message(),
            CoreError::Network(e) => {
                format!("Network error while contacting Google Ads: {e}")
            }
            CoreError::Io(e) => format!("File access error: {e}"),
            CoreError::UnknownCountry { name } => {
                format!("\"{name}\" is not a supported target country")
            }
            CoreError::InvalidInput { message } => format!("Invalid input: {message}"),
            _ => format!("Error: {self}"),
        }
    }

    fn error_code(&self) -> String {
        match self {
            CoreError::AdsApi(e) => e.error_code(),
            CoreError::Config(_) => "CONFIG".to_string(),
            CoreError::Io(_) => "IO".to_string(),
            CoreError::Serialization(_) => "SERIALIZATION".to_string(),
            CoreError::Network(_) => "NETWORK".to_string(),
            CoreError::InvalidInput { .. } => "INVALID_INPUT".to_string(),
            CoreError::UnknownCountry { .. } => "UNKNOWN_COUNTRY".to_string(),
            CoreError::Internal { .. } => "INTERNAL".to_string(),
        }
    }
}

impl AdsApiError {
    pub fn user_friendly_message(&self) -> String {
        match self {
            AdsApiError::AuthenticationFailed { reason } => {
                format!("Google Ads authentication failed: {reason}")
            }
            AdsApiError::QuotaExceeded { details } => {
                format!("Google Ads quota exceeded: {details}")
            }
            AdsApiError::Forbidden { resource } => {
                format!("Access to {resource} was denied by Google Ads")
            }
            AdsApiError::RequestTimeout => {
                "The request to Google Ads timed out".to_string()
            }
            AdsApiError::InvalidResponse { details } => {
                format!("Google Ads returned an unexpected response: {details}")
            }
            AdsApiError::ServerError { status_code } => {
                format!("Google Ads server error (status {status_code})")
            }
            AdsApiError::RequestFailed {
                status_code,
                details,
            } => {
                format!("Google Ads request failed (status {status_code}): {details}")
            }
        }
    }

    pub fn error_code(&self) -> String {
        match self {
            AdsApiError::AuthenticationFailed { .. } => "AUTH".to_string(),
            AdsApiError::QuotaExceeded { .. } => "QUOTA".to_string(),
            AdsApiError::Forbidden { .. } => "FORBIDDEN".to_string(),
            AdsApiError::RequestTimeout => "TIMEOUT".to_string(),
            AdsApiError::InvalidResponse { .. } => "UPSTREAM_FORMAT".to_string(),
            AdsApiError::ServerError { .. } => "SERVER_ERROR".to_string(),
            AdsApiError::RequestFailed { .. } => "REQUEST_FAILED".to_string(),
        }
    }
}

impl ConfigError {
    pub fn user_friendly_message(&self) -> String {
        match self {
            ConfigError::FileNotFound { path } => {
                format!("Secrets file not found at {path}")
            }
            ConfigError::MissingField { field } => {
                format!("Secrets file is missing the \"{field}\" field")
            }
            _ => format!("Configuration error: {self}"),
        }
    }
}

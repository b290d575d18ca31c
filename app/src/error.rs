//! Application error handling
//!
//! Validation failures are not errors here: they are field-scoped, shown
//! inline and carried in [`fittracker_shared::FieldErrors`]. This module
//! covers what is left.

use thiserror::Error;

use crate::onboarding::OnboardingStep;

/// A settings commit that could not be applied
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SaveError {
    #[error("settings cannot be saved before onboarding is complete")]
    NotOnboarded,
}

/// Application error type
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Save failed: {0}")]
    Save(#[from] SaveError),

    #[error("Onboarding cannot finish from step {0:?}")]
    OnboardingIncomplete(OnboardingStep),

    #[error("Onboarding cannot finish without a name")]
    NameRequired,

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Invalid intent: {0}")]
    Intent(#[from] serde_json::Error),

    #[error("Application runtime has shut down")]
    RuntimeClosed,
}

/// Result type alias for application operations
pub type AppResult<T> = Result<T, AppError>;

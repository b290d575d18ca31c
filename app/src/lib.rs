//! FitTracker application core
//!
//! The view-flow controller on top of the shared user state model:
//! onboarding wizard, settings editor, dashboard and profile view models,
//! transient notices, plus the config and logging a host needs to run it.

pub mod config;
pub mod controller;
pub mod error;
pub mod logging;
pub mod notice;
pub mod onboarding;
pub mod prompt;
#[cfg(feature = "runtime")]
pub mod runtime;
pub mod settings;
pub mod views;

pub use controller::{AppController, AppSnapshot, Effect, Intent, NavAction, View, ViewKind};
pub use error::{AppError, AppResult, SaveError};
pub use prompt::{Prompt, RecordingPrompt};

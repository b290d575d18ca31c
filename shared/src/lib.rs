//! FitTracker Shared Library
//!
//! The user state model and everything derived from it: actions and the
//! reducer, form drafts, validation, display helpers and unit handling.
//! Used by the application controller and the WASM bindings.

pub mod errors;
pub mod forms;
pub mod health_metrics;
pub mod labels;
pub mod models;
pub mod store;
pub mod units;
pub mod validation;

// Re-export commonly used items
pub use errors::*;
pub use forms::{FieldChange, FormDraft, FormField};
pub use health_metrics::{bmi, bmi_reading, BmiCategory, BmiReading};
pub use labels::{humanize, initials, LabelCase};
pub use models::*;
pub use store::{UserAction, UserStore};
pub use units::{format_height, format_weight, FeetInches, HeightUnit, WeightUnit};
pub use validation::{validate, FieldErrors, ValidationError, ValidationScope};

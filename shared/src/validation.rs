//! Input validation functions
//!
//! Field checks return `Result<(), String>` so they can be reused on their
//! own; [`validate`] runs the checks for one form scope over a draft and
//! collects the failures per field.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::forms::{FormDraft, FormField};

pub const AGE_RANGE: (u32, u32) = (13, 120);
pub const HEIGHT_RANGE_CM: (f64, f64) = (100.0, 250.0);
pub const WEIGHT_RANGE_KG: (f64, f64) = (30.0, 300.0);
pub const WEEKLY_WORKOUTS_RANGE: (u8, u8) = (1, 7);
pub const REST_TIME_RANGE_SECS: (u16, u16) = (30, 300);
pub const REST_TIME_STEP_SECS: u16 = 15;

/// Which group of fields a save covers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValidationScope {
    Profile,
    Goals,
    Preferences,
}

fn in_range(value: f64, (min, max): (f64, f64)) -> bool {
    value.is_finite() && value >= min && value <= max
}

/// Name must contain something other than whitespace
pub fn validate_name(name: &str) -> Result<(), String> {
    if name.trim().is_empty() {
        return Err("Name is required".to_string());
    }
    Ok(())
}

/// Validate age in years
pub fn validate_age(age: u32) -> Result<(), String> {
    if age < AGE_RANGE.0 || age > AGE_RANGE.1 {
        return Err(format!(
            "Age must be between {} and {}",
            AGE_RANGE.0, AGE_RANGE.1
        ));
    }
    Ok(())
}

/// Validate height value (in cm)
pub fn validate_height_cm(height_cm: f64) -> Result<(), String> {
    if !in_range(height_cm, HEIGHT_RANGE_CM) {
        return Err("Height must be between 100-250 cm".to_string());
    }
    Ok(())
}

/// Validate weight value (in kg)
pub fn validate_weight(weight_kg: f64) -> Result<(), String> {
    if !in_range(weight_kg, WEIGHT_RANGE_KG) {
        return Err("Weight must be between 30-300 kg".to_string());
    }
    Ok(())
}

/// Same bounds as body weight, different message
pub fn validate_target_weight(weight_kg: f64) -> Result<(), String> {
    if !in_range(weight_kg, WEIGHT_RANGE_KG) {
        return Err("Target weight must be between 30-300 kg".to_string());
    }
    Ok(())
}

pub fn validate_weekly_workouts(count: u8) -> Result<(), String> {
    if count < WEEKLY_WORKOUTS_RANGE.0 || count > WEEKLY_WORKOUTS_RANGE.1 {
        return Err("Weekly workouts must be between 1 and 7".to_string());
    }
    Ok(())
}

/// Rest time is picked on a slider: 30s to 5min in 15s steps
pub fn validate_rest_time(secs: u16) -> Result<(), String> {
    if secs < REST_TIME_RANGE_SECS.0
        || secs > REST_TIME_RANGE_SECS.1
        || secs % REST_TIME_STEP_SECS != 0
    {
        return Err("Rest time must be between 30-300 seconds in 15 second steps".to_string());
    }
    Ok(())
}

// ============================================================================
// User-Friendly Field Labels
// ============================================================================

/// Map form fields to user-friendly display labels
pub fn get_field_display_label(field: FormField) -> &'static str {
    match field {
        FormField::Name => "Name",
        FormField::Age => "Age",
        FormField::Height => "Height",
        FormField::Weight => "Current Weight",
        FormField::Gender => "Gender",
        FormField::ActivityLevel => "Activity Level",
        FormField::PrimaryGoal => "Primary Goal",
        FormField::TargetWeight => "Target Weight",
        FormField::WeeklyWorkouts => "Weekly Workout Goal",
        FormField::Timeframe => "Timeframe",
        FormField::Units => "Units",
        FormField::DefaultRestTime => "Default Rest Time",
        FormField::WorkoutReminders => "Workout Reminders",
    }
}

/// Validation error with field context
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    pub field: FormField,
    pub message: String,
    pub display_label: String,
}

impl ValidationError {
    pub fn new(field: FormField, message: &str) -> Self {
        Self {
            field,
            message: message.to_string(),
            display_label: get_field_display_label(field).to_string(),
        }
    }

    /// Format as user-friendly error message
    pub fn user_message(&self) -> String {
        format!("{}: {}", self.display_label, self.message)
    }
}

/// Per-field error messages; empty when the draft is valid
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<FormField, String>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn get(&self, field: FormField) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    pub fn contains(&self, field: FormField) -> bool {
        self.0.contains_key(&field)
    }

    pub fn insert(&mut self, field: FormField, message: impl Into<String>) {
        self.0.insert(field, message.into());
    }

    /// Drop the error for one field, returning whether there was one
    pub fn clear(&mut self, field: FormField) -> bool {
        self.0.remove(&field).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = (FormField, &str)> {
        self.0.iter().map(|(field, msg)| (*field, msg.as_str()))
    }

    pub fn to_validation_errors(&self) -> Vec<ValidationError> {
        self.iter()
            .map(|(field, msg)| ValidationError::new(field, msg))
            .collect()
    }

    fn check(&mut self, field: FormField, result: Result<(), String>) {
        if let Err(message) = result {
            self.insert(field, message);
        }
    }

    fn check_optional<T>(
        &mut self,
        field: FormField,
        value: Option<T>,
        rule: impl FnOnce(T) -> Result<(), String>,
    ) {
        if let Some(value) = value {
            self.check(field, rule(value));
        }
    }
}

/// Validate the fields of one scope. Fields outside the scope are ignored.
pub fn validate(draft: &FormDraft, scope: ValidationScope) -> FieldErrors {
    let mut errors = FieldErrors::new();
    match scope {
        ValidationScope::Profile => {
            errors.check(FormField::Name, validate_name(&draft.name));
            errors.check_optional(FormField::Age, draft.age, validate_age);
            errors.check_optional(FormField::Height, draft.height, validate_height_cm);
            errors.check_optional(FormField::Weight, draft.weight, validate_weight);
        }
        ValidationScope::Goals => {
            errors.check_optional(
                FormField::TargetWeight,
                draft.target_weight,
                validate_target_weight,
            );
            errors.check(
                FormField::WeeklyWorkouts,
                validate_weekly_workouts(draft.weekly_workouts),
            );
        }
        ValidationScope::Preferences => {
            errors.check(
                FormField::DefaultRestTime,
                validate_rest_time(draft.default_rest_time),
            );
        }
    }
    errors
}

//! Data models for the FitTracker user state
//!
//! The user record is split into three groups (profile, goals, preferences)
//! plus the onboarding flag. Each group has a matching patch type used for
//! shallow merges: a `None` patch field leaves the stored value alone.

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::ModelError;

/// Values filled in at onboarding completion when the user skipped them
pub const DEFAULT_HEIGHT_CM: f64 = 170.0;
pub const DEFAULT_WEIGHT_KG: f64 = 70.0;
pub const DEFAULT_AGE_YEARS: u32 = 30;

pub const DEFAULT_WEEKLY_WORKOUTS: u8 = 3;
pub const DEFAULT_REST_TIME_SECS: u16 = 90;

// ============================================================================
// Enumerations
// ============================================================================

/// Self-reported gender
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    Male,
    Female,
    Other,
}

impl Gender {
    pub const ALL: [Gender; 3] = [Gender::Male, Gender::Female, Gender::Other];

    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
            Gender::Other => "other",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
            Gender::Other => "Other",
        }
    }
}

/// Self-reported exercise frequency
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ActivityLevel {
    /// Little or no exercise
    Sedentary,
    /// Light exercise 1-3 days/week
    #[default]
    LightlyActive,
    /// Moderate exercise 3-5 days/week
    ModeratelyActive,
    /// Hard exercise 6-7 days/week
    VeryActive,
    /// Very hard exercise, physical job
    ExtremelyActive,
}

impl ActivityLevel {
    pub const ALL: [ActivityLevel; 5] = [
        ActivityLevel::Sedentary,
        ActivityLevel::LightlyActive,
        ActivityLevel::ModeratelyActive,
        ActivityLevel::VeryActive,
        ActivityLevel::ExtremelyActive,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ActivityLevel::Sedentary => "sedentary",
            ActivityLevel::LightlyActive => "lightly_active",
            ActivityLevel::ModeratelyActive => "moderately_active",
            ActivityLevel::VeryActive => "very_active",
            ActivityLevel::ExtremelyActive => "extremely_active",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ActivityLevel::Sedentary => "Sedentary",
            ActivityLevel::LightlyActive => "Lightly Active",
            ActivityLevel::ModeratelyActive => "Moderately Active",
            ActivityLevel::VeryActive => "Very Active",
            ActivityLevel::ExtremelyActive => "Extremely Active",
        }
    }

    /// Get a human-readable description
    pub fn description(&self) -> &'static str {
        match self {
            ActivityLevel::Sedentary => "little/no exercise",
            ActivityLevel::LightlyActive => "light exercise 1-3 days/week",
            ActivityLevel::ModeratelyActive => "moderate exercise 3-5 days/week",
            ActivityLevel::VeryActive => "hard exercise 6-7 days/week",
            ActivityLevel::ExtremelyActive => "very hard exercise, physical job",
        }
    }
}

/// The fitness objective chosen during onboarding
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PrimaryGoal {
    LoseWeight,
    GainMuscle,
    GeneralFitness,
}

impl PrimaryGoal {
    pub const ALL: [PrimaryGoal; 3] = [
        PrimaryGoal::LoseWeight,
        PrimaryGoal::GainMuscle,
        PrimaryGoal::GeneralFitness,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PrimaryGoal::LoseWeight => "lose_weight",
            PrimaryGoal::GainMuscle => "gain_muscle",
            PrimaryGoal::GeneralFitness => "general_fitness",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PrimaryGoal::LoseWeight => "Lose Weight",
            PrimaryGoal::GainMuscle => "Gain Muscle",
            PrimaryGoal::GeneralFitness => "General Fitness",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            PrimaryGoal::LoseWeight => "Reduce body weight and body fat",
            PrimaryGoal::GainMuscle => "Build strength and muscle mass",
            PrimaryGoal::GeneralFitness => "Stay healthy and active",
        }
    }
}

/// How long the user gives themselves to reach the goal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Timeframe {
    #[serde(rename = "1_month")]
    OneMonth,
    #[default]
    #[serde(rename = "3_months")]
    ThreeMonths,
    #[serde(rename = "6_months")]
    SixMonths,
    #[serde(rename = "1_year")]
    OneYear,
}

impl Timeframe {
    pub const ALL: [Timeframe; 4] = [
        Timeframe::OneMonth,
        Timeframe::ThreeMonths,
        Timeframe::SixMonths,
        Timeframe::OneYear,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Timeframe::OneMonth => "1_month",
            Timeframe::ThreeMonths => "3_months",
            Timeframe::SixMonths => "6_months",
            Timeframe::OneYear => "1_year",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Timeframe::OneMonth => "1 Month",
            Timeframe::ThreeMonths => "3 Months",
            Timeframe::SixMonths => "6 Months",
            Timeframe::OneYear => "1 Year",
        }
    }
}

/// Measurement system preference
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Units {
    #[default]
    Metric,
    Imperial,
}

impl Units {
    pub const ALL: [Units; 2] = [Units::Metric, Units::Imperial];

    pub fn as_str(&self) -> &'static str {
        match self {
            Units::Metric => "metric",
            Units::Imperial => "imperial",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Units::Metric => "Metric (kg, cm)",
            Units::Imperial => "Imperial (lbs, ft)",
        }
    }
}

/// Colour theme; stored but not applied anywhere yet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub const ALL: [Theme; 2] = [Theme::Light, Theme::Dark];

    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }
}

macro_rules! impl_wire_name {
    ($ty:ty, $kind:literal) => {
        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $ty {
            type Err = ModelError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let normalized = s.trim().to_lowercase();
                <$ty>::ALL
                    .iter()
                    .copied()
                    .find(|v| v.as_str() == normalized)
                    .ok_or_else(|| ModelError::unknown($kind, s))
            }
        }
    };
}

impl_wire_name!(Gender, "gender");
impl_wire_name!(ActivityLevel, "activity level");
impl_wire_name!(PrimaryGoal, "primary goal");
impl_wire_name!(Timeframe, "timeframe");
impl_wire_name!(Units, "units");
impl_wire_name!(Theme, "theme");

// ============================================================================
// User Records
// ============================================================================

/// Who the user is
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub name: Option<String>,
    pub age: Option<u32>,
    /// Height in centimeters
    pub height: Option<f64>,
    /// Weight in kilograms
    pub weight: Option<f64>,
    pub gender: Option<Gender>,
    pub activity_level: ActivityLevel,
}

/// What the user wants to achieve
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserGoals {
    pub primary_goal: Option<PrimaryGoal>,
    /// Target weight in kilograms
    pub target_weight: Option<f64>,
    pub weekly_workouts: u8,
    pub timeframe: Timeframe,
}

impl Default for UserGoals {
    fn default() -> Self {
        Self {
            primary_goal: None,
            target_weight: None,
            weekly_workouts: DEFAULT_WEEKLY_WORKOUTS,
            timeframe: Timeframe::default(),
        }
    }
}

/// How the app should behave for the user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserPreferences {
    pub units: Units,
    pub theme: Theme,
    /// Rest between sets, in seconds
    pub default_rest_time: u16,
    pub workout_reminders: bool,
}

impl Default for UserPreferences {
    fn default() -> Self {
        Self {
            units: Units::default(),
            theme: Theme::default(),
            default_rest_time: DEFAULT_REST_TIME_SECS,
            workout_reminders: true,
        }
    }
}

/// The canonical user record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct UserState {
    pub profile: UserProfile,
    pub goals: UserGoals,
    pub preferences: UserPreferences,
    pub is_onboarded: bool,
    pub loading: bool,
    pub error: Option<String>,
}

// ============================================================================
// Patches
// ============================================================================

/// Distinguishes an explicit `null` from a missing key
fn double_option<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

/// Partial update for [`UserProfile`]
///
/// Nullable fields take a double option: `Some(None)` clears the value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ProfilePatch {
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "double_option")]
    pub name: Option<Option<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "double_option")]
    pub age: Option<Option<u32>>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "double_option")]
    pub height: Option<Option<f64>>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "double_option")]
    pub weight: Option<Option<f64>>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "double_option")]
    pub gender: Option<Option<Gender>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub activity_level: Option<ActivityLevel>,
}

/// Partial update for [`UserGoals`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct GoalsPatch {
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "double_option")]
    pub primary_goal: Option<Option<PrimaryGoal>>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "double_option")]
    pub target_weight: Option<Option<f64>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weekly_workouts: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeframe: Option<Timeframe>,
}

impl GoalsPatch {
    /// A patch that sets every goal field to its default
    pub fn defaults() -> Self {
        let goals = UserGoals::default();
        Self {
            primary_goal: Some(goals.primary_goal),
            target_weight: Some(goals.target_weight),
            weekly_workouts: Some(goals.weekly_workouts),
            timeframe: Some(goals.timeframe),
        }
    }
}

/// Partial update for [`UserPreferences`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct PreferencesPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub units: Option<Units>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub theme: Option<Theme>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_rest_time: Option<u16>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub workout_reminders: Option<bool>,
}

fn overwrite<T>(slot: &mut T, update: Option<T>) {
    if let Some(value) = update {
        *slot = value;
    }
}

impl UserProfile {
    /// Overwrite only the fields present in `patch`
    pub fn merge(&mut self, patch: ProfilePatch) {
        overwrite(&mut self.name, patch.name);
        overwrite(&mut self.age, patch.age);
        overwrite(&mut self.height, patch.height);
        overwrite(&mut self.weight, patch.weight);
        overwrite(&mut self.gender, patch.gender);
        overwrite(&mut self.activity_level, patch.activity_level);
    }

    /// Fill unset (or zero) height, weight and age with population averages.
    ///
    /// Populated values are never touched.
    pub fn fill_defaults(&mut self) {
        if self.height.map_or(true, |h| h == 0.0) {
            self.height = Some(DEFAULT_HEIGHT_CM);
        }
        if self.weight.map_or(true, |w| w == 0.0) {
            self.weight = Some(DEFAULT_WEIGHT_KG);
        }
        if self.age.map_or(true, |a| a == 0) {
            self.age = Some(DEFAULT_AGE_YEARS);
        }
    }
}

impl UserGoals {
    /// Overwrite only the fields present in `patch`
    pub fn merge(&mut self, patch: GoalsPatch) {
        overwrite(&mut self.primary_goal, patch.primary_goal);
        overwrite(&mut self.target_weight, patch.target_weight);
        overwrite(&mut self.weekly_workouts, patch.weekly_workouts);
        overwrite(&mut self.timeframe, patch.timeframe);
    }
}

impl UserPreferences {
    /// Overwrite only the fields present in `patch`
    pub fn merge(&mut self, patch: PreferencesPatch) {
        overwrite(&mut self.units, patch.units);
        overwrite(&mut self.theme, patch.theme);
        overwrite(&mut self.default_rest_time, patch.default_rest_time);
        overwrite(&mut self.workout_reminders, patch.workout_reminders);
    }
}

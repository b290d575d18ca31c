//! First-run onboarding wizard
//!
//! A linear five-step flow over a local [`FormDraft`]. Nothing reaches the
//! user store until "Get Started" on the last step, which dispatches the
//! three merges and the completion action together.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use fittracker_shared::{
    humanize, FieldChange, FormDraft, FormField, LabelCase, UserAction, UserStore,
};

use crate::error::{AppError, AppResult};
use crate::prompt::Prompt;

pub const NAME_REQUIRED_ALERT: &str = "Please enter your name to continue";

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum OnboardingStep {
    #[default]
    Welcome,
    AboutYou,
    Goals,
    Preferences,
    Complete,
}

impl OnboardingStep {
    pub const ALL: [OnboardingStep; 5] = [
        OnboardingStep::Welcome,
        OnboardingStep::AboutYou,
        OnboardingStep::Goals,
        OnboardingStep::Preferences,
        OnboardingStep::Complete,
    ];

    pub fn index(&self) -> usize {
        *self as usize
    }

    pub fn title(&self) -> &'static str {
        match self {
            OnboardingStep::Welcome => "Welcome",
            OnboardingStep::AboutYou => "About You",
            OnboardingStep::Goals => "Your Goals",
            OnboardingStep::Preferences => "Preferences",
            OnboardingStep::Complete => "Complete",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            OnboardingStep::Welcome => "Let's get to know you",
            OnboardingStep::AboutYou => "Basic information",
            OnboardingStep::Goals => "What do you want to achieve?",
            OnboardingStep::Preferences => "Customize your experience",
            OnboardingStep::Complete => "You're all set!",
        }
    }

    pub fn next(&self) -> Option<OnboardingStep> {
        Self::ALL.get(self.index() + 1).copied()
    }

    pub fn previous(&self) -> Option<OnboardingStep> {
        self.index().checked_sub(1).map(|i| Self::ALL[i])
    }

    pub fn is_last(&self) -> bool {
        self.next().is_none()
    }
}

/// What happened on a "Next" press
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepMove {
    Advanced(OnboardingStep),
    /// Name missing on the welcome step; the user was alerted
    Blocked,
    /// Already on the last step
    AtEnd,
}

/// Recap shown on the final step
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OnboardingSummary {
    pub greeting: String,
    pub goal: String,
    pub weekly_target: String,
    pub rest_time: String,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct OnboardingWizard {
    step: OnboardingStep,
    draft: FormDraft,
}

impl OnboardingWizard {
    /// Always starts blank, even after a reset with data still in the store
    pub fn new() -> Self {
        Self::default()
    }

    pub fn step(&self) -> OnboardingStep {
        self.step
    }

    pub fn draft(&self) -> &FormDraft {
        &self.draft
    }

    pub fn change_field(&mut self, change: FieldChange) -> FormField {
        self.draft.apply(change)
    }

    pub fn next(&mut self, prompt: &mut dyn Prompt) -> StepMove {
        if self.step == OnboardingStep::Welcome && !self.draft.has_name() {
            debug!("onboarding blocked: name missing");
            prompt.alert(NAME_REQUIRED_ALERT);
            return StepMove::Blocked;
        }

        match self.step.next() {
            Some(step) => {
                self.step = step;
                debug!(step = ?step, "onboarding advanced");
                StepMove::Advanced(step)
            }
            None => StepMove::AtEnd,
        }
    }

    /// Returns whether the step changed
    pub fn previous(&mut self) -> bool {
        match self.step.previous() {
            Some(step) => {
                self.step = step;
                true
            }
            None => false,
        }
    }

    /// Width of the progress bar, 20 to 100
    pub fn progress_percent(&self) -> u8 {
        let total = OnboardingStep::ALL.len();
        ((self.step.index() + 1) * 100 / total) as u8
    }

    /// The actions "Get Started" dispatches, in order
    pub fn completion_actions(&self) -> [UserAction; 4] {
        [
            UserAction::SetProfile(self.draft.profile_patch()),
            UserAction::SetGoals(self.draft.goals_patch()),
            UserAction::SetPreferences(self.draft.preferences_patch()),
            UserAction::CompleteOnboarding,
        ]
    }

    /// Jump back to the first step, keeping the draft
    pub fn restart(&mut self) {
        self.step = OnboardingStep::Welcome;
    }

    /// Commit the draft and finish onboarding. Only valid on the last step
    /// with a non-blank name.
    pub fn complete(&self, store: &mut UserStore) -> AppResult<()> {
        if !self.step.is_last() {
            return Err(AppError::OnboardingIncomplete(self.step));
        }
        if !self.draft.has_name() {
            return Err(AppError::NameRequired);
        }
        store.dispatch_all(self.completion_actions());
        info!(revision = store.revision(), "onboarding completed");
        Ok(())
    }

    pub fn summary(&self) -> OnboardingSummary {
        let goal = self
            .draft
            .primary_goal
            .map(|g| humanize(g.as_str(), LabelCase::Upper))
            .unwrap_or_else(|| "Not specified".to_string());

        OnboardingSummary {
            greeting: format!("You're all set, {}!", self.draft.name),
            goal,
            weekly_target: format!("{} workouts", self.draft.weekly_workouts),
            rest_time: format!("{}s between sets", self.draft.default_rest_time),
        }
    }
}

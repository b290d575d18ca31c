//! Settings editor
//!
//! Three tabs over one [`FormDraft`] prefilled from the canonical state.
//! Saving validates and commits only the active tab; the other tabs' draft
//! values stay local until their own save.

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use fittracker_shared::{
    validate, FieldChange, FieldErrors, FormDraft, FormField, GoalsPatch, UserAction, UserState,
    UserStore, ValidationScope,
};

use crate::error::SaveError;
use crate::notice::NoticeKind;
use crate::prompt::Prompt;

pub const FIX_ERRORS_MESSAGE: &str = "Please fix the errors above";
pub const SAVED_MESSAGE: &str = "Settings saved successfully!";
pub const SAVE_FAILED_MESSAGE: &str = "Failed to save settings";
pub const GOALS_RESET_MESSAGE: &str = "Goals reset successfully!";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SettingsTab {
    #[default]
    Profile,
    Goals,
    Preferences,
}

impl SettingsTab {
    pub const ALL: [SettingsTab; 3] = [
        SettingsTab::Profile,
        SettingsTab::Goals,
        SettingsTab::Preferences,
    ];

    pub fn scope(&self) -> ValidationScope {
        match self {
            SettingsTab::Profile => ValidationScope::Profile,
            SettingsTab::Goals => ValidationScope::Goals,
            SettingsTab::Preferences => ValidationScope::Preferences,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SettingsTab::Profile => "Profile",
            SettingsTab::Goals => "Goals",
            SettingsTab::Preferences => "Preferences",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResetKind {
    /// Back to onboarding
    All,
    /// Goals to their defaults
    Goals,
}

impl ResetKind {
    pub fn confirm_message(&self) -> &'static str {
        match self {
            ResetKind::All => {
                "This will reset all your data and return you to onboarding. Are you sure?"
            }
            ResetKind::Goals => "This will reset your goals to default values. Are you sure?",
        }
    }
}

/// Result of a save or reset request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingsOutcome {
    Saved,
    /// Validation failed; errors are on the editor
    Invalid,
    /// The commit itself failed
    Failed,
    GoalsReset,
    /// Onboarding was reset; the host should leave the editor
    ResetAll,
    /// The user declined a confirmation
    Declined,
}

impl SettingsOutcome {
    /// Banner to show: kind, text and whether it auto-dismisses
    pub fn notice(&self) -> Option<(NoticeKind, &'static str, bool)> {
        match self {
            SettingsOutcome::Saved => Some((NoticeKind::Success, SAVED_MESSAGE, true)),
            SettingsOutcome::Invalid => Some((NoticeKind::Error, FIX_ERRORS_MESSAGE, false)),
            SettingsOutcome::Failed => Some((NoticeKind::Error, SAVE_FAILED_MESSAGE, true)),
            SettingsOutcome::GoalsReset => Some((NoticeKind::Success, GOALS_RESET_MESSAGE, true)),
            SettingsOutcome::ResetAll | SettingsOutcome::Declined => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SettingsEditor {
    tab: SettingsTab,
    draft: FormDraft,
    errors: FieldErrors,
}

impl SettingsEditor {
    pub fn new(state: &UserState) -> Self {
        Self {
            tab: SettingsTab::default(),
            draft: FormDraft::from_state(state),
            errors: FieldErrors::new(),
        }
    }

    pub fn tab(&self) -> SettingsTab {
        self.tab
    }

    pub fn draft(&self) -> &FormDraft {
        &self.draft
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    /// Switching tabs keeps the draft and any errors
    pub fn select_tab(&mut self, tab: SettingsTab) {
        self.tab = tab;
    }

    pub fn change_field(&mut self, change: FieldChange) -> FormField {
        let field = self.draft.apply(change);
        self.errors.clear(field);
        field
    }

    /// Validate the active tab and commit it
    pub fn save(&mut self, store: &mut UserStore) -> SettingsOutcome {
        self.errors = validate(&self.draft, self.tab.scope());
        if !self.errors.is_empty() {
            for error in self.errors.to_validation_errors() {
                debug!(tab = ?self.tab, field = %error.field, "{}", error.user_message());
            }
            return SettingsOutcome::Invalid;
        }

        match self.commit(store) {
            Ok(()) => {
                info!(tab = ?self.tab, revision = store.revision(), "settings saved");
                SettingsOutcome::Saved
            }
            Err(_) => {
                warn!(tab = ?self.tab, "settings save failed");
                SettingsOutcome::Failed
            }
        }
    }

    /// Dispatch the active tab's patch
    pub fn commit(&self, store: &mut UserStore) -> Result<(), SaveError> {
        if !store.is_onboarded() {
            return Err(SaveError::NotOnboarded);
        }

        let action = match self.tab {
            SettingsTab::Profile => UserAction::SetProfile(self.draft.profile_patch()),
            SettingsTab::Goals => UserAction::SetGoals(self.draft.goals_patch()),
            SettingsTab::Preferences => {
                UserAction::SetPreferences(self.draft.preferences_patch())
            }
        };
        store.dispatch(action);
        Ok(())
    }

    pub fn reset(
        &mut self,
        kind: ResetKind,
        prompt: &mut dyn Prompt,
        store: &mut UserStore,
    ) -> SettingsOutcome {
        if !prompt.confirm(kind.confirm_message()) {
            debug!(kind = ?kind, "reset declined");
            return SettingsOutcome::Declined;
        }

        match kind {
            ResetKind::All => {
                store.dispatch(UserAction::ResetOnboarding);
                info!("onboarding reset");
                SettingsOutcome::ResetAll
            }
            ResetKind::Goals => {
                store.dispatch(UserAction::SetGoals(GoalsPatch::defaults()));
                self.draft.reset_goals();
                info!("goals reset");
                SettingsOutcome::GoalsReset
            }
        }
    }
}

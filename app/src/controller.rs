//! View-flow controller
//!
//! [`AppController`] owns the user store, the visible view with its local
//! state, and the notice board. Every user interaction arrives as an
//! [`Intent`] through [`AppController::handle`]; the rendering layer reads
//! an [`AppSnapshot`] back.

use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

use fittracker_shared::{
    FieldChange, FieldErrors, FormDraft, UserAction, UserState, UserStore,
};

use crate::config::AppConfig;
use crate::error::{AppError, AppResult};
use crate::notice::{Notice, NoticeBoard, NoticeId, NoticeKind};
use crate::onboarding::{
    OnboardingStep, OnboardingSummary, OnboardingWizard, NAME_REQUIRED_ALERT,
};
use crate::prompt::Prompt;
use crate::settings::{ResetKind, SettingsEditor, SettingsOutcome, SettingsTab};
use crate::views::{DashboardView, ProfileView};

// ============================================================================
// Views and intents
// ============================================================================

/// The visible screen and its local state
#[derive(Debug, Clone, PartialEq)]
pub enum View {
    Onboarding(OnboardingWizard),
    Dashboard,
    Settings(SettingsEditor),
    Profile,
}

/// Data-free view tag for logs and assertions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViewKind {
    Onboarding,
    Dashboard,
    Settings,
    Profile,
}

impl View {
    /// Entry view for a store: onboarding until it has been completed
    pub fn initial(state: &UserState) -> Self {
        if state.is_onboarded {
            View::Dashboard
        } else {
            View::Onboarding(OnboardingWizard::new())
        }
    }

    pub fn kind(&self) -> ViewKind {
        match self {
            View::Onboarding(_) => ViewKind::Onboarding,
            View::Dashboard => ViewKind::Dashboard,
            View::Settings(_) => ViewKind::Settings,
            View::Profile => ViewKind::Profile,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NavAction {
    ViewProfile,
    OpenSettings,
    Back,
    Edit,
    /// Reset onboarding after confirmation
    Reset,
}

/// A user interaction, as sent by the rendering layer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Intent {
    EditOnboarding { change: FieldChange },
    OnboardingNext,
    OnboardingPrevious,
    GetStarted,
    SelectTab { tab: SettingsTab },
    EditSettings { change: FieldChange },
    SaveSettings,
    ResetSettings { kind: ResetKind },
    Navigate { action: NavAction },
    DismissNotice { id: NoticeId },
}

impl Intent {
    pub fn from_json(json: &str) -> AppResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    fn name(&self) -> &'static str {
        match self {
            Intent::EditOnboarding { .. } => "edit_onboarding",
            Intent::OnboardingNext => "onboarding_next",
            Intent::OnboardingPrevious => "onboarding_previous",
            Intent::GetStarted => "get_started",
            Intent::SelectTab { .. } => "select_tab",
            Intent::EditSettings { .. } => "edit_settings",
            Intent::SaveSettings => "save_settings",
            Intent::ResetSettings { .. } => "reset_settings",
            Intent::Navigate { .. } => "navigate",
            Intent::DismissNotice { .. } => "dismiss_notice",
        }
    }
}

/// Follow-up work for the host after an intent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "effect", rename_all = "snake_case")]
pub enum Effect {
    #[default]
    None,
    /// Send `DismissNotice { id }` after the delay
    ScheduleDismiss { id: NoticeId, after_ms: u64 },
}

// ============================================================================
// Snapshots
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "view", rename_all = "snake_case")]
pub enum ViewSnapshot {
    #[serde(rename_all = "camelCase")]
    Onboarding {
        step: OnboardingStep,
        title: String,
        description: String,
        progress_percent: u8,
        draft: FormDraft,
        /// Only on the last step
        summary: Option<OnboardingSummary>,
    },
    Dashboard {
        dashboard: DashboardView,
    },
    Settings {
        tab: SettingsTab,
        draft: FormDraft,
        errors: FieldErrors,
    },
    Profile {
        profile: ProfileView,
    },
}

/// Everything the rendering layer needs for one frame
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppSnapshot {
    pub revision: u64,
    pub user: UserState,
    pub view: ViewSnapshot,
    pub notice: Option<Notice>,
}

impl AppSnapshot {
    pub fn kind(&self) -> ViewKind {
        match self.view {
            ViewSnapshot::Onboarding { .. } => ViewKind::Onboarding,
            ViewSnapshot::Dashboard { .. } => ViewKind::Dashboard,
            ViewSnapshot::Settings { .. } => ViewKind::Settings,
            ViewSnapshot::Profile { .. } => ViewKind::Profile,
        }
    }
}

// ============================================================================
// Controller
// ============================================================================

pub struct AppController {
    store: UserStore,
    view: View,
    notices: NoticeBoard,
    debug_panel: bool,
}

impl AppController {
    pub fn new(store: UserStore, config: &AppConfig) -> Self {
        let view = View::initial(store.state());
        Self {
            store,
            view,
            notices: NoticeBoard::new(config.notice_dismiss()),
            debug_panel: config.debug_panel_enabled(),
        }
    }

    pub fn state(&self) -> &UserState {
        self.store.state()
    }

    pub fn store(&self) -> &UserStore {
        &self.store
    }

    pub fn view(&self) -> &View {
        &self.view
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notices.current()
    }

    /// Apply one intent. Intents that do not fit the current view are ignored.
    #[instrument(skip_all, fields(intent = intent.name(), view = ?self.view.kind()))]
    pub fn handle(&mut self, intent: Intent, prompt: &mut dyn Prompt) -> Effect {
        let mut next_view = None;
        let mut outcome = None;

        match (&mut self.view, intent) {
            (View::Onboarding(wizard), Intent::EditOnboarding { change }) => {
                wizard.change_field(change);
            }
            (View::Onboarding(wizard), Intent::OnboardingNext) => {
                wizard.next(prompt);
            }
            (View::Onboarding(wizard), Intent::OnboardingPrevious) => {
                wizard.previous();
            }
            (View::Onboarding(wizard), Intent::GetStarted) => {
                match wizard.complete(&mut self.store) {
                    Ok(()) => next_view = Some(View::Dashboard),
                    Err(AppError::NameRequired) => {
                        debug!("get started blocked: name missing");
                        prompt.alert(NAME_REQUIRED_ALERT);
                        wizard.restart();
                    }
                    Err(e) => debug!(error = %e, "get started ignored"),
                }
            }
            (View::Settings(editor), Intent::SelectTab { tab }) => editor.select_tab(tab),
            (View::Settings(editor), Intent::EditSettings { change }) => {
                editor.change_field(change);
            }
            (View::Settings(editor), Intent::SaveSettings) => {
                outcome = Some(editor.save(&mut self.store));
            }
            (View::Settings(editor), Intent::ResetSettings { kind }) => {
                let result = editor.reset(kind, prompt, &mut self.store);
                if result == SettingsOutcome::ResetAll {
                    next_view = Some(View::Onboarding(OnboardingWizard::new()));
                }
                outcome = Some(result);
            }
            (_, Intent::DismissNotice { id }) => {
                if !self.notices.dismiss(id) {
                    debug!(id, "stale notice dismissal");
                }
            }
            (view, Intent::Navigate { action }) => {
                next_view = Self::navigate(view, action, &mut self.store, prompt);
            }
            (view, intent) => {
                debug!(view = ?view.kind(), intent = intent.name(), "intent ignored");
            }
        }

        let mut effect = Effect::None;
        if let Some((kind, text, auto_dismiss)) = outcome.and_then(|o| o.notice()) {
            effect = self.post_notice(kind, text, auto_dismiss);
        }
        if let Some(view) = next_view {
            self.set_view(view);
        }
        effect
    }

    /// Navigation table. Returns the view to switch to, if any.
    fn navigate(
        view: &View,
        action: NavAction,
        store: &mut UserStore,
        prompt: &mut dyn Prompt,
    ) -> Option<View> {
        match (view, action) {
            (View::Dashboard, NavAction::ViewProfile) => Some(View::Profile),
            (View::Dashboard, NavAction::OpenSettings) | (View::Profile, NavAction::Edit) => {
                Some(View::Settings(SettingsEditor::new(store.state())))
            }
            (View::Profile, NavAction::Back) | (View::Settings(_), NavAction::Back) => {
                Some(View::Dashboard)
            }
            (View::Dashboard | View::Profile | View::Settings(_), NavAction::Reset) => {
                if !prompt.confirm(ResetKind::All.confirm_message()) {
                    debug!("reset declined");
                    return None;
                }
                store.dispatch(UserAction::ResetOnboarding);
                info!("onboarding reset");
                Some(View::Onboarding(OnboardingWizard::new()))
            }
            (view, action) => {
                debug!(view = ?view.kind(), action = ?action, "navigation ignored");
                None
            }
        }
    }

    fn set_view(&mut self, view: View) {
        info!(from = ?self.view.kind(), to = ?view.kind(), "view changed");
        self.notices.clear();
        self.view = view;
    }

    fn post_notice(&mut self, kind: NoticeKind, text: &str, auto_dismiss: bool) -> Effect {
        let notice = self.notices.post(kind, text, auto_dismiss);
        match notice.dismiss_after_ms {
            Some(after_ms) => Effect::ScheduleDismiss {
                id: notice.id,
                after_ms,
            },
            None => Effect::None,
        }
    }

    pub fn snapshot(&self) -> AppSnapshot {
        let state = self.store.state();
        let view = match &self.view {
            View::Onboarding(wizard) => {
                let step = wizard.step();
                ViewSnapshot::Onboarding {
                    step,
                    title: step.title().to_string(),
                    description: step.description().to_string(),
                    progress_percent: wizard.progress_percent(),
                    draft: wizard.draft().clone(),
                    summary: step.is_last().then(|| wizard.summary()),
                }
            }
            View::Dashboard => ViewSnapshot::Dashboard {
                dashboard: DashboardView::from_state(state, self.debug_panel),
            },
            View::Settings(editor) => ViewSnapshot::Settings {
                tab: editor.tab(),
                draft: editor.draft().clone(),
                errors: editor.errors().clone(),
            },
            View::Profile => ViewSnapshot::Profile {
                profile: ProfileView::from_state(state),
            },
        };

        AppSnapshot {
            revision: self.store.revision(),
            user: state.clone(),
            view,
            notice: self.notices.current().cloned(),
        }
    }
}

impl std::fmt::Debug for AppController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppController")
            .field("revision", &self.store.revision())
            .field("view", &self.view.kind())
            .field("notice", &self.notices.current().map(|n| n.id))
            .finish()
    }
}

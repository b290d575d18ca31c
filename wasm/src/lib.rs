//! FitTracker WASM Module
//!
//! Browser bindings for the application core. The page sends intents as
//! JSON and renders the JSON snapshots it reads back. Notice dismissal
//! timers are the page's job: `dispatch` returns the effect telling it
//! which notice to dismiss and when.

use wasm_bindgen::prelude::*;

use fittracker_app::config::{AppConfig, BuildMode};
use fittracker_app::{AppController, AppResult, Intent, Prompt};
use fittracker_shared::{LabelCase, UserStore};

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = window, js_name = alert)]
    fn window_alert(message: &str);

    #[wasm_bindgen(js_namespace = window, js_name = confirm)]
    fn window_confirm(message: &str) -> bool;
}

/// Blocking browser dialogs
struct BrowserPrompt;

impl Prompt for BrowserPrompt {
    fn alert(&mut self, message: &str) {
        window_alert(message);
    }

    fn confirm(&mut self, message: &str) -> bool {
        window_confirm(message)
    }
}

/// Apply a JSON intent and return the JSON effect
fn apply(
    controller: &mut AppController,
    intent_json: &str,
    prompt: &mut dyn Prompt,
) -> AppResult<String> {
    let intent = Intent::from_json(intent_json)?;
    let effect = controller.handle(intent, prompt);
    Ok(serde_json::to_string(&effect)?)
}

fn snapshot_json(controller: &AppController) -> AppResult<String> {
    Ok(serde_json::to_string(&controller.snapshot())?)
}

/// The application, owned by the page
#[wasm_bindgen]
pub struct FitTrackerApp {
    controller: AppController,
}

#[wasm_bindgen]
impl FitTrackerApp {
    /// `debug_panel` mirrors a development build
    #[wasm_bindgen(constructor)]
    pub fn new(debug_panel: bool) -> FitTrackerApp {
        let mode = if debug_panel {
            BuildMode::Development
        } else {
            BuildMode::Production
        };
        let config = AppConfig::for_mode(mode);
        FitTrackerApp {
            controller: AppController::new(UserStore::new(), &config),
        }
    }

    pub fn snapshot(&self) -> Result<String, JsValue> {
        snapshot_json(&self.controller).map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Apply one intent, e.g. `{"type":"onboarding_next"}`
    pub fn dispatch(&mut self, intent_json: &str) -> Result<String, JsValue> {
        apply(&mut self.controller, intent_json, &mut BrowserPrompt).map_err(|e| {
            tracing::warn!(error = %e, "intent rejected");
            JsValue::from_str(&e.to_string())
        })
    }
}

/// Avatar initials, `U` without a name
#[wasm_bindgen]
pub fn initials(name: Option<String>) -> String {
    fittracker_shared::initials(name.as_deref())
}

/// BMI rounded to one decimal, or nothing when a measurement is missing
#[wasm_bindgen]
pub fn bmi(weight_kg: Option<f64>, height_cm: Option<f64>) -> Option<f64> {
    fittracker_shared::bmi(weight_kg, height_cm)
}

/// `lose_weight` → `lose weight`
#[wasm_bindgen]
pub fn humanize(value: &str) -> String {
    fittracker_shared::humanize(value, LabelCase::AsIs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use fittracker_app::{AppError, RecordingPrompt, ViewKind};

    fn app() -> AppController {
        AppController::new(UserStore::new(), &AppConfig::default())
    }

    #[test]
    fn test_apply_returns_effect_json() {
        let mut controller = app();
        let mut prompt = RecordingPrompt::default();

        let effect = apply(&mut controller, r#"{"type":"onboarding_next"}"#, &mut prompt).unwrap();
        assert_eq!(effect, r#"{"effect":"none"}"#);
        assert_eq!(prompt.alerts.len(), 1);
        assert_eq!(controller.view().kind(), ViewKind::Onboarding);
    }

    #[test]
    fn test_apply_rejects_bad_intent() {
        let mut controller = app();
        let mut prompt = RecordingPrompt::default();
        let result = apply(&mut controller, "{}", &mut prompt);
        assert!(matches!(result, Err(AppError::Intent(_))));
    }

    #[test]
    fn test_snapshot_json() {
        let json = snapshot_json(&app()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["view"]["view"], "onboarding");
        assert_eq!(value["revision"], 0);
    }

    #[test]
    fn test_free_functions() {
        assert_eq!(initials(Some("ada lovelace".into())), "AL");
        assert_eq!(initials(None), "U");
        assert_eq!(bmi(Some(70.0), Some(170.0)), Some(24.2));
        assert_eq!(bmi(Some(70.0), None), None);
        assert_eq!(humanize("gain_muscle"), "gain muscle");
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
    use super::*;
    use wasm_bindgen_test::*;

    #[wasm_bindgen_test]
    fn test_app_starts_on_onboarding() {
        let app = FitTrackerApp::new(false);
        let json = app.snapshot().unwrap();
        assert!(json.contains(r#""view":"onboarding""#));
    }

    #[wasm_bindgen_test]
    fn test_edit_intent_round_trips() {
        let mut app = FitTrackerApp::new(true);
        let effect = app
            .dispatch(r#"{"type":"edit_onboarding","change":{"field":"name","value":"Ada"}}"#)
            .unwrap();
        assert_eq!(effect, r#"{"effect":"none"}"#);
        assert!(app.snapshot().unwrap().contains(r#""name":"Ada""#));
    }
}

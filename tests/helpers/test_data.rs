//! Test data utilities
//!
//! Canned activity collections, fast-notice settings and the deterministic
//! confirmation stub used by the integration tests.

use std::sync::{Arc, Mutex};

use ActivityBoard::board::ConfirmPrompt;
use ActivityBoard::config::Settings;

/// The standard fixture collection. Raw JSON so the backend's key order is
/// under the test's control ("Chess Club" sorts after "Art Workshop", so
/// only insertion order keeps it first).
pub const SAMPLE_ACTIVITIES: &str = r#"{
  "Chess Club": {
    "description": "",
    "schedule": "Mon",
    "max_participants": 2,
    "participants": ["a@x.com"]
  },
  "Art Workshop": {
    "description": "Watercolor basics for beginners",
    "schedule": "Wed 15:30",
    "max_participants": 1,
    "participants": []
  }
}"#;

/// The fixture collection after `a@x.com` left Chess Club.
pub const SAMPLE_AFTER_UNREGISTER: &str = r#"{
  "Chess Club": {
    "description": "",
    "schedule": "Mon",
    "max_participants": 2,
    "participants": []
  },
  "Art Workshop": {
    "description": "Watercolor basics for beginners",
    "schedule": "Wed 15:30",
    "max_participants": 1,
    "participants": []
  }
}"#;

/// A collection whose name, description and roster all try to smuggle in
/// markup.
pub const HOSTILE_ACTIVITIES: &str = r#"{
  "<b>X</b>": {
    "description": "<script>alert(1)</script>",
    "schedule": "\"Fri\"",
    "max_participants": 3,
    "participants": ["<i>eve</i>&'@x.com"]
  }
}"#;

/// Settings pointed at the mock backend, with short notice delays so tests
/// can observe the auto-hide without long sleeps.
pub fn test_settings(base_url: &str) -> Settings {
    let mut settings = Settings::default();
    settings.api.base_url = base_url.to_string();
    settings.board.signup_notice_ms = 40;
    settings.board.unregister_notice_ms = 40;
    settings
}

/// Deterministic confirmation stub: answers with a preset decision and
/// records every prompt it was shown.
pub struct ScriptedConfirm {
    answer: bool,
    prompts: Mutex<Vec<String>>,
}

impl ScriptedConfirm {
    pub fn answering(answer: bool) -> Arc<Self> {
        Arc::new(Self {
            answer,
            prompts: Mutex::new(Vec::new()),
        })
    }

    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

impl ConfirmPrompt for ScriptedConfirm {
    fn confirm(&self, prompt: &str) -> bool {
        self.prompts.lock().unwrap().push(prompt.to_string());
        self.answer
    }
}

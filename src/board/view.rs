//! Mounted view surface
//!
//! In-memory stand-ins for the page elements the board controls: the list
//! of rendered cards, the activity selection control, the sign-up form and
//! the status message area. The rendered view is the only client-side
//! state; every successful fetch rebuilds it wholesale.

use crate::board::render;

/// Styling tone of a status message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageTone {
    Success,
    Error,
}

impl MessageTone {
    fn css_class(self) -> &'static str {
        match self {
            MessageTone::Success => "success",
            MessageTone::Error => "error",
        }
    }
}

/// One removal control of the current render, carrying the same values as
/// the `data-activity`/`data-email` attributes in the markup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnregisterControl {
    pub activity: String,
    pub email: String,
}

/// An option of the selection control.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

/// The element holding the rendered activity cards.
#[derive(Debug, Default)]
pub struct ActivityListElement {
    html: String,
    unregister_controls: Vec<UnregisterControl>,
}

impl ActivityListElement {
    /// Drop the previous render, markup and removal controls alike, so no
    /// stale control survives a re-render.
    pub fn clear(&mut self) {
        self.html.clear();
        self.unregister_controls.clear();
    }

    pub fn push_card(&mut self, card: render::RenderedCard) {
        self.html.push_str(&card.html);
        self.unregister_controls.extend(card.unregister_controls);
    }

    /// Replace the whole list area with the static load-failure notice.
    pub fn set_failure_notice(&mut self) {
        self.clear();
        self.html.push_str(render::LOAD_FAILURE_NOTICE);
    }

    pub fn html(&self) -> &str {
        &self.html
    }

    pub fn unregister_controls(&self) -> &[UnregisterControl] {
        &self.unregister_controls
    }
}

/// The activity selection control with its fixed placeholder option.
#[derive(Debug)]
pub struct SelectElement {
    placeholder: SelectOption,
    options: Vec<SelectOption>,
    selected: String,
}

impl SelectElement {
    pub fn new(placeholder_label: &str) -> Self {
        Self {
            placeholder: SelectOption {
                value: String::new(),
                label: placeholder_label.to_string(),
            },
            options: Vec::new(),
            selected: String::new(),
        }
    }

    /// Remove every option except the placeholder.
    pub fn clear_options(&mut self) {
        self.options.clear();
    }

    pub fn push_option(&mut self, name: &str) {
        self.options.push(SelectOption {
            value: name.to_string(),
            label: name.to_string(),
        });
    }

    /// All options as displayed, placeholder first.
    pub fn options(&self) -> Vec<SelectOption> {
        let mut all = Vec::with_capacity(self.options.len() + 1);
        all.push(self.placeholder.clone());
        all.extend(self.options.iter().cloned());
        all
    }

    pub fn select(&mut self, value: &str) {
        self.selected = value.to_string();
    }

    pub fn selected(&self) -> &str {
        &self.selected
    }

    /// Reset the selection back to the placeholder.
    pub fn reset(&mut self) {
        self.selected.clear();
    }
}

/// The sign-up form's email input.
#[derive(Debug, Default)]
pub struct SignupForm {
    email: String,
}

impl SignupForm {
    pub fn set_email(&mut self, email: &str) {
        self.email = email.to_string();
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn reset(&mut self) {
        self.email.clear();
    }
}

/// The status message area.
///
/// State machine: hidden → visible (on any action result) → hidden (after
/// the timeout, or replaced by the next action's message).
#[derive(Debug)]
pub struct MessageElement {
    text: String,
    tone: MessageTone,
    hidden: bool,
    generation: u64,
}

impl Default for MessageElement {
    fn default() -> Self {
        Self {
            text: String::new(),
            tone: MessageTone::Success,
            hidden: true,
            generation: 0,
        }
    }
}

impl MessageElement {
    /// Show a message, replacing whatever is currently displayed. Returns
    /// the generation token the hide timer must present.
    pub fn show(&mut self, text: String, tone: MessageTone) -> u64 {
        self.text = text;
        self.tone = tone;
        self.hidden = false;
        self.generation += 1;
        self.generation
    }

    /// Hide the message, but only while `generation` still identifies the
    /// currently shown message. A stale timer must never hide a newer one.
    pub fn hide_if_current(&mut self, generation: u64) {
        if self.generation == generation {
            self.hidden = true;
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_hidden(&self) -> bool {
        self.hidden
    }

    /// The DOM-equivalent class attribute.
    pub fn class_attr(&self) -> String {
        if self.hidden {
            format!("message {} hidden", self.tone.css_class())
        } else {
            format!("message {}", self.tone.css_class())
        }
    }
}

/// The complete mounted surface.
#[derive(Debug)]
pub struct BoardView {
    pub activity_list: ActivityListElement,
    pub activity_select: SelectElement,
    pub signup_form: SignupForm,
    pub status_message: MessageElement,
}

impl BoardView {
    pub fn new(placeholder_label: &str) -> Self {
        Self {
            activity_list: ActivityListElement::default(),
            activity_select: SelectElement::new(placeholder_label),
            signup_form: SignupForm::default(),
            status_message: MessageElement::default(),
        }
    }
}

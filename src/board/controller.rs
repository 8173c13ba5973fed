//! Board controller
//!
//! `ActivityBoard` is the single composed UI controller of the sign-up
//! page: constructed once per page lifetime, it owns the mounted view
//! surface and orchestrates loading, sign-up and unregister flows.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::Mutex;
use tracing::debug;

use crate::board::confirm::{AcceptAll, ConfirmPrompt};
use crate::board::render;
use crate::board::view::{BoardView, MessageTone, SelectOption, UnregisterControl};
use crate::config::Settings;
use crate::services::ActivitiesService;
use crate::utils::errors::{ActivityBoardError, ApiError, Result};
use crate::utils::logging;

/// Snapshot of the status message area, as embedders and tests see it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusSnapshot {
    pub text: String,
    pub class_attr: String,
    pub hidden: bool,
}

/// The activity sign-up board.
///
/// Cheaply cloneable: the view lives behind a shared mutex, so the
/// auto-hide timer tasks reach it after the triggering call returned.
#[derive(Clone)]
pub struct ActivityBoard {
    service: ActivitiesService,
    confirm: Arc<dyn ConfirmPrompt>,
    view: Arc<Mutex<BoardView>>,
    settings: Settings,
}

impl ActivityBoard {
    /// Mount the board with the default confirmation capability.
    pub fn mount(settings: Settings) -> Result<Self> {
        let service = ActivitiesService::new(settings.clone())?;
        Ok(Self::with_parts(service, Arc::new(AcceptAll), settings))
    }

    /// Mount the board from explicit parts (the dependency injection seam).
    pub fn with_parts(
        service: ActivitiesService,
        confirm: Arc<dyn ConfirmPrompt>,
        settings: Settings,
    ) -> Self {
        let view = BoardView::new(&settings.board.select_placeholder);
        Self {
            service,
            confirm,
            view: Arc::new(Mutex::new(view)),
            settings,
        }
    }

    /// Fetch the activity collection and rebuild the rendered list and the
    /// selection control. Failures never propagate: the list area is
    /// replaced by a static notice and the select keeps its prior options.
    pub async fn load_and_render(&self) {
        match self.service.list_activities().await {
            Ok(activities) => {
                let mut view = self.view.lock().await;
                view.activity_list.clear();
                view.activity_select.clear_options();

                for (name, activity) in &activities {
                    view.activity_list
                        .push_card(render::activity_card(name, activity));
                    view.activity_select.push_option(name);
                }

                debug!(count = activities.len(), "Rendered activity collection");
            }
            Err(e) => {
                logging::log_api_error("list_activities", &e.to_string(), None);
                let mut view = self.view.lock().await;
                view.activity_list.set_failure_notice();
            }
        }
    }

    /// Submit a sign-up for `email` on `activity_name`.
    pub async fn submit_signup(&self, activity_name: &str, email: &str) {
        logging::log_user_action("signup", activity_name, email);
        let notice = Duration::from_millis(self.settings.board.signup_notice_ms);

        match self.service.sign_up(activity_name, email).await {
            Ok(message) => {
                let text = message.unwrap_or_else(|| "Signed up successfully".to_string());
                self.show_status(text, MessageTone::Success, notice).await;
                self.reset_form().await;
                self.load_and_render().await;
            }
            Err(ActivityBoardError::Api(ApiError::Rejected { detail })) => {
                let text = detail.unwrap_or_else(|| "An error occurred".to_string());
                self.show_status(text, MessageTone::Error, notice).await;
            }
            Err(e) => {
                logging::log_api_error("signup", &e.to_string(), Some(activity_name));
                self.show_status(
                    "Failed to sign up. Please try again.".to_string(),
                    MessageTone::Error,
                    notice,
                )
                .await;
            }
        }
    }

    /// Ask for confirmation, then remove `email` from `activity_name`.
    /// A declined confirmation issues no network request at all.
    pub async fn submit_unregister(&self, activity_name: &str, email: &str) {
        let prompt = format!("Unregister {email} from {activity_name}?");
        if !self.confirm.confirm(&prompt) {
            debug!(
                activity = activity_name,
                email = email,
                "Unregister declined"
            );
            return;
        }

        logging::log_user_action("unregister", activity_name, email);
        let notice = Duration::from_millis(self.settings.board.unregister_notice_ms);

        match self.service.unregister(activity_name, email).await {
            Ok(message) => {
                let text = message.unwrap_or_else(|| "Unregistered successfully".to_string());
                self.show_status(text, MessageTone::Success, notice).await;
                self.load_and_render().await;
            }
            Err(ActivityBoardError::Api(ApiError::Rejected { detail })) => {
                let text = detail.unwrap_or_else(|| "Failed to unregister".to_string());
                self.show_status(text, MessageTone::Error, notice).await;
            }
            Err(e) => {
                logging::log_api_error("unregister", &e.to_string(), Some(activity_name));
                self.show_status(
                    "Failed to unregister. Please try again.".to_string(),
                    MessageTone::Error,
                    notice,
                )
                .await;
            }
        }
    }

    /// Show a status message and arm its auto-hide timer. A newer message
    /// bumps the generation, so a stale timer finds nothing to hide.
    async fn show_status(&self, text: String, tone: MessageTone, delay: Duration) {
        let generation = {
            let mut view = self.view.lock().await;
            view.status_message.show(text, tone)
        };

        let view = Arc::clone(&self.view);
        tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            view.lock().await.status_message.hide_if_current(generation);
        });
    }

    async fn reset_form(&self) {
        let mut view = self.view.lock().await;
        view.signup_form.reset();
        view.activity_select.reset();
    }

    // View accessors: the embedder's read-only window onto the surface.

    pub async fn list_html(&self) -> String {
        self.view.lock().await.activity_list.html().to_string()
    }

    pub async fn unregister_controls(&self) -> Vec<UnregisterControl> {
        self.view
            .lock()
            .await
            .activity_list
            .unregister_controls()
            .to_vec()
    }

    pub async fn select_options(&self) -> Vec<SelectOption> {
        self.view.lock().await.activity_select.options()
    }

    pub async fn status(&self) -> StatusSnapshot {
        let view = self.view.lock().await;
        StatusSnapshot {
            text: view.status_message.text().to_string(),
            class_attr: view.status_message.class_attr(),
            hidden: view.status_message.is_hidden(),
        }
    }

    // Form interaction: what the user does before submitting.

    pub async fn type_email(&self, email: &str) {
        self.view.lock().await.signup_form.set_email(email);
    }

    pub async fn select_activity(&self, name: &str) {
        self.view.lock().await.activity_select.select(name);
    }

    pub async fn form_email(&self) -> String {
        self.view.lock().await.signup_form.email().to_string()
    }

    pub async fn selected_activity(&self) -> String {
        self.view.lock().await.activity_select.selected().to_string()
    }

    /// Submit the form as mounted: reads the email input and the current
    /// selection, exactly like the page's submit handler.
    pub async fn submit_signup_form(&self) {
        let (activity, email) = {
            let view = self.view.lock().await;
            (
                view.activity_select.selected().to_string(),
                view.signup_form.email().to_string(),
            )
        };

        self.submit_signup(&activity, &email).await;
    }
}

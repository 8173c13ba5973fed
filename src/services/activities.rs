//! Activities API service implementation
//!
//! This service talks to the activities backend: it fetches the activity
//! collection and submits sign-up and unregister requests. It owns the
//! HTTP client, builds the endpoint URLs and maps transport failures into
//! the `ApiError` taxonomy.

use std::time::Duration;

use reqwest::{Client, Method, Response};
use serde::Deserialize;
use tracing::debug;

use crate::config::Settings;
use crate::models::ActivityCollection;
use crate::utils::errors::{ActivityBoardError, ApiError, Result};

/// Reply body of the sign-up and unregister endpoints.
///
/// Success responses carry `message`, rejections carry `detail`; any other
/// shape falls back to a generic user-facing text upstream.
#[derive(Debug, Clone, Deserialize)]
pub struct ActionReply {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub detail: Option<String>,
}

/// HTTP service for the activities backend
#[derive(Debug, Clone)]
pub struct ActivitiesService {
    client: Client,
    settings: Settings,
}

impl ActivitiesService {
    /// Create a new ActivitiesService instance
    pub fn new(settings: Settings) -> Result<Self> {
        let mut builder = Client::builder().user_agent("ActivityBoard/1.0");
        if let Some(seconds) = settings.api.timeout_seconds {
            builder = builder.timeout(Duration::from_secs(seconds));
        }
        let client = builder.build().map_err(ActivityBoardError::Http)?;

        Ok(Self { client, settings })
    }

    /// Fetch the full activity collection.
    pub async fn list_activities(&self) -> Result<ActivityCollection> {
        let url = format!("{}/activities", self.base_url());
        debug!(url = %url, "Fetching activity collection");

        let response = self.send(Method::GET, &url).await?;

        if !response.status().is_success() {
            let status = response.status();
            return Err(ApiError::RequestFailed(format!("HTTP {}", status)).into());
        }

        let activities = response
            .json::<ActivityCollection>()
            .await
            .map_err(|e| ApiError::InvalidResponse(e.to_string()))?;

        Ok(activities)
    }

    /// Register `email` for an activity. Returns the server success message.
    pub async fn sign_up(&self, activity: &str, email: &str) -> Result<Option<String>> {
        let url = self.action_url(activity, "signup", email);
        debug!(activity = activity, email = email, "Submitting sign-up");

        self.submit_action(Method::POST, &url).await
    }

    /// Remove a participant from an activity. Returns the server success message.
    pub async fn unregister(&self, activity: &str, email: &str) -> Result<Option<String>> {
        let url = self.action_url(activity, "unregister", email);
        debug!(activity = activity, email = email, "Submitting unregister");

        self.submit_action(Method::DELETE, &url).await
    }

    async fn submit_action(&self, method: Method, url: &str) -> Result<Option<String>> {
        let response = self.send(method, url).await?;
        let status = response.status();

        let reply = response
            .json::<ActionReply>()
            .await
            .map_err(|e| ApiError::InvalidResponse(e.to_string()))?;

        if status.is_success() {
            Ok(reply.message)
        } else {
            Err(ApiError::Rejected {
                detail: reply.detail,
            }
            .into())
        }
    }

    async fn send(&self, method: Method, url: &str) -> Result<Response> {
        let response = self.client.request(method, url).send().await.map_err(|e| {
            if e.is_timeout() {
                ApiError::Timeout
            } else if e.is_connect() {
                ApiError::ServiceUnavailable
            } else {
                ApiError::RequestFailed(e.to_string())
            }
        })?;

        Ok(response)
    }

    fn base_url(&self) -> &str {
        self.settings.api.base_url.trim_end_matches('/')
    }

    fn action_url(&self, activity: &str, action: &str, email: &str) -> String {
        format!(
            "{}/activities/{}/{}?email={}",
            self.base_url(),
            urlencoding::encode(activity),
            action,
            urlencoding::encode(email)
        )
    }
}

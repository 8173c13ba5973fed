//! Mock activities backend for testing
//!
//! A wiremock-backed stand-in for the REST backend, with configurable
//! responses per endpoint.

use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Mock activities backend server
pub struct BackendMockServer {
    pub server: MockServer,
}

fn action_path(activity: &str, action: &str) -> String {
    format!("/activities/{}/{}", urlencoding::encode(activity), action)
}

impl BackendMockServer {
    /// Start a new mock backend.
    pub async fn start() -> Self {
        Self {
            server: MockServer::start().await,
        }
    }

    pub fn base_url(&self) -> String {
        self.server.uri()
    }

    /// Serve `body` (a raw JSON string, key order preserved) from
    /// `GET /activities` indefinitely.
    pub async fn mock_activities(&self, body: &str) {
        Mock::given(method("GET"))
            .and(path("/activities"))
            .respond_with(ResponseTemplate::new(200).set_body_raw(body, "application/json"))
            .mount(&self.server)
            .await;
    }

    /// Serve `body` from `GET /activities` for one call only; later calls
    /// fall through to mocks mounted after this one.
    pub async fn mock_activities_once(&self, body: &str) {
        Mock::given(method("GET"))
            .and(path("/activities"))
            .respond_with(ResponseTemplate::new(200).set_body_raw(body, "application/json"))
            .up_to_n_times(1)
            .mount(&self.server)
            .await;
    }

    /// Fail the activity fetch with `status`.
    pub async fn mock_activities_error(&self, status: u16) {
        Mock::given(method("GET"))
            .and(path("/activities"))
            .respond_with(ResponseTemplate::new(status))
            .mount(&self.server)
            .await;
    }

    /// Serve a malformed (non-JSON) activities body.
    pub async fn mock_activities_malformed(&self) {
        Mock::given(method("GET"))
            .and(path("/activities"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .mount(&self.server)
            .await;
    }

    /// Accept a sign-up for `activity` with a success message.
    pub async fn mock_signup_success(&self, activity: &str, email: &str, message: &str) {
        Mock::given(method("POST"))
            .and(path(action_path(activity, "signup")))
            .and(query_param("email", email))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "message": message })))
            .mount(&self.server)
            .await;
    }

    /// Reject a sign-up for `activity` with `status` and `detail`.
    pub async fn mock_signup_rejected(&self, activity: &str, status: u16, detail: &str) {
        Mock::given(method("POST"))
            .and(path(action_path(activity, "signup")))
            .respond_with(ResponseTemplate::new(status).set_body_json(json!({ "detail": detail })))
            .mount(&self.server)
            .await;
    }

    /// Accept an unregister for `activity` with a success message.
    pub async fn mock_unregister_success(&self, activity: &str, email: &str, message: &str) {
        Mock::given(method("DELETE"))
            .and(path(action_path(activity, "unregister")))
            .and(query_param("email", email))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "message": message })))
            .mount(&self.server)
            .await;
    }

    /// Reject an unregister for `activity` with `status` and `detail`.
    pub async fn mock_unregister_rejected(&self, activity: &str, status: u16, detail: &str) {
        Mock::given(method("DELETE"))
            .and(path(action_path(activity, "unregister")))
            .respond_with(ResponseTemplate::new(status).set_body_json(json!({ "detail": detail })))
            .mount(&self.server)
            .await;
    }

    /// Mount an expectation that no unregister request ever arrives; the
    /// server verifies it when dropped.
    pub async fn expect_no_unregister(&self) {
        Mock::given(method("DELETE"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&self.server)
            .await;
    }

    /// Number of activity-collection fetches received so far.
    pub async fn activities_fetch_count(&self) -> usize {
        self.server
            .received_requests()
            .await
            .unwrap_or_default()
            .iter()
            .filter(|r| r.method.to_string() == "GET" && r.url.path() == "/activities")
            .count()
    }

    /// Total number of requests received so far.
    pub async fn total_request_count(&self) -> usize {
        self.server
            .received_requests()
            .await
            .unwrap_or_default()
            .len()
    }
}

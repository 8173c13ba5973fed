//! Card rendering
//!
//! Pure markup building for the activity list. Every interpolated value is
//! escaped before insertion; the removal controls carry the raw values, so
//! the unregister flow receives exactly what the current render shows.

use crate::board::view::UnregisterControl;
use crate::models::Activity;
use crate::utils::helpers::escape_html;

/// Static notice shown in place of the list when loading fails.
pub const LOAD_FAILURE_NOTICE: &str =
    "<p>Failed to load activities. Please try again later.</p>";

/// A rendered activity card plus the removal controls it mounts.
#[derive(Debug, Clone)]
pub struct RenderedCard {
    pub html: String,
    pub unregister_controls: Vec<UnregisterControl>,
}

/// Render one activity card.
pub fn activity_card(name: &str, activity: &Activity) -> RenderedCard {
    let description = activity.description.as_deref().unwrap_or("");
    let schedule = activity.schedule.as_deref().unwrap_or("");

    let html = format!(
        r#"<div class="activity-card">
  <h4>{name}</h4>
  <p>{description}</p>
  <p><strong>Schedule:</strong> {schedule}</p>
  <p><strong>Availability:</strong> {spots} spots left</p>
  <div class="participants">
    <h5>Participants</h5>
    {participants}
  </div>
</div>
"#,
        name = escape_html(name),
        description = escape_html(description),
        schedule = escape_html(schedule),
        spots = activity.spots_left(),
        participants = participants_section(name, activity),
    );

    let unregister_controls = activity
        .participants
        .iter()
        .map(|email| UnregisterControl {
            activity: name.to_string(),
            email: email.clone(),
        })
        .collect();

    RenderedCard {
        html,
        unregister_controls,
    }
}

fn participants_section(name: &str, activity: &Activity) -> String {
    if activity.participants.is_empty() {
        return r#"<p class="no-participants">No participants yet</p>"#.to_string();
    }

    let rows: String = activity
        .participants
        .iter()
        .map(|email| {
            format!(
                r#"<li><span class="participant-email">{email}</span> <button class="btn-unregister" data-activity="{activity}" data-email="{email_attr}" title="Unregister">✖</button></li>"#,
                email = escape_html(email),
                activity = escape_html(name),
                email_attr = escape_html(email),
            )
        })
        .collect();

    format!(r#"<ul class="participants-list">{rows}</ul>"#)
}

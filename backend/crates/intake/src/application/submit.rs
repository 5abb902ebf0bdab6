//! Submit Application Use Case
//!
//! Validates the form locally and, only if it passes, sends it to the API
//! as a profile update through the session.

use auth::{AuthApi, ProfileUpdate, SessionContext, SessionRepository, SessionState};
use kernel::geo::canonical_state;
use serde_json::{Map, Value};

use crate::domain::form::{ApplicationForm, normalize};
use crate::domain::rules::validate;
use crate::error::{SubmitError, SubmitResult};

/// Whether the signed-in teacher has already applied
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApplicationStatus {
    NotSubmitted,
    Submitted,
}

/// Accepted submission
#[derive(Debug, Clone, PartialEq)]
pub struct Submission {
    /// Fields the API returned (already merged into the session user)
    pub fields: Map<String, Value>,
}

impl From<&ApplicationForm> for ProfileUpdate {
    fn from(form: &ApplicationForm) -> Self {
        let Ok(Value::Object(fields)) = serde_json::to_value(form) else {
            return ProfileUpdate::new();
        };

        fields
            .into_iter()
            .filter_map(|(key, value)| {
                let text = normalize(value.as_str()?);
                if text.is_empty() {
                    return None;
                }
                let text = match key.as_str() {
                    "state_of_origin" | "property_state" => canonical_state(&text)
                        .map(str::to_string)
                        .unwrap_or(text),
                    _ => text,
                };
                Some((key, text))
            })
            .fold(ProfileUpdate::new(), |update, (key, text)| update.set(key, text))
    }
}

/// Validate `form` and, if valid, send it as a profile update
pub async fn submit_application<A, S>(
    ctx: &SessionContext<A, S>,
    form: &ApplicationForm,
) -> SubmitResult<Submission>
where
    A: AuthApi,
    S: SessionRepository,
{
    let errors = validate(form);
    if !errors.is_valid() {
        return Err(SubmitError::Invalid(errors));
    }

    let fields = ctx.update_profile(ProfileUpdate::from(form)).await?;
    tracing::info!(fields = fields.len(), "Housing application submitted");
    Ok(Submission { fields })
}

/// Submitted once the session user carries a BVN
pub fn application_status(state: &SessionState) -> ApplicationStatus {
    match &state.user {
        Some(user) if user.has_applied() => ApplicationStatus::Submitted,
        _ => ApplicationStatus::NotSubmitted,
    }
}

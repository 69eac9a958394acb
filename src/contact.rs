//! Contact form submission through the Web3Forms relay.

use gloo_net::http::Request;
use log::{debug, info, warn};
use serde::Deserialize;
use thiserror::Error;
use web_sys::FormData;

pub const GENERIC_ERROR_MESSAGE: &str = "Что-то пошло не так";
pub const NETWORK_ERROR_MESSAGE: &str = "Ошибка сети. Попробуйте снова.";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    Name,
    Phone,
    Email,
    Message,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub message: String,
}

impl ContactForm {
    pub fn set(&mut self, field: Field, value: String) {
        match field {
            Field::Name => self.name = value,
            Field::Phone => self.phone = value,
            Field::Email => self.email = value,
            Field::Message => self.message = value,
        }
    }

    /// Relay payload. Phone is optional and left out when blank.
    pub fn fields(&self, access_key: &str) -> Vec<(&'static str, String)> {
        let mut fields = vec![("name", self.name.clone())];
        if !self.phone.trim().is_empty() {
            fields.push(("phone", self.phone.clone()));
        }
        fields.push(("email", self.email.clone()));
        fields.push(("message", self.message.clone()));
        fields.push(("access_key", access_key.to_string()));
        fields
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum SubmissionState {
    #[default]
    Idle,
    Submitting,
    Success,
    Error(String),
}

impl SubmissionState {
    pub fn is_submitting(&self) -> bool {
        matches!(self, SubmissionState::Submitting)
    }

    pub fn can_submit(&self) -> bool {
        matches!(self, SubmissionState::Idle | SubmissionState::Error(_))
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            SubmissionState::Error(message) => Some(message),
            _ => None,
        }
    }
}

/// Relay reply body.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RelayResponse {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Debug, Error)]
pub enum SubmitError {
    #[error("could not build request body: {0}")]
    Encoding(String),
    #[error("relay unreachable: {0}")]
    Network(String),
    #[error("relay rejected submission: {}", .0.as_deref().unwrap_or("no message"))]
    Rejected(Option<String>),
}

impl SubmitError {
    /// Text shown under the form.
    pub fn user_message(&self) -> String {
        match self {
            SubmitError::Encoding(_) | SubmitError::Network(_) => NETWORK_ERROR_MESSAGE.to_string(),
            SubmitError::Rejected(Some(message)) if !message.is_empty() => message.clone(),
            SubmitError::Rejected(_) => GENERIC_ERROR_MESSAGE.to_string(),
        }
    }
}

#[allow(async_fn_in_trait)]
pub trait FormRelay {
    async fn post(&self, fields: Vec<(&'static str, String)>) -> Result<RelayResponse, SubmitError>;
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Web3FormsRelay {
    endpoint: String,
}

impl Web3FormsRelay {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
        }
    }
}

impl FormRelay for Web3FormsRelay {
    async fn post(&self, fields: Vec<(&'static str, String)>) -> Result<RelayResponse, SubmitError> {
        let body = FormData::new().map_err(|err| SubmitError::Encoding(format!("{:?}", err)))?;
        for (name, value) in &fields {
            body.append_with_str(name, value)
                .map_err(|err| SubmitError::Encoding(format!("{:?}", err)))?;
        }

        let response = Request::post(&self.endpoint)
            .body(body)
            .send()
            .await
            .map_err(|err| SubmitError::Network(err.to_string()))?;
        debug!("Relay answered with status {}", response.status());

        response
            .json::<RelayResponse>()
            .await
            .map_err(|err| SubmitError::Network(err.to_string()))
    }
}

/// Posts `form` once and interprets the relay's answer.
pub async fn submit<R: FormRelay>(
    relay: &R,
    form: &ContactForm,
    access_key: &str,
) -> Result<(), SubmitError> {
    let response = relay.post(form.fields(access_key)).await?;
    if response.success {
        Ok(())
    } else {
        Err(SubmitError::Rejected(response.message))
    }
}

/// Form contents plus where the submission lifecycle currently stands.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactSession {
    pub form: ContactForm,
    pub state: SubmissionState,
}

impl ContactSession {
    /// Moves to `Submitting` and hands back the payload to send, or `None`
    /// if a submission is already in flight or has just succeeded.
    pub fn begin(&mut self) -> Option<ContactForm> {
        if !self.state.can_submit() {
            return None;
        }
        self.state = SubmissionState::Submitting;
        Some(self.form.clone())
    }

    pub fn finish(&mut self, outcome: Result<(), SubmitError>) {
        match outcome {
            Ok(()) => {
                info!("Contact form sent");
                self.form.clear();
                self.state = SubmissionState::Success;
            }
            Err(err) => {
                warn!("Contact form failed: {}", err);
                self.state = SubmissionState::Error(err.user_message());
            }
        }
    }

    /// Back to a blank `Idle` form after a successful send.
    pub fn reset(&mut self) {
        if self.state == SubmissionState::Success {
            *self = Self::default();
        }
    }

    pub async fn submit_with<R: FormRelay>(&mut self, relay: &R, access_key: &str) {
        if let Some(form) = self.begin() {
            let outcome = submit(relay, &form, access_key).await;
            self.finish(outcome);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_phone_is_left_out_of_payload() {
        let form = ContactForm {
            name: "Анна".into(),
            phone: "  ".into(),
            email: "anna@example.com".into(),
            message: "Дом у озера".into(),
        };
        let names: Vec<_> = form.fields("key").into_iter().map(|(name, _)| name).collect();
        assert_eq!(names, ["name", "email", "message", "access_key"]);
    }

    #[test]
    fn empty_server_message_falls_back_to_generic_text() {
        let err = SubmitError::Rejected(Some(String::new()));
        assert_eq!(err.user_message(), GENERIC_ERROR_MESSAGE);
    }

    #[test]
    fn relay_response_without_message_parses() {
        let response: RelayResponse = serde_json::from_str(r#"{"success": false}"#).unwrap();
        assert_eq!(
            response,
            RelayResponse {
                success: false,
                message: None
            }
        );
    }

    #[test]
    fn no_second_submission_while_one_is_in_flight() {
        let mut session = ContactSession::default();
        assert!(session.begin().is_some());
        assert!(session.state.is_submitting());
        assert_eq!(session.begin(), None);
    }

    #[test]
    fn reset_only_applies_after_success() {
        let mut session = ContactSession {
            state: SubmissionState::Error("X".into()),
            ..Default::default()
        };
        session.reset();
        assert_eq!(session.state.error_message(), Some("X"));
    }
}

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::toast::ToastKind;

#[derive(Error, Debug)]
pub enum ContactError {
    #[error("Couldn't reach the contact service: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("Contact service returned {0}")]
    Status(u16),
    #[error("{}", .0.as_deref().unwrap_or("Message was not accepted"))]
    Rejected(Option<String>),
}

/// Body of the outbound submission.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactPayload {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ContactResponse {
    pub result: String,
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Debug, Clone)]
pub struct ContactClient {
    http: reqwest::Client,
    endpoint: String,
}

impl ContactClient {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            endpoint: endpoint.into(),
        }
    }

    /// Sends one submission. Only a `"success"` result counts as delivered.
    pub async fn submit(&self, payload: &ContactPayload) -> Result<(), ContactError> {
        let res = self.http.post(&self.endpoint).json(payload).send().await?;
        let status = res.status();
        let body = res.json::<ContactResponse>().await;
        match body {
            Ok(body) if body.result == "success" => Ok(()),
            Ok(body) => Err(ContactError::Rejected(body.message)),
            Err(_) if !status.is_success() => Err(ContactError::Status(status.as_u16())),
            Err(e) => Err(e.into()),
        }
    }
}

/// What the form should show after a submission resolves.
#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub kind: ToastKind,
    pub title: String,
    pub description: String,
}

/// Field values of the contact form and whether a submission is in flight.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContactForm {
    pub fields: ContactPayload,
    pub pending: bool,
}

impl ContactForm {
    pub fn payload(&self) -> ContactPayload {
        self.fields.clone()
    }

    /// Marks a submission in flight and hands out its payload. Returns `None`
    /// while an earlier one is still pending.
    pub fn begin_submit(&mut self) -> Option<ContactPayload> {
        if self.pending {
            return None;
        }
        self.pending = true;
        Some(self.payload())
    }

    /// Ends the pending submission. Clears the form on success; keeps entered
    /// values for a retry otherwise.
    pub fn apply_outcome(&mut self, outcome: &Result<(), ContactError>) -> Notice {
        self.pending = false;
        match outcome {
            Ok(()) => {
                self.fields = ContactPayload::default();
                Notice {
                    kind: ToastKind::Success,
                    title: "Message sent!".to_string(),
                    description: "Thanks for reaching out. I'll get back to you soon.".to_string(),
                }
            }
            Err(e) => Notice {
                kind: ToastKind::Error,
                title: "Message failed to send".to_string(),
                description: e.to_string(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payload_uses_camel_case_keys() {
        let payload = ContactPayload {
            first_name: "Ada".into(),
            last_name: "Lovelace".into(),
            email: "ada@example.com".into(),
            subject: "Hello".into(),
            message: "Hi there".into(),
        };
        let json = serde_json::to_value(&payload).unwrap();
        let mut keys = json
            .as_object()
            .unwrap()
            .keys()
            .cloned()
            .collect::<Vec<_>>();
        keys.sort();
        assert_eq!(keys, vec!["email", "firstName", "lastName", "message", "subject"]);
    }

    #[test]
    fn test_rejection_surfaces_server_message() {
        let mut form = ContactForm::default();
        form.fields.email = "a@b.c".into();
        let notice = form.apply_outcome(&Err(ContactError::Rejected(Some("quota exceeded".into()))));
        assert_eq!(notice.kind, ToastKind::Error);
        assert_eq!(notice.description, "quota exceeded");
        assert_eq!(form.fields.email, "a@b.c");

        let notice = form.apply_outcome(&Err(ContactError::Rejected(None)));
        assert_eq!(notice.description, "Message was not accepted");
    }

    #[test]
    fn test_one_submission_in_flight() {
        let mut form = ContactForm::default();
        form.fields.subject = "Hello".into();
        let payload = form.begin_submit().expect("idle form should submit");
        assert_eq!(payload.subject, "Hello");
        assert!(form.pending);
        assert_eq!(form.begin_submit(), None);

        form.apply_outcome(&Err(ContactError::Status(502)));
        assert!(!form.pending);
        assert!(form.begin_submit().is_some());
    }
}

use serde::{Deserialize, Serialize};
use thiserror::Error;
use ts_rs::TS;

/// A contact/lead-capture submission. Unlike the IVR record, every field is
/// required: validation runs before submission and blocks the request when it
/// fails.
#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct ContactLead {
    pub name: String,
    pub facility: String,
    pub city: String,
    pub state: String,
    pub zip: String,
    pub phone: String,
    pub email: String,
    pub question: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS, Error)]
#[ts(export)]
#[error("{field}: {message}")]
pub struct LeadValidationError {
    pub field: String,
    pub message: String,
}

impl ContactLead {
    /// Validate all fields. Returns one error per offending field so the form
    /// can surface field-level messages; an empty vec means submittable.
    pub fn validate(&self) -> Vec<LeadValidationError> {
        let required = [
            ("name", &self.name),
            ("facility", &self.facility),
            ("city", &self.city),
            ("state", &self.state),
            ("zip", &self.zip),
            ("phone", &self.phone),
            ("email", &self.email),
            ("question", &self.question),
        ];

        let mut errors = Vec::new();
        for (field, value) in required {
            if value.trim().is_empty() {
                errors.push(LeadValidationError {
                    field: field.to_string(),
                    message: "this field is required".to_string(),
                });
            }
        }

        if !self.email.trim().is_empty() && !is_valid_email(&self.email) {
            errors.push(LeadValidationError {
                field: "email".to_string(),
                message: "enter a valid email address".to_string(),
            });
        }

        errors
    }
}

/// Shape check only (`local@domain.tld`) — deliverability is the backend's
/// problem.
pub fn is_valid_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    let Some((host, tld)) = domain.rsplit_once('.') else {
        return false;
    };
    !host.is_empty() && !tld.is_empty()
}

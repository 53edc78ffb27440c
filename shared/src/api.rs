use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use validator::Validate;

use crate::models::Identifier;

/// Key under which the reviewed appointment is attached to a review body.
pub const APPOINTMENT_ID_KEY: &str = "appointmentId";

// ============================================================================
// Review API Types
// ============================================================================

/// Input collected by the review form before it becomes a draft.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ReviewFormData {
    #[validate(range(min = 1, max = 5))]
    pub rating: u8,

    #[validate(length(max = 2000))]
    pub comment: String,

    pub barber_id: Identifier,
    pub client_id: Option<Identifier>,
}

/// Free-form review fields, not yet bound to an appointment.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReviewDraft(Map<String, Value>);

impl ReviewDraft {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a draft from an arbitrary JSON object. Non-object values yield
    /// `None`.
    pub fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::Object(map) => Some(Self(map)),
            _ => None,
        }
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.0.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Request body for `POST /reviews`: every draft field plus
    /// `appointmentId`, which wins over any field of the same name.
    pub fn into_request_body(self, appointment_id: &Identifier) -> Value {
        let mut fields = self.0;
        fields.insert(APPOINTMENT_ID_KEY.to_string(), appointment_id.clone().into());
        Value::Object(fields)
    }
}

impl From<ReviewFormData> for ReviewDraft {
    fn from(form: ReviewFormData) -> Self {
        let mut draft = Self::new();
        draft.insert("rating", form.rating);
        draft.insert("comment", form.comment);
        draft.insert("barber_id", form.barber_id);
        if let Some(client_id) = form.client_id {
            draft.insert("client_id", client_id);
        }
        draft
    }
}

// ============================================================================
// Error Types
// ============================================================================

/// Error body the backend returns alongside non-success statuses.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

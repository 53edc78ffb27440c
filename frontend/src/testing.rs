//! Fixtures and an in-memory transport for exercising the app without a
//! browser.

use std::cell::RefCell;
use std::collections::VecDeque;

use barbershop_shared::{Appointment, AppointmentStatus, Barber, Identifier, Service};
use serde_json::Value;

use crate::error::{ApiError, ApiResult};
use crate::services::transport::{HttpResponse, Transport};

#[derive(Debug, Clone, PartialEq)]
pub enum RecordedRequest {
    Get(String),
    Post(String, Value),
}

/// Records every request and answers from a queue of canned responses.
#[derive(Debug, Default)]
pub struct RecordingTransport {
    requests: RefCell<Vec<RecordedRequest>>,
    responses: RefCell<VecDeque<ApiResult<HttpResponse>>>,
}

impl RecordingTransport {
    pub fn respond(self, status: u16, body: impl Into<String>) -> Self {
        self.responses.borrow_mut().push_back(Ok(HttpResponse {
            status,
            body: body.into(),
        }));
        self
    }

    pub fn fail(self, error: ApiError) -> Self {
        self.responses.borrow_mut().push_back(Err(error));
        self
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.borrow().clone()
    }

    fn next_response(&self) -> ApiResult<HttpResponse> {
        self.responses
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Err(ApiError::Network("no response queued".to_string())))
    }
}

impl Transport for RecordingTransport {
    async fn get(&self, url: &str) -> ApiResult<HttpResponse> {
        self.requests
            .borrow_mut()
            .push(RecordedRequest::Get(url.to_string()));
        self.next_response()
    }

    async fn post_json(&self, url: &str, body: &Value) -> ApiResult<HttpResponse> {
        self.requests
            .borrow_mut()
            .push(RecordedRequest::Post(url.to_string(), body.clone()));
        self.next_response()
    }
}

pub fn appointment(id: i64, status: &str) -> Appointment {
    Appointment {
        id: Identifier::Number(id),
        barber: Barber {
            id: Identifier::Number(100 + id),
            name: format!("Barber {}", id),
            specialty: Some("Fades".to_string()),
            phone: Some("555-0100".to_string()),
            email: Some("barber@example.com".to_string()),
            image: None,
        },
        service: Service {
            id: None,
            name: "Haircut".to_string(),
            price: 25.0,
            description: None,
        },
        date_time: "2024-04-29 10:00:00".to_string(),
        status: AppointmentStatus::from(status.to_string()),
    }
}

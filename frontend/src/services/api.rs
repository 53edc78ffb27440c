use barbershop_shared::{Appointment, ErrorResponse, Identifier, ReviewDraft};

use crate::config::FrontendConfig;
use crate::error::{ApiError, ApiResult};
use crate::services::transport::{GlooTransport, HttpResponse, Transport};

#[derive(Debug, Clone, PartialEq)]
pub struct ApiService<T = GlooTransport> {
    base_url: String,
    transport: T,
}

impl ApiService<GlooTransport> {
    pub fn new(config: &FrontendConfig) -> Self {
        Self::with_transport(config.api_base.clone(), GlooTransport)
    }
}

impl<T: Transport> ApiService<T> {
    pub fn with_transport(base_url: impl Into<String>, transport: T) -> Self {
        Self {
            base_url: base_url.into(),
            transport,
        }
    }

    #[cfg(test)]
    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn appointments_url(&self, client_id: &Identifier) -> String {
        format!(
            "{}/appointments?clientId={}",
            self.base_url,
            urlencoding::encode(&client_id.to_string())
        )
    }

    pub fn reviews_url(&self) -> String {
        format!("{}/reviews", self.base_url)
    }

    /// Appointments of one client, in the order the backend returned them.
    pub async fn list_appointments(&self, client_id: &Identifier) -> ApiResult<Vec<Appointment>> {
        let url = self.appointments_url(client_id);
        tracing::debug!("Fetching appointments from {}", url);

        let response = ensure_success(self.transport.get(&url).await?)?;

        serde_json::from_str(&response.body).map_err(|e| ApiError::Decode(e.to_string()))
    }

    /// Posts the draft merged with `appointmentId`. The response body is
    /// ignored.
    pub async fn submit_review(
        &self,
        appointment_id: &Identifier,
        draft: ReviewDraft,
    ) -> ApiResult<()> {
        let url = self.reviews_url();
        let body = draft.into_request_body(appointment_id);
        tracing::debug!("Submitting review for appointment {}", appointment_id);

        ensure_success(self.transport.post_json(&url, &body).await?)?;
        Ok(())
    }
}

fn ensure_success(response: HttpResponse) -> ApiResult<HttpResponse> {
    if response.ok() {
        return Ok(response);
    }

    let message = serde_json::from_str::<ErrorResponse>(&response.body)
        .map(|e| e.error)
        .unwrap_or_else(|_| response.body.trim().to_string());

    Err(ApiError::Status {
        status: response.status,
        message,
    })
}

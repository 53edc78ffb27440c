//! The two network interactions of the appointments page, expressed as
//! async steps that yield the reducer action to apply.

use barbershop_shared::{Identifier, ReviewDraft};

use crate::services::api::ApiService;
use crate::services::transport::Transport;
use crate::session::Session;
use crate::state::AppointmentsAction;

/// Loads the signed-in client's appointments. Without an identity nothing is
/// requested and `None` is returned, so the page keeps its loading state.
pub async fn activate<T: Transport>(
    api: &ApiService<T>,
    session: &Session,
) -> Option<AppointmentsAction> {
    let identity = match session.identity() {
        Ok(identity) => identity,
        Err(e) => {
            tracing::error!("Cannot load appointments: {}", e);
            return None;
        }
    };

    match api.list_appointments(&identity.id).await {
        Ok(appointments) => {
            tracing::info!("Loaded {} appointments", appointments.len());
            Some(AppointmentsAction::Loaded(appointments))
        }
        Err(e) => {
            tracing::error!("Error fetching appointments: {}", e);
            Some(AppointmentsAction::LoadFailed)
        }
    }
}

/// Submits a review for the selected appointment. No selection, no request.
/// The returned outcome names the appointment it belongs to.
pub async fn submit_review<T: Transport>(
    api: &ApiService<T>,
    selected: Option<&Identifier>,
    draft: ReviewDraft,
) -> Option<AppointmentsAction> {
    let appointment_id = selected?;

    match api.submit_review(appointment_id, draft).await {
        Ok(()) => {
            tracing::info!("Review submitted for appointment {}", appointment_id);
            Some(AppointmentsAction::ReviewSubmitted(appointment_id.clone()))
        }
        Err(e) => {
            tracing::error!("Error submitting review: {}", e);
            Some(AppointmentsAction::ReviewFailed(
                appointment_id.clone(),
                e.to_string(),
            ))
        }
    }
}

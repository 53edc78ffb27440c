use std::rc::Rc;

use barbershop_shared::{Appointment, Identifier};
use yew::prelude::*;

/// Review modal lifecycle. A selection exists only while the modal is open.
#[derive(Debug, Clone, PartialEq)]
pub enum ReviewModal {
    Closed,
    Open {
        appointment_id: Identifier,
        barber_id: Identifier,
        submitting: bool,
        error: Option<String>,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct AppointmentsState {
    pub loading: bool,
    pub appointments: Vec<Appointment>,
    pub review: ReviewModal,
    pub notice: Option<String>,
}

impl Default for AppointmentsState {
    fn default() -> Self {
        Self {
            loading: true,
            appointments: Vec::new(),
            review: ReviewModal::Closed,
            notice: None,
        }
    }
}

impl AppointmentsState {
    pub fn selected_appointment(&self) -> Option<&Identifier> {
        match &self.review {
            ReviewModal::Open { appointment_id, .. } => Some(appointment_id),
            ReviewModal::Closed => None,
        }
    }

    pub fn is_review_open(&self) -> bool {
        matches!(self.review, ReviewModal::Open { .. })
    }

    /// True while a review POST is in flight. The modal is locked until its
    /// outcome arrives.
    pub fn is_submitting(&self) -> bool {
        matches!(self.review, ReviewModal::Open { submitting: true, .. })
    }

    fn awaits_outcome_for(&self, id: &Identifier) -> bool {
        self.is_submitting() && self.selected_appointment() == Some(id)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum AppointmentsAction {
    Loaded(Vec<Appointment>),
    LoadFailed,
    RequestReview(Identifier),
    CloseReview,
    SubmitStarted,
    /// Outcome of the POST for the given appointment.
    ReviewSubmitted(Identifier),
    ReviewFailed(Identifier, String),
    DismissNotice,
}

impl Reducible for AppointmentsState {
    type Action = AppointmentsAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();

        match action {
            AppointmentsAction::Loaded(appointments) => {
                next.appointments = appointments;
                next.loading = false;
            }
            AppointmentsAction::LoadFailed => {
                next.appointments.clear();
                next.loading = false;
            }
            AppointmentsAction::RequestReview(id) => {
                if self.is_submitting() {
                    tracing::warn!("Review in flight, ignoring request for appointment {}", id);
                    return self;
                }

                let target = next
                    .appointments
                    .iter()
                    .find(|a| a.id == id && a.is_reviewable());

                match target {
                    Some(appointment) => {
                        next.review = ReviewModal::Open {
                            appointment_id: id,
                            barber_id: appointment.barber.id.clone(),
                            submitting: false,
                            error: None,
                        };
                        next.notice = None;
                    }
                    None => {
                        tracing::warn!("Ignoring review request for appointment {}", id);
                        return self;
                    }
                }
            }
            AppointmentsAction::CloseReview => {
                if self.is_submitting() {
                    return self;
                }
                next.review = ReviewModal::Closed;
            }
            AppointmentsAction::SubmitStarted => match &mut next.review {
                ReviewModal::Open {
                    submitting, error, ..
                } => {
                    *submitting = true;
                    *error = None;
                }
                ReviewModal::Closed => return self,
            },
            AppointmentsAction::ReviewSubmitted(id) => {
                if !self.awaits_outcome_for(&id) {
                    tracing::warn!("Dropping stale review outcome for appointment {}", id);
                    return self;
                }
                next.review = ReviewModal::Closed;
                next.notice = Some("Thanks! Your review was submitted.".to_string());
            }
            AppointmentsAction::ReviewFailed(id, message) => {
                if !self.awaits_outcome_for(&id) {
                    tracing::warn!("Dropping stale review outcome for appointment {}", id);
                    return self;
                }
                if let ReviewModal::Open {
                    submitting, error, ..
                } = &mut next.review
                {
                    *submitting = false;
                    *error = Some(message);
                }
            }
            AppointmentsAction::DismissNotice => {
                next.notice = None;
            }
        }

        Rc::new(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::appointment;

    fn loaded(list: Vec<Appointment>) -> Rc<AppointmentsState> {
        Rc::new(AppointmentsState::default()).reduce(AppointmentsAction::Loaded(list))
    }

    #[test]
    fn test_starts_loading() {
        let state = AppointmentsState::default();
        assert!(state.loading);
        assert!(state.appointments.is_empty());
        assert!(!state.is_review_open());
    }

    #[test]
    fn test_load_failure_ends_loading_with_empty_list() {
        let state = Rc::new(AppointmentsState::default()).reduce(AppointmentsAction::LoadFailed);
        assert!(!state.loading);
        assert!(state.appointments.is_empty());
    }

    #[test]
    fn test_request_review_opens_modal_for_completed() {
        let state = loaded(vec![appointment(7, "Completed")])
            .reduce(AppointmentsAction::RequestReview(Identifier::Number(7)));

        assert_eq!(state.selected_appointment(), Some(&Identifier::Number(7)));
        assert_eq!(
            state.review,
            ReviewModal::Open {
                appointment_id: Identifier::Number(7),
                barber_id: Identifier::Number(107),
                submitting: false,
                error: None,
            }
        );
    }

    #[test]
    fn test_request_review_ignored_for_scheduled_or_unknown() {
        let state = loaded(vec![appointment(1, "Scheduled")]);
        let state = state.reduce(AppointmentsAction::RequestReview(Identifier::Number(1)));
        assert!(!state.is_review_open());

        let state = state.reduce(AppointmentsAction::RequestReview(Identifier::Number(99)));
        assert!(!state.is_review_open());
    }

    #[test]
    fn test_close_clears_selection() {
        let state = loaded(vec![appointment(7, "Completed")])
            .reduce(AppointmentsAction::RequestReview(Identifier::Number(7)))
            .reduce(AppointmentsAction::CloseReview);
        assert_eq!(state.selected_appointment(), None);
    }

    #[test]
    fn test_failed_submit_keeps_modal_open() {
        let state = loaded(vec![appointment(7, "Completed")])
            .reduce(AppointmentsAction::RequestReview(Identifier::Number(7)))
            .reduce(AppointmentsAction::SubmitStarted)
            .reduce(AppointmentsAction::ReviewFailed(
                Identifier::Number(7),
                "HTTP error 500".to_string(),
            ));

        assert_eq!(state.selected_appointment(), Some(&Identifier::Number(7)));
        match &state.review {
            ReviewModal::Open {
                submitting, error, ..
            } => {
                assert!(!submitting);
                assert_eq!(error.as_deref(), Some("HTTP error 500"));
            }
            ReviewModal::Closed => panic!("modal should stay open"),
        }
    }

    #[test]
    fn test_successful_submit_closes_and_notifies() {
        let state = loaded(vec![appointment(7, "Completed")])
            .reduce(AppointmentsAction::RequestReview(Identifier::Number(7)))
            .reduce(AppointmentsAction::SubmitStarted)
            .reduce(AppointmentsAction::ReviewSubmitted(Identifier::Number(7)));

        assert_eq!(state.selected_appointment(), None);
        assert!(state.notice.is_some());

        let state = state.reduce(AppointmentsAction::DismissNotice);
        assert!(state.notice.is_none());
    }

    #[test]
    fn test_submit_events_ignored_when_closed() {
        let state = loaded(vec![]);
        let after = state.clone().reduce(AppointmentsAction::SubmitStarted);
        assert!(Rc::ptr_eq(&state, &after));

        let after = state
            .clone()
            .reduce(AppointmentsAction::ReviewSubmitted(Identifier::Number(7)));
        assert!(Rc::ptr_eq(&state, &after));
        assert!(after.notice.is_none());
    }

    #[test]
    fn test_modal_locked_while_submitting() {
        let submitting = loaded(vec![appointment(7, "Completed"), appointment(8, "Completed")])
            .reduce(AppointmentsAction::RequestReview(Identifier::Number(7)))
            .reduce(AppointmentsAction::SubmitStarted);
        assert!(submitting.is_submitting());

        let after = submitting.clone().reduce(AppointmentsAction::CloseReview);
        assert!(Rc::ptr_eq(&submitting, &after));

        let after = submitting
            .clone()
            .reduce(AppointmentsAction::RequestReview(Identifier::Number(8)));
        assert!(Rc::ptr_eq(&submitting, &after));
        assert_eq!(after.selected_appointment(), Some(&Identifier::Number(7)));
    }

    #[test]
    fn test_close_allowed_after_failed_submit() {
        let state = loaded(vec![appointment(7, "Completed"), appointment(8, "Completed")])
            .reduce(AppointmentsAction::RequestReview(Identifier::Number(7)))
            .reduce(AppointmentsAction::SubmitStarted)
            .reduce(AppointmentsAction::ReviewFailed(
                Identifier::Number(7),
                "offline".to_string(),
            ))
            .reduce(AppointmentsAction::CloseReview)
            .reduce(AppointmentsAction::RequestReview(Identifier::Number(8)));

        assert_eq!(state.selected_appointment(), Some(&Identifier::Number(8)));
        assert!(!state.is_submitting());
    }

    #[test]
    fn test_stale_outcome_leaves_other_modal_untouched() {
        // 7's request was answered late; 8 is now open with its own POST in flight
        let state = loaded(vec![appointment(7, "Completed"), appointment(8, "Completed")])
            .reduce(AppointmentsAction::RequestReview(Identifier::Number(8)))
            .reduce(AppointmentsAction::SubmitStarted);

        let after = state
            .clone()
            .reduce(AppointmentsAction::ReviewSubmitted(Identifier::Number(7)));
        assert!(Rc::ptr_eq(&state, &after));
        assert_eq!(after.selected_appointment(), Some(&Identifier::Number(8)));
        assert!(after.notice.is_none());

        let after = state.clone().reduce(AppointmentsAction::ReviewFailed(
            Identifier::Number(7),
            "HTTP error 500".to_string(),
        ));
        assert!(Rc::ptr_eq(&state, &after));
        match &after.review {
            ReviewModal::Open {
                submitting, error, ..
            } => {
                assert!(*submitting);
                assert!(error.is_none());
            }
            ReviewModal::Closed => panic!("modal for 8 should stay open"),
        }

        let done = after.reduce(AppointmentsAction::ReviewSubmitted(Identifier::Number(8)));
        assert!(!done.is_review_open());
        assert!(done.notice.is_some());
    }

    #[test]
    fn test_outcome_ignored_once_not_submitting() {
        let state = loaded(vec![appointment(7, "Completed")])
            .reduce(AppointmentsAction::RequestReview(Identifier::Number(7)));

        let after = state
            .clone()
            .reduce(AppointmentsAction::ReviewSubmitted(Identifier::Number(7)));
        assert!(Rc::ptr_eq(&state, &after));
    }
}

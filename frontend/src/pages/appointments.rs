use barbershop_shared::{Identifier, ReviewDraft};
use yew::prelude::*;

use crate::components::appointment_list::AppointmentList;
use crate::components::review_form::ReviewForm;
use crate::config::FrontendConfig;
use crate::services::api::ApiService;
use crate::services::tasks::TaskScope;
use crate::services::workflow;
use crate::session::Session;
use crate::state::{AppointmentsAction, AppointmentsState, ReviewModal};

#[function_component(Appointments)]
pub fn appointments() -> Html {
    let config = use_context::<FrontendConfig>().unwrap_or_default();
    let session = use_context::<Session>().unwrap_or_default();
    let state = use_reducer(AppointmentsState::default);
    let tasks = use_mut_ref(TaskScope::default);
    let api = ApiService::new(&config);

    {
        let state = state.clone();
        let tasks = tasks.clone();
        let api = api.clone();
        let session = session.clone();

        use_effect_with((), move |_| {
            tasks.borrow().spawn(async move {
                if let Some(action) = workflow::activate(&api, &session).await {
                    state.dispatch(action);
                }
            });

            move || {
                tasks.borrow().abort_all();
            }
        });
    }

    let on_review = {
        let state = state.clone();
        Callback::from(move |id: Identifier| {
            state.dispatch(AppointmentsAction::RequestReview(id));
        })
    };

    let on_submit = {
        let state = state.clone();
        let tasks = tasks.clone();
        let api = api.clone();

        Callback::from(move |draft: ReviewDraft| {
            if state.is_submitting() {
                return;
            }
            let Some(selected) = state.selected_appointment().cloned() else {
                return;
            };
            state.dispatch(AppointmentsAction::SubmitStarted);

            let state = state.clone();
            let api = api.clone();
            tasks.borrow().spawn(async move {
                if let Some(action) = workflow::submit_review(&api, Some(&selected), draft).await {
                    state.dispatch(action);
                }
            });
        })
    };

    let on_close = {
        let state = state.clone();
        Callback::from(move |_| state.dispatch(AppointmentsAction::CloseReview))
    };

    let dismiss_notice = {
        let state = state.clone();
        Callback::from(move |_| state.dispatch(AppointmentsAction::DismissNotice))
    };

    let client_id = session.identity().ok().map(|client| client.id.clone());

    html! {
        <div class={classes!("container", state.is_review_open().then_some("modal-open"))}>
            if state.loading {
                <div class="loading">
                    <div class="spinner"></div>
                </div>
            } else {
                <>
                    <h2>{ "My Appointments" }</h2>
                    if let Some(notice) = state.notice.clone() {
                        <div class="notice notice-success">
                            <span>{ notice }</span>
                            <button class="btn btn-link" onclick={dismiss_notice}>{ "Dismiss" }</button>
                        </div>
                    }
                    <AppointmentList
                        appointments={state.appointments.clone()}
                        placeholder_image={config.placeholder_image.clone()}
                        on_review={on_review}
                    />
                </>
            }
            if let ReviewModal::Open { barber_id, submitting, error, .. } = state.review.clone() {
                <ReviewForm
                    barber_id={barber_id}
                    client_id={client_id}
                    submitting={submitting}
                    error={error}
                    on_submit={on_submit}
                    on_close={on_close}
                />
            }
        </div>
    }
}

use barbershop_shared::{Appointment, Identifier};
use yew::prelude::*;

use crate::components::appointment_card::{AppointmentCard, AppointmentCardModel};

pub const NO_APPOINTMENTS: &str = "No appointments found";

#[derive(Debug, Clone, PartialEq)]
pub enum ListContent {
    Empty,
    Cards(Vec<AppointmentCardModel>),
}

/// Cards in the order the backend returned them.
pub fn list_content(appointments: &[Appointment], placeholder_image: &str) -> ListContent {
    if appointments.is_empty() {
        return ListContent::Empty;
    }

    ListContent::Cards(
        appointments
            .iter()
            .map(|a| AppointmentCardModel::new(a, placeholder_image))
            .collect(),
    )
}

#[derive(Properties, PartialEq)]
pub struct AppointmentListProps {
    pub appointments: Vec<Appointment>,
    pub placeholder_image: String,
    pub on_review: Callback<Identifier>,
}

#[function_component(AppointmentList)]
pub fn appointment_list(props: &AppointmentListProps) -> Html {
    match list_content(&props.appointments, &props.placeholder_image) {
        ListContent::Empty => html! {
            <div class="empty-state">
                <p>{ NO_APPOINTMENTS }</p>
            </div>
        },
        ListContent::Cards(cards) => html! {
            <div class="appointment-list">
                { for cards.into_iter().map(|card| {
                    html! {
                        <AppointmentCard card={card} on_review={props.on_review.clone()} />
                    }
                })}
            </div>
        },
    }
}

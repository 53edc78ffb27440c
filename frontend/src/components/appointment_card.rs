use barbershop_shared::{Appointment, AppointmentStatus, Identifier};
use yew::prelude::*;

use crate::format;

/// Display-ready fields of one appointment card.
#[derive(Debug, Clone, PartialEq)]
pub struct AppointmentCardModel {
    pub id: Identifier,
    pub image_url: String,
    pub barber_name: String,
    pub specialty: String,
    pub phone: String,
    pub email: String,
    pub service_name: String,
    pub price: String,
    pub date: String,
    pub time: String,
    pub status: String,
    pub badge_class: &'static str,
    pub can_review: bool,
}

impl AppointmentCardModel {
    pub fn new(appointment: &Appointment, placeholder_image: &str) -> Self {
        let barber = &appointment.barber;
        let (date, time) = match appointment.scheduled_at() {
            Some(dt) => (format::long_date(&dt), format::time_of_day(&dt)),
            None => (format::INVALID_DATE.to_string(), String::new()),
        };

        Self {
            id: appointment.id.clone(),
            image_url: placeholder_image.to_string(),
            barber_name: barber.name.clone(),
            specialty: barber.specialty.clone().unwrap_or_default(),
            phone: barber.phone.clone().unwrap_or_default(),
            email: barber.email.clone().unwrap_or_default(),
            service_name: appointment.service.name.clone(),
            price: format::price(appointment.service.price),
            date,
            time,
            status: appointment.status.to_string(),
            badge_class: badge_class(&appointment.status),
            can_review: appointment.is_reviewable(),
        }
    }
}

pub fn badge_class(status: &AppointmentStatus) -> &'static str {
    match status {
        AppointmentStatus::Scheduled => "status-scheduled",
        AppointmentStatus::Completed => "status-completed",
        AppointmentStatus::Other(_) => "status-other",
    }
}

#[derive(Properties, PartialEq)]
pub struct AppointmentCardProps {
    pub card: AppointmentCardModel,
    pub on_review: Callback<Identifier>,
}

#[function_component(AppointmentCard)]
pub fn appointment_card(props: &AppointmentCardProps) -> Html {
    let card = &props.card;

    let request_review = {
        let on_review = props.on_review.clone();
        let id = card.id.clone();
        Callback::from(move |_| on_review.emit(id.clone()))
    };

    html! {
        <div class="appointment-card">
            <img class="appointment-image" src={card.image_url.clone()} alt={card.barber_name.clone()} />
            <div class="appointment-details">
                <h3 class="barber-name">{ &card.barber_name }</h3>
                <p class="barber-specialty">{ format!("Specialty: {}", card.specialty) }</p>
                <div class="barber-contact">
                    <span class="icon">{ "☎" }</span>{ &card.phone }
                </div>
                <div class="barber-contact">
                    <span class="icon">{ "✉" }</span>{ &card.email }
                </div>
                <div class="appointment-service">
                    <span class="icon">{ "✂" }</span>
                    <span class="service-name">{ &card.service_name }</span>
                    { format!(" – {}", card.price) }
                </div>
                <div class="appointment-when">
                    <span class="appointment-date">{ &card.date }</span>
                    <span class="appointment-time">{ &card.time }</span>
                </div>
                <div class="appointment-footer">
                    <span class={classes!("status-badge", card.badge_class)}>
                        { &card.status }
                    </span>
                    if card.can_review {
                        <button class="btn btn-link" onclick={request_review}>
                            { "Leave a Review" }
                        </button>
                    }
                </div>
            </div>
        </div>
    }
}

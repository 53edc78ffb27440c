//! Wire types shared between the barbershop frontend and its backend.

pub mod api;
pub mod models;

pub use api::{ErrorResponse, ReviewDraft, ReviewFormData, APPOINTMENT_ID_KEY};
pub use models::{
    Appointment, AppointmentStatus, Barber, ClientIdentity, Identifier, Service,
};

pub mod appointment_card;
pub mod appointment_list;
pub mod header;
pub mod review_form;

pub mod api;
pub mod tasks;
pub mod transport;
pub mod workflow;

pub mod errors;
pub mod service;
pub mod structs;

pub static PAYMENT_STATUS_COMPLETED: &str = "completado";
pub static PAYMENT_STATUS_LEAD: &str = "lead";

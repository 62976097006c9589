pub mod enums;
pub mod models;
pub mod service;
pub mod util;

pub static DEFAULT_CURRENCY: &str = "USD";
pub static DEFAULT_AMOUNT: &str = "0.00";

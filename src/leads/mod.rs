pub mod controller;
pub mod dtos;
pub mod errors;
pub mod service;

pub static LEAD_TIPO: &str = "LEAD_REGISTRATION";
pub static LEAD_ID_PREFIX: &str = "LEAD_";
pub static DEFAULT_LEAD_NAME: &str = "Anonymous";
pub static PRODUCT_NEWSLETTER: &str = "Newsletter Opt-in";
pub static PRODUCT_LEAD_ONLY: &str = "Lead Only";

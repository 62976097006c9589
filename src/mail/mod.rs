pub mod controller;
pub mod dtos;
pub mod errors;
pub mod service;
pub mod structs;
pub mod templates;

pub static PDF_ATTACHMENT_FILENAME: &str = "El-Proximo-Hit-Guia.pdf";
pub static TEMPLATE_ATTACHMENT_FILENAME: &str = "Pro-Tools-Template.ptx";
pub static DEFAULT_CUSTOMER_NAME: &str = "Artista";
pub static DEFAULT_DISPLAY_AMOUNT: &str = "10.00";

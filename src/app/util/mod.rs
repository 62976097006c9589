pub mod html;
pub mod reqwest;
pub mod time;

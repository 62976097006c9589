pub mod controller;

pub static DEFAULT_PARTICIPANT_COUNT: u64 = 17;

pub mod outbound_email;

pub mod send_email_dto;

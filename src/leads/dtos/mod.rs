pub mod register_lead_dto;

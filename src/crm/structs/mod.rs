pub mod crm_record;

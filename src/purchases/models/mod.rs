pub mod purchase_event;

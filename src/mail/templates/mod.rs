pub mod purchase_confirmation_template;

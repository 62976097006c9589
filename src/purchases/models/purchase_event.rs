use crate::purchases::enums::payment_provider::PaymentProvider;

/// A verified purchase, flattened from a provider webhook. Lives for one request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PurchaseEvent {
    pub provider: PaymentProvider,
    pub event_type: String,
    pub transaction_id: String,
    pub email: String,
    pub name: String,
    pub amount: String,
    pub currency: String,
}

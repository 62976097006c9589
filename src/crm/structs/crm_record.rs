use serde::Serialize;

/// Row accepted by the spreadsheet intake script. Field order follows the sheet columns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CrmRecord {
    #[serde(rename = "apiKey")]
    pub api_key: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    #[serde(rename = "transactionId")]
    pub transaction_id: String,
    pub tipo: String,
    pub amount: String,
    pub currency: String,
    pub productos: String,
    pub estado_pago: String,
    pub nota: String,
    pub timestamp: String,
}

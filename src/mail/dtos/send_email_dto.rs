use serde::Deserialize;
use validator::Validate;

#[derive(Debug, Deserialize, Validate)]
pub struct SendEmailDto {
    #[validate(email)]
    pub email: Option<String>,
    pub name: Option<String>,
    #[serde(rename = "transactionId")]
    pub transaction_id: Option<String>,
    pub amount: Option<String>,
}

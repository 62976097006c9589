use serde::Deserialize;
use validator::Validate;

#[derive(Debug, Deserialize, Validate)]
pub struct RegisterLeadDto {
    #[validate(email)]
    pub email: Option<String>,
    #[validate(length(max = 256, message = "name must be at most 256 characters."))]
    pub name: Option<String>,
    #[serde(default)]
    pub newsletter: bool,
}

use serde::{Deserialize, Serialize};
use chrono::{DateTime, Utc};

use crate::models::Driver;

// Request para cadastrar um motorista
#[derive(Debug, Deserialize)]
pub struct CreateDriverRequest {
    pub name: String,
    pub phone: Option<String>,
}

// Response de motorista
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DriverResponse {
    pub id: String,
    pub name: String,
    pub phone: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<&Driver> for DriverResponse {
    fn from(driver: &Driver) -> Self {
        Self {
            id: driver.id.clone(),
            name: driver.name.clone(),
            phone: driver.phone.clone(),
            created_at: driver.created_at,
        }
    }
}

//! Modelo de Driver

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::utils::errors::AppResult;
use crate::utils::validation::normalize_optional;

/// Motorista cadastrado
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Driver {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Dados de cadastro de um motorista, antes de o gateway atribuir id e data
#[derive(Debug, Clone, Serialize, Validate)]
pub struct NewDriver {
    #[validate(length(min = 1, message = "Informe o nome do motorista"))]
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

impl NewDriver {
    pub fn new(name: &str, phone: Option<String>) -> AppResult<Self> {
        let driver = Self {
            name: name.trim().to_string(),
            phone: normalize_optional(phone),
        };
        driver.validate()?;
        Ok(driver)
    }
}

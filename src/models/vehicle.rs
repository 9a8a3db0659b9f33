//! Modelo de Vehicle
//!
//! A placa é guardada em maiúsculas e é a chave natural de ordenação.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use validator::Validate;

use crate::utils::errors::AppResult;
use crate::utils::validation::normalize_optional;

/// Veículo cadastrado
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Vehicle {
    pub id: String,
    pub plate: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Vehicle {
    /// Comparação por placa sem diferenciar maiúsculas
    pub fn cmp_by_plate(&self, other: &Vehicle) -> Ordering {
        normalize_plate(&self.plate).cmp(&normalize_plate(&other.plate))
    }
}

/// Dados de cadastro de um veículo
#[derive(Debug, Clone, Serialize, Validate)]
pub struct NewVehicle {
    #[validate(length(min = 1, message = "Informe a placa do veículo"))]
    pub plate: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
}

impl NewVehicle {
    pub fn new(plate: &str, model: Option<String>) -> AppResult<Self> {
        let vehicle = Self {
            plate: normalize_plate(plate),
            model: normalize_optional(model),
        };
        vehicle.validate()?;
        Ok(vehicle)
    }
}

pub fn normalize_plate(plate: &str) -> String {
    plate.trim().to_uppercase()
}

use serde::{Deserialize, Serialize};
use chrono::{DateTime, Utc};

use crate::models::Vehicle;

// Request para cadastrar um veículo
#[derive(Debug, Deserialize)]
pub struct CreateVehicleRequest {
    pub plate: String,
    pub model: Option<String>,
}

// Response de veículo
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VehicleResponse {
    pub id: String,
    pub plate: String,
    pub model: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<&Vehicle> for VehicleResponse {
    fn from(vehicle: &Vehicle) -> Self {
        Self {
            id: vehicle.id.clone(),
            plate: vehicle.plate.to_uppercase(),
            model: vehicle.model.clone(),
            created_at: vehicle.created_at,
        }
    }
}

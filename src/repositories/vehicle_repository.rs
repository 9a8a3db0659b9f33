use std::sync::Arc;

use crate::models::{Collection, NewVehicle, Vehicle};
use crate::repositories::document_store::{decode_all, encode, DocumentStore};
use crate::utils::errors::{AppError, AppResult};

#[derive(Clone)]
pub struct VehicleRepository {
    store: Arc<dyn DocumentStore>,
}

impl VehicleRepository {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }

    pub async fn create(&self, vehicle: NewVehicle) -> AppResult<Vehicle> {
        let action = "adicionar veículo";
        let data = encode(&vehicle).map_err(AppError::persistence(action))?;
        let created = self
            .store
            .create(Collection::Vehicles, data)
            .await
            .map_err(AppError::persistence(action))?;

        Ok(Vehicle {
            id: created.id,
            plate: vehicle.plate,
            model: vehicle.model,
            created_at: created.created_at,
        })
    }

    pub async fn list(&self) -> AppResult<Vec<Vehicle>> {
        let docs = self
            .store
            .list(Collection::Vehicles)
            .await
            .map_err(AppError::persistence("carregar veículos"))?;
        Ok(decode_all(Collection::Vehicles, docs))
    }

    pub async fn delete(&self, id: &str) -> AppResult<()> {
        self.store
            .delete(Collection::Vehicles, id)
            .await
            .map_err(AppError::persistence("excluir veículo"))
    }
}

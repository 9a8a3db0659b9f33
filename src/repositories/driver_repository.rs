use std::sync::Arc;

use crate::models::{Collection, Driver, NewDriver};
use crate::repositories::document_store::{decode_all, encode, DocumentStore};
use crate::utils::errors::{AppError, AppResult};

#[derive(Clone)]
pub struct DriverRepository {
    store: Arc<dyn DocumentStore>,
}

impl DriverRepository {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }

    pub async fn create(&self, driver: NewDriver) -> AppResult<Driver> {
        let action = "adicionar motorista";
        let data = encode(&driver).map_err(AppError::persistence(action))?;
        let created = self
            .store
            .create(Collection::Drivers, data)
            .await
            .map_err(AppError::persistence(action))?;

        Ok(Driver {
            id: created.id,
            name: driver.name,
            phone: driver.phone,
            created_at: created.created_at,
        })
    }

    pub async fn list(&self) -> AppResult<Vec<Driver>> {
        let docs = self
            .store
            .list(Collection::Drivers)
            .await
            .map_err(AppError::persistence("carregar motoristas"))?;
        Ok(decode_all(Collection::Drivers, docs))
    }

    pub async fn delete(&self, id: &str) -> AppResult<()> {
        self.store
            .delete(Collection::Drivers, id)
            .await
            .map_err(AppError::persistence("excluir motorista"))
    }
}

use std::sync::Arc;
use tokio::sync::Mutex;

use crate::dto::common_dto::ApiResponse;
use crate::dto::vehicle_dto::{CreateVehicleRequest, VehicleResponse};
use crate::models::NewVehicle;
use crate::state::{AppState, Session};
use crate::utils::errors::AppResult;

pub struct VehicleController {
    session: Arc<Mutex<Session>>,
}

impl VehicleController {
    pub fn new(state: &AppState) -> Self {
        Self {
            session: state.session.clone(),
        }
    }

    /// Veículos ordenados pela placa
    pub async fn list(&self) -> Vec<VehicleResponse> {
        let session = self.session.lock().await;
        session
            .catalog
            .vehicles_by_plate()
            .into_iter()
            .map(VehicleResponse::from)
            .collect()
    }

    pub async fn create(
        &self,
        request: CreateVehicleRequest,
    ) -> AppResult<ApiResponse<VehicleResponse>> {
        let new_vehicle = NewVehicle::new(&request.plate, request.model)?;

        let mut session = self.session.lock().await;
        let vehicle = session.catalog.register_vehicle(new_vehicle).await?;

        Ok(ApiResponse::success_with_message(
            VehicleResponse::from(&vehicle),
            "Veículo adicionado com sucesso".to_string(),
        ))
    }

    pub async fn delete(&self, id: &str, confirmed: bool) -> AppResult<ApiResponse<String>> {
        let mut session = self.session.lock().await;
        session.catalog.delete_vehicle(id, confirmed).await?;

        Ok(ApiResponse::success_with_message(
            id.to_string(),
            "Veículo excluído com sucesso".to_string(),
        ))
    }
}

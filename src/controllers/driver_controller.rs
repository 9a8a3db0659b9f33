use std::sync::Arc;
use tokio::sync::Mutex;

use crate::dto::common_dto::ApiResponse;
use crate::dto::driver_dto::{CreateDriverRequest, DriverResponse};
use crate::models::NewDriver;
use crate::state::{AppState, Session};
use crate::utils::errors::AppResult;

pub struct DriverController {
    session: Arc<Mutex<Session>>,
}

impl DriverController {
    pub fn new(state: &AppState) -> Self {
        Self {
            session: state.session.clone(),
        }
    }

    /// Motoristas do catálogo, mais recentes primeiro
    pub async fn list(&self) -> Vec<DriverResponse> {
        let session = self.session.lock().await;
        session.catalog.drivers().iter().map(DriverResponse::from).collect()
    }

    pub async fn create(
        &self,
        request: CreateDriverRequest,
    ) -> AppResult<ApiResponse<DriverResponse>> {
        let new_driver = NewDriver::new(&request.name, request.phone)?;

        let mut session = self.session.lock().await;
        let driver = session.catalog.register_driver(new_driver).await?;

        Ok(ApiResponse::success_with_message(
            DriverResponse::from(&driver),
            "Motorista adicionado com sucesso".to_string(),
        ))
    }

    pub async fn delete(&self, id: &str, confirmed: bool) -> AppResult<ApiResponse<String>> {
        let mut session = self.session.lock().await;
        session.catalog.delete_driver(id, confirmed).await?;

        Ok(ApiResponse::success_with_message(
            id.to_string(),
            "Motorista excluído com sucesso".to_string(),
        ))
    }
}

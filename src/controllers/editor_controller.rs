use std::sync::Arc;
use tokio::sync::Mutex;

use crate::dto::common_dto::ApiResponse;
use crate::dto::driver_dto::DriverResponse;
use crate::dto::program_dto::{EditorResponse, RouteDraftResponse, RouteForm};
use crate::dto::vehicle_dto::VehicleResponse;
use crate::models::DailyProgram;
use crate::services::dispatch_links::DispatchLinks;
use crate::state::{AppState, Session};
use crate::utils::errors::AppResult;

pub struct EditorController {
    session: Arc<Mutex<Session>>,
}

impl EditorController {
    pub fn new(state: &AppState) -> Self {
        Self {
            session: state.session.clone(),
        }
    }

    pub async fn view(&self) -> EditorResponse {
        let session = self.session.lock().await;
        editor_view(&session)
    }

    pub async fn open(&self, id: &str) -> AppResult<EditorResponse> {
        let mut guard = self.session.lock().await;
        let Session { catalog, editor } = &mut *guard;
        editor.open_program(catalog, id)?;
        Ok(editor_view(&guard))
    }

    pub async fn close(&self) -> EditorResponse {
        let mut session = self.session.lock().await;
        session.editor.close_program();
        editor_view(&session)
    }

    pub async fn begin_route(&self) -> AppResult<EditorResponse> {
        let mut session = self.session.lock().await;
        session.editor.begin_route()?;
        Ok(editor_view(&session))
    }

    /// Abre um roteiro existente e devolve os valores para o formulário
    pub async fn begin_route_edit(&self, route_id: &str) -> AppResult<RouteDraftResponse> {
        let mut session = self.session.lock().await;
        let route = session.editor.begin_route_edit(route_id)?;
        Ok(RouteDraftResponse { route: Some(route) })
    }

    pub async fn cancel_route(&self) -> EditorResponse {
        let mut session = self.session.lock().await;
        session.editor.cancel_route();
        editor_view(&session)
    }

    pub async fn submit_route(&self, form: RouteForm) -> AppResult<ApiResponse<DailyProgram>> {
        let mut guard = self.session.lock().await;
        let Session { catalog, editor } = &mut *guard;
        let program = editor.submit_route(catalog, form).await?;

        Ok(ApiResponse::success_with_message(
            program,
            "Roteiro salvo com sucesso".to_string(),
        ))
    }

    pub async fn remove_route(&self, route_id: &str) -> AppResult<ApiResponse<DailyProgram>> {
        let mut guard = self.session.lock().await;
        let Session { catalog, editor } = &mut *guard;
        let program = editor.remove_route(catalog, route_id).await?;

        Ok(ApiResponse::success_with_message(
            program,
            "Roteiro removido".to_string(),
        ))
    }

    pub async fn update_message(&self, message: String) -> AppResult<ApiResponse<DailyProgram>> {
        let mut guard = self.session.lock().await;
        let Session { catalog, editor } = &mut *guard;
        let program = editor.update_message(catalog, message).await?;
        Ok(ApiResponse::success(program))
    }

    /// Links de envio da mensagem atual
    pub async fn dispatch(&self) -> AppResult<DispatchLinks> {
        let session = self.session.lock().await;
        Ok(DispatchLinks::for_message(session.editor.current_message()?))
    }
}

fn editor_view(session: &Session) -> EditorResponse {
    EditorResponse {
        snapshot: session.editor.snapshot(),
        drivers: session
            .catalog
            .drivers_by_name()
            .into_iter()
            .map(DriverResponse::from)
            .collect(),
        vehicles: session
            .catalog
            .vehicles_by_plate()
            .into_iter()
            .map(VehicleResponse::from)
            .collect(),
    }
}

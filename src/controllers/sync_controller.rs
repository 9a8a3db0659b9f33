use std::sync::Arc;
use tokio::sync::Mutex;

use crate::services::SyncReport;
use crate::state::{AppState, Session};

pub struct SyncController {
    session: Arc<Mutex<Session>>,
}

impl SyncController {
    pub fn new(state: &AppState) -> Self {
        Self {
            session: state.session.clone(),
        }
    }

    /// Recarrega motoristas, veículos e programações do banco.
    /// A programação ativa é atualizada se ainda existir.
    pub async fn sync(&self) -> SyncReport {
        let mut guard = self.session.lock().await;
        let Session { catalog, editor } = &mut *guard;
        let report = catalog.reload().await;
        editor.refresh_active(catalog);
        report
    }
}

//! Estado compartilhado da aplicação
//!
//! A sessão (catálogo + editor) fica atrás de um único `Mutex`: as operações
//! que alteram dados rodam uma de cada vez, e nenhuma escrita fica pela metade
//! visível para outra requisição.

use std::sync::Arc;
use tokio::sync::Mutex;

use crate::config::environment::EnvironmentConfig;
use crate::repositories::DocumentStore;
use crate::services::{Catalog, ProgramEditor, SyncReport};

pub struct Session {
    pub catalog: Catalog,
    pub editor: ProgramEditor,
}

impl Session {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self {
            catalog: Catalog::new(store.clone()),
            editor: ProgramEditor::new(store),
        }
    }
}

#[derive(Clone)]
pub struct AppState {
    pub config: EnvironmentConfig,
    pub session: Arc<Mutex<Session>>,
}

impl AppState {
    pub fn new(config: EnvironmentConfig, store: Arc<dyn DocumentStore>) -> Self {
        Self {
            config,
            session: Arc::new(Mutex::new(Session::new(store))),
        }
    }

    /// Carga inicial das três coleções
    pub async fn reload(&self) -> SyncReport {
        self.session.lock().await.catalog.reload().await
    }
}

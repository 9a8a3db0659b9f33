use anyhow::Result;
use dotenvy::dotenv;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::signal;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use dispatch_planner::config::environment::{EnvironmentConfig, StorageBackend};
use dispatch_planner::create_app_router;
use dispatch_planner::database::DatabaseConnection;
use dispatch_planner::repositories::{DocumentStore, MemoryDocumentStore, PgDocumentStore};
use dispatch_planner::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Carregar variáveis de ambiente
    dotenv().ok();

    let config = EnvironmentConfig::from_env()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.default_log_filter())),
        )
        .init();

    info!("🚚 Planejador de Despacho");
    info!("================================================");
    info!("⚙️ Ambiente: {}", config.environment);

    let store: Arc<dyn DocumentStore> = match config.storage_backend {
        StorageBackend::Postgres => {
            let connection = match DatabaseConnection::new_default().await {
                Ok(conn) => conn,
                Err(e) => {
                    error!("❌ Erro conectando ao banco de dados: {}", e);
                    return Err(anyhow::anyhow!("Erro de banco de dados: {}", e));
                }
            };
            connection.run_migrations().await?;
            Arc::new(PgDocumentStore::new(connection.pool().clone()))
        }
        StorageBackend::Memory => {
            warn!("⚠️ Armazenamento em memória: os dados somem ao reiniciar");
            Arc::new(MemoryDocumentStore::new())
        }
    };

    let state = AppState::new(config.clone(), store);
    let report = state.reload().await;
    if !report.is_complete() {
        warn!("⚠️ Carga inicial incompleta: {:?}", report);
    }

    let app = create_app_router(state);
    let addr: SocketAddr = config.server_url().parse()?;

    info!("🌐 Servidor iniciando em http://{}", addr);
    info!("🔍 Endpoints disponíveis:");
    info!("   GET  /health");
    info!("   POST /api/sync");
    info!("   GET|POST /api/drivers, DELETE /api/drivers/:id?confirm=true");
    info!("   GET|POST /api/vehicles, DELETE /api/vehicles/:id?confirm=true");
    info!("   GET|POST /api/programs, GET|DELETE /api/programs/:id");
    info!("   /api/editor (open, close, routes, message, dispatch)");
    info!("   GET  /api/reports/daily[/export]?date=AAAA-MM-DD");
    info!("   GET  /api/reports/monthly[/export]?month=AAAA-MM");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| {
            error!("❌ Erro do servidor: {}", e);
            e
        })?;

    info!("👋 Servidor encerrado");
    Ok(())
}

/// Sinal de desligamento gracioso
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("❌ Falha ao instalar o handler de Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                error!("❌ Falha ao instalar o handler de SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("🛑 Ctrl+C recebido, desligando servidor...");
        },
        _ = terminate => {
            info!("🛑 Sinal de término recebido, desligando servidor...");
        },
    }
}

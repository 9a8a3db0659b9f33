//! Sistema de tratamento de erros
//!
//! Este módulo define os tipos de erro do sistema
//! e sua conversão em respostas HTTP.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::repositories::document_store::StoreError;

/// Erros principais da aplicação
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(#[from] validator::ValidationErrors),

    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Falha de escrita no gateway; a mensagem é a que o operador vê.
    #[error("Erro ao {action}. Tente novamente.")]
    Persistence {
        action: &'static str,
        #[source]
        source: StoreError,
    },

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("No data: {0}")]
    NoData(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Confirmation required: {0}")]
    ConfirmationRequired(String),

    #[error("Export error: {0}")]
    Export(#[from] rust_xlsxwriter::XlsxError),

    #[error("Internal server error: {0}")]
    Internal(String),
}

/// Resposta de erro da API
#[derive(Debug, serde::Serialize)]
struct ErrorResponse {
    error: String,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    code: Option<String>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_response) = match self {
            AppError::Validation(e) => {
                tracing::debug!("Validation error: {}", e);
                (
                    StatusCode::BAD_REQUEST,
                    ErrorResponse {
                        error: "Validation Error".to_string(),
                        message: "Preencha os campos obrigatórios".to_string(),
                        details: Some(json!(e)),
                        code: Some("VALIDATION_ERROR".to_string()),
                    },
                )
            }

            AppError::BadRequest(msg) => {
                tracing::debug!("Bad request: {}", msg);
                (
                    StatusCode::BAD_REQUEST,
                    ErrorResponse {
                        error: "Bad Request".to_string(),
                        message: msg,
                        details: None,
                        code: Some("BAD_REQUEST".to_string()),
                    },
                )
            }

            AppError::Persistence { action, source } => {
                tracing::error!("❌ Falha ao {}: {}", action, source);
                (
                    StatusCode::BAD_GATEWAY,
                    ErrorResponse {
                        error: "Persistence Error".to_string(),
                        message: format!("Erro ao {}. Tente novamente.", action),
                        details: None,
                        code: Some("PERSISTENCE_ERROR".to_string()),
                    },
                )
            }

            AppError::NotFound(msg) => {
                tracing::debug!("Resource not found: {}", msg);
                (
                    StatusCode::NOT_FOUND,
                    ErrorResponse {
                        error: "Not Found".to_string(),
                        message: msg,
                        details: None,
                        code: Some("NOT_FOUND".to_string()),
                    },
                )
            }

            AppError::NoData(msg) => (
                StatusCode::NOT_FOUND,
                ErrorResponse {
                    error: "No Data".to_string(),
                    message: msg,
                    details: None,
                    code: Some("NO_DATA".to_string()),
                },
            ),

            AppError::Conflict(msg) => {
                tracing::debug!("Conflict: {}", msg);
                (
                    StatusCode::CONFLICT,
                    ErrorResponse {
                        error: "Conflict".to_string(),
                        message: msg,
                        details: None,
                        code: Some("CONFLICT".to_string()),
                    },
                )
            }

            AppError::ConfirmationRequired(msg) => (
                StatusCode::PRECONDITION_REQUIRED,
                ErrorResponse {
                    error: "Confirmation Required".to_string(),
                    message: msg,
                    details: None,
                    code: Some("CONFIRMATION_REQUIRED".to_string()),
                },
            ),

            AppError::Export(e) => {
                tracing::error!("❌ Erro ao gerar planilha: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorResponse {
                        error: "Export Error".to_string(),
                        message: "Erro ao gerar planilha. Tente novamente.".to_string(),
                        details: Some(json!({ "export_error": e.to_string() })),
                        code: Some("EXPORT_ERROR".to_string()),
                    },
                )
            }

            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorResponse {
                        error: "Internal Server Error".to_string(),
                        message: "Ocorreu um erro inesperado".to_string(),
                        details: Some(json!({ "internal_error": msg })),
                        code: Some("INTERNAL_ERROR".to_string()),
                    },
                )
            }
        };

        (status, Json(error_response)).into_response()
    }
}

/// Resultado tipado para operações que podem falhar
pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    /// Adaptador para `map_err`: embrulha a falha do gateway com a ação de domínio.
    pub fn persistence(action: &'static str) -> impl FnOnce(StoreError) -> AppError {
        move |source| AppError::Persistence { action, source }
    }
}

/// Função helper para criar erros de validação de um campo
pub fn validation_error(field: &'static str, message: &str) -> AppError {
    use std::borrow::Cow;
    use validator::ValidationError;

    let mut error = ValidationError::new("custom");
    error.message = Some(Cow::Owned(message.to_string()));
    error.add_param(Cow::Borrowed("field"), &field);

    let mut errors = validator::ValidationErrors::new();
    errors.add(field, error);

    AppError::Validation(errors)
}

/// Função helper para criar erros de recurso não encontrado
pub fn not_found_error(resource: &str, id: &str) -> AppError {
    AppError::NotFound(format!("{} com id '{}' não encontrado(a)", resource, id))
}

/// Função helper para criar erros de estado do editor
pub fn conflict_error(message: &str) -> AppError {
    AppError::Conflict(message.to_string())
}

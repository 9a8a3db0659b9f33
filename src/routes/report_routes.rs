use axum::{
    extract::{Query, State},
    http::header,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};

use crate::controllers::report_controller::ReportController;
use crate::dto::report_dto::{DailyReportQuery, MonthlyReportQuery, ReportResponse};
use crate::services::report_service::ReportPeriod;
use crate::services::spreadsheet_export::{SpreadsheetFile, XLSX_CONTENT_TYPE};
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_report_router() -> Router<AppState> {
    Router::new()
        .route("/daily", get(daily_report))
        .route("/daily/export", get(export_daily))
        .route("/monthly", get(monthly_report))
        .route("/monthly/export", get(export_monthly))
}

async fn daily_report(
    State(state): State<AppState>,
    Query(query): Query<DailyReportQuery>,
) -> Result<Json<ReportResponse>, AppError> {
    let period = ReportPeriod::parse_day(query.date.trim())?;
    Ok(Json(ReportController::new(&state).report(period, &query.date).await))
}

async fn export_daily(
    State(state): State<AppState>,
    Query(query): Query<DailyReportQuery>,
) -> Result<Response, AppError> {
    let period = ReportPeriod::parse_day(query.date.trim())?;
    let file = ReportController::new(&state).export(period).await?;
    Ok(attachment(file))
}

async fn monthly_report(
    State(state): State<AppState>,
    Query(query): Query<MonthlyReportQuery>,
) -> Result<Json<ReportResponse>, AppError> {
    let period = ReportPeriod::parse_month(query.month.trim())?;
    Ok(Json(ReportController::new(&state).report(period, &query.month).await))
}

async fn export_monthly(
    State(state): State<AppState>,
    Query(query): Query<MonthlyReportQuery>,
) -> Result<Response, AppError> {
    let period = ReportPeriod::parse_month(query.month.trim())?;
    let file = ReportController::new(&state).export(period).await?;
    Ok(attachment(file))
}

fn attachment(file: SpreadsheetFile) -> Response {
    let disposition = format!("attachment; filename=\"{}\"", file.file_name);
    (
        [
            (header::CONTENT_TYPE, XLSX_CONTENT_TYPE.to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        file.bytes,
    )
        .into_response()
}

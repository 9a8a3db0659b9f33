//! Utilitários de validação
//!
//! Funções helper para validar e converter os valores digitados nos
//! formulários (datas, horários, mês de referência).

use chrono::{NaiveDate, NaiveTime};
use std::borrow::Cow;
use validator::ValidationError;

/// Validar e converter string em data (`YYYY-MM-DD`)
pub fn validate_date(value: &str) -> Result<NaiveDate, ValidationError> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").map_err(|_| {
        let mut error = ValidationError::new("date");
        error.add_param(Cow::Borrowed("value"), &value.to_string());
        error.add_param(Cow::Borrowed("format"), &"YYYY-MM-DD".to_string());
        error
    })
}

/// Validar horário no formato `HH:MM`
pub fn validate_time(value: &str) -> Result<NaiveTime, ValidationError> {
    NaiveTime::parse_from_str(value.trim(), "%H:%M").map_err(|_| {
        let mut error = ValidationError::new("time");
        error.add_param(Cow::Borrowed("value"), &value.to_string());
        error.add_param(Cow::Borrowed("format"), &"HH:MM".to_string());
        error
    })
}

/// Validar mês de referência (`YYYY-MM`) e devolver o primeiro dia do mês
pub fn validate_year_month(value: &str) -> Result<NaiveDate, ValidationError> {
    NaiveDate::parse_from_str(&format!("{}-01", value.trim()), "%Y-%m-%d").map_err(|_| {
        let mut error = ValidationError::new("year_month");
        error.add_param(Cow::Borrowed("value"), &value.to_string());
        error.add_param(Cow::Borrowed("format"), &"YYYY-MM".to_string());
        error
    })
}

/// Campo opcional de texto: vazio ou só espaços vira `None`
pub fn normalize_optional(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

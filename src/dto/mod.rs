//! DTOs da API
//!
//! Formatos de entrada e saída dos endpoints HTTP.

pub mod common_dto;
pub mod driver_dto;
pub mod program_dto;
pub mod report_dto;
pub mod vehicle_dto;

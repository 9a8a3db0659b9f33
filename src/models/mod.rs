//! Modelos do sistema
//!
//! Registros de domínio (motoristas, veículos, programações) no formato em
//! que são guardados no banco de documentos: campos em camelCase, `id` e
//! `createdAt` atribuídos pelo gateway.

pub mod driver;
pub mod program;
pub mod vehicle;

pub use driver::{Driver, NewDriver};
pub use program::{DailyProgram, Destination, NewDailyProgram, Route};
pub use vehicle::{NewVehicle, Vehicle};

use serde::Serialize;
use std::fmt;
use uuid::Uuid;

/// Coleções lógicas do banco de documentos
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Collection {
    Drivers,
    Vehicles,
    Programs,
}

impl Collection {
    pub fn as_str(&self) -> &'static str {
        match self {
            Collection::Drivers => "drivers",
            Collection::Vehicles => "vehicles",
            Collection::Programs => "programs",
        }
    }
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Id provisório para roteiros e destinos, que não têm documento próprio
pub fn new_local_id() -> String {
    Uuid::new_v4().simple().to_string()
}

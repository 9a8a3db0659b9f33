use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::dto::driver_dto::DriverResponse;
use crate::dto::vehicle_dto::VehicleResponse;
use crate::models::{DailyProgram, Route};
use crate::services::program_editor::EditorSnapshot;
use crate::services::report_service::ReportStats;
use crate::utils::validation::normalize_optional;

// Request para criar uma programação
#[derive(Debug, Deserialize)]
pub struct CreateProgramRequest {
    pub date: String,
}

// Filtros da listagem de programações
#[derive(Debug, Default, Deserialize)]
pub struct ProgramFilters {
    pub date: Option<String>,
}

/// Formulário de roteiro, como o operador preencheu
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase", default)]
pub struct RouteForm {
    /// Presente quando o roteiro já existe e está sendo editado
    pub route_id: Option<String>,

    #[validate(length(min = 1, message = "Selecione o motorista"))]
    pub driver_id: String,

    #[validate(length(min = 1, message = "Selecione o veículo"))]
    pub vehicle_id: String,

    #[validate(length(min = 1, message = "Informe a cidade de partida"))]
    pub departure_city: String,

    #[validate(length(min = 1, message = "Informe o horário de partida"))]
    pub departure_time: String,

    #[validate(length(max = 5, message = "No máximo 5 destinos por roteiro"))]
    pub destinations: Vec<DestinationForm>,
}

impl RouteForm {
    /// Remove espaços das pontas dos campos obrigatórios
    pub fn trimmed(mut self) -> Self {
        self.route_id = normalize_optional(self.route_id);
        self.driver_id = self.driver_id.trim().to_string();
        self.vehicle_id = self.vehicle_id.trim().to_string();
        self.departure_city = self.departure_city.trim().to_string();
        self.departure_time = self.departure_time.trim().to_string();
        self
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DestinationForm {
    pub id: Option<String>,
    pub city: String,
    pub time: Option<String>,
    pub observation: Option<String>,
}

impl DestinationForm {
    pub fn city(city: &str) -> Self {
        Self {
            city: city.to_string(),
            ..Default::default()
        }
    }
}

// Request para editar a mensagem manualmente
#[derive(Debug, Deserialize)]
pub struct UpdateMessageRequest {
    pub message: String,
}

// Item da listagem de programações
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgramSummary {
    pub id: String,
    pub date: String,
    pub sequence: u32,
    pub stats: ReportStats,
}

impl From<&DailyProgram> for ProgramSummary {
    fn from(program: &DailyProgram) -> Self {
        Self {
            id: program.id.clone(),
            date: program.date.to_string(),
            sequence: program.sequence,
            stats: ReportStats {
                program_count: 1,
                route_count: program.route_count(),
                destination_count: program.destination_count(),
            },
        }
    }
}

// Roteiro aberto para edição
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteDraftResponse {
    pub route: Option<Route>,
}

// Estado do editor + opções dos seletores do formulário de roteiro
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EditorResponse {
    #[serde(flatten)]
    pub snapshot: EditorSnapshot,
    pub drivers: Vec<DriverResponse>,
    pub vehicles: Vec<VehicleResponse>,
}

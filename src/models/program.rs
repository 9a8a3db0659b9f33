//! Modelo de DailyProgram
//!
//! Uma programação diária é dona dos seus roteiros, e cada roteiro é dono
//! dos seus destinos. Motorista e veículo são apenas referenciados, com nome
//! e placa copiados no momento da seleção.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Limite de roteiros por programação
pub const MAX_ROUTES_PER_PROGRAM: usize = 30;

/// Limite de destinos por roteiro
pub const MAX_DESTINATIONS_PER_ROUTE: usize = 5;

/// Parada de um roteiro
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Destination {
    pub id: String,
    pub city: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub observation: Option<String>,
}

impl Destination {
    /// Horário, se preenchido
    pub fn time_label(&self) -> Option<&str> {
        non_blank(self.time.as_deref())
    }

    /// Observação, se preenchida
    pub fn observation_label(&self) -> Option<&str> {
        non_blank(self.observation.as_deref())
    }
}

/// Veículo + motorista dentro de uma programação
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Route {
    pub id: String,
    pub driver_id: String,
    pub driver_name: String,
    pub vehicle_id: String,
    pub vehicle_plate: String,
    pub departure_city: String,
    pub departure_time: String,
    #[serde(default)]
    pub destinations: Vec<Destination>,
}

/// Programação diária persistida
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyProgram {
    pub id: String,
    pub date: NaiveDate,
    pub sequence: u32,
    #[serde(default)]
    pub routes: Vec<Route>,
    #[serde(default)]
    pub message: String,
    pub created_at: DateTime<Utc>,
}

impl DailyProgram {
    pub fn find_route(&self, route_id: &str) -> Option<&Route> {
        self.routes.iter().find(|r| r.id == route_id)
    }

    pub fn route_count(&self) -> usize {
        self.routes.len()
    }

    pub fn destination_count(&self) -> usize {
        self.routes.iter().map(|r| r.destinations.len()).sum()
    }
}

/// Programação ainda sem id nem `createdAt`
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewDailyProgram {
    pub date: NaiveDate,
    pub sequence: u32,
    pub routes: Vec<Route>,
    pub message: String,
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_reads_legacy_document() {
        // Documentos antigos guardam campos opcionais vazios como ""
        let doc = json!({
            "id": "p1",
            "date": "2025-03-10",
            "sequence": 2,
            "message": "",
            "createdAt": "2025-03-10T08:00:00Z",
            "routes": [{
                "id": "1741600000000",
                "driverId": "d1",
                "driverName": "Carlos",
                "vehicleId": "v1",
                "vehiclePlate": "ABC1234",
                "departureCity": "São Paulo",
                "departureTime": "06:00",
                "destinations": [
                    { "id": "1", "city": "Campinas", "time": "", "observation": "" }
                ]
            }]
        });

        let program: DailyProgram = serde_json::from_value(doc).unwrap();
        assert_eq!(program.sequence, 2);
        assert_eq!(program.route_count(), 1);
        assert_eq!(program.destination_count(), 1);

        let dest = &program.routes[0].destinations[0];
        assert_eq!(dest.time_label(), None);
        assert_eq!(dest.observation_label(), None);
        assert!(program.find_route("1741600000000").is_some());
    }

    #[test]
    fn test_new_program_payload_uses_camel_case() {
        let draft = NewDailyProgram {
            date: NaiveDate::from_ymd_opt(2025, 3, 10).unwrap(),
            sequence: 1,
            routes: vec![],
            message: String::new(),
        };
        let value = serde_json::to_value(&draft).unwrap();
        assert_eq!(value["date"], "2025-03-10");
        assert_eq!(value["sequence"], 1);
        assert!(value.get("createdAt").is_none());
    }
}

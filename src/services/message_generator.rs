//! Geração da mensagem de despacho
//!
//! Texto enviado manualmente aos motoristas. O formato é consumido por
//! copiar/colar, então cada linha (inclusive os dois espaços antes do hífen
//! do veículo) é mantida exatamente.

use std::fmt::Write;

use crate::models::DailyProgram;

/// Gera a mensagem da programação. Pura e determinística.
pub fn generate(program: &DailyProgram) -> String {
    let mut message = format!("📌 PROGRAMAÇÃO DIÁRIA {}\n\n", program.sequence);

    for (route_index, route) in program.routes.iter().enumerate() {
        // write! em String não falha
        let _ = writeln!(message, "🚚 VEÍCULO {}  - {}", route_index + 1, route.vehicle_plate);
        let _ = writeln!(message, "👤 Motorista: {}", route.driver_name);
        let _ = writeln!(
            message,
            "📍 Partida: {} às {}",
            route.departure_city, route.departure_time
        );

        for (dest_index, destination) in route.destinations.iter().enumerate() {
            let _ = write!(message, "🛣️ Destino {}: {}", dest_index + 1, destination.city);
            if let Some(time) = destination.time_label() {
                let _ = write!(message, " às {}", time);
            }
            message.push('\n');

            if let Some(observation) = destination.observation_label() {
                let _ = writeln!(message, "📝 Obs: {}", observation);
            }
        }

        message.push('\n');
    }

    message.trim().to_string()
}

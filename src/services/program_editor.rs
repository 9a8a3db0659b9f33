//! Editor de programações
//!
//! Máquina de estados sobre uma única programação ativa (ou nenhuma), com o
//! sub-formulário de roteiro fechado, criando ou editando. Toda mudança
//! estrutural regenera a mensagem e grava a programação inteira; a memória só
//! muda depois que o banco confirma.

use chrono::NaiveDate;
use serde::Serialize;
use std::collections::HashSet;
use std::sync::Arc;
use validator::Validate;

use crate::dto::program_dto::{DestinationForm, RouteForm};
use crate::models::program::MAX_ROUTES_PER_PROGRAM;
use crate::models::{new_local_id, DailyProgram, Destination, NewDailyProgram, Route};
use crate::repositories::{DocumentStore, ProgramRepository};
use crate::services::catalog_service::{ensure_confirmed, Catalog};
use crate::services::message_generator::generate;
use crate::utils::errors::{conflict_error, not_found_error, validation_error, AppError, AppResult};
use crate::utils::validation::{normalize_optional, validate_time};

/// Estado do sub-formulário de roteiro
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "mode", content = "routeId", rename_all = "camelCase")]
pub enum RouteEditMode {
    Closed,
    Creating,
    Editing(String),
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EditorSnapshot {
    pub active_program: Option<DailyProgram>,
    pub route_edit: RouteEditMode,
}

pub struct ProgramEditor {
    repository: ProgramRepository,
    active: Option<DailyProgram>,
    route_edit: RouteEditMode,
}

impl ProgramEditor {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self {
            repository: ProgramRepository::new(store),
            active: None,
            route_edit: RouteEditMode::Closed,
        }
    }

    pub fn active(&self) -> Option<&DailyProgram> {
        self.active.as_ref()
    }

    pub fn route_edit(&self) -> &RouteEditMode {
        &self.route_edit
    }

    pub fn snapshot(&self) -> EditorSnapshot {
        EditorSnapshot {
            active_program: self.active.clone(),
            route_edit: self.route_edit.clone(),
        }
    }

    fn active_program(&self) -> AppResult<&DailyProgram> {
        self.active
            .as_ref()
            .ok_or_else(|| conflict_error("Nenhuma programação ativa"))
    }

    /// Mensagem atual da programação ativa
    pub fn current_message(&self) -> AppResult<&str> {
        Ok(self.active_program()?.message.as_str())
    }

    /// Cria a próxima programação da data e a torna ativa
    pub async fn create_program(
        &mut self,
        catalog: &mut Catalog,
        date: NaiveDate,
    ) -> AppResult<DailyProgram> {
        let sequence = catalog.next_sequence_for(date);
        let program = self
            .repository
            .create(NewDailyProgram {
                date,
                sequence,
                routes: Vec::new(),
                message: String::new(),
            })
            .await?;

        tracing::info!(
            "📌 Programação {} de {} criada ({})",
            program.sequence,
            program.date,
            program.id
        );
        catalog.insert_program(program.clone());
        self.active = Some(program.clone());
        self.route_edit = RouteEditMode::Closed;
        Ok(program)
    }

    pub fn open_program(&mut self, catalog: &Catalog, id: &str) -> AppResult<DailyProgram> {
        let program = catalog
            .find_program(id)
            .cloned()
            .ok_or_else(|| not_found_error("Programação", id))?;
        self.active = Some(program.clone());
        self.route_edit = RouteEditMode::Closed;
        Ok(program)
    }

    /// Troca a programação ativa pela versão recarregada do catálogo,
    /// mantendo o sub-formulário aberto. Fecha o editor se ela sumiu.
    pub fn refresh_active(&mut self, catalog: &Catalog) -> bool {
        let Some(active_id) = self.active.as_ref().map(|p| p.id.clone()) else {
            return false;
        };

        match catalog.find_program(&active_id) {
            Some(fresh) => {
                if let RouteEditMode::Editing(route_id) = &self.route_edit {
                    if fresh.find_route(route_id).is_none() {
                        self.route_edit = RouteEditMode::Closed;
                    }
                }
                self.active = Some(fresh.clone());
                true
            }
            None => {
                tracing::warn!("⚠️ Programação ativa {} não existe mais, editor fechado", active_id);
                self.close_program();
                false
            }
        }
    }

    pub fn close_program(&mut self) {
        self.active = None;
        self.route_edit = RouteEditMode::Closed;
    }

    /// Abre o sub-formulário para um roteiro novo
    pub fn begin_route(&mut self) -> AppResult<()> {
        if self.active_program()?.routes.len() >= MAX_ROUTES_PER_PROGRAM {
            return Err(route_limit_error());
        }
        self.route_edit = RouteEditMode::Creating;
        Ok(())
    }

    /// Abre o sub-formulário com um roteiro existente
    pub fn begin_route_edit(&mut self, route_id: &str) -> AppResult<Route> {
        let route = self
            .active_program()?
            .find_route(route_id)
            .cloned()
            .ok_or_else(|| not_found_error("Roteiro", route_id))?;
        self.route_edit = RouteEditMode::Editing(route.id.clone());
        Ok(route)
    }

    pub fn cancel_route(&mut self) {
        self.route_edit = RouteEditMode::Closed;
    }

    /// Salva o roteiro do formulário: substitui no lugar quando o id já
    /// existe, senão acrescenta ao fim. Em caso de falha o formulário
    /// continua aberto.
    pub async fn submit_route(
        &mut self,
        catalog: &mut Catalog,
        form: RouteForm,
    ) -> AppResult<DailyProgram> {
        let program = self.active_program()?.clone();
        let form = form.trimmed();

        let editing_id = form.route_id.clone().or_else(|| match &self.route_edit {
            RouteEditMode::Editing(id) => Some(id.clone()),
            _ => None,
        });
        let existing = match editing_id.as_deref() {
            Some(id) => Some(
                program
                    .find_route(id)
                    .ok_or_else(|| not_found_error("Roteiro", id))?,
            ),
            None => None,
        };

        let route = build_route(form, existing, catalog)?;

        let mut routes = program.routes.clone();
        match routes.iter().position(|r| r.id == route.id) {
            Some(index) => routes[index] = route,
            None => {
                if routes.len() >= MAX_ROUTES_PER_PROGRAM {
                    return Err(route_limit_error());
                }
                routes.push(route);
            }
        }

        let updated = self
            .persist_routes(catalog, program, routes, "salvar roteiro")
            .await?;
        self.route_edit = RouteEditMode::Closed;
        Ok(updated)
    }

    pub async fn remove_route(
        &mut self,
        catalog: &mut Catalog,
        route_id: &str,
    ) -> AppResult<DailyProgram> {
        let program = self.active_program()?.clone();
        if program.routes.is_empty() {
            return Err(AppError::BadRequest(
                "A programação não tem roteiros".to_string(),
            ));
        }

        let routes: Vec<Route> = program
            .routes
            .iter()
            .filter(|r| r.id != route_id)
            .cloned()
            .collect();
        if routes.len() == program.routes.len() {
            return Err(not_found_error("Roteiro", route_id));
        }

        let updated = self
            .persist_routes(catalog, program, routes, "remover roteiro")
            .await?;
        if self.route_edit == RouteEditMode::Editing(route_id.to_string()) {
            self.route_edit = RouteEditMode::Closed;
        }
        Ok(updated)
    }

    /// Edição manual da mensagem; o texto vale até a próxima mudança estrutural
    pub async fn update_message(
        &mut self,
        catalog: &mut Catalog,
        text: String,
    ) -> AppResult<DailyProgram> {
        let mut updated = self.active_program()?.clone();
        if updated.message == text {
            return Ok(updated);
        }

        self.repository.update_message(&updated.id, &text).await?;
        updated.message = text;
        catalog.replace_program(&updated);
        self.active = Some(updated.clone());
        Ok(updated)
    }

    /// Exclusão em duas fases: remoção local provisória, confirmação remota
    /// e, só se o banco falhar, recarga completa das programações.
    pub async fn delete_program(
        &mut self,
        catalog: &mut Catalog,
        id: &str,
        confirmed: bool,
    ) -> AppResult<()> {
        ensure_confirmed(confirmed, "Tem certeza que deseja excluir esta programação?")?;

        if self.active.as_ref().is_some_and(|p| p.id == id) {
            self.close_program();
        }
        if catalog.remove_program(id).is_none() {
            tracing::debug!("Programação {} não estava no catálogo local", id);
        }

        match self.repository.delete(id).await {
            Ok(()) => {
                tracing::info!("🗑️ Programação {} excluída", id);
                Ok(())
            }
            Err(err) => {
                tracing::warn!("⚠️ Exclusão de {} falhou, ressincronizando programações", id);
                catalog.reload_programs().await;
                Err(err)
            }
        }
    }

    async fn persist_routes(
        &mut self,
        catalog: &mut Catalog,
        program: DailyProgram,
        routes: Vec<Route>,
        action: &'static str,
    ) -> AppResult<DailyProgram> {
        let mut updated = program;
        updated.routes = routes;
        updated.message = generate(&updated);

        self.repository
            .update_routes(&updated.id, &updated.routes, &updated.message, action)
            .await?;

        catalog.replace_program(&updated);
        self.active = Some(updated.clone());
        Ok(updated)
    }
}

fn route_limit_error() -> AppError {
    AppError::BadRequest(format!(
        "Limite de {} roteiros por programação atingido",
        MAX_ROUTES_PER_PROGRAM
    ))
}

/// Valida o formulário e monta o roteiro com nome e placa copiados do catálogo
fn build_route(form: RouteForm, existing: Option<&Route>, catalog: &Catalog) -> AppResult<Route> {
    form.validate()?;
    validate_time(&form.departure_time)
        .map_err(|_| validation_error("departureTime", "Horário de partida inválido, use HH:MM"))?;

    // Referência apagada do catálogo: mantém o valor já copiado no roteiro
    let driver_name = match catalog.find_driver(&form.driver_id) {
        Some(driver) => driver.name.clone(),
        None => match existing {
            Some(route) if route.driver_id == form.driver_id => route.driver_name.clone(),
            _ => return Err(validation_error("driverId", "Motorista não encontrado")),
        },
    };
    let vehicle_plate = match catalog.find_vehicle(&form.vehicle_id) {
        Some(vehicle) => vehicle.plate.to_uppercase(),
        None => match existing {
            Some(route) if route.vehicle_id == form.vehicle_id => route.vehicle_plate.clone(),
            _ => return Err(validation_error("vehicleId", "Veículo não encontrado")),
        },
    };

    Ok(Route {
        id: existing.map(|r| r.id.clone()).unwrap_or_else(new_local_id),
        driver_id: form.driver_id,
        driver_name,
        vehicle_id: form.vehicle_id,
        vehicle_plate,
        departure_city: form.departure_city,
        departure_time: form.departure_time,
        destinations: build_destinations(form.destinations)?,
    })
}

/// Descarta destinos sem cidade, mantendo a ordem dos demais
fn build_destinations(forms: Vec<DestinationForm>) -> AppResult<Vec<Destination>> {
    let mut seen = HashSet::new();
    let mut destinations = Vec::with_capacity(forms.len());

    for form in forms {
        let city = form.city.trim();
        if city.is_empty() {
            continue;
        }

        let time = normalize_optional(form.time);
        if let Some(time) = &time {
            validate_time(time).map_err(|_| {
                validation_error("destinations", "Horário de destino inválido, use HH:MM")
            })?;
        }

        let id = match normalize_optional(form.id) {
            Some(id) if !seen.contains(&id) => id,
            _ => new_local_id(),
        };
        seen.insert(id.clone());

        destinations.push(Destination {
            id,
            city: city.to_string(),
            time,
            observation: normalize_optional(form.observation),
        });
    }

    if destinations.is_empty() {
        return Err(validation_error("destinations", "Informe ao menos um destino"));
    }
    Ok(destinations)
}

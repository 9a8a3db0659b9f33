//! Catálogo da sessão
//!
//! Estado explícito da aplicação: listas de motoristas, veículos e
//! programações carregadas do banco, mais o resultado da última leitura de
//! cada coleção. Uma leitura que falha deixa a lista vazia, mas marcada como
//! `Failed`, para o chamador distinguir "vazio" de "não carregou".

use chrono::NaiveDate;
use futures::future::join3;
use serde::Serialize;
use std::sync::Arc;

use crate::models::{Collection, DailyProgram, Driver, NewDriver, NewVehicle, Vehicle};
use crate::repositories::{DocumentStore, DriverRepository, ProgramRepository, VehicleRepository};
use crate::utils::errors::{AppError, AppResult};

/// Resultado da última leitura de uma coleção
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", content = "reason", rename_all = "lowercase")]
pub enum ReadOutcome {
    NotLoaded,
    Loaded,
    Failed(String),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SyncReport {
    pub drivers: ReadOutcome,
    pub vehicles: ReadOutcome,
    pub programs: ReadOutcome,
}

impl SyncReport {
    fn not_loaded() -> Self {
        Self {
            drivers: ReadOutcome::NotLoaded,
            vehicles: ReadOutcome::NotLoaded,
            programs: ReadOutcome::NotLoaded,
        }
    }

    pub fn is_complete(&self) -> bool {
        [&self.drivers, &self.vehicles, &self.programs]
            .iter()
            .all(|o| **o == ReadOutcome::Loaded)
    }
}

/// Barreira sim/não antes de qualquer exclusão
pub fn ensure_confirmed(confirmed: bool, prompt: &str) -> AppResult<()> {
    if confirmed {
        Ok(())
    } else {
        Err(AppError::ConfirmationRequired(prompt.to_string()))
    }
}

pub struct Catalog {
    driver_repository: DriverRepository,
    vehicle_repository: VehicleRepository,
    program_repository: ProgramRepository,
    drivers: Vec<Driver>,
    vehicles: Vec<Vehicle>,
    programs: Vec<DailyProgram>,
    sync: SyncReport,
}

impl Catalog {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self {
            driver_repository: DriverRepository::new(store.clone()),
            vehicle_repository: VehicleRepository::new(store.clone()),
            program_repository: ProgramRepository::new(store),
            drivers: Vec::new(),
            vehicles: Vec::new(),
            programs: Vec::new(),
            sync: SyncReport::not_loaded(),
        }
    }

    /// Recarrega as três coleções em paralelo
    pub async fn reload(&mut self) -> SyncReport {
        let (drivers, vehicles, programs) = join3(
            self.driver_repository.list(),
            self.vehicle_repository.list(),
            self.program_repository.list(),
        )
        .await;

        let (drivers, drivers_outcome) = absorb(Collection::Drivers, drivers);
        let (vehicles, vehicles_outcome) = absorb(Collection::Vehicles, vehicles);
        let (programs, programs_outcome) = absorb(Collection::Programs, programs);

        self.drivers = drivers;
        self.vehicles = vehicles;
        self.programs = programs;
        self.sync = SyncReport {
            drivers: drivers_outcome,
            vehicles: vehicles_outcome,
            programs: programs_outcome,
        };

        tracing::info!(
            "🔄 Catálogo recarregado: {} motoristas, {} veículos, {} programações",
            self.drivers.len(),
            self.vehicles.len(),
            self.programs.len()
        );
        self.sync.clone()
    }

    /// Ressincronização completa das programações
    pub async fn reload_programs(&mut self) -> ReadOutcome {
        let (programs, outcome) = absorb(Collection::Programs, self.program_repository.list().await);
        self.programs = programs;
        self.sync.programs = outcome.clone();
        outcome
    }

    pub fn sync_report(&self) -> &SyncReport {
        &self.sync
    }

    pub fn drivers(&self) -> &[Driver] {
        &self.drivers
    }

    pub fn drivers_by_name(&self) -> Vec<&Driver> {
        let mut drivers: Vec<&Driver> = self.drivers.iter().collect();
        drivers.sort_by_key(|d| d.name.to_lowercase());
        drivers
    }

    pub fn vehicles(&self) -> &[Vehicle] {
        &self.vehicles
    }

    pub fn vehicles_by_plate(&self) -> Vec<&Vehicle> {
        let mut vehicles: Vec<&Vehicle> = self.vehicles.iter().collect();
        vehicles.sort_by(|a, b| a.cmp_by_plate(b));
        vehicles
    }

    pub fn programs(&self) -> &[DailyProgram] {
        &self.programs
    }

    pub fn programs_on(&self, date: NaiveDate) -> Vec<&DailyProgram> {
        self.programs.iter().filter(|p| p.date == date).collect()
    }

    pub fn find_driver(&self, id: &str) -> Option<&Driver> {
        self.drivers.iter().find(|d| d.id == id)
    }

    pub fn find_vehicle(&self, id: &str) -> Option<&Vehicle> {
        self.vehicles.iter().find(|v| v.id == id)
    }

    pub fn find_program(&self, id: &str) -> Option<&DailyProgram> {
        self.programs.iter().find(|p| p.id == id)
    }

    /// Próxima sequência da data. Não reaproveita números de programações apagadas.
    pub fn next_sequence_for(&self, date: NaiveDate) -> u32 {
        self.programs_on(date).len() as u32 + 1
    }

    pub async fn register_driver(&mut self, driver: NewDriver) -> AppResult<Driver> {
        let driver = self.driver_repository.create(driver).await?;
        tracing::info!("👤 Motorista '{}' cadastrado ({})", driver.name, driver.id);
        self.drivers.insert(0, driver.clone());
        Ok(driver)
    }

    pub async fn delete_driver(&mut self, id: &str, confirmed: bool) -> AppResult<()> {
        ensure_confirmed(confirmed, "Tem certeza que deseja excluir este motorista?")?;
        self.driver_repository.delete(id).await?;
        self.drivers.retain(|d| d.id != id);
        tracing::info!("🗑️ Motorista {} excluído", id);
        Ok(())
    }

    pub async fn register_vehicle(&mut self, vehicle: NewVehicle) -> AppResult<Vehicle> {
        let vehicle = self.vehicle_repository.create(vehicle).await?;
        tracing::info!("🚚 Veículo '{}' cadastrado ({})", vehicle.plate, vehicle.id);
        self.vehicles.insert(0, vehicle.clone());
        Ok(vehicle)
    }

    pub async fn delete_vehicle(&mut self, id: &str, confirmed: bool) -> AppResult<()> {
        ensure_confirmed(confirmed, "Tem certeza que deseja excluir este veículo?")?;
        self.vehicle_repository.delete(id).await?;
        self.vehicles.retain(|v| v.id != id);
        tracing::info!("🗑️ Veículo {} excluído", id);
        Ok(())
    }

    pub(crate) fn insert_program(&mut self, program: DailyProgram) {
        self.programs.insert(0, program);
    }

    pub(crate) fn replace_program(&mut self, program: &DailyProgram) {
        if let Some(slot) = self.programs.iter_mut().find(|p| p.id == program.id) {
            *slot = program.clone();
        }
    }

    pub(crate) fn remove_program(&mut self, id: &str) -> Option<DailyProgram> {
        let index = self.programs.iter().position(|p| p.id == id)?;
        Some(self.programs.remove(index))
    }
}

fn absorb<T>(collection: Collection, result: AppResult<Vec<T>>) -> (Vec<T>, ReadOutcome) {
    match result {
        Ok(records) => (records, ReadOutcome::Loaded),
        Err(e) => {
            tracing::warn!("⚠️ Leitura de '{}' falhou, exibindo lista vazia: {:?}", collection, e);
            (Vec::new(), ReadOutcome::Failed(e.to_string()))
        }
    }
}

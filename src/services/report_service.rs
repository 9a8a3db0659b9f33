//! Relatórios diários e mensais
//!
//! Achata programações em linhas (uma por destino de cada roteiro) e conta
//! programações, roteiros e destinos de um período.

use chrono::{Datelike, NaiveDate};
use serde::Serialize;

use crate::models::DailyProgram;
use crate::utils::errors::{validation_error, AppResult};
use crate::utils::validation::{validate_date, validate_year_month};

/// Cabeçalhos da planilha, na ordem das colunas
pub const REPORT_HEADERS: [&str; 11] = [
    "Data",
    "Programação",
    "Veículo",
    "Motorista",
    "Partida",
    "Horário Partida",
    "Destino",
    "Horário Destino",
    "Observação",
    "Ordem Destino",
    "Ordem Veículo",
];

/// Período de um relatório
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportPeriod {
    Day(NaiveDate),
    Month { year: i32, month: u32 },
}

impl ReportPeriod {
    /// `YYYY-MM-DD`
    pub fn parse_day(value: &str) -> AppResult<Self> {
        validate_date(value)
            .map(ReportPeriod::Day)
            .map_err(|_| validation_error("date", "Data inválida, use AAAA-MM-DD"))
    }

    /// `YYYY-MM`
    pub fn parse_month(value: &str) -> AppResult<Self> {
        validate_year_month(value)
            .map(|first| ReportPeriod::Month {
                year: first.year(),
                month: first.month(),
            })
            .map_err(|_| validation_error("month", "Mês inválido, use AAAA-MM"))
    }

    /// Dia exato, ou mês inteiro com as duas pontas incluídas
    pub fn contains(&self, date: NaiveDate) -> bool {
        match *self {
            ReportPeriod::Day(day) => date == day,
            ReportPeriod::Month { year, month } => date.year() == year && date.month() == month,
        }
    }

    /// `programacoes_DD-MM-YYYY.xlsx` ou `programacoes_MM-YYYY.xlsx`
    pub fn file_name(&self) -> String {
        match *self {
            ReportPeriod::Day(day) => format!("programacoes_{}.xlsx", day.format("%d-%m-%Y")),
            ReportPeriod::Month { year, month } => {
                format!("programacoes_{:02}-{:04}.xlsx", month, year)
            }
        }
    }

    pub fn sheet_name(&self) -> &'static str {
        match self {
            ReportPeriod::Day(_) => "Programações Diárias",
            ReportPeriod::Month { .. } => "Programações Mensais",
        }
    }

    /// Aviso de "sem dados" exibido ao operador
    pub fn empty_message(&self) -> &'static str {
        match self {
            ReportPeriod::Day(_) => "Nenhuma programação encontrada para esta data",
            ReportPeriod::Month { .. } => "Nenhuma programação encontrada para este mês",
        }
    }
}

/// Linha achatada do relatório
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportRow {
    pub date: String,
    pub sequence: u32,
    pub vehicle_plate: String,
    pub driver_name: String,
    pub departure_city: String,
    pub departure_time: String,
    pub destination_city: String,
    pub destination_time: String,
    pub observation: String,
    pub destination_order: usize,
    pub route_order: usize,
}

/// Totais de um período
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportStats {
    pub program_count: usize,
    pub route_count: usize,
    pub destination_count: usize,
}

pub fn programs_in<'a>(programs: &'a [DailyProgram], period: &ReportPeriod) -> Vec<&'a DailyProgram> {
    programs.iter().filter(|p| period.contains(p.date)).collect()
}

pub fn rows_for(programs: &[DailyProgram], period: &ReportPeriod) -> Vec<ReportRow> {
    programs_in(programs, period)
        .into_iter()
        .flat_map(program_rows)
        .collect()
}

pub fn daily_rows(programs: &[DailyProgram], date: NaiveDate) -> Vec<ReportRow> {
    rows_for(programs, &ReportPeriod::Day(date))
}

pub fn monthly_rows(programs: &[DailyProgram], year: i32, month: u32) -> Vec<ReportRow> {
    rows_for(programs, &ReportPeriod::Month { year, month })
}

pub fn stats<'a, I>(programs: I) -> ReportStats
where
    I: IntoIterator<Item = &'a DailyProgram>,
{
    programs
        .into_iter()
        .fold(ReportStats::default(), |acc, p| ReportStats {
            program_count: acc.program_count + 1,
            route_count: acc.route_count + p.route_count(),
            destination_count: acc.destination_count + p.destination_count(),
        })
}

fn program_rows(program: &DailyProgram) -> Vec<ReportRow> {
    let date = program.date.format("%d/%m/%Y").to_string();

    program
        .routes
        .iter()
        .enumerate()
        .flat_map(|(route_index, route)| {
            let date = date.clone();
            route
                .destinations
                .iter()
                .enumerate()
                .map(move |(dest_index, destination)| ReportRow {
                    date: date.clone(),
                    sequence: program.sequence,
                    vehicle_plate: route.vehicle_plate.clone(),
                    driver_name: route.driver_name.clone(),
                    departure_city: route.departure_city.clone(),
                    departure_time: route.departure_time.clone(),
                    destination_city: destination.city.clone(),
                    destination_time: destination.time.clone().unwrap_or_default(),
                    observation: destination.observation.clone().unwrap_or_default(),
                    destination_order: dest_index + 1,
                    route_order: route_index + 1,
                })
        })
        .collect()
}

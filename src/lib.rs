//! Planejador de despacho logístico
//!
//! Cadastro de motoristas e veículos, montagem de programações diárias com
//! roteiros e destinos, geração da mensagem de despacho e relatórios
//! diários/mensais exportáveis em planilha.

pub mod config;
pub mod controllers;
pub mod database;
pub mod dto;
pub mod middleware;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod services;
pub mod state;
pub mod utils;

pub use routes::create_app_router;
pub use state::AppState;

//! Configuração do projeto
//!
//! Configuração do banco de dados e variáveis de ambiente.

pub mod database;
pub mod environment;

pub use environment::*;

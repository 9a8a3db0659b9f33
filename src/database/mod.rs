//! Módulo de banco de dados
//!
//! Conexão com o PostgreSQL e criação do esquema de documentos.

pub mod connection;

pub use connection::DatabaseConnection;

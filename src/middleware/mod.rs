//! Middleware do sistema
//!
//! CORS e limites de requisição aplicados ao router.

pub mod cors;

pub use cors::*;

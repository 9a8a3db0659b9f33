//! Utilitários do sistema
//!
//! Este módulo contém utilitários para tratamento de erros e validação.

pub mod errors;
pub mod validation;

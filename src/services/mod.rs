//! Services module
//!
//! Lógica de negócio da aplicação: catálogo da sessão, editor de
//! programações, geração de mensagem, relatórios e exportação.

pub mod catalog_service;
pub mod dispatch_links;
pub mod message_generator;
pub mod program_editor;
pub mod report_service;
pub mod spreadsheet_export;

pub use catalog_service::{Catalog, ReadOutcome, SyncReport};
pub use program_editor::{EditorSnapshot, ProgramEditor, RouteEditMode};

//! Repositórios
//!
//! Gateway de persistência (`DocumentStore`) e seus repositórios tipados.

pub mod document_store;
pub mod driver_repository;
pub mod memory_document_store;
pub mod pg_document_store;
pub mod program_repository;
pub mod vehicle_repository;

pub use document_store::{DocumentStore, StoreError};
pub use driver_repository::DriverRepository;
pub use memory_document_store::MemoryDocumentStore;
pub use pg_document_store::PgDocumentStore;
pub use program_repository::ProgramRepository;
pub use vehicle_repository::VehicleRepository;

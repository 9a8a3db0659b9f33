//! Controllers
//!
//! Coordenam a sessão compartilhada e os serviços para cada endpoint.

pub mod driver_controller;
pub mod editor_controller;
pub mod program_controller;
pub mod report_controller;
pub mod sync_controller;
pub mod vehicle_controller;

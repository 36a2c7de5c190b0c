/// Database utilities
///
/// This module provides the database layer infrastructure:
///
/// - `pool`: SQLite connection pool creation and health checks
/// - `migrations`: Schema migration runner

pub mod migrations;
pub mod pool;

//! Task record management.
//!
//! This module implements the task store proper: validated creation of task
//! records, retrieval and paginated listing, partial updates, completion
//! toggling, deletion, case-insensitive search across titles and
//! descriptions, and aggregate completion statistics. The module follows
//! hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

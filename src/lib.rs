//! Taskstore: a task-management record store served over HTTP.
//!
//! This crate provides validated task records backed by `PostgreSQL` (or an
//! in-memory store), an orchestration service for CRUD, completion toggling,
//! search, and statistics, and an axum REST surface over the service.
//!
//! # Architecture
//!
//! Taskstore follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports (database, memory)
//!
//! # Modules
//!
//! - [`task`]: Task domain, persistence, and orchestration
//! - [`api`]: HTTP boundary mapping the service onto REST endpoints
//! - [`config`]: Server configuration from flags and environment

pub mod api;
pub mod config;
pub mod task;

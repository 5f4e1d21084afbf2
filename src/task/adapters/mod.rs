//! Persistence adapters for the task module.
//!
//! This module provides concrete implementations of the [`TaskRepository`]
//! port, following hexagonal architecture principles. Adapters handle all
//! infrastructure concerns while the domain remains pure.
//!
//! # Available Adapters
//!
//! - [`memory::InMemoryTaskRepository`]: Thread-safe in-memory storage for
//!   tests and ephemeral deployments
//! - [`postgres::PostgresTaskRepository`]: Production-grade `PostgreSQL`
//!   persistence using Diesel ORM
//!
//! [`TaskRepository`]: crate::task::ports::repository::TaskRepository

pub mod memory;
pub mod postgres;

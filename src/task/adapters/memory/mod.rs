//! In-memory adapter implementations for testing.
//!
//! These adapters provide simple, thread-safe implementations suitable for
//! exercising services and the HTTP surface without database dependencies.

mod task;

pub use task::InMemoryTaskRepository;

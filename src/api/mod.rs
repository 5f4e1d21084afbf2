//! HTTP boundary for the task store.
//!
//! Maps the service surface onto REST endpoints: CRUD under `/tasks`,
//! completion toggling, search, filtered listings, aggregate statistics, and
//! a storage-connectivity health probe. Service errors become structured
//! JSON bodies with stable machine codes.

pub mod error;
pub mod routes;

pub use error::{ApiError, ApiResult};
pub use routes::{TaskApi, router};

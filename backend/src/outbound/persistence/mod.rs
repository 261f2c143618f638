//! PostgreSQL persistence adapters using Diesel with `diesel-async` and `bb8`.
//!
//! Row structs (`models.rs`) and table definitions (`schema.rs`) stay private
//! to this module; adapters translate them into domain types.
//!
//! ```ignore
//! use recipe_backend::outbound::persistence::{DbPool, DieselTagRepository, PoolConfig};
//!
//! let pool = DbPool::new(PoolConfig::new("postgres://localhost/recipes")).await?;
//! let repo = DieselTagRepository::new(pool);
//! ```

mod diesel_tag_repository;
mod migrations;
mod models;
mod pool;
mod schema;

pub use diesel_tag_repository::DieselTagRepository;
pub use migrations::{MigrationError, run_migrations};
pub use pool::{DbPool, PoolConfig, PoolError};

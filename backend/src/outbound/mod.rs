//! Outbound adapters implementing the domain's driven ports.
//!
//! - **persistence**: PostgreSQL via Diesel.
//! - **memory**: in-process store for development and tests.
//!
//! Adapters only translate between storage representations and domain types.

pub mod memory;
pub mod persistence;

//! In-process adapters used when no database is configured and in tests.

mod in_memory_tag_repository;

pub use in_memory_tag_repository::InMemoryTagRepository;

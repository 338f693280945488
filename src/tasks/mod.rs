//! Background Tasks Module
//!
//! Periodic maintenance for shared storages.

mod cleanup;

pub use cleanup::spawn_cleanup_task;

//! Background Tasks Module
//!
//! Long-running tasks owned by the cache instance.

mod sweep;

pub use sweep::spawn_sweep_task;

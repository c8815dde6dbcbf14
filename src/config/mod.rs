//! Policy configuration for the Vacation Scheduling Engine.
//!
//! This module provides functionality to load the vacation policy from a
//! YAML file: pool sizes, the flexible-range threshold, and the advance
//! accrual rate.
//!
//! # Example
//!
//! ```no_run
//! use vacation_engine::config::PolicyLoader;
//!
//! let loader = PolicyLoader::load("./config/default").unwrap();
//! println!("Total days: {}", loader.policy().base_total_days);
//! ```

mod loader;
mod types;

pub use loader::PolicyLoader;
pub use types::{AdvancePolicy, VacationPolicy};

//! Configuration loading for the Vacation Allocation Engine.
//!
//! System-wide parameters such as the yearly vacation quota live in a
//! YAML file; the loader reads them once at startup and serves them
//! through the [`ParameterStore`](crate::store::ParameterStore) trait.
//!
//! # Example
//!
//! ```no_run
//! use vacation_engine::config::ConfigLoader;
//! use vacation_engine::store::{ParameterStore, VACATION_DAYS_KEY};
//!
//! let config = ConfigLoader::load("./config/parameters.yaml").unwrap();
//! println!("Quota: {:?}", config.get_value(VACATION_DAYS_KEY));
//! ```

mod loader;

pub use loader::ConfigLoader;

//! Configuration loading for the settlement engine.
//!
//! The numeric core never sees identifiers. This module owns the external
//! lookups that resolve them: per-diem kinds to rates and equipment ids to
//! catalog entries.
//!
//! # Example
//!
//! ```no_run
//! use performer_settlement::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/default").unwrap();
//! println!("Loaded schedule: {}", config.schedule().name);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{EquipmentCatalog, EquipmentItem, ScheduleConfig, SettlementConfig};

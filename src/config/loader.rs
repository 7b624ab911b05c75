//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the per-diem
//! rate table and equipment catalog from YAML files.

use rust_decimal::Decimal;
use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};

use super::types::{EquipmentCatalog, EquipmentItem, ScheduleConfig, SettlementConfig};

/// Loads and provides access to settlement configuration.
///
/// # Directory Structure
///
/// ```text
/// config/default/
/// ├── schedule.yaml   # Schedule metadata and per-diem rates
/// └── equipment.yaml  # Equipment rental catalog
/// ```
///
/// # Example
///
/// ```no_run
/// use performer_settlement::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/default").unwrap();
/// let rate = loader.get_per_diem_rate("national").unwrap();
/// println!("National per-diem: {}", rate);
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: SettlementConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// Fails with `ConfigNotFound` if either file is missing and with
    /// `ConfigParseError` if either file is not valid YAML for its schema.
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let schedule = Self::load_yaml::<ScheduleConfig>(&path.join("schedule.yaml"))?;
        let catalog = Self::load_yaml::<EquipmentCatalog>(&path.join("equipment.yaml"))?;

        Ok(Self {
            config: SettlementConfig::new(schedule, catalog),
        })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the underlying settlement configuration.
    pub fn config(&self) -> &SettlementConfig {
        &self.config
    }

    /// Returns the schedule metadata.
    pub fn schedule(&self) -> &ScheduleConfig {
        self.config.schedule()
    }

    /// Gets the per-diem rate for a kind (e.g. "national").
    pub fn get_per_diem_rate(&self, kind: &str) -> EngineResult<Decimal> {
        self.config
            .schedule()
            .per_diem_rates
            .get(kind)
            .copied()
            .ok_or_else(|| EngineError::UnknownPerDiemKind {
                kind: kind.to_string(),
            })
    }

    /// Gets a catalog entry by its identifier.
    ///
    /// ```no_run
    /// use performer_settlement::config::ConfigLoader;
    ///
    /// let loader = ConfigLoader::load("./config/default")?;
    /// let mic = loader.get_equipment("microphone")?;
    /// println!("{} rents at {}", mic.name, mic.unit_price);
    /// # Ok::<(), performer_settlement::error::EngineError>(())
    /// ```
    pub fn get_equipment(&self, id: &str) -> EngineResult<&EquipmentItem> {
        self.config
            .catalog()
            .get(id)
            .ok_or_else(|| EngineError::UnknownEquipment { id: id.to_string() })
    }
}

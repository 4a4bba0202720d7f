//! Scenario Registry
//!
//! Named coverage requests, with a default set compiled into the crate from
//! the `scenarios/` directory. Each `*.json` file becomes one entry keyed by
//! its file stem (`full_coverage.json` → `"full_coverage"`).

use std::collections::BTreeMap;
use std::sync::RwLock;

use include_dir::{include_dir, Dir};

use crate::{CoverageRequest, SchemaError};

static DEFAULT_SCENARIOS: Dir<'_> = include_dir!("$CARGO_MANIFEST_DIR/scenarios");

/// Thread-safe map of named coverage requests
pub struct ScenarioRegistry {
    scenarios: RwLock<BTreeMap<String, CoverageRequest>>,
}

impl ScenarioRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self {
            scenarios: RwLock::new(BTreeMap::new()),
        }
    }

    /// Add or replace a scenario
    pub fn register(&self, name: &str, request: CoverageRequest) -> Result<(), SchemaError> {
        let mut scenarios = self.scenarios.write()
            .map_err(|_| SchemaError::ParseError("Lock poisoned".to_string()))?;
        log::debug!("registering scenario {} ({} cameras)", name, request.cameras.len());
        scenarios.insert(name.to_string(), request);
        Ok(())
    }

    /// Get a scenario by name
    pub fn get(&self, name: &str) -> Result<CoverageRequest, SchemaError> {
        let scenarios = self.scenarios.read()
            .map_err(|_| SchemaError::ParseError("Lock poisoned".to_string()))?;

        scenarios.get(name)
            .cloned()
            .ok_or_else(|| SchemaError::NotFound(name.to_string()))
    }

    /// Registered names, sorted
    pub fn names(&self) -> Result<Vec<String>, SchemaError> {
        let scenarios = self.scenarios.read()
            .map_err(|_| SchemaError::ParseError("Lock poisoned".to_string()))?;
        Ok(scenarios.keys().cloned().collect())
    }

    /// Load every scenario embedded at build time
    pub fn load_defaults(&self) -> Result<(), SchemaError> {
        for file in DEFAULT_SCENARIOS.files() {
            let path = file.path();
            if path.extension().and_then(|ext| ext.to_str()) != Some("json") {
                continue;
            }

            let name = path.file_stem()
                .and_then(|stem| stem.to_str())
                .ok_or_else(|| SchemaError::ParseError(format!("Bad scenario file name: {}", path.display())))?;
            let json = file.contents_utf8()
                .ok_or_else(|| SchemaError::ParseError(format!("{} is not UTF-8", path.display())))?;

            let request = CoverageRequest::from_json(json)
                .map_err(|e| SchemaError::ParseError(format!("{}: {}", path.display(), e)))?;
            self.register(name, request)?;
        }

        Ok(())
    }
}

impl Default for ScenarioRegistry {
    fn default() -> Self {
        Self::new()
    }
}

lazy_static::lazy_static! {
    /// Global registry with the embedded scenarios loaded
    pub static ref GLOBAL_REGISTRY: ScenarioRegistry = {
        let registry = ScenarioRegistry::new();
        if let Err(e) = registry.load_defaults() {
            log::warn!("failed to load default scenarios: {}", e);
        }
        registry
    };
}

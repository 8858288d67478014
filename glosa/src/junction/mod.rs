//! Junction records and the read-only lookup contract.
//!
//! Junctions are owned by an external store. The core only reads them
//! through [`JunctionLookup`]; [`InMemoryJunctionStore`] is the bundled
//! implementation, seeded from a JSON file of `{id, name, lat, lng, cycle_time}`
//! records.

use std::collections::HashMap;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::geo::GeoPoint;

/// Nominal signal cycle length when a record does not specify one.
pub const DEFAULT_CYCLE_TIME_SECS: u32 = 60;

/// Built-in sample junctions, used when no seed file is configured.
const SAMPLE_JUNCTIONS: &str = include_str!("../../data/junctions.json");

/// A signalized junction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Junction {
    /// Unique identifier
    pub id: String,
    /// Human-readable name
    pub name: String,
    /// Stop-line location
    #[serde(flatten)]
    pub location: GeoPoint,
    /// Nominal cycle time in seconds. Informational only: the fixed-cycle
    /// predictor always runs its own 60 s plan.
    #[serde(rename = "cycle_time", default = "default_cycle_time")]
    pub cycle_time_secs: u32,
}

fn default_cycle_time() -> u32 {
    DEFAULT_CYCLE_TIME_SECS
}

/// Read-only junction lookup.
pub trait JunctionLookup: Send + Sync {
    /// Returns the junction with the given id, if it exists.
    fn get(&self, id: &str) -> Option<Junction>;

    /// Returns every known junction.
    fn list(&self) -> Vec<Junction>;
}

/// Errors that can occur while loading a junction seed file.
#[derive(Debug, Error)]
pub enum JunctionStoreError {
    #[error("Failed to read junction file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse junction data: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Duplicate junction id '{0}'")]
    DuplicateId(String),
}

/// Immutable in-memory junction store.
///
/// Preserves the order in which junctions were loaded.
#[derive(Debug, Clone, Default)]
pub struct InMemoryJunctionStore {
    junctions: Vec<Junction>,
    index: HashMap<String, usize>,
}

impl InMemoryJunctionStore {
    /// Builds a store, rejecting duplicate ids.
    pub fn new(junctions: Vec<Junction>) -> Result<Self, JunctionStoreError> {
        let mut index = HashMap::with_capacity(junctions.len());
        for (i, junction) in junctions.iter().enumerate() {
            if index.insert(junction.id.clone(), i).is_some() {
                return Err(JunctionStoreError::DuplicateId(junction.id.clone()));
            }
        }
        Ok(Self { junctions, index })
    }

    /// Parses a JSON array of junction records.
    pub fn from_json(json: &str) -> Result<Self, JunctionStoreError> {
        let junctions: Vec<Junction> = serde_json::from_str(json)?;
        Self::new(junctions)
    }

    /// Loads a JSON seed file.
    pub fn load_from(path: &Path) -> Result<Self, JunctionStoreError> {
        let json = std::fs::read_to_string(path)?;
        let store = Self::from_json(&json)?;
        tracing::info!(
            path = %path.display(),
            count = store.len(),
            "Loaded junctions"
        );
        Ok(store)
    }

    /// The bundled sample junction set.
    pub fn sample() -> Result<Self, JunctionStoreError> {
        Self::from_json(SAMPLE_JUNCTIONS)
    }

    pub fn len(&self) -> usize {
        self.junctions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.junctions.is_empty()
    }
}

impl JunctionLookup for InMemoryJunctionStore {
    fn get(&self, id: &str) -> Option<Junction> {
        self.index.get(id).map(|&i| self.junctions[i].clone())
    }

    fn list(&self) -> Vec<Junction> {
        self.junctions.clone()
    }
}

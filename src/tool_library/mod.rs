//! Tool Library - threading insert catalog
//!
//! Inserts are grouped by thread family. The built-in catalog can be replaced
//! by a JSON file with the same shape:
//!
//! ```json
//! [
//!   { "family": "parallel60",
//!     "inserts": [ { "code": "R06005-05010", "cutting_diameter": 5.0,
//!                    "compatible_sizes": ["M 6 x 1.0", "MF 8 x 1.0"] } ] }
//! ]
//! ```

use crate::parser::Designation;
use indexmap::IndexSet;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;
use thiserror::Error;

pub mod inserts;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum CatalogError {
    #[error("insert {code} is listed in both {first} and {second}")]
    DuplicateInsert {
        code: String,
        first: Family,
        second: Family,
    },

    #[error("family {0} is declared more than once")]
    DuplicateFamily(Family),

    #[error("unknown thread family: {0}")]
    UnknownFamily(String),
}

/// Thread mode chosen in the UI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThreadMode {
    Parallel,
    Tapered,
}

/// Thread family: thread mode plus profile angle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Family {
    /// Metric and Unified, 60°
    Parallel60,
    /// G (PF), 55°
    Parallel55,
    /// PT, 55°
    Tapered55,
    /// NPT, 60°
    Tapered60,
}

impl Family {
    pub fn all() -> &'static [Family] {
        &[
            Family::Parallel60,
            Family::Parallel55,
            Family::Tapered55,
            Family::Tapered60,
        ]
    }

    pub fn key(self) -> &'static str {
        match self {
            Family::Parallel60 => "parallel60",
            Family::Parallel55 => "parallel55",
            Family::Tapered55 => "tapered55",
            Family::Tapered60 => "tapered60",
        }
    }

    /// Only the metric 60° family offers the M / MF / HC series selector.
    pub fn exposes_series_selector(self) -> bool {
        self == Family::Parallel60
    }

    pub fn mode(self) -> ThreadMode {
        match self {
            Family::Parallel60 | Family::Parallel55 => ThreadMode::Parallel,
            Family::Tapered55 | Family::Tapered60 => ThreadMode::Tapered,
        }
    }

    /// Profile angle in degrees
    pub fn profile_angle(self) -> u32 {
        match self {
            Family::Parallel60 | Family::Tapered60 => 60,
            Family::Parallel55 | Family::Tapered55 => 55,
        }
    }

    /// Family for a thread mode and profile angle; `None` for any other angle.
    pub fn from_mode(mode: ThreadMode, profile_angle: u32) -> Option<Family> {
        Family::all()
            .iter()
            .copied()
            .find(|f| f.mode() == mode && f.profile_angle() == profile_angle)
    }
}

impl std::fmt::Display for Family {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.key())
    }
}

impl std::str::FromStr for Family {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_ascii_lowercase();
        Family::all()
            .iter()
            .copied()
            .find(|f| f.key() == key)
            .ok_or_else(|| CatalogError::UnknownFamily(s.to_string()))
    }
}

/// A threading insert
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolInsert {
    pub code: String,

    /// Cutting diameter Dc in mm, 0 when unknown
    #[serde(default)]
    pub cutting_diameter: f64,

    /// Sizes the insert can cut, in catalog order
    pub compatible_sizes: Vec<Designation>,
}

impl ToolInsert {
    /// True when `size` is in the raw compatible list, compared as written
    pub fn supports(&self, size: &str) -> bool {
        self.compatible_sizes.iter().any(|d| d.as_str() == size)
    }
}

/// A family and its inserts, in the order they are offered
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FamilyGroup {
    pub family: Family,
    pub inserts: Vec<ToolInsert>,
}

/// Insert catalog
///
/// Every insert code belongs to exactly one family.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "Vec<FamilyGroup>", into = "Vec<FamilyGroup>")]
pub struct ToolCatalog {
    groups: Vec<FamilyGroup>,
    /// code -> (group index, insert index)
    index: HashMap<String, (usize, usize)>,
}

impl ToolCatalog {
    /// Build a catalog, rejecting duplicate families and insert codes
    pub fn new(groups: Vec<FamilyGroup>) -> Result<Self, CatalogError> {
        let mut index: HashMap<String, (usize, usize)> = HashMap::new();

        for (g, group) in groups.iter().enumerate() {
            if groups[..g].iter().any(|other| other.family == group.family) {
                return Err(CatalogError::DuplicateFamily(group.family));
            }

            for (i, insert) in group.inserts.iter().enumerate() {
                if let Some(&(first, _)) = index.get(&insert.code) {
                    return Err(CatalogError::DuplicateInsert {
                        code: insert.code.clone(),
                        first: groups[first].family,
                        second: group.family,
                    });
                }
                index.insert(insert.code.clone(), (g, i));
            }
        }

        Ok(Self { groups, index })
    }

    /// The built-in catalog
    pub fn builtin() -> Self {
        let groups = inserts::load_builtin_groups();
        let mut index: HashMap<String, (usize, usize)> = HashMap::new();
        for (g, group) in groups.iter().enumerate() {
            for (i, insert) in group.inserts.iter().enumerate() {
                index.insert(insert.code.clone(), (g, i));
            }
        }
        Self { groups, index }
    }

    /// Load a catalog from a JSON file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, crate::error::ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| crate::error::ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&content).map_err(|source| crate::error::ConfigError::Json {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Inserts of a family, in declaration order
    pub fn inserts_for_family(&self, family: Family) -> &[ToolInsert] {
        self.groups
            .iter()
            .find(|g| g.family == family)
            .map(|g| g.inserts.as_slice())
            .unwrap_or(&[])
    }

    /// Union of the family's compatible sizes, duplicates collapsed,
    /// in first-seen catalog order
    pub fn sizes_for_family(&self, family: Family) -> IndexSet<&Designation> {
        self.inserts_for_family(family)
            .iter()
            .flat_map(|insert| insert.compatible_sizes.iter())
            .collect()
    }

    pub fn insert(&self, code: &str) -> Option<&ToolInsert> {
        self.index
            .get(code)
            .map(|&(g, i)| &self.groups[g].inserts[i])
    }

    /// Cutting diameter Dc in mm; 0 for an unknown code
    pub fn cutting_diameter(&self, code: &str) -> f64 {
        self.insert(code).map(|i| i.cutting_diameter).unwrap_or(0.0)
    }

    /// Raw compatible-size list; empty for an unknown code
    pub fn compatible_sizes(&self, code: &str) -> &[Designation] {
        self.insert(code)
            .map(|i| i.compatible_sizes.as_slice())
            .unwrap_or(&[])
    }

    pub fn family_of(&self, code: &str) -> Option<Family> {
        self.index.get(code).map(|&(g, _)| self.groups[g].family)
    }

    pub fn families(&self) -> &[FamilyGroup] {
        &self.groups
    }

    /// Every insert with its family, in catalog order
    pub fn all_inserts(&self) -> impl Iterator<Item = (Family, &ToolInsert)> {
        self.groups
            .iter()
            .flat_map(|g| g.inserts.iter().map(move |i| (g.family, i)))
    }

    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }
}

impl Default for ToolCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

impl TryFrom<Vec<FamilyGroup>> for ToolCatalog {
    type Error = CatalogError;

    fn try_from(groups: Vec<FamilyGroup>) -> Result<Self, Self::Error> {
        Self::new(groups)
    }
}

impl From<ToolCatalog> for Vec<FamilyGroup> {
    fn from(catalog: ToolCatalog) -> Self {
        catalog.groups
    }
}

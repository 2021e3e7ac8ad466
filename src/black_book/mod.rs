//! The Black Book - Thread Data Reference
//!
//! Thread geometry for the sizes the threading inserts can cut:
//! - PT (JIS B 0203) and NPT (ANSI B1.20.1) taper pipe threads
//! - G / PF (ISO 228) parallel pipe threads
//! - ISO metric coarse and fine threads
//! - Unified UNC / UNF / UNEF threads
//! - Heli-Coil host threads for wire thread inserts
//!
//! All values are in millimetres. Imperial pitches are converted from TPI
//! once, when the tables are loaded.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

pub mod calculations;
pub mod threads;
pub mod validators;

pub use calculations::*;

/// Thread form of a database entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ThreadType {
    Coarse, // ISO metric coarse
    Fine,   // ISO metric fine
    UNC,
    UNF,
    UNEF,
    PT,  // Taper pipe (JIS)
    NPT, // Taper pipe (ANSI)
    G,   // Parallel pipe (BSPP)
    HC,  // Heli-Coil host thread
}

impl std::fmt::Display for ThreadType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ThreadType::Coarse => write!(f, "Metric Coarse"),
            ThreadType::Fine => write!(f, "Metric Fine"),
            ThreadType::UNC => write!(f, "UNC"),
            ThreadType::UNF => write!(f, "UNF"),
            ThreadType::UNEF => write!(f, "UNEF"),
            ThreadType::PT => write!(f, "PT"),
            ThreadType::NPT => write!(f, "NPT"),
            ThreadType::G => write!(f, "G (PF)"),
            ThreadType::HC => write!(f, "Heli-Coil"),
        }
    }
}

/// Geometry of one thread designation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThreadSpec {
    pub designation: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thread_type: Option<ThreadType>,
    pub major_diameter: f64, // mm
    pub pitch: f64,          // mm
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tap_drill_diameter: Option<f64>, // mm
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub depth_of_cut: Option<f64>, // mm, taper threads only
}

impl ThreadSpec {
    pub fn new(designation: impl Into<String>, major_diameter: f64, pitch: f64) -> Self {
        Self {
            designation: designation.into(),
            thread_type: None,
            major_diameter,
            pitch,
            tap_drill_diameter: None,
            depth_of_cut: None,
        }
    }

    pub fn with_type(mut self, thread_type: ThreadType) -> Self {
        self.thread_type = Some(thread_type);
        self
    }

    pub fn with_tap_drill(mut self, tap_drill_diameter: f64) -> Self {
        self.tap_drill_diameter = Some(tap_drill_diameter);
        self
    }

    pub fn with_depth_of_cut(mut self, depth_of_cut: f64) -> Self {
        self.depth_of_cut = Some(depth_of_cut);
        self
    }
}

/// Thread database - designation to geometry
///
/// Built once and only read afterwards; components that need it take a
/// `&ThreadDatabase`.
#[derive(Debug, Clone)]
pub struct ThreadDatabase {
    threads: HashMap<String, ThreadSpec>,
}

impl ThreadDatabase {
    /// Database with the built-in tables
    pub fn new() -> Self {
        Self {
            threads: threads::load_thread_database(),
        }
    }

    /// Database with no entries
    pub fn empty() -> Self {
        Self {
            threads: HashMap::new(),
        }
    }

    pub fn from_specs(specs: impl IntoIterator<Item = ThreadSpec>) -> Self {
        let mut db = Self::empty();
        for spec in specs {
            db.insert(spec);
        }
        db
    }

    /// Add or replace an entry, returning the one it replaced
    pub fn insert(&mut self, spec: ThreadSpec) -> Option<ThreadSpec> {
        self.threads.insert(spec.designation.clone(), spec)
    }

    /// Exact lookup by designation
    pub fn lookup(&self, designation: &str) -> Option<&ThreadSpec> {
        self.threads.get(designation)
    }

    pub fn contains(&self, designation: &str) -> bool {
        self.threads.contains_key(designation)
    }

    /// All designations, sorted
    pub fn designations(&self) -> Vec<&str> {
        let mut keys: Vec<&str> = self.threads.keys().map(String::as_str).collect();
        keys.sort_unstable();
        keys
    }

    /// Entries of one thread form, sorted by designation
    pub fn threads_by_type(&self, thread_type: ThreadType) -> Vec<&ThreadSpec> {
        let mut specs: Vec<_> = self
            .threads
            .values()
            .filter(|t| t.thread_type == Some(thread_type))
            .collect();
        specs.sort_by(|a, b| a.designation.cmp(&b.designation));
        specs
    }

    pub fn len(&self) -> usize {
        self.threads.len()
    }

    pub fn is_empty(&self) -> bool {
        self.threads.is_empty()
    }
}

impl Default for ThreadDatabase {
    fn default() -> Self {
        Self::new()
    }
}

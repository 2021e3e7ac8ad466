//! Thread series classification

use super::{Designation, DesignationKind, MetricLabel, UnifiedSeries};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Series tag used by the series selector and the cascading filters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Series {
    /// Metric coarse
    M,
    /// Metric fine
    MF,
    UNC,
    UNF,
    UNEF,
    /// Heli-Coil wire insert on a metric base
    HC,
    /// Pipe threads and anything unrecognised
    #[serde(rename = "OTHER")]
    Other,
}

impl Series {
    /// Sub-series offered by the metric 60° family selector.
    pub const METRIC_SELECTOR: [Series; 3] = [Series::M, Series::MF, Series::HC];

    pub fn all() -> &'static [Series] {
        &[
            Series::M,
            Series::MF,
            Series::UNC,
            Series::UNF,
            Series::UNEF,
            Series::HC,
            Series::Other,
        ]
    }
}

impl std::fmt::Display for Series {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Series::M => write!(f, "M"),
            Series::MF => write!(f, "MF"),
            Series::UNC => write!(f, "UNC"),
            Series::UNF => write!(f, "UNF"),
            Series::UNEF => write!(f, "UNEF"),
            Series::HC => write!(f, "HC"),
            Series::Other => write!(f, "OTHER"),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
#[error("unknown thread series: {0}")]
pub struct UnknownSeries(pub String);

impl std::str::FromStr for Series {
    type Err = UnknownSeries;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "M" => Ok(Series::M),
            "MF" => Ok(Series::MF),
            "UNC" => Ok(Series::UNC),
            "UNF" => Ok(Series::UNF),
            "UNEF" => Ok(Series::UNEF),
            "HC" => Ok(Series::HC),
            "OTHER" => Ok(Series::Other),
            _ => Err(UnknownSeries(s.to_string())),
        }
    }
}

/// Coarse pitch (mm) by nominal metric diameter (mm), ISO 261.
pub const COARSE_PITCH: [(u32, f64); 15] = [
    (6, 1.0),
    (7, 1.0),
    (8, 1.25),
    (9, 1.25),
    (10, 1.5),
    (11, 1.5),
    (12, 1.75),
    (14, 2.0),
    (15, 2.0),
    (16, 2.0),
    (17, 2.0),
    (18, 2.5),
    (20, 2.5),
    (22, 2.5),
    (24, 3.0),
];

const PITCH_TOLERANCE: f64 = 1e-6;

/// Canonical coarse pitch for a nominal diameter, if the table has one.
pub fn coarse_pitch_for(diameter: f64) -> Option<f64> {
    COARSE_PITCH
        .iter()
        .find(|(d, _)| f64::from(*d) == diameter)
        .map(|(_, p)| *p)
}

/// Classify a designation string.
///
/// Heli-Coil always wins, then the metric pattern, then the Unified prefixes.
/// Pipe threads and unknown text are `OTHER`.
pub fn classify(designation: &str) -> Series {
    Designation::parse(designation).series()
}

pub(super) fn series_of(heli_coil: bool, kind: &DesignationKind) -> Series {
    if heli_coil {
        return Series::HC;
    }

    match kind {
        DesignationKind::Metric { label: MetricLabel::MF, .. } => Series::MF,
        DesignationKind::Metric {
            label: MetricLabel::M,
            diameter,
            pitch,
        } => match (pitch, coarse_pitch_for(*diameter)) {
            (None, _) => Series::M,
            (Some(_), None) => Series::MF,
            (Some(p), Some(coarse)) if (p - coarse).abs() < PITCH_TOLERANCE => Series::M,
            (Some(_), Some(_)) => Series::MF,
        },
        DesignationKind::Unified { series, .. } => match series {
            UnifiedSeries::Unc => Series::UNC,
            UnifiedSeries::Unf => Series::UNF,
            UnifiedSeries::Unef => Series::UNEF,
        },
        DesignationKind::Pipe { .. } | DesignationKind::Unrecognized => Series::Other,
    }
}

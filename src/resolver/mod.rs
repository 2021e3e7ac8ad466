//! Geometry resolution
//!
//! Turns a size designation into thread geometry. The steps run in a fixed
//! order and the step that produced the answer is kept in the [`Resolution`]
//! tag:
//!
//! 1. exact database entry (`Exact`, or `Override` for an HC key)
//! 2. Heli-Coil only: the `HC <base>` override entry (`Override`)
//! 3. Heli-Coil only: the base metric entry, with a derived tap drill when
//!    the entry has none (`BaseWithDerivedTapDrill` / `BaseComplete`)
//! 4. `NotFound`

use crate::black_book::{minor_diameter_60, ThreadDatabase, ThreadSpec, ThreadType};
use crate::parser::Designation;
use serde::Serialize;
use tracing::trace;

/// Where resolved geometry came from
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "resolution", content = "spec", rename_all = "snake_case")]
pub enum Resolution {
    /// Database entry under the exact designation
    Exact(ThreadSpec),
    /// Dedicated Heli-Coil entry
    Override(ThreadSpec),
    /// Base metric entry, tap drill filled in by the minor-diameter formula
    BaseWithDerivedTapDrill(ThreadSpec),
    /// Base metric entry used as-is
    BaseComplete(ThreadSpec),
    /// No geometry available. Not an error; dependent fields stay blank.
    NotFound,
}

impl Resolution {
    pub fn spec(&self) -> Option<&ThreadSpec> {
        match self {
            Resolution::Exact(spec)
            | Resolution::Override(spec)
            | Resolution::BaseWithDerivedTapDrill(spec)
            | Resolution::BaseComplete(spec) => Some(spec),
            Resolution::NotFound => None,
        }
    }

    pub fn is_found(&self) -> bool {
        !matches!(self, Resolution::NotFound)
    }

    /// Short name of the step that resolved the designation
    pub fn label(&self) -> &'static str {
        match self {
            Resolution::Exact(_) => "exact",
            Resolution::Override(_) => "heli-coil override",
            Resolution::BaseWithDerivedTapDrill(_) => "base metric, derived tap drill",
            Resolution::BaseComplete(_) => "base metric",
            Resolution::NotFound => "not found",
        }
    }

    /// Display geometry for `designation`. Absent values render as `-`.
    pub fn geometry(&self, designation: &str) -> ThreadGeometry {
        match self.spec() {
            Some(spec) => ThreadGeometry {
                designation: designation.to_string(),
                major_diameter: Some(spec.major_diameter),
                pitch: Some(spec.pitch),
                tap_drill_diameter: spec.tap_drill_diameter,
                depth_of_cut: spec.depth_of_cut,
            },
            None => ThreadGeometry {
                designation: designation.to_string(),
                major_diameter: None,
                pitch: None,
                tap_drill_diameter: None,
                depth_of_cut: None,
            },
        }
    }
}

/// Resolve any size designation against the database.
pub fn resolve_geometry(threads: &ThreadDatabase, designation: &str) -> Resolution {
    resolve_designation(threads, &Designation::parse(designation))
}

/// [`resolve_geometry`] for a designation that is already parsed
pub fn resolve_designation(threads: &ThreadDatabase, designation: &Designation) -> Resolution {
    let raw = designation.as_str();
    if let Some(spec) = threads.lookup(raw) {
        trace!(designation = raw, "exact database entry");
        let heli_coil = spec.thread_type == Some(ThreadType::HC) || designation.is_heli_coil();
        return if heli_coil {
            Resolution::Override(spec.clone())
        } else {
            Resolution::Exact(spec.clone())
        };
    }

    if designation.is_heli_coil() {
        return resolve_heli_coil(threads, designation);
    }

    trace!(designation = raw, "no database entry");
    Resolution::NotFound
}

/// Heli-Coil resolution: dedicated entry, then the base metric entry.
///
/// The fallback keeps the requested designation on the returned spec and the
/// thread type of the base entry.
pub fn resolve_heli_coil(threads: &ThreadDatabase, designation: &Designation) -> Resolution {
    let requested = designation.as_str().trim();

    for key in [requested.to_string(), designation.heli_coil_display()] {
        if let Some(spec) = threads.lookup(&key) {
            trace!(designation = requested, key = %key, "heli-coil override");
            return Resolution::Override(spec.clone());
        }
    }

    let base = designation.base();
    let Some(base_spec) = threads.lookup(base) else {
        trace!(designation = requested, base, "no base metric entry");
        return Resolution::NotFound;
    };

    let mut spec = base_spec.clone();
    spec.designation = requested.to_string();

    if spec.tap_drill_diameter.is_none() {
        let tap_drill = minor_diameter_60(spec.major_diameter, spec.pitch);
        trace!(designation = requested, base, tap_drill, "derived tap drill");
        spec.tap_drill_diameter = Some(tap_drill);
        Resolution::BaseWithDerivedTapDrill(spec)
    } else {
        trace!(designation = requested, base, "base metric entry");
        Resolution::BaseComplete(spec)
    }
}

/// Geometry ready for display
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ThreadGeometry {
    pub designation: String,
    pub major_diameter: Option<f64>,
    pub pitch: Option<f64>,
    pub tap_drill_diameter: Option<f64>,
    pub depth_of_cut: Option<f64>,
}

/// `-` marks an unknown value; zero is never substituted.
pub const UNKNOWN_MARKER: &str = "-";

fn display_value(value: Option<f64>) -> String {
    match value {
        Some(v) => v.to_string(),
        None => UNKNOWN_MARKER.to_string(),
    }
}

impl ThreadGeometry {
    pub fn major_diameter_text(&self) -> String {
        display_value(self.major_diameter)
    }

    pub fn pitch_text(&self) -> String {
        display_value(self.pitch)
    }

    pub fn tap_drill_text(&self) -> String {
        display_value(self.tap_drill_diameter)
    }

    pub fn depth_of_cut_text(&self) -> String {
        display_value(self.depth_of_cut)
    }

    /// Multi-line summary shown in the thread info panel
    pub fn info_text(&self) -> String {
        format!(
            "Thread: {}\nMajor Diameter: {} mm\nPitch: {} mm\nTap Drill Diameter: {} mm",
            self.designation,
            self.major_diameter_text(),
            self.pitch_text(),
            self.tap_drill_text()
        )
    }
}

impl std::fmt::Display for ThreadGeometry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{}", self.info_text())?;
        write!(f, "Depth of Cut: {} mm", self.depth_of_cut_text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_heli_coil_override_wins() {
        let db = ThreadDatabase::new();
        let resolution = resolve_geometry(&db, "HC M6 x 1.0");
        assert!(matches!(resolution, Resolution::Override(_)));
        let spec = resolution.spec().unwrap();
        assert_eq!(spec.major_diameter, 7.3);
        assert_eq!(spec.pitch, 1.0);
        assert_eq!(spec.tap_drill_diameter, Some(6.3));

        let m12 = resolve_geometry(&db, "HC M12 x 1.0");
        assert_eq!(m12.spec().map(|s| s.major_diameter), Some(13.3));
    }

    #[test]
    fn test_heli_coil_without_base_is_not_found() {
        let db = ThreadDatabase::new();
        assert_eq!(resolve_geometry(&db, "HC M99 x 1.0"), Resolution::NotFound);
    }

    #[test]
    fn test_spelled_out_prefix_finds_override() {
        let db = ThreadDatabase::new();
        let resolution = resolve_geometry(&db, "Heli-Coil M8 x 1.25");
        assert!(matches!(resolution, Resolution::Override(_)));
        assert_eq!(resolution.spec().unwrap().major_diameter, 9.624);
    }

    #[test]
    fn test_derived_tap_drill() {
        let db = ThreadDatabase::from_specs([ThreadSpec::new("M 20 x 1.5", 20.0, 1.5)]);
        let resolution = resolve_geometry(&db, "HC M 20 x 1.5");
        match &resolution {
            Resolution::BaseWithDerivedTapDrill(spec) => {
                assert_eq!(spec.tap_drill_diameter, Some(18.376));
                assert_eq!(spec.designation, "HC M 20 x 1.5");
            }
            other => panic!("expected derived tap drill, got {:?}", other),
        }
    }

    #[test]
    fn test_base_tap_drill_is_kept() {
        let db = ThreadDatabase::new();
        let resolution = resolve_geometry(&db, "HC MF 14 x 1.5");
        match &resolution {
            Resolution::BaseComplete(spec) => {
                let base = db.lookup("MF 14 x 1.5").unwrap();
                assert_eq!(spec.tap_drill_diameter, base.tap_drill_diameter);
                assert_eq!(spec.major_diameter, base.major_diameter);
                assert_eq!(spec.thread_type, base.thread_type);
            }
            other => panic!("expected base metric entry, got {:?}", other),
        }
    }

    #[test]
    fn test_plain_designations() {
        let db = ThreadDatabase::new();
        assert!(matches!(resolve_geometry(&db, "UNF 1/4-28"), Resolution::Exact(_)));
        assert_eq!(resolve_geometry(&db, "BSW 1/4"), Resolution::NotFound);
        assert_eq!(resolve_geometry(&db, ""), Resolution::NotFound);
    }

    #[test]
    fn test_parsed_designation_resolves_the_same() {
        let db = ThreadDatabase::new();
        for designation in ["M 6 x 1.0", "HC M6 x 1.0", "HC MF 14 x 1.5", "HC M99 x 1.0", ""] {
            let parsed = Designation::parse(designation);
            assert_eq!(
                resolve_designation(&db, &parsed),
                resolve_geometry(&db, designation),
                "{}",
                designation
            );
        }
    }

    #[test]
    fn test_resolution_is_idempotent() {
        let db = ThreadDatabase::new();
        for designation in [
            "M 6 x 1.0",
            "HC M6 x 1.0",
            "HC MF 10 x 1.0",
            "HC M99 x 1.0",
            "PT 1/4",
        ] {
            assert_eq!(
                resolve_geometry(&db, designation),
                resolve_geometry(&db, designation),
                "{}",
                designation
            );
        }
    }

    #[test]
    fn test_unknown_values_render_as_marker() {
        let geometry = Resolution::NotFound.geometry("HC M99 x 1.0");
        assert_eq!(
            geometry.info_text(),
            "Thread: HC M99 x 1.0\nMajor Diameter: - mm\nPitch: - mm\nTap Drill Diameter: - mm"
        );
        assert_eq!(geometry.depth_of_cut_text(), "-");
    }

    #[test]
    fn test_info_text() {
        let db = ThreadDatabase::new();
        let geometry = resolve_geometry(&db, "HC M6 x 1.0").geometry("HC M6 x 1.0");
        assert_eq!(
            geometry.info_text(),
            "Thread: HC M6 x 1.0\nMajor Diameter: 7.3 mm\nPitch: 1 mm\nTap Drill Diameter: 6.3 mm"
        );
    }
}

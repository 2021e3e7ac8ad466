//! Reference data validation and consistency checks

use super::*;
use crate::parser::{Designation, DesignationKind, PipeStandard};
use crate::resolver::resolve_geometry;
use crate::tool_library::{Family, ToolCatalog};

const DIAMETER_TOLERANCE: f64 = 0.01; // mm
const PITCH_TOLERANCE: f64 = 0.002; // mm

/// Check one database entry against its own designation
pub fn validate_thread_spec(spec: &ThreadSpec) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();

    if spec.major_diameter <= 0.0 || spec.pitch <= 0.0 {
        issues.push(ValidationIssue {
            severity: Severity::Error,
            code: "NON_POSITIVE_DIMENSION".to_string(),
            message: format!(
                "{}: major diameter {} mm and pitch {} mm must be positive",
                spec.designation, spec.major_diameter, spec.pitch
            ),
            suggestion: None,
        });
        return issues;
    }

    if let Some(tap_drill) = spec.tap_drill_diameter {
        if tap_drill >= spec.major_diameter {
            issues.push(ValidationIssue {
                severity: Severity::Error,
                code: "TAP_DRILL_TOO_LARGE".to_string(),
                message: format!(
                    "{}: tap drill {} mm is not smaller than major diameter {} mm",
                    spec.designation, tap_drill, spec.major_diameter
                ),
                suggestion: Some(format!(
                    "Minor diameter of this thread is about {} mm",
                    minor_diameter_60(spec.major_diameter, spec.pitch)
                )),
            });
        }
    }

    let designation = Designation::parse(&spec.designation);

    // Heli-Coil host threads are oversize
    if designation.is_heli_coil() {
        return issues;
    }

    match *designation.kind() {
        DesignationKind::Metric {
            diameter, pitch, ..
        } => {
            if (diameter - spec.major_diameter).abs() > DIAMETER_TOLERANCE {
                issues.push(mismatch(spec, "major diameter", spec.major_diameter, diameter));
            }
            if let Some(pitch) = pitch {
                if (pitch - spec.pitch).abs() > PITCH_TOLERANCE {
                    issues.push(mismatch(spec, "pitch", spec.pitch, pitch));
                }
            }
        }
        DesignationKind::Unified {
            nominal_in, tpi, ..
        } => {
            if let Some(nominal) = nominal_in {
                let expected = inch_to_mm(nominal);
                if (expected - spec.major_diameter).abs() > DIAMETER_TOLERANCE {
                    issues.push(mismatch(spec, "major diameter", spec.major_diameter, expected));
                }
            }
            if let Some(tpi) = tpi.filter(|t| *t > 0.0) {
                let expected = pitch_from_tpi(tpi);
                if (expected - spec.pitch).abs() > PITCH_TOLERANCE {
                    issues.push(mismatch(spec, "pitch", spec.pitch, expected));
                }
            }
        }
        DesignationKind::Pipe { .. } | DesignationKind::Unrecognized => {}
    }

    issues
}

fn mismatch(spec: &ThreadSpec, what: &str, actual: f64, expected: f64) -> ValidationIssue {
    ValidationIssue {
        severity: Severity::Warning,
        code: "DESIGNATION_MISMATCH".to_string(),
        message: format!(
            "{}: {} {} mm does not match the designation ({} mm)",
            spec.designation, what, actual, expected
        ),
        suggestion: None,
    }
}

/// Check every database entry, in designation order
pub fn validate_database(threads: &ThreadDatabase) -> Vec<ValidationIssue> {
    threads
        .designations()
        .into_iter()
        .filter_map(|d| threads.lookup(d))
        .flat_map(validate_thread_spec)
        .collect()
}

/// Check the insert catalog against the thread database
pub fn validate_catalog(threads: &ThreadDatabase, catalog: &ToolCatalog) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();

    for (family, insert) in catalog.all_inserts() {
        if insert.cutting_diameter <= 0.0 {
            issues.push(ValidationIssue {
                severity: Severity::Warning,
                code: "UNKNOWN_CUTTING_DIAMETER".to_string(),
                message: format!("Insert {} has no cutting diameter", insert.code),
                suggestion: Some("Spindle speed cannot be derived for this insert".to_string()),
            });
        }

        if insert.compatible_sizes.is_empty() {
            issues.push(ValidationIssue {
                severity: Severity::Warning,
                code: "NO_COMPATIBLE_SIZES".to_string(),
                message: format!("Insert {} lists no thread sizes", insert.code),
                suggestion: None,
            });
        }

        for (i, size) in insert.compatible_sizes.iter().enumerate() {
            if insert.compatible_sizes[..i].contains(size) {
                issues.push(ValidationIssue {
                    severity: Severity::Info,
                    code: "DUPLICATE_SIZE".to_string(),
                    message: format!("Insert {} lists {} more than once", insert.code, size),
                    suggestion: None,
                });
                continue;
            }

            if !resolve_geometry(threads, size.as_str()).is_found() {
                issues.push(ValidationIssue {
                    severity: Severity::Error,
                    code: "UNRESOLVED_SIZE".to_string(),
                    message: format!(
                        "Insert {} lists {}, which has no thread data",
                        insert.code, size
                    ),
                    suggestion: Some("Add the size to the thread database".to_string()),
                });
            }

            if !fits_family(family, size) {
                issues.push(ValidationIssue {
                    severity: Severity::Warning,
                    code: "FAMILY_MISMATCH".to_string(),
                    message: format!(
                        "Insert {} in {} lists {}, which is not a {} thread",
                        insert.code, family, size, family
                    ),
                    suggestion: None,
                });
            }
        }
    }

    issues
}

/// Thread forms an insert of each family can cut
fn fits_family(family: Family, size: &Designation) -> bool {
    match (family, size.kind()) {
        (Family::Parallel60, DesignationKind::Metric { .. })
        | (Family::Parallel60, DesignationKind::Unified { .. }) => true,
        (Family::Parallel55, DesignationKind::Pipe { standard }) => *standard == PipeStandard::G,
        (Family::Tapered55, DesignationKind::Pipe { standard }) => *standard == PipeStandard::Pt,
        (Family::Tapered60, DesignationKind::Pipe { standard }) => *standard == PipeStandard::Npt,
        _ => false,
    }
}

/// Validation issue with severity
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationIssue {
    pub severity: Severity,
    pub code: String,
    pub message: String,
    pub suggestion: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Severity {
    Info,
    Warning,
    Error,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Info => write!(f, "INFO"),
            Severity::Warning => write!(f, "WARNING"),
            Severity::Error => write!(f, "ERROR"),
        }
    }
}

impl std::fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} [{}] {}", self.severity, self.code, self.message)?;
        if let Some(suggestion) = &self.suggestion {
            write!(f, " ({})", suggestion)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tool_library::{FamilyGroup, ToolInsert};
    use pretty_assertions::assert_eq;

    fn codes(issues: &[ValidationIssue]) -> Vec<&str> {
        issues.iter().map(|i| i.code.as_str()).collect()
    }

    #[test]
    fn test_builtin_data_is_consistent() {
        let threads = ThreadDatabase::new();
        let catalog = ToolCatalog::builtin();
        assert_eq!(validate_database(&threads), vec![]);
        assert_eq!(validate_catalog(&threads, &catalog), vec![]);
    }

    #[test]
    fn test_tap_drill_larger_than_major() {
        let spec = ThreadSpec::new("M 6 x 1.0", 6.0, 1.0).with_tap_drill(6.2);
        let issues = validate_thread_spec(&spec);
        assert_eq!(codes(&issues), vec!["TAP_DRILL_TOO_LARGE"]);
        assert_eq!(issues[0].severity, Severity::Error);
    }

    #[test]
    fn test_designation_mismatch() {
        let metric = ThreadSpec::new("MF 10 x 1.0", 10.0, 1.25);
        assert_eq!(codes(&validate_thread_spec(&metric)), vec!["DESIGNATION_MISMATCH"]);

        // 3/8" is 9.525 mm
        let unified = ThreadSpec::new("UNF 3/8-24", 9.0, 1.058);
        assert_eq!(codes(&validate_thread_spec(&unified)), vec!["DESIGNATION_MISMATCH"]);
    }

    #[test]
    fn test_heli_coil_oversize_is_accepted() {
        let spec = ThreadSpec::new("HC M6 x 1.0", 7.3, 1.0).with_tap_drill(6.3);
        assert_eq!(validate_thread_spec(&spec), vec![]);
    }

    #[test]
    fn test_non_positive_dimension() {
        let spec = ThreadSpec::new("M 6 x 1.0", 6.0, 0.0);
        assert_eq!(codes(&validate_thread_spec(&spec)), vec!["NON_POSITIVE_DIMENSION"]);
    }

    #[test]
    fn test_catalog_problems() {
        let threads = ThreadDatabase::new();
        let catalog = ToolCatalog::new(vec![FamilyGroup {
            family: Family::Tapered60,
            inserts: vec![
                ToolInsert {
                    code: "T1".to_string(),
                    cutting_diameter: 0.0,
                    compatible_sizes: vec!["NPT 1/4".into(), "NPT 1/4".into(), "NPT 9".into()],
                },
                ToolInsert {
                    code: "T2".to_string(),
                    cutting_diameter: 9.8,
                    compatible_sizes: vec!["PT 1/4".into()],
                },
            ],
        }])
        .unwrap();

        let issues = validate_catalog(&threads, &catalog);
        assert_eq!(
            codes(&issues),
            vec![
                "UNKNOWN_CUTTING_DIAMETER",
                "DUPLICATE_SIZE",
                "UNRESOLVED_SIZE",
                "FAMILY_MISMATCH",
            ]
        );
    }

    #[test]
    fn test_issue_display() {
        let issue = ValidationIssue {
            severity: Severity::Error,
            code: "UNRESOLVED_SIZE".to_string(),
            message: "Insert X lists M 99".to_string(),
            suggestion: Some("Add it".to_string()),
        };
        assert_eq!(issue.to_string(), "ERROR [UNRESOLVED_SIZE] Insert X lists M 99 (Add it)");
    }
}

//! Built-in threading insert catalog
//!
//! Laydown inserts grouped by family, in the order they are offered.
//! Cutting diameters (Dc) are in mm.

use super::{Family, FamilyGroup, ToolInsert};
use crate::parser::Designation;

type InsertRow = (&'static str, f64, &'static [&'static str]);

#[rustfmt::skip]
const PARALLEL_60: [InsertRow; 5] = [
    (
        "R06005-05006",
        5.0,
        &[
            "MF 6 x 0.75", "MF 7 x 0.75", "MF 8 x 0.75", "MF 9 x 0.75", "MF 10 x 0.75", "MF 11 x 0.75",
            "UNF 1/4-28", "UNEF 1/4-32", "UNEF 5/16-32", "UNEF 3/8-32", "UNEF 7/16-28", "UNEF 1/2-28",
        ],
    ),
    (
        "R06005-05010",
        5.0,
        &[
            "M 6 x 1.0", "M 7 x 1.0", "MF 8 x 1.0", "MF 9 x 1.0", "MF 10 x 1.0", "MF 11 x 1.0",
            "MF 12 x 1.0", "MF 14 x 1.0", "MF 15 x 1.0", "MF 16 x 1.0", "MF 17 x 1.0", "MF 18 x 1.0",
            "MF 20 x 1.0", "MF 22 x 1.0", "MF 24 x 1.0", "MF 25 x 1.0", "MF 27 x 1.0", "MF 28 x 1.0",
            "MF 33 x 1.0", "UNF 1/4-28", "UNF 5/16-24", "UNF 3/8-24", "UNEF 7/16-28", "UNEF 1/2-28",
            "UNEF 9/16-24", "UNEF 5/8-24", "UNEF 11/16-24",
        ],
    ),
    (
        "R06007-06810",
        6.8,
        &[
            "M 8 x 1.25", "M 9 x 1.25", "MF 8 x 1.0", "MF 9 x 1.0", "MF 10 x 1.0", "MF 10 x 1.25",
            "MF 11 x 1.0", "MF 12 x 1.0", "MF 12 x 1.25", "MF 14 x 1.0", "MF 14 x 1.25", "MF 15 x 1.0",
            "MF 16 x 1.0", "MF 17 x 1.0", "MF 18 x 1.0", "MF 20 x 1.0", "MF 22 x 1.0", "MF 24 x 1.0",
            "MF 25 x 1.0", "MF 27 x 1.0", "MF 28 x 1.0", "MF 33 x 1.0", "UNF 5/16-24", "UNF 3/8-24",
            "UNF 7/16-20", "UNF 1/2-20", "UNEF 7/16-28", "UNEF 1/2-28", "UNEF 9/16-24", "UNEF 5/8-24",
            "UNEF 11/16-24", "UNEF 3/4-20", "UNEF 13/16-20", "UNEF 7/8-20", "UNEF 15/16-20", "UNEF 1-20",
        ],
    ),
    (
        "R06010-08510",
        8.5,
        &[
            "M 10 x 1.5", "M 11 x 1.5", "MF 10 x 1.0", "MF 10 x 1.25", "MF 11 x 1.0", "MF 12 x 1.0",
            "MF 12 x 1.25", "MF 12 x 1.5", "MF 14 x 1.0", "MF 14 x 1.25", "MF 14 x 1.5", "MF 15 x 1.0",
            "MF 15 x 1.5", "MF 16 x 1.0", "MF 16 x 1.5", "MF 17 x 1.0", "MF 17 x 1.5", "MF 18 x 1.0",
            "MF 18 x 1.5", "MF 20 x 1.0", "MF 20 x 1.5", "MF 22 x 1.0", "MF 22 x 1.5", "MF 24 x 1.0",
            "MF 24 x 1.5", "MF 25 x 1.0", "MF 25 x 1.5", "MF 27 x 1.0", "MF 27 x 1.5", "MF 28 x 1.0",
            "MF 28 x 1.5", "MF 30 x 1.5", "MF 32 x 1.5", "MF 33 x 1.0", "MF 33 x 1.5", "MF 35 x 1.5",
            "MF 36 x 1.5", "MF 39 x 1.5", "MF 40 x 1.5", "MF 42 x 1.5", "MF 45 x 1.5", "MF 48 x 1.5",
            "MF 50 x 1.5",
            "UNF 3/8-24", "UNF 7/16-20", "UNF 1/2-20", "UNF 9/16-18", "UNF 5/8-18",
            "UNEF 9/16-24", "UNEF 5/8-24", "UNEF 11/16-24", "UNEF 3/4-20", "UNEF 13/16-20", "UNEF 7/8-20",
            "UNEF 15/16-20", "UNEF 1-20", "UNEF 1 1/16-18", "UNEF 1 1/8-18", "UNEF 1 3/16-18",
            "UNEF 1 1/4-18", "UNEF 1 5/16-18", "UNEF 1 3/8-18", "UNEF 1 7/16-18", "UNEF 1 1/2-18",
            "UNEF 1 9/16-18", "UNEF 1 5/8-18", "UNEF 1 11/16-18",
        ],
    ),
    (
        "R06010-10010",
        10.0,
        &[
            "M 12 x 1.75", "M 14 x 2.0", "M 16 x 2.0",
            "MF 11 x 1.0", "MF 12 x 1.0", "MF 12 x 1.25", "MF 12 x 1.5", "MF 14 x 1.0", "MF 14 x 1.25",
            "MF 14 x 1.5", "MF 15 x 1.0", "MF 15 x 1.5", "MF 16 x 1.0", "MF 16 x 1.5", "MF 17 x 1.0",
            "MF 17 x 1.5", "MF 18 x 1.0", "MF 18 x 1.5", "MF 18 x 2.0", "MF 20 x 1.0", "MF 20 x 1.5",
            "MF 20 x 2.0", "MF 22 x 1.0", "MF 22 x 1.5", "MF 22 x 2.0", "MF 24 x 1.0", "MF 24 x 1.5",
            "MF 24 x 2.0", "MF 25 x 1.0", "MF 25 x 1.5", "MF 25 x 2.0", "MF 27 x 1.0", "MF 27 x 1.5",
            "MF 27 x 2.0", "MF 28 x 1.0", "MF 28 x 1.5", "MF 28 x 2.0", "MF 30 x 1.5", "MF 30 x 2.0",
            "MF 32 x 1.5", "MF 32 x 2.0", "MF 33 x 1.0", "MF 33 x 1.5", "MF 33 x 2.0", "MF 35 x 1.5",
            "MF 36 x 1.5", "MF 36 x 2.0", "MF 39 x 1.5", "MF 39 x 2.0", "MF 40 x 1.5", "MF 40 x 2.0",
            "MF 42 x 1.5", "MF 42 x 2.0", "MF 45 x 1.5", "MF 45 x 2.0", "MF 48 x 1.5", "MF 48 x 2.0",
            "MF 50 x 1.5", "MF 50 x 2.0", "MF 52 x 2.0", "MF 55 x 2.0", "MF 56 x 2.0", "MF 58 x 2.0",
            "MF 60 x 2.0", "MF 62 x 2.0", "MF 64 x 2.0", "MF 65 x 2.0", "MF 68 x 2.0", "MF 70 x 2.0",
            "MF 72 x 2.0", "MF 75 x 2.0", "MF 76 x 2.0", "MF 80 x 2.0",
            "UNC 1/2-13",
            "UNF 1/2-20", "UNF 9/16-18", "UNF 5/8-18", "UNF 3/4-16", "UNF 7/8-14",
            "UNEF 9/16-24", "UNEF 5/8-24", "UNEF 11/16-24", "UNEF 3/4-20", "UNEF 13/16-20", "UNEF 7/8-20",
            "UNEF 15/16-20", "UNEF 1-20", "UNEF 1 1/16-18", "UNEF 1 1/8-18", "UNEF 1 3/16-18",
            "UNEF 1 1/4-18", "UNEF 1 5/16-18", "UNEF 1 3/8-18", "UNEF 1 7/16-18", "UNEF 1 1/2-18",
            "UNEF 1 9/16-18", "UNEF 1 5/8-18", "UNEF 1 11/16-18",
        ],
    ),
];

#[rustfmt::skip]
const PARALLEL_55: [InsertRow; 2] = [
    ("R05507-06512", 6.56, &["G (PF) 1/16", "G (PF) 1/8"]),
    (
        "R05510-10018",
        10.0,
        &["G (PF) 1/4", "G (PF) 3/8", "G (PF) 1/2", "G (PF) 5/8", "G (PF) 3/4", "G (PF) 7/8"],
    ),
];

#[rustfmt::skip]
const TAPERED_55: [InsertRow; 2] = [
    ("R05510-09516", 9.5, &["PT 1/4", "PT 3/8"]),
    ("R05510-10025", 10.0, &["PT 1/2", "PT 3/4"]),
];

#[rustfmt::skip]
const TAPERED_60: [InsertRow; 2] = [
    ("R06010-09808", 9.8, &["NPT 1/4", "NPT 3/8"]),
    ("R06010-10810", 10.8, &["NPT 1/2", "NPT 3/4"]),
];

/// Family groups of the built-in catalog, in declaration order
pub fn load_builtin_groups() -> Vec<FamilyGroup> {
    let families: [(Family, &[InsertRow]); 4] = [
        (Family::Parallel60, &PARALLEL_60),
        (Family::Parallel55, &PARALLEL_55),
        (Family::Tapered55, &TAPERED_55),
        (Family::Tapered60, &TAPERED_60),
    ];

    families
        .into_iter()
        .map(|(family, rows)| FamilyGroup {
            family,
            inserts: rows
                .iter()
                .map(|&(code, cutting_diameter, sizes)| ToolInsert {
                    code: code.to_string(),
                    cutting_diameter,
                    compatible_sizes: sizes.iter().map(|s| Designation::parse(s)).collect(),
                })
                .collect(),
        })
        .collect()
}

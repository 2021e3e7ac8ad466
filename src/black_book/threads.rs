//! Thread database - PT/NPT taper pipe, G (BSPP), ISO metric, Unified and
//! Heli-Coil host thread dimensions

use super::calculations::pitch_from_tpi;
use super::{ThreadSpec, ThreadType};
use std::collections::HashMap;

// (designation, major diameter, TPI, tap drill, depth of cut)
const TAPER_PT: [(&str, f64, f64, f64, f64); 6] = [
    ("PT 1/4", 13.157, 19.0, 11.113, 9.4),
    ("PT 3/8", 16.662, 19.0, 14.684, 9.7),
    ("PT 1/2", 20.955, 14.0, 18.256, 12.7),
    ("PT 5/8", 22.911, 14.0, 20.9, 13.4),
    ("PT 3/4", 26.441, 14.0, 23.813, 14.1),
    ("PT 7/8", 30.201, 14.0, 28.1, 15.2),
];

const TAPER_NPT: [(&str, f64, f64, f64, f64); 4] = [
    ("NPT 1/4", 13.716, 18.0, 11.113, 12.0),
    ("NPT 3/8", 17.145, 18.0, 14.288, 12.0),
    ("NPT 1/2", 21.336, 14.0, 17.859, 12.0),
    ("NPT 3/4", 26.67, 14.0, 23.019, 12.0),
];

// (designation, major diameter, pitch, tap drill)
const PARALLEL_G: [(&str, f64, f64, f64); 8] = [
    ("G (PF) 1/16", 7.723, 0.907, 6.8),
    ("G (PF) 1/8", 9.728, 0.907, 8.7),
    ("G (PF) 1/4", 13.157, 1.337, 11.7),
    ("G (PF) 3/8", 16.662, 1.337, 15.2),
    ("G (PF) 1/2", 20.955, 1.814, 18.9),
    ("G (PF) 5/8", 22.911, 1.814, 20.9),
    ("G (PF) 3/4", 26.441, 1.814, 24.4),
    ("G (PF) 7/8", 30.201, 1.814, 28.1),
];

const METRIC_COARSE: [(&str, f64, f64, f64); 9] = [
    ("M 6 x 1.0", 6.0, 1.0, 5.0),
    ("M 7 x 1.0", 7.0, 1.0, 6.0),
    ("M 8 x 1.25", 8.0, 1.25, 6.8),
    ("M 9 x 1.25", 9.0, 1.25, 7.8),
    ("M 10 x 1.5", 10.0, 1.5, 8.5),
    ("M 11 x 1.5", 11.0, 1.5, 9.5),
    ("M 12 x 1.75", 12.0, 1.75, 10.3),
    ("M 14 x 2.0", 14.0, 2.0, 12.0),
    ("M 16 x 2.0", 16.0, 2.0, 14.0),
];

const METRIC_FINE: [(&str, f64, f64, f64); 81] = [
    ("MF 6 x 0.75", 6.0, 0.75, 5.3),
    ("MF 7 x 0.75", 7.0, 0.75, 6.3),
    ("MF 8 x 0.75", 8.0, 0.75, 7.3),
    ("MF 8 x 1.0", 8.0, 1.0, 7.0),
    ("MF 9 x 0.75", 9.0, 0.75, 8.3),
    ("MF 9 x 1.0", 9.0, 1.0, 8.0),
    ("MF 10 x 0.75", 10.0, 0.75, 9.3),
    ("MF 10 x 1.0", 10.0, 1.0, 9.0),
    ("MF 10 x 1.25", 10.0, 1.25, 8.8),
    ("MF 11 x 0.75", 11.0, 0.75, 10.3),
    ("MF 11 x 1.0", 11.0, 1.0, 10.0),
    ("MF 12 x 1.0", 12.0, 1.0, 11.0),
    ("MF 12 x 1.25", 12.0, 1.25, 10.8),
    ("MF 12 x 1.5", 12.0, 1.5, 10.5),
    ("MF 14 x 1.0", 14.0, 1.0, 13.0),
    ("MF 14 x 1.25", 14.0, 1.25, 12.8),
    ("MF 14 x 1.5", 14.0, 1.5, 12.5),
    ("MF 15 x 1.0", 15.0, 1.0, 14.0),
    ("MF 15 x 1.5", 15.0, 1.5, 13.5),
    ("MF 16 x 1.0", 16.0, 1.0, 15.0),
    ("MF 16 x 1.5", 16.0, 1.5, 14.5),
    ("MF 17 x 1.0", 17.0, 1.0, 16.0),
    ("MF 17 x 1.5", 17.0, 1.5, 15.5),
    ("MF 18 x 1.0", 18.0, 1.0, 17.0),
    ("MF 18 x 1.5", 18.0, 1.5, 16.5),
    ("MF 18 x 2.0", 18.0, 2.0, 16.0),
    ("MF 20 x 1.0", 20.0, 1.0, 19.0),
    ("MF 20 x 1.5", 20.0, 1.5, 18.5),
    ("MF 20 x 2.0", 20.0, 2.0, 18.0),
    ("MF 22 x 1.0", 22.0, 1.0, 21.0),
    ("MF 22 x 1.5", 22.0, 1.5, 20.5),
    ("MF 22 x 2.0", 22.0, 2.0, 20.0),
    ("MF 24 x 1.0", 24.0, 1.0, 23.0),
    ("MF 24 x 1.5", 24.0, 1.5, 22.5),
    ("MF 24 x 2.0", 24.0, 2.0, 22.0),
    ("MF 25 x 1.0", 25.0, 1.0, 24.0),
    ("MF 25 x 1.5", 25.0, 1.5, 23.5),
    ("MF 25 x 2.0", 25.0, 2.0, 23.0),
    ("MF 27 x 1.0", 27.0, 1.0, 26.0),
    ("MF 27 x 1.5", 27.0, 1.5, 25.5),
    ("MF 27 x 2.0", 27.0, 2.0, 25.0),
    ("MF 28 x 1.0", 28.0, 1.0, 27.0),
    ("MF 28 x 1.5", 28.0, 1.5, 26.5),
    ("MF 28 x 2.0", 28.0, 2.0, 26.0),
    ("MF 30 x 1.0", 30.0, 1.0, 29.0),
    ("MF 30 x 1.5", 30.0, 1.5, 28.5),
    ("MF 30 x 2.0", 30.0, 2.0, 28.0),
    ("MF 32 x 1.5", 32.0, 1.5, 30.5),
    ("MF 32 x 2.0", 32.0, 2.0, 30.0),
    ("MF 33 x 1.0", 33.0, 1.0, 31.5),
    ("MF 33 x 1.5", 33.0, 1.5, 31.5),
    ("MF 33 x 2.0", 33.0, 2.0, 31.0),
    ("MF 35 x 1.5", 35.0, 1.5, 33.5),
    ("MF 36 x 1.5", 36.0, 1.5, 34.5),
    ("MF 36 x 2.0", 36.0, 2.0, 34.0),
    ("MF 39 x 1.5", 39.0, 1.5, 37.5),
    ("MF 39 x 2.0", 39.0, 2.0, 37.0),
    ("MF 40 x 1.5", 40.0, 1.5, 38.5),
    ("MF 40 x 2.0", 40.0, 2.0, 38.0),
    ("MF 42 x 1.5", 42.0, 1.5, 40.5),
    ("MF 42 x 2.0", 42.0, 2.0, 40.0),
    ("MF 45 x 1.5", 45.0, 1.5, 43.5),
    ("MF 45 x 2.0", 45.0, 2.0, 43.0),
    ("MF 48 x 1.5", 48.0, 1.5, 46.5),
    ("MF 48 x 2.0", 48.0, 2.0, 46.0),
    ("MF 50 x 1.5", 50.0, 1.5, 48.5),
    ("MF 50 x 2.0", 50.0, 2.0, 48.0),
    ("MF 52 x 2.0", 52.0, 2.0, 50.0),
    ("MF 55 x 2.0", 55.0, 2.0, 53.0),
    ("MF 56 x 2.0", 56.0, 2.0, 54.0),
    ("MF 58 x 2.0", 58.0, 2.0, 56.0),
    ("MF 60 x 2.0", 60.0, 2.0, 58.0),
    ("MF 62 x 2.0", 62.0, 2.0, 60.0),
    ("MF 64 x 2.0", 64.0, 2.0, 62.0),
    ("MF 65 x 2.0", 65.0, 2.0, 63.0),
    ("MF 68 x 2.0", 68.0, 2.0, 66.0),
    ("MF 70 x 2.0", 70.0, 2.0, 68.0),
    ("MF 72 x 2.0", 72.0, 2.0, 70.0),
    ("MF 75 x 2.0", 75.0, 2.0, 73.0),
    ("MF 76 x 2.0", 76.0, 2.0, 74.0),
    ("MF 80 x 2.0", 80.0, 2.0, 78.0),
];

const UNIFIED_COARSE: [(&str, f64, f64, f64); 1] = [("UNC 1/2-13", 12.7, 1.954, 10.8)];

const UNIFIED_FINE: [(&str, f64, f64, f64); 9] = [
    ("UNF 1/4-28", 6.35, 0.907, 5.5),
    ("UNF 5/16-24", 7.938, 1.058, 6.9),
    ("UNF 3/8-24", 9.525, 1.058, 8.5),
    ("UNF 7/16-20", 11.112, 1.27, 9.9),
    ("UNF 1/2-20", 12.7, 1.27, 11.5),
    ("UNF 9/16-18", 14.288, 1.411, 12.9),
    ("UNF 5/8-18", 15.875, 1.411, 14.5),
    ("UNF 3/4-16", 19.05, 1.588, 17.5),
    ("UNF 7/8-14", 22.225, 1.814, 20.5),
];

const UNIFIED_EXTRA_FINE: [(&str, f64, f64, f64); 24] = [
    ("UNEF 1/4-32", 6.35, 0.794, 5.6),
    ("UNEF 5/16-32", 7.938, 0.794, 7.2),
    ("UNEF 3/8-32", 9.525, 0.794, 8.8),
    ("UNEF 7/16-28", 11.112, 0.907, 10.2),
    ("UNEF 1/2-28", 12.7, 0.907, 11.8),
    ("UNEF 9/16-24", 14.288, 1.058, 13.3),
    ("UNEF 5/8-24", 15.875, 1.058, 14.9),
    ("UNEF 11/16-24", 17.462, 1.058, 16.4),
    ("UNEF 3/4-20", 19.05, 1.27, 17.8),
    ("UNEF 13/16-20", 20.638, 1.27, 19.4),
    ("UNEF 7/8-20", 22.225, 1.27, 21.0),
    ("UNEF 15/16-20", 23.812, 1.27, 22.6),
    ("UNEF 1-20", 25.4, 1.27, 24.2),
    ("UNEF 1 1/16-18", 26.988, 1.411, 25.6),
    ("UNEF 1 1/8-18", 28.575, 1.411, 27.2),
    ("UNEF 1 3/16-18", 30.162, 1.411, 28.8),
    ("UNEF 1 1/4-18", 31.75, 1.411, 30.4),
    ("UNEF 1 5/16-18", 33.338, 1.411, 32.0),
    ("UNEF 1 3/8-18", 34.925, 1.411, 33.6),
    ("UNEF 1 7/16-18", 36.512, 1.411, 35.1),
    ("UNEF 1 1/2-18", 38.1, 1.411, 36.7),
    ("UNEF 1 9/16-18", 39.688, 1.411, 38.3),
    ("UNEF 1 5/8-18", 41.275, 1.411, 39.9),
    ("UNEF 1 11/16-18", 42.862, 1.411, 41.5),
];

// Heli-Coil host threads: the tapped hole is larger than the nominal metric
// thread, so these override the generic base-metric fallback.
const HELI_COIL: [(&str, f64, f64, f64); 13] = [
    ("HC M5 x 0.8", 6.04, 0.8, 5.3),
    ("HC M6 x 1.0", 7.3, 1.0, 6.3),
    ("HC M7 x 1.0", 8.3, 1.0, 7.3),
    ("HC M8 x 1.0", 9.3, 1.0, 8.3),
    ("HC M8 x 1.25", 9.624, 1.25, 8.4),
    ("HC M9 x 1.0", 10.3, 1.0, 9.3),
    ("HC M9 x 1.25", 10.624, 1.25, 9.4),
    ("HC M10 x 1.0", 11.3, 1.0, 10.3),
    ("HC M10 x 1.25", 11.624, 1.25, 10.4),
    ("HC M10 x 1.5", 11.948, 1.5, 10.4),
    ("HC M11 x 1.0", 12.3, 1.0, 11.3),
    ("HC M11 x 1.5", 12.948, 1.5, 11.4),
    ("HC M12 x 1.0", 13.3, 1.0, 12.3),
];

/// Load the complete thread database
pub fn load_thread_database() -> HashMap<String, ThreadSpec> {
    let mut db = HashMap::new();

    // TAPER PIPE
    // ==========
    // Pitches are stored in mm, converted from TPI once here.

    let taper: [(&[(&str, f64, f64, f64, f64)], ThreadType); 2] =
        [(&TAPER_PT, ThreadType::PT), (&TAPER_NPT, ThreadType::NPT)];

    for (table, thread_type) in taper {
        for &(designation, major, tpi, tap_drill, depth) in table {
            let spec = ThreadSpec::new(designation, major, pitch_from_tpi(tpi))
                .with_type(thread_type)
                .with_tap_drill(tap_drill)
                .with_depth_of_cut(depth);
            db.insert(designation.to_string(), spec);
        }
    }

    // PARALLEL PIPE, METRIC, UNIFIED, HELI-COIL
    // =========================================

    let groups: [(&[(&str, f64, f64, f64)], ThreadType); 7] = [
        (&PARALLEL_G, ThreadType::G),
        (&METRIC_COARSE, ThreadType::Coarse),
        (&METRIC_FINE, ThreadType::Fine),
        (&UNIFIED_COARSE, ThreadType::UNC),
        (&UNIFIED_FINE, ThreadType::UNF),
        (&UNIFIED_EXTRA_FINE, ThreadType::UNEF),
        (&HELI_COIL, ThreadType::HC),
    ];

    for (table, thread_type) in groups {
        for &(designation, major, pitch, tap_drill) in table {
            let spec = ThreadSpec::new(designation, major, pitch)
                .with_type(thread_type)
                .with_tap_drill(tap_drill);
            db.insert(designation.to_string(), spec);
        }
    }

    db
}

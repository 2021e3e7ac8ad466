use pretty_assertions::assert_eq;
use threadbook::black_book::validators::{validate_catalog, Severity};
use threadbook::parser::Designation;
use threadbook::{
    classify, resolve_geometry, Family, Resolution, SelectionFilter, SelectionState, Series,
    ThreadDatabase, ThreadSpec, ToolCatalog,
};

fn reference() -> (ThreadDatabase, ToolCatalog) {
    (ThreadDatabase::new(), ToolCatalog::builtin())
}

#[test]
fn test_metric_fine_insert_cascade() {
    let (threads, catalog) = reference();
    let filter = SelectionFilter::new(&threads, &catalog);

    let mut state = SelectionState {
        family: Some(Family::Parallel60),
        series: Some(Series::MF),
        ..SelectionState::default()
    };
    filter.on_family_changed(&state).apply_to(&mut state);
    assert_eq!(state.series, Some(Series::MF));

    state.insert = Some("R06005-05010".to_string());
    let update = filter.on_insert_changed(&state);

    assert!(update.sizes.iter().any(|s| s == "MF 8 x 1.0"));
    assert!(!update.sizes.iter().any(|s| s == "M 6 x 1.0"));
    assert!(!update.sizes.iter().any(|s| s == "UNF 1/4-28"));
    assert_eq!(update.sizes.len(), 17);
    assert_eq!(update.cutting_diameter, Some(5.0));
}

#[test]
fn test_full_cascade_keeps_compatible_choices() {
    let (threads, catalog) = reference();
    let filter = SelectionFilter::new(&threads, &catalog);

    let mut state = SelectionState {
        family: Some(Family::Parallel60),
        series: Some(Series::UNEF),
        ..SelectionState::default()
    };
    filter.on_series_changed(&state).apply_to(&mut state);

    state.insert = Some("R06010-08510".to_string());
    state.size = Some("UNEF 1 11/16-18".to_string());
    let insert_update = filter.on_insert_changed(&state);
    assert_eq!(insert_update.size.as_deref(), Some("UNEF 1 11/16-18"));
    insert_update.apply_to(&mut state);

    let size_update = filter.on_size_changed(&state);
    assert_eq!(size_update.inserts, vec!["R06010-08510", "R06010-10010"]);
    assert_eq!(size_update.insert.as_deref(), Some("R06010-08510"));
    assert_eq!(size_update.cutting_diameter, Some(8.5));
    assert_eq!(size_update.geometry.pitch, Some(1.411));
    size_update.apply_to(&mut state);

    assert_eq!(
        state,
        SelectionState {
            family: Some(Family::Parallel60),
            series: Some(Series::UNEF),
            size: Some("UNEF 1 11/16-18".to_string()),
            insert: Some("R06010-08510".to_string()),
        }
    );
}

#[test]
fn test_switching_family_resets_everything() {
    let (threads, catalog) = reference();
    let filter = SelectionFilter::new(&threads, &catalog);

    let mut state = SelectionState {
        family: Some(Family::Parallel60),
        series: Some(Series::HC),
        size: Some("HC M 6 x 1.0".to_string()),
        insert: Some("R06005-05010".to_string()),
    };
    state.family = Some(Family::Parallel55);
    let update = filter.on_family_changed(&state);
    update.apply_to(&mut state);

    assert_eq!(
        state,
        SelectionState {
            family: Some(Family::Parallel55),
            ..SelectionState::default()
        }
    );
    assert_eq!(update.inserts, vec!["R05507-06512", "R05510-10018"]);
}

#[test]
fn test_heli_coil_classification_dominates() {
    for designation in ["HC M6 x 1.0", "HC MF 10 x 1.0", "Heli-Coil M 12 x 1.75", "HeliCoil M8"] {
        let parsed = Designation::parse(designation);
        assert!(parsed.is_metric(), "{} has a metric base", designation);
        assert_eq!(classify(designation), Series::HC, "{}", designation);
    }
    assert_eq!(classify("M 12 x 1.75"), Series::M);
    assert_eq!(classify("M 12 x 1.5"), Series::MF);
}

#[test]
fn test_heli_coil_resolution() {
    let threads = ThreadDatabase::new();

    let m6 = resolve_geometry(&threads, "HC M6 x 1.0");
    let spec = m6.spec().unwrap();
    assert!(matches!(m6, Resolution::Override(_)));
    assert_eq!(
        (spec.major_diameter, spec.pitch, spec.tap_drill_diameter),
        (7.3, 1.0, Some(6.3))
    );

    let m12 = resolve_geometry(&threads, "HC M12 x 1.0");
    assert_eq!(m12.spec().map(|s| s.major_diameter), Some(13.3));

    assert_eq!(resolve_geometry(&threads, "HC M99 x 1.0"), Resolution::NotFound);
}

#[test]
fn test_heli_coil_formula_fallback() {
    let threads = ThreadDatabase::from_specs([ThreadSpec::new("M 20 x 1.5", 20.0, 1.5)]);
    let resolution = resolve_geometry(&threads, "HC M 20 x 1.5");
    assert!(matches!(resolution, Resolution::BaseWithDerivedTapDrill(_)));
    assert_eq!(
        resolution.spec().and_then(|s| s.tap_drill_diameter),
        Some(18.376)
    );
}

#[test]
fn test_resolution_is_idempotent_over_catalog() {
    let (threads, catalog) = reference();
    for &family in Family::all() {
        for size in catalog.sizes_for_family(family) {
            let first = resolve_geometry(&threads, size.as_str());
            assert!(first.is_found(), "{}", size);
            assert_eq!(first, resolve_geometry(&threads, size.as_str()));
        }
    }
}

#[test]
fn test_every_offered_size_reaches_an_insert() {
    let (threads, catalog) = reference();
    let filter = SelectionFilter::new(&threads, &catalog);

    let selections: Vec<(Family, Option<Series>)> = vec![
        (Family::Parallel60, None),
        (Family::Parallel60, Some(Series::M)),
        (Family::Parallel60, Some(Series::MF)),
        (Family::Parallel60, Some(Series::HC)),
        (Family::Parallel60, Some(Series::UNC)),
        (Family::Parallel60, Some(Series::UNF)),
        (Family::Parallel60, Some(Series::UNEF)),
        (Family::Parallel55, None),
        (Family::Tapered55, None),
        (Family::Tapered60, None),
    ];

    for (family, series) in selections {
        let state = SelectionState {
            family: Some(family),
            series,
            ..SelectionState::default()
        };
        let update = filter.on_family_changed(&state);
        assert!(!update.sizes.is_empty(), "{} {:?}", family, series);

        for size in &update.sizes {
            let picked = SelectionState {
                size: Some(size.clone()),
                ..state.clone()
            };
            let size_update = filter.on_size_changed(&picked);
            assert!(
                !size_update.inserts.is_empty(),
                "{} {:?}: no insert for {}",
                family,
                series,
                size
            );
            // every insert offered for the size lists it back
            for code in &size_update.inserts {
                let insert = SelectionState {
                    insert: Some(code.clone()),
                    ..picked.clone()
                };
                let insert_update = filter.on_insert_changed(&insert);
                assert_eq!(insert_update.size.as_deref(), Some(size.as_str()));
            }
        }
    }
}

#[test]
fn test_option_lists_are_stable() {
    let (threads, catalog) = reference();
    let filter = SelectionFilter::new(&threads, &catalog);
    let state = SelectionState {
        family: Some(Family::Parallel60),
        series: Some(Series::HC),
        ..SelectionState::default()
    };

    let first = filter.on_series_changed(&state);
    for _ in 0..3 {
        assert_eq!(filter.on_series_changed(&state), first);
    }
}

#[test]
fn test_heli_coil_insert_filter_is_permissive() {
    // An insert qualifies for HC through any metric size, even when none of
    // its HC forms has geometry.
    let threads = ThreadDatabase::from_specs([ThreadSpec::new("M 6 x 1.0", 6.0, 1.0)]);
    let catalog = ToolCatalog::from_json(
        r#"[{ "family": "parallel60", "inserts": [
            { "code": "METRIC", "cutting_diameter": 5.0, "compatible_sizes": ["M 50 x 1.5"] },
            { "code": "INCH", "cutting_diameter": 5.0, "compatible_sizes": ["UNF 1/4-28"] }
        ] }]"#,
    )
    .unwrap();
    let filter = SelectionFilter::new(&threads, &catalog);

    let state = SelectionState {
        family: Some(Family::Parallel60),
        series: Some(Series::HC),
        ..SelectionState::default()
    };
    let update = filter.on_series_changed(&state);
    assert_eq!(update.inserts, vec!["METRIC"]);
    assert_eq!(update.sizes, vec!["HC M 50 x 1.5"]);

    let size = SelectionState {
        size: Some("HC M 50 x 1.5".to_string()),
        ..state
    };
    let size_update = filter.on_size_changed(&size);
    assert_eq!(size_update.resolution, Resolution::NotFound);
    assert_eq!(size_update.inserts, vec!["METRIC"]);
    assert_eq!(size_update.geometry.tap_drill_text(), "-");

    let issues = validate_catalog(&threads, &catalog);
    assert!(issues
        .iter()
        .any(|i| i.severity == Severity::Error && i.code == "UNRESOLVED_SIZE"));
}

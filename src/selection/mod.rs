//! Cascading selection filter
//!
//! Keeps the four dependent selections (family, series, size, insert)
//! consistent. Each event handler reads the current [`SelectionState`] and
//! returns the new option lists plus what the caller has to clear; the state
//! itself is only changed through `apply_to`.
//!
//! Size lists keep the catalog's first-seen order.

use crate::black_book::ThreadDatabase;
use crate::parser::{Designation, Series};
use crate::resolver::{resolve_designation, resolve_geometry, Resolution, ThreadGeometry};
use crate::tool_library::{Family, ToolCatalog, ToolInsert};
use indexmap::IndexSet;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Current selections, owned by the caller
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SelectionState {
    pub family: Option<Family>,
    pub series: Option<Series>,
    pub size: Option<String>,
    pub insert: Option<String>,
}

/// Fields an event invalidated
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ClearedFields {
    pub series: bool,
    pub size: bool,
    pub insert: bool,
    pub geometry: bool,
    pub cutting_diameter: bool,
}

/// Result of a family or series change
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FamilyUpdate {
    pub series_selector_visible: bool,
    /// Series after the change; `None` when the selector is hidden
    pub series: Option<Series>,
    pub sizes: Vec<String>,
    pub inserts: Vec<String>,
    pub cleared: ClearedFields,
}

impl FamilyUpdate {
    pub fn apply_to(&self, state: &mut SelectionState) {
        state.series = self.series;
        state.size = None;
        state.insert = None;
    }
}

/// Result of an insert change
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InsertUpdate {
    pub sizes: Vec<String>,
    /// Previous size, when it is still offered
    pub size: Option<String>,
    /// Geometry of the kept size
    pub geometry: Option<ThreadGeometry>,
    /// Dc in mm; `None` when unknown
    pub cutting_diameter: Option<f64>,
    pub cleared: ClearedFields,
}

impl InsertUpdate {
    pub fn apply_to(&self, state: &mut SelectionState) {
        state.size = self.size.clone();
    }
}

/// Result of a size change
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SizeUpdate {
    pub resolution: Resolution,
    pub geometry: ThreadGeometry,
    pub inserts: Vec<String>,
    /// Previous insert, when it can still cut the size
    pub insert: Option<String>,
    pub cutting_diameter: Option<f64>,
    pub cleared: ClearedFields,
}

impl SizeUpdate {
    pub fn apply_to(&self, state: &mut SelectionState) {
        state.insert = self.insert.clone();
    }
}

/// Event handlers over borrowed reference data
#[derive(Debug, Clone, Copy)]
pub struct SelectionFilter<'a> {
    threads: &'a ThreadDatabase,
    catalog: &'a ToolCatalog,
}

impl<'a> SelectionFilter<'a> {
    pub fn new(threads: &'a ThreadDatabase, catalog: &'a ToolCatalog) -> Self {
        Self { threads, catalog }
    }

    /// Family changed; the series selector follows the family.
    pub fn on_family_changed(&self, state: &SelectionState) -> FamilyUpdate {
        let visible = state.family.is_some_and(Family::exposes_series_selector);
        self.on_family_or_series_changed(state, visible)
    }

    /// Series changed with the family held fixed.
    pub fn on_series_changed(&self, state: &SelectionState) -> FamilyUpdate {
        self.on_family_changed(state)
    }

    /// Rebuild the size and insert lists for the family and series.
    ///
    /// A hidden series selector resets the series. Size, insert, geometry and
    /// cutting diameter are always cleared.
    pub fn on_family_or_series_changed(
        &self,
        state: &SelectionState,
        series_selector_visible: bool,
    ) -> FamilyUpdate {
        let series = if series_selector_visible {
            state.series
        } else {
            None
        };
        let filter = active_filter(series);

        let sizes = match state.family {
            Some(family) => filter_sizes(self.catalog.sizes_for_family(family), filter),
            None => Vec::new(),
        };
        let inserts: Vec<String> = self
            .family_inserts(state.family, filter)
            .map(|i| i.code.clone())
            .collect();

        debug!(
            family = ?state.family,
            series = ?series,
            sizes = sizes.len(),
            inserts = inserts.len(),
            "family/series changed"
        );

        FamilyUpdate {
            series_selector_visible,
            series,
            sizes,
            inserts,
            cleared: ClearedFields {
                series: !series_selector_visible && state.series.is_some(),
                size: true,
                insert: true,
                geometry: true,
                cutting_diameter: true,
            },
        }
    }

    /// Narrow the insert's sizes by series and keep the size if still offered.
    pub fn on_insert_changed(&self, state: &SelectionState) -> InsertUpdate {
        let code = state.insert.as_deref().unwrap_or_default();
        let raw = self.catalog.compatible_sizes(code);

        let sizes: Vec<String> = match active_filter(state.series) {
            Some(Series::HC) => raw
                .iter()
                .filter(|d| d.is_metric())
                .map(Designation::heli_coil_display)
                .collect::<IndexSet<_>>()
                .into_iter()
                .collect(),
            Some(series) => raw
                .iter()
                .filter(|d| d.series() == series)
                .map(|d| d.to_string())
                .collect(),
            None => raw.iter().map(|d| d.to_string()).collect(),
        };

        let cutting_diameter = known_diameter(self.catalog.cutting_diameter(code));

        let size = state
            .size
            .as_ref()
            .filter(|s| sizes.iter().any(|offered| offered == *s))
            .cloned();
        let geometry = size
            .as_deref()
            .map(|s| resolve_geometry(self.threads, s).geometry(s));

        debug!(
            insert = code,
            sizes = sizes.len(),
            kept_size = size.is_some(),
            "insert changed"
        );

        InsertUpdate {
            cleared: ClearedFields {
                size: size.is_none(),
                geometry: size.is_none(),
                cutting_diameter: cutting_diameter.is_none(),
                ..ClearedFields::default()
            },
            sizes,
            size,
            geometry,
            cutting_diameter,
        }
    }

    /// Resolve the size and keep only the inserts that can cut it.
    pub fn on_size_changed(&self, state: &SelectionState) -> SizeUpdate {
        let size = state.size.as_deref().unwrap_or_default();
        let parsed = Designation::parse(size);
        let resolution = resolve_designation(self.threads, &parsed);
        let geometry = resolution.geometry(size);

        let filter = active_filter(state.series);
        // raw catalog lists hold plain metric sizes, never HC forms
        let match_key = if filter == Some(Series::HC) {
            parsed.base()
        } else {
            size
        };

        let inserts: Vec<String> = if size.is_empty() {
            Vec::new()
        } else {
            self.family_inserts(state.family, filter)
                .filter(|i| i.supports(match_key))
                .map(|i| i.code.clone())
                .collect()
        };

        let insert = state
            .insert
            .as_ref()
            .filter(|code| inserts.contains(*code))
            .cloned();
        let cutting_diameter = insert
            .as_deref()
            .and_then(|code| known_diameter(self.catalog.cutting_diameter(code)));

        debug!(
            size,
            resolution = resolution.label(),
            inserts = inserts.len(),
            kept_insert = insert.is_some(),
            "size changed"
        );

        SizeUpdate {
            cleared: ClearedFields {
                insert: insert.is_none(),
                cutting_diameter: cutting_diameter.is_none(),
                ..ClearedFields::default()
            },
            resolution,
            geometry,
            inserts,
            insert,
            cutting_diameter,
        }
    }

    /// Family inserts that can make at least one size of the series
    fn family_inserts(
        &self,
        family: Option<Family>,
        series: Option<Series>,
    ) -> impl Iterator<Item = &'a ToolInsert> + 'a {
        let catalog: &'a ToolCatalog = self.catalog;
        let inserts = match family {
            Some(family) => catalog.inserts_for_family(family),
            None => &[],
        };
        inserts
            .iter()
            .filter(move |insert| insert_makes_series(insert, series))
    }
}

/// `OTHER` never narrows a list.
fn active_filter(series: Option<Series>) -> Option<Series> {
    series.filter(|s| *s != Series::Other)
}

fn known_diameter(dc: f64) -> Option<f64> {
    (dc > 0.0).then_some(dc)
}

fn filter_sizes(pool: IndexSet<&Designation>, series: Option<Series>) -> Vec<String> {
    match series {
        None => pool.into_iter().map(|d| d.to_string()).collect(),
        Some(Series::HC) => pool
            .into_iter()
            .filter(|d| d.is_metric())
            .map(Designation::heli_coil_display)
            .collect::<IndexSet<_>>()
            .into_iter()
            .collect(),
        Some(series) => pool
            .into_iter()
            .filter(|d| d.series() == series)
            .map(|d| d.to_string())
            .collect(),
    }
}

/// Any metric size qualifies an insert for HC, whether or not the HC form
/// resolves to geometry.
fn insert_makes_series(insert: &ToolInsert, series: Option<Series>) -> bool {
    match series {
        None => true,
        Some(Series::HC) => insert.compatible_sizes.iter().any(Designation::is_metric),
        Some(series) => insert.compatible_sizes.iter().any(|d| d.series() == series),
    }
}

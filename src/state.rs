use crate::color::ColorMap;
use crate::config::DashboardConfig;
use crate::data::aggregate::{aggregate, PieData};
use crate::data::filter::{scatter_data, ScatterData};
use crate::data::model::{LaunchTable, PayloadRange, Selection, SiteSelection};

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
pub struct AppState {
    pub config: DashboardConfig,

    /// Loaded dataset; replaced wholesale, never edited.
    pub table: LaunchTable,

    /// Current dropdown and slider values.
    pub selection: Selection,

    /// Pie chart data for the current selection (cached).
    pub pie: PieData,

    /// Scatter chart data for the current selection (cached).
    pub scatter: ScatterData,

    /// Slice colours for the current pie.
    pub pie_colors: ColorMap,

    /// Booster category colours, fixed per dataset.
    pub booster_colors: ColorMap,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,
}

impl AppState {
    pub fn new(config: DashboardConfig, table: LaunchTable) -> Self {
        let selection = Selection::initial(&table);
        let pie = aggregate(&table, &selection.site);
        let scatter = scatter_data(&table, &selection.site, selection.payload_range);
        let booster_colors = booster_colors(&table);
        let pie_colors = pie_colors(&table, &selection.site);

        Self {
            config,
            table,
            selection,
            pie,
            scatter,
            pie_colors,
            booster_colors,
            status_message: None,
        }
    }

    /// Swap in a newly loaded dataset and reset the selection to its defaults.
    pub fn set_table(&mut self, table: LaunchTable) {
        self.selection = Selection::initial(&table);
        self.booster_colors = booster_colors(&table);
        self.table = table;
        self.status_message = None;
        self.refresh();
    }

    /// Dropdown changed: both charts depend on the site.
    pub fn set_site(&mut self, site: SiteSelection) {
        if self.selection.site != site {
            log::debug!("Site selection changed to {site}");
            self.selection.site = site;
            self.refresh();
        }
    }

    /// Slider changed: only the scatter chart depends on the range.
    pub fn set_payload_range(&mut self, range: PayloadRange) {
        if self.selection.payload_range != range {
            self.selection.payload_range = range;
            self.scatter = scatter_data(&self.table, &self.selection.site, range);
        }
    }

    /// Recompute both cached charts from the current selection.
    pub fn refresh(&mut self) {
        let site = &self.selection.site;
        self.pie = aggregate(&self.table, site);
        self.pie_colors = pie_colors(&self.table, site);
        self.scatter = scatter_data(&self.table, site, self.selection.payload_range);
    }
}

fn booster_colors(table: &LaunchTable) -> ColorMap {
    ColorMap::new(
        table
            .records()
            .iter()
            .map(|r| r.booster_version_category.as_str()),
    )
}

fn pie_colors(table: &LaunchTable, site: &SiteSelection) -> ColorMap {
    match site {
        SiteSelection::All => ColorMap::new(table.sites().iter().map(String::as_str)),
        SiteSelection::Site(_) => ColorMap::outcomes(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::aggregate::SliceLabel;
    use crate::data::model::{record, scenario_table};

    fn state() -> AppState {
        AppState::new(DashboardConfig::default(), scenario_table())
    }

    #[test]
    fn starts_with_all_sites_over_full_range() {
        let state = state();
        assert_eq!(state.selection.site, SiteSelection::All);
        assert_eq!(state.selection.payload_range, PayloadRange::new(500.0, 9000.0));
        assert_eq!(state.pie.total(), 2);
        assert_eq!(state.scatter.points.len(), 3);
    }

    #[test]
    fn site_change_recomputes_both_charts() {
        let mut state = state();
        state.set_site(SiteSelection::parse("KSC LC-39A"));
        assert_eq!(state.pie.count_for(&SliceLabel::Outcome(0)), 1);
        assert_eq!(state.pie.count_for(&SliceLabel::Outcome(1)), 1);
        assert_eq!(state.scatter.points.len(), 2);
        assert_eq!(
            state.pie_colors.legend_entries(),
            vec![
                ("0".to_string(), crate::color::outcome_color(0)),
                ("1".to_string(), crate::color::outcome_color(1)),
            ]
        );
    }

    #[test]
    fn range_change_only_touches_scatter() {
        let mut state = state();
        let pie_before = state.pie.clone();
        state.set_payload_range(PayloadRange::new(1000.0, 10000.0));
        assert_eq!(state.pie, pie_before);
        assert_eq!(state.scatter.points.len(), 2);
        assert_eq!(state.scatter.points[0].payload_mass_kg, 9000.0);
        assert_eq!(state.scatter.points[1].payload_mass_kg, 3000.0);
    }

    #[test]
    fn inverted_range_empties_scatter() {
        let mut state = state();
        state.set_payload_range(PayloadRange::new(9000.0, 500.0));
        assert!(state.scatter.points.is_empty());
    }

    #[test]
    fn new_table_resets_selection() {
        let mut state = state();
        state.set_site(SiteSelection::parse("KSC LC-39A"));
        state.status_message = Some("Error: stale".into());

        state.set_table(LaunchTable::from_records(vec![
            record("VAFB SLC-4E", 9600.0, 1, "B4"),
            record("VAFB SLC-4E", 500.0, 0, "v1.1"),
        ]));
        assert_eq!(state.selection.site, SiteSelection::All);
        assert_eq!(state.selection.payload_range, PayloadRange::new(500.0, 9600.0));
        assert_eq!(state.pie.total(), 1);
        assert_eq!(state.scatter.points.len(), 2);
        assert!(state.status_message.is_none());
        assert_eq!(state.booster_colors.legend_entries().len(), 2);
    }
}

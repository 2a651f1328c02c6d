use std::collections::BTreeMap;

use serde::Serialize;

use super::model::{LaunchRecord, LaunchTable, PayloadRange, SiteSelection};

// ---------------------------------------------------------------------------
// Scatter chart data
// ---------------------------------------------------------------------------

/// One scatter marker: x = payload, y = outcome, colour = booster category.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScatterPoint {
    pub payload_mass_kg: f64,
    pub outcome_class: u8,
    pub booster_version_category: String,
}

impl From<&LaunchRecord> for ScatterPoint {
    fn from(r: &LaunchRecord) -> Self {
        ScatterPoint {
            payload_mass_kg: r.payload_mass_kg,
            outcome_class: r.outcome_class,
            booster_version_category: r.booster_version_category.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScatterData {
    pub title: String,
    pub range: PayloadRange,
    pub points: Vec<ScatterPoint>,
}

impl ScatterData {
    /// Plot coordinates per booster category, each group in table order.
    pub fn by_category(&self) -> BTreeMap<&str, Vec<[f64; 2]>> {
        let mut groups: BTreeMap<&str, Vec<[f64; 2]>> = BTreeMap::new();
        for p in &self.points {
            groups
                .entry(p.booster_version_category.as_str())
                .or_default()
                .push([p.payload_mass_kg, f64::from(p.outcome_class)]);
        }
        groups
    }
}

// ---------------------------------------------------------------------------
// Filtering
// ---------------------------------------------------------------------------

/// Records inside `range` (inclusive) launched from `site`, in table order.
///
/// An inverted range yields nothing.
pub fn filtered_records<'a>(
    table: &'a LaunchTable,
    site: &'a SiteSelection,
    range: PayloadRange,
) -> impl Iterator<Item = &'a LaunchRecord> + 'a {
    table
        .records()
        .iter()
        .filter(move |r| range.contains(r.payload_mass_kg))
        .filter(move |r| site.matches(&r.launch_site))
}

/// Payload/outcome points for the correlation scatter chart.
pub fn filter(table: &LaunchTable, site: &SiteSelection, range: PayloadRange) -> Vec<ScatterPoint> {
    filtered_records(table, site, range)
        .map(ScatterPoint::from)
        .collect()
}

/// [`filter`] plus the chart title for the current site.
pub fn scatter_data(table: &LaunchTable, site: &SiteSelection, range: PayloadRange) -> ScatterData {
    let title = match site {
        SiteSelection::All => "Correlation between payload and success for all sites".to_string(),
        SiteSelection::Site(s) => format!("Correlation between payload and success for the site: {s}"),
    };
    ScatterData {
        title,
        range,
        points: filter(table, site, range),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::{record, scenario_table};

    fn point(mass: f64, class: u8, booster: &str) -> ScatterPoint {
        ScatterPoint {
            payload_mass_kg: mass,
            outcome_class: class,
            booster_version_category: booster.to_string(),
        }
    }

    #[test]
    fn all_sites_keeps_only_records_in_range() {
        let points = filter(
            &scenario_table(),
            &SiteSelection::All,
            PayloadRange::new(1000.0, 10000.0),
        );
        // 3000 kg lies inside [1000, 10000] too; only the 500 kg launch drops out.
        assert_eq!(points, vec![point(9000.0, 0, "v2"), point(3000.0, 1, "v1")]);
    }

    #[test]
    fn one_site_restricts_after_range() {
        let points = filter(
            &scenario_table(),
            &SiteSelection::parse("CCAFS LC-40"),
            PayloadRange::new(0.0, 10000.0),
        );
        assert_eq!(points, vec![point(3000.0, 1, "v1")]);
    }

    #[test]
    fn inverted_range_is_empty() {
        let points = filter(
            &scenario_table(),
            &SiteSelection::All,
            PayloadRange::new(10000.0, 0.0),
        );
        assert!(points.is_empty());
    }

    #[test]
    fn range_edges_are_inclusive() {
        let points = filter(
            &scenario_table(),
            &SiteSelection::All,
            PayloadRange::new(500.0, 3000.0),
        );
        assert_eq!(points, vec![point(500.0, 1, "v1"), point(3000.0, 1, "v1")]);
    }

    #[test]
    fn every_point_lies_in_range_and_none_are_missed() {
        let table = scenario_table();
        for (a, b) in [(0.0, 499.0), (0.0, 500.0), (400.0, 3500.0), (2999.0, 9000.0), (9001.0, 20000.0)] {
            let range = PayloadRange::new(a, b);
            let points = filter(&table, &SiteSelection::All, range);
            assert!(points.iter().all(|p| a <= p.payload_mass_kg && p.payload_mass_kg <= b));
            let expected = table
                .records()
                .iter()
                .filter(|r| a <= r.payload_mass_kg && r.payload_mass_kg <= b)
                .count();
            assert_eq!(points.len(), expected, "range [{a}, {b}]");
        }
    }

    #[test]
    fn full_range_for_site_preserves_table_order() {
        let table = LaunchTable::from_records(vec![
            record("A", 7000.0, 1, "FT"),
            record("B", 100.0, 0, "v1.0"),
            record("A", 200.0, 0, "v1.1"),
            record("A", 5000.0, 1, "B4"),
        ]);
        let points = filter(
            &table,
            &SiteSelection::parse("A"),
            PayloadRange::of_table(&table),
        );
        assert_eq!(
            points,
            vec![point(7000.0, 1, "FT"), point(200.0, 0, "v1.1"), point(5000.0, 1, "B4")]
        );
    }

    #[test]
    fn unknown_site_is_empty() {
        let points = filter(
            &scenario_table(),
            &SiteSelection::parse("VAFB SLC-4E"),
            PayloadRange::new(0.0, 10000.0),
        );
        assert!(points.is_empty());
    }

    #[test]
    fn scatter_groups_by_booster_category() {
        let data = scatter_data(
            &scenario_table(),
            &SiteSelection::All,
            PayloadRange::new(0.0, 10000.0),
        );
        assert_eq!(data.title, "Correlation between payload and success for all sites");
        let groups = data.by_category();
        assert_eq!(groups["v1"], vec![[500.0, 1.0], [3000.0, 1.0]]);
        assert_eq!(groups["v2"], vec![[9000.0, 0.0]]);
    }

    #[test]
    fn scatter_title_names_site() {
        let data = scatter_data(
            &scenario_table(),
            &SiteSelection::parse("KSC LC-39A"),
            PayloadRange::new(0.0, 10000.0),
        );
        assert_eq!(
            data.title,
            "Correlation between payload and success for the site: KSC LC-39A"
        );
        assert_eq!(data.points.len(), 2);
    }
}

use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;

use super::model::{LaunchTable, SiteSelection};

// ---------------------------------------------------------------------------
// Pie chart data
// ---------------------------------------------------------------------------

/// What one pie slice counts: a launch site, or an outcome class of one site.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(untagged)]
pub enum SliceLabel {
    Site(String),
    Outcome(u8),
}

impl fmt::Display for SliceLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SliceLabel::Site(s) => write!(f, "{s}"),
            SliceLabel::Outcome(c) => write!(f, "{c}"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PieSlice {
    pub label: SliceLabel,
    pub count: usize,
}

/// Label → count dataset for the success pie chart, ordered by label.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PieData {
    pub title: String,
    pub slices: Vec<PieSlice>,
}

impl PieData {
    pub fn total(&self) -> usize {
        self.slices.iter().map(|s| s.count).sum()
    }

    /// Share of the whole for one slice; 0 for an empty pie.
    pub fn fraction(&self, slice: &PieSlice) -> f64 {
        match self.total() {
            0 => 0.0,
            total => slice.count as f64 / total as f64,
        }
    }

    pub fn count_for(&self, label: &SliceLabel) -> usize {
        self.slices
            .iter()
            .find(|s| &s.label == label)
            .map_or(0, |s| s.count)
    }

    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }
}

// ---------------------------------------------------------------------------
// Aggregation
// ---------------------------------------------------------------------------

/// Count launches for the pie chart.
///
/// * `All` – successful launches only, grouped by site. This is each site's
///   share of all successes, not its success rate.
/// * `Site(s)` – every launch from `s`, grouped by outcome class.
///
/// A site with no launches yields a pie with no slices.
pub fn aggregate(table: &LaunchTable, site: &SiteSelection) -> PieData {
    let mut counts: BTreeMap<SliceLabel, usize> = BTreeMap::new();

    let title = match site {
        SiteSelection::All => {
            for r in table.records().iter().filter(|r| r.is_success()) {
                *counts
                    .entry(SliceLabel::Site(r.launch_site.clone()))
                    .or_default() += 1;
            }
            "Total success launches by site".to_string()
        }
        SiteSelection::Site(s) => {
            for r in table.records().iter().filter(|r| &r.launch_site == s) {
                *counts.entry(SliceLabel::Outcome(r.outcome_class)).or_default() += 1;
            }
            format!("Total launches outcomes for site: {s}")
        }
    };

    PieData {
        title,
        slices: counts
            .into_iter()
            .map(|(label, count)| PieSlice { label, count })
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::{record, scenario_table, LaunchTable};

    fn site(s: &str) -> SliceLabel {
        SliceLabel::Site(s.to_string())
    }

    #[test]
    fn all_sites_counts_successes_per_site() {
        let pie = aggregate(&scenario_table(), &SiteSelection::All);
        assert_eq!(pie.title, "Total success launches by site");
        assert_eq!(pie.slices.len(), 2);
        assert_eq!(pie.count_for(&site("KSC LC-39A")), 1);
        assert_eq!(pie.count_for(&site("CCAFS LC-40")), 1);
    }

    #[test]
    fn one_site_counts_each_outcome() {
        let pie = aggregate(&scenario_table(), &SiteSelection::parse("KSC LC-39A"));
        assert_eq!(pie.title, "Total launches outcomes for site: KSC LC-39A");
        assert_eq!(
            pie.slices,
            vec![
                PieSlice { label: SliceLabel::Outcome(0), count: 1 },
                PieSlice { label: SliceLabel::Outcome(1), count: 1 },
            ]
        );
    }

    #[test]
    fn unknown_site_yields_empty_pie() {
        let pie = aggregate(&scenario_table(), &SiteSelection::parse("VAFB SLC-4E"));
        assert!(pie.slices.is_empty());
        assert!(pie.is_empty());
        assert_eq!(pie.count_for(&SliceLabel::Outcome(1)), 0);
        assert_eq!(pie.count_for(&SliceLabel::Outcome(0)), 0);
    }

    #[test]
    fn per_site_counts_sum_to_site_launches() {
        let table = LaunchTable::from_records(vec![
            record("A", 1.0, 1, "x"),
            record("A", 2.0, 0, "x"),
            record("A", 3.0, 0, "y"),
            record("B", 4.0, 1, "y"),
            record("C", 5.0, 0, "x"),
        ]);
        for s in table.sites() {
            let pie = aggregate(&table, &SiteSelection::Site(s.clone()));
            let expected = table.records().iter().filter(|r| &r.launch_site == s).count();
            assert_eq!(pie.total(), expected, "site {s}");
        }
    }

    #[test]
    fn all_sites_counts_sum_to_successes() {
        let table = LaunchTable::from_records(vec![
            record("A", 1.0, 1, "x"),
            record("A", 2.0, 0, "x"),
            record("B", 4.0, 1, "y"),
            record("B", 4.5, 1, "y"),
            record("C", 5.0, 0, "x"),
        ]);
        let pie = aggregate(&table, &SiteSelection::All);
        assert_eq!(pie.total(), 3);
        // Sites with only failures get no slice.
        assert_eq!(pie.count_for(&site("C")), 0);
        assert!(pie.slices.iter().all(|s| s.label != site("C")));
    }

    #[test]
    fn success_counts_ignore_failures() {
        // Both sites have one success; B's extra failures do not show.
        let table = LaunchTable::from_records(vec![
            record("A", 1.0, 1, "x"),
            record("B", 1.0, 1, "x"),
            record("B", 1.0, 0, "x"),
            record("B", 1.0, 0, "x"),
        ]);
        let pie = aggregate(&table, &SiteSelection::All);
        assert_eq!(pie.count_for(&site("A")), pie.count_for(&site("B")));
    }

    #[test]
    fn fractions_sum_to_one() {
        let pie = aggregate(&scenario_table(), &SiteSelection::All);
        let sum: f64 = pie.slices.iter().map(|s| pie.fraction(s)).sum();
        assert!((sum - 1.0).abs() < 1e-12);
    }
}

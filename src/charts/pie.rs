use std::collections::BTreeMap;

use crate::data::filter::FilteredView;
use crate::data::model::{Outcome, SiteSelection};

/// One pie slice: a category and how many launches fall into it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PieDatum {
    pub label: String,
    pub count: usize,
}

pub fn pie_title(site: &SiteSelection) -> String {
    match site {
        SiteSelection::All => "Total Success Launches for All Sites".to_string(),
        SiteSelection::Site(s) => format!("Total Success and Failure Launches for site {s}"),
    }
}

/// Count launches per pie category.
///
/// * All sites: successful launches only, grouped by launch site.
/// * One site: every launch in the view, grouped by outcome.
///
/// Slices are ordered by count (largest first), then by label. Empty groups
/// do not appear.
pub fn pie_data(view: &FilteredView<'_>, site: &SiteSelection) -> Vec<PieDatum> {
    let mut counts: BTreeMap<String, usize> = BTreeMap::new();

    match site {
        SiteSelection::All => {
            for rec in view.iter().filter(|r| r.outcome.is_success()) {
                *counts.entry(rec.launch_site.clone()).or_default() += 1;
            }
        }
        SiteSelection::Site(_) => {
            let mut by_outcome: BTreeMap<Outcome, usize> = BTreeMap::new();
            for rec in view {
                *by_outcome.entry(rec.outcome).or_default() += 1;
            }
            counts.extend(
                by_outcome
                    .into_iter()
                    .map(|(outcome, n)| (outcome.label().to_string(), n)),
            );
        }
    }

    let mut slices: Vec<PieDatum> = counts
        .into_iter()
        .map(|(label, count)| PieDatum { label, count })
        .collect();
    // BTreeMap already yields labels ascending; the stable sort keeps that for ties.
    slices.sort_by(|a, b| b.count.cmp(&a.count));
    slices
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::filter::filter;
    use crate::data::model::{LaunchRecord, PayloadRange};

    fn records() -> Vec<LaunchRecord> {
        vec![
            LaunchRecord::new("CCAFS", 5000.0, Outcome::Success, "v1.0"),
            LaunchRecord::new("KSC", 3000.0, Outcome::Failure, "v1.1"),
            LaunchRecord::new("CCAFS", 8000.0, Outcome::Success, "v1.1"),
            LaunchRecord::new("KSC", 4000.0, Outcome::Success, "FT"),
            LaunchRecord::new("VAFB", 9000.0, Outcome::Success, "FT"),
        ]
    }

    const FULL: PayloadRange = PayloadRange { low: 0.0, high: 10_000.0 };

    #[test]
    fn all_sites_counts_successes_per_site() {
        let recs = records();
        let view = filter(&recs, &SiteSelection::All, &FULL);
        let slices = pie_data(&view, &SiteSelection::All);
        assert_eq!(
            slices,
            vec![
                PieDatum { label: "CCAFS".into(), count: 2 },
                PieDatum { label: "KSC".into(), count: 1 },
                PieDatum { label: "VAFB".into(), count: 1 },
            ]
        );
        let successes = view.iter().filter(|r| r.outcome.is_success()).count();
        assert_eq!(slices.iter().map(|s| s.count).sum::<usize>(), successes);
    }

    #[test]
    fn single_site_counts_both_outcomes() {
        let recs = records();
        let site = SiteSelection::Site("KSC".into());
        let view = filter(&recs, &site, &FULL);
        let slices = pie_data(&view, &site);
        assert_eq!(slices.len(), 2);
        assert_eq!(slices.iter().map(|s| s.count).sum::<usize>(), view.len());
        assert!(slices.iter().any(|s| s.label == "Failure" && s.count == 1));
    }

    #[test]
    fn single_outcome_site_has_one_slice() {
        let recs = records();
        let site = SiteSelection::Site("CCAFS".into());
        let view = filter(&recs, &site, &FULL);
        assert_eq!(
            pie_data(&view, &site),
            vec![PieDatum { label: "Success".into(), count: 2 }]
        );
    }

    #[test]
    fn empty_view_has_no_slices() {
        let view: FilteredView<'_> = Vec::new();
        assert!(pie_data(&view, &SiteSelection::All).is_empty());
        assert!(pie_data(&view, &SiteSelection::Site("KSC".into())).is_empty());
    }

    #[test]
    fn titles() {
        assert_eq!(pie_title(&SiteSelection::All), "Total Success Launches for All Sites");
        assert_eq!(
            pie_title(&SiteSelection::Site("KSC LC-39A".into())),
            "Total Success and Failure Launches for site KSC LC-39A"
        );
    }
}

use std::path::Path;

use launch_dash::charts::{pie_data, scatter_points};
use launch_dash::data::filter::filter;
use launch_dash::data::loader::load_file;
use launch_dash::data::model::{LaunchDataset, PayloadRange, SiteSelection};

fn shipped() -> LaunchDataset {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("spacex_launch_dash.csv");
    load_file(&path).expect("bundled dataset loads")
}

fn selections(ds: &LaunchDataset) -> Vec<SiteSelection> {
    std::iter::once(SiteSelection::All)
        .chain(ds.sites.iter().cloned().map(SiteSelection::Site))
        .collect()
}

fn ranges() -> Vec<PayloadRange> {
    let mut out = Vec::new();
    for low in (0..=10_000).step_by(2_500) {
        for high in (low..=10_000).step_by(2_500) {
            out.push(PayloadRange {
                low: low as f64,
                high: high as f64,
            });
        }
    }
    out
}

#[test]
fn bundled_dataset_summary() {
    let ds = shipped();
    assert!(!ds.is_empty());
    assert_eq!(ds.sites.len(), 4);
    assert!(ds.min_payload <= ds.max_payload);
    assert!(ds.records.iter().all(|r| r.payload_mass_kg >= 0.0));
}

#[test]
fn observed_bounds_select_everything() {
    let ds = shipped();
    let view = filter(&ds.records, &SiteSelection::All, &ds.payload_bounds());
    assert_eq!(view.len(), ds.len());
}

#[test]
fn filter_respects_predicates_everywhere() {
    let ds = shipped();
    for site in selections(&ds) {
        for range in ranges() {
            let view = filter(&ds.records, &site, &range);
            for rec in &view {
                assert!(range.low <= rec.payload_mass_kg && rec.payload_mass_kg <= range.high);
                assert!(site.matches(&rec.launch_site));
                assert!(ds.records.iter().any(|r| std::ptr::eq(r, *rec)));
            }
            let expected = ds
                .records
                .iter()
                .filter(|r| range.contains(r.payload_mass_kg) && site.matches(&r.launch_site))
                .count();
            assert_eq!(view.len(), expected);
        }
    }
}

#[test]
fn pie_and_scatter_totals() {
    let ds = shipped();
    for site in selections(&ds) {
        for range in ranges() {
            let view = filter(&ds.records, &site, &range);
            let pie_total: usize = pie_data(&view, &site).iter().map(|d| d.count).sum();
            match site {
                SiteSelection::All => {
                    let successes = view.iter().filter(|r| r.outcome.is_success()).count();
                    assert_eq!(pie_total, successes);
                }
                SiteSelection::Site(_) => assert_eq!(pie_total, view.len()),
            }

            let points = scatter_points(&view, &site);
            assert_eq!(points.len(), view.len());
            assert_eq!(points, scatter_points(&view, &site));
            assert_eq!(pie_data(&view, &site), pie_data(&view, &site));
        }
    }
}

use serde::Serialize;

use crate::data::filter::FilteredView;
use crate::data::model::SiteSelection;

/// One scatter marker, copied from a single launch.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScatterPoint {
    pub payload_mass_kg: f64,
    /// Outcome class, 1 for success and 0 for failure.
    pub class: u8,
    pub booster_version_category: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub booster_version: Option<String>,
}

pub fn scatter_title(site: &SiteSelection) -> String {
    match site {
        SiteSelection::All => "Payload vs. Outcome for All Sites".to_string(),
        SiteSelection::Site(s) => format!("Payload vs. Outcome for site {s}"),
    }
}

/// Project every row of the view to a point, keeping view order.
///
/// The site selection only affects the chart title; the view is already
/// restricted to the chosen site.
pub fn scatter_points(view: &FilteredView<'_>, _site: &SiteSelection) -> Vec<ScatterPoint> {
    view.iter()
        .map(|rec| ScatterPoint {
            payload_mass_kg: rec.payload_mass_kg,
            class: rec.outcome.class(),
            booster_version_category: rec.booster_version_category.clone(),
            booster_version: rec.booster_version.clone(),
        })
        .collect()
}

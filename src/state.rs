use serde::Deserialize;

use crate::charts::{pie_data, pie_title, scatter_points, scatter_title};
use crate::color::{outcome_color, ColorMap};
use crate::data::filter::{filter, FilteredView};
use crate::data::model::{LaunchDataset, Outcome, PayloadRange, SiteSelection};
use crate::ui::plot::{pie_figure, scatter_figure, PieFigure, ScatterFigure};

// ---------------------------------------------------------------------------
// Selection state
// ---------------------------------------------------------------------------

/// Control values as they arrive from the page: `?site=..&low=..&high=..`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SelectionQuery {
    pub site: Option<String>,
    pub low: Option<f64>,
    pub high: Option<f64>,
}

/// Both control values, read together before any recomputation.
#[derive(Debug, Clone, PartialEq)]
pub struct Selection {
    pub site: SiteSelection,
    pub payload: PayloadRange,
}

impl Selection {
    /// What the page shows before the user touches a control.
    pub fn initial(dataset: &LaunchDataset) -> Self {
        Selection {
            site: SiteSelection::All,
            payload: dataset.payload_bounds(),
        }
    }

    /// Resolve a query against the dataset. Missing values fall back to the
    /// initial selection; supplied payload ends are normalized to the domain.
    pub fn from_query(query: &SelectionQuery, dataset: &LaunchDataset) -> Self {
        let initial = Self::initial(dataset);
        let site = query
            .site
            .as_deref()
            .map(SiteSelection::parse)
            .unwrap_or(initial.site);
        let payload = match (query.low, query.high) {
            (None, None) => initial.payload,
            (low, high) => PayloadRange::from_user(
                low.unwrap_or(initial.payload.low),
                high.unwrap_or(initial.payload.high),
            ),
        };
        Selection { site, payload }
    }

    pub fn view<'a>(&self, dataset: &'a LaunchDataset) -> FilteredView<'a> {
        filter(&dataset.records, &self.site, &self.payload)
    }

    /// Filter, aggregate, and render the success pie chart.
    pub fn pie_figure(&self, dataset: &LaunchDataset) -> PieFigure {
        let view = self.view(dataset);
        self.log_view("pie", &view);
        let data = pie_data(&view, &self.site);
        let title = pie_title(&self.site);
        match self.site {
            SiteSelection::All => {
                let sites = ColorMap::new(&dataset.sites);
                pie_figure(title, data, |label| sites.color_for(label))
            }
            SiteSelection::Site(_) => pie_figure(title, data, |label| {
                if label == Outcome::Success.label() {
                    outcome_color(Outcome::Success)
                } else {
                    outcome_color(Outcome::Failure)
                }
            }),
        }
    }

    /// Filter, project, and render the payload/outcome scatter chart.
    pub fn scatter_figure(&self, dataset: &LaunchDataset) -> ScatterFigure {
        let view = self.view(dataset);
        self.log_view("scatter", &view);
        let points = scatter_points(&view, &self.site);
        let boosters = ColorMap::new(&dataset.booster_categories);
        scatter_figure(scatter_title(&self.site), points, &boosters)
    }

    fn log_view(&self, chart: &str, view: &FilteredView<'_>) {
        log::debug!(
            "{chart}: site={} payload=[{}, {}] rows={}",
            self.site,
            self.payload.low,
            self.payload.high,
            view.len()
        );
    }
}

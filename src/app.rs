use std::sync::Arc;

use axum::{
    extract::{Query, State},
    response::Html,
    routing::get,
    Json, Router,
};

use crate::config::DashboardConfig;
use crate::data::model::LaunchDataset;
use crate::state::{Selection, SelectionQuery};
use crate::ui::layout::Layout;
use crate::ui::plot::{PieFigure, ScatterFigure};

// ---------------------------------------------------------------------------
// HTTP shell
// ---------------------------------------------------------------------------

/// Shared, read-only server state.
#[derive(Clone)]
struct DashboardState {
    dataset: Arc<LaunchDataset>,
    page: Arc<str>,
}

/// The dashboard: a loaded dataset plus the page built from it.
pub struct DashboardApp {
    dataset: Arc<LaunchDataset>,
    layout: Layout,
}

impl DashboardApp {
    pub fn new(dataset: LaunchDataset) -> Self {
        let layout = Layout::build(&dataset);
        Self {
            dataset: Arc::new(dataset),
            layout,
        }
    }

    /// Routes: the page at `/` and one figure endpoint per chart.
    pub fn router(&self) -> Router {
        let initial = Selection::initial(&self.dataset);
        let page = self.layout.render_page(
            &initial.pie_figure(&self.dataset),
            &initial.scatter_figure(&self.dataset),
        );
        let state = DashboardState {
            dataset: Arc::clone(&self.dataset),
            page: Arc::from(page),
        };

        Router::new()
            .route("/", get(index_handler))
            .route("/api/pie", get(pie_handler))
            .route("/api/scatter", get(scatter_handler))
            .with_state(state)
    }

    /// Bind and serve until the process is stopped.
    pub async fn serve(self, config: &DashboardConfig) -> std::io::Result<()> {
        let addr = config.addr();
        let app = self.router();
        let listener = tokio::net::TcpListener::bind(&addr).await?;
        log::info!("Dashboard ready at http://{addr}");
        axum::serve(listener, app).await
    }
}

async fn index_handler(State(state): State<DashboardState>) -> Html<String> {
    Html(state.page.to_string())
}

async fn pie_handler(
    State(state): State<DashboardState>,
    Query(query): Query<SelectionQuery>,
) -> Json<PieFigure> {
    let selection = Selection::from_query(&query, &state.dataset);
    Json(selection.pie_figure(&state.dataset))
}

async fn scatter_handler(
    State(state): State<DashboardState>,
    Query(query): Query<SelectionQuery>,
) -> Json<ScatterFigure> {
    let selection = Selection::from_query(&query, &state.dataset);
    Json(selection.scatter_figure(&state.dataset))
}

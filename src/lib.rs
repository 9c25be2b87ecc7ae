//! Interactive dashboard of SpaceX launch outcomes against launch site and
//! payload mass, served over HTTP from a static CSV dataset.

pub mod app;
pub mod charts;
pub mod color;
pub mod config;
pub mod data;
pub mod error;
pub mod state;
pub mod ui;

pub use app::DashboardApp;
pub use error::DataLoadError;

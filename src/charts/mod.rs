//! Chart data: aggregation and projection of a filtered view.
//!
//! Both charts are pure functions of the same view and site selection; they
//! never depend on each other.

pub mod pie;
pub mod scatter;

pub use pie::{pie_data, pie_title, PieDatum};
pub use scatter::{scatter_points, scatter_title, ScatterPoint};

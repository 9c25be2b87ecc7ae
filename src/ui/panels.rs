use std::fmt::Write;

use super::escape;
use crate::data::model::{
    LaunchDataset, PayloadRange, SiteOption, ALL_SITES_VALUE, PAYLOAD_DOMAIN_MAX,
    PAYLOAD_DOMAIN_MIN, PAYLOAD_STEP,
};

pub const SITE_DROPDOWN_ID: &str = "site-dropdown";
pub const PAYLOAD_SLIDER_ID: &str = "payload-slider";

// ---------------------------------------------------------------------------
// Site dropdown
// ---------------------------------------------------------------------------

/// Single-select launch site control.
#[derive(Debug, Clone, PartialEq)]
pub struct Dropdown {
    pub id: &'static str,
    pub options: Vec<SiteOption>,
    pub value: String,
    pub placeholder: &'static str,
    pub searchable: bool,
}

impl Dropdown {
    /// "All Sites" followed by every site in the dataset, defaulting to all.
    pub fn site_dropdown(dataset: &LaunchDataset) -> Self {
        Dropdown {
            id: SITE_DROPDOWN_ID,
            options: dataset.site_options(),
            value: ALL_SITES_VALUE.to_string(),
            placeholder: "Select a Launch Site here",
            searchable: true,
        }
    }

    pub fn render_html(&self) -> String {
        let mut html = String::new();
        if self.searchable {
            let _ = write!(
                html,
                r#"<input type="search" id="{id}-search" class="dropdown-search" placeholder="{}" autocomplete="off">"#,
                escape(self.placeholder),
                id = self.id
            );
        }
        let _ = write!(html, r#"<select id="{}" name="site">"#, self.id);
        for opt in &self.options {
            let selected = if opt.value == self.value { " selected" } else { "" };
            let _ = write!(
                html,
                r#"<option value="{}"{selected}>{}</option>"#,
                escape(&opt.value),
                escape(&opt.label)
            );
        }
        html.push_str("</select>");
        html
    }
}

// ---------------------------------------------------------------------------
// Payload range slider
// ---------------------------------------------------------------------------

/// Dual-ended payload control over the fixed display domain.
#[derive(Debug, Clone, PartialEq)]
pub struct RangeSlider {
    pub id: &'static str,
    pub min: f64,
    pub max: f64,
    pub step: f64,
    pub marks: Vec<f64>,
    pub value: PayloadRange,
}

impl RangeSlider {
    /// Domain is always [0, 10000]; only the initial selection comes from the
    /// dataset's observed payload bounds.
    pub fn payload_slider(dataset: &LaunchDataset) -> Self {
        let n_marks = ((PAYLOAD_DOMAIN_MAX - PAYLOAD_DOMAIN_MIN) / PAYLOAD_STEP).round() as usize;
        RangeSlider {
            id: PAYLOAD_SLIDER_ID,
            min: PAYLOAD_DOMAIN_MIN,
            max: PAYLOAD_DOMAIN_MAX,
            step: PAYLOAD_STEP,
            marks: (0..=n_marks)
                .map(|i| PAYLOAD_DOMAIN_MIN + i as f64 * PAYLOAD_STEP)
                .collect(),
            value: dataset.payload_bounds(),
        }
    }

    pub fn render_html(&self) -> String {
        let mut html = String::new();
        // data-low/data-high carry the exact bounds; the range inputs snap their
        // value to the step grid
        let _ = write!(
            html,
            r#"<div id="{}" class="range-slider" data-low="{}" data-high="{}">"#,
            self.id, self.value.low, self.value.high
        );
        for (suffix, name, value) in [("low", "low", self.value.low), ("high", "high", self.value.high)] {
            let _ = write!(
                html,
                r#"<input type="range" id="{id}-{suffix}" name="{name}" min="{}" max="{}" step="{}" value="{value}" list="{id}-marks">"#,
                self.min,
                self.max,
                self.step,
                id = self.id
            );
        }
        let _ = write!(html, r#"<datalist id="{}-marks">"#, self.id);
        for m in &self.marks {
            let _ = write!(html, r#"<option value="{m}" label="{m}"></option>"#);
        }
        html.push_str("</datalist>");
        html.push_str(r#"<div class="marks">"#);
        for m in &self.marks {
            let _ = write!(html, "<span>{m}</span>");
        }
        let _ = write!(
            html,
            r#"</div><div class="range-readout" id="{}-readout">{} – {} kg</div></div>"#,
            self.id, self.value.low, self.value.high
        );
        html
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::{LaunchRecord, Outcome};

    fn dataset() -> LaunchDataset {
        LaunchDataset::from_records(vec![
            LaunchRecord::new("CCAFS LC-40", 525.0, Outcome::Failure, "v1.0"),
            LaunchRecord::new("VAFB SLC-4E", 9600.0, Outcome::Success, "B4"),
        ])
        .unwrap()
    }

    #[test]
    fn dropdown_lists_sites_after_all() {
        let dd = Dropdown::site_dropdown(&dataset());
        assert_eq!(dd.value, "ALL");
        let values: Vec<&str> = dd.options.iter().map(|o| o.value.as_str()).collect();
        assert_eq!(values, vec!["ALL", "CCAFS LC-40", "VAFB SLC-4E"]);

        let html = dd.render_html();
        assert!(html.contains(r#"<option value="ALL" selected>All Sites</option>"#));
        assert!(html.contains(r#"placeholder="Select a Launch Site here""#));
    }

    #[test]
    fn slider_domain_is_fixed() {
        let s = RangeSlider::payload_slider(&dataset());
        assert_eq!((s.min, s.max, s.step), (0.0, 10_000.0, 1_000.0));
        assert_eq!(s.marks.len(), 11);
        assert_eq!(s.marks.first(), Some(&0.0));
        assert_eq!(s.marks.last(), Some(&10_000.0));
        assert_eq!(s.value, PayloadRange { low: 525.0, high: 9600.0 });

        let html = s.render_html();
        assert!(html.contains(r#"id="payload-slider-low""#));
        assert!(html.contains(r#"value="9600""#));
        assert!(html.contains(
            r#"<div id="payload-slider" class="range-slider" data-low="525" data-high="9600">"#
        ));
    }
}

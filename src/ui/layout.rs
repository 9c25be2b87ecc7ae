use super::escape;
use super::panels::{Dropdown, RangeSlider};
use super::plot::{PieFigure, ScatterFigure};
use crate::data::model::LaunchDataset;

pub const PIE_CHART_ID: &str = "success-pie-chart";
pub const SCATTER_CHART_ID: &str = "success-payload-scatter-chart";

// ---------------------------------------------------------------------------
// Static page description
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub struct Heading {
    pub text: &'static str,
    pub color: &'static str,
    pub font_size: u32,
}

/// Placeholder that a figure endpoint fills in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GraphSlot {
    pub id: &'static str,
    pub endpoint: &'static str,
}

/// The whole dashboard page, built once from the loaded dataset.
#[derive(Debug, Clone, PartialEq)]
pub struct Layout {
    pub title: Heading,
    pub dropdown: Dropdown,
    pub slider_label: &'static str,
    pub slider: RangeSlider,
    pub graphs: Vec<GraphSlot>,
}

impl Layout {
    pub fn build(dataset: &LaunchDataset) -> Self {
        Layout {
            title: Heading {
                text: "SpaceX Launch Records Dashboard",
                color: "#503D36",
                font_size: 40,
            },
            dropdown: Dropdown::site_dropdown(dataset),
            slider_label: "Payload range (Kg):",
            slider: RangeSlider::payload_slider(dataset),
            graphs: vec![
                GraphSlot {
                    id: PIE_CHART_ID,
                    endpoint: "/api/pie",
                },
                GraphSlot {
                    id: SCATTER_CHART_ID,
                    endpoint: "/api/scatter",
                },
            ],
        }
    }

    /// Render the page with both charts pre-filled for the initial selection.
    pub fn render_page(&self, pie: &PieFigure, scatter: &ScatterFigure) -> String {
        let graphs: String = self
            .graphs
            .iter()
            .map(|g| {
                let svg = match g.id {
                    PIE_CHART_ID => pie.svg.as_str(),
                    SCATTER_CHART_ID => scatter.svg.as_str(),
                    _ => "",
                };
                format!(
                    r#"<div class="graph" id="{}" data-endpoint="{}">{svg}</div><br>"#,
                    g.id, g.endpoint
                )
            })
            .collect();

        format!(
            r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>{title}</title>
<style>{STYLE}</style>
</head>
<body>
<h1 style="text-align:center; color:{color}; font-size:{size}px">{title}</h1>
<div class="controls">{dropdown}</div>
<br>
<p>{slider_label}</p>
{slider}
<br>
{graphs}
<script>{SCRIPT}</script>
</body>
</html>
"#,
            title = escape(self.title.text),
            color = self.title.color,
            size = self.title.font_size,
            dropdown = self.dropdown.render_html(),
            slider_label = escape(self.slider_label),
            slider = self.slider.render_html(),
        )
    }
}

const STYLE: &str = r#"
body { font-family: sans-serif; margin: 24px auto; max-width: 760px; }
.controls select, .controls input { width: 100%; padding: 6px; margin-bottom: 4px; box-sizing: border-box; }
.range-slider { position: relative; }
.range-slider input[type=range] { width: 100%; }
.range-slider .marks { display: flex; justify-content: space-between; font-size: 11px; color: #6b7280; }
.range-readout { margin-top: 4px; font-size: 13px; color: #374151; }
.graph svg { max-width: 100%; height: auto; }
"#;

// Every control change reads both controls, requests both figures, and
// drops responses that a newer change has superseded. The payload range starts
// from the unsnapped bounds and only follows the inputs once they move.
const SCRIPT: &str = r#"
(function () {
  const site = document.getElementById('site-dropdown');
  const search = document.getElementById('site-dropdown-search');
  const slider = document.getElementById('payload-slider');
  const low = document.getElementById('payload-slider-low');
  const high = document.getElementById('payload-slider-high');
  const readout = document.getElementById('payload-slider-readout');
  const graphs = Array.from(document.querySelectorAll('.graph'));
  const range = { low: Number(slider.dataset.low), high: Number(slider.dataset.high) };
  let seq = 0;

  function moveRange() {
    let a = Number(low.value), b = Number(high.value);
    if (a > b) { [a, b] = [b, a]; }
    range.low = a;
    range.high = b;
    refresh();
  }

  function refresh() {
    const sel = { site: site.value, low: range.low, high: range.high };
    readout.textContent = sel.low + ' – ' + sel.high + ' kg';
    const mine = ++seq;
    const query = new URLSearchParams(sel).toString();
    for (const g of graphs) {
      fetch(g.dataset.endpoint + '?' + query)
        .then(r => r.json())
        .then(fig => { if (mine === seq) { g.innerHTML = fig.svg; } })
        .catch(err => console.error(err));
    }
  }

  if (search) {
    search.addEventListener('input', () => {
      const needle = search.value.toLowerCase();
      for (const opt of site.options) {
        opt.hidden = needle !== '' && !opt.text.toLowerCase().includes(needle);
      }
    });
  }
  site.addEventListener('change', refresh);
  low.addEventListener('input', moveRange);
  high.addEventListener('input', moveRange);
})();
"#;

use std::f64::consts::PI;
use std::fmt::Write;

use serde::Serialize;

use super::escape;
use crate::charts::{PieDatum, ScatterPoint};
use crate::color::ColorMap;
use crate::data::model::{PAYLOAD_DOMAIN_MAX, PAYLOAD_STEP};

const WIDTH: f64 = 680.0;
const HEIGHT: f64 = 380.0;
const TITLE_Y: f64 = 24.0;

// ---------------------------------------------------------------------------
// Figures (what the browser receives)
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PieSlice {
    pub label: String,
    pub count: usize,
    pub color: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PieFigure {
    pub title: String,
    pub slices: Vec<PieSlice>,
    pub svg: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScatterMarker {
    #[serde(flatten)]
    pub point: ScatterPoint,
    pub color: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LegendEntry {
    pub label: String,
    pub color: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScatterFigure {
    pub title: String,
    pub points: Vec<ScatterMarker>,
    pub legend: Vec<LegendEntry>,
    pub svg: String,
}

// ---------------------------------------------------------------------------
// Pie chart
// ---------------------------------------------------------------------------

/// Build the pie figure; `color_of` picks each slice's fill from its label.
pub fn pie_figure<'c>(
    title: String,
    data: Vec<PieDatum>,
    color_of: impl Fn(&str) -> &'c str,
) -> PieFigure {
    let slices: Vec<PieSlice> = data
        .into_iter()
        .map(|d| PieSlice {
            color: color_of(&d.label).to_string(),
            label: d.label,
            count: d.count,
        })
        .collect();
    let svg = render_pie_svg(&title, &slices);
    PieFigure { title, slices, svg }
}

fn render_pie_svg(title: &str, slices: &[PieSlice]) -> String {
    let (cx, cy, r) = (230.0, 205.0, 145.0);
    let total: usize = slices.iter().map(|s| s.count).sum();

    let mut body = String::new();
    if total == 0 {
        no_data(&mut body, cx, cy);
    } else if slices.len() == 1 {
        let s = &slices[0];
        let _ = write!(
            body,
            r##"<circle cx="{cx}" cy="{cy}" r="{r}" fill="{}" stroke="white" stroke-width="1"><title>{}: {}</title></circle>"##,
            s.color,
            escape(&s.label),
            s.count
        );
        let _ = write!(
            body,
            r##"<text x="{cx}" y="{cy}" text-anchor="middle" font-size="13" fill="white">100.0%</text>"##
        );
    } else {
        // Clockwise from twelve o'clock.
        let mut angle = -PI / 2.0;
        for s in slices {
            let sweep = 2.0 * PI * s.count as f64 / total as f64;
            let (x0, y0) = (cx + r * angle.cos(), cy + r * angle.sin());
            let end = angle + sweep;
            let (x1, y1) = (cx + r * end.cos(), cy + r * end.sin());
            let large_arc = u8::from(sweep > PI);
            let _ = write!(
                body,
                r##"<path d="M{cx:.1},{cy:.1} L{x0:.2},{y0:.2} A{r},{r} 0 {large_arc} 1 {x1:.2},{y1:.2} Z" fill="{}" stroke="white" stroke-width="1"><title>{}: {}</title></path>"##,
                s.color,
                escape(&s.label),
                s.count
            );

            let mid = angle + sweep / 2.0;
            let (lx, ly) = (cx + 0.65 * r * mid.cos(), cy + 0.65 * r * mid.sin());
            let pct = 100.0 * s.count as f64 / total as f64;
            let _ = write!(
                body,
                r##"<text x="{lx:.1}" y="{ly:.1}" text-anchor="middle" font-size="12" fill="white">{pct:.1}%</text>"##
            );
            angle = end;
        }
    }

    let legend: Vec<(String, &str)> = slices
        .iter()
        .map(|s| (format!("{} ({})", s.label, s.count), s.color.as_str()))
        .collect();
    legend_svg(&mut body, 420.0, 70.0, &legend);

    svg_document(title, &body)
}

// ---------------------------------------------------------------------------
// Scatter chart
// ---------------------------------------------------------------------------

/// Build the scatter figure, colouring points by booster category.
///
/// The legend lists only categories that appear in `points`, in the order of
/// `colors`.
pub fn scatter_figure(title: String, points: Vec<ScatterPoint>, colors: &ColorMap) -> ScatterFigure {
    let legend: Vec<LegendEntry> = colors
        .legend_entries()
        .into_iter()
        .filter(|(label, _)| points.iter().any(|p| &p.booster_version_category == label))
        .map(|(label, color)| LegendEntry { label, color })
        .collect();
    let points: Vec<ScatterMarker> = points
        .into_iter()
        .map(|point| ScatterMarker {
            color: colors.color_for(&point.booster_version_category).to_string(),
            point,
        })
        .collect();
    let svg = render_scatter_svg(&title, &points, &legend);
    ScatterFigure {
        title,
        points,
        legend,
        svg,
    }
}

/// Gridline positions along the payload axis. Past ten steps only every
/// other step is labelled, but the axis end always is.
fn x_tick_values(x_max: f64) -> Vec<f64> {
    let ticks = (x_max / PAYLOAD_STEP).round() as usize;
    let every = if ticks > 10 { 2 } else { 1 };
    let mut steps: Vec<usize> = (0..=ticks).step_by(every).collect();
    if steps.last() != Some(&ticks) {
        steps.push(ticks);
    }
    steps.into_iter().map(|i| i as f64 * PAYLOAD_STEP).collect()
}

/// Upper end of the x axis: the slider domain, widened to the next step if a
/// point lies beyond it.
fn x_axis_max(points: &[ScatterMarker]) -> f64 {
    let max = points
        .iter()
        .map(|m| m.point.payload_mass_kg)
        .fold(PAYLOAD_DOMAIN_MAX, f64::max);
    (max / PAYLOAD_STEP).ceil() * PAYLOAD_STEP
}

fn render_scatter_svg(title: &str, points: &[ScatterMarker], legend: &[LegendEntry]) -> String {
    let (left, right, top, bottom) = (60.0, WIDTH - 160.0, 50.0, HEIGHT - 55.0);
    let x_max = x_axis_max(points);
    let sx = |x: f64| left + (x / x_max) * (right - left);
    // class 0 and 1 sit a quarter-unit inside the plot area
    let sy = |c: f64| bottom - ((c + 0.25) / 1.5) * (bottom - top);

    let mut body = String::new();
    let _ = write!(
        body,
        r##"<line x1="{left}" y1="{bottom}" x2="{right}" y2="{bottom}" stroke="#9ca3af"/><line x1="{left}" y1="{top}" x2="{left}" y2="{bottom}" stroke="#9ca3af"/>"##
    );

    for v in x_tick_values(x_max) {
        let x = sx(v);
        let _ = write!(
            body,
            r##"<line x1="{x:.1}" y1="{top}" x2="{x:.1}" y2="{bottom}" stroke="#f3f4f6"/><text x="{x:.1}" y="{}" text-anchor="middle" font-size="11" fill="#6b7280">{v}</text>"##,
            bottom + 16.0
        );
    }
    for class in [0u8, 1] {
        let y = sy(f64::from(class));
        let _ = write!(
            body,
            r##"<line x1="{left}" y1="{y:.1}" x2="{right}" y2="{y:.1}" stroke="#e5e7eb" stroke-dasharray="4,2"/><text x="{}" y="{:.1}" text-anchor="end" font-size="11" fill="#6b7280">{class}</text>"##,
            left - 8.0,
            y + 4.0
        );
    }
    let _ = write!(
        body,
        r##"<text x="{:.1}" y="{}" text-anchor="middle" font-size="12" fill="#6b7280">Payload Mass (kg)</text><text x="18" y="{:.1}" text-anchor="middle" font-size="12" fill="#6b7280" transform="rotate(-90, 18, {:.1})">class</text>"##,
        (left + right) / 2.0,
        HEIGHT - 15.0,
        (top + bottom) / 2.0,
        (top + bottom) / 2.0
    );

    if points.is_empty() {
        no_data(&mut body, (left + right) / 2.0, (top + bottom) / 2.0);
    }
    for m in points {
        let p = &m.point;
        let name = p
            .booster_version
            .as_deref()
            .unwrap_or(&p.booster_version_category);
        let _ = write!(
            body,
            r##"<circle cx="{:.1}" cy="{:.1}" r="5" fill="{}" fill-opacity="0.8"><title>{} · {} kg · class {}</title></circle>"##,
            sx(p.payload_mass_kg),
            sy(f64::from(p.class)),
            m.color,
            escape(name),
            p.payload_mass_kg,
            p.class
        );
    }

    let entries: Vec<(String, &str)> = legend
        .iter()
        .map(|e| (e.label.clone(), e.color.as_str()))
        .collect();
    legend_svg(&mut body, right + 20.0, top, &entries);

    svg_document(title, &body)
}

// ---------------------------------------------------------------------------
// Shared SVG pieces
// ---------------------------------------------------------------------------

fn svg_document(title: &str, body: &str) -> String {
    format!(
        r##"<svg xmlns="http://www.w3.org/2000/svg" width="{WIDTH}" height="{HEIGHT}" viewBox="0 0 {WIDTH} {HEIGHT}" style="background:white; border-radius:8px" font-family="sans-serif">
  <text x="{}" y="{TITLE_Y}" text-anchor="middle" font-size="16" font-weight="600" fill="#374151">{}</text>
  {body}
</svg>"##,
        WIDTH / 2.0,
        escape(title)
    )
}

fn legend_svg(out: &mut String, x: f64, y: f64, entries: &[(String, &str)]) {
    for (i, (label, color)) in entries.iter().enumerate() {
        let row = y + i as f64 * 20.0;
        let _ = write!(
            out,
            r##"<rect x="{x}" y="{row}" width="12" height="12" fill="{color}"/><text x="{}" y="{}" font-size="12" fill="#374151">{}</text>"##,
            x + 18.0,
            row + 10.0,
            escape(label)
        );
    }
}

fn no_data(out: &mut String, x: f64, y: f64) {
    let _ = write!(
        out,
        r##"<text x="{x}" y="{y}" text-anchor="middle" font-size="14" fill="#9ca3af">No data</text>"##
    );
}

// src/web/charts.rs
//! Inline SVG renderings of dashboard datasets.

use std::f64::consts::PI;

use crate::screens::dashboard::Dataset;
use crate::web::html::escape;

const WIDTH: f64 = 560.0;
const HEIGHT: f64 = 300.0;
const PAD: f64 = 40.0;

const PIE_COLORS: &[&str] = &["#4bc0c0", "#36a2eb", "#ffce56", "#ff6384", "#ff9f40", "#9966ff"];

fn empty_chart() -> String {
    r#"<p class="empty">No data available</p>"#.to_string()
}

fn legend(entries: &[(String, &str)]) -> String {
    let items: String = entries
        .iter()
        .map(|(label, color)| {
            format!(
                r#"<span class="chip outlined"><svg width="10" height="10"><rect width="10" height="10" fill="{}"/></svg> {}</span>"#,
                color,
                escape(label)
            )
        })
        .collect();
    format!(r#"<div class="legend">{}</div>"#, items)
}

/// Pie over the first series; slices follow label order.
pub fn pie(dataset: &Dataset) -> String {
    let Some(series) = dataset.series.first() else {
        return empty_chart();
    };
    let total: u64 = series.values.iter().sum();
    if total == 0 {
        return empty_chart();
    }

    let (cx, cy, r) = (HEIGHT / 2.0, HEIGHT / 2.0, HEIGHT / 2.0 - 10.0);
    let mut angle = -PI / 2.0;
    let mut slices = String::new();
    let mut entries = Vec::new();

    for (i, (label, value)) in dataset.labels.iter().zip(&series.values).enumerate() {
        let color = PIE_COLORS[i % PIE_COLORS.len()];
        entries.push((format!("{}: {}", label, value), color));
        if *value == 0 {
            continue;
        }
        let share = *value as f64 / total as f64;
        let title = format!("<title>{}: {}</title>", escape(label), value);
        if share >= 1.0 {
            slices.push_str(&format!(
                r#"<circle cx="{cx}" cy="{cy}" r="{r}" fill="{color}">{title}</circle>"#
            ));
            continue;
        }
        let sweep = share * 2.0 * PI;
        let (x1, y1) = (cx + r * angle.cos(), cy + r * angle.sin());
        angle += sweep;
        let (x2, y2) = (cx + r * angle.cos(), cy + r * angle.sin());
        let large = if sweep > PI { 1 } else { 0 };
        slices.push_str(&format!(
            r##"<path d="M{cx:.1},{cy:.1} L{x1:.1},{y1:.1} A{r:.1},{r:.1} 0 {large} 1 {x2:.1},{y2:.1} Z" fill="{color}" stroke="#fff">{title}</path>"##
        ));
    }

    format!(
        r#"<svg class="chart pie" viewBox="0 0 {h} {h}" width="{h}" height="{h}" role="img" aria-label="{label}">{slices}</svg>{legend}"#,
        h = HEIGHT,
        label = escape(&dataset.title),
        slices = slices,
        legend = legend(&entries),
    )
}

fn axis(max: u64) -> String {
    let base = HEIGHT - PAD;
    format!(
        r##"<line x1="{PAD}" y1="{PAD}" x2="{PAD}" y2="{base}" stroke="#9e9e9e"/><line x1="{PAD}" y1="{base}" x2="{right}" y2="{base}" stroke="#9e9e9e"/><text x="{tx}" y="{ty}" font-size="11" text-anchor="end">{max}</text><text x="{tx}" y="{base}" font-size="11" text-anchor="end">0</text>"##,
        right = WIDTH - 10.0,
        tx = PAD - 4.0,
        ty = PAD + 4.0,
    )
}

fn scale(value: u64, max: u64) -> f64 {
    let plot = HEIGHT - 2.0 * PAD;
    if max == 0 {
        0.0
    } else {
        value as f64 / max as f64 * plot
    }
}

/// Vertical bars over the first series, y axis from zero.
pub fn bar(dataset: &Dataset) -> String {
    let Some(series) = dataset.series.first() else {
        return empty_chart();
    };
    if series.values.is_empty() {
        return empty_chart();
    }

    let max = series.values.iter().copied().max().unwrap_or(0);
    let slot = (WIDTH - PAD - 10.0) / series.values.len() as f64;
    let base = HEIGHT - PAD;
    let mut bars = String::new();

    for (i, (label, value)) in dataset.labels.iter().zip(&series.values).enumerate() {
        let height = scale(*value, max);
        let x = PAD + i as f64 * slot + slot * 0.15;
        bars.push_str(&format!(
            r#"<rect x="{x:.1}" y="{y:.1}" width="{w:.1}" height="{height:.1}" fill="{color}"><title>{label}: {value}</title></rect><text x="{lx:.1}" y="{ly:.1}" font-size="11" text-anchor="middle">{label}</text>"#,
            y = base - height,
            w = slot * 0.7,
            color = series.color,
            label = escape(label),
            lx = x + slot * 0.35,
            ly = base + 16.0,
        ));
    }

    format!(
        r#"<svg class="chart bar" viewBox="0 0 {WIDTH} {HEIGHT}" width="100%" height="{HEIGHT}" role="img" aria-label="{label}">{axis}{bars}</svg>{legend}"#,
        label = escape(&dataset.title),
        axis = axis(max),
        legend = legend(&[(series.label.clone(), series.color)]),
    )
}

/// One polyline per series over shared x labels, y axis from zero.
pub fn line(dataset: &Dataset) -> String {
    if dataset.labels.is_empty() || dataset.series.is_empty() {
        return empty_chart();
    }

    let max = dataset
        .series
        .iter()
        .flat_map(|s| s.values.iter().copied())
        .max()
        .unwrap_or(0);
    let points_count = dataset.labels.len();
    let step = if points_count > 1 {
        (WIDTH - PAD - 20.0) / (points_count - 1) as f64
    } else {
        0.0
    };
    let base = HEIGHT - PAD;
    let x_at = |i: usize| PAD + 10.0 + i as f64 * step;

    let mut lines = String::new();
    for series in &dataset.series {
        let points: Vec<String> = series
            .values
            .iter()
            .enumerate()
            .map(|(i, v)| format!("{:.1},{:.1}", x_at(i), base - scale(*v, max)))
            .collect();
        lines.push_str(&format!(
            r#"<polyline fill="none" stroke="{}" stroke-width="2" points="{}"><title>{}</title></polyline>"#,
            series.color,
            points.join(" "),
            escape(&series.label)
        ));
    }

    let ticks: String = dataset
        .labels
        .iter()
        .enumerate()
        .map(|(i, label)| {
            format!(
                r#"<text x="{:.1}" y="{:.1}" font-size="11" text-anchor="middle">{}</text>"#,
                x_at(i),
                base + 16.0,
                escape(label)
            )
        })
        .collect();

    let entries: Vec<(String, &str)> = dataset
        .series
        .iter()
        .map(|s| (s.label.clone(), s.color))
        .collect();

    format!(
        r#"<svg class="chart line" viewBox="0 0 {WIDTH} {HEIGHT}" width="100%" height="{HEIGHT}" role="img" aria-label="{label}">{axis}{lines}{ticks}</svg>{legend}"#,
        label = escape(&dataset.title),
        axis = axis(max),
        legend = legend(&entries),
    )
}

// ============================================================
// SVG Scatter Writer
// ============================================================
// Renders projected 2D points as a labelled scatter plot and
// writes it as an SVG file.
//
// SVG is generated directly as text: a scatter of circles and
// label texts needs no plotting library, and a text format keeps
// the artifact inspectable and diffable. Point coordinates are
// mapped from data space onto a fixed square canvas with a
// margin; labels sit slightly offset from their point the way
// the usual annotate() convention places them.

use anyhow::{Context, Result};
use std::path::Path;

const CANVAS: f32 = 900.0;
const MARGIN: f32 = 50.0;
const POINT_RADIUS: f32 = 3.0;
const FONT_SIZE: u32 = 10;

/// Render points and their labels into an SVG document string.
/// `points` and `labels` are matched by position.
pub fn render_scatter(points: &[(f32, f32)], labels: &[String], title: &str) -> String {
    // ── Data bounds, padded against zero span ─────────────────────────────────
    let (mut min_x, mut max_x) = (f32::INFINITY, f32::NEG_INFINITY);
    let (mut min_y, mut max_y) = (f32::INFINITY, f32::NEG_INFINITY);
    for &(x, y) in points {
        min_x = min_x.min(x);
        max_x = max_x.max(x);
        min_y = min_y.min(y);
        max_y = max_y.max(y);
    }
    let span_x = (max_x - min_x).max(1e-6);
    let span_y = (max_y - min_y).max(1e-6);

    let usable = CANVAS - 2.0 * MARGIN;
    let to_canvas = |x: f32, y: f32| -> (f32, f32) {
        let cx = MARGIN + (x - min_x) / span_x * usable;
        // SVG's y axis points down; flip so larger y plots higher
        let cy = CANVAS - MARGIN - (y - min_y) / span_y * usable;
        (cx, cy)
    };

    // ── Document ──────────────────────────────────────────────────────────────
    let mut svg = String::new();
    svg.push_str(&format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{c}\" height=\"{c}\" \
         viewBox=\"0 0 {c} {c}\">\n",
        c = CANVAS,
    ));
    svg.push_str(&format!(
        "  <rect width=\"{c}\" height=\"{c}\" fill=\"white\"/>\n",
        c = CANVAS,
    ));
    svg.push_str(&format!(
        "  <text x=\"{}\" y=\"{}\" font-size=\"16\" font-family=\"sans-serif\">{}</text>\n",
        MARGIN,
        MARGIN / 2.0,
        escape_xml(title),
    ));

    for (i, &(x, y)) in points.iter().enumerate() {
        let (cx, cy) = to_canvas(x, y);
        svg.push_str(&format!(
            "  <circle cx=\"{cx:.1}\" cy=\"{cy:.1}\" r=\"{POINT_RADIUS}\" fill=\"steelblue\"/>\n",
        ));
        if let Some(label) = labels.get(i) {
            svg.push_str(&format!(
                "  <text x=\"{:.1}\" y=\"{:.1}\" font-size=\"{FONT_SIZE}\" \
                 font-family=\"sans-serif\">{}</text>\n",
                cx + 5.0,
                cy - 3.0,
                escape_xml(label),
            ));
        }
    }

    svg.push_str("</svg>\n");
    svg
}

/// Render and write the scatter to disk.
pub fn write_scatter(
    path: &Path,
    points: &[(f32, f32)],
    labels: &[String],
    title: &str,
) -> Result<()> {
    let svg = render_scatter(points, labels, title);
    std::fs::write(path, svg)
        .with_context(|| format!("Cannot write scatter plot to '{}'", path.display()))?;
    Ok(())
}

/// Escape the XML special characters that can appear in tokens.
fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_renders_points_with_labels() {
        let points = vec![(0.0, 0.0), (1.0, 1.0)];
        let labels = vec!["salt".to_string(), "water".to_string()];
        let svg = render_scatter(&points, &labels, "ingredients");

        assert!(svg.starts_with("<svg"));
        assert!(svg.trim_end().ends_with("</svg>"));
        assert_eq!(svg.matches("<circle").count(), 2);
        assert!(svg.contains(">salt</text>"));
        assert!(svg.contains(">water</text>"));
        assert!(svg.contains(">ingredients</text>"));
    }

    #[test]
    fn test_labels_are_xml_escaped() {
        let points = vec![(0.0, 0.0)];
        let labels = vec!["salt & pepper <mix>".to_string()];
        let svg = render_scatter(&points, &labels, "t");
        assert!(svg.contains("salt &amp; pepper &lt;mix&gt;"));
        assert!(!svg.contains("<mix>"));
    }

    #[test]
    fn test_single_point_does_not_blow_up_on_zero_span() {
        let points = vec![(2.5, 2.5)];
        let labels = vec!["only".to_string()];
        let svg = render_scatter(&points, &labels, "t");
        assert!(svg.contains("<circle"));
        assert!(!svg.contains("NaN"));
        assert!(!svg.contains("inf"));
    }
}

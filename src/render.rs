use crate::types::{Circle, Mesh, Point};
use petgraph::visit::EdgeRef;
use std::fmt::Write;

/// Canvas side in pixels. The viewer the plot replaces rendered at
/// 400 DPI on a 4 inch figure.
const CANVAS: f64 = 1600.0;
/// Fraction of the world span kept free around the drawing.
const MARGIN: f64 = 0.05;

const EDGE_WIDTH: f64 = 0.7;
const CIRCLE_WIDTH: f64 = 0.6;
const POINT_RADIUS: f64 = 2.0;

/// Rendering switches beyond the mesh itself.
#[derive(Default, Clone, Copy, Debug)]
pub struct RenderOptions {
    /// Annotate every point with its index.
    pub labels: bool,
}

/// Maps world coordinates onto the square canvas, with the same scale on
/// both axes and the y axis flipped for SVG.
struct Viewport {
    lo: f64,
    scale: f64,
}

impl Viewport {
    fn fit(points: impl Iterator<Item = Point>) -> Viewport {
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        for p in points {
            min = min.min(p.x).min(p.y);
            max = max.max(p.x).max(p.y);
        }
        // no points, or all coincident. Any finite span renders an empty
        // or single-dot image just fine.
        let (min, max) = if min > max {
            (-0.5, 0.5)
        } else if min == max {
            (min - 0.5, min + 0.5)
        } else {
            (min, max)
        };

        let pad = (max - min) * MARGIN;
        Viewport {
            lo: min - pad,
            scale: CANVAS / ((max - min) * (1.0 + 2.0 * MARGIN)),
        }
    }

    fn x(&self, x: f64) -> f64 {
        (x - self.lo) * self.scale
    }

    fn y(&self, y: f64) -> f64 {
        CANVAS - (y - self.lo) * self.scale
    }

    fn len(&self, r: f64) -> f64 {
        r * self.scale
    }
}

/// Renders the mesh as an SVG scatter-and-line plot: edges as thin dark
/// lines, points as small black dots, and every circle in `circles` as an
/// unfilled gray outline. Circles do not influence the viewport; only the
/// points do, matching the usual autoscaling of scatter plots.
pub fn render_svg(mesh: &Mesh, circles: &[Circle], options: &RenderOptions) -> String {
    let view = Viewport::fit(mesh.node_weights().cloned());
    let mut output = String::new();

    writeln!(
        output,
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{CANVAS}\" height=\"{CANVAS}\" viewBox=\"0 0 {CANVAS} {CANVAS}\">"
    )
    .unwrap();
    writeln!(output, "  <rect width=\"100%\" height=\"100%\" fill=\"#ffffff\"/>").unwrap();

    for circle in circles {
        writeln!(
            output,
            "  <circle cx=\"{:.2}\" cy=\"{:.2}\" r=\"{:.2}\" fill=\"none\" stroke=\"#808080\" stroke-width=\"{CIRCLE_WIDTH}\"/>",
            view.x(circle.center.x),
            view.y(circle.center.y),
            view.len(circle.radius),
        )
        .unwrap();
    }

    for e in mesh.edge_references() {
        let a = mesh[e.source()];
        let b = mesh[e.target()];
        writeln!(
            output,
            "  <line x1=\"{:.2}\" y1=\"{:.2}\" x2=\"{:.2}\" y2=\"{:.2}\" stroke=\"#333333\" stroke-width=\"{EDGE_WIDTH}\"/>",
            view.x(a.x),
            view.y(a.y),
            view.x(b.x),
            view.y(b.y),
        )
        .unwrap();
    }

    for i in mesh.node_indices() {
        let p = mesh[i];
        writeln!(
            output,
            "  <circle cx=\"{:.2}\" cy=\"{:.2}\" r=\"{POINT_RADIUS}\" fill=\"#000000\"/>",
            view.x(p.x),
            view.y(p.y),
        )
        .unwrap();
        if options.labels {
            writeln!(
                output,
                "  <text x=\"{:.2}\" y=\"{:.2}\" font-size=\"12\" font-family=\"Helvetica\">{}</text>",
                view.x(p.x) + 2.0 * POINT_RADIUS,
                view.y(p.y) - 2.0 * POINT_RADIUS,
                i.index(),
            )
            .unwrap();
        }
    }

    writeln!(output, "</svg>").unwrap();
    output
}

//! Node-link diagram drawn with plotters (SVG output)
//!
//! Positions come from the spring layout in `[-1, 1]²` and are mapped onto a
//! square canvas. Nodes are light-blue circles labelled with their name.

use plotters::drawing::DrawingAreaErrorKind;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use plotters_svg::SVGBackend;
use ppin_network::{InteractionGraph, Layout, Point};
use std::collections::HashMap;
use std::path::Path;

const CANVAS: u32 = 1000;
const MARGIN: f64 = 60.0;
const NODE_RADIUS: i32 = 18;
const NODE_FILL: RGBColor = RGBColor(173, 216, 230);
const EDGE_STROKE: RGBColor = RGBColor(128, 128, 128);

/// Error raised by the SVG backend
pub type DiagramError = DrawingAreaErrorKind<std::io::Error>;

/// Draw the graph at the given positions into an SVG file
pub fn write_svg(
    graph: &InteractionGraph,
    layout: &Layout,
    title: &str,
    path: &Path,
) -> Result<(), DiagramError> {
    let positions: HashMap<&str, (i32, i32)> = layout
        .nodes
        .iter()
        .map(|(name, point)| (name.as_str(), to_canvas(*point)))
        .collect();

    let root = SVGBackend::new(path, (CANVAS, CANVAS)).into_drawing_area();
    root.fill(&WHITE)?;

    root.draw(&Text::new(
        title.to_string(),
        (20, 20),
        ("sans-serif", 20).into_font().color(&BLACK),
    ))?;

    for (a, b) in graph.edges() {
        let (Some(&from), Some(&to)) = (positions.get(a), positions.get(b)) else {
            continue;
        };
        if a == b {
            // Self-interaction: a ring sitting on top of the node
            root.draw(&Circle::new(
                (from.0, from.1 - NODE_RADIUS),
                NODE_RADIUS * 4 / 5,
                ShapeStyle::from(&EDGE_STROKE).stroke_width(1),
            ))?;
        } else {
            root.draw(&PathElement::new(
                vec![from, to],
                ShapeStyle::from(&EDGE_STROKE).stroke_width(1),
            ))?;
        }
    }

    let label = ("sans-serif", 12)
        .into_font()
        .color(&BLACK)
        .pos(Pos::new(HPos::Center, VPos::Center));
    for (name, _) in &layout.nodes {
        let Some(&center) = positions.get(name.as_str()) else {
            continue;
        };
        root.draw(&Circle::new(
            center,
            NODE_RADIUS,
            ShapeStyle::from(&NODE_FILL).filled(),
        ))?;
        root.draw(&Text::new(name.clone(), center, label.clone()))?;
    }

    root.present()?;
    Ok(())
}

/// Layout coordinates to canvas pixels; SVG y grows downward
fn to_canvas(point: Point) -> (i32, i32) {
    let canvas = f64::from(CANVAS);
    let half = (canvas - 2.0 * MARGIN) / 2.0;
    let center = canvas / 2.0;
    (
        (center + point.x * half).round() as i32,
        (center - point.y * half).round() as i32,
    )
}

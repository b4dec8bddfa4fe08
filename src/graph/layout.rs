use std::f64::consts::TAU;

use crate::graph::Node;

pub const LAYOUT_CENTER_X: f64 = 300.0;
pub const LAYOUT_CENTER_Y: f64 = 200.0;
pub const BASE_RADIUS: f64 = 100.0;
pub const RADIUS_STEP: f64 = 5.0;
pub const MAX_RADIUS: f64 = 150.0;

/// Radius of the layout circle for `node_count` nodes: `min(150, 100 + 5 * N)`.
pub fn circle_radius(node_count: usize) -> f64 {
    (BASE_RADIUS + RADIUS_STEP * node_count as f64).min(MAX_RADIUS)
}

/// Places `nodes` evenly around a circle centred on the canvas.
///
/// Node `i` of `N` sits at angle `2 * pi * i / N`. A lone node is placed at
/// the centre. Ids, labels and order are preserved.
pub fn finalize_layout(nodes: &[Node]) -> Vec<Node> {
    let count = nodes.len();
    let radius = circle_radius(count);

    nodes
        .iter()
        .enumerate()
        .map(|(index, node)| {
            let (x, y) = if count == 1 {
                (LAYOUT_CENTER_X, LAYOUT_CENTER_Y)
            } else {
                let angle = index as f64 / count as f64 * TAU;
                (
                    LAYOUT_CENTER_X + radius * angle.cos(),
                    LAYOUT_CENTER_Y + radius * angle.sin(),
                )
            };
            Node {
                x,
                y,
                ..node.clone()
            }
        })
        .collect()
}

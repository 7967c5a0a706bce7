use std::f64::consts::PI;
use std::fmt;

use serde::Serialize;

use super::scale::rescale;

/// Pull of each control point along its tangent, as a fraction of the
/// tangent length.
pub const SMOOTHING: f64 = 0.15;
/// Strength of the angle flattening that damps overshoot around local
/// minima and maxima.
pub const FLATTENING: f64 = 0.5;

/// A drawing-space position. Plain value pair, no domain units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub enum PathCommand {
    MoveTo(Point),
    CurveTo { c1: Point, c2: Point, to: Point },
    LineTo(Point),
    Close,
}

/// An ordered command sequence describing one renderable line or filled
/// shape. `Display` emits the `M`/`C`/`L`/`Z` vector-path mini-language so
/// the output can be handed straight to a path-drawing primitive.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PathDescription {
    commands: Vec<PathCommand>,
}

impl PathDescription {
    #[must_use]
    pub fn commands(&self) -> &[PathCommand] {
        &self.commands
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub fn push(&mut self, command: PathCommand) {
        self.commands.push(command);
    }
}

impl fmt::Display for PathDescription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (idx, command) in self.commands.iter().enumerate() {
            if idx > 0 {
                write!(f, " ")?;
            }
            match command {
                PathCommand::MoveTo(p) => write!(f, "M{}", coords(*p))?,
                PathCommand::CurveTo { c1, c2, to } => {
                    write!(f, "C{} {} {}", coords(*c1), coords(*c2), coords(*to))?;
                }
                PathCommand::LineTo(p) => write!(f, "L{}", coords(*p))?,
                PathCommand::Close => write!(f, "Z")?,
            }
        }
        Ok(())
    }
}

fn coords(p: Point) -> String {
    format!("{:.2} {:.2}", p.x, p.y)
}

/// Builds a smooth interpolating path through `points`: one move-to, then a
/// cubic segment per remaining point. Control points follow the tangent
/// between each anchor's neighbors, scaled by [`SMOOTHING`] and flattened
/// near steep direction changes. The rule only looks two points back and
/// one ahead, so a segment's shape is independent of how long the whole
/// series is.
#[must_use]
pub fn build_curve(points: &[Point]) -> PathDescription {
    let mut path = PathDescription::default();
    if points.len() < 2 {
        return path;
    }

    path.push(PathCommand::MoveTo(points[0]));
    for i in 1..points.len() {
        let two_back = if i >= 2 { points[i - 2] } else { points[i - 1] };
        let ahead = points.get(i + 1).copied().unwrap_or(points[i]);

        let c1 = control_point(points[i - 1], two_back, points[i], false);
        let c2 = control_point(points[i], points[i - 1], ahead, true);
        path.push(PathCommand::CurveTo {
            c1,
            c2,
            to: points[i],
        });
    }
    path
}

/// Places a control point relative to `anchor` on the tangent from `from`
/// to `to`. The tangent angle is damped by the flattening term before the
/// optional half-turn for exit control points.
fn control_point(anchor: Point, from: Point, to: Point, reverse: bool) -> Point {
    let dx = to.x - from.x;
    let dy = to.y - from.y;
    let length = dx.hypot(dy) * SMOOTHING;

    let tangent = dy.atan2(dx);
    let flatten = rescale(tangent.cos() * FLATTENING, 0.0, 1.0, 1.0, 0.0);
    let mut angle = tangent * flatten;
    if reverse {
        angle += PI;
    }

    Point::new(anchor.x + angle.cos() * length, anchor.y + angle.sin() * length)
}

#[cfg(test)]
mod tests;

use super::curve::Point;

/// A contiguous run of points on one side of the threshold line. Chunks are
/// open polylines here; the assembler closes them against the threshold
/// before rendering.
pub type RegionChunk = Vec<Point>;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ThresholdRegions {
    pub above: Vec<RegionChunk>,
    pub below: Vec<RegionChunk>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Side {
    Above,
    Below,
}

/// Drawing space has a top-left origin, so "above the threshold" is the
/// smaller-or-equal y coordinate.
fn side_of(point: Point, threshold_y: f64) -> Side {
    if point.y <= threshold_y {
        Side::Above
    } else {
        Side::Below
    }
}

/// Partitions `points` into contiguous above/below runs, inserting the
/// exact crossing point on both sides of every threshold crossing so each
/// chunk's boundary touches the line. Chunk order follows walk order; a
/// single-point chunk is a valid artifact of a crossing landing exactly on
/// a sample.
#[must_use]
pub fn split_by_threshold(points: &[Point], threshold_y: f64) -> ThresholdRegions {
    let mut regions = ThresholdRegions::default();
    let Some(&first) = points.first() else {
        return regions;
    };

    let mut run: RegionChunk = vec![first];
    let mut side = side_of(first, threshold_y);

    for pair in points.windows(2) {
        let (previous, current) = (pair[0], pair[1]);
        let current_side = side_of(current, threshold_y);

        if current_side == side {
            run.push(current);
            continue;
        }

        let crossing = crossing_point(previous, current, threshold_y);
        run.push(crossing);
        flush(&mut regions, side, std::mem::take(&mut run));

        run = vec![crossing, current];
        side = current_side;
    }

    flush(&mut regions, side, run);
    regions
}

fn flush(regions: &mut ThresholdRegions, side: Side, run: RegionChunk) {
    if run.is_empty() {
        return;
    }
    match side {
        Side::Above => regions.above.push(run),
        Side::Below => regions.below.push(run),
    }
}

/// Linear interpolation of the segment's intersection with the threshold
/// line. Only called when the endpoints straddle the line, so `y2 - y1` is
/// never zero.
fn crossing_point(a: Point, b: Point, threshold_y: f64) -> Point {
    let t = (threshold_y - a.y) / (b.y - a.y);
    Point::new(a.x + t * (b.x - a.x), threshold_y)
}

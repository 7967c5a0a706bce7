use super::*;

fn pts(raw: &[(f64, f64)]) -> Vec<Point> {
    raw.iter().map(|&(x, y)| Point::new(x, y)).collect()
}

#[test]
fn fewer_than_two_points_is_a_no_op_path() {
    assert!(build_curve(&[]).is_empty());
    assert!(build_curve(&[Point::new(1.0, 2.0)]).is_empty());
}

#[test]
fn one_move_then_one_curve_per_remaining_point() {
    let points = pts(&[(0.0, 10.0), (10.0, 4.0), (20.0, 12.0), (30.0, 2.0)]);
    let path = build_curve(&points);

    let commands = path.commands();
    assert_eq!(commands.len(), points.len());
    assert!(matches!(commands[0], PathCommand::MoveTo(p) if p == points[0]));
    for (command, point) in commands[1..].iter().zip(&points[1..]) {
        match command {
            PathCommand::CurveTo { to, .. } => assert_eq!(to, point),
            other => panic!("expected curve segment, got {other:?}"),
        }
    }
}

#[test]
fn horizontal_run_keeps_control_points_on_the_line() {
    // Flat tangents have angle zero; control points stay at the shared y.
    let points = pts(&[(0.0, 5.0), (10.0, 5.0), (20.0, 5.0)]);
    let path = build_curve(&points);

    for command in path.commands() {
        if let PathCommand::CurveTo { c1, c2, .. } = command {
            assert!((c1.y - 5.0).abs() < 1e-9);
            assert!((c2.y - 5.0).abs() < 1e-9);
        }
    }
}

#[test]
fn segment_shape_ignores_points_outside_its_neighborhood() {
    let long = pts(&[
        (0.0, 8.0),
        (10.0, 3.0),
        (20.0, 11.0),
        (30.0, 6.0),
        (40.0, 14.0),
        (50.0, 1.0),
    ]);
    // The segment ending at index 3 only sees indices 1..=4.
    let window = &long[1..=4];

    let full = build_curve(&long);
    let local = build_curve(window);
    assert_eq!(full.commands()[3], local.commands()[2]);
}

#[test]
fn serializes_with_single_letter_commands() {
    let mut path = build_curve(&pts(&[(0.0, 0.0), (10.0, 10.0)]));
    path.push(PathCommand::LineTo(Point::new(10.0, 20.0)));
    path.push(PathCommand::Close);

    let text = path.to_string();
    assert!(text.starts_with("M0.00 0.00 C"));
    assert!(text.contains("L10.00 20.00"));
    assert!(text.ends_with('Z'));
    assert_eq!(text.matches('C').count(), 1);
}

#[test]
fn duplicate_endpoint_tangents_degenerate_to_the_anchor() {
    // First segment: the two-back fallback makes the entry tangent the
    // previous→current line itself, never NaN.
    let points = pts(&[(0.0, 0.0), (10.0, 5.0)]);
    let path = build_curve(&points);
    if let PathCommand::CurveTo { c1, c2, to } = path.commands()[1] {
        assert!(c1.x.is_finite() && c1.y.is_finite());
        assert!(c2.x.is_finite() && c2.y.is_finite());
        assert_eq!(to, points[1]);
    } else {
        panic!("expected curve segment");
    }
}

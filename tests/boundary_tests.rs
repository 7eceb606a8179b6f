// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Huang Rui <vowstar@gmail.com>

//! Test cases for the rectilinear boundary editor
//!
//! Tests cover:
//! - Untouched rectangles
//! - Corner and edge notches
//! - Vertex ordering, winding and duplicate cleanup
//! - Invalid cuts and degenerate rectangles

use def_diearea::boundary::classify::classify_cut;
use def_diearea::boundary::{
    build, build_from_pairs, cleanup, format_points, is_clockwise, signed_area2,
};
use def_diearea::{BoundaryError, CutBucket, CutBuckets, Point, Rect};

fn p(x: i64, y: i64) -> Point {
    Point::new(x, y)
}

fn die() -> Rect {
    Rect::from_size(1000, 1000).unwrap()
}

fn assert_well_formed(points: &[Point]) {
    assert!(points.len() >= 3, "too few vertices: {points:?}");
    assert_ne!(points.first(), points.last(), "closing duplicate left");
    for pair in points.windows(2) {
        assert_ne!(pair[0], pair[1], "consecutive duplicate in {points:?}");
    }
    let n = points.len();
    for i in 0..n {
        let a = points[i];
        let b = points[(i + 1) % n];
        assert!(a.x == b.x || a.y == b.y, "diagonal edge {a} -> {b}");
    }
    assert!(is_clockwise(points), "not clockwise: {points:?}");
}

#[test]
fn test_empty_cuts_return_corners() {
    for (w, h) in [(1, 1), (1000, 1000), (40280, 91000)] {
        let rect = Rect::from_size(w, h).unwrap();
        let result = build(&rect, &CutBuckets::new()).unwrap();
        assert_eq!(result, vec![p(0, 0), p(0, h), p(w, h), p(w, 0)]);
    }
}

#[test]
fn test_bottom_left_corner_scenario() {
    let result = build_from_pairs(&die(), &[(p(0, 0), p(100, 100))]).unwrap();
    assert_eq!(
        result,
        vec![
            p(100, 0),
            p(100, 100),
            p(0, 100),
            p(0, 1000),
            p(1000, 1000),
            p(1000, 0)
        ]
    );
    assert_well_formed(&result);
}

#[test]
fn test_left_edge_scenario() {
    let result = build_from_pairs(&die(), &[(p(0, 400), p(200, 600))]).unwrap();
    assert_eq!(
        result,
        vec![
            p(0, 0),
            p(0, 400),
            p(200, 400),
            p(200, 600),
            p(0, 600),
            p(0, 1000),
            p(1000, 1000),
            p(1000, 0)
        ]
    );
    assert_well_formed(&result);
}

#[test]
fn test_single_corner_cut_gives_six_vertices() {
    let corners = [
        (p(0, 0), p(300, 200)),
        (p(0, 1000), p(300, 800)),
        (p(1000, 1000), p(700, 800)),
        (p(1000, 0), p(700, 200)),
    ];
    for (corner, interior) in corners {
        let result = build_from_pairs(&die(), &[(interior, corner)]).unwrap();
        assert_eq!(result.len(), 6, "corner {corner}");
        assert!(!result.contains(&corner));
        assert_well_formed(&result);
    }
}

#[test]
fn test_every_bucket_at_once() {
    let pairs = [
        (p(0, 0), p(100, 100)),
        (p(0, 400), p(100, 500)),
        (p(0, 1000), p(100, 900)),
        (p(400, 1000), p(500, 900)),
        (p(1000, 1000), p(900, 900)),
        (p(1000, 600), p(900, 500)),
        (p(1000, 0), p(900, 100)),
        (p(600, 0), p(500, 100)),
    ];
    let result = build_from_pairs(&die(), &pairs).unwrap();
    assert_eq!(result.len(), 4 * 3 + 4 * 4);
    assert_well_formed(&result);
    // Starts at the bottom-left notch and walks clockwise.
    assert_eq!(result[0], p(100, 0));
    assert_eq!(result[3], p(0, 400));
    assert_eq!(*result.last().unwrap(), p(500, 0));
}

#[test]
fn test_input_order_is_emission_order() {
    let pairs = [(p(0, 700), p(100, 800)), (p(0, 200), p(100, 300))];
    let result = build_from_pairs(&die(), &pairs).unwrap();
    let first = result.iter().position(|v| *v == p(0, 700)).unwrap();
    let second = result.iter().position(|v| *v == p(0, 200)).unwrap();
    assert!(first < second, "cuts must not be sorted by position");
}

#[test]
fn test_multiple_cuts_same_corner_all_emitted() {
    let mut buckets = CutBuckets::new();
    for interior in [p(100, 100), p(200, 50)] {
        let (bucket, cut) = classify_cut(&die(), p(0, 0), interior).unwrap();
        assert_eq!(bucket, CutBucket::BottomLeft);
        buckets.push(bucket, cut);
    }
    let result = build(&die(), &buckets).unwrap();
    assert_eq!(
        &result[..6],
        &[
            p(100, 0),
            p(100, 100),
            p(0, 100),
            p(200, 0),
            p(200, 50),
            p(0, 50)
        ]
    );
}

#[test]
fn test_adjacent_notches_share_vertices() {
    let pairs = [(p(0, 0), p(100, 100)), (p(100, 0), p(300, 50))];
    let result = build_from_pairs(&die(), &pairs).unwrap();
    assert_eq!(result.first(), Some(&p(100, 0)));
    for pair in result.windows(2) {
        assert_ne!(pair[0], pair[1]);
    }
    assert_ne!(result.first(), result.last());
}

#[test]
fn test_cleanup_idempotent() {
    let raw = vec![p(0, 0), p(0, 0), p(0, 5), p(5, 5), p(5, 0), p(0, 0)];
    let once = cleanup(raw);
    assert_eq!(once, vec![p(0, 0), p(0, 5), p(5, 5), p(5, 0)]);
    assert_eq!(cleanup(once.clone()), once);
}

#[test]
fn test_shoelace_sign() {
    let cw = vec![p(0, 0), p(0, 10), p(10, 10), p(10, 0)];
    let mut ccw = cw.clone();
    ccw.reverse();
    assert_eq!(signed_area2(&cw), -200);
    assert_eq!(signed_area2(&ccw), 200);
}

#[test]
fn test_render_tokens() {
    let result = build(&Rect::from_size(10, 20).unwrap(), &CutBuckets::new()).unwrap();
    assert_eq!(format_points(&result), "( 0 0 ) ( 0 20 ) ( 10 20 ) ( 10 0 )");
}

#[test]
fn test_both_points_interior_is_invalid() {
    let err = build_from_pairs(&die(), &[(p(100, 100), p(200, 200))]).unwrap_err();
    assert!(matches!(err, BoundaryError::InvalidCut(_)));
    assert!(err.to_string().contains("one point must be inside"));
}

#[test]
fn test_out_of_range_coordinate_is_invalid() {
    let err = build_from_pairs(&die(), &[(p(1500, 0), p(100, 100))]).unwrap_err();
    assert!(matches!(err, BoundaryError::InvalidCut(_)));
}

#[test]
fn test_identical_points_invalid() {
    let err = build_from_pairs(&die(), &[(p(0, 0), p(0, 0))]).unwrap_err();
    assert!(matches!(err, BoundaryError::InvalidCut(_)));
}

#[test]
fn test_degenerate_rect() {
    let rect = Rect {
        min: p(0, 0),
        max: p(100, 0),
    };
    assert!(matches!(
        build_from_pairs(&rect, &[]),
        Err(BoundaryError::DegenerateCut(_))
    ));
}

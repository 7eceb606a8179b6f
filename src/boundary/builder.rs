// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Huang Rui <vowstar@gmail.com>

//! Polygon builder
//!
//! Walks the eight cut buckets clockwise from the bottom-left corner and
//! emits the notched outline. Multiple cuts in one bucket are emitted in
//! input order and are neither merged nor checked against each other.

use log::debug;

use super::classify::classify_cut;
use super::{Cut, CutBucket, CutBuckets, Point, Rect};
use crate::error::BoundaryResult;

/// Build the clockwise boundary for `rect` with all bucketed cuts applied
pub fn build(rect: &Rect, buckets: &CutBuckets) -> BoundaryResult<Vec<Point>> {
    rect.validate()?;

    let mut points = Vec::with_capacity(4 + buckets.len() * 4);
    for bucket in CutBucket::TRAVERSAL {
        let cuts = buckets.get(bucket);
        match bucket.corner(rect) {
            Some(corner) if cuts.is_empty() => points.push(corner),
            _ => {
                for cut in cuts {
                    emit_cut(rect, bucket, cut, &mut points);
                }
            }
        }
    }

    let raw_len = points.len();
    let points = cleanup(points);
    debug!(
        "[EDIT] {} cuts -> {} raw vertices, {} after cleanup",
        buckets.len(),
        raw_len,
        points.len()
    );
    Ok(points)
}

/// Classify unordered point pairs and build the boundary in one step
pub fn build_from_pairs(rect: &Rect, pairs: &[(Point, Point)]) -> BoundaryResult<Vec<Point>> {
    rect.validate()?;

    let mut buckets = CutBuckets::new();
    for &(a, b) in pairs {
        let (bucket, cut) = classify_cut(rect, a, b)?;
        buckets.push(bucket, cut);
    }
    build(rect, &buckets)
}

fn emit_cut(rect: &Rect, bucket: CutBucket, cut: &Cut, out: &mut Vec<Point>) {
    let (x0, y0, w, h) = (rect.min.x, rect.min.y, rect.max.x, rect.max.y);
    let Point { x: x1, y: y1 } = cut.edge;
    let Point { x: x2, y: y2 } = cut.interior;
    let p = Point::new;

    match bucket {
        CutBucket::BottomLeft => out.extend([p(x2, y0), p(x2, y2), p(x0, y2)]),
        CutBucket::TopLeft => out.extend([p(x0, y2), p(x2, y2), p(x2, h)]),
        CutBucket::TopRight => out.extend([p(x2, h), p(x2, y2), p(w, y2)]),
        CutBucket::BottomRight => out.extend([p(w, y2), p(x2, y2), p(x2, y0)]),
        CutBucket::LeftEdge => {
            if y1 > y2 {
                out.extend([p(x1, y2), p(x2, y2), p(x2, y1), p(x1, y1)]);
            } else {
                out.extend([p(x1, y1), p(x2, y1), p(x2, y2), p(x1, y2)]);
            }
        }
        CutBucket::TopEdge => {
            if x1 > x2 {
                out.extend([p(x2, y1), p(x2, y2), p(x1, y2), p(x1, y1)]);
            } else {
                out.extend([p(x1, y1), p(x1, y2), p(x2, y2), p(x2, y1)]);
            }
        }
        CutBucket::RightEdge => {
            if y1 > y2 {
                out.extend([p(x1, y1), p(x2, y1), p(x2, y2), p(x1, y2)]);
            } else {
                out.extend([p(x1, y2), p(x2, y2), p(x2, y1), p(x1, y1)]);
            }
        }
        CutBucket::BottomEdge => {
            if x1 > x2 {
                out.extend([p(x1, y1), p(x1, y2), p(x2, y2), p(x2, y1)]);
            } else {
                out.extend([p(x2, y1), p(x2, y2), p(x1, y2), p(x1, y1)]);
            }
        }
    }
}

/// Drop the closing duplicate and collapse consecutive repeats until stable
pub fn cleanup(mut points: Vec<Point>) -> Vec<Point> {
    loop {
        let before = points.len();
        if points.len() > 1 && points.first() == points.last() {
            points.pop();
        }
        points.dedup();
        if points.len() == before {
            return points;
        }
    }
}

// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Huang Rui <vowstar@gmail.com>

//! Cut classification: which point is on the edge, and which bucket it lands in

use log::trace;

use super::{Cut, CutBucket, Point, Rect};
use crate::error::{BoundaryError, BoundaryResult};

/// Split an unordered point pair into `(edge, interior)`
///
/// Exactly one point must lie strictly inside `rect` and the other on its
/// boundary (corners included).
pub fn classify(rect: &Rect, a: Point, b: Point) -> BoundaryResult<(Point, Point)> {
    if a == b {
        return Err(BoundaryError::InvalidCut(format!(
            "the two points cannot be the same: {a}"
        )));
    }

    for p in [a, b] {
        if p.x < rect.min.x || p.y < rect.min.y {
            return Err(BoundaryError::InvalidCut(format!(
                "coordinates cannot lie below the die origin {}: {p}",
                rect.min
            )));
        }
        if p.x > rect.max.x || p.y > rect.max.y {
            return Err(BoundaryError::InvalidCut(format!(
                "coordinates cannot exceed die area ({}, {}): {p}",
                rect.max.x, rect.max.y
            )));
        }
    }

    if rect.contains_interior(a) && rect.contains_boundary(b) {
        Ok((b, a))
    } else if rect.contains_interior(b) && rect.contains_boundary(a) {
        Ok((a, b))
    } else {
        Err(BoundaryError::InvalidCut(
            "one point must be inside the rectangle and one on the edge".to_string(),
        ))
    }
}

/// Bucket of an already classified edge point
///
/// Returns `None` only when `edge` is not on the boundary of `rect`, which
/// [`classify`] rules out.
pub fn bucket_of(rect: &Rect, edge: Point) -> Option<CutBucket> {
    let (x0, y0, w, h) = (rect.min.x, rect.min.y, rect.max.x, rect.max.y);
    let inside_x = x0 < edge.x && edge.x < w;
    let inside_y = y0 < edge.y && edge.y < h;

    let bucket = match (edge.x, edge.y) {
        (x, y) if x == w && y == h => CutBucket::TopRight,
        (x, y) if x == w && y == y0 => CutBucket::BottomRight,
        (x, y) if x == x0 && y == h => CutBucket::TopLeft,
        (x, y) if x == x0 && y == y0 => CutBucket::BottomLeft,
        (x, _) if x == x0 && inside_y => CutBucket::LeftEdge,
        (_, y) if y == h && inside_x => CutBucket::TopEdge,
        (x, _) if x == w && inside_y => CutBucket::RightEdge,
        (_, y) if y == y0 && inside_x => CutBucket::BottomEdge,
        _ => return None,
    };
    Some(bucket)
}

/// Classify a point pair and tag it with its bucket
pub fn classify_cut(rect: &Rect, a: Point, b: Point) -> BoundaryResult<(CutBucket, Cut)> {
    let (edge, interior) = classify(rect, a, b)?;
    let bucket = bucket_of(rect, edge).ok_or_else(|| {
        BoundaryError::InvalidCut(format!("edge point {edge} is not on the die boundary"))
    })?;
    trace!("[CUT] {edge} -> {interior} assigned to {bucket}");
    Ok((bucket, Cut { edge, interior }))
}

// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Huang Rui <vowstar@gmail.com>

//! Rectilinear boundary editor
//!
//! Turns a rectangular die outline plus a list of notch cuts into the
//! ordered vertex list of a clockwise rectilinear DIEAREA polygon.
//!
//! The pipeline is:
//! 1. [`classify::classify`] decides which point of a cut is on the edge
//! 2. [`classify::bucket_of`] assigns the cut to a corner or edge bucket
//! 3. [`builder::build`] walks the buckets clockwise and emits vertices

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{BoundaryError, BoundaryResult};

pub mod builder;
pub mod classify;
pub mod raster;

pub use builder::{build, build_from_pairs, cleanup};
pub use classify::{bucket_of, classify};

/// Integer point in database units
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Point {
    pub x: i64,
    pub y: i64,
}

impl Point {
    pub const fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }
}

impl From<(i64, i64)> for Point {
    fn from((x, y): (i64, i64)) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "( {} {} )", self.x, self.y)
    }
}

/// Axis-aligned die rectangle, `min` is bottom-left and `max` top-right
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rect {
    pub min: Point,
    pub max: Point,
}

impl Rect {
    /// Create a rectangle, rejecting empty or inverted extents
    pub fn new(min: Point, max: Point) -> BoundaryResult<Self> {
        let rect = Self { min, max };
        rect.validate()?;
        Ok(rect)
    }

    /// Rectangle anchored at the origin
    pub fn from_size(width: i64, height: i64) -> BoundaryResult<Self> {
        Self::new(Point::new(0, 0), Point::new(width, height))
    }

    pub fn validate(&self) -> BoundaryResult<()> {
        if self.min.x >= self.max.x || self.min.y >= self.max.y {
            return Err(BoundaryError::DegenerateCut(format!(
                "rectangle {} {} has no area",
                self.min, self.max
            )));
        }
        Ok(())
    }

    pub fn bottom_left(&self) -> Point {
        self.min
    }

    pub fn top_left(&self) -> Point {
        Point::new(self.min.x, self.max.y)
    }

    pub fn top_right(&self) -> Point {
        self.max
    }

    pub fn bottom_right(&self) -> Point {
        Point::new(self.max.x, self.min.y)
    }

    /// Original corners in clockwise order starting at bottom-left
    pub fn corners(&self) -> Vec<Point> {
        vec![
            self.bottom_left(),
            self.top_left(),
            self.top_right(),
            self.bottom_right(),
        ]
    }

    /// Strictly inside on both axes
    pub fn contains_interior(&self, p: Point) -> bool {
        self.min.x < p.x && p.x < self.max.x && self.min.y < p.y && p.y < self.max.y
    }

    /// On one of the four edges, corners included
    pub fn contains_boundary(&self, p: Point) -> bool {
        let on_vertical =
            (p.x == self.min.x || p.x == self.max.x) && self.min.y <= p.y && p.y <= self.max.y;
        let on_horizontal =
            (p.y == self.min.y || p.y == self.max.y) && self.min.x <= p.x && p.x <= self.max.x;
        on_vertical || on_horizontal
    }
}

/// A classified notch: `edge` lies on the rectangle boundary, `interior` strictly inside
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cut {
    pub edge: Point,
    pub interior: Point,
}

/// Where the edge point of a cut falls on the rectangle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CutBucket {
    TopRight,
    BottomRight,
    TopLeft,
    BottomLeft,
    LeftEdge,
    TopEdge,
    RightEdge,
    BottomEdge,
}

impl CutBucket {
    /// Clockwise traversal starting at the bottom-left corner
    pub const TRAVERSAL: [CutBucket; 8] = [
        CutBucket::BottomLeft,
        CutBucket::LeftEdge,
        CutBucket::TopLeft,
        CutBucket::TopEdge,
        CutBucket::TopRight,
        CutBucket::RightEdge,
        CutBucket::BottomRight,
        CutBucket::BottomEdge,
    ];

    /// The untouched corner emitted when a corner bucket is empty
    pub fn corner(self, rect: &Rect) -> Option<Point> {
        match self {
            CutBucket::TopRight => Some(rect.top_right()),
            CutBucket::BottomRight => Some(rect.bottom_right()),
            CutBucket::TopLeft => Some(rect.top_left()),
            CutBucket::BottomLeft => Some(rect.bottom_left()),
            _ => None,
        }
    }

    fn index(self) -> usize {
        match self {
            CutBucket::TopRight => 0,
            CutBucket::BottomRight => 1,
            CutBucket::TopLeft => 2,
            CutBucket::BottomLeft => 3,
            CutBucket::LeftEdge => 4,
            CutBucket::TopEdge => 5,
            CutBucket::RightEdge => 6,
            CutBucket::BottomEdge => 7,
        }
    }
}

impl fmt::Display for CutBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CutBucket::TopRight => "top-right corner",
            CutBucket::BottomRight => "bottom-right corner",
            CutBucket::TopLeft => "top-left corner",
            CutBucket::BottomLeft => "bottom-left corner",
            CutBucket::LeftEdge => "left edge",
            CutBucket::TopEdge => "top edge",
            CutBucket::RightEdge => "right edge",
            CutBucket::BottomEdge => "bottom edge",
        };
        f.write_str(name)
    }
}

/// Cuts grouped by bucket, each bucket kept in insertion order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CutBuckets {
    buckets: [Vec<Cut>; 8],
}

impl CutBuckets {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, bucket: CutBucket, cut: Cut) {
        self.buckets[bucket.index()].push(cut);
    }

    pub fn get(&self, bucket: CutBucket) -> &[Cut] {
        &self.buckets[bucket.index()]
    }

    pub fn len(&self) -> usize {
        self.buckets.iter().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.iter().all(Vec::is_empty)
    }
}

/// Twice the signed shoelace area; negative for clockwise winding
pub fn signed_area2(points: &[Point]) -> i128 {
    if points.len() < 3 {
        return 0;
    }
    points
        .iter()
        .zip(points.iter().cycle().skip(1))
        .map(|(a, b)| i128::from(a.x) * i128::from(b.y) - i128::from(b.x) * i128::from(a.y))
        .sum()
}

pub fn is_clockwise(points: &[Point]) -> bool {
    signed_area2(points) < 0
}

/// Render vertices as a space separated `( x y )` token sequence
pub fn format_points(points: &[Point]) -> String {
    points
        .iter()
        .map(Point::to_string)
        .collect::<Vec<String>>()
        .join(" ")
}

// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Huang Rui <vowstar@gmail.com>

//! Boundary from a raster contour
//!
//! Converts the external contour of a die-shaped blob, already traced in
//! pixel coordinates, into a clockwise rectilinear vertex list in physical
//! units. This path does not go through the cut builder.

use std::collections::HashSet;

use log::debug;
use serde::{Deserialize, Serialize};

use super::{signed_area2, Point};
use crate::error::DefError;

/// Pixels within which neighbouring coordinates are snapped together
const SNAP_TOLERANCE_PX: f64 = 5.0;

/// Traced contour plus the physical size the image represents
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContourSpec {
    pub image_width: u32,
    pub image_height: u32,
    pub target_width: i64,
    pub target_height: i64,
    /// Shift the result so the minimum x and y become 0
    #[serde(default)]
    pub origin_at_zero: bool,
    /// Contour in pixel coordinates, y growing downwards
    pub points: Vec<(i64, i64)>,
}

impl ContourSpec {
    pub fn from_json(text: &str) -> Result<Self, DefError> {
        Ok(serde_json::from_str(text)?)
    }
}

/// Build the clockwise boundary described by `spec`
pub fn boundary_from_contour(spec: &ContourSpec) -> Result<Vec<Point>, DefError> {
    if spec.points.is_empty() {
        return Err(DefError::InvalidContour("no contour points".to_string()));
    }
    if spec.image_width == 0 || spec.image_height == 0 {
        return Err(DefError::InvalidContour(
            "image dimensions must be positive".to_string(),
        ));
    }
    if spec.target_width <= 0 || spec.target_height <= 0 {
        return Err(DefError::InvalidContour(
            "target dimensions must be positive".to_string(),
        ));
    }

    let (width, height) = (i64::from(spec.image_width), i64::from(spec.image_height));
    if let Some(&(x, y)) = spec
        .points
        .iter()
        .find(|&&(x, y)| !(0..=width).contains(&x) || !(0..=height).contains(&y))
    {
        return Err(DefError::InvalidContour(format!(
            "pixel ({x}, {y}) lies outside the {width}x{height} image"
        )));
    }

    let scale_x = spec.target_width as f64 / f64::from(spec.image_width);
    let scale_y = spec.target_height as f64 / f64::from(spec.image_height);

    let physical = corner_points(spec, scale_x, scale_y);
    if physical.is_empty() {
        return Err(DefError::InvalidContour("no corner points found".to_string()));
    }

    let snap_x = merge_close_coords(
        physical.iter().map(|p| p.0).collect(),
        scale_x * SNAP_TOLERANCE_PX,
    );
    let snap_y = merge_close_coords(
        physical.iter().map(|p| p.1).collect(),
        scale_y * SNAP_TOLERANCE_PX,
    );

    let mut seen = HashSet::new();
    let snapped: Vec<Point> = physical
        .iter()
        .map(|&(x, y)| Point::new(nearest(&snap_x, x), nearest(&snap_y, y)))
        .filter(|p| seen.insert(*p))
        .collect();

    let mut points = simplify_polygon(snapped);
    if points.len() < 3 {
        return Err(DefError::InvalidContour(format!(
            "contour collapsed to {} points",
            points.len()
        )));
    }

    if spec.origin_at_zero {
        let min_x = points.iter().map(|p| p.x).min().unwrap_or(0);
        let min_y = points.iter().map(|p| p.y).min().unwrap_or(0);
        for p in &mut points {
            p.x -= min_x;
            p.y -= min_y;
        }
    }

    if signed_area2(&points) > 0 {
        points.reverse();
    }

    debug!(
        "[EDIT] contour of {} pixels -> {} vertices",
        spec.points.len(),
        points.len()
    );
    Ok(points)
}

/// Keep turning points of the pixel contour, scaled to physical units
fn corner_points(spec: &ContourSpec, scale_x: f64, scale_y: f64) -> Vec<(f64, f64)> {
    let n = spec.points.len();
    let height = i64::from(spec.image_height);
    let mut result: Vec<(f64, f64)> = Vec::new();
    let mut prev = spec.points[n - 1];

    for (i, &curr) in spec.points.iter().enumerate() {
        let next = spec.points[(i + 1) % n];
        if cross(prev, curr, next) != 0 {
            let p = (curr.0 as f64 * scale_x, (height - curr.1) as f64 * scale_y);
            if result.last() != Some(&p) {
                result.push(p);
            }
        }
        prev = curr;
    }
    result
}

fn cross(prev: (i64, i64), curr: (i64, i64), next: (i64, i64)) -> i128 {
    let (ax, ay) = (
        i128::from(curr.0) - i128::from(prev.0),
        i128::from(curr.1) - i128::from(prev.1),
    );
    let (bx, by) = (
        i128::from(next.0) - i128::from(curr.0),
        i128::from(next.1) - i128::from(curr.1),
    );
    ax * by - ay * bx
}

/// Group sorted values closer than `tolerance` and replace each group by its rounded mean
fn merge_close_coords(mut coords: Vec<f64>, tolerance: f64) -> Vec<i64> {
    coords.sort_by(f64::total_cmp);

    let mut merged = Vec::new();
    let mut group: Vec<f64> = Vec::new();
    for value in coords {
        if let Some(&last) = group.last() {
            if value - last >= tolerance {
                merged.push(group_mean(&group));
                group.clear();
            }
        }
        group.push(value);
    }
    if !group.is_empty() {
        merged.push(group_mean(&group));
    }
    merged
}

fn group_mean(group: &[f64]) -> i64 {
    (group.iter().sum::<f64>() / group.len() as f64).round() as i64
}

fn nearest(candidates: &[i64], value: f64) -> i64 {
    candidates
        .iter()
        .copied()
        .min_by(|a, b| (*a as f64 - value).abs().total_cmp(&(*b as f64 - value).abs()))
        .unwrap_or(value.round() as i64)
}

/// Drop vertices that are collinear with their cyclic neighbours
fn simplify_polygon(points: Vec<Point>) -> Vec<Point> {
    let n = points.len();
    if n < 3 {
        return points;
    }
    (0..n)
        .filter(|&i| {
            let prev = points[(i + n - 1) % n];
            let curr = points[i];
            let next = points[(i + 1) % n];
            cross((prev.x, prev.y), (curr.x, curr.y), (next.x, next.y)).abs() > 1
        })
        .map(|i| points[i])
        .collect()
}

// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Huang Rui <vowstar@gmail.com>

//! DIEAREA edit requests
//!
//! Ties the three ways of producing a new die boundary (rectangle cuts, a
//! literal statement, or a traced contour) to a DEF document.

use std::fs;
use std::path::Path;

use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::boundary::raster::{boundary_from_contour, ContourSpec};
use crate::boundary::{build_from_pairs, Point};
use crate::def::reader::{DefDocument, DefReader};
use crate::def::writer::write_def;
use crate::def::DieArea;
use crate::error::DefError;

/// How the new DIEAREA is produced
#[derive(Debug, Clone, PartialEq)]
pub enum EditRequest {
    /// Remove notches from the existing rectangular die area
    Cuts(Vec<(Point, Point)>),
    /// Replace the statement with caller supplied text
    Line(String),
    /// Derive the boundary from a traced image contour
    Contour(ContourSpec),
}

/// The new statement and the vertices it describes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditOutcome {
    pub statement: String,
    pub vertices: Vec<Point>,
}

/// JSON cut list: `{"cuts": [[x1, y1, x2, y2], ...]}`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CutList {
    pub cuts: Vec<[i64; 4]>,
}

impl CutList {
    pub fn from_json(text: &str) -> Result<Self, DefError> {
        Ok(serde_json::from_str(text)?)
    }

    pub fn into_pairs(self) -> Vec<(Point, Point)> {
        self.cuts
            .into_iter()
            .map(|[x1, y1, x2, y2]| (Point::new(x1, y1), Point::new(x2, y2)))
            .collect()
    }
}

/// Group a flat `x1 y1 x2 y2 ...` list into `rectangles` point pairs
pub fn cuts_from_coordinates(
    rectangles: usize,
    coordinates: &[i64],
) -> Result<Vec<(Point, Point)>, DefError> {
    let expected = rectangles * 4;
    if coordinates.len() != expected {
        return Err(DefError::CoordinateCount {
            expected,
            found: coordinates.len(),
        });
    }
    Ok(coordinates
        .chunks_exact(4)
        .map(|c| (Point::new(c[0], c[1]), Point::new(c[2], c[3])))
        .collect())
}

/// Normalize a literal statement to end in exactly ` ;`
pub fn normalize_statement(line: &str) -> String {
    format!("{} ;", line.trim_end().trim_end_matches(';').trim())
}

impl EditRequest {
    /// Produce the new DIEAREA statement for `document`
    pub fn apply(&self, document: &DefDocument) -> Result<EditOutcome, DefError> {
        let outcome = match self {
            EditRequest::Cuts(pairs) => {
                let rect = document.die_area.rect()?;
                debug!("[EDIT] applying {} cuts to {} {}", pairs.len(), rect.min, rect.max);
                let vertices = build_from_pairs(&rect, pairs)?;
                EditOutcome {
                    statement: DieArea::new(vertices.clone()).to_string(),
                    vertices,
                }
            }
            EditRequest::Line(line) => {
                let statement = normalize_statement(line);
                let vertices = DieArea::parse(&statement)?.points;
                EditOutcome {
                    statement,
                    vertices,
                }
            }
            EditRequest::Contour(spec) => {
                let vertices = boundary_from_contour(spec)?;
                EditOutcome {
                    statement: DieArea::new(vertices.clone()).to_string(),
                    vertices,
                }
            }
        };
        info!("[EDIT] new DIEAREA has {} vertices", outcome.vertices.len());
        Ok(outcome)
    }
}

/// Read `input`, apply `request`, and write the edited file to `output`
///
/// Nothing is written when any step fails.
pub fn edit_def_file<P: AsRef<Path>, Q: AsRef<Path>>(
    input: P,
    output: Q,
    request: &EditRequest,
) -> Result<EditOutcome, DefError> {
    let document = DefReader::new().read(input)?;
    let outcome = request.apply(&document)?;
    write_def(output, &document.with_die_area(&outcome.statement))?;
    Ok(outcome)
}

/// Load a JSON file and deserialize it with `parse`
pub fn load_json<T, P: AsRef<Path>>(
    path: P,
    parse: impl FnOnce(&str) -> Result<T, DefError>,
) -> Result<T, DefError> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|e| DefError::io(path, e))?;
    parse(&text)
}

// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Huang Rui <vowstar@gmail.com>

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::boundary::{format_points, Point, Rect};
use crate::error::DefError;

/// Parsed `DIEAREA` statement
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DieArea {
    pub points: Vec<Point>,
}

impl DieArea {
    pub fn new(points: Vec<Point>) -> Self {
        Self { points }
    }

    /// Parse a complete `DIEAREA ... ;` statement
    pub fn parse(statement: &str) -> Result<Self, DefError> {
        let (rest, points) = def_parser::parse_die_area(statement)
            .map_err(|e| DefError::InvalidDieArea(format!("{statement:?}: {e}")))?;
        if !rest.trim().is_empty() {
            return Err(DefError::InvalidDieArea(format!(
                "unexpected trailing text {:?}",
                rest.trim()
            )));
        }
        if points.len() < 2 {
            return Err(DefError::InvalidDieArea(
                "DIEAREA must contain at least 2 coordinate pairs".to_string(),
            ));
        }
        Ok(Self { points })
    }

    /// The die rectangle, for a two-point `DIEAREA`
    pub fn rect(&self) -> Result<Rect, DefError> {
        match self.points.as_slice() {
            [min, max] => Ok(Rect::new(*min, *max)?),
            points => Err(DefError::InvalidDieArea(format!(
                "expected a rectangle ( x0 y0 ) ( w h ), found {} points",
                points.len()
            ))),
        }
    }
}

impl fmt::Display for DieArea {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DIEAREA {} ;", format_points(&self.points))
    }
}

pub mod def_parser;
pub mod preprocessor;
pub mod reader;
pub mod writer;

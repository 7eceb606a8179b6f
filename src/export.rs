// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Huang Rui <vowstar@gmail.com>

use std::path::Path;

use csv::Writer;
use serde::Serialize;

use crate::boundary::Point;
use crate::error::DefError;

#[derive(Debug, Serialize)]
pub struct VertexCsvRecord {
    #[serde(rename = "Index")]
    pub index: usize,
    #[serde(rename = "X")]
    pub x: i64,
    #[serde(rename = "Y")]
    pub y: i64,
}

/// Export boundary vertices to a CSV file, one row per vertex in winding order
pub fn export_vertices_to_csv<P: AsRef<Path>>(points: &[Point], path: P) -> Result<(), DefError> {
    let path = path.as_ref();
    let mut writer = Writer::from_path(path)?;

    for (index, p) in points.iter().enumerate() {
        writer.serialize(VertexCsvRecord {
            index,
            x: p.x,
            y: p.y,
        })?;
    }

    writer.flush().map_err(|e| DefError::io(path, e))?;
    Ok(())
}

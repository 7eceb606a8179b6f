// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Huang Rui <vowstar@gmail.com>

use std::fs;
use std::path::Path;

use log::{debug, info};

use super::preprocessor::{preprocess, LineSpan, PreprocessedDef};
use super::DieArea;
use crate::error::DefError;

/// A DEF file held as text, with its DIEAREA statement located
#[derive(Debug, Clone)]
pub struct DefDocument {
    pub content: String,
    pub die_area: DieArea,
    /// Physical lines occupied by the DIEAREA statement
    pub die_area_span: LineSpan,
}

impl DefDocument {
    pub fn parse(content: String) -> Result<Self, DefError> {
        let preprocessed = preprocess(&content);
        let statement = preprocessed
            .find("DIEAREA")
            .ok_or(DefError::DieAreaNotFound)?;

        let die_area = DieArea::parse(&statement.text).map_err(|e| {
            DefError::InvalidDieArea(PreprocessedDef::format_error(statement, &e.to_string()))
        })?;
        let die_area_span = statement.span;

        Ok(Self {
            content,
            die_area,
            die_area_span,
        })
    }
}

pub struct DefReader;

impl DefReader {
    pub fn new() -> Self {
        Self
    }

    pub fn read<P: AsRef<Path>>(&self, path: P) -> Result<DefDocument, DefError> {
        let path = path.as_ref();
        info!("[LOAD] Loading DEF file: {}", path.display());

        let content = fs::read_to_string(path).map_err(|e| DefError::io(path, e))?;
        debug!("[FILE] DEF file size: {} bytes", content.len());

        let document = DefDocument::parse(content)?;
        info!(
            "[PASS] DIEAREA with {} points at line {}",
            document.die_area.points.len(),
            document.die_area_span.first + 1
        );
        Ok(document)
    }
}

impl Default for DefReader {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::boundary::Point;

    #[test]
    fn test_parse_locates_die_area() {
        let content = "VERSION 5.8 ;\nDESIGN top ;\nUNITS DISTANCE MICRONS 2000 ;\nDIEAREA ( 0 0 ) ( 5000 4000 ) ;\nEND DESIGN\n";
        let doc = DefDocument::parse(content.to_string()).unwrap();
        assert_eq!(doc.die_area_span, LineSpan::new(3, 3));
        assert_eq!(doc.die_area.points[1], Point::new(5000, 4000));
    }

    #[test]
    fn test_parse_tight_die_area() {
        let doc = DefDocument::parse("VERSION 5.8 ;\nDIEAREA(0 0)(10 10) ;\n".to_string()).unwrap();
        assert_eq!(doc.die_area_span, LineSpan::new(1, 1));
        assert_eq!(doc.die_area.points, vec![Point::new(0, 0), Point::new(10, 10)]);
    }

    #[test]
    fn test_missing_die_area() {
        let err = DefDocument::parse("VERSION 5.8 ;\n".to_string()).unwrap_err();
        assert!(matches!(err, DefError::DieAreaNotFound));
    }

    #[test]
    fn test_malformed_die_area_reports_line() {
        let err = DefDocument::parse("VERSION 5.8 ;\nDIEAREA ( 0 0 ) ;\n".to_string()).unwrap_err();
        assert!(err.to_string().contains("Line 2"));
    }
}

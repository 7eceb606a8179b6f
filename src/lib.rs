//! DEF DIEAREA Tools
//!
//! This library edits the DIEAREA boundary of DEF files used in Electronic
//! Design Automation (EDA) placement and routing flows: notching a
//! rectangular die into a rectilinear outline, replacing the statement
//! outright, or deriving it from a traced image contour.

pub mod boundary;
pub mod def;
pub mod edit;
pub mod error;
pub mod export;

// Re-export commonly used types
pub use boundary::{Cut, CutBucket, CutBuckets, Point, Rect};
pub use def::DieArea;
pub use edit::{edit_def_file, EditOutcome, EditRequest};
pub use error::{BoundaryError, DefError};

//! Point list input

pub mod points;

pub use points::{read_points, read_points_file, read_records, PointRecord};

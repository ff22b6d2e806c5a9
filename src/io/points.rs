use std::fs::File;
use std::io::Read;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::projection::GeoPoint;

/// One row of a point CSV: `lat,lng[,name]`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PointRecord {
    #[serde(alias = "latitude")]
    pub lat: f64,
    #[serde(alias = "longitude", alias = "lon")]
    pub lng: f64,
    #[serde(default)]
    pub name: Option<String>,
}

impl PointRecord {
    pub fn point(&self) -> GeoPoint {
        GeoPoint { lat: self.lat, lng: self.lng }
    }
}

/// Reads point records from CSV with a header row, validating each coordinate
pub fn read_records<R: Read>(reader: R) -> Result<Vec<PointRecord>> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut records = Vec::new();
    for result in csv_reader.deserialize() {
        let record: PointRecord = result?;
        record.point().validate()?;
        records.push(record);
    }

    log::debug!("Read {} points", records.len());
    Ok(records)
}

/// Reads the coordinates of a point CSV, dropping names
pub fn read_points<R: Read>(reader: R) -> Result<Vec<GeoPoint>> {
    Ok(read_records(reader)?.iter().map(PointRecord::point).collect())
}

/// Opens and reads a point CSV file
pub fn read_points_file<P: AsRef<Path>>(path: P) -> Result<Vec<PointRecord>> {
    read_records(File::open(path)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use std::io::{Cursor, Write};

    #[test]
    fn test_read_short_headers() {
        let data = "lat,lng\n48.8566,2.3522\n51.5074,-0.1278\n";
        let points = read_points(Cursor::new(data)).unwrap();
        assert_eq!(
            points,
            vec![
                GeoPoint { lat: 48.8566, lng: 2.3522 },
                GeoPoint { lat: 51.5074, lng: -0.1278 },
            ]
        );
    }

    #[test]
    fn test_read_long_headers_with_names() {
        let data = "latitude, longitude, name\n53.5461, -113.4938, Edmonton\n51.0447, -114.0719,\n";
        let records = read_records(Cursor::new(data)).unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].name.as_deref(), Some("Edmonton"));
        assert_eq!(records[1].name, None);
        assert_eq!(records[1].point(), GeoPoint { lat: 51.0447, lng: -114.0719 });
    }

    #[test]
    fn test_empty_file() {
        assert!(read_points(Cursor::new("lat,lng\n")).unwrap().is_empty());
    }

    #[test]
    fn test_malformed_row() {
        let result = read_points(Cursor::new("lat,lng\nabc,1.0\n"));
        assert!(matches!(result, Err(Error::Csv(_))));
    }

    #[test]
    fn test_out_of_range_row() {
        let result = read_points(Cursor::new("lat,lng\n10.0,190.0\n"));
        assert!(matches!(result, Err(Error::InvalidCoordinate { .. })));
    }

    #[test]
    fn test_read_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "lat,lon,name").unwrap();
        writeln!(file, "10.0,10.0,a").unwrap();
        writeln!(file, "10.0,10.0,b").unwrap();

        let records = read_points_file(file.path()).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[1].name.as_deref(), Some("b"));
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = read_points_file(dir.path().join("missing.csv"));
        assert!(matches!(result, Err(Error::Io(_))));
    }
}

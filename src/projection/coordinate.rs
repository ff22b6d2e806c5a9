use std::ops::{Add, Neg, Sub};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Norms at or below this are treated as the zero vector
const ZERO_NORM: f64 = 1e-12;

/// Represents a geographic point in degrees (WGS84 sphere)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    #[serde(alias = "latitude")]
    pub lat: f64,
    #[serde(alias = "longitude", alias = "lon")]
    pub lng: f64,
}

impl GeoPoint {
    /// Creates a bounds-checked geographic point
    pub fn new(lat: f64, lng: f64) -> Result<Self> {
        let point = Self { lat, lng };
        point.validate()?;
        Ok(point)
    }

    /// Checks latitude is in [-90, 90] and longitude in [-180, 180]
    pub fn validate(&self) -> Result<()> {
        if (-90.0..=90.0).contains(&self.lat) && (-180.0..=180.0).contains(&self.lng) {
            Ok(())
        } else {
            Err(Error::InvalidCoordinate { lat: self.lat, lng: self.lng })
        }
    }

    /// Converts to a unit vector on the sphere centered at the origin
    pub fn to_unit_vector(&self) -> UnitVector {
        let lat = self.lat.to_radians();
        let lng = self.lng.to_radians();

        UnitVector(Vector3::new(
            lat.cos() * lng.cos(),
            lat.cos() * lng.sin(),
            lat.sin(),
        ))
    }
}

/// Plain Cartesian vector used for intermediate arithmetic
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vector3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vector3 {
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    pub fn dot(&self, other: &Vector3) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    pub fn cross(&self, other: &Vector3) -> Vector3 {
        Vector3::new(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x,
        )
    }

    pub fn norm(&self) -> f64 {
        self.dot(self).sqrt()
    }

    /// Scales to unit length, or `None` for a (near) zero vector
    pub fn normalize(&self) -> Option<UnitVector> {
        let norm = self.norm();
        if !norm.is_finite() || norm <= ZERO_NORM {
            return None;
        }
        Some(UnitVector(Vector3::new(self.x / norm, self.y / norm, self.z / norm)))
    }
}

impl Add for Vector3 {
    type Output = Vector3;

    fn add(self, rhs: Vector3) -> Vector3 {
        Vector3::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl Sub for Vector3 {
    type Output = Vector3;

    fn sub(self, rhs: Vector3) -> Vector3 {
        Vector3::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl Neg for Vector3 {
    type Output = Vector3;

    fn neg(self) -> Vector3 {
        Vector3::new(-self.x, -self.y, -self.z)
    }
}

/// A direction on the unit sphere; only constructed with unit norm
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UnitVector(Vector3);

impl UnitVector {
    /// The north pole, (0, 0, 1)
    pub const NORTH_POLE: UnitVector = UnitVector(Vector3::new(0.0, 0.0, 1.0));

    /// The point at latitude 0, longitude 0, (1, 0, 0)
    pub const PRIME_MERIDIAN: UnitVector = UnitVector(Vector3::new(1.0, 0.0, 0.0));

    pub fn x(&self) -> f64 {
        self.0.x
    }

    pub fn y(&self) -> f64 {
        self.0.y
    }

    pub fn z(&self) -> f64 {
        self.0.z
    }

    /// Returns the underlying Cartesian vector
    pub fn vector(&self) -> Vector3 {
        self.0
    }

    pub fn dot(&self, other: &UnitVector) -> f64 {
        self.0.dot(&other.0)
    }

    /// The antipodal direction
    pub fn antipode(&self) -> UnitVector {
        UnitVector(-self.0)
    }

    /// Converts back to latitude/longitude in degrees
    pub fn to_geo_point(&self) -> GeoPoint {
        let hyp = (self.0.x * self.0.x + self.0.y * self.0.y).sqrt();

        GeoPoint {
            lat: self.0.z.atan2(hyp).to_degrees(),
            lng: self.0.y.atan2(self.0.x).to_degrees(),
        }
    }
}

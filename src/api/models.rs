use serde::{Deserialize, Serialize};

use crate::config::SolverConfig;
use crate::io::PointRecord;
use crate::projection::GeoPoint;
use crate::solver::EnclosingCircle;

#[derive(Debug, Serialize, Deserialize)]
pub struct HullRequest {
    pub points: Vec<GeoPoint>,
    #[serde(default)]
    pub config: Option<SolverConfig>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HullResponse {
    pub hull: Vec<GeoPoint>,
    pub execution_time_ms: f64,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CircleRequest {
    pub points: Vec<GeoPoint>,
    #[serde(default)]
    pub config: Option<SolverConfig>,
}

#[derive(Debug, Serialize)]
pub struct CircleResponse {
    /// `null` when there is nothing to enclose
    pub circle: Option<EnclosingCircle>,
    pub hull_size: usize,
    pub execution_time_ms: f64,
}

#[derive(Debug, Deserialize)]
pub struct BatchRequest {
    pub sets: Vec<Vec<GeoPoint>>,
    #[serde(default)]
    pub config: Option<SolverConfig>,
}

#[derive(Debug, Serialize)]
pub struct BatchResult {
    pub circle: Option<EnclosingCircle>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct BatchResponse {
    pub total_sets: usize,
    pub failed: usize,
    pub results: Vec<BatchResult>,
    pub execution_time_ms: f64,
}

#[derive(Debug, Serialize)]
pub struct UploadResponse {
    pub total_points: usize,
    pub hull: Vec<PointRecord>,
    pub circle: Option<EnclosingCircle>,
    pub execution_time_ms: f64,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

use axum::extract::multipart::Multipart;
use axum::{extract::State, http::StatusCode, Json};
use std::io::Cursor;
use std::time::Instant;

use super::models::*;
use crate::config::SolverConfig;
use crate::error::Error;
use crate::io::read_records;
use crate::projection::TangentBase;
use crate::solver::Solver;

/// Shared handler state
#[derive(Debug, Clone, Copy)]
pub struct AppState {
    pub solver: Solver,
}

pub type ApiError = (StatusCode, Json<ErrorResponse>);

fn reject(error: Error) -> ApiError {
    let status = if error.is_client_error() {
        StatusCode::BAD_REQUEST
    } else {
        log::error!("{}", error);
        StatusCode::INTERNAL_SERVER_ERROR
    };

    (status, Json(ErrorResponse { error: error.to_string() }))
}

fn bad_request(message: impl Into<String>) -> ApiError {
    (StatusCode::BAD_REQUEST, Json(ErrorResponse { error: message.into() }))
}

fn elapsed_ms(start: Instant) -> f64 {
    start.elapsed().as_secs_f64() * 1000.0
}

/// Applies a per-request configuration without loosening the server's hull bound
fn solver_for(state: &AppState, requested: Option<SolverConfig>) -> Result<Solver, ApiError> {
    let Some(mut config) = requested else {
        return Ok(state.solver);
    };
    config.validate().map_err(reject)?;

    config.max_hull_size = match (config.max_hull_size, state.solver.config().max_hull_size) {
        (Some(requested), Some(limit)) => Some(requested.min(limit)),
        (None, limit) => limit,
        (requested, None) => requested,
    };

    Ok(Solver::new(config))
}

pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

pub async fn compute_hull(
    State(state): State<AppState>,
    Json(req): Json<HullRequest>,
) -> Result<Json<HullResponse>, ApiError> {
    let start = Instant::now();
    let solver = solver_for(&state, req.config)?;

    let hull = solver.hull(&req.points).map_err(reject)?;

    Ok(Json(HullResponse { hull, execution_time_ms: elapsed_ms(start) }))
}

pub async fn compute_circle(
    State(state): State<AppState>,
    Json(req): Json<CircleRequest>,
) -> Result<Json<CircleResponse>, ApiError> {
    let start = Instant::now();
    let solver = solver_for(&state, req.config)?;

    let solution = solver.solve_with_hull(&req.points).map_err(reject)?;

    Ok(Json(CircleResponse {
        circle: solution.circle,
        hull_size: solution.hull.len(),
        execution_time_ms: elapsed_ms(start),
    }))
}

pub async fn compute_batch(
    State(state): State<AppState>,
    Json(req): Json<BatchRequest>,
) -> Result<Json<BatchResponse>, ApiError> {
    let start = Instant::now();
    let solver = solver_for(&state, req.config)?;

    let total_sets = req.sets.len();
    let sets = req.sets;

    // Solving is CPU-bound; keep it off the async workers
    let solved = tokio::task::spawn_blocking(move || solver.solve_many(&sets))
        .await
        .map_err(|e| {
            log::error!("Batch solve task failed: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse { error: "Batch solve failed".to_string() }),
            )
        })?;

    let results: Vec<BatchResult> = solved
        .into_iter()
        .map(|result| match result {
            Ok(circle) => BatchResult { circle, error: None },
            Err(e) => BatchResult { circle: None, error: Some(e.to_string()) },
        })
        .collect();

    let failed = results.iter().filter(|r| r.error.is_some()).count();
    log::info!("Solved {} point sets ({} failed)", results.len(), failed);

    Ok(Json(BatchResponse {
        total_sets,
        failed,
        results,
        execution_time_ms: elapsed_ms(start),
    }))
}

/// Multipart upload: a `csv` file field and an optional `base` text field
pub async fn upload_csv(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<UploadResponse>, ApiError> {
    let start = Instant::now();

    let mut csv_data: Option<Vec<u8>> = None;
    let mut base: Option<TangentBase> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| bad_request(format!("Invalid multipart body: {}", e)))?
    {
        let name = field.name().unwrap_or("").to_string();

        match name.as_str() {
            "csv" => {
                let bytes = field
                    .bytes()
                    .await
                    .map_err(|e| bad_request(format!("Failed to read CSV field: {}", e)))?;
                csv_data = Some(bytes.to_vec());
            }
            "base" => {
                let text = field
                    .text()
                    .await
                    .map_err(|e| bad_request(format!("Failed to read base field: {}", e)))?;
                base = Some(
                    TangentBase::from_name(text.trim())
                        .ok_or_else(|| bad_request(format!("Unknown base: {}", text)))?,
                );
            }
            _ => {}
        }
    }

    let csv_data = csv_data.ok_or_else(|| bad_request("Missing CSV file"))?;
    let solver = match base {
        Some(base) => Solver::new(state.solver.config().with_base(base)),
        None => state.solver,
    };

    let records = read_records(Cursor::new(csv_data)).map_err(reject)?;
    let points: Vec<_> = records.iter().map(|r| r.point()).collect();

    let solution = solver.solve_with_hull(&points).map_err(reject)?;
    let hull = solution.hull.iter().map(|&index| records[index].clone()).collect();

    Ok(Json(UploadResponse {
        total_points: points.len(),
        hull,
        circle: solution.circle,
        execution_time_ms: elapsed_ms(start),
    }))
}

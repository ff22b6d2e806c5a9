use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;

use super::handlers::*;
use crate::config::ServerConfig;
use crate::solver::Solver;

pub fn create_router(config: &ServerConfig) -> Router {
    let state = AppState { solver: Solver::new(config.solver) };

    Router::new()
        .route("/api/health", get(health))
        .route("/api/hull", post(compute_hull))
        .route("/api/circle", post(compute_circle))
        .route("/api/batch", post(compute_batch))
        .route("/api/upload", post(upload_csv))
        .with_state(state)
        .layer(
            ServiceBuilder::new()
                .layer(DefaultBodyLimit::max(config.body_limit_bytes))
                .layer(CorsLayer::permissive()),
        )
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::{header, Request, StatusCode};
    use serde_json::{json, Value};
    use tower::ServiceExt;

    async fn send(request: Request<Body>) -> (StatusCode, Value) {
        let response = create_router(&ServerConfig::default())
            .oneshot(request)
            .await
            .unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    fn post_json(uri: &str, body: Value) -> Request<Body> {
        Request::post(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn test_health() {
        let (status, body) = send(Request::get("/api/health").body(Body::empty()).unwrap()).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
    }

    #[tokio::test]
    async fn test_circle_equatorial_pair() {
        let (status, body) = send(post_json(
            "/api/circle",
            json!({ "points": [{ "lat": 0.0, "lng": 0.0 }, { "lat": 0.0, "lng": 10.0 }] }),
        ))
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["hull_size"], 2);
        let lng = body["circle"]["center"]["lng"].as_f64().unwrap();
        assert!((lng - 5.0).abs() < 1e-9);
        let radius = body["circle"]["radius_meters"].as_f64().unwrap();
        assert!((radius - 555_800.0).abs() < 555_800.0 * 0.005);
    }

    #[tokio::test]
    async fn test_circle_empty_is_null() {
        let (status, body) = send(post_json("/api/circle", json!({ "points": [] }))).await;
        assert_eq!(status, StatusCode::OK);
        assert!(body["circle"].is_null());
        assert_eq!(body["hull_size"], 0);
    }

    #[tokio::test]
    async fn test_circle_invalid_coordinate() {
        let (status, body) =
            send(post_json("/api/circle", json!({ "points": [{ "lat": 120.0, "lng": 0.0 }] }))).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"].as_str().unwrap().contains("Invalid coordinate"));
    }

    #[tokio::test]
    async fn test_request_cannot_lift_hull_bound() {
        let ring: Vec<Value> = (0..200)
            .map(|i| {
                let t = (i as f64) * std::f64::consts::TAU / 200.0;
                json!({ "lat": 45.0 + t.sin(), "lng": 7.0 + t.cos() })
            })
            .collect();
        let (status, body) = send(post_json(
            "/api/circle",
            json!({ "points": ring, "config": { "max_hull_size": null } }),
        ))
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"].as_str().unwrap().contains("Hull too large"));
    }

    #[tokio::test]
    async fn test_hull_with_aliases() {
        let (status, body) = send(post_json(
            "/api/hull",
            json!({ "points": [
                { "latitude": 10.0, "longitude": 10.0 },
                { "latitude": 10.0, "longitude": 10.0 },
                { "latitude": 10.0, "longitude": 10.0 }
            ] }),
        ))
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["hull"].as_array().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_batch() {
        let (status, body) = send(post_json(
            "/api/batch",
            json!({ "sets": [
                [],
                [{ "lat": 48.8566, "lng": 2.3522 }],
                [{ "lat": 95.0, "lng": 0.0 }]
            ] }),
        ))
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["total_sets"], 3);
        assert_eq!(body["failed"], 1);
        assert!(body["results"][0]["circle"].is_null());
        assert_eq!(body["results"][1]["circle"]["radius_meters"], 0.0);
        assert!(body["results"][2]["error"].is_string());
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn test_batch_does_not_stall_other_requests() {
        let sets: Vec<Value> = (0..64)
            .map(|s| {
                let ring: Vec<Value> = (0..16)
                    .map(|i| {
                        let t = (i as f64) * std::f64::consts::TAU / 16.0;
                        json!({ "lat": 40.0 + t.sin(), "lng": (s as f64) + t.cos() })
                    })
                    .collect();
                Value::Array(ring)
            })
            .collect();

        let batch = tokio::spawn(send(post_json("/api/batch", json!({ "sets": sets }))));
        let (status, body) = send(Request::get("/api/health").body(Body::empty()).unwrap()).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");

        let (status, body) = batch.await.unwrap();
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["total_sets"], 64);
        assert_eq!(body["failed"], 0);
        assert_eq!(body["results"].as_array().unwrap().len(), 64);
    }

    #[tokio::test]
    async fn test_upload_csv() {
        let boundary = "geocap-boundary";
        let body = format!(
            "--{b}\r\nContent-Disposition: form-data; name=\"csv\"; filename=\"points.csv\"\r\n\
             Content-Type: text/csv\r\n\r\nlat,lng,name\n0,0,west\n0,10,east\n0,5,middle\n\r\n\
             --{b}\r\nContent-Disposition: form-data; name=\"base\"\r\n\r\ncentroid\r\n--{b}--\r\n",
            b = boundary
        );
        let request = Request::post("/api/upload")
            .header(
                header::CONTENT_TYPE,
                format!("multipart/form-data; boundary={}", boundary),
            )
            .body(Body::from(body))
            .unwrap();

        let (status, body) = send(request).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["total_points"], 3);

        let mut names: Vec<&str> = body["hull"]
            .as_array()
            .unwrap()
            .iter()
            .map(|r| r["name"].as_str().unwrap())
            .collect();
        names.sort();
        assert_eq!(names, vec!["east", "west"]);

        let lng = body["circle"]["center"]["lng"].as_f64().unwrap();
        assert!((lng - 5.0).abs() < 1e-9);
    }

    #[tokio::test]
    async fn test_upload_without_csv() {
        let boundary = "geocap-boundary";
        let body = format!(
            "--{b}\r\nContent-Disposition: form-data; name=\"base\"\r\n\r\npole\r\n--{b}--\r\n",
            b = boundary
        );
        let request = Request::post("/api/upload")
            .header(
                header::CONTENT_TYPE,
                format!("multipart/form-data; boundary={}", boundary),
            )
            .body(Body::from(body))
            .unwrap();

        let (status, body) = send(request).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Missing CSV file");
    }
}

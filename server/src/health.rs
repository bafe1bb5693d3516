use axum::{http::StatusCode, response::Json};
use serde_json::{Value, json};

pub const SERVICE_NAME: &str = "one-park-peak-site";

/// Liveness check.
pub async fn health_handler() -> Result<Json<Value>, StatusCode> {
    Ok(Json(json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "service": SERVICE_NAME,
        "version": env!("CARGO_PKG_VERSION")
    })))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_health_handler_structure() {
        tokio_test::block_on(async {
            let Json(body) = health_handler().await.unwrap();
            assert_eq!(body["status"], "healthy");
            assert_eq!(body["service"], SERVICE_NAME);
            assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
            let timestamp = body["timestamp"].as_str().unwrap();
            assert!(chrono::DateTime::parse_from_rfc3339(timestamp).is_ok());
        });
    }
}

// API response utility functions module

use crate::logger;
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::{Response, StatusCode};
use serde::Serialize;

/// Build JSON response
pub fn json_response<T: Serialize>(status: StatusCode, body: &T) -> Response<Full<Bytes>> {
    let json = match serde_json::to_string(body) {
        Ok(j) => j,
        Err(e) => {
            logger::log_error(&format!("Failed to serialize response: {e}"));
            return Response::builder()
                .status(StatusCode::INTERNAL_SERVER_ERROR)
                .header("Content-Type", "application/json")
                .body(Full::new(Bytes::from(
                    r#"{"error":"Internal server error"}"#,
                )))
                .unwrap_or_else(|_| Response::new(Full::new(Bytes::from("Error"))));
        }
    };

    Response::builder()
        .status(status)
        .header("Content-Type", "application/json")
        .body(Full::new(Bytes::from(json)))
        .unwrap_or_else(|e| {
            logger::log_error(&format!("Failed to build response: {e}"));
            Response::new(Full::new(Bytes::from("Error")))
        })
}

/// 404 Not Found response for unknown API paths
///
/// Advertises the available endpoints under the configured mount prefix.
pub fn not_found(api_prefix: &str) -> Response<Full<Bytes>> {
    let body = serde_json::json!({
        "error": "Not Found",
        "available_endpoints": [
            format!("{api_prefix}/projects"),
            format!("{api_prefix}/contacts?page=N"),
        ],
    });
    Response::builder()
        .status(StatusCode::NOT_FOUND)
        .header("Content-Type", "application/json")
        .body(Full::new(Bytes::from(body.to_string())))
        .unwrap_or_else(|_| Response::new(Full::new(Bytes::from("Not Found"))))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_response_content_type() {
        let resp = json_response(StatusCode::OK, &serde_json::json!({"ok": true}));
        assert_eq!(resp.status(), 200);
        assert_eq!(resp.headers()["Content-Type"], "application/json");
    }

    #[tokio::test]
    async fn test_not_found_lists_endpoints_under_prefix() {
        use http_body_util::BodyExt;

        let resp = not_found("/mock-api");
        assert_eq!(resp.status(), 404);
        assert_eq!(resp.headers()["Content-Type"], "application/json");

        let bytes = resp
            .into_body()
            .collect()
            .await
            .expect("body collects")
            .to_bytes();
        let json: serde_json::Value = serde_json::from_slice(&bytes).expect("body is json");
        assert_eq!(json["available_endpoints"][0], "/mock-api/projects");
        assert_eq!(json["available_endpoints"][1], "/mock-api/contacts?page=N");
    }
}

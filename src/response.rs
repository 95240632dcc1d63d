use chrono::Utc;
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::HeaderMap;
use hyper::Response;
use serde::Serialize;
use serde_json::{Map, Value};

const GMT_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Introspection payload returned for GET on a served path.
#[derive(Debug, Serialize)]
pub struct FixturePayload {
    #[serde(rename = "Server-Hostname")]
    server_hostname: String,
    #[serde(rename = "Current-GMT-Time")]
    current_gmt_time: String,
    #[serde(rename = "Request-Headers")]
    request_headers: Map<String, Value>,
}

pub fn build_get_response(headers: &HeaderMap, hostname: &str) -> Response<Full<Bytes>> {
    let payload = FixturePayload {
        server_hostname: hostname.to_string(),
        current_gmt_time: Utc::now().format(GMT_TIME_FORMAT).to_string(),
        request_headers: collect_headers(headers),
    };
    let body = serde_json::to_vec(&payload).expect("Failed to serialize GET payload");
    build_json_response(body)
}

/// Echo the POST body back as JSON.
///
/// A body that decodes as UTF-8 and parses as JSON is returned verbatim
/// (object, array, or scalar). Anything else is wrapped as
/// `{"data": <body text>}`, decoding invalid UTF-8 lossily.
pub fn build_post_response(body: &[u8]) -> Response<Full<Bytes>> {
    let payload = match std::str::from_utf8(body)
        .ok()
        .and_then(|text| serde_json::from_str::<Value>(text).ok())
    {
        Some(value) => value,
        None => {
            let mut wrapped = Map::new();
            wrapped.insert(
                "data".to_string(),
                Value::String(String::from_utf8_lossy(body).into_owned()),
            );
            Value::Object(wrapped)
        }
    };
    let body = serde_json::to_vec(&payload).expect("Failed to serialize POST payload");
    build_json_response(body)
}

/// 500 sent for paths outside the registry: status line only, no
/// Content-Type, empty body.
pub fn build_unmatched_response() -> Response<Full<Bytes>> {
    Response::builder()
        .status(500)
        .body(Full::new(Bytes::new()))
        .expect("Failed to build 500 response")
}

fn build_json_response(body: Vec<u8>) -> Response<Full<Bytes>> {
    Response::builder()
        .status(200)
        .header("Content-Type", "application/json")
        .body(Full::new(Bytes::from(body)))
        .expect("Failed to build response")
}

/// Flatten request headers to a key/value map in wire order.
/// Repeated header names collapse to the last received value.
fn collect_headers(headers: &HeaderMap) -> Map<String, Value> {
    let mut map = Map::new();
    for (name, value) in headers {
        let text = String::from_utf8_lossy(value.as_bytes()).into_owned();
        map.insert(name.as_str().to_string(), Value::String(text));
    }
    map
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDateTime;
    use http_body_util::BodyExt;

    async fn body_json(resp: Response<Full<Bytes>>) -> Value {
        let bytes = resp.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_get_payload_shape() {
        let mut headers = HeaderMap::new();
        headers.insert("x-test", "ping".parse().unwrap());

        let resp = build_get_response(&headers, "testhost");
        assert_eq!(resp.status(), 200);
        assert_eq!(
            resp.headers().get("content-type").unwrap(),
            "application/json"
        );

        let payload = body_json(resp).await;
        assert_eq!(payload["Server-Hostname"], "testhost");
        assert_eq!(payload["Request-Headers"]["x-test"], "ping");
    }

    #[tokio::test]
    async fn test_gmt_time_format() {
        let resp = build_get_response(&HeaderMap::new(), "testhost");
        let payload = body_json(resp).await;
        let time = payload["Current-GMT-Time"].as_str().unwrap();
        assert!(NaiveDateTime::parse_from_str(time, "%Y-%m-%d %H:%M:%S").is_ok());
    }

    #[tokio::test]
    async fn test_post_echoes_json() {
        let resp = build_post_response(br#"{"x":1}"#);
        assert_eq!(resp.status(), 200);
        let payload = body_json(resp).await;
        assert_eq!(payload, serde_json::json!({"x": 1}));
    }

    #[tokio::test]
    async fn test_post_echoes_json_scalar() {
        let payload = body_json(build_post_response(b"42")).await;
        assert_eq!(payload, serde_json::json!(42));
    }

    #[tokio::test]
    async fn test_post_wraps_plain_text() {
        let payload = body_json(build_post_response(b"notjson")).await;
        assert_eq!(payload, serde_json::json!({"data": "notjson"}));
    }

    #[tokio::test]
    async fn test_post_wraps_empty_body() {
        let payload = body_json(build_post_response(b"")).await;
        assert_eq!(payload, serde_json::json!({"data": ""}));
    }

    #[tokio::test]
    async fn test_post_invalid_utf8_decoded_lossily() {
        let payload = body_json(build_post_response(&[0xff, 0xfe])).await;
        assert_eq!(payload, serde_json::json!({"data": "\u{fffd}\u{fffd}"}));
    }

    #[test]
    fn test_unmatched_response_is_bare() {
        let resp = build_unmatched_response();
        assert_eq!(resp.status(), 500);
        assert!(resp.headers().get("content-type").is_none());
    }

    #[tokio::test]
    async fn test_unmatched_response_empty_body() {
        let resp = build_unmatched_response();
        let bytes = resp.into_body().collect().await.unwrap().to_bytes();
        assert!(bytes.is_empty());
    }

    #[tokio::test]
    async fn test_repeated_headers_collapse_to_last() {
        let mut headers = HeaderMap::new();
        headers.append("x-multi", "one".parse().unwrap());
        headers.append("x-multi", "two".parse().unwrap());

        let payload = body_json(build_get_response(&headers, "testhost")).await;
        assert_eq!(payload["Request-Headers"]["x-multi"], "two");
    }
}

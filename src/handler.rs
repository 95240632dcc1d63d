use crate::config::AppState;
use crate::logger;
use crate::response;
use http_body_util::{BodyExt, Full};
use hyper::body::{Body, Bytes};
use hyper::{Method, Request, Response};
use std::convert::Infallible;
use std::sync::Arc;

/// Map one inbound request to one outbound response.
///
/// Every request-level condition resolves to a response; the configured
/// delay is applied first, unconditionally, so even rejected requests are
/// delayed. The sleep suspends only this handling task.
pub async fn handle_request<B>(
    req: Request<B>,
    state: Arc<AppState>,
) -> Result<Response<Full<Bytes>>, Infallible>
where
    B: Body,
    B::Error: std::fmt::Debug,
{
    logger::log_request(req.method(), req.uri());

    let delay = state.config.delay();
    if !delay.is_zero() {
        tokio::time::sleep(delay).await;
    }

    let path = req.uri().path().to_string();
    if !state.registry.is_served(&path) {
        logger::log_unmatched_path(&path);
        return Ok(response::build_unmatched_response());
    }

    let method = req.method().clone();
    let resp = match method {
        Method::GET => response::build_get_response(req.headers(), &state.hostname),
        Method::POST => {
            // Absent body collects to zero bytes, same as a missing
            // Content-Length.
            let body = match req.into_body().collect().await {
                Ok(collected) => collected.to_bytes(),
                Err(err) => {
                    logger::log_body_error(&err);
                    return Ok(response::build_unmatched_response());
                }
            };
            response::build_post_response(&body)
        }
        // Only GET and POST are registered; anything else is not servable.
        _ => response::build_unmatched_response(),
    };

    Ok(resp)
}

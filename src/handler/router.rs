//! Request routing dispatch module
//!
//! Entry point for HTTP request processing: method validation, route
//! matching, dispatching, and access logging.

use crate::api;
use crate::config::Config;
use crate::handler::static_files;
use crate::http;
use crate::logger::{self, AccessLogEntry};
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::{Method, Request, Response};
use std::convert::Infallible;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Instant;

/// Request context encapsulating the information handlers need
pub struct RequestContext<'a> {
    pub path: &'a str,
    pub query: Option<&'a str>,
    pub is_head: bool,
    pub if_none_match: Option<String>,
    pub range_header: Option<String>,
}

/// Main entry point for HTTP request handling
pub async fn handle_request(
    req: Request<hyper::body::Incoming>,
    config: Arc<Config>,
    remote_addr: SocketAddr,
) -> Result<Response<Full<Bytes>>, Infallible> {
    let started = Instant::now();

    let method = req.method().clone();
    let path = req.uri().path().to_string();
    let query = req.uri().query().map(ToString::to_string);
    let referer = header_value(&req, "referer");
    let user_agent = header_value(&req, "user-agent");

    let response = process_request(&req, &config).await;

    if config.logging.access_log {
        let mut entry = AccessLogEntry::new(
            remote_addr.ip().to_string(),
            method.to_string(),
            path,
        );
        entry.query = query;
        entry.status = response.status().as_u16();
        entry.body_bytes = body_size(&response);
        entry.referer = referer;
        entry.user_agent = user_agent;
        entry.request_time_us = u64::try_from(started.elapsed().as_micros()).unwrap_or(u64::MAX);
        logger::log_access(&entry, &config.logging.access_log_format);
    }

    Ok(response)
}

/// Validate the request and dispatch it to a route
async fn process_request(
    req: &Request<hyper::body::Incoming>,
    config: &Arc<Config>,
) -> Response<Full<Bytes>> {
    // 1. Check HTTP method
    if let Some(resp) = check_http_method(req.method(), config.http.enable_cors) {
        return resp;
    }

    // 2. Check declared body size
    if let Some(resp) = check_body_size(req, config.http.max_body_size) {
        return resp;
    }

    // 3. Extract headers for caching and range requests
    let ctx = RequestContext {
        path: req.uri().path(),
        query: req.uri().query(),
        is_head: *req.method() == Method::HEAD,
        if_none_match: header_value(req, "if-none-match"),
        range_header: header_value(req, "range"),
    };

    route_request(&ctx, config).await
}

fn header_value(req: &Request<hyper::body::Incoming>, name: &str) -> Option<String> {
    req.headers()
        .get(name)
        .and_then(|v| v.to_str().ok())
        .map(ToString::to_string)
}

/// Check HTTP method and return a response for non-GET/HEAD methods
fn check_http_method(method: &Method, enable_cors: bool) -> Option<Response<Full<Bytes>>> {
    match method {
        &Method::GET | &Method::HEAD => None,
        &Method::OPTIONS => Some(http::options(enable_cors)),
        _ => {
            logger::log_warning(&format!("Method not allowed: {method}"));
            Some(http::method_not_allowed())
        }
    }
}

/// Validate Content-Length header and return 413 if exceeded
fn check_body_size(
    req: &Request<hyper::body::Incoming>,
    max_body_size: u64,
) -> Option<Response<Full<Bytes>>> {
    let content_length = req.headers().get("content-length")?;
    content_length.to_str().map_or_else(
        |_| {
            logger::log_warning("Content-Length header contains non-ASCII characters");
            None
        },
        |size_str| match size_str.parse::<u64>() {
            Ok(size) if size > max_body_size => {
                logger::log_error(&format!(
                    "Request body too large: {size} bytes (max: {max_body_size})"
                ));
                Some(http::payload_too_large())
            }
            Err(_) => {
                logger::log_warning(&format!(
                    "Invalid Content-Length value: '{size_str}', skipping size check"
                ));
                None
            }
            _ => None,
        },
    )
}

/// Route request based on path and configuration
async fn route_request(ctx: &RequestContext<'_>, config: &Arc<Config>) -> Response<Full<Bytes>> {
    let routes = &config.routes;

    // 1. Homepage
    if ctx.path == "/" {
        return static_files::serve_file(ctx, &routes.homepage).await;
    }

    // 2. Mock data API
    if let Some(api_path) = strip_mount_prefix(ctx.path, &routes.api_prefix) {
        let response = api::dispatch(api_path, ctx.query, &routes.api_prefix);
        return if ctx.is_head {
            // HEAD gets the same headers without a body
            response.map(|_| Full::new(Bytes::new()))
        } else {
            response
        };
    }

    // 3. Static assets
    if strip_mount_prefix(ctx.path, &routes.static_prefix).is_some() {
        return static_files::serve_asset(ctx, &routes.static_dir, &routes.static_prefix).await;
    }

    http::not_found()
}

/// Match a path against a mount prefix on a segment boundary
///
/// Returns the remainder (starting with '/') on match; `/staticx` does
/// not match the `/static` mount.
fn strip_mount_prefix<'a>(path: &'a str, prefix: &str) -> Option<&'a str> {
    let rest = path.strip_prefix(prefix)?;
    if rest.starts_with('/') {
        Some(rest)
    } else {
        None
    }
}

/// Response body size for access logging
///
/// Taken from the body itself; the JSON builders do not set an explicit
/// Content-Length header.
fn body_size(response: &Response<Full<Bytes>>) -> usize {
    use hyper::body::Body;

    response
        .body()
        .size_hint()
        .exact()
        .and_then(|n| usize::try_from(n).ok())
        .unwrap_or(0)
}

//! Static file serving module
//!
//! Loads the homepage document and assets-directory files from disk and
//! builds responses with MIME, `ETag`, and range handling.

use crate::handler::router::RequestContext;
use crate::http::{self, cache, mime, RangeOutcome};
use crate::logger;
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::Response;
use std::path::{Path, PathBuf};
use tokio::fs;

/// Serve a single configured file (the homepage)
pub async fn serve_file(ctx: &RequestContext<'_>, file_path: &str) -> Response<Full<Bytes>> {
    match load_single_file(file_path).await {
        Some((content, content_type)) => build_static_response(ctx, &content, content_type),
        None => {
            logger::log_warning(&format!("Configured file not found: {file_path}"));
            http::not_found()
        }
    }
}

/// Serve a file from the assets directory
///
/// The request path still carries the mount prefix; files outside the
/// assets directory are never served.
pub async fn serve_asset(
    ctx: &RequestContext<'_>,
    assets_dir: &str,
    mount_prefix: &str,
) -> Response<Full<Bytes>> {
    match load_asset(assets_dir, ctx.path, mount_prefix).await {
        Some((content, content_type)) => build_static_response(ctx, &content, content_type),
        None => http::not_found(),
    }
}

/// Strip the mount prefix and any traversal segments from a request path
///
/// Returns the path relative to the assets directory.
pub fn asset_relative_path(path: &str, mount_prefix: &str) -> String {
    // Remove leading slash and reject directory traversal early
    let clean = path.trim_start_matches('/').replace("..", "");
    let prefix = mount_prefix.trim_matches('/');

    if prefix.is_empty() {
        clean
    } else {
        clean
            .strip_prefix(&format!("{prefix}/"))
            .unwrap_or(&clean)
            .to_string()
    }
}

/// Load an asset from the configured directory
///
/// Returns None when the file is missing or resolves outside the
/// directory (which is also logged).
pub async fn load_asset(
    assets_dir: &str,
    path: &str,
    mount_prefix: &str,
) -> Option<(Vec<u8>, &'static str)> {
    let relative = asset_relative_path(path, mount_prefix);
    if relative.is_empty() {
        // No directory listing
        return None;
    }

    let file_path: PathBuf = Path::new(assets_dir).join(&relative);

    let assets_dir_canonical = match Path::new(assets_dir).canonicalize() {
        Ok(p) => p,
        Err(e) => {
            logger::log_warning(&format!(
                "Assets directory not found or inaccessible '{assets_dir}': {e}"
            ));
            return None;
        }
    };

    // Missing files are a routine 404, not worth a warning
    let Ok(file_path_canonical) = file_path.canonicalize() else {
        return None;
    };
    if !file_path_canonical.starts_with(&assets_dir_canonical) {
        logger::log_warning(&format!(
            "Path traversal attempt blocked: {} -> {}",
            path,
            file_path_canonical.display()
        ));
        return None;
    }
    if !file_path_canonical.is_file() {
        return None;
    }

    let content = match fs::read(&file_path_canonical).await {
        Ok(c) => c,
        Err(e) => {
            logger::log_error(&format!(
                "Failed to read file '{}': {}",
                file_path_canonical.display(),
                e
            ));
            return None;
        }
    };

    let content_type = mime::content_type_for(&file_path_canonical);
    Some((content, content_type))
}

/// Load a single file by configured path
pub async fn load_single_file(file_path: &str) -> Option<(Vec<u8>, &'static str)> {
    let path = Path::new(file_path);
    let content = fs::read(path).await.ok()?;
    Some((content, mime::content_type_for(path)))
}

/// Build the response for loaded file content, honoring conditional and
/// range headers from the request context
fn build_static_response(
    ctx: &RequestContext<'_>,
    data: &[u8],
    content_type: &str,
) -> Response<Full<Bytes>> {
    let etag = cache::etag_for(data);

    if cache::none_match(ctx.if_none_match.as_deref(), &etag) {
        return http::response::not_modified(&etag);
    }

    // The builders drop the body for HEAD while keeping the headers
    match http::parse_range(ctx.range_header.as_deref(), data.len()) {
        RangeOutcome::Partial { start, end } => http::response::partial_response(
            Bytes::from(data[start..=end].to_vec()),
            content_type,
            &etag,
            start,
            end,
            data.len(),
            ctx.is_head,
        ),
        RangeOutcome::Unsatisfiable => http::response::range_not_satisfiable(data.len()),
        RangeOutcome::Full => http::response::file_response(
            Bytes::from(data.to_owned()),
            content_type,
            &etag,
            ctx.is_head,
        ),
    }
}

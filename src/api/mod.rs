// API module entry
// Read-only mock data endpoints backed by fixed literal datasets

pub mod data;
mod handlers;
mod response;

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::Response;

/// Dispatch a request under the API prefix
///
/// `path` is the request path with the configured API prefix already
/// stripped (e.g. "/projects"); `api_prefix` is that prefix, used in the
/// 404 body. Only exact matches are routed; anything else gets the JSON
/// 404.
pub fn dispatch(path: &str, query: Option<&str>, api_prefix: &str) -> Response<Full<Bytes>> {
    match path {
        "/projects" => handlers::handle_projects(),
        "/contacts" => handlers::handle_contacts(query),
        _ => response::not_found(api_prefix),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dispatch_known_routes() {
        assert_eq!(dispatch("/projects", None, "/api").status(), 200);
        assert_eq!(dispatch("/contacts", Some("page=1"), "/api").status(), 200);
    }

    #[test]
    fn test_dispatch_unknown_route() {
        assert_eq!(dispatch("/users", None, "/api").status(), 404);
        assert_eq!(dispatch("/", None, "/api").status(), 404);
        assert_eq!(dispatch("/projects/1", None, "/api").status(), 404);
    }

    #[test]
    fn test_projects_ignores_query_parameters() {
        // Same payload with or without a query string
        assert_eq!(dispatch("/projects", Some("page=9"), "/api").status(), 200);
    }
}

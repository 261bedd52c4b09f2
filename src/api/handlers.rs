//! Mock endpoint handlers module
//!
//! Implements the two read-only endpoints: the project list and the paged
//! contact list. Responses are assembled from the fixed datasets in
//! [`super::data`]; nothing here touches storage.

use hyper::StatusCode;
use serde::Serialize;

use super::data::{self, Contact, Project, CONTACTS_PAGE_SIZE};
use super::response::json_response;
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::Response;

/// Wire shape of `GET /api/projects`
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectsPayload {
    pub projects: &'static [Project],
    pub total_count: usize,
    pub page: u32,
}

/// Wire shape of `GET /api/contacts`
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactsPayload {
    pub contacts: &'static [Contact],
    pub total_count: usize,
    pub page: u32,
}

/// `GET /api/projects`
///
/// Always the full fixed list, page 1. Query parameters are ignored.
pub fn handle_projects() -> Response<Full<Bytes>> {
    let projects = data::projects();
    let payload = ProjectsPayload {
        projects,
        total_count: projects.len(),
        page: 1,
    };
    json_response(StatusCode::OK, &payload)
}

/// `GET /api/contacts?page=N`
///
/// Page selection is an exact match: 1 and 2 return their five contacts,
/// everything else (missing, unparseable, out of range) returns the empty
/// page 0. `totalCount` always reports the full dataset size.
pub fn handle_contacts(query: Option<&str>) -> Response<Full<Bytes>> {
    let page = query_param(query, "page").and_then(|v| v.parse::<u32>().ok());
    json_response(StatusCode::OK, &contacts_page(page))
}

/// Select the contacts slice for a parsed `page` value
fn contacts_page(page: Option<u32>) -> ContactsPayload {
    let all = data::contacts();
    let (contacts, page) = match page {
        Some(1) => (&all[..CONTACTS_PAGE_SIZE], 1),
        Some(2) => (&all[CONTACTS_PAGE_SIZE..], 2),
        _ => (&all[..0], 0),
    };

    ContactsPayload {
        contacts,
        total_count: all.len(),
        page,
    }
}

/// Extract a query parameter value by name from a raw query string
///
/// Values are plain integers here, so no percent-decoding is needed.
fn query_param<'a>(query: Option<&'a str>, name: &str) -> Option<&'a str> {
    query?
        .split('&')
        .filter_map(|pair| pair.split_once('='))
        .find(|(key, _)| *key == name)
        .map(|(_, value)| value)
}

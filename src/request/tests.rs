//! Tests for request parameter handling

use super::*;
use axum::extract::{FromRequestParts, Query};
use axum::http::{Request, Uri};
use std::collections::{BTreeMap, HashMap};
use test_case::test_case;

// ============================================================================
// parse_page_number Tests
// ============================================================================

#[test_case(Some("1"), 1 ; "first page")]
#[test_case(Some("7"), 7 ; "plain integer")]
#[test_case(Some("+3"), 3 ; "explicit plus sign")]
#[test_case(Some("0"), 0 ; "zero is passed through for clamping")]
#[test_case(Some("-4"), -4 ; "negative is passed through for clamping")]
#[test_case(Some("abc"), 1 ; "not a number")]
#[test_case(Some(""), 1 ; "empty value")]
#[test_case(Some("2.5"), 1 ; "decimal")]
#[test_case(Some(" 2"), 1 ; "leading whitespace")]
#[test_case(Some(" 2 "), 1 ; "surrounding whitespace is not trimmed")]
#[test_case(Some("99999999999999999999"), 1 ; "overflow")]
#[test_case(None, 1 ; "missing")]
fn test_parse_page_number(raw: Option<&str>, expected: i64) {
    assert_eq!(parse_page_number(raw), expected);
}

// ============================================================================
// PageRequest Tests
// ============================================================================

#[test]
fn test_hash_map_param() {
    let mut params = HashMap::new();
    params.insert("page".to_string(), "3".to_string());

    assert_eq!(params.param("page").as_deref(), Some("3"));
    assert_eq!(params.param("per_page"), None);
}

#[test]
fn test_btree_map_param() {
    let mut params = BTreeMap::new();
    params.insert("p".to_string(), "12".to_string());

    assert_eq!(params.param("p").as_deref(), Some("12"));
    assert_eq!(params.param("page"), None);
}

#[test]
fn test_query_param() {
    let mut params = HashMap::new();
    params.insert("page".to_string(), "5".to_string());
    let query = Query(params);

    assert_eq!(query.param("page").as_deref(), Some("5"));
}

#[test]
fn test_uri_param() {
    let uri: Uri = "/items?sort=name&page=4".parse().unwrap();
    assert_eq!(uri.param("page").as_deref(), Some("4"));
    assert_eq!(uri.param("sort").as_deref(), Some("name"));
    assert_eq!(uri.param("missing"), None);
}

#[test]
fn test_uri_param_first_value_wins() {
    let uri: Uri = "/items?page=2&page=9".parse().unwrap();
    assert_eq!(uri.param("page").as_deref(), Some("2"));
}

#[test]
fn test_uri_param_is_decoded() {
    let uri: Uri = "/search?q=hello%20world&page=%2B2".parse().unwrap();
    assert_eq!(uri.param("q").as_deref(), Some("hello world"));
    assert_eq!(uri.param("page").as_deref(), Some("+2"));
}

#[test]
fn test_uri_without_query() {
    let uri: Uri = "/items".parse().unwrap();
    assert_eq!(uri.param("page"), None);
}

#[test]
fn test_request_param() {
    let request = Request::builder()
        .uri("/items?page=6")
        .body(())
        .unwrap();
    assert_eq!(request.param("page").as_deref(), Some("6"));
}

// ============================================================================
// PageNumber Extractor Tests
// ============================================================================

async fn extract(uri: &str) -> PageNumber {
    let (mut parts, ()) = Request::builder().uri(uri).body(()).unwrap().into_parts();
    PageNumber::from_request_parts(&mut parts, &()).await.unwrap()
}

#[tokio::test]
async fn test_page_number_extractor() {
    assert_eq!(extract("/items?page=3").await, PageNumber(3));
    assert_eq!(extract("/items?page=-1").await.get(), -1);
}

#[tokio::test]
async fn test_page_number_extractor_defaults_to_first_page() {
    assert_eq!(extract("/items").await, PageNumber(1));
    assert_eq!(extract("/items?page=").await, PageNumber(1));
    assert_eq!(extract("/items?page=last").await, PageNumber(1));
}

//! Pagination behavior of the places client against a mock upstream.

mod common;

use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::atomic::Ordering;

use places_proxy::config::UpstreamConfig;
use places_proxy::places::{FetchError, PlacesClient};

fn upstream_config(addr: SocketAddr, start_page: u32) -> UpstreamConfig {
    UpstreamConfig {
        base_url: format!("http://{addr}/places"),
        start_page,
        request_timeout_secs: 5,
    }
}

#[tokio::test]
async fn test_fetch_walks_all_pages_in_order() {
    let addr: SocketAddr = "127.0.0.1:28411".parse().unwrap();
    let mut pages = HashMap::new();
    pages.insert(210, common::page_body(&[1, 2], Some("more")));
    pages.insert(211, common::page_body(&[3], Some("more")));
    pages.insert(212, common::page_body(&[4, 5], Some("more")));
    pages.insert(213, common::page_body(&[6], None));
    let hits = common::start_mock_places_api(addr, pages).await;

    let client = PlacesClient::new(&upstream_config(addr, 210)).unwrap();
    let places = client.fetch_all().await.unwrap();

    let ids: Vec<i64> = places.iter().map(|p| p.id).collect();
    assert_eq!(ids, [1, 2, 3, 4, 5, 6]);
    assert_eq!(hits.load(Ordering::SeqCst), 4, "one request per page");
}

#[tokio::test]
async fn test_single_page_when_next_is_empty() {
    let addr: SocketAddr = "127.0.0.1:28412".parse().unwrap();
    let mut pages = HashMap::new();
    pages.insert(1, common::page_body(&[10], None));
    let hits = common::start_mock_places_api(addr, pages).await;

    let client = PlacesClient::new(&upstream_config(addr, 1)).unwrap();
    let places = client.fetch_all().await.unwrap();

    assert_eq!(places.len(), 1);
    assert_eq!(places[0].title, "Place 10");
    assert_eq!(hits.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_malformed_page_aborts_with_no_partial_result() {
    let addr: SocketAddr = "127.0.0.1:28413".parse().unwrap();
    let mut pages = HashMap::new();
    pages.insert(1, common::page_body(&[1, 2], Some("more")));
    pages.insert(2, "{this is not json".to_string());
    common::start_mock_places_api(addr, pages).await;

    let client = PlacesClient::new(&upstream_config(addr, 1)).unwrap();
    let err = client.fetch_all().await.unwrap_err();

    assert!(
        matches!(err, FetchError::Decode { page: 2, .. }),
        "unexpected error: {err}"
    );
}

#[tokio::test]
async fn test_error_status_fails_fast() {
    let addr: SocketAddr = "127.0.0.1:28414".parse().unwrap();
    let mut pages = HashMap::new();
    // Page 2 has no canned body, so the mock answers 404.
    pages.insert(1, common::page_body(&[1], Some("more")));
    common::start_mock_places_api(addr, pages).await;

    let client = PlacesClient::new(&upstream_config(addr, 1)).unwrap();
    let err = client.fetch_all().await.unwrap_err();

    match err {
        FetchError::Status { page, status } => {
            assert_eq!(page, 2);
            assert_eq!(status.as_u16(), 404);
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[tokio::test]
async fn test_unreachable_upstream_is_a_request_error() {
    // Nothing listens on this port.
    let addr: SocketAddr = "127.0.0.1:28419".parse().unwrap();
    let client = PlacesClient::new(&upstream_config(addr, 1)).unwrap();

    let err = client.fetch_all().await.unwrap_err();
    assert!(matches!(err, FetchError::Request { page: 1, .. }));
}

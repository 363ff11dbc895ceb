//! Shared helpers for integration testing.

use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

/// Start a mock places API serving canned bodies keyed by page number.
///
/// Pages without a canned body get a 404. Returns a counter of requests
/// served.
pub async fn start_mock_places_api(
    addr: SocketAddr,
    pages: HashMap<u32, String>,
) -> Arc<AtomicU32> {
    let listener = TcpListener::bind(addr).await.unwrap();
    let hits = Arc::new(AtomicU32::new(0));
    let counter = hits.clone();
    let pages = Arc::new(pages);

    tokio::spawn(async move {
        loop {
            match listener.accept().await {
                Ok((mut socket, _)) => {
                    let counter = counter.clone();
                    let pages = pages.clone();
                    tokio::spawn(async move {
                        let mut request = Vec::new();
                        let mut buf = [0u8; 1024];
                        loop {
                            match socket.read(&mut buf).await {
                                Ok(0) | Err(_) => break,
                                Ok(n) => {
                                    request.extend_from_slice(&buf[..n]);
                                    if request.windows(4).any(|w| w == b"\r\n\r\n") {
                                        break;
                                    }
                                }
                            }
                        }

                        counter.fetch_add(1, Ordering::SeqCst);

                        let request = String::from_utf8_lossy(&request);
                        let page = request
                            .lines()
                            .next()
                            .and_then(|line| line.split_whitespace().nth(1))
                            .and_then(|path| path.split("page=").nth(1))
                            .and_then(|raw| raw.split('&').next())
                            .and_then(|raw| raw.parse::<u32>().ok());

                        let response = match page.and_then(|p| pages.get(&p)) {
                            Some(body) => format!(
                                "HTTP/1.1 200 OK\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                                body.len(),
                                body
                            ),
                            None => "HTTP/1.1 404 Not Found\r\nContent-Length: 0\r\nConnection: close\r\n\r\n"
                                .to_string(),
                        };
                        let _ = socket.write_all(response.as_bytes()).await;
                        let _ = socket.shutdown().await;
                    });
                }
                Err(_) => break,
            }
        }
    });

    hits
}

/// Build one page body in the upstream's `{results, next}` shape.
///
/// `next: None` marks the last page.
#[allow(dead_code)]
pub fn page_body(ids: &[i64], next: Option<&str>) -> String {
    let results: Vec<serde_json::Value> = ids
        .iter()
        .map(|id| {
            serde_json::json!({
                "id": id,
                "title": format!("Place {id}"),
                "slug": format!("place-{id}"),
                "address": format!("{id} Main St"),
                "phone": "+7 000 000-00-00",
                "subway": "Center",
                "is_closed": false,
                "location": "msk"
            })
        })
        .collect();

    serde_json::json!({
        "results": results,
        "next": next.unwrap_or(""),
    })
    .to_string()
}

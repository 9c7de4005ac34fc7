//! Shared utilities for integration tests.

#![allow(dead_code)]

use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

use matchday::config::{FootballConfig, RetryConfig, SiteConfig};
use matchday::football::{FootballClient, TableStore};
use matchday::{HttpServer, Shutdown};

pub const TEAMS_BODY: &str = r#"{
    "get": "teams",
    "response": [
        {"team": {"id": 50, "name": "Manchester City", "code": "MAC", "country": "England", "founded": 1880},
         "venue": {"name": "Etihad Stadium", "city": "Manchester"}},
        {"team": {"id": 42, "name": "Arsenal", "code": "ARS", "country": "England", "founded": 1886},
         "venue": {"name": "Emirates Stadium", "city": "London"}}
    ]
}"#;

pub const LEAGUES_BODY: &str = r#"{
    "get": "leagues",
    "response": [
        {"league": {"id": 39, "name": "Premier League", "type": "League"},
         "seasons": [
            {"year": 2022, "start": "2022-08-05", "end": "2023-05-28", "current": false},
            {"year": 2023, "start": "2023-08-11", "end": "2024-05-19", "current": true}
         ]}
    ]
}"#;

/// Start a mock upstream. `f` receives the raw request head and returns
/// `(status, body)`.
pub async fn start_programmable_backend<F, Fut>(f: F) -> SocketAddr
where
    F: Fn(String) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = (u16, String)> + Send + 'static,
{
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let f = Arc::new(f);

    tokio::spawn(async move {
        while let Ok((mut socket, _)) = listener.accept().await {
            let f = f.clone();
            tokio::spawn(async move {
                let mut head = Vec::new();
                let mut buf = [0u8; 4096];
                loop {
                    match socket.read(&mut buf).await {
                        Ok(0) | Err(_) => break,
                        Ok(n) => {
                            head.extend_from_slice(&buf[..n]);
                            if head.windows(4).any(|w| w == b"\r\n\r\n") {
                                break;
                            }
                        }
                    }
                }

                let (status, body) = f(String::from_utf8_lossy(&head).into_owned()).await;
                let status_text = match status {
                    200 => "200 OK",
                    401 => "401 Unauthorized",
                    403 => "403 Forbidden",
                    404 => "404 Not Found",
                    429 => "429 Too Many Requests",
                    500 => "500 Internal Server Error",
                    503 => "503 Service Unavailable",
                    _ => "200 OK",
                };
                let response = format!(
                    "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                    status_text,
                    body.len(),
                    body
                );
                let _ = socket.write_all(response.as_bytes()).await;
                let _ = socket.shutdown().await;
            });
        }
    });

    addr
}

/// Feed configuration pointing at a mock upstream.
pub fn football_config(upstream: SocketAddr) -> FootballConfig {
    FootballConfig {
        enabled: true,
        base_url: format!("http://{upstream}/v3"),
        api_host: Some("api-football-vl.p.rapidapi.com".to_string()),
        api_key: Some("test-key".to_string()),
        request_timeout_secs: 5,
        ..FootballConfig::default()
    }
}

/// Fast retries for tests.
pub fn fast_retries(max_attempts: u32) -> RetryConfig {
    RetryConfig {
        max_attempts,
        base_delay_ms: 10,
        max_delay_ms: 50,
    }
}

/// Serve the site on an ephemeral port.
pub async fn start_site(
    config: SiteConfig,
    store: TableStore,
    client: Option<FootballClient>,
) -> (SocketAddr, Shutdown, tokio::task::JoinHandle<()>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let shutdown = Shutdown::new();
    let server = HttpServer::new(config, store, client);
    let server_shutdown = shutdown.subscribe();

    let handle = tokio::spawn(async move {
        let _ = server.run(listener, server_shutdown).await;
    });

    (addr, shutdown, handle)
}

pub fn http_client() -> reqwest::Client {
    reqwest::Client::builder()
        .pool_max_idle_per_host(0)
        .no_proxy()
        .build()
        .unwrap()
}

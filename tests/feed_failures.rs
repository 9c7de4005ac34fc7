//! Failure handling of the football data feed.

use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;

use matchday::football::{FootballClient, FootballError, TableRefresher, TableStore};
use matchday::views::{TableView, View};

mod common;

#[tokio::test]
async fn test_retry_on_failure() {
    let call_count = Arc::new(AtomicU32::new(0));
    let cc = call_count.clone();
    let upstream = common::start_programmable_backend(move |_| {
        let cc = cc.clone();
        async move {
            if cc.fetch_add(1, Ordering::SeqCst) < 2 {
                (503, r#"{"message":"unavailable"}"#.to_string())
            } else {
                (200, common::TEAMS_BODY.to_string())
            }
        }
    })
    .await;

    let football = common::football_config(upstream);
    let store = TableStore::new();
    let refresher = TableRefresher::new(
        FootballClient::new(&football).unwrap(),
        store.clone(),
        football,
        common::fast_retries(3),
    );

    assert!(refresher.refresh().await, "should eventually succeed after retries");
    assert_eq!(call_count.load(Ordering::SeqCst), 3);
    assert_eq!(store.load().unwrap().teams.len(), 2);
}

#[tokio::test]
async fn test_failure_keeps_previous_snapshot() {
    let healthy = Arc::new(std::sync::atomic::AtomicBool::new(true));
    let h = healthy.clone();
    let upstream = common::start_programmable_backend(move |_| {
        let h = h.clone();
        async move {
            if h.load(Ordering::SeqCst) {
                (200, common::TEAMS_BODY.to_string())
            } else {
                (500, "{}".to_string())
            }
        }
    })
    .await;

    let football = common::football_config(upstream);
    let store = TableStore::new();
    let refresher = TableRefresher::new(
        FootballClient::new(&football).unwrap(),
        store.clone(),
        football,
        common::fast_retries(2),
    );

    assert!(refresher.refresh().await);
    let first = store.load().unwrap();

    healthy.store(false, Ordering::SeqCst);
    assert!(!refresher.refresh().await);

    let current = store.load().unwrap();
    assert_eq!(current.fetched_at, first.fetched_at);
    assert!(TableView::new(store).render().as_str().contains("Arsenal"));
}

#[tokio::test]
async fn test_leagues_non_200_is_empty() {
    let upstream = common::start_programmable_backend(|_| async {
        (403, r#"{"message":"You are not subscribed to this API."}"#.to_string())
    })
    .await;
    let client = FootballClient::new(&common::football_config(upstream)).unwrap();

    let leagues = client.leagues().await.unwrap();
    assert!(leagues.is_empty());
}

#[tokio::test]
async fn test_teams_error_status_and_decode() {
    let upstream = common::start_programmable_backend(|head| async move {
        if head.contains("season=1999") {
            (200, "not json".to_string())
        } else {
            (429, r#"{"message":"Too many requests"}"#.to_string())
        }
    })
    .await;
    let client = FootballClient::new(&common::football_config(upstream)).unwrap();

    match client.teams(39, 2023).await {
        Err(FootballError::Status(429)) => {}
        other => panic!("expected status error, got {other:?}"),
    }
    match client.teams(39, 1999).await {
        Err(FootballError::Decode(_)) => {}
        other => panic!("expected decode error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_credentials_sent_on_every_request() {
    let seen = Arc::new(std::sync::Mutex::new(Vec::new()));
    let s = seen.clone();
    let upstream = common::start_programmable_backend(move |head| {
        s.lock().unwrap().push(head.to_lowercase());
        async { (200, r#"{"response": []}"#.to_string()) }
    })
    .await;
    let client = FootballClient::new(&common::football_config(upstream)).unwrap();

    client.leagues().await.unwrap();
    client.teams(39, 2023).await.unwrap();

    let seen = seen.lock().unwrap();
    assert_eq!(seen.len(), 2);
    for head in seen.iter() {
        assert!(head.contains("x-rapidapi-host: api-football-vl.p.rapidapi.com"));
        assert!(head.contains("x-rapidapi-key: test-key"));
    }
}

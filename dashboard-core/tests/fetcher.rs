use dashboard_core::{AuthStatus, FetchState, Fetcher};
use payloads::requests::{ListFilter, OrderQuery};
use payloads::responses::{Hospital, OrdersPage};
use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;
use test_helpers::{mock, spawn_mock_api};
use tokio::sync::oneshot;

const ORDERS: &str = "/api/operations/orders";
const HOSPITALS: &str = "/api/operations/hospitals";

#[tokio::test]
async fn loads_then_keeps_stale_data_when_refetch_fails() {
    let api = spawn_mock_api().await;
    api.mount_ok_delayed(
        "GET",
        ORDERS,
        mock::orders_page(20, 0),
        Duration::from_millis(50),
    )
    .await;

    let fetcher = Fetcher::<OrdersPage>::new();
    let client = api.client.clone();
    let request = fetcher
        .fetch(AuthStatus::Authenticated, move || async move {
            client.list_orders(&OrderQuery::default()).await
        })
        .expect("authenticated fetch starts");

    let mounted = fetcher.snapshot();
    assert!(mounted.is_loading);
    assert_eq!(mounted.data, FetchState::NotFetched);

    request.await;
    let loaded = fetcher.snapshot();
    assert!(!loaded.is_loading);
    assert_eq!(loaded.error, None);
    let orders = loaded.data.into_option().unwrap().orders;
    assert_eq!(orders, mock::orders_page(20, 0).orders);

    let refresh = fetcher
        .refresh(AuthStatus::Authenticated, || async {
            Err::<OrdersPage, _>("network down")
        })
        .expect("refresh starts");
    assert!(fetcher.is_loading());
    refresh.await;

    assert_eq!(fetcher.data().unwrap().orders, orders);
    assert_eq!(fetcher.error().as_deref(), Some("network down"));
    assert!(!fetcher.is_loading());
}

#[tokio::test]
async fn failed_envelope_becomes_the_error() {
    let api = spawn_mock_api().await;
    api.mount_rejection("GET", HOSPITALS, "Operations API is in maintenance")
        .await;

    let fetcher = Fetcher::<Vec<Hospital>>::new();
    let client = api.client.clone();
    fetcher
        .fetch(AuthStatus::Authenticated, move || async move {
            client.list_hospitals(&ListFilter::default()).await
        })
        .unwrap()
        .await;

    let snapshot = fetcher.snapshot();
    assert_eq!(
        snapshot.error.as_deref(),
        Some("Operations API is in maintenance")
    );
    assert_eq!(snapshot.data, FetchState::NotFetched);
}

#[tokio::test]
async fn newest_fetch_wins_even_if_older_resolves_later() {
    let fetcher = Fetcher::<Vec<u32>>::new();
    let (slow_tx, slow_rx) = oneshot::channel::<Vec<u32>>();
    let (fast_tx, fast_rx) = oneshot::channel::<Vec<u32>>();

    let slow = fetcher
        .fetch(AuthStatus::Authenticated, move || async move {
            slow_rx.await.map_err(|e| e.to_string())
        })
        .unwrap();
    let fast = fetcher
        .fetch(AuthStatus::Authenticated, move || async move {
            fast_rx.await.map_err(|e| e.to_string())
        })
        .unwrap();

    fast_tx.send(vec![2]).unwrap();
    fast.await;
    let _ = slow_tx.send(vec![1]);
    slow.await;

    assert_eq!(fetcher.data(), Some(vec![2]));
    assert_eq!(fetcher.error(), None);
}

#[tokio::test]
async fn superseded_request_is_cancelled_not_awaited() {
    let api = spawn_mock_api().await;
    let hospitals = mock::hospitals();
    let slow_id = hospitals[1].id;
    api.mount_ok_delayed(
        "GET",
        &format!("{HOSPITALS}/{slow_id}"),
        hospitals[1].clone(),
        Duration::from_secs(5),
    )
    .await;
    api.mount_ok("GET", HOSPITALS, hospitals.clone()).await;

    let fetcher = Fetcher::<Vec<Hospital>>::new();
    let local = tokio::task::LocalSet::new();
    local
        .run_until(async {
            let client = api.client.clone();
            let slow = fetcher
                .fetch(AuthStatus::Authenticated, move || async move {
                    client.get_hospital(&slow_id).await.map(|h| vec![h])
                })
                .unwrap();
            let slow = tokio::task::spawn_local(slow);
            tokio::time::sleep(Duration::from_millis(50)).await;

            let client = api.client.clone();
            fetcher
                .fetch(AuthStatus::Authenticated, move || async move {
                    client.list_hospitals(&ListFilter::default()).await
                })
                .unwrap()
                .await;

            tokio::time::timeout(Duration::from_secs(1), slow)
                .await
                .expect("aborted request finishes promptly")
                .unwrap();
        })
        .await;

    assert_eq!(fetcher.data(), Some(hospitals));
}

#[tokio::test]
async fn anonymous_fetch_never_calls_the_producer() {
    let fetcher = Fetcher::<u32>::new();
    let calls = Rc::new(Cell::new(0));

    for _ in 0..3 {
        let calls = calls.clone();
        let started = fetcher.fetch(AuthStatus::Anonymous, move || {
            calls.set(calls.get() + 1);
            async { Ok::<_, String>(1) }
        });
        assert!(started.is_none());
    }

    assert_eq!(calls.get(), 0);
    assert!(!fetcher.is_loading());
}

#[tokio::test]
async fn bootstrapping_waits_then_fetches_once_authenticated() {
    let fetcher = Fetcher::<u32>::new();
    let calls = Rc::new(Cell::new(0));
    let producer = |calls: Rc<Cell<u32>>| {
        move || {
            calls.set(calls.get() + 1);
            async { Ok::<_, String>(42) }
        }
    };

    assert!(
        fetcher
            .fetch(AuthStatus::Bootstrapping, producer(calls.clone()))
            .is_none()
    );
    assert!(fetcher.is_loading());
    assert_eq!(calls.get(), 0);

    fetcher
        .fetch(AuthStatus::Authenticated, producer(calls.clone()))
        .unwrap()
        .await;
    assert_eq!(calls.get(), 1);
    assert_eq!(fetcher.data(), Some(42));
}

#[tokio::test]
async fn refresh_without_session_does_nothing() {
    let fetcher = Fetcher::<u32>::new();
    fetcher
        .fetch(AuthStatus::Authenticated, || async { Ok::<_, String>(1) })
        .unwrap()
        .await;

    let refresh = fetcher.refresh(AuthStatus::Anonymous, || async {
        Ok::<_, String>(2)
    });
    assert!(refresh.is_none());
    assert_eq!(fetcher.data(), Some(1));
    assert!(!fetcher.is_loading());
}

#[tokio::test]
async fn torn_down_fetcher_ignores_results() {
    let fetcher = Fetcher::<u32>::new();
    let (tx, rx) = oneshot::channel::<u32>();
    let request = fetcher
        .fetch(AuthStatus::Authenticated, move || async move {
            rx.await.map_err(|e| e.to_string())
        })
        .unwrap();

    fetcher.teardown();
    let _ = tx.send(9);
    request.await;

    assert_eq!(fetcher.data(), None);
}

#[tokio::test]
async fn listener_hears_start_and_settle() {
    let notified = Rc::new(Cell::new(0));
    let fetcher = {
        let notified = notified.clone();
        Fetcher::<u32>::with_listener(move || notified.set(notified.get() + 1))
    };

    let request = fetcher
        .fetch(AuthStatus::Authenticated, || async { Ok::<_, String>(3) })
        .unwrap();
    assert_eq!(notified.get(), 1);
    request.await;
    assert_eq!(notified.get(), 2);
}

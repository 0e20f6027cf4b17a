use dashboard_core::mutation::MUTATION_BUSY;
use dashboard_core::Mutator;
use payloads::requests::RejectRequest;
use payloads::responses::Hospital;
use payloads::{ApprovalStatus, HospitalId};
use test_helpers::{mock, spawn_mock_api};
use tokio::sync::oneshot;

#[tokio::test]
async fn approve_returns_updated_hospital() {
    let api = spawn_mock_api().await;
    let mut hospital = mock::hospitals()[1].clone();
    hospital.status = ApprovalStatus::Approved;
    api.mount_ok(
        "POST",
        &format!("/api/operations/hospitals/{}/approve", hospital.id),
        hospital.clone(),
    )
    .await;

    let mutator = Mutator::<Hospital>::new();
    let client = api.client.clone();
    let outcome = mutator
        .mutate(
            |id| async move { client.approve_hospital(&id).await },
            hospital.id,
        )
        .await;

    assert_eq!(outcome, Ok(hospital.clone()));
    let snapshot = mutator.snapshot();
    assert_eq!(snapshot.data, Some(hospital));
    assert!(!snapshot.is_loading);
    assert_eq!(snapshot.error, None);
}

#[tokio::test]
async fn server_rejection_is_returned_not_raised() {
    let api = spawn_mock_api().await;
    let hospital = mock::hospitals()[0].clone();
    api.mount_rejection(
        "POST",
        &format!("/api/operations/hospitals/{}/reject", hospital.id),
        "Approved hospitals must be suspended instead",
    )
    .await;

    let mutator = Mutator::<Hospital>::new();
    let client = api.client.clone();
    let request = RejectRequest::new("duplicate registration").unwrap();
    let outcome = mutator
        .mutate(
            |(id, request): (HospitalId, RejectRequest)| async move {
                client.reject_hospital(&id, &request).await
            },
            (hospital.id, request),
        )
        .await;

    let expected = "Approved hospitals must be suspended instead";
    assert_eq!(outcome, Err(expected.to_string()));
    assert_eq!(mutator.snapshot().error.as_deref(), Some(expected));
    assert!(!mutator.is_loading());
}

#[tokio::test]
async fn unauthorized_status_surfaces_message() {
    let api = spawn_mock_api().await;
    let rider = mock::riders()[2].clone();
    api.mount_status(
        "POST",
        &format!("/api/operations/riders/{}/approve", rider.id),
        401,
        "Session expired",
    )
    .await;

    let mutator = Mutator::new();
    let client = api.anonymous_client();
    let outcome = mutator
        .mutate(|id| async move { client.approve_rider(&id).await }, rider.id)
        .await;
    assert_eq!(outcome, Err("Session expired".to_string()));
}

#[tokio::test]
async fn sequential_calls_do_not_interleave() {
    let mutator = Mutator::<u32>::new();

    let first = mutator
        .mutate(|_: ()| async { Err::<u32, _>("boom") }, ())
        .await;
    assert_eq!(first, Err("boom".to_string()));
    let after_first = mutator.snapshot();
    assert!(!after_first.is_loading);
    assert_eq!(after_first.error.as_deref(), Some("boom"));

    let observer = mutator.clone();
    let second = mutator
        .mutate(
            move |n: u32| async move {
                let during = observer.snapshot();
                assert!(during.is_loading);
                assert_eq!(during.error, None);
                Ok::<_, String>(n * 2)
            },
            21,
        )
        .await;
    assert_eq!(second, Ok(42));
    assert_eq!(mutator.snapshot().data, Some(42));
}

#[tokio::test]
async fn overlapping_call_is_refused_without_touching_state() {
    let mutator = Mutator::<u32>::new();
    let (tx, rx) = oneshot::channel::<u32>();

    let first = mutator.mutate(
        |rx: oneshot::Receiver<u32>| async move {
            rx.await.map_err(|e| e.to_string())
        },
        rx,
    );
    let second = mutator.mutate(|_: ()| async { Ok::<u32, String>(2) }, ());
    let release = async {
        tokio::task::yield_now().await;
        tx.send(1).unwrap();
    };

    let (first, second, ()) = tokio::join!(first, second, release);
    assert_eq!(first, Ok(1));
    assert_eq!(second, Err(MUTATION_BUSY.to_string()));
    assert_eq!(mutator.snapshot().data, Some(1));
}

#[tokio::test]
async fn dropped_call_frees_the_handle() {
    let mutator = Mutator::<u32>::new();

    let timed_out = tokio::time::timeout(
        std::time::Duration::from_millis(20),
        mutator.mutate(
            |_: ()| async {
                std::future::pending::<()>().await;
                Ok::<u32, String>(1)
            },
            (),
        ),
    )
    .await;
    assert!(timed_out.is_err());
    assert!(!mutator.is_loading());
    assert_eq!(mutator.snapshot().error, None);

    let next = mutator
        .mutate(|_: ()| async { Ok::<u32, String>(2) }, ())
        .await;
    assert_eq!(next, Ok(2));
}

use payloads::requests::{
    FeatureToggle, ListFilter, OrderQuery, RejectRequest, StatusUpdate,
};
use payloads::{ApprovalStatus, ClientError, OrderStatus, Urgency};
use std::collections::HashMap;
use test_helpers::{TEST_TOKEN, mock, spawn_mock_api};

#[tokio::test]
async fn requests_carry_the_bearer_token() -> anyhow::Result<()> {
    let api = spawn_mock_api().await;
    api.mount_ok(
        "GET",
        "/api/operations/dashboard/stats",
        mock::dashboard_stats(),
    )
    .await;

    let stats = api.client.dashboard_stats().await?;
    assert_eq!(stats, mock::dashboard_stats());

    let requests = api.requests_to("/api/operations/dashboard/stats").await;
    assert_eq!(requests.len(), 1);
    let auth = requests[0].headers.get("authorization").unwrap();
    assert_eq!(auth.to_str()?, format!("Bearer {TEST_TOKEN}"));
    Ok(())
}

#[tokio::test]
async fn anonymous_client_sends_no_token() {
    let api = spawn_mock_api().await;
    // Only matches when the token is present, so an anonymous call 404s.
    api.mount_ok("GET", "/api/operations/riders", mock::riders())
        .await;

    let client = api.anonymous_client();
    assert!(!client.has_token());
    let err = client
        .list_riders(&ListFilter::default())
        .await
        .unwrap_err();
    assert!(matches!(err, ClientError::Api(status, _) if status == 404));

    let requests = api.requests_to("/api/operations/riders").await;
    assert!(requests[0].headers.get("authorization").is_none());
}

#[tokio::test]
async fn list_filter_becomes_query_string() -> anyhow::Result<()> {
    let api = spawn_mock_api().await;
    api.mount_ok("GET", "/api/operations/hospitals", mock::hospitals())
        .await;

    let filter = ListFilter {
        status: Some("pending".into()),
        search: None,
    };
    api.client.list_hospitals(&filter).await?;

    let request = &api.requests_to("/api/operations/hospitals").await[0];
    let query: HashMap<_, _> = request.url.query_pairs().into_owned().collect();
    assert_eq!(query.get("status").map(String::as_str), Some("pending"));
    assert!(!query.contains_key("search"));
    Ok(())
}

#[tokio::test]
async fn order_query_is_sent_in_full() -> anyhow::Result<()> {
    let api = spawn_mock_api().await;
    api.mount_ok("GET", "/api/operations/orders", mock::orders_page(20, 20))
        .await;

    let query = OrderQuery::default()
        .with_filters(
            Some(OrderStatus::InTransit),
            Some(Urgency::Stat),
            Some("ORD-00".into()),
        )
        .next_page();
    let page = api.client.list_orders(&query).await?;
    assert_eq!(page.offset, 20);
    assert!(!page.has_next());

    let request = &api.requests_to("/api/operations/orders").await[0];
    let sent: HashMap<_, _> = request.url.query_pairs().into_owned().collect();
    assert_eq!(sent["limit"], "20");
    assert_eq!(sent["offset"], "20");
    assert_eq!(sent["sort_by"], "created_at");
    assert_eq!(sent["sort_order"], "desc");
    assert_eq!(sent["status"], "in_transit");
    assert_eq!(sent["urgency"], "stat");
    assert_eq!(sent["search"], "ORD-00");
    assert!(!sent.contains_key("date_from"));
    Ok(())
}

#[tokio::test]
async fn reject_posts_trimmed_reason() -> anyhow::Result<()> {
    let api = spawn_mock_api().await;
    let center = mock::collection_centers()[1].clone();
    let route =
        format!("/api/operations/collection-centers/{}/reject", center.id);
    api.mount_ok("POST", &route, center.clone()).await;

    let reason = RejectRequest::new("  Address could not be verified ")
        .map_err(anyhow::Error::msg)?;
    api.client.reject_collection_center(&center.id, &reason).await?;

    let body: RejectRequest = api.requests_to(&route).await[0].body_json()?;
    assert_eq!(body.reason, "Address could not be verified");
    Ok(())
}

#[tokio::test]
async fn status_and_feature_changes_use_patch() -> anyhow::Result<()> {
    let api = spawn_mock_api().await;
    let hospital = mock::hospitals()[0].clone();
    let status_route =
        format!("/api/operations/hospitals/{}/status", hospital.id);
    let feature_route =
        format!("/api/operations/hospitals/{}/features", hospital.id);
    api.mount_ok("PATCH", &status_route, hospital.clone()).await;
    api.mount_ok("PATCH", &feature_route, hospital.clone()).await;

    let update =
        StatusUpdate::new(ApprovalStatus::Suspended).with_note("Audit pending");
    api.client.update_hospital_status(&hospital.id, &update).await?;
    let toggle = FeatureToggle {
        feature: "bulk_orders".into(),
        enabled: true,
    };
    api.client.toggle_hospital_feature(&hospital.id, &toggle).await?;

    let sent: serde_json::Value =
        api.requests_to(&status_route).await[0].body_json()?;
    assert_eq!(
        sent,
        serde_json::json!({"status": "suspended", "note": "Audit pending"})
    );
    let sent: FeatureToggle =
        api.requests_to(&feature_route).await[0].body_json()?;
    assert_eq!(sent, toggle);
    Ok(())
}

#[tokio::test]
async fn detail_endpoints_fetch_by_id() -> anyhow::Result<()> {
    let api = spawn_mock_api().await;
    let hospital = mock::hospitals()[2].clone();
    let center = mock::collection_centers()[0].clone();
    let rider = mock::riders()[1].clone();
    let order = mock::orders()[3].clone();
    let hospital_route = format!("/api/operations/hospitals/{}", hospital.id);
    let center_route =
        format!("/api/operations/collection-centers/{}", center.id);
    let rider_route = format!("/api/operations/riders/{}", rider.id);
    let order_route = format!("/api/operations/orders/{}", order.id);
    api.mount_ok("GET", &hospital_route, hospital.clone()).await;
    api.mount_ok("GET", &center_route, center.clone()).await;
    api.mount_ok("GET", &rider_route, rider.clone()).await;
    api.mount_ok("GET", &order_route, order.clone()).await;

    assert_eq!(api.client.get_hospital(&hospital.id).await?, hospital);
    assert_eq!(api.client.get_collection_center(&center.id).await?, center);
    assert_eq!(api.client.get_rider(&rider.id).await?, rider);
    assert_eq!(api.client.get_order(&order.id).await?, order);

    for route in [&hospital_route, &center_route, &rider_route, &order_route] {
        assert_eq!(api.requests_to(route).await.len(), 1, "{route}");
    }
    Ok(())
}

#[tokio::test]
async fn unsuccessful_envelope_is_a_rejection() {
    let api = spawn_mock_api().await;
    let order = mock::orders()[0].clone();
    let route = format!("/api/operations/orders/{}/status", order.id);
    api.mount_rejection("PATCH", &route, "Order already delivered")
        .await;

    let update = StatusUpdate::new(OrderStatus::Cancelled);
    let err = api
        .client
        .update_order_status(&order.id, &update)
        .await
        .unwrap_err();
    assert!(matches!(err, ClientError::Rejected(_)));
    assert_eq!(err.to_string(), "Order already delivered");
}

#[tokio::test]
async fn expired_session_is_flagged() {
    let api = spawn_mock_api().await;
    api.mount_status("GET", "/api/auth/me", 401, "Token expired")
        .await;

    let err = api.client.operator_profile().await.unwrap_err();
    assert!(err.is_unauthorized());
    assert_eq!(err.to_string(), "Token expired");
}

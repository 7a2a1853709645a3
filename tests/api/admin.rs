use crate::helpers::spawn_app;

#[tokio::test]
async fn listing_subscriptions_requires_authentication() {
    // arrange
    let app = spawn_app().await;

    // act
    let response = reqwest::Client::new()
        .get(&format!("{}/subscriptions", &app.address))
        .send()
        .await
        .expect("Failed to execute request.");

    // assert
    assert_eq!(401, response.status().as_u16());
    assert_eq!(
        response.headers()["WWW-Authenticate"],
        r#"Basic realm="subscriptions""#
    );
}

#[tokio::test]
async fn listing_subscriptions_rejects_invalid_credentials() {
    // arrange
    let app = spawn_app().await;

    // act
    let response = reqwest::Client::new()
        .get(&format!("{}/subscriptions", &app.address))
        .basic_auth(&app.admin_username, Some("definitely-not-the-password"))
        .send()
        .await
        .expect("Failed to execute request.");

    // assert
    assert_eq!(401, response.status().as_u16());
}

#[tokio::test]
async fn listing_returns_active_subscriptions_most_recent_first() {
    // arrange
    let app = spawn_app().await;
    for email in &["first%40gmail.com", "second%40gmail.com", "third%40gmail.com"] {
        app.post_subscriptions(format!("email={}", email)).await;
    }

    // act
    let response = app.get_subscriptions("?limit=1&offset=0").await;

    // assert
    assert_eq!(200, response.status().as_u16());
    let page: serde_json::Value = response.json().await.unwrap();
    assert_eq!(page["total"], serde_json::json!(3));
    let subscriptions = page["subscriptions"].as_array().unwrap();
    assert_eq!(subscriptions.len(), 1);
    assert_eq!(subscriptions[0]["email"], "third@gmail.com");
}

#[tokio::test]
async fn listing_excludes_inactive_subscriptions() {
    // arrange
    let app = spawn_app().await;
    app.post_subscriptions("email=active%40gmail.com".into()).await;
    app.post_subscriptions("email=gone%40gmail.com".into()).await;
    app.post_unsubscribe("email=gone%40gmail.com".into()).await;

    // act
    let page: serde_json::Value = app.get_subscriptions("").await.json().await.unwrap();

    // assert
    assert_eq!(page["total"], serde_json::json!(1));
    let subscriptions = page["subscriptions"].as_array().unwrap();
    assert_eq!(subscriptions.len(), 1);
    assert_eq!(subscriptions[0]["email"], "active@gmail.com");
}

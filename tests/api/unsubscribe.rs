use crate::helpers::spawn_app;
use diesel::{QueryDsl, RunQueryDsl};
use infolettre::models::Subscription;
use infolettre::schema::newsletter_subscriptions::dsl::*;

#[tokio::test]
async fn unsubscribe_deactivates_an_active_subscription() {
    // arrange
    let app = spawn_app().await;
    app.post_subscriptions("email=ursula_le_guin%40gmail.com".into())
        .await;

    // act
    let response: serde_json::Value = app
        .post_unsubscribe("email=ursula_le_guin%40gmail.com".into())
        .await
        .json()
        .await
        .unwrap();

    // assert
    assert_eq!(response["success"], serde_json::json!(true));
    assert_eq!(response["message"], "Vous avez été désabonné avec succès.");

    let saved = newsletter_subscriptions
        .first::<Subscription>(&app.db_connection)
        .expect("Result set was empty.");
    assert!(!saved.is_active);
}

#[tokio::test]
async fn unsubscribe_matches_emails_case_insensitively() {
    // arrange
    let app = spawn_app().await;
    app.post_subscriptions("email=ursula_le_guin%40gmail.com".into())
        .await;

    // act
    let response: serde_json::Value = app
        .post_unsubscribe("email=Ursula_Le_Guin%40Gmail.COM".into())
        .await
        .json()
        .await
        .unwrap();

    // assert
    assert_eq!(response["success"], serde_json::json!(true));

    let saved = newsletter_subscriptions
        .first::<Subscription>(&app.db_connection)
        .expect("Result set was empty.");
    assert!(!saved.is_active);
}

#[tokio::test]
async fn unsubscribing_an_unknown_email_is_declined_and_stores_nothing() {
    // arrange
    let app = spawn_app().await;

    // act
    let response: serde_json::Value = app
        .post_unsubscribe("email=nobody%40gmail.com".into())
        .await
        .json()
        .await
        .unwrap();

    // assert
    assert_eq!(response["success"], serde_json::json!(false));
    assert_eq!(response["message"], "Adresse email non trouvée.");

    let count = newsletter_subscriptions
        .count()
        .get_result::<i64>(&app.db_connection)
        .unwrap();
    assert_eq!(count, 0);
}

#[tokio::test]
async fn unsubscribe_is_idempotent() {
    // arrange
    let app = spawn_app().await;
    app.post_subscriptions("email=ursula_le_guin%40gmail.com".into())
        .await;

    // act
    let first: serde_json::Value = app
        .post_unsubscribe("email=ursula_le_guin%40gmail.com".into())
        .await
        .json()
        .await
        .unwrap();
    let second: serde_json::Value = app
        .post_unsubscribe("email=ursula_le_guin%40gmail.com".into())
        .await
        .json()
        .await
        .unwrap();

    // assert: deactivating an inactive record still succeeds
    assert_eq!(first["success"], serde_json::json!(true));
    assert_eq!(second["success"], serde_json::json!(true));
}

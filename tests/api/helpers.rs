use diesel::prelude::*;
use diesel::{Connection, PgConnection};
use infolettre::configuration::{get_configuration, Settings};
use infolettre::startup::Application;
use infolettre::telemetry::{get_subscriber, init_subscriber};
use once_cell::sync::Lazy;
use secrecy::ExposeSecret;
use uuid::Uuid;

static TRACING: Lazy<()> = Lazy::new(|| {
    let default_filter_level = "info".into();
    let subscriber_name = "test".into();
    if std::env::var("TEST_LOG").is_ok() {
        let subscriber = get_subscriber(subscriber_name, default_filter_level, std::io::stdout);
        init_subscriber(subscriber);
    } else {
        let subscriber = get_subscriber(subscriber_name, default_filter_level, std::io::sink);
        init_subscriber(subscriber);
    }
});

pub struct TestApp {
    pub address: String,
    pub db_connection: PgConnection,
    pub admin_username: String,
    pub admin_password: String,
}

impl TestApp {
    pub async fn post_subscriptions(&self, body: String) -> reqwest::Response {
        reqwest::Client::new()
            .post(&format!("{}/subscriptions", &self.address))
            .header("Content-Type", "application/x-www-form-urlencoded")
            .body(body)
            .send()
            .await
            .expect("Failed to execute request.")
    }

    pub async fn post_unsubscribe(&self, body: String) -> reqwest::Response {
        reqwest::Client::new()
            .post(&format!("{}/subscriptions/unsubscribe", &self.address))
            .header("Content-Type", "application/x-www-form-urlencoded")
            .body(body)
            .send()
            .await
            .expect("Failed to execute request.")
    }

    pub async fn get_subscriptions(&self, query: &str) -> reqwest::Response {
        reqwest::Client::new()
            .get(&format!("{}/subscriptions{}", &self.address, query))
            .basic_auth(&self.admin_username, Some(&self.admin_password))
            .send()
            .await
            .expect("Failed to execute request.")
    }
}

pub async fn spawn_app() -> TestApp {
    Lazy::force(&TRACING);

    let configuration = {
        let mut c = get_configuration().expect("Failed to read configuration.");
        c.application.port = None;
        c.database.database_name = Uuid::new_v4().to_string();
        c
    };

    let db_connection = setup_database(&configuration);

    let app = Application::build(&configuration).await.unwrap();
    let port = app.port;
    let _ = tokio::spawn(app.server.launch());
    TestApp {
        address: format!("http://127.0.0.1:{}", port.get().await),
        db_connection,
        admin_username: configuration.application.admin_username.clone(),
        admin_password: configuration
            .application
            .admin_password
            .expose_secret()
            .clone(),
    }
}

fn setup_database(configuration: &Settings) -> PgConnection {
    let connection = connect_without_database(configuration);

    diesel::sql_query(format!(
        "CREATE DATABASE \"{}\"",
        configuration.database.database_name
    ))
    .execute(&connection)
    .unwrap();

    let connection = connect_to_database(configuration);

    diesel_migrations::run_pending_migrations(&connection).unwrap();
    connection
}

fn connect_to_database(configuration: &Settings) -> PgConnection {
    let connection_string = configuration.database.connection_string();
    PgConnection::establish(connection_string.expose_secret())
        .expect("Failed to connect to Postgres.")
}

fn connect_without_database(configuration: &Settings) -> PgConnection {
    let connection_string = configuration.database.connection_string_without_database();
    PgConnection::establish(connection_string.expose_secret())
        .expect("Failed to connect to Postgres.")
}

use crate::catchers::*;
use crate::configuration::Settings;
use crate::guards::AdminCredentials;
use crate::port_saver;
use crate::port_saver::Port;
use crate::routes::*;
use rocket::figment::Figment;
use rocket::{Config, Ignite, Rocket};
use rocket_sync_db_pools::database;
use secrecy::ExposeSecret;

#[database("newsletter")]
pub struct NewsletterDbConn(diesel::PgConnection);

pub struct Application {
    pub server: Rocket<Ignite>,
    pub port: Port,
}

impl Application {
    pub async fn build(configuration: &Settings) -> Result<Application, rocket::Error> {
        let (port_saver, port) = port_saver::create_pair();
        let figment = Figment::from(Config {
            port: configuration.application.port.unwrap_or(0),
            address: configuration.application.host,
            ..Config::debug_default()
        })
        .merge((
            "databases.newsletter.url",
            configuration.database.connection_string().expose_secret().clone(),
        ));

        rocket::custom(figment)
            .attach(NewsletterDbConn::fairing())
            .attach(port_saver)
            .manage(AdminCredentials {
                username: configuration.application.admin_username.clone(),
                password: configuration.application.admin_password.clone(),
            })
            .mount(
                "/",
                routes![
                    health_check::health_check,
                    subscribe,
                    unsubscribe::unsubscribe,
                    list_subscriptions
                ],
            )
            .register(
                "/",
                catchers![
                    unprocessable_entity_to_bad_request,
                    unauthorized_request_credentials
                ],
            )
            .ignite()
            .await
            .map(|server| Application { server, port })
    }
}

use infolettre::configuration::get_configuration;
use infolettre::startup::Application;
use infolettre::telemetry::{get_subscriber, init_subscriber};

#[rocket::main]
async fn main() -> Result<(), rocket::Error> {
    let subscriber = get_subscriber("infolettre".into(), "info".into(), std::io::stdout);
    init_subscriber(subscriber);

    let configuration = get_configuration().expect("Failed to read configuration.");
    Application::build(&configuration).await?.server.launch().await
}

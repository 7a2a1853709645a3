use crate::guards::BasicAuth;
use anyhow::anyhow;
use rocket::http::Status;
use rocket::outcome::{try_outcome, IntoOutcome};
use rocket::request::{FromRequest, Outcome};
use rocket::Request;
use secrecy::{ExposeSecret, Secret};

/// Credentials the listing endpoint is checked against, loaded from
/// configuration at startup and managed as Rocket state.
pub struct AdminCredentials {
    pub username: String,
    pub password: Secret<String>,
}

pub struct Admin {
    pub username: String,
    // prevents construction outside of this module
    _private: (),
}

#[async_trait]
impl<'r> FromRequest<'r> for Admin {
    type Error = anyhow::Error;

    async fn from_request(request: &'r Request<'_>) -> Outcome<Self, Self::Error> {
        let basic_auth = try_outcome!(request.guard::<BasicAuth>().await.map_failure(|_| (
            Status::Unauthorized,
            anyhow!("User has not been authenticated.")
        )));
        let credentials = try_outcome!(request
            .rocket()
            .state::<AdminCredentials>()
            .ok_or_else(|| anyhow!("Admin credentials are not configured."))
            .into_outcome(Status::InternalServerError));

        validate(basic_auth, credentials).into_outcome(Status::Unauthorized)
    }
}

fn validate(
    basic_auth: BasicAuth,
    credentials: &AdminCredentials,
) -> Result<Admin, anyhow::Error> {
    let username_matches = basic_auth.username == credentials.username;
    let password_matches =
        basic_auth.password.expose_secret() == credentials.password.expose_secret();
    if username_matches && password_matches {
        Ok(Admin {
            username: basic_auth.username,
            _private: (),
        })
    } else {
        Err(anyhow!("Invalid username or password."))
    }
}

use rocket::outcome::Outcome::Success;
use rocket::request::{FromRequest, Outcome};
use rocket::Request;

/// Diagnostic strings captured alongside a subscription. Stored opaquely,
/// never validated.
pub struct ClientMetadata {
    pub user_agent: Option<String>,
    pub ip_address: String,
}

#[async_trait]
impl<'r> FromRequest<'r> for ClientMetadata {
    type Error = std::convert::Infallible;

    async fn from_request(request: &'r Request<'_>) -> Outcome<Self, Self::Error> {
        Success(from_request_headers(request))
    }
}

fn from_request_headers(request: &Request) -> ClientMetadata {
    let user_agent = request
        .headers()
        .get_one("User-Agent")
        .map(|ua| ua.to_string());

    // First forwarded-for hop, then the reverse-proxy header, then the
    // socket peer address.
    let ip_address = request
        .headers()
        .get_one("X-Forwarded-For")
        .and_then(|v| v.split(',').next())
        .map(|ip| ip.trim().to_string())
        .or_else(|| {
            request
                .headers()
                .get_one("X-Real-IP")
                .map(|ip| ip.to_string())
        })
        .or_else(|| request.client_ip().map(|ip| ip.to_string()))
        .unwrap_or_else(|| "unknown".to_string());

    ClientMetadata {
        user_agent,
        ip_address,
    }
}

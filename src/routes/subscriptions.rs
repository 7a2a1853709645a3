use crate::domain::{NewSubscription, SourceTag, SubscriberEmail};
use crate::guards::ClientMetadata;
use crate::routes::SubscriptionResult;
use crate::startup::NewsletterDbConn;
use crate::store;
use crate::store::SubscribeOutcome;
use rocket::form::Form;
use rocket::serde::json::Json;
use uuid::Uuid;

pub const MSG_INVALID_EMAIL: &str = "Veuillez entrer une adresse email valide.";
pub const MSG_INVALID_SOURCE: &str = "Données invalides.";
pub const MSG_SUBSCRIBED: &str =
    "Merci pour votre abonnement! Vous recevrez bientôt nos dernières actualités.";
pub const MSG_REACTIVATED: &str = "Votre abonnement a été réactivé avec succès!";
pub const MSG_ALREADY_SUBSCRIBED: &str =
    "Cette adresse email est déjà abonnée à notre newsletter.";
pub const MSG_SUBSCRIBE_FAILED: &str = "Une erreur est survenue. Veuillez réessayer plus tard.";

#[derive(FromForm)]
pub struct SubscribeForm {
    email: String,
    source: Option<String>,
}

impl TryFrom<(SubscribeForm, ClientMetadata)> for NewSubscription {
    type Error = &'static str;

    fn try_from((form, metadata): (SubscribeForm, ClientMetadata)) -> Result<Self, Self::Error> {
        let email = SubscriberEmail::parse(form.email).map_err(|_| MSG_INVALID_EMAIL)?;
        let source = SourceTag::parse(form.source).map_err(|_| MSG_INVALID_SOURCE)?;
        Ok(NewSubscription {
            email,
            source,
            user_agent: metadata.user_agent,
            ip_address: Some(metadata.ip_address),
        })
    }
}

#[tracing::instrument(
    name = "Adding a newsletter subscriber",
    skip(form, conn, metadata),
    fields(
        request_id = %Uuid::new_v4(),
        subscriber_email = %form.email
    )
)]
#[post("/subscriptions", data = "<form>")]
pub async fn subscribe(
    form: Form<SubscribeForm>,
    conn: NewsletterDbConn,
    metadata: ClientMetadata,
) -> Json<SubscriptionResult> {
    let new_subscription: NewSubscription =
        match (form.into_inner(), metadata).try_into() {
            Ok(subscription) => subscription,
            Err(message) => return Json(SubscriptionResult::declined(message)),
        };

    let outcome = conn
        .run(move |c| store::subscribe(c, &new_subscription))
        .await;

    Json(match outcome {
        Ok(SubscribeOutcome::Created(subscription)) => {
            SubscriptionResult::accepted(MSG_SUBSCRIBED, subscription)
        }
        Ok(SubscribeOutcome::Reactivated(subscription)) => {
            SubscriptionResult::accepted(MSG_REACTIVATED, subscription)
        }
        Ok(SubscribeOutcome::AlreadyActive) => {
            SubscriptionResult::declined(MSG_ALREADY_SUBSCRIBED)
        }
        // Operators get the detail through tracing; the caller only ever
        // sees the generic retry message.
        Err(e) => {
            tracing::error!("Failed to store the subscription: {:?}", e);
            SubscriptionResult::declined(MSG_SUBSCRIBE_FAILED)
        }
    })
}

use crate::domain::SubscriberEmail;
use crate::routes::{SubscriptionResult, MSG_INVALID_EMAIL};
use crate::startup::NewsletterDbConn;
use crate::store;
use rocket::form::Form;
use rocket::serde::json::Json;
use uuid::Uuid;

pub const MSG_UNSUBSCRIBED: &str = "Vous avez été désabonné avec succès.";
pub const MSG_NOT_FOUND: &str = "Adresse email non trouvée.";
pub const MSG_UNSUBSCRIBE_FAILED: &str =
    "Une erreur est survenue lors du désabonnement.";

#[derive(FromForm)]
pub struct UnsubscribeForm {
    email: String,
}

#[tracing::instrument(
    name = "Unsubscribing a newsletter subscriber",
    skip(form, conn),
    fields(
        request_id = %Uuid::new_v4(),
        subscriber_email = %form.email
    )
)]
#[post("/subscriptions/unsubscribe", data = "<form>")]
pub async fn unsubscribe(
    form: Form<UnsubscribeForm>,
    conn: NewsletterDbConn,
) -> Json<SubscriptionResult> {
    let email = match SubscriberEmail::parse(form.into_inner().email) {
        Ok(email) => email,
        Err(_) => return Json(SubscriptionResult::declined(MSG_INVALID_EMAIL)),
    };

    let outcome = conn.run(move |c| store::unsubscribe(c, &email)).await;

    Json(match outcome {
        Ok(true) => SubscriptionResult::confirmed(MSG_UNSUBSCRIBED),
        Ok(false) => SubscriptionResult::declined(MSG_NOT_FOUND),
        Err(e) => {
            tracing::error!("Failed to deactivate the subscription: {:?}", e);
            SubscriptionResult::declined(MSG_UNSUBSCRIBE_FAILED)
        }
    })
}

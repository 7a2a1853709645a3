use crate::schema::newsletter_subscriptions;
use chrono::offset::Utc;
use chrono::DateTime;

#[derive(Queryable, serde::Serialize)]
pub struct Subscription {
    pub id: uuid::Uuid,
    pub email: String,
    pub subscribed_at: DateTime<Utc>,
    pub is_active: bool,
    pub source: String,
    pub user_agent: Option<String>,
    pub ip_address: Option<String>,
}

#[derive(Insertable)]
#[table_name = "newsletter_subscriptions"]
pub struct NewSubscriptionRow<'a> {
    pub id: &'a uuid::Uuid,
    pub email: &'a str,
    pub subscribed_at: &'a DateTime<Utc>,
    pub is_active: bool,
    pub source: &'a str,
    pub user_agent: Option<&'a str>,
    pub ip_address: Option<&'a str>,
}

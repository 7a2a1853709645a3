use crate::domain::{NewSubscription, SubscriberEmail};
use crate::models::{NewSubscriptionRow, Subscription};
use chrono::Utc;
use diesel::result::DatabaseErrorKind;
use diesel::{
    ExpressionMethods, OptionalExtension, PgConnection, QueryDsl, QueryResult, RunQueryDsl,
};
use uuid::Uuid;

pub enum SubscribeOutcome {
    /// First time this email has been seen.
    Created(Subscription),
    /// An inactive row existed and was flipped back on, keeping its id.
    Reactivated(Subscription),
    /// An active row already exists; nothing was written.
    AlreadyActive,
}

/// Insert-or-reactivate, keyed by the normalized email.
///
/// The lookup-then-write sequence is not atomic on its own; the unique
/// constraint on `email` closes the race between two concurrent calls for
/// the same address. A unique violation on the insert path means another
/// request won, which is the same outcome as finding an active row.
#[tracing::instrument(name = "Upserting a subscription", skip(conn, new_subscription))]
pub fn subscribe(
    conn: &PgConnection,
    new_subscription: &NewSubscription,
) -> QueryResult<SubscribeOutcome> {
    use crate::schema::newsletter_subscriptions::dsl::*;

    let existing = newsletter_subscriptions
        .filter(email.eq(new_subscription.email.as_ref()))
        .first::<Subscription>(conn)
        .optional()
        .map_err(|e| {
            tracing::error!("Failed to execute query: {:?}", e);
            e
        })?;

    match existing {
        Some(row) if row.is_active => Ok(SubscribeOutcome::AlreadyActive),
        // Reactivation keeps the original source and diagnostics: attribution
        // belongs to the channel that first acquired the subscriber.
        Some(row) => diesel::update(newsletter_subscriptions.filter(id.eq(row.id)))
            .set((is_active.eq(true), subscribed_at.eq(Utc::now())))
            .get_result::<Subscription>(conn)
            .map(SubscribeOutcome::Reactivated)
            .map_err(|e| {
                tracing::error!("Failed to execute query: {:?}", e);
                e
            }),
        None => {
            let insert = diesel::insert_into(newsletter_subscriptions)
                .values(NewSubscriptionRow {
                    id: &Uuid::new_v4(),
                    email: new_subscription.email.as_ref(),
                    subscribed_at: &Utc::now(),
                    is_active: true,
                    source: new_subscription.source.as_ref(),
                    user_agent: new_subscription.user_agent.as_deref(),
                    ip_address: new_subscription.ip_address.as_deref(),
                })
                .get_result::<Subscription>(conn);
            match insert {
                Ok(row) => Ok(SubscribeOutcome::Created(row)),
                Err(diesel::result::Error::DatabaseError(
                    DatabaseErrorKind::UniqueViolation,
                    _,
                )) => Ok(SubscribeOutcome::AlreadyActive),
                Err(e) => {
                    tracing::error!("Failed to execute query: {:?}", e);
                    Err(e)
                }
            }
        }
    }
}

/// Soft-deactivate by email. Returns `false` when no row matched.
/// Deactivating an already-inactive row is a no-op that still counts
/// as a match, which makes repeated unsubscribes harmless.
#[tracing::instrument(name = "Deactivating a subscription", skip(conn, subscriber_email))]
pub fn unsubscribe(conn: &PgConnection, subscriber_email: &SubscriberEmail) -> QueryResult<bool> {
    use crate::schema::newsletter_subscriptions::dsl::*;

    let matched = diesel::update(
        newsletter_subscriptions.filter(email.eq(subscriber_email.as_ref())),
    )
    .set(is_active.eq(false))
    .execute(conn)
    .map_err(|e| {
        tracing::error!("Failed to execute query: {:?}", e);
        e
    })?;
    Ok(matched > 0)
}

/// Active subscriptions, most recent first, plus the unpaginated total.
#[tracing::instrument(name = "Listing active subscriptions", skip(conn))]
pub fn list_active(
    conn: &PgConnection,
    limit: i64,
    offset: i64,
) -> QueryResult<(Vec<Subscription>, i64)> {
    use crate::schema::newsletter_subscriptions::dsl::*;

    let rows = newsletter_subscriptions
        .filter(is_active.eq(true))
        .order(subscribed_at.desc())
        .limit(limit)
        .offset(offset)
        .load::<Subscription>(conn)?;

    let total = newsletter_subscriptions
        .filter(is_active.eq(true))
        .count()
        .get_result::<i64>(conn)?;

    Ok((rows, total))
}

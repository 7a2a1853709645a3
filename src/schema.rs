table! {
    newsletter_subscriptions (id) {
        id -> Uuid,
        email -> Text,
        subscribed_at -> Timestamptz,
        is_active -> Bool,
        source -> Text,
        user_agent -> Nullable<Text>,
        ip_address -> Nullable<Text>,
    }
}

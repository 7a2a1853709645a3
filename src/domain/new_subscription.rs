use crate::domain::{SourceTag, SubscriberEmail};

/// A fully validated subscription request, the only shape the store accepts.
pub struct NewSubscription {
    pub email: SubscriberEmail,
    pub source: SourceTag,
    pub user_agent: Option<String>,
    pub ip_address: Option<String>,
}

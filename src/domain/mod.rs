mod new_subscription;
mod source_tag;
mod subscriber_email;

pub use new_subscription::NewSubscription;
pub use source_tag::SourceTag;
pub use subscriber_email::SubscriberEmail;

pub mod health_check;
mod subscriptions;
mod subscriptions_list;
pub mod unsubscribe;

pub use health_check::*;
pub use subscriptions::*;
pub use subscriptions_list::*;
pub use unsubscribe::*;

use crate::models::Subscription;

/// Uniform result shape handed back to the form UI: a flag, a short
/// French message, and the stored record when a write happened. The UI
/// only ever branches on `success`.
#[derive(serde::Serialize)]
pub struct SubscriptionResult {
    pub success: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Subscription>,
}

impl SubscriptionResult {
    pub fn accepted(message: &str, data: Subscription) -> Self {
        Self {
            success: true,
            message: message.to_string(),
            data: Some(data),
        }
    }

    pub fn confirmed(message: &str) -> Self {
        Self {
            success: true,
            message: message.to_string(),
            data: None,
        }
    }

    pub fn declined(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            data: None,
        }
    }
}

pub fn error_chain_fmt(
    e: &impl std::error::Error,
    f: &mut std::fmt::Formatter<'_>,
) -> std::fmt::Result {
    writeln!(f, "{}\n", e)?;
    let mut current = e.source();
    while let Some(cause) = current {
        writeln!(f, "Caused by:\n\t{}", cause)?;
        current = cause.source();
    }
    Ok(())
}

use serde_json::json;
use tracing::{info, warn};

use rota_engine::PaymentRecorded;

use crate::error::{NotifyError, NotifyResult};
use crate::message::{payment_message, turn_message};

/// Posts announcements to an incoming-webhook URL.
///
/// Built once at startup and shared; callers fire notifications on a
/// detached task and never wait on the result. Failures are logged here and
/// must never affect the response already returned to the caller.
pub struct Notifier {
    webhook_url: Option<String>,
    client: reqwest::Client,
}

impl Notifier {
    /// A notifier for the given webhook URL; `None` or a non-HTTP value
    /// disables delivery (notifications are skipped with a warning).
    pub fn new(webhook_url: Option<String>) -> Self {
        let webhook_url = webhook_url.filter(|url| {
            if url.starts_with("http") {
                true
            } else {
                warn!("webhook URL is not set to an http(s) endpoint; notifications disabled");
                false
            }
        });
        Self {
            webhook_url,
            client: reqwest::Client::new(),
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.webhook_url.is_some()
    }

    /// Announce a recorded payment. Logs and swallows any failure.
    pub async fn notify_payment(&self, outcome: &PaymentRecorded) {
        self.deliver(payment_message(outcome)).await;
    }

    /// Re-announce whose turn is next. Logs and swallows any failure.
    pub async fn notify_turn(&self, next_to_pay: &[String]) {
        self.deliver(turn_message(next_to_pay)).await;
    }

    async fn deliver(&self, text: String) {
        match self.post(&text).await {
            Ok(()) => info!("notification sent"),
            Err(NotifyError::Disabled) => warn!("webhook not configured; skipping notification"),
            Err(e) => warn!(error = %e, "failed to send notification"),
        }
    }

    async fn post(&self, text: &str) -> NotifyResult<()> {
        let url = self.webhook_url.as_ref().ok_or(NotifyError::Disabled)?;
        self.client
            .post(url)
            .json(&json!({ "text": text }))
            .send()
            .await?
            .error_for_status()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unset_url_disables_delivery() {
        assert!(!Notifier::new(None).is_enabled());
    }

    #[test]
    fn placeholder_url_disables_delivery() {
        let notifier = Notifier::new(Some("PASTE-YOUR-URL-HERE".into()));
        assert!(!notifier.is_enabled());
    }

    #[test]
    fn http_url_enables_delivery() {
        let notifier = Notifier::new(Some("https://example.com/webhook".into()));
        assert!(notifier.is_enabled());
    }
}

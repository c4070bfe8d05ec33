use thiserror::Error;

/// Errors produced while delivering a notification.
///
/// These never cross the notification boundary: the notifier logs them and
/// the caller's response is unaffected.
#[derive(Debug, Error)]
pub enum NotifyError {
    #[error("webhook URL not configured")]
    Disabled,

    #[error("webhook request failed: {0}")]
    Http(#[from] reqwest::Error),
}

pub type NotifyResult<T> = Result<T, NotifyError>;

//! Error type for the Jupyter integration

use ggspec::PlotError;

#[derive(Debug, thiserror::Error)]
pub enum KernelError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("ZeroMQ error: {0}")]
    Zmq(#[from] zeromq::ZmqError),

    #[error("Invalid connection info: {0}")]
    Connection(String),

    #[error("Invalid signing key: {0}")]
    SigningKey(String),

    #[error("IOPub channel closed")]
    ChannelClosed,

    #[error(transparent)]
    Plot(#[from] PlotError),
}

pub type Result<T> = std::result::Result<T, KernelError>;

impl From<KernelError> for PlotError {
    fn from(err: KernelError) -> Self {
        match err {
            KernelError::Plot(inner) => inner,
            other => PlotError::DisplayError(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_converts_to_display_error() {
        let err: PlotError = KernelError::ChannelClosed.into();
        assert!(matches!(err, PlotError::DisplayError(_)));
        assert_eq!(err.to_string(), "Display error: IOPub channel closed");
    }

    #[test]
    fn test_plot_errors_pass_through() {
        let err: PlotError =
            KernelError::Plot(PlotError::ValidationError("no layers".to_string())).into();
        assert!(matches!(err, PlotError::ValidationError(_)));
    }
}

use crate::error::ContactError;
use crate::form::ContactMessage;
use folio_domain::config::ContactConfig;
use folio_kernel::time::sleep;
use std::future::Future;
use std::time::Duration;
use tracing::info;

/// Delivers a validated message somewhere.
pub trait ContactSubmitter {
    /// # Errors
    /// [`ContactError::Delivery`] when the message could not be sent.
    fn submit(&self, message: &ContactMessage) -> impl Future<Output = Result<(), ContactError>>;
}

/// Waits for a fixed delay and reports success. Nothing is transmitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimulatedSubmitter {
    delay: Duration,
}

impl SimulatedSubmitter {
    #[must_use]
    pub const fn new(delay: Duration) -> Self {
        Self { delay }
    }

    #[must_use]
    pub const fn from_config(config: &ContactConfig) -> Self {
        Self::new(Duration::from_millis(config.submit_delay_ms))
    }

    #[must_use]
    pub const fn delay(&self) -> Duration {
        self.delay
    }
}

impl Default for SimulatedSubmitter {
    fn default() -> Self {
        Self::from_config(&ContactConfig::default())
    }
}

impl ContactSubmitter for SimulatedSubmitter {
    async fn submit(&self, message: &ContactMessage) -> Result<(), ContactError> {
        sleep(self.delay).await;
        info!(chars = message.message.len(), "Simulated contact submission");
        Ok(())
    }
}

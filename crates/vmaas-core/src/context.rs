use std::future::Future;
use std::time::Duration;

use tokio::time::Instant;
use tokio_util::sync::CancellationToken;

use crate::error::Error;

/// Per-call deadline and cancellation.
///
/// The deadline bounds the whole call, including retries and reading the
/// response body. Nothing is retained after it fires.
#[derive(Debug, Clone, Default)]
pub struct CallContext {
    deadline: Option<Instant>,
    cancel: Option<CancellationToken>,
}

impl CallContext {
    /// No deadline, no cancellation.
    pub fn background() -> Self {
        Self::default()
    }

    /// Deadline `timeout` from now.
    pub fn with_timeout(timeout: Duration) -> Self {
        Self::background().deadline(Instant::now() + timeout)
    }

    pub fn deadline(mut self, deadline: Instant) -> Self {
        self.deadline = Some(deadline);
        self
    }

    pub fn cancellation(mut self, token: CancellationToken) -> Self {
        self.cancel = Some(token);
        self
    }

    pub fn deadline_instant(&self) -> Option<Instant> {
        self.deadline
    }

    /// Drive `fut` under this context.
    pub async fn run<T, F>(&self, fut: F) -> Result<T, Error>
    where
        F: Future<Output = Result<T, Error>>,
    {
        let cancellable = async {
            match &self.cancel {
                Some(token) => tokio::select! {
                    () = token.cancelled() => Err(Error::Cancelled),
                    res = fut => res,
                },
                None => fut.await,
            }
        };

        match self.deadline {
            Some(deadline) => tokio::time::timeout_at(deadline, cancellable)
                .await
                .map_err(|_| Error::DeadlineExceeded)?,
            None => cancellable.await,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn deadline_fires_before_slow_future() {
        let ctx = CallContext::with_timeout(Duration::from_millis(80));
        let result: Result<(), Error> = ctx
            .run(async {
                tokio::time::sleep(Duration::from_millis(100)).await;
                Ok(())
            })
            .await;

        assert!(matches!(result, Err(Error::DeadlineExceeded)));
        assert!(result.unwrap_err().to_string().contains("deadline exceeded"));
    }

    #[tokio::test]
    async fn cancellation_interrupts_call() {
        let token = CancellationToken::new();
        token.cancel();
        let ctx = CallContext::background().cancellation(token);

        let result: Result<(), Error> = ctx.run(std::future::pending()).await;
        assert!(matches!(result, Err(Error::Cancelled)));
    }

    #[tokio::test]
    async fn background_passes_result_through() {
        let value = CallContext::background()
            .run(async { Ok::<_, Error>(7) })
            .await
            .unwrap();
        assert_eq!(value, 7);
    }
}

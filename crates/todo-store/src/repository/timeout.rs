//! Request timeouts
//!
//! Natively the tokio timer is used; in the browser a `setTimeout` based
//! future races the request.

use std::future::Future;
use std::time::Duration;

use crate::domain::BackendError;

#[cfg(not(target_arch = "wasm32"))]
pub(crate) async fn with_timeout<F: Future>(duration: Duration, future: F) -> Result<F::Output, BackendError> {
    tokio::time::timeout(duration, future)
        .await
        .map_err(|_| BackendError::Timeout(duration))
}

#[cfg(target_arch = "wasm32")]
pub(crate) async fn with_timeout<F: Future>(duration: Duration, future: F) -> Result<F::Output, BackendError> {
    use futures_util::future::{select, Either};

    let sleep = gloo_timers::future::sleep(duration);
    futures_util::pin_mut!(future);
    futures_util::pin_mut!(sleep);
    match select(future, sleep).await {
        Either::Left((output, _)) => Ok(output),
        Either::Right(_) => Err(BackendError::Timeout(duration)),
    }
}

use crate::{ServiceCallWork, error::WorkError};
use casual_http::ServiceCallReplyMessage;
use std::sync::Arc;
use std::time::Duration;
use tokio::{runtime::Handle, sync::Semaphore, task::JoinHandle};
use uuid::Uuid;

/// The default number of work units allowed to execute at the same time.
pub const DEFAULT_WORKER_POOL_SIZE: usize = 16;

/// A bounded pool executing service work units on the Tokio runtime.
///
/// At most `size` units run at once; further submissions are accepted and
/// wait for a slot. Cloning the pool shares the same slots.
#[derive(Clone, Debug)]
pub struct WorkerPool {
    permits: Arc<Semaphore>,
    size: usize,
}

impl Default for WorkerPool {
    fn default() -> Self {
        Self::new(DEFAULT_WORKER_POOL_SIZE)
    }
}

impl WorkerPool {
    /// Creates a pool with `size` slots. A size of zero is raised to one.
    pub fn new(size: usize) -> Self {
        let size = size.max(1);
        Self {
            permits: Arc::new(Semaphore::new(size)),
            size,
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Slots not currently held by a running unit.
    pub fn available(&self) -> usize {
        self.permits.available_permits()
    }

    /// Stops accepting work. Units that have not started yet fail with
    /// [`WorkError::PoolClosed`].
    pub fn close(&self) {
        self.permits.close();
    }

    pub fn is_closed(&self) -> bool {
        self.permits.is_closed()
    }

    /// Hands a work unit to the pool. Must be called from within a Tokio
    /// runtime.
    pub fn submit(&self, work: ServiceCallWork) -> Result<WorkHandle, WorkError> {
        if self.permits.is_closed() {
            return Err(WorkError::PoolClosed);
        }

        let runtime = Handle::try_current().map_err(|e| WorkError::Submit(e.to_string()))?;
        let permits = self.permits.clone();
        let correlation_id = work.correlation_id();

        let task = runtime.spawn(async move {
            let _permit = permits
                .acquire_owned()
                .await
                .map_err(|_| WorkError::PoolClosed)?;
            Ok(work.run().await)
        });

        tracing::trace!(%correlation_id, "work submitted");
        Ok(WorkHandle {
            correlation_id,
            task,
        })
    }
}

/// The pending result of a submitted work unit.
#[derive(Debug)]
pub struct WorkHandle {
    correlation_id: Uuid,
    task: JoinHandle<Result<ServiceCallReplyMessage, WorkError>>,
}

impl WorkHandle {
    pub fn correlation_id(&self) -> Uuid {
        self.correlation_id
    }

    /// Waits until the unit has finished, however long that takes.
    pub async fn join(self) -> Result<ServiceCallReplyMessage, WorkError> {
        self.task.await?
    }

    /// Waits at most `limit`. On expiry the unit is aborted, its slot is
    /// released and [`WorkError::Stalled`] is returned.
    pub async fn join_timeout(self, limit: Duration) -> Result<ServiceCallReplyMessage, WorkError> {
        let correlation_id = self.correlation_id;
        let abort = self.task.abort_handle();
        match tokio::time::timeout(limit, self.join()).await {
            Ok(result) => result,
            Err(_) => {
                abort.abort();
                Err(WorkError::Stalled {
                    correlation_id,
                    waited: limit,
                })
            }
        }
    }
}

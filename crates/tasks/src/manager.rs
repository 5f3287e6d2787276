// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `TaskManager`: one FIFO worker per named queue, draining serially.
//! Different queues run fully in parallel; re-entrant submission from
//! inside a worker must target a different queue to avoid self-deadlock
//! (submitting back to the same queue is accepted and just queues behind
//! the in-flight task).

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;
use tokio::sync::{mpsc, oneshot};
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

use sx_core::QueueName;

use crate::task::{complete, BoxedTask, Job, TaskHandle, TaskOutput};

#[derive(Debug, thiserror::Error)]
pub enum SubmitError {
    #[error("no such task queue: {0}")]
    UnknownQueue(String),
    #[error("task queue is shutting down")]
    ShuttingDown,
}

pub struct TaskManager {
    senders: HashMap<QueueName, mpsc::UnboundedSender<Job>>,
    token: CancellationToken,
    workers: Mutex<Vec<JoinHandle<()>>>,
    shutdown_timeout: Duration,
}

impl TaskManager {
    /// Default from `global.shutdown.plugin_timeout`: 3.0s.
    pub fn new(queues: &[QueueName], shutdown_timeout: Duration) -> Self {
        let token = CancellationToken::new();
        let mut senders = HashMap::new();
        let mut workers = Vec::new();
        for queue in queues {
            let (tx, rx) = mpsc::unbounded_channel();
            senders.insert(queue.clone(), tx);
            workers.push(tokio::spawn(worker_loop(queue.clone(), rx, token.clone())));
        }
        Self { senders, token, workers: Mutex::new(workers), shutdown_timeout }
    }

    pub fn fire_and_forget(&self, queue: &QueueName, work: BoxedTask) -> Result<(), SubmitError> {
        self.send(queue, Job::FireAndForget(work))
    }

    pub fn submit_awaited(&self, queue: &QueueName, work: BoxedTask) -> Result<oneshot::Receiver<TaskOutput>, SubmitError> {
        let (tx, rx) = oneshot::channel();
        self.send(queue, Job::Awaited(work, tx))?;
        Ok(rx)
    }

    pub fn submit_return_future(&self, queue: &QueueName, work: BoxedTask) -> Result<TaskHandle, SubmitError> {
        let (handle, ready, result) = TaskHandle::new();
        self.send(queue, Job::ReturnFuture(work, ready, result))?;
        Ok(handle)
    }

    fn send(&self, queue: &QueueName, job: Job) -> Result<(), SubmitError> {
        if self.token.is_cancelled() {
            return Err(SubmitError::ShuttingDown);
        }
        let tx = self.senders.get(queue).ok_or_else(|| SubmitError::UnknownQueue(queue.to_string()))?;
        tx.send(job).map_err(|_| SubmitError::ShuttingDown)
    }

    /// Cooperative shutdown: signals workers to stop picking up new work,
    /// then waits up to `shutdown_timeout` for in-flight tasks to drain.
    /// Workers still running past the deadline are abandoned.
    pub async fn shutdown(&self) {
        self.token.cancel();
        let handles: Vec<JoinHandle<()>> = std::mem::take(&mut *self.workers.lock());
        let drain = async {
            for handle in handles {
                let _ = handle.await;
            }
        };
        if tokio::time::timeout(self.shutdown_timeout, drain).await.is_err() {
            tracing::warn!("task manager shutdown timed out; abandoning remaining workers");
        }
    }
}

async fn worker_loop(queue: QueueName, mut rx: mpsc::UnboundedReceiver<Job>, token: CancellationToken) {
    loop {
        tokio::select! {
            biased;
            _ = token.cancelled() => {
                tracing::debug!(%queue, "worker stopping, not accepting new tasks");
                return;
            }
            job = rx.recv() => {
                match job {
                    Some(job) => run_job(job).await,
                    None => return,
                }
            }
        }
    }
}

async fn run_job(job: Job) {
    match job {
        Job::FireAndForget(work) => {
            if let Err(err) = work.await {
                tracing::error!(?err, "fire-and-forget task failed");
            }
        }
        Job::Awaited(work, tx) => {
            let result = work.await;
            let _ = tx.send(result);
        }
        Job::ReturnFuture(work, ready, result) => {
            let output = work.await;
            complete(&ready, &result, output);
        }
    }
}

#[cfg(test)]
#[path = "manager_tests.rs"]
mod tests;

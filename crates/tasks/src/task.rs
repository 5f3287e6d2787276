// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The work item shape and the completion handles submitters get back.

use std::future::Future;
use std::pin::Pin;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use parking_lot::Mutex;
use serde_json::Value as Json;

use sx_core::SxError;

pub type TaskOutput = Result<Json, SxError>;
pub type BoxedTask = Pin<Box<dyn Future<Output = TaskOutput> + Send>>;

pub(crate) enum Job {
    FireAndForget(BoxedTask),
    Awaited(BoxedTask, tokio::sync::oneshot::Sender<TaskOutput>),
    ReturnFuture(BoxedTask, Arc<AtomicBool>, Arc<Mutex<Option<TaskOutput>>>),
}

/// A handle returned by `return_future` submissions. Polled by the
/// expander's `ready`/`not_ready` modifiers without blocking the step
/// loop that holds it.
#[derive(Clone)]
pub struct TaskHandle {
    ready: Arc<AtomicBool>,
    result: Arc<Mutex<Option<TaskOutput>>>,
}

impl TaskHandle {
    pub(crate) fn new() -> (Self, Arc<AtomicBool>, Arc<Mutex<Option<TaskOutput>>>) {
        let ready = Arc::new(AtomicBool::new(false));
        let result = Arc::new(Mutex::new(None));
        (Self { ready: ready.clone(), result: result.clone() }, ready, result)
    }

    pub fn is_ready(&self) -> bool {
        self.ready.load(Ordering::Acquire)
    }

    /// Takes the result once ready; returns `None` both before completion
    /// and after the first successful take.
    pub fn try_take(&self) -> Option<TaskOutput> {
        if !self.is_ready() {
            return None;
        }
        self.result.lock().take()
    }
}

pub(crate) fn complete(ready: &AtomicBool, result: &Mutex<Option<TaskOutput>>, output: TaskOutput) {
    *result.lock() = Some(output);
    ready.store(true, Ordering::Release);
}

//! Async work bound to a component's lifetime.
//!
//! DESIGN
//! ======
//! Components create a [`TaskScope`] during setup and spawn every service
//! call through it. The scope registers a single `on_cleanup` with the
//! component's owner and tracks its live tasks; unmounting aborts whatever
//! is still running, so in-flight requests and pending timers never write
//! into signals of a page that is gone. A task drops out of the registry as
//! soon as it finishes. Outside the browser nothing is spawned.

#[cfg(test)]
#[path = "task_test.rs"]
mod task_test;

use std::collections::HashMap;
use std::future::Future;

/// Handle to a task started with [`TaskScope::spawn`].
#[derive(Clone, Debug, Default)]
pub struct TaskHandle {
    #[cfg(feature = "hydrate")]
    abort: Option<futures::future::AbortHandle>,
}

impl TaskHandle {
    /// Stop the task at its next suspension point. Idempotent.
    pub fn abort(&self) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(handle) = &self.abort {
                handle.abort();
            }
        }
    }
}

/// Live tasks of one scope, keyed by spawn order.
#[cfg_attr(not(feature = "hydrate"), allow(dead_code))]
#[derive(Debug)]
struct Registry<H> {
    next: u64,
    live: HashMap<u64, H>,
}

#[cfg_attr(not(feature = "hydrate"), allow(dead_code))]
impl<H> Registry<H> {
    fn new() -> Self {
        Self { next: 0, live: HashMap::new() }
    }

    fn insert(&mut self, handle: H) -> u64 {
        let id = self.next;
        self.next += 1;
        self.live.insert(id, handle);
        id
    }

    fn finish(&mut self, id: u64) {
        self.live.remove(&id);
    }

    fn drain(&mut self) -> Vec<H> {
        self.live.drain().map(|(_, handle)| handle).collect()
    }

    fn len(&self) -> usize {
        self.live.len()
    }
}

/// Spawns tasks that end with the component that created the scope.
///
/// Event handlers run outside any reactive owner, so the scope captures the
/// owner's cleanup at construction time instead.
#[derive(Clone, Debug)]
pub struct TaskScope {
    #[cfg(feature = "hydrate")]
    tasks: std::sync::Arc<std::sync::Mutex<Registry<futures::future::AbortHandle>>>,
}

impl Default for TaskScope {
    fn default() -> Self {
        Self::new()
    }
}

impl TaskScope {
    /// Create a scope under the current reactive owner.
    pub fn new() -> Self {
        #[cfg(feature = "hydrate")]
        {
            let tasks = std::sync::Arc::new(std::sync::Mutex::new(Registry::new()));
            let on_unmount = std::sync::Arc::clone(&tasks);
            leptos::prelude::on_cleanup(move || {
                let handles = on_unmount.lock().map(|mut t| t.drain()).unwrap_or_default();
                for handle in handles {
                    handle.abort();
                }
            });
            Self { tasks }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Self {}
        }
    }

    /// Spawn `fut` on the local executor.
    pub fn spawn<F>(&self, fut: F) -> TaskHandle
    where
        F: Future<Output = ()> + 'static,
    {
        #[cfg(feature = "hydrate")]
        {
            use futures::future::{AbortHandle, Abortable};

            let (handle, registration) = AbortHandle::new_pair();
            let id = self.tasks.lock().ok().map(|mut t| t.insert(handle.clone()));
            let tasks = std::sync::Arc::clone(&self.tasks);
            leptos::task::spawn_local(async move {
                let _ = Abortable::new(fut, registration).await;
                if let (Some(id), Ok(mut t)) = (id, tasks.lock()) {
                    t.finish(id);
                }
            });
            TaskHandle { abort: Some(handle) }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            drop(fut);
            TaskHandle::default()
        }
    }
}

/// Resolve after `ms` milliseconds.
#[allow(clippy::unused_async)]
pub async fn sleep_ms(ms: u32) {
    #[cfg(feature = "hydrate")]
    {
        gloo_timers::future::TimeoutFuture::new(ms).await;
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = ms;
    }
}

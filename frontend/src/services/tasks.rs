use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::future::Future;
use std::rc::Rc;

use futures::future::{AbortHandle, Abortable, Aborted};

/// Owns the abort handles of futures spawned on behalf of a component.
/// Aborting the scope on unmount keeps late completions away from state that
/// no longer exists. A handle is released as soon as its future resolves.
#[derive(Debug, Default)]
pub struct TaskScope {
    handles: Rc<RefCell<HashMap<u64, AbortHandle>>>,
    next_key: Cell<u64>,
}

impl TaskScope {
    /// Wraps `fut` so that [`TaskScope::abort_all`] cancels it.
    pub fn track<F: Future>(&self, fut: F) -> impl Future<Output = Result<F::Output, Aborted>> {
        let (handle, registration) = AbortHandle::new_pair();
        let key = self.next_key.get();
        self.next_key.set(key.wrapping_add(1));
        self.handles.borrow_mut().insert(key, handle);

        let handles = Rc::clone(&self.handles);
        let task = Abortable::new(fut, registration);
        async move {
            let result = task.await;
            handles.borrow_mut().remove(&key);
            result
        }
    }

    pub fn spawn<F>(&self, fut: F)
    where
        F: Future<Output = ()> + 'static,
    {
        let task = self.track(fut);
        wasm_bindgen_futures::spawn_local(async move {
            if task.await.is_err() {
                tracing::debug!("Task aborted before completion");
            }
        });
    }

    pub fn abort_all(&self) {
        let pending: Vec<AbortHandle> = self.handles.borrow_mut().drain().map(|(_, h)| h).collect();
        for handle in pending {
            handle.abort();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use futures::future;

    #[test]
    fn test_tracked_future_completes() {
        let scope = TaskScope::default();
        let task = scope.track(async { 7 });
        assert_eq!(scope.handles.borrow().len(), 1);
        assert_eq!(block_on(task), Ok(7));
        assert!(scope.handles.borrow().is_empty());
    }

    #[test]
    fn test_completed_tasks_release_handles() {
        let scope = TaskScope::default();
        for n in 0..10 {
            assert_eq!(block_on(scope.track(async move { n })), Ok(n));
        }
        assert!(scope.handles.borrow().is_empty());

        let pending = scope.track(future::pending::<()>());
        let _done = block_on(scope.track(async {}));
        assert_eq!(scope.handles.borrow().len(), 1);
        drop(pending);
    }

    #[test]
    fn test_abort_all_cancels_pending() {
        let scope = TaskScope::default();
        let task = scope.track(future::pending::<()>());
        scope.abort_all();
        assert_eq!(block_on(task), Err(Aborted));
        assert!(scope.handles.borrow().is_empty());
    }
}

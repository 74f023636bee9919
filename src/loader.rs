//! Mount-triggered loading.
//!
//! A view owns one [`MountLoader`] and calls [`MountLoader::mount`] the first
//! time it is shown. The fetch runs on the tokio runtime; its result comes back
//! over a channel that the UI thread drains with [`MountLoader::poll`] on each
//! frame, so nothing ever blocks the UI. Tearing the loader down (explicitly or
//! by dropping it) invalidates the in-flight result so it never reaches a view
//! that is gone.

use std::future::Future;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::sync::Arc;

use log::{debug, error, warn};
use tokio::runtime::Handle;

use crate::api::{FetchError, Fetcher};

pub type Repaint = Arc<dyn Fn() + Send + Sync>;

/// What a view needs in order to load its data.
#[derive(Clone)]
pub struct MountContext {
    pub fetcher: Arc<dyn Fetcher>,
    pub runtime: Handle,
    repaint: Repaint,
}

impl MountContext {
    pub fn new(fetcher: Arc<dyn Fetcher>, runtime: Handle) -> Self {
        Self {
            fetcher,
            runtime,
            repaint: Arc::new(|| {}),
        }
    }

    /// Called from the runtime after a result has been handed to a live view.
    pub fn with_repaint(mut self, repaint: impl Fn() + Send + Sync + 'static) -> Self {
        self.repaint = Arc::new(repaint);
        self
    }
}

enum Phase<T> {
    Idle,
    InFlight {
        receiver: Receiver<Result<T, FetchError>>,
        live: Arc<AtomicBool>,
    },
    Settled,
    TornDown,
}

pub struct MountLoader<T> {
    label: String,
    phase: Phase<T>,
}

impl<T> MountLoader<T> {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            phase: Phase::Idle,
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn is_mounted(&self) -> bool {
        !matches!(self.phase, Phase::Idle)
    }

    pub fn is_in_flight(&self) -> bool {
        matches!(self.phase, Phase::InFlight { .. })
    }

    pub fn is_torn_down(&self) -> bool {
        matches!(self.phase, Phase::TornDown)
    }

    /// Invalidate any pending result. The loader cannot be mounted again.
    pub fn teardown(&mut self) {
        if let Phase::InFlight { live, .. } = &self.phase {
            live.store(false, Ordering::Release);
            debug!("{}: torn down with a fetch in flight", self.label);
        }
        self.phase = Phase::TornDown;
    }
}

impl<T: Send + 'static> MountLoader<T> {
    /// Start the one fetch this loader will ever run.
    ///
    /// Returns `false`, without fetching, when the loader was already mounted
    /// or torn down.
    pub fn mount<F>(&mut self, ctx: &MountContext, fetch: F) -> bool
    where
        F: Future<Output = Result<T, FetchError>> + Send + 'static,
    {
        if self.is_mounted() {
            warn!("{}: mount called again, ignoring", self.label);
            return false;
        }

        let (sender, receiver) = mpsc::channel();
        let live = Arc::new(AtomicBool::new(true));
        let task_live = Arc::clone(&live);
        let repaint = Arc::clone(&ctx.repaint);
        let label = self.label.clone();

        ctx.runtime.spawn(async move {
            let result = fetch.await;
            if !task_live.load(Ordering::Acquire) || sender.send(result).is_err() {
                debug!("{}: view is gone, discarding result", label);
                return;
            }
            repaint();
        });

        debug!("{}: mounted", self.label);
        self.phase = Phase::InFlight { receiver, live };
        true
    }

    /// Take the fetch result if it has arrived. Yields at most one result over
    /// the loader's lifetime.
    pub fn poll(&mut self) -> Option<Result<T, FetchError>> {
        let Phase::InFlight { receiver, .. } = &self.phase else {
            return None;
        };

        match receiver.try_recv() {
            Ok(result) => {
                self.phase = Phase::Settled;
                Some(result)
            }
            Err(TryRecvError::Empty) => None,
            Err(TryRecvError::Disconnected) => {
                error!("{}: fetch task ended without a result", self.label);
                self.phase = Phase::Settled;
                Some(Err(FetchError::Aborted {
                    path: self.label.clone(),
                }))
            }
        }
    }
}

impl<T> Drop for MountLoader<T> {
    fn drop(&mut self) {
        self.teardown();
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::api::mock::MockFetcher;
    use std::sync::atomic::AtomicUsize;
    use std::time::Duration;
    use tokio::runtime::Runtime;

    pub(crate) fn context(runtime: &Runtime) -> MountContext {
        MountContext::new(Arc::new(MockFetcher::new()), runtime.handle().clone())
    }

    fn wait_for<T: Send + 'static>(loader: &mut MountLoader<T>) -> Option<Result<T, FetchError>> {
        for _ in 0..400 {
            if let Some(result) = loader.poll() {
                return Some(result);
            }
            std::thread::sleep(Duration::from_millis(5));
        }
        None
    }

    #[test]
    fn mount_fetches_exactly_once() {
        let runtime = Runtime::new().unwrap();
        let ctx = context(&runtime);
        let fetches = Arc::new(AtomicUsize::new(0));
        let mut loader = MountLoader::new("test");

        for _ in 0..3 {
            let fetches = Arc::clone(&fetches);
            loader.mount(&ctx, async move {
                fetches.fetch_add(1, Ordering::SeqCst);
                Ok::<_, FetchError>(42)
            });
        }

        assert_eq!(wait_for(&mut loader).unwrap().unwrap(), 42);
        assert!(loader.poll().is_none());
        assert_eq!(fetches.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn repaint_fires_after_delivery() {
        let runtime = Runtime::new().unwrap();
        let repaints = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&repaints);
        let ctx = context(&runtime).with_repaint(move || {
            counter.fetch_add(1, Ordering::SeqCst);
        });
        let mut loader = MountLoader::new("test");

        assert!(loader.mount(&ctx, async { Ok::<_, FetchError>("done") }));
        assert!(wait_for(&mut loader).is_some());
        assert_eq!(repaints.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn panicking_fetch_yields_aborted() {
        let runtime = Runtime::new().unwrap();
        let ctx = context(&runtime);
        let mut loader = MountLoader::new("doomed");

        loader.mount(&ctx, async {
            if true {
                panic!("task died");
            }
            Ok::<u32, FetchError>(0)
        });

        match wait_for(&mut loader) {
            Some(Err(FetchError::Aborted { path })) => assert_eq!(path, "doomed"),
            other => panic!("expected an aborted load, got {other:?}"),
        }
        assert!(!loader.is_in_flight());
        assert!(loader.poll().is_none());
    }

    #[test]
    fn teardown_discards_late_result() {
        let runtime = Runtime::new().unwrap();
        let repaints = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&repaints);
        let ctx = context(&runtime).with_repaint(move || {
            counter.fetch_add(1, Ordering::SeqCst);
        });
        let (release, gate) = tokio::sync::oneshot::channel::<()>();
        let (finished_tx, finished_rx) = std::sync::mpsc::channel();

        let mut loader = MountLoader::new("test");
        loader.mount(&ctx, async move {
            let _ = gate.await;
            let _ = finished_tx.send(());
            Ok::<_, FetchError>(1)
        });
        assert!(loader.is_in_flight());

        loader.teardown();
        release.send(()).unwrap();
        finished_rx.recv_timeout(Duration::from_secs(2)).unwrap();
        std::thread::sleep(Duration::from_millis(20));

        assert!(loader.is_torn_down());
        assert!(loader.poll().is_none());
        assert_eq!(repaints.load(Ordering::SeqCst), 0);
        assert!(!loader.mount(&ctx, async { Ok::<_, FetchError>(2) }));
    }

    #[test]
    fn dropping_the_loader_discards_the_result() {
        let runtime = Runtime::new().unwrap();
        let repaints = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&repaints);
        let ctx = context(&runtime).with_repaint(move || {
            counter.fetch_add(1, Ordering::SeqCst);
        });
        let (release, gate) = tokio::sync::oneshot::channel::<()>();
        let (finished_tx, finished_rx) = std::sync::mpsc::channel();

        {
            let mut loader = MountLoader::new("test");
            loader.mount(&ctx, async move {
                let _ = gate.await;
                let _ = finished_tx.send(());
                Ok::<_, FetchError>(1)
            });
        }

        release.send(()).unwrap();
        finished_rx.recv_timeout(Duration::from_secs(2)).unwrap();
        std::thread::sleep(Duration::from_millis(20));
        assert_eq!(repaints.load(Ordering::SeqCst), 0);
    }
}

use std::sync::Arc;
use std::sync::mpsc;
use std::thread;

use crate::io::backend::{NavEvent, NavRequest, NavigationBackend};

/// Runs backend calls off the UI thread.
///
/// Requests go in over a channel, completions come back as
/// [`NavEvent`]s; `poll()` should be called each tick of the UI loop
/// and never blocks. Dropping the worker closes the request channel and
/// lets the thread exit after the call in flight.
pub struct NavWorker {
    tx: mpsc::Sender<NavRequest>,
    rx: mpsc::Receiver<NavEvent>,
    _handle: thread::JoinHandle<()>,
}

impl NavWorker {
    /// Spawn the worker thread over the given backend.
    pub fn start(backend: Arc<dyn NavigationBackend>) -> Self {
        let (req_tx, req_rx) = mpsc::channel::<NavRequest>();
        let (evt_tx, evt_rx) = mpsc::channel::<NavEvent>();

        let handle = thread::spawn(move || {
            while let Ok(request) = req_rx.recv() {
                let event = match request {
                    NavRequest::Projects => NavEvent::Projects(backend.fetch_projects()),
                    NavRequest::Navigation { tag } => {
                        let result = backend.fetch_navigation(&tag.project_id);
                        NavEvent::Navigation { tag, result }
                    }
                };
                if evt_tx.send(event).is_err() {
                    // UI side is gone
                    return;
                }
            }
        });

        NavWorker {
            tx: req_tx,
            rx: evt_rx,
            _handle: handle,
        }
    }

    /// Submit a request for execution on the worker thread.
    pub fn submit(&self, request: NavRequest) {
        if self.tx.send(request).is_err() {
            log::warn!("navigation worker is gone, dropping request");
        }
    }

    /// Non-blocking poll for pending completions.
    /// Returns all queued events (may be empty).
    pub fn poll(&self) -> Vec<NavEvent> {
        let mut events = Vec::new();
        while let Ok(evt) = self.rx.try_recv() {
            events.push(evt);
        }
        events
    }
}

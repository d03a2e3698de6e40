//! In-memory doubles for the ports, shared by the unit tests.

use std::collections::VecDeque;
use std::future::Future;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use qltest_domain::{LogCategory, OutgoingRequest, Settled, TransportFailure};

use crate::ports::{EventLog, Transport};

/// Transport that replays scripted results and counts calls.
#[derive(Debug, Default)]
pub struct ScriptedTransport {
    results: Mutex<VecDeque<Settled>>,
    requests: Mutex<Vec<OutgoingRequest>>,
    calls: AtomicUsize,
}

impl ScriptedTransport {
    pub fn new(results: impl IntoIterator<Item = Settled>) -> Self {
        Self {
            results: Mutex::new(results.into_iter().collect()),
            ..Self::default()
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn requests(&self) -> Vec<OutgoingRequest> {
        self.requests.lock().expect("requests lock").clone()
    }
}

impl Transport for ScriptedTransport {
    fn post(&self, request: &OutgoingRequest) -> impl Future<Output = Settled> + Send {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.requests
            .lock()
            .expect("requests lock")
            .push(request.clone());
        let next = self
            .results
            .lock()
            .expect("results lock")
            .pop_front()
            .unwrap_or_else(|| Err(TransportFailure::network("no scripted result")));
        std::future::ready(next)
    }
}

/// Event log that keeps every entry.
#[derive(Debug, Default)]
pub struct RecordingLog {
    entries: Mutex<Vec<(LogCategory, String)>>,
}

impl RecordingLog {
    pub fn entries(&self) -> Vec<(LogCategory, String)> {
        self.entries.lock().expect("entries lock").clone()
    }

    pub fn categories(&self) -> Vec<LogCategory> {
        self.entries().into_iter().map(|(category, _)| category).collect()
    }
}

impl EventLog for RecordingLog {
    fn record(&self, category: LogCategory, entry: &str) {
        self.entries
            .lock()
            .expect("entries lock")
            .push((category, entry.to_string()));
    }
}

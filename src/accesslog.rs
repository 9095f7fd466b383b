use crate::config::ACCESS_LOG_QUEUE;
use hyper::http::HeaderMap;
use std::net::SocketAddr;
use tokio::sync::mpsc;

/// Producer half of the access log pipeline.
///
/// Request tasks submit formatted lines; a single background task drains
/// them in FIFO order, so lines come out in submission order without a
/// lock around the log sink.
#[derive(Clone)]
pub struct AccessLog {
    tx: mpsc::Sender<String>,
}

impl AccessLog {
    /// Spawns the consumer task. It runs for the lifetime of the process.
    pub fn spawn() -> Self {
        let (log, rx) = Self::channel(ACCESS_LOG_QUEUE);
        tokio::spawn(drain(rx, |line| log::info!("{}", line)));
        log
    }

    pub fn channel(capacity: usize) -> (Self, mpsc::Receiver<String>) {
        let (tx, rx) = mpsc::channel(capacity);
        (Self { tx }, rx)
    }

    /// Waits when the queue is full; lines are never dropped.
    pub async fn write(&self, line: String) {
        // the consumer outlives every producer, so this only fails in
        // tests that drop the receiver early
        let _ = self.tx.send(line).await;
    }
}

async fn drain(mut rx: mpsc::Receiver<String>, mut sink: impl FnMut(String)) {
    while let Some(line) = rx.recv().await {
        sink(line);
    }
}

/// The first `X-Forwarded-For` value when present and non-empty,
/// otherwise the connection's remote address.
pub fn client_addr(headers: &HeaderMap, remote: SocketAddr) -> String {
    match headers.get("x-forwarded-for").and_then(|v| v.to_str().ok()) {
        Some(forwarded) if !forwarded.is_empty() => forwarded.to_string(),
        _ => remote.to_string(),
    }
}

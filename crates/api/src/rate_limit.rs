use std::collections::{HashMap, VecDeque};
use std::sync::Arc;
use std::time::{Duration, Instant};

use parking_lot::Mutex;

/// Sliding-window request counter keyed by client address.
#[derive(Debug, Clone)]
pub struct IpRateLimiter {
    inner: Arc<Mutex<HashMap<String, VecDeque<Instant>>>>,
    window: Duration,
    max_requests: usize,
}

impl IpRateLimiter {
    pub fn new(window: Duration, max_requests: usize) -> Self {
        Self {
            inner: Arc::new(Mutex::new(HashMap::new())),
            window,
            max_requests,
        }
    }

    pub fn allow(&self, key: &str) -> bool {
        self.allow_at(key, Instant::now())
    }

    fn allow_at(&self, key: &str, now: Instant) -> bool {
        let mut guard = self.inner.lock();

        // Idle clients are dropped so the map stays bounded by active callers.
        guard.retain(|_, hits| {
            prune(hits, now, self.window);
            !hits.is_empty()
        });

        let hits = guard.entry(key.to_string()).or_default();
        if hits.len() >= self.max_requests {
            return false;
        }

        hits.push_back(now);
        true
    }

    pub fn tracked_clients(&self) -> usize {
        self.inner.lock().len()
    }
}

fn prune(hits: &mut VecDeque<Instant>, now: Instant, window: Duration) {
    while let Some(front) = hits.front() {
        if now.duration_since(*front) >= window {
            hits.pop_front();
        } else {
            break;
        }
    }
}

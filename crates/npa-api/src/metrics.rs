//! Request counter: a middleware that bumps it and `GET /metrics` to read it.

use std::sync::{
  Arc,
  atomic::{AtomicU64, Ordering},
};

use axum::{
  Json,
  extract::{Request, State},
  middleware::Next,
  response::Response,
};
use serde::Serialize;

/// Total inbound requests since start-up. Lock-free and independent of the
/// act store.
#[derive(Debug, Default)]
pub struct RequestCounter {
  total: AtomicU64,
}

impl RequestCounter {
  pub fn new() -> Self { Self::default() }

  pub fn increment(&self) { self.total.fetch_add(1, Ordering::Relaxed); }

  pub fn get(&self) -> u64 { self.total.load(Ordering::Relaxed) }
}

#[derive(Debug, Serialize)]
pub struct MetricsResponse {
  pub requests_total: u64,
}

/// Counts every request before it reaches routing.
pub async fn count_requests(
  State(counter): State<Arc<RequestCounter>>,
  req: Request,
  next: Next,
) -> Response {
  counter.increment();
  next.run(req).await
}

/// `GET /metrics`
pub async fn handler(
  State(counter): State<Arc<RequestCounter>>,
) -> Json<MetricsResponse> {
  Json(MetricsResponse { requests_total: counter.get() })
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn counter_starts_at_zero_and_increments() {
    let c = RequestCounter::new();
    assert_eq!(c.get(), 0);
    c.increment();
    c.increment();
    assert_eq!(c.get(), 2);
  }

  #[test]
  fn counter_is_safe_across_threads() {
    let c = Arc::new(RequestCounter::new());
    let threads: Vec<_> = (0..8)
      .map(|_| {
        let c = Arc::clone(&c);
        std::thread::spawn(move || {
          for _ in 0..1000 {
            c.increment();
          }
        })
      })
      .collect();
    for t in threads {
      t.join().unwrap();
    }
    assert_eq!(c.get(), 8000);
  }
}

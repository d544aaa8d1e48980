//! Request counters.

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::error::Error;

pub struct Metrics {
    pub started_at: DateTime<Utc>,
    pub status_checks: AtomicU64,
    pub photo_requests: AtomicU64,
    pub yesterday_requests: AtomicU64,
    pub invalid_format: AtomicU64,
    pub future_date: AtomicU64,
}

impl Metrics {
    pub fn new(started_at: DateTime<Utc>) -> Self {
        Self {
            started_at,
            status_checks: AtomicU64::new(0),
            photo_requests: AtomicU64::new(0),
            yesterday_requests: AtomicU64::new(0),
            invalid_format: AtomicU64::new(0),
            future_date: AtomicU64::new(0),
        }
    }

    pub fn record_status_check(&self) {
        self.status_checks.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_photo_request(&self) {
        self.photo_requests.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_yesterday_request(&self) {
        self.yesterday_requests.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_rejection(&self, err: &Error) {
        let counter = match err {
            Error::InvalidFormat(_) => &self.invalid_format,
            Error::FutureDate(_) => &self.future_date,
            Error::Config(_) => return,
        };
        counter.fetch_add(1, Ordering::Relaxed);
    }

    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            started_at: self.started_at,
            status_checks: self.status_checks.load(Ordering::Relaxed),
            photo_requests: self.photo_requests.load(Ordering::Relaxed),
            yesterday_requests: self.yesterday_requests.load(Ordering::Relaxed),
            invalid_format: self.invalid_format.load(Ordering::Relaxed),
            future_date: self.future_date.load(Ordering::Relaxed),
        }
    }
}

#[derive(Serialize)]
pub struct MetricsSnapshot {
    pub started_at: DateTime<Utc>,
    pub status_checks: u64,
    pub photo_requests: u64,
    pub yesterday_requests: u64,
    pub invalid_format: u64,
    pub future_date: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_metrics_start_at_zero() {
        let s = Metrics::new(Utc::now()).snapshot();
        assert_eq!(s.status_checks, 0);
        assert_eq!(s.photo_requests, 0);
        assert_eq!(s.future_date, 0);
    }

    #[test]
    fn record_photo_request_increments() {
        let m = Metrics::new(Utc::now());
        m.record_photo_request();
        m.record_yesterday_request();
        let s = m.snapshot();
        assert_eq!(s.photo_requests, 1);
        assert_eq!(s.yesterday_requests, 1);
    }

    #[test]
    fn rejections_counted_by_kind() {
        let m = Metrics::new(Utc::now());
        m.record_rejection(&Error::InvalidFormat("x".into()));
        m.record_rejection(&Error::InvalidFormat("y".into()));
        m.record_rejection(&Error::FutureDate("2999-01-01".into()));
        m.record_rejection(&Error::Config("ignored".into()));
        let s = m.snapshot();
        assert_eq!(s.invalid_format, 2);
        assert_eq!(s.future_date, 1);
    }
}

//! Rate-limit governor for the leaky-bucket budget the API reports in
//! the `X-LS-API-Bucket-Level` response header.

use std::time::Duration;

use reqwest::Method;

use crate::functions::CallContext;

pub(crate) const BUCKET_LEVEL_HEADER: &str = "X-LS-API-Bucket-Level";

/// Bucket state parsed from a `"<used>/<capacity>"` header value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct BucketLevel {
    used: f64,
    capacity: f64,
}

impl BucketLevel {
    pub(crate) fn parse(raw: &str) -> Option<Self> {
        let (used, capacity) = raw.split_once('/')?;
        Some(Self {
            used: used.trim().parse().ok()?,
            capacity: capacity.trim().parse().ok()?,
        })
    }

    /// The bucket drains by `capacity / 60` units per second.
    fn drip_rate(&self) -> f64 {
        self.capacity / 60.0
    }

    /// Units left until the bucket overflows.
    fn available(&self) -> f64 {
        self.capacity - self.used
    }
}

/// Unit cost of the next request. GET drains 1 unit, writes drain 10,
/// and anything unrecognized is costed like a GET.
pub(crate) fn method_units(method: &Method) -> u32 {
    if *method == Method::POST || *method == Method::PUT || *method == Method::DELETE {
        10
    } else {
        1
    }
}

/// Seconds to wait before a request costing `units` fits into the
/// bucket, or `None` when it already fits. A bucket that never drains
/// (`capacity == 0`) yields `None` rather than an unbounded wait.
pub(crate) fn sleep_seconds(bucket: BucketLevel, units: u32) -> Option<u64> {
    let available = bucket.available();
    if f64::from(units) < available {
        return None;
    }
    let drip_rate = bucket.drip_rate();
    if drip_rate <= 0.0 {
        return None;
    }
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let secs = ((f64::from(units) - available) / drip_rate).ceil() as u64;
    Some(secs)
}

/// Blocks the calling task until the bucket reported by the *previous*
/// response has room for the pending call. No-op without a prior bucket
/// header or when the header is malformed.
pub(crate) async fn throttle(
    account_id: &str,
    bucket_header: Option<&str>,
    method: &Method,
    call: &CallContext,
) {
    let Some(raw) = bucket_header else { return };
    let Some(bucket) = BucketLevel::parse(raw) else {
        return;
    };
    let units = method_units(method);
    if let Some(secs) = sleep_seconds(bucket, units) {
        log::debug!(
            "Too many requests Account={account_id} X-LS-API-Bucket={raw} \
             Units Next Request={units} Sleeping={secs}sec Req={} {}",
            call.action,
            call.api_call,
        );
        tokio::time::sleep(Duration::from_secs(secs)).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_bucket_header() {
        let bucket = BucketLevel::parse("42/60").unwrap();
        assert_eq!(bucket.used, 42.0);
        assert_eq!(bucket.capacity, 60.0);
        assert!(BucketLevel::parse("60").is_none());
        assert!(BucketLevel::parse("a/b").is_none());
        assert!(BucketLevel::parse("").is_none());
    }

    #[test]
    fn get_with_room_does_not_sleep() {
        let bucket = BucketLevel::parse("55/60").unwrap();
        assert_eq!(sleep_seconds(bucket, method_units(&Method::GET)), None);
    }

    #[test]
    fn post_over_budget_sleeps_for_the_deficit() {
        // available = 2, POST costs 10, drip = 1/sec -> ceil(8/1) = 8
        let bucket = BucketLevel::parse("58/60").unwrap();
        assert_eq!(sleep_seconds(bucket, method_units(&Method::POST)), Some(8));
    }

    #[test]
    fn exact_fit_still_waits() {
        // units >= available triggers the wait, matching the upstream
        // accounting
        let bucket = BucketLevel::parse("59/60").unwrap();
        assert_eq!(sleep_seconds(bucket, 1), Some(0));
    }

    #[test]
    fn fractional_drip_rounds_up() {
        // capacity 90 -> drip 1.5/sec; deficit 9 -> ceil(6) = 6
        let bucket = BucketLevel::parse("89/90").unwrap();
        assert_eq!(sleep_seconds(bucket, 10), Some(6));
    }

    #[test]
    fn unknown_methods_cost_one_unit() {
        assert_eq!(method_units(&Method::PATCH), 1);
        assert_eq!(method_units(&Method::HEAD), 1);
    }

    #[test]
    fn zero_capacity_bucket_skips_throttling() {
        let bucket = BucketLevel::parse("0/0").unwrap();
        assert_eq!(sleep_seconds(bucket, 10), None);
    }
}

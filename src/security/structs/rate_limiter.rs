use std::collections::BTreeMap;
use parking_lot::RwLock;

/// Sliding-window request limiter keyed on the IPv6-mapped remote address.
///
/// Applied at the access server ingress before any frame is decoded.
pub struct RateLimiter {
    pub(crate) max_count: u64,
    pub(crate) window: u64,
    pub(crate) reject_duration: u64,
    pub(crate) entries: RwLock<BTreeMap<u128, (u64, u64)>>,
}

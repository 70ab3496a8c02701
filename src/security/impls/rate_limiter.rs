use std::collections::btree_map::Entry;
use std::net::IpAddr;
use crate::common::common::current_time;
use crate::security::structs::rate_limiter::RateLimiter;

impl RateLimiter {
    pub fn new(max_count: u64, window: u64, reject_duration: u64) -> RateLimiter {
        RateLimiter {
            max_count,
            window,
            reject_duration,
            entries: Default::default(),
        }
    }

    // Parse the IP, so it's the same size.
    fn key(ip: IpAddr) -> u128 {
        let ip_parsed = match ip {
            IpAddr::V4(ip) => { ip.to_ipv6_compatible() }
            IpAddr::V6(ip) => { ip }
        };
        u128::from_le_bytes(ip_parsed.octets())
    }

    /// Counts one inbound frame against the remote address. Returns false
    /// once the address exceeded its window budget, until the reject
    /// duration has passed.
    pub fn acquire(&self, ip: IpAddr) -> bool {
        let now = current_time();
        let mut lock = self.entries.write();
        match lock.entry(Self::key(ip)) {
            Entry::Vacant(v) => {
                v.insert((now, 1));
                true
            }
            Entry::Occupied(mut o) => {
                let (timestamp, count) = o.get_mut();
                if *count >= self.max_count {
                    if now > *timestamp + self.reject_duration {
                        o.remove();
                        return true;
                    }
                    return false;
                }
                if now > *timestamp + self.window {
                    o.insert((now, 1));
                    return true;
                }
                *count += 1;
                true
            }
        }
    }

    /// Drops window entries that aged out, called from the sweep task.
    pub fn sweep_outdated(&self) {
        let now = current_time();
        let lock = self.entries.read();
        let mut remove_list = vec![];
        for (key, (timestamp, count)) in lock.iter() {
            if *count < self.max_count && now > *timestamp + self.window {
                remove_list.push(*key);
            }
            if *count >= self.max_count && now > *timestamp + self.reject_duration {
                remove_list.push(*key);
            }
        }
        drop(lock);
        let mut lock = self.entries.write();
        for key in remove_list {
            lock.remove(&key);
        }
    }

    pub fn tracked_addresses(&self) -> usize {
        self.entries.read().len()
    }
}

use std::sync::atomic::Ordering;
use crate::hub::structs::scope_hub::ScopeHub;
use crate::stats::enums::stats_event::StatsEvent;
use crate::stats::structs::stats::Stats;

impl ScopeHub {
    pub fn get_stats(&self) -> Stats
    {
        Stats {
            started: self.stats.started.load(Ordering::SeqCst),
            connections_active: self.stats.connections_active.load(Ordering::SeqCst),
            nodes_active: self.stats.nodes_active.load(Ordering::SeqCst),
            sessions_active: self.stats.sessions_active.load(Ordering::SeqCst),
            sessions_evicted: self.stats.sessions_evicted.load(Ordering::SeqCst),
            auth_success: self.stats.auth_success.load(Ordering::SeqCst),
            auth_failed: self.stats.auth_failed.load(Ordering::SeqCst),
            packets_received: self.stats.packets_received.load(Ordering::SeqCst),
            packets_sent: self.stats.packets_sent.load(Ordering::SeqCst),
            protocol_errors: self.stats.protocol_errors.load(Ordering::SeqCst),
            load_requests: self.stats.load_requests.load(Ordering::SeqCst),
            save_requests: self.stats.save_requests.load(Ordering::SeqCst),
            batch_save_requests: self.stats.batch_save_requests.load(Ordering::SeqCst),
            leaderboard_requests: self.stats.leaderboard_requests.load(Ordering::SeqCst),
            top_position_requests: self.stats.top_position_requests.load(Ordering::SeqCst),
            heartbeats: self.stats.heartbeats.load(Ordering::SeqCst),
            timeouts: self.stats.timeouts.load(Ordering::SeqCst),
            sync_requests_sent: self.stats.sync_requests_sent.load(Ordering::SeqCst),
            sync_responses_received: self.stats.sync_responses_received.load(Ordering::SeqCst),
            cache_hits: self.stats.cache_hits.load(Ordering::SeqCst),
            cache_misses: self.stats.cache_misses.load(Ordering::SeqCst),
            rate_limited: self.stats.rate_limited.load(Ordering::SeqCst),
            accounts: self.stats.accounts.load(Ordering::SeqCst),
        }
    }

    pub fn update_stats(&self, event: StatsEvent, value: i64)
    {
        let counter = self.stats_counter(event);
        if value > 0 { counter.fetch_add(value, Ordering::SeqCst); }
        if value < 0 { counter.fetch_sub(-value, Ordering::SeqCst); }
    }

    pub fn set_stats(&self, event: StatsEvent, value: i64)
    {
        self.stats_counter(event).store(value, Ordering::SeqCst);
    }

    fn stats_counter(&self, event: StatsEvent) -> &std::sync::atomic::AtomicI64
    {
        match event {
            StatsEvent::ConnectionsActive => &self.stats.connections_active,
            StatsEvent::NodesActive => &self.stats.nodes_active,
            StatsEvent::SessionsActive => &self.stats.sessions_active,
            StatsEvent::SessionsEvicted => &self.stats.sessions_evicted,
            StatsEvent::AuthSuccess => &self.stats.auth_success,
            StatsEvent::AuthFailed => &self.stats.auth_failed,
            StatsEvent::PacketsReceived => &self.stats.packets_received,
            StatsEvent::PacketsSent => &self.stats.packets_sent,
            StatsEvent::ProtocolErrors => &self.stats.protocol_errors,
            StatsEvent::LoadRequests => &self.stats.load_requests,
            StatsEvent::SaveRequests => &self.stats.save_requests,
            StatsEvent::BatchSaveRequests => &self.stats.batch_save_requests,
            StatsEvent::LeaderboardRequests => &self.stats.leaderboard_requests,
            StatsEvent::TopPositionRequests => &self.stats.top_position_requests,
            StatsEvent::Heartbeats => &self.stats.heartbeats,
            StatsEvent::Timeouts => &self.stats.timeouts,
            StatsEvent::SyncRequestsSent => &self.stats.sync_requests_sent,
            StatsEvent::SyncResponsesReceived => &self.stats.sync_responses_received,
            StatsEvent::CacheHits => &self.stats.cache_hits,
            StatsEvent::CacheMisses => &self.stats.cache_misses,
            StatsEvent::RateLimited => &self.stats.rate_limited,
            StatsEvent::Accounts => &self.stats.accounts,
        }
    }
}

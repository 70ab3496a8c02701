use serde::{Deserialize, Serialize};

/// One leaderboard row. Rank 0 is the highest value; ranks are dense within
/// a single query result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    pub rank: u32,
    pub holder_id: String,
    pub value: f64,
}

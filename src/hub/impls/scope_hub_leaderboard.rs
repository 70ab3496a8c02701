use crate::hub::structs::scope_hub::ScopeHub;
use crate::protocol::enums::packet::Packet;
use crate::protocol::structs::leaderboard_entry::LeaderboardEntry;
use crate::scope::enums::scope_error::ScopeError;

impl ScopeHub {
    /// Leaderboard slice for a scope. Runs the sync barrier first so data
    /// still held in node sessions is visible to the storage query.
    pub async fn get_leaderboard(
        &self,
        scope_id: &str,
        field: &str,
        start_from: u32,
        limit: u32,
        position_holder_id: Option<&str>,
    ) -> Result<Packet, ScopeError> {
        self.sync_scope(scope_id).await;
        let scope = self.scopes.get_or_create(scope_id);
        let entries = scope.query_leaderboard(field, start_from, limit).await?;
        let position_entry = match position_holder_id {
            Some(holder_id) => scope.query_top_position(holder_id, field).await?,
            None => None,
        };
        Ok(Packet::Leaderboard { start_from, entries, position_entry })
    }

    /// The holder's rank on a field. The holder's own value is read first
    /// (possibly from cache), then the barrier runs, then the strictly
    /// greater values are counted.
    pub async fn get_top_position(
        &self,
        scope_id: &str,
        holder_id: &str,
        field: &str,
    ) -> Result<Option<LeaderboardEntry>, ScopeError> {
        let scope = self.scopes.get_or_create(scope_id);
        let value = match scope.field_value(holder_id, field).await? {
            None => return Ok(None),
            Some(value) => value,
        };
        self.sync_scope(scope_id).await;
        let rank = scope.count_above(holder_id, field, value).await?;
        Ok(Some(LeaderboardEntry {
            rank,
            holder_id: holder_id.to_string(),
            value,
        }))
    }
}

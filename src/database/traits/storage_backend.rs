use async_trait::async_trait;
use sqlx::Error;
use crate::accounts::structs::account::Account;
use crate::database::structs::data_filter::DataFilter;
use crate::database::structs::holder_record::HolderRecord;
use crate::database::structs::sort_spec::SortSpec;

/// The storage collaborator the core talks to.
///
/// Scope data lives in one table keyed by `(scope, holder)`; filters and
/// sorts address numeric keys inside the JSON data column. Everything is
/// expressed at this boundary so the scope cache and leaderboard logic never
/// see SQL.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait StorageBackend: Send + Sync {
    async fn find(
        &self,
        scope: &str,
        filters: &[DataFilter],
        sort: Option<SortSpec>,
        limit: u64,
        skip: u64,
    ) -> Result<Vec<HolderRecord>, Error>;

    async fn find_one(&self, scope: &str, holder_id: &str) -> Result<Option<HolderRecord>, Error>;

    async fn insert_one(&self, scope: &str, holder_id: &str, data: &str) -> Result<(), Error>;

    /// Returns whether a row existed and was replaced.
    async fn replace_one(&self, scope: &str, holder_id: &str, data: &str) -> Result<bool, Error>;

    /// Returns whether a row existed and was deleted.
    async fn delete_one(&self, scope: &str, holder_id: &str) -> Result<bool, Error>;

    async fn count(&self, scope: &str, filters: &[DataFilter]) -> Result<u64, Error>;

    /// Creates an expression index over a leaderboard field where the engine
    /// supports it.
    async fn create_index(&self, field: &str) -> Result<(), Error>;

    async fn load_accounts(&self) -> Result<Vec<Account>, Error>;

    async fn upsert_account(&self, account: &Account) -> Result<(), Error>;

    async fn delete_account(&self, login: &str) -> Result<bool, Error>;
}

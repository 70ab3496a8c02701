use std::sync::Arc;
use ahash::AHashMap;
use parking_lot::RwLock;
use crate::accounts::structs::account::Account;
use crate::database::traits::storage_backend::StorageBackend;

/// Keeps every account in memory and writes changes through to storage.
pub struct AccountService {
    pub(crate) storage: Arc<dyn StorageBackend>,
    pub(crate) accounts: RwLock<AHashMap<String, Account>>,
}

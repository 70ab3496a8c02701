use std::collections::BTreeSet;
use std::sync::Arc;
use ahash::AHashMap;
use log::info;
use parking_lot::RwLock;
use crate::accounts::structs::account::Account;
use crate::accounts::structs::account_service::AccountService;
use crate::common::common::current_time;
use crate::common::structs::custom_error::CustomError;
use crate::database::traits::storage_backend::StorageBackend;
use crate::security::security::create_password;

impl AccountService {
    pub fn new(storage: Arc<dyn StorageBackend>) -> AccountService {
        AccountService {
            storage,
            accounts: RwLock::new(AHashMap::new()),
        }
    }

    /// Loads every account row into memory. Called once at boot.
    pub async fn load_from_storage(&self) -> Result<u64, CustomError> {
        let rows = self.storage.load_accounts().await
            .map_err(|e| CustomError::new(&format!("unable to load accounts: {}", e)))?;
        let count = rows.len() as u64;
        let mut lock = self.accounts.write();
        lock.clear();
        for account in rows {
            lock.insert(account.login.clone(), account);
        }
        drop(lock);
        info!("[ACCOUNTS] Loaded {} accounts from storage", count);
        Ok(count)
    }

    pub fn get_account(&self, login: &str) -> Option<Account> {
        self.accounts.read().get(login).cloned()
    }

    pub fn list_accounts(&self) -> Vec<Account> {
        let mut accounts: Vec<Account> = self.accounts.read().values().cloned().collect();
        accounts.sort_by(|a, b| a.login.cmp(&b.login));
        accounts
    }

    pub fn len(&self) -> usize {
        self.accounts.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.read().is_empty()
    }

    /// Creates an account with a freshly hashed password and writes it
    /// through to storage.
    pub async fn create_account(
        &self,
        login: &str,
        password: &str,
        scopes: BTreeSet<String>,
    ) -> Result<Account, CustomError> {
        if login.is_empty() {
            return Err(CustomError::new("login must not be empty"));
        }
        if self.accounts.read().contains_key(login) {
            return Err(CustomError::new("account already exists"));
        }
        let account = Account {
            login: login.to_string(),
            password: create_password(password),
            scopes,
            created: current_time() as i64,
        };
        self.storage.upsert_account(&account).await
            .map_err(|e| CustomError::new(&format!("unable to persist account: {}", e)))?;
        self.accounts.write().insert(account.login.clone(), account.clone());
        Ok(account)
    }

    /// Applies a partial update; a new password is re-hashed before storage.
    pub async fn update_account(
        &self,
        login: &str,
        password: Option<&str>,
        scopes: Option<BTreeSet<String>>,
    ) -> Result<Account, CustomError> {
        let mut account = self.get_account(login)
            .ok_or_else(|| CustomError::new("account not found"))?;
        if let Some(password) = password {
            account.password = create_password(password);
        }
        if let Some(scopes) = scopes {
            account.scopes = scopes;
        }
        self.storage.upsert_account(&account).await
            .map_err(|e| CustomError::new(&format!("unable to persist account: {}", e)))?;
        self.accounts.write().insert(account.login.clone(), account.clone());
        Ok(account)
    }

    pub async fn delete_account(&self, login: &str) -> Result<bool, CustomError> {
        let removed = self.storage.delete_account(login).await
            .map_err(|e| CustomError::new(&format!("unable to delete account: {}", e)))?;
        self.accounts.write().remove(login);
        Ok(removed)
    }
}

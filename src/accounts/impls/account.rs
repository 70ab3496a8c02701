use std::collections::BTreeSet;
use crate::accounts::structs::account::Account;

impl Account {
    /// Rebuilds an account from its raw table columns. A scopes column that
    /// does not parse as a JSON string array yields an empty scope set.
    pub fn from_columns(login: String, password: String, scopes: String, created: i64) -> Account {
        let scopes: BTreeSet<String> = serde_json::from_str(&scopes).unwrap_or_default();
        Account { login, password, scopes, created }
    }

    /// The scopes set as stored in its table column.
    pub fn scopes_column(&self) -> String {
        serde_json::to_string(&self.scopes).unwrap_or_else(|_| "[]".to_string())
    }

    pub fn is_scope_allowed(&self, scope_id: &str) -> bool {
        self.scopes.contains(scope_id)
    }
}

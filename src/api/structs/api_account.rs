use std::collections::BTreeSet;
use serde::{Deserialize, Serialize};
use crate::accounts::structs::account::Account;

/// Account view returned by the API; the password hash never leaves the
/// server.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ApiAccount {
    pub login: String,
    pub scopes: BTreeSet<String>,
    pub created: i64,
}

impl From<&Account> for ApiAccount {
    fn from(account: &Account) -> ApiAccount {
        ApiAccount {
            login: account.login.clone(),
            scopes: account.scopes.clone(),
            created: account.created,
        }
    }
}

#[derive(Serialize, Deserialize, Debug)]
pub struct ApiAccountCreate {
    pub password: String,
    #[serde(default)]
    pub scopes: BTreeSet<String>,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct ApiAccountUpdate {
    pub password: Option<String>,
    pub scopes: Option<BTreeSet<String>>,
}

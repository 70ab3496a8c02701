use std::collections::BTreeSet;
use serde::{Deserialize, Serialize};

/// One node account: login, password hash (`salt$digest`) and the scopes its
/// nodes are allowed to use.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Account {
    pub login: String,
    pub password: String,
    pub scopes: BTreeSet<String>,
    pub created: i64,
}

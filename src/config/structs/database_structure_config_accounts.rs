use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct DatabaseStructureConfigAccounts {
    pub table_name: String,
    pub column_login: String,
    pub column_password: String,
    pub column_scopes: String,
    pub column_created: String,
}

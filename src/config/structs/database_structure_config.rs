use serde::{Deserialize, Serialize};
use crate::config::structs::database_structure_config_accounts::DatabaseStructureConfigAccounts;
use crate::config::structs::database_structure_config_holders::DatabaseStructureConfigHolders;

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct DatabaseStructureConfig {
    pub holders: DatabaseStructureConfigHolders,
    pub accounts: DatabaseStructureConfigAccounts,
}

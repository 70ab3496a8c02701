use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct DatabaseStructureConfigHolders {
    pub table_name: String,
    pub column_scope: String,
    pub column_holder: String,
    pub column_data: String,
}

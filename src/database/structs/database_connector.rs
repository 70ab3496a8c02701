use crate::database::enums::database_drivers::DatabaseDrivers;
use crate::database::structs::database_connector_mysql::DatabaseConnectorMySQL;
use crate::database::structs::database_connector_pgsql::DatabaseConnectorPgSQL;
use crate::database::structs::database_connector_sqlite::DatabaseConnectorSQLite;
use crate::config::structs::database_structure_config::DatabaseStructureConfig;

/// Holds the active driver pool plus the schema layout every query is built
/// against.
#[derive(Clone)]
pub struct DatabaseConnector {
    pub mysql: Option<DatabaseConnectorMySQL>,
    pub sqlite: Option<DatabaseConnectorSQLite>,
    pub pgsql: Option<DatabaseConnectorPgSQL>,
    pub engine: DatabaseDrivers,
    pub structure: DatabaseStructureConfig,
}

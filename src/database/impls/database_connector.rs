use std::sync::Arc;
use async_trait::async_trait;
use sqlx::Error;
use crate::accounts::structs::account::Account;
use crate::config::structs::configuration::Configuration;
use crate::database::enums::database_drivers::DatabaseDrivers;
use crate::database::structs::data_filter::DataFilter;
use crate::database::structs::database_connector::DatabaseConnector;
use crate::database::structs::database_connector_mysql::DatabaseConnectorMySQL;
use crate::database::structs::database_connector_pgsql::DatabaseConnectorPgSQL;
use crate::database::structs::database_connector_sqlite::DatabaseConnectorSQLite;
use crate::database::structs::holder_record::HolderRecord;
use crate::database::structs::sort_spec::SortSpec;
use crate::database::traits::storage_backend::StorageBackend;

impl DatabaseConnector {
    pub async fn new(config: Arc<Configuration>, create_database: bool) -> DatabaseConnector {
        match &config.database.engine {
            DatabaseDrivers::sqlite3 => {
                DatabaseConnectorSQLite::database_connector(config.clone(), create_database).await
            }
            DatabaseDrivers::mysql => {
                DatabaseConnectorMySQL::database_connector(config.clone(), create_database).await
            }
            DatabaseDrivers::pgsql => {
                DatabaseConnectorPgSQL::database_connector(config.clone(), create_database).await
            }
        }
    }
}

#[async_trait]
impl StorageBackend for DatabaseConnector {
    async fn find(
        &self,
        scope: &str,
        filters: &[DataFilter],
        sort: Option<SortSpec>,
        limit: u64,
        skip: u64,
    ) -> Result<Vec<HolderRecord>, Error> {
        let sort = sort.as_ref();
        match self.engine {
            DatabaseDrivers::sqlite3 => self.sqlite.as_ref().unwrap().find(&self.structure, scope, filters, sort, limit, skip).await,
            DatabaseDrivers::mysql => self.mysql.as_ref().unwrap().find(&self.structure, scope, filters, sort, limit, skip).await,
            DatabaseDrivers::pgsql => self.pgsql.as_ref().unwrap().find(&self.structure, scope, filters, sort, limit, skip).await,
        }
    }

    async fn find_one(&self, scope: &str, holder_id: &str) -> Result<Option<HolderRecord>, Error> {
        match self.engine {
            DatabaseDrivers::sqlite3 => self.sqlite.as_ref().unwrap().find_one(&self.structure, scope, holder_id).await,
            DatabaseDrivers::mysql => self.mysql.as_ref().unwrap().find_one(&self.structure, scope, holder_id).await,
            DatabaseDrivers::pgsql => self.pgsql.as_ref().unwrap().find_one(&self.structure, scope, holder_id).await,
        }
    }

    async fn insert_one(&self, scope: &str, holder_id: &str, data: &str) -> Result<(), Error> {
        match self.engine {
            DatabaseDrivers::sqlite3 => self.sqlite.as_ref().unwrap().insert_one(&self.structure, scope, holder_id, data).await,
            DatabaseDrivers::mysql => self.mysql.as_ref().unwrap().insert_one(&self.structure, scope, holder_id, data).await,
            DatabaseDrivers::pgsql => self.pgsql.as_ref().unwrap().insert_one(&self.structure, scope, holder_id, data).await,
        }
    }

    async fn replace_one(&self, scope: &str, holder_id: &str, data: &str) -> Result<bool, Error> {
        match self.engine {
            DatabaseDrivers::sqlite3 => self.sqlite.as_ref().unwrap().replace_one(&self.structure, scope, holder_id, data).await,
            DatabaseDrivers::mysql => self.mysql.as_ref().unwrap().replace_one(&self.structure, scope, holder_id, data).await,
            DatabaseDrivers::pgsql => self.pgsql.as_ref().unwrap().replace_one(&self.structure, scope, holder_id, data).await,
        }
    }

    async fn delete_one(&self, scope: &str, holder_id: &str) -> Result<bool, Error> {
        match self.engine {
            DatabaseDrivers::sqlite3 => self.sqlite.as_ref().unwrap().delete_one(&self.structure, scope, holder_id).await,
            DatabaseDrivers::mysql => self.mysql.as_ref().unwrap().delete_one(&self.structure, scope, holder_id).await,
            DatabaseDrivers::pgsql => self.pgsql.as_ref().unwrap().delete_one(&self.structure, scope, holder_id).await,
        }
    }

    async fn count(&self, scope: &str, filters: &[DataFilter]) -> Result<u64, Error> {
        match self.engine {
            DatabaseDrivers::sqlite3 => self.sqlite.as_ref().unwrap().count(&self.structure, scope, filters).await,
            DatabaseDrivers::mysql => self.mysql.as_ref().unwrap().count(&self.structure, scope, filters).await,
            DatabaseDrivers::pgsql => self.pgsql.as_ref().unwrap().count(&self.structure, scope, filters).await,
        }
    }

    async fn create_index(&self, field: &str) -> Result<(), Error> {
        match self.engine {
            DatabaseDrivers::sqlite3 => self.sqlite.as_ref().unwrap().create_index(&self.structure, field).await,
            DatabaseDrivers::mysql => self.mysql.as_ref().unwrap().create_index(&self.structure, field).await,
            DatabaseDrivers::pgsql => self.pgsql.as_ref().unwrap().create_index(&self.structure, field).await,
        }
    }

    async fn load_accounts(&self) -> Result<Vec<Account>, Error> {
        match self.engine {
            DatabaseDrivers::sqlite3 => self.sqlite.as_ref().unwrap().load_accounts(&self.structure).await,
            DatabaseDrivers::mysql => self.mysql.as_ref().unwrap().load_accounts(&self.structure).await,
            DatabaseDrivers::pgsql => self.pgsql.as_ref().unwrap().load_accounts(&self.structure).await,
        }
    }

    async fn upsert_account(&self, account: &Account) -> Result<(), Error> {
        match self.engine {
            DatabaseDrivers::sqlite3 => self.sqlite.as_ref().unwrap().upsert_account(&self.structure, account).await,
            DatabaseDrivers::mysql => self.mysql.as_ref().unwrap().upsert_account(&self.structure, account).await,
            DatabaseDrivers::pgsql => self.pgsql.as_ref().unwrap().upsert_account(&self.structure, account).await,
        }
    }

    async fn delete_account(&self, login: &str) -> Result<bool, Error> {
        match self.engine {
            DatabaseDrivers::sqlite3 => self.sqlite.as_ref().unwrap().delete_account(&self.structure, login).await,
            DatabaseDrivers::mysql => self.mysql.as_ref().unwrap().delete_account(&self.structure, login).await,
            DatabaseDrivers::pgsql => self.pgsql.as_ref().unwrap().delete_account(&self.structure, login).await,
        }
    }
}

//! Cosmos DB IDs.

use crate::Segment;
use crate::constants::{PROVIDERS, RESOURCE_GROUPS, SUBSCRIPTIONS};

define_resource_id! {
    /// A Cosmos DB database account.
    DatabaseAccountId("Database Account") {
        subscription_id,
        resource_group_name,
        database_account_name,
    }
    shape: [
        Segment::fixed(SUBSCRIPTIONS),
        Segment::subscription_id("subscription_id"),
        Segment::fixed(RESOURCE_GROUPS),
        Segment::resource_group_name("resource_group_name"),
        Segment::fixed(PROVIDERS),
        Segment::provider("Microsoft.DocumentDB"),
        Segment::fixed("databaseAccounts"),
        Segment::user_specified("database_account_name", "databaseAccountValue"),
    ]
}

define_resource_id! {
    /// A SQL database within a Cosmos DB account.
    SqlDatabaseId("SQL Database") {
        subscription_id,
        resource_group_name,
        database_account_name,
        sql_database_name,
    }
    shape: [
        Segment::fixed(SUBSCRIPTIONS),
        Segment::subscription_id("subscription_id"),
        Segment::fixed(RESOURCE_GROUPS),
        Segment::resource_group_name("resource_group_name"),
        Segment::fixed(PROVIDERS),
        Segment::provider("Microsoft.DocumentDB"),
        Segment::fixed("databaseAccounts"),
        Segment::user_specified("database_account_name", "databaseAccountValue"),
        Segment::fixed("sqlDatabases"),
        Segment::user_specified("sql_database_name", "sqlDatabaseValue"),
    ]
}

define_resource_id! {
    /// A container within a Cosmos DB SQL database.
    SqlContainerId("SQL Container") {
        subscription_id,
        resource_group_name,
        database_account_name,
        sql_database_name,
        container_name,
    }
    shape: [
        Segment::fixed(SUBSCRIPTIONS),
        Segment::subscription_id("subscription_id"),
        Segment::fixed(RESOURCE_GROUPS),
        Segment::resource_group_name("resource_group_name"),
        Segment::fixed(PROVIDERS),
        Segment::provider("Microsoft.DocumentDB"),
        Segment::fixed("databaseAccounts"),
        Segment::user_specified("database_account_name", "databaseAccountValue"),
        Segment::fixed("sqlDatabases"),
        Segment::user_specified("sql_database_name", "sqlDatabaseValue"),
        Segment::fixed("containers"),
        Segment::user_specified("container_name", "containerValue"),
    ]
}

impl SqlDatabaseId {
    /// Returns the account owning this database.
    #[must_use]
    pub fn database_account(&self) -> DatabaseAccountId {
        DatabaseAccountId::new(
            self.subscription_id.clone(),
            self.resource_group_name.clone(),
            self.database_account_name.clone(),
        )
    }
}

impl SqlContainerId {
    /// Returns the database owning this container.
    #[must_use]
    pub fn sql_database(&self) -> SqlDatabaseId {
        SqlDatabaseId::new(
            self.subscription_id.clone(),
            self.resource_group_name.clone(),
            self.database_account_name.clone(),
            self.sql_database_name.clone(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn container_roundtrip() {
        let input = "/subscriptions/sub1/resourceGroups/rg1/providers/Microsoft.DocumentDB/databaseAccounts/acct1/sqlDatabases/db1/containers/c1";
        let id = SqlContainerId::parse(input).unwrap();
        assert_eq!(id.container_name, "c1");
        assert_eq!(id.to_string(), input);
        assert_eq!(id.sql_database().database_account().database_account_name, "acct1");
    }

    #[test]
    fn provider_namespace_is_case_insensitive_on_read() {
        let input = "/subscriptions/sub1/resourceGroups/rg1/providers/Microsoft.DocumentDb/databaseAccounts/acct1";
        assert!(DatabaseAccountId::parse(input).is_err());
        let id = DatabaseAccountId::parse_insensitively(input).unwrap();
        assert!(id.id().contains("/Microsoft.DocumentDB/"));
    }
}

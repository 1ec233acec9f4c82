//! Table configuration types (Functional Core - pure data).

use userstore_core::config::DEFAULT_TABLE_NAME;

/// Table schema configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableConfig {
    pub table_name: String,
    pub partition_key: KeyAttribute,
    pub throughput: ProvisionedThroughput,
}

/// A key attribute definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyAttribute {
    pub name: String,
    pub attribute_type: AttributeType,
}

/// DynamoDB attribute types.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttributeType {
    String,
}

/// Fixed read/write capacity units.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProvisionedThroughput {
    pub read_capacity_units: i64,
    pub write_capacity_units: i64,
}

impl TableConfig {
    /// Sets the table name.
    pub fn with_table_name(mut self, name: &str) -> Self {
        self.table_name = name.to_string();
        self
    }
}

/// Returns the table configuration for users: one string hash key `uuid`
/// and 10/10 provisioned capacity. This is a pure function - no I/O.
pub fn users_table_config() -> TableConfig {
    TableConfig {
        table_name: DEFAULT_TABLE_NAME.to_string(),
        partition_key: KeyAttribute {
            name: "uuid".to_string(),
            attribute_type: AttributeType::String,
        },
        throughput: ProvisionedThroughput {
            read_capacity_units: 10,
            write_capacity_units: 10,
        },
    }
}

/// Human-readable description of the table that will be created.
pub fn format_table_config(config: &TableConfig) -> Vec<String> {
    let key_type = match config.partition_key.attribute_type {
        AttributeType::String => "S",
    };
    vec![
        format!("+ Table: {}", config.table_name),
        format!("  Hash key: {} ({})", config.partition_key.name, key_type),
        format!(
            "  Throughput: {} read / {} write",
            config.throughput.read_capacity_units, config.throughput.write_capacity_units
        ),
    ]
}

// src/connection.rs
use std::fmt;
use std::time::Duration;

use futures::future::{BoxFuture, FutureExt};
use thiserror::Error;

use crate::data_types::PreviewDataset;
use crate::samples::SENSOR_READINGS;

pub const DEFAULT_PORT: &str = "5432";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConnectionField {
    Host,
    Port,
    Database,
    Table,
    Username,
    Password,
}

impl ConnectionField {
    /// Form order.
    pub const ALL: [ConnectionField; 6] = [
        ConnectionField::Host,
        ConnectionField::Port,
        ConnectionField::Database,
        ConnectionField::Table,
        ConnectionField::Username,
        ConnectionField::Password,
    ];

    /// Fields that must be non-empty for a connection to succeed, in check order.
    pub const REQUIRED: [ConnectionField; 3] = [
        ConnectionField::Host,
        ConnectionField::Database,
        ConnectionField::Username,
    ];

    pub fn key(self) -> &'static str {
        match self {
            ConnectionField::Host => "host",
            ConnectionField::Port => "port",
            ConnectionField::Database => "database",
            ConnectionField::Table => "table",
            ConnectionField::Username => "username",
            ConnectionField::Password => "password",
        }
    }

    pub fn placeholder(self) -> &'static str {
        match self {
            ConnectionField::Host => "localhost",
            ConnectionField::Port => DEFAULT_PORT,
            ConnectionField::Database => "timeseries_db",
            ConnectionField::Table => "sensor_data",
            ConnectionField::Username => "postgres",
            ConnectionField::Password => "••••••••",
        }
    }

    pub fn is_secret(self) -> bool {
        self == ConnectionField::Password
    }
}

impl fmt::Display for ConnectionField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

#[derive(Clone, PartialEq, Eq)]
pub struct ConnectionParams {
    pub host: String,
    pub port: String,
    pub database: String,
    pub username: String,
    pub password: String,
    pub table: String,
}

impl Default for ConnectionParams {
    fn default() -> Self {
        ConnectionParams {
            host: String::new(),
            port: DEFAULT_PORT.to_string(),
            database: String::new(),
            username: String::new(),
            password: String::new(),
            table: String::new(),
        }
    }
}

impl ConnectionParams {
    pub fn get(&self, field: ConnectionField) -> &str {
        match field {
            ConnectionField::Host => &self.host,
            ConnectionField::Port => &self.port,
            ConnectionField::Database => &self.database,
            ConnectionField::Table => &self.table,
            ConnectionField::Username => &self.username,
            ConnectionField::Password => &self.password,
        }
    }

    pub fn set(&mut self, field: ConnectionField, value: String) {
        let slot = match field {
            ConnectionField::Host => &mut self.host,
            ConnectionField::Port => &mut self.port,
            ConnectionField::Database => &mut self.database,
            ConnectionField::Table => &mut self.table,
            ConnectionField::Username => &mut self.username,
            ConnectionField::Password => &mut self.password,
        };
        *slot = value;
    }

    /// First required field that is empty, if any.
    pub fn missing_required(&self) -> Option<ConnectionField> {
        ConnectionField::REQUIRED
            .into_iter()
            .find(|field| self.get(*field).is_empty())
    }
}

impl fmt::Debug for ConnectionParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConnectionParams")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("database", &self.database)
            .field("username", &self.username)
            .field("password", &"*****")
            .field("table", &self.table)
            .finish()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Connection {
    pub database: String,
    pub table: String,
    pub preview: PreviewDataset,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConnectError {
    #[error("missing required connection parameter: {0}")]
    MissingField(ConnectionField),
}

/// Something that can open a database connection and hand back a first look
/// at the selected table.
pub trait Connector: Send + Sync {
    fn connect(&self, params: ConnectionParams) -> BoxFuture<'static, Result<Connection, ConnectError>>;
}

/// Pretends to connect: waits, checks the required fields and returns the
/// sensor sample. Nothing leaves the process.
#[derive(Debug, Clone)]
pub struct SimulatedConnector {
    latency: Duration,
}

impl SimulatedConnector {
    pub fn new(latency: Duration) -> Self {
        SimulatedConnector { latency }
    }
}

impl Connector for SimulatedConnector {
    fn connect(&self, params: ConnectionParams) -> BoxFuture<'static, Result<Connection, ConnectError>> {
        let latency = self.latency;
        async move {
            tokio::time::sleep(latency).await;

            if let Some(field) = params.missing_required() {
                return Err(ConnectError::MissingField(field));
            }

            Ok(Connection {
                database: params.database,
                table: params.table,
                preview: SENSOR_READINGS.clone(),
            })
        }
        .boxed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(host: &str, database: &str, username: &str) -> ConnectionParams {
        ConnectionParams {
            host: host.into(),
            database: database.into(),
            username: username.into(),
            ..ConnectionParams::default()
        }
    }

    #[test]
    fn defaults_to_postgres_port() {
        let params = ConnectionParams::default();
        assert_eq!(params.port, "5432");
        assert!(params.host.is_empty() && params.table.is_empty());
    }

    #[test]
    fn set_and_get_every_field() {
        let mut params = ConnectionParams::default();
        for field in ConnectionField::ALL {
            params.set(field, format!("{}-value", field));
        }
        for field in ConnectionField::ALL {
            assert_eq!(params.get(field), format!("{}-value", field.key()));
        }
    }

    #[test]
    fn missing_required_reports_first_empty_field() {
        assert_eq!(params("h", "d", "u").missing_required(), None);
        assert_eq!(params("", "d", "u").missing_required(), Some(ConnectionField::Host));
        assert_eq!(params("h", "", "").missing_required(), Some(ConnectionField::Database));
        assert_eq!(params("h", "d", "").missing_required(), Some(ConnectionField::Username));
    }

    #[test]
    fn debug_hides_password() {
        let mut p = params("h", "d", "u");
        p.password = "hunter2".into();
        let rendered = format!("{:?}", p);
        assert!(!rendered.contains("hunter2"));
        assert!(rendered.contains("*****"));
    }

    #[tokio::test]
    async fn connects_when_required_fields_present() {
        let connector = SimulatedConnector::new(Duration::ZERO);
        let mut p = params("h", "d", "u");
        p.table = "sensor_data".into();

        let connection = connector.connect(p).await.unwrap();
        assert_eq!(connection.database, "d");
        assert_eq!(connection.table, "sensor_data");
        assert_eq!(connection.preview, *SENSOR_READINGS);
    }

    #[tokio::test]
    async fn fails_without_host() {
        let connector = SimulatedConnector::new(Duration::ZERO);
        let err = connector.connect(params("", "d", "u")).await.unwrap_err();
        assert_eq!(err, ConnectError::MissingField(ConnectionField::Host));
        assert_eq!(err.to_string(), "missing required connection parameter: host");
    }

    #[tokio::test(start_paused = true)]
    async fn waits_for_configured_latency() {
        let connector = SimulatedConnector::new(Duration::from_millis(2000));
        let started = tokio::time::Instant::now();
        connector.connect(params("h", "d", "u")).await.unwrap();
        assert!(started.elapsed() >= Duration::from_millis(2000));
    }
}

// src/form.rs
//! Connection form state, driven through a single `update` function.

use crate::connection::{ConnectError, Connection, ConnectionField, ConnectionParams};
use crate::data_types::{PreviewDataset, RequestId};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConnectionStatus {
    #[default]
    Idle,
    Connecting,
    Connected,
    Error,
}

#[derive(Debug, Clone)]
pub enum FormAction {
    Edit(ConnectionField, String),
    Submit(RequestId),
    Resolve(RequestId, Result<Connection, ConnectError>),
}

#[derive(Debug, Clone, PartialEq)]
pub enum FormOutcome {
    Updated,
    /// A connect attempt should be started with this parameter snapshot.
    Dispatch(ConnectionParams),
    /// Submit while an attempt is running.
    Rejected,
    /// Result of an attempt that is no longer pending.
    Stale,
    Connected(PreviewDataset),
    Failed,
}

#[derive(Debug, Default)]
pub struct ConnectionForm {
    params: ConnectionParams,
    status: ConnectionStatus,
    pending: Option<RequestId>,
    connection: Option<Connection>,
}

impl ConnectionForm {
    pub fn params(&self) -> &ConnectionParams {
        &self.params
    }

    pub fn status(&self) -> ConnectionStatus {
        self.status
    }

    pub fn pending(&self) -> Option<RequestId> {
        self.pending
    }

    pub fn connection(&self) -> Option<&Connection> {
        self.connection.as_ref()
    }

    pub fn can_connect(&self) -> bool {
        self.status != ConnectionStatus::Connecting
    }

    pub fn update(&mut self, action: FormAction) -> FormOutcome {
        match action {
            FormAction::Edit(field, value) => {
                self.params.set(field, value);
                self.status = ConnectionStatus::Idle;
                // The running attempt used the old values.
                self.pending = None;
                FormOutcome::Updated
            }

            FormAction::Submit(request) => {
                if !self.can_connect() {
                    return FormOutcome::Rejected;
                }
                self.status = ConnectionStatus::Connecting;
                self.pending = Some(request);
                FormOutcome::Dispatch(self.params.clone())
            }

            FormAction::Resolve(request, result) => {
                if self.pending != Some(request) {
                    return FormOutcome::Stale;
                }
                self.pending = None;

                match result {
                    Ok(connection) => {
                        let preview = connection.preview.clone();
                        self.status = ConnectionStatus::Connected;
                        self.connection = Some(connection);
                        FormOutcome::Connected(preview)
                    }
                    Err(_) => {
                        self.status = ConnectionStatus::Error;
                        FormOutcome::Failed
                    }
                }
            }
        }
    }
}

// src/session.rs
use crate::connection::{ConnectError, Connection, ConnectionField, ConnectionParams};
use crate::data_types::{DataSource, Preview, PreviewDataset, RequestId, RequestSeq, UploadedFile};
use crate::form::{ConnectionForm, FormAction, FormOutcome};

/// Everything the upload screen knows: the chosen file, the connection form
/// and the dataset currently previewed.
#[derive(Debug, Default)]
pub struct UploadSession {
    requests: RequestSeq,
    uploaded_file: Option<UploadedFile>,
    pending_upload: Option<RequestId>,
    form: ConnectionForm,
    preview: Option<Preview>,
}

impl UploadSession {
    pub fn uploaded_file(&self) -> Option<&UploadedFile> {
        self.uploaded_file.as_ref()
    }

    pub fn pending_upload(&self) -> Option<RequestId> {
        self.pending_upload
    }

    pub fn form(&self) -> &ConnectionForm {
        &self.form
    }

    pub fn preview(&self) -> Option<&Preview> {
        self.preview.as_ref()
    }

    /// Records the selection right away and returns the id its parse result
    /// must carry. Any parse still running for an earlier file goes stale.
    pub fn select_file(&mut self, file: UploadedFile) -> RequestId {
        let request = self.requests.next();
        log::info!("Selected {} ({} bytes) as request {:?}", file.name, file.size, request);
        self.uploaded_file = Some(file);
        self.pending_upload = Some(request);
        request
    }

    pub fn finish_upload(&mut self, request: RequestId, dataset: PreviewDataset) -> bool {
        if self.pending_upload != Some(request) {
            log::warn!("Dropping stale upload result {:?}", request);
            return false;
        }
        self.pending_upload = None;

        let name = self
            .uploaded_file
            .as_ref()
            .map(|file| file.name.clone())
            .unwrap_or_default();
        self.offer_preview(request, dataset, DataSource::File(name))
    }

    pub fn edit_field(&mut self, field: ConnectionField, value: String) {
        self.form.update(FormAction::Edit(field, value));
    }

    /// Starts a connect attempt, or returns `None` while one is running.
    pub fn connect(&mut self) -> Option<(RequestId, ConnectionParams)> {
        if !self.form.can_connect() {
            return None;
        }
        let request = self.requests.next();
        match self.form.update(FormAction::Submit(request)) {
            FormOutcome::Dispatch(params) => {
                log::info!(
                    "Connecting to {}:{}/{} as {} (request {:?})",
                    params.host,
                    params.port,
                    params.database,
                    params.username,
                    request
                );
                Some((request, params))
            }
            _ => None,
        }
    }

    pub fn finish_connect(
        &mut self,
        request: RequestId,
        result: Result<Connection, ConnectError>,
    ) -> bool {
        if let Err(err) = &result {
            log::warn!("Connection attempt {:?} failed: {}", request, err);
        }

        let source = result.as_ref().ok().map(|connection| DataSource::Database {
            database: connection.database.clone(),
            table: connection.table.clone(),
        });

        match self.form.update(FormAction::Resolve(request, result)) {
            FormOutcome::Connected(dataset) => match source {
                Some(source) => self.offer_preview(request, dataset, source),
                None => false,
            },
            FormOutcome::Stale => {
                log::warn!("Dropping stale connection result {:?}", request);
                false
            }
            _ => false,
        }
    }

    /// Newer requests win; an older one resolving late leaves the preview alone.
    fn offer_preview(&mut self, request: RequestId, dataset: PreviewDataset, source: DataSource) -> bool {
        if let Some(current) = &self.preview {
            if current.request > request {
                log::warn!(
                    "Keeping preview from {:?}; {:?} from {} is older",
                    current.request,
                    request,
                    source
                );
                return false;
            }
        }

        log::debug!("Previewing {} rows from {}", dataset.rows.len(), source);
        self.preview = Some(Preview {
            dataset,
            source,
            request,
        });
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::ConnectionStatus;
    use crate::samples::{DAILY_SERIES, SENSOR_READINGS};

    fn fill_required(session: &mut UploadSession) {
        session.edit_field(ConnectionField::Host, "h".into());
        session.edit_field(ConnectionField::Database, "d".into());
        session.edit_field(ConnectionField::Username, "u".into());
    }

    fn connected(database: &str) -> Connection {
        Connection {
            database: database.into(),
            table: "sensor_data".into(),
            preview: SENSOR_READINGS.clone(),
        }
    }

    #[test]
    fn no_preview_until_a_workflow_finishes() {
        let mut session = UploadSession::default();
        assert!(session.preview().is_none());

        session.select_file(UploadedFile::new("a.csv", 10));
        assert!(session.preview().is_none());
        assert!(session.pending_upload().is_some());
    }

    #[test]
    fn file_selection_is_visible_immediately() {
        let mut session = UploadSession::default();
        session.select_file(UploadedFile::new("a.csv", 2048));
        let file = session.uploaded_file().unwrap();
        assert_eq!(file.name, "a.csv");
        assert_eq!(file.size, 2048);
    }

    #[test]
    fn upload_result_fills_preview() {
        let mut session = UploadSession::default();
        let request = session.select_file(UploadedFile::new("a.csv", 10));
        assert!(session.finish_upload(request, DAILY_SERIES.clone()));

        let preview = session.preview().unwrap();
        assert_eq!(preview.dataset, *DAILY_SERIES);
        assert_eq!(preview.source, DataSource::File("a.csv".into()));
        assert!(!session.pending_upload().is_some());
    }

    #[test]
    fn second_selection_supersedes_first() {
        let mut session = UploadSession::default();
        let first = session.select_file(UploadedFile::new("a.csv", 10));
        let second = session.select_file(UploadedFile::new("b.csv", 20));

        assert!(!session.finish_upload(first, DAILY_SERIES.clone()));
        assert!(session.preview().is_none());
        assert!(session.finish_upload(second, DAILY_SERIES.clone()));
        assert_eq!(session.preview().unwrap().source, DataSource::File("b.csv".into()));
    }

    #[test]
    fn successful_connect_previews_sensor_data() {
        let mut session = UploadSession::default();
        fill_required(&mut session);

        let (request, params) = session.connect().unwrap();
        assert_eq!(params.database, "d");
        assert_eq!(session.form().status(), ConnectionStatus::Connecting);
        assert!(session.connect().is_none());

        assert!(session.finish_connect(request, Ok(connected("d"))));
        assert_eq!(session.form().status(), ConnectionStatus::Connected);
        assert_eq!(session.preview().unwrap().dataset, *SENSOR_READINGS);
    }

    #[test]
    fn failed_connect_keeps_previous_preview() {
        let mut session = UploadSession::default();
        let upload = session.select_file(UploadedFile::new("a.csv", 10));
        session.finish_upload(upload, DAILY_SERIES.clone());

        session.edit_field(ConnectionField::Database, "d".into());
        session.edit_field(ConnectionField::Username, "u".into());
        let (request, _) = session.connect().unwrap();
        let changed = session.finish_connect(
            request,
            Err(ConnectError::MissingField(ConnectionField::Host)),
        );

        assert!(!changed);
        assert_eq!(session.form().status(), ConnectionStatus::Error);
        assert_eq!(session.preview().unwrap().dataset, *DAILY_SERIES);
    }

    #[test]
    fn older_request_never_overwrites_newer_preview() {
        let mut session = UploadSession::default();
        fill_required(&mut session);

        let (connect, _) = session.connect().unwrap();
        let upload = session.select_file(UploadedFile::new("a.csv", 10));

        assert!(session.finish_upload(upload, DAILY_SERIES.clone()));
        assert!(!session.finish_connect(connect, Ok(connected("d"))));

        assert_eq!(session.form().status(), ConnectionStatus::Connected);
        assert_eq!(session.preview().unwrap().dataset, *DAILY_SERIES);
    }

    #[test]
    fn newer_connect_replaces_upload_preview() {
        let mut session = UploadSession::default();
        fill_required(&mut session);

        let upload = session.select_file(UploadedFile::new("a.csv", 10));
        let (connect, _) = session.connect().unwrap();

        assert!(session.finish_connect(connect, Ok(connected("d"))));
        assert!(!session.finish_upload(upload, DAILY_SERIES.clone()));
        assert!(!session.pending_upload().is_some());
        assert_eq!(session.preview().unwrap().dataset, *SENSOR_READINGS);
    }

    #[test]
    fn editing_during_connect_drops_result() {
        let mut session = UploadSession::default();
        fill_required(&mut session);
        let (request, _) = session.connect().unwrap();

        session.edit_field(ConnectionField::Table, "other".into());
        assert!(!session.finish_connect(request, Ok(connected("d"))));
        assert_eq!(session.form().status(), ConnectionStatus::Idle);
        assert!(session.preview().is_none());
    }
}

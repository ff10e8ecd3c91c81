// src/app.rs
use std::sync::Arc;

use iced::{executor, Application, Command, Element, Theme};

use crate::config::AppConfig;
use crate::connection::{ConnectError, Connection, ConnectionField, Connector, SimulatedConnector};
use crate::data_types::{PreviewDataset, RequestId, UploadedFile};
use crate::intake::{self, DatasetParser, SimulatedParser};
use crate::labels::Labels;
use crate::session::UploadSession;
use crate::views;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    File,
    Database,
}

#[derive(Debug, Clone)]
pub enum Message {
    TabSelected(Tab),
    ToggleTheme,
    OpenFileDialog,
    FilePicked(Option<UploadedFile>),
    UploadParsed(RequestId, PreviewDataset),
    FieldEdited(ConnectionField, String),
    Connect,
    ConnectFinished(RequestId, Result<Connection, ConnectError>),
    DownloadSample,
    Back,
    Continue,
}

pub struct DataUpload {
    pub(crate) session: UploadSession,
    pub(crate) tab: Tab,
    pub(crate) dark_mode: bool,
    pub(crate) labels: &'static Labels,
    parser: Arc<dyn DatasetParser>,
    connector: Arc<dyn Connector>,
}

impl DataUpload {
    pub fn with_backends(
        config: &AppConfig,
        parser: Arc<dyn DatasetParser>,
        connector: Arc<dyn Connector>,
    ) -> Self {
        DataUpload {
            session: UploadSession::default(),
            tab: Tab::default(),
            dark_mode: config.dark_mode,
            labels: Labels::for_locale(config.locale),
            parser,
            connector,
        }
    }
}

impl Application for DataUpload {
    type Executor = executor::Default;
    type Message = Message;
    type Theme = Theme;
    type Flags = AppConfig;

    fn new(config: AppConfig) -> (Self, Command<Message>) {
        let parser = Arc::new(SimulatedParser::new(config.upload_delay()));
        let connector = Arc::new(SimulatedConnector::new(config.connect_delay()));
        (
            DataUpload::with_backends(&config, parser, connector),
            Command::none(),
        )
    }

    fn title(&self) -> String {
        self.labels.title.to_string()
    }

    fn theme(&self) -> Theme {
        if self.dark_mode {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    fn update(&mut self, message: Message) -> Command<Message> {
        match message {
            Message::TabSelected(tab) => {
                self.tab = tab;
                Command::none()
            }

            Message::ToggleTheme => {
                self.dark_mode = !self.dark_mode;
                Command::none()
            }

            Message::OpenFileDialog => Command::perform(intake::pick_file(), Message::FilePicked),

            Message::FilePicked(Some(file)) => {
                let request = self.session.select_file(file.clone());
                Command::perform(self.parser.parse_dataset(file), move |dataset| {
                    Message::UploadParsed(request, dataset)
                })
            }

            Message::FilePicked(None) => {
                log::debug!("File selection cancelled");
                Command::none()
            }

            Message::UploadParsed(request, dataset) => {
                self.session.finish_upload(request, dataset);
                Command::none()
            }

            Message::FieldEdited(field, value) => {
                self.session.edit_field(field, value);
                Command::none()
            }

            Message::Connect => match self.session.connect() {
                Some((request, params)) => {
                    Command::perform(self.connector.connect(params), move |result| {
                        Message::ConnectFinished(request, result)
                    })
                }
                None => Command::none(),
            },

            Message::ConnectFinished(request, result) => {
                self.session.finish_connect(request, result);
                Command::none()
            }

            Message::DownloadSample | Message::Back | Message::Continue => {
                log::debug!("{:?} is not wired to anything", message);
                Command::none()
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        views::page(self)
    }
}

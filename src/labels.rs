// src/labels.rs
use serde::{Deserialize, Serialize};

use crate::connection::ConnectionField;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    Ru,
    En,
}

/// User-visible text for one locale.
pub struct Labels {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub tab_file: &'static str,
    pub tab_database: &'static str,
    pub upload_title: &'static str,
    pub upload_formats: &'static str,
    pub drop_hint: &'static str,
    pub max_size: &'static str,
    pub choose_file: &'static str,
    pub megabytes: &'static str,
    pub upload_success: &'static str,
    pub database_title: &'static str,
    pub database_description: &'static str,
    pub host: &'static str,
    pub port: &'static str,
    pub database: &'static str,
    pub table: &'static str,
    pub username: &'static str,
    pub password: &'static str,
    pub connect: &'static str,
    pub connecting: &'static str,
    pub connected_title: &'static str,
    pub connected_to: &'static str,
    pub error_title: &'static str,
    pub error_detail: &'static str,
    pub preview_title: &'static str,
    pub preview_description: &'static str,
    pub showing: &'static str,
    pub of: &'static str,
    pub rows: &'static str,
    pub download_sample: &'static str,
    pub back: &'static str,
    pub continue_to_model: &'static str,
    pub theme_toggle: &'static str,
}

pub static RU: Labels = Labels {
    title: "Загрузка данных",
    subtitle: "Загрузите данные временных рядов из файла или подключитесь к базе данных PostgreSQL",
    tab_file: "Загрузка из файла",
    tab_database: "Подключение к БД",
    upload_title: "Загрузка файла",
    upload_formats: "Поддерживаются форматы: CSV, Excel (.xlsx, .xls)",
    drop_hint: "Перетащите файл сюда или выберите файл",
    max_size: "Максимальный размер файла",
    choose_file: "Выбрать файл",
    megabytes: "МБ",
    upload_success: "Файл успешно загружен",
    database_title: "Подключение к PostgreSQL",
    database_description: "Введите параметры подключения к базе данных",
    host: "Хост",
    port: "Порт",
    database: "База данных",
    table: "Таблица",
    username: "Пользователь",
    password: "Пароль",
    connect: "Подключиться",
    connecting: "Подключение...",
    connected_title: "Подключение установлено",
    connected_to: "Успешно подключено к",
    error_title: "Ошибка подключения",
    error_detail: "Проверьте параметры подключения и повторите попытку",
    preview_title: "Предпросмотр данных",
    preview_description: "Первые 5 строк загруженных данных",
    showing: "Показано",
    of: "из",
    rows: "строк",
    download_sample: "Скачать образец",
    back: "Назад",
    continue_to_model: "Продолжить к настройке модели",
    theme_toggle: "Тема",
};

pub static EN: Labels = Labels {
    title: "Data upload",
    subtitle: "Upload time-series data from a file or connect to a PostgreSQL database",
    tab_file: "From file",
    tab_database: "Database connection",
    upload_title: "File upload",
    upload_formats: "Supported formats: CSV, Excel (.xlsx, .xls)",
    drop_hint: "Drop a file here or choose one",
    max_size: "Maximum file size",
    choose_file: "Choose file",
    megabytes: "MB",
    upload_success: "File uploaded successfully",
    database_title: "PostgreSQL connection",
    database_description: "Enter the database connection parameters",
    host: "Host",
    port: "Port",
    database: "Database",
    table: "Table",
    username: "User",
    password: "Password",
    connect: "Connect",
    connecting: "Connecting...",
    connected_title: "Connection established",
    connected_to: "Connected to",
    error_title: "Connection error",
    error_detail: "Check the connection parameters and try again",
    preview_title: "Data preview",
    preview_description: "First 5 rows of the loaded data",
    showing: "Showing",
    of: "of",
    rows: "rows",
    download_sample: "Download sample",
    back: "Back",
    continue_to_model: "Continue to model setup",
    theme_toggle: "Theme",
};

impl Labels {
    pub fn for_locale(locale: Locale) -> &'static Labels {
        match locale {
            Locale::Ru => &RU,
            Locale::En => &EN,
        }
    }

    pub fn field(&self, field: ConnectionField) -> &'static str {
        match field {
            ConnectionField::Host => self.host,
            ConnectionField::Port => self.port,
            ConnectionField::Database => self.database,
            ConnectionField::Table => self.table,
            ConnectionField::Username => self.username,
            ConnectionField::Password => self.password,
        }
    }

    pub fn caption(&self, shown: usize, total: usize) -> String {
        format!("{} {} {} {} {}", self.showing, shown, self.of, total, self.rows)
    }

    pub fn max_size_hint(&self, megabytes: u64) -> String {
        format!("{}: {} {}", self.max_size, megabytes, self.megabytes)
    }
}

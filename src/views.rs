// src/views.rs
use iced::alignment::Horizontal;
use iced::theme;
use iced::widget::{button, column, container, row, scrollable, text, text_input, Column, Row, Space};
use iced::{Alignment, Element, Length};

use crate::app::{DataUpload, Message, Tab};
use crate::connection::ConnectionField;
use crate::data_types::Preview;
use crate::form::{ConnectionForm, ConnectionStatus};
use crate::intake::ADVERTISED_MAX_MEGABYTES;
use crate::labels::Labels;
use crate::ui::{self, Backdrop, Panel, Styles, TabStyle};

const CELL_WIDTH: f32 = 190.0;
const PAGE_WIDTH: f32 = 1152.0;

pub fn page(app: &DataUpload) -> Element<'_, Message> {
    let styles = ui::styles(app.dark_mode);
    let labels = app.labels;

    let header = row![
        column![
            text(labels.title).size(28).style(styles.fg),
            text(labels.subtitle).size(16).style(styles.muted_fg),
        ]
        .spacing(6),
        Space::with_width(Length::Fill),
        button(text(labels.theme_toggle).size(14))
            .on_press(Message::ToggleTheme)
            .padding([6, 12])
            .style(theme::Button::Secondary),
    ]
    .align_items(Alignment::Center);

    let tabs = row![
        tab_button(labels.tab_file, Tab::File, app.tab, styles),
        tab_button(labels.tab_database, Tab::Database, app.tab, styles),
    ]
    .spacing(8);

    let body = match app.tab {
        Tab::File => file_tab(app, labels, styles),
        Tab::Database => database_tab(app.session.form(), labels, styles),
    };

    let mut content = column![header, tabs, body]
        .spacing(24)
        .padding(24)
        .max_width(PAGE_WIDTH);

    // Preview and navigation only exist once some workflow produced data.
    if let Some(preview) = app.session.preview() {
        content = content
            .push(preview_section(preview, labels, styles))
            .push(navigation(labels));
    }

    container(scrollable(
        container(content).width(Length::Fill).center_x(),
    ))
    .width(Length::Fill)
    .height(Length::Fill)
    .style(theme::Container::Custom(Box::new(Backdrop { bg: styles.bg })))
    .into()
}

fn panel(style: Panel) -> theme::Container {
    theme::Container::Custom(Box::new(style))
}

fn card<'a>(content: impl Into<Element<'a, Message>>, styles: &Styles) -> Element<'a, Message> {
    container(content)
        .width(Length::Fill)
        .padding(20)
        .style(panel(Panel::card(styles)))
        .into()
}

fn tab_button<'a>(label: &'static str, tab: Tab, selected: Tab, styles: &Styles) -> Element<'a, Message> {
    button(
        text(label)
            .size(16)
            .width(Length::Fill)
            .horizontal_alignment(Horizontal::Center),
    )
    .on_press(Message::TabSelected(tab))
    .padding(10)
    .width(Length::Fill)
    .style(theme::Button::Custom(Box::new(TabStyle::new(styles, tab == selected))))
    .into()
}

fn banner<'a>(title: &'static str, detail: String, style: Panel, fg: iced::Color) -> Element<'a, Message> {
    container(
        column![
            text(title).size(16).style(fg),
            text(detail).size(14).style(fg),
        ]
        .spacing(4),
    )
    .width(Length::Fill)
    .padding(16)
    .style(panel(style))
    .into()
}

fn file_tab<'a>(app: &'a DataUpload, labels: &'static Labels, styles: &'static Styles) -> Element<'a, Message> {
    let drop_zone = container(
        column![
            text(labels.drop_hint).size(18).style(styles.fg),
            text(labels.max_size_hint(ADVERTISED_MAX_MEGABYTES))
                .size(14)
                .style(styles.muted_fg),
            button(text(labels.choose_file))
                .on_press(Message::OpenFileDialog)
                .padding([8, 16])
                .style(theme::Button::Primary),
        ]
        .spacing(12)
        .align_items(Alignment::Center),
    )
    .width(Length::Fill)
    .padding(32)
    .center_x()
    .style(panel(Panel::card(styles)));

    let mut content = column![
        text(labels.upload_title).size(20).style(styles.fg),
        text(labels.upload_formats).size(14).style(styles.muted_fg),
        drop_zone,
    ]
    .spacing(12);

    if let Some(file) = app.session.uploaded_file() {
        content = content.push(banner(
            labels.upload_success,
            file.describe(labels.megabytes),
            Panel::success(styles),
            styles.success_fg,
        ));
    }

    card(content, styles)
}

fn field_input<'a>(field: ConnectionField, value: &str, labels: &Labels, styles: &Styles) -> Element<'a, Message> {
    let mut input = text_input(field.placeholder(), value)
        .on_input(move |value| Message::FieldEdited(field, value))
        .padding(8);
    if field.is_secret() {
        input = input.password();
    }

    column![text(labels.field(field)).size(14).style(styles.fg), input]
        .spacing(6)
        .width(Length::Fill)
        .into()
}

fn database_tab<'a>(form: &'a ConnectionForm, labels: &'static Labels, styles: &'static Styles) -> Element<'a, Message> {
    let params = form.params();

    let mut grid = Column::new().spacing(12);
    for pair in ConnectionField::ALL.chunks(2) {
        let mut line = Row::new().spacing(16);
        for &field in pair {
            line = line.push(field_input(field, params.get(field), labels, styles));
        }
        grid = grid.push(line);
    }

    let connecting = form.status() == ConnectionStatus::Connecting;
    let mut connect = button(
        text(if connecting { labels.connecting } else { labels.connect })
            .width(Length::Fill)
            .horizontal_alignment(Horizontal::Center),
    )
    .width(Length::Fill)
    .padding(10)
    .style(theme::Button::Primary);
    if form.can_connect() {
        connect = connect.on_press(Message::Connect);
    }

    let mut content = column![
        text(labels.database_title).size(20).style(styles.fg),
        text(labels.database_description).size(14).style(styles.muted_fg),
        grid,
        connect,
    ]
    .spacing(12);

    match form.status() {
        ConnectionStatus::Connected => {
            let database = form.connection().map(|c| c.database.as_str()).unwrap_or_default();
            content = content.push(banner(
                labels.connected_title,
                format!("{} {}", labels.connected_to, database),
                Panel::success(styles),
                styles.success_fg,
            ));
        }
        ConnectionStatus::Error => {
            content = content.push(banner(
                labels.error_title,
                labels.error_detail.to_string(),
                Panel::error(styles),
                styles.error_fg,
            ));
        }
        ConnectionStatus::Idle | ConnectionStatus::Connecting => {}
    }

    card(content, styles)
}

fn table_cell<'a>(value: &str, bg: iced::Color, fg: iced::Color, styles: &Styles) -> Element<'a, Message> {
    container(text(value).size(14).style(fg))
        .width(Length::Fixed(CELL_WIDTH))
        .padding(8)
        .style(panel(Panel::cell(bg, styles)))
        .into()
}

fn preview_section<'a>(preview: &'a Preview, labels: &'static Labels, styles: &'static Styles) -> Element<'a, Message> {
    let dataset = &preview.dataset;

    let header = Row::with_children(
        dataset
            .columns
            .iter()
            .map(|name| table_cell(name, styles.header_bg, styles.header_fg, styles))
            .collect(),
    );

    let body = Column::with_children(
        dataset
            .rows
            .iter()
            .map(|cells| {
                Row::with_children(
                    cells
                        .iter()
                        .map(|cell| table_cell(cell, styles.panel_bg, styles.fg, styles))
                        .collect(),
                )
                .into()
            })
            .collect(),
    );

    let (shown, total) = dataset.caption_counts();
    let footer = row![
        text(labels.caption(shown, total)).size(14).style(styles.muted_fg),
        Space::with_width(Length::Fill),
        button(text(labels.download_sample).size(14))
            .on_press(Message::DownloadSample)
            .padding([6, 12])
            .style(theme::Button::Secondary),
    ]
    .align_items(Alignment::Center);

    card(
        column![
            text(labels.preview_title).size(20).style(styles.fg),
            text(labels.preview_description).size(14).style(styles.muted_fg),
            column![header, body],
            footer,
        ]
        .spacing(12),
        styles,
    )
}

fn navigation<'a>(labels: &'static Labels) -> Element<'a, Message> {
    row![
        Space::with_width(Length::Fill),
        button(text(labels.back))
            .on_press(Message::Back)
            .padding([8, 16])
            .style(theme::Button::Secondary),
        button(text(labels.continue_to_model))
            .on_press(Message::Continue)
            .padding([8, 16])
            .style(theme::Button::Primary),
    ]
    .spacing(16)
    .into()
}

// src/ui.rs
use iced::widget::{button, container};
use iced::{Background, Color, Theme};
use once_cell::sync::Lazy;

pub struct Styles {
    pub bg: Color,
    pub fg: Color,
    pub muted_fg: Color,
    pub panel_bg: Color,
    pub border: Color,
    pub header_bg: Color,
    pub header_fg: Color,
    pub accent: Color,
    pub accent_fg: Color,
    pub success_bg: Color,
    pub success_border: Color,
    pub success_fg: Color,
    pub error_bg: Color,
    pub error_border: Color,
    pub error_fg: Color,
}

pub static DARK_THEME: Lazy<Styles> = Lazy::new(|| Styles {
    bg: Color::from_rgb(0.0, 0.0, 0.0),
    fg: Color::from_rgb(1.0, 1.0, 1.0),
    muted_fg: Color::from_rgb(0.63, 0.63, 0.67),
    panel_bg: Color::from_rgb(0.09, 0.09, 0.11),
    border: Color::from_rgb(0.25, 0.25, 0.28),
    header_bg: Color::from_rgb(0.2, 0.2, 0.2),
    header_fg: Color::from_rgb(1.0, 1.0, 1.0),
    accent: Color::from_rgb(0.0078, 0.325, 0.6118), // #02539c
    accent_fg: Color::from_rgb(1.0, 1.0, 1.0),
    success_bg: Color::from_rgb(0.02, 0.18, 0.09),
    success_border: Color::from_rgb(0.09, 0.4, 0.2),
    success_fg: Color::from_rgb(0.53, 0.94, 0.67),
    error_bg: Color::from_rgb(0.27, 0.04, 0.04),
    error_border: Color::from_rgb(0.6, 0.11, 0.11),
    error_fg: Color::from_rgb(0.99, 0.65, 0.65),
});

pub static LIGHT_THEME: Lazy<Styles> = Lazy::new(|| Styles {
    bg: Color::from_rgb(1.0, 1.0, 1.0),
    fg: Color::from_rgb(0.0, 0.0, 0.0),
    muted_fg: Color::from_rgb(0.44, 0.44, 0.48),
    panel_bg: Color::from_rgb(1.0, 1.0, 1.0),
    border: Color::from_rgb(0.89, 0.91, 0.94),
    header_bg: Color::from_rgb(0.8784, 0.8784, 0.8784), // #e0e0e0
    header_fg: Color::from_rgb(0.0, 0.0, 0.0),
    accent: Color::from_rgb(0.0078, 0.325, 0.6118), // #02539c
    accent_fg: Color::from_rgb(1.0, 1.0, 1.0),
    success_bg: Color::from_rgb(0.94, 0.99, 0.96), // green-50
    success_border: Color::from_rgb(0.73, 0.97, 0.82), // green-200
    success_fg: Color::from_rgb(0.09, 0.4, 0.2),
    error_bg: Color::from_rgb(1.0, 0.95, 0.95), // red-50
    error_border: Color::from_rgb(1.0, 0.79, 0.79), // red-200
    error_fg: Color::from_rgb(0.6, 0.11, 0.11),
});

pub fn styles(dark_mode: bool) -> &'static Styles {
    if dark_mode {
        &DARK_THEME
    } else {
        &LIGHT_THEME
    }
}

/// Bordered box used for cards, banners and table cells.
pub struct Panel {
    pub bg: Color,
    pub border: Color,
    pub radius: f32,
}

impl Panel {
    pub fn card(styles: &Styles) -> Self {
        Panel {
            bg: styles.panel_bg,
            border: styles.border,
            radius: 8.0,
        }
    }

    pub fn success(styles: &Styles) -> Self {
        Panel {
            bg: styles.success_bg,
            border: styles.success_border,
            radius: 8.0,
        }
    }

    pub fn error(styles: &Styles) -> Self {
        Panel {
            bg: styles.error_bg,
            border: styles.error_border,
            radius: 8.0,
        }
    }

    pub fn cell(bg: Color, styles: &Styles) -> Self {
        Panel {
            bg,
            border: styles.border,
            radius: 0.0,
        }
    }
}

impl container::StyleSheet for Panel {
    type Style = Theme;

    fn appearance(&self, _style: &Self::Style) -> container::Appearance {
        container::Appearance {
            background: Some(Background::Color(self.bg)),
            border_radius: self.radius.into(),
            border_width: 1.0,
            border_color: self.border,
            ..container::Appearance::default()
        }
    }
}

/// Page background.
pub struct Backdrop {
    pub bg: Color,
}

impl container::StyleSheet for Backdrop {
    type Style = Theme;

    fn appearance(&self, _style: &Self::Style) -> container::Appearance {
        container::Appearance {
            background: Some(Background::Color(self.bg)),
            ..container::Appearance::default()
        }
    }
}

pub struct TabStyle {
    pub bg: Color,
    pub fg: Color,
    pub hover_bg: Color,
}

impl TabStyle {
    pub fn new(styles: &Styles, selected: bool) -> Self {
        if selected {
            TabStyle {
                bg: styles.accent,
                fg: styles.accent_fg,
                hover_bg: styles.accent,
            }
        } else {
            TabStyle {
                bg: styles.header_bg,
                fg: styles.header_fg,
                hover_bg: styles.border,
            }
        }
    }
}

impl button::StyleSheet for TabStyle {
    type Style = Theme;

    fn active(&self, _style: &Self::Style) -> button::Appearance {
        button::Appearance {
            background: Some(Background::Color(self.bg)),
            border_radius: 4.0.into(),
            text_color: self.fg,
            ..button::Appearance::default()
        }
    }

    fn hovered(&self, style: &Self::Style) -> button::Appearance {
        button::Appearance {
            background: Some(Background::Color(self.hover_bg)),
            ..self.active(style)
        }
    }
}

use crate::config::ThemeVariant;
use iced::{
    font, gradient, theme,
    widget::{button, container},
    Background, Border, Color, Degrees, Font, Gradient, Theme,
};

pub const TEXT: Color = Color::WHITE;
pub const SUBDUED_TEXT: Color = Color { a: 0.75, ..Color::WHITE };
pub const FAINT: Color = Color { a: 0.5, ..Color::WHITE };
pub const TRANSLUCENT_PANEL: Color = Color { a: 0.2, ..Color::WHITE };

pub const BOLD: Font = Font {
    weight: font::Weight::Bold,
    ..Font::DEFAULT
};

// Spacing, in logical pixels.
pub const PAGE_PADDING: u16 = 32;
pub const SECTION_GAP: f32 = 24.0;
pub const ROW_GAP: f32 = 24.0;

fn rgb(hex: u32) -> Color {
    Color {
        r: ((hex >> 16) & 0xff) as f32 / 255.0,
        g: ((hex >> 8) & 0xff) as f32 / 255.0,
        b: (hex & 0xff) as f32 / 255.0,
        a: 1.0,
    }
}

impl ThemeVariant {
    /// Start and end colours of the page background.
    pub fn gradient(&self) -> (Color, Color) {
        match self {
            ThemeVariant::Light => (rgb(0xecb425), rgb(0xed7200)),
            ThemeVariant::Dark => (rgb(0x2b3a67), rgb(0x0e1428)),
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub enum Panel {
    Page(ThemeVariant),
    Translucent,
    Divider,
}

impl container::StyleSheet for Panel {
    type Style = Theme;

    fn appearance(&self, _style: &Self::Style) -> container::Appearance {
        let background = match self {
            Panel::Page(variant) => {
                let (start, end) = variant.gradient();
                Background::Gradient(Gradient::Linear(
                    gradient::Linear::new(Degrees(135.0))
                        .add_stop(0.0, start)
                        .add_stop(1.0, end),
                ))
            }
            Panel::Translucent => Background::Color(TRANSLUCENT_PANEL),
            Panel::Divider => Background::Color(FAINT),
        };

        container::Appearance {
            text_color: Some(TEXT),
            background: Some(background),
            ..Default::default()
        }
    }
}

pub fn panel(panel: Panel) -> theme::Container {
    theme::Container::Custom(Box::new(panel))
}

/// A page indicator dot.
#[derive(Debug, Clone, Copy)]
pub struct Dot {
    pub selected: bool,
}

impl button::StyleSheet for Dot {
    type Style = Theme;

    fn active(&self, _style: &Self::Style) -> button::Appearance {
        button::Appearance {
            background: Some(Background::Color(if self.selected { TEXT } else { FAINT })),
            border: Border {
                radius: 2.5.into(),
                ..Default::default()
            },
            ..Default::default()
        }
    }
}

pub fn dot(selected: bool) -> theme::Button {
    theme::Button::Custom(Box::new(Dot { selected }))
}

//! Widget style sheets - light theme

use iced::widget::{button, container, scrollable, text_input};
use iced::{Background, Border, Color, Shadow, Theme, Vector};

// --- Palette ---

pub const INDIGO_500: Color = Color::from_rgb(0.388, 0.400, 0.945);
pub const INDIGO_400: Color = Color::from_rgb(0.506, 0.549, 0.973);
pub const INDIGO_100: Color = Color::from_rgb(0.878, 0.906, 1.0);
pub const INDIGO_50: Color = Color::from_rgb(0.933, 0.949, 1.0);

pub const RED_500: Color = Color::from_rgb(0.937, 0.267, 0.267);

pub const GRAY_800: Color = Color::from_rgb(0.122, 0.161, 0.216);
pub const GRAY_600: Color = Color::from_rgb(0.294, 0.333, 0.388);
pub const GRAY_500: Color = Color::from_rgb(0.420, 0.447, 0.502);
pub const GRAY_400: Color = Color::from_rgb(0.616, 0.639, 0.667);
pub const GRAY_200: Color = Color::from_rgb(0.898, 0.906, 0.922);
pub const GRAY_100: Color = Color::from_rgb(0.953, 0.957, 0.965);
pub const GRAY_50: Color = Color::from_rgb(0.976, 0.980, 0.984);

pub const WHITE: Color = Color::WHITE;

pub const TEXT_PRIMARY: Color = GRAY_800;
pub const TEXT_MUTED: Color = GRAY_500;
pub const DANGER: Color = RED_500;

// --- Containers ---

/// White card holding the input row and the results
pub struct Panel;

impl container::StyleSheet for Panel {
    type Style = Theme;

    fn appearance(&self, _style: &Self::Style) -> container::Appearance {
        container::Appearance {
            text_color: Some(GRAY_800),
            background: Some(Background::Color(WHITE)),
            border: Border {
                color: GRAY_200,
                width: 1.0,
                radius: 16.0.into(),
            },
            shadow: Shadow {
                color: Color::from_rgba(0.388, 0.400, 0.945, 0.10),
                offset: Vector::new(0.0, 4.0),
                blur_radius: 16.0,
            },
        }
    }
}

pub struct Backdrop;

impl container::StyleSheet for Backdrop {
    type Style = Theme;

    fn appearance(&self, _style: &Self::Style) -> container::Appearance {
        container::Appearance {
            text_color: Some(GRAY_800),
            background: Some(Background::Color(GRAY_50)),
            ..Default::default()
        }
    }
}

// --- Buttons ---

pub struct PrimaryButton;

impl button::StyleSheet for PrimaryButton {
    type Style = Theme;

    fn active(&self, _style: &Self::Style) -> button::Appearance {
        button::Appearance {
            background: Some(Background::Color(INDIGO_500)),
            text_color: WHITE,
            border: Border {
                radius: 12.0.into(),
                ..Default::default()
            },
            shadow: Shadow {
                color: Color::from_rgba(0.388, 0.400, 0.945, 0.3),
                offset: Vector::new(0.0, 2.0),
                blur_radius: 8.0,
            },
            shadow_offset: Vector::new(0.0, 0.0),
        }
    }

    fn hovered(&self, style: &Self::Style) -> button::Appearance {
        button::Appearance {
            background: Some(Background::Color(INDIGO_400)),
            ..self.active(style)
        }
    }

    fn disabled(&self, style: &Self::Style) -> button::Appearance {
        button::Appearance {
            background: Some(Background::Color(GRAY_200)),
            text_color: GRAY_500,
            shadow: Shadow::default(),
            ..self.active(style)
        }
    }
}

/// Small borderless buttons (Paste, Clear)
pub struct IconButton;

impl button::StyleSheet for IconButton {
    type Style = Theme;

    fn active(&self, _style: &Self::Style) -> button::Appearance {
        button::Appearance {
            background: None,
            text_color: GRAY_600,
            border: Border {
                radius: 8.0.into(),
                ..Default::default()
            },
            ..Default::default()
        }
    }

    fn hovered(&self, style: &Self::Style) -> button::Appearance {
        button::Appearance {
            text_color: GRAY_800,
            background: Some(Background::Color(GRAY_200)),
            ..self.active(style)
        }
    }
}

/// Clickable category header; highlighted while its section is open
pub enum SectionHeader {
    Expanded,
    Collapsed,
}

impl button::StyleSheet for SectionHeader {
    type Style = Theme;

    fn active(&self, _style: &Self::Style) -> button::Appearance {
        let (background, text_color) = match self {
            SectionHeader::Expanded => (INDIGO_100, GRAY_800),
            SectionHeader::Collapsed => (GRAY_100, GRAY_600),
        };
        button::Appearance {
            background: Some(Background::Color(background)),
            text_color,
            border: Border {
                radius: 8.0.into(),
                ..Default::default()
            },
            ..Default::default()
        }
    }

    fn hovered(&self, style: &Self::Style) -> button::Appearance {
        button::Appearance {
            background: Some(Background::Color(INDIGO_50)),
            ..self.active(style)
        }
    }
}

/// Media link rendered as text
pub struct LinkButton;

impl button::StyleSheet for LinkButton {
    type Style = Theme;

    fn active(&self, _style: &Self::Style) -> button::Appearance {
        button::Appearance {
            background: None,
            text_color: INDIGO_500,
            ..Default::default()
        }
    }

    fn hovered(&self, style: &Self::Style) -> button::Appearance {
        button::Appearance {
            background: Some(Background::Color(INDIGO_50)),
            ..self.active(style)
        }
    }
}

// --- Inputs ---

pub struct InputStyle {
    pub error: bool,
}

impl text_input::StyleSheet for InputStyle {
    type Style = Theme;

    fn active(&self, _style: &Self::Style) -> text_input::Appearance {
        let color = if self.error { RED_500 } else { GRAY_200 };
        text_input::Appearance {
            background: Background::Color(WHITE),
            border: Border {
                radius: 12.0.into(),
                width: 2.0,
                color,
            },
            icon_color: GRAY_500,
        }
    }

    fn focused(&self, style: &Self::Style) -> text_input::Appearance {
        let active = self.active(style);
        if self.error {
            return active;
        }
        text_input::Appearance {
            border: Border {
                color: INDIGO_400,
                ..active.border
            },
            ..active
        }
    }

    fn placeholder_color(&self, _style: &Self::Style) -> Color {
        GRAY_400
    }

    fn value_color(&self, _style: &Self::Style) -> Color {
        GRAY_800
    }

    fn selection_color(&self, _style: &Self::Style) -> Color {
        Color::from_rgba(0.388, 0.400, 0.945, 0.3)
    }

    fn disabled(&self, style: &Self::Style) -> text_input::Appearance {
        text_input::Appearance {
            background: Background::Color(GRAY_100),
            ..self.active(style)
        }
    }

    fn disabled_color(&self, _style: &Self::Style) -> Color {
        GRAY_400
    }
}

// --- Scrollable ---

pub struct ResultsScrollable;

impl scrollable::StyleSheet for ResultsScrollable {
    type Style = Theme;

    fn active(&self, _style: &Self::Style) -> scrollable::Appearance {
        scrollable::Appearance {
            container: container::Appearance::default(),
            scrollbar: scrollable::Scrollbar {
                background: Some(Background::Color(Color::TRANSPARENT)),
                border: Border::default(),
                scroller: scrollable::Scroller {
                    color: Color::from_rgba(0.388, 0.400, 0.945, 0.3),
                    border: Border {
                        radius: 4.0.into(),
                        ..Default::default()
                    },
                },
            },
            gap: None,
        }
    }

    fn hovered(&self, style: &Self::Style, is_mouse_over_scrollbar: bool) -> scrollable::Appearance {
        let active = self.active(style);
        if !is_mouse_over_scrollbar {
            return active;
        }
        scrollable::Appearance {
            scrollbar: scrollable::Scrollbar {
                scroller: scrollable::Scroller {
                    color: Color::from_rgba(0.388, 0.400, 0.945, 0.5),
                    ..active.scrollbar.scroller
                },
                ..active.scrollbar
            },
            ..active
        }
    }
}

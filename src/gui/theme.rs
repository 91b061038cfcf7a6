//! Custom theme definitions for the application - Dark Theme

use iced::widget::{button, container, scrollable, text_input};
use iced::{Background, Border, Color, Shadow, Theme, Vector};

// --- Dark Color Palette ---

// Slate scale for backgrounds and borders
pub const SLATE_900: Color = Color::from_rgb(0.059, 0.090, 0.165); // Window background
pub const SLATE_800: Color = Color::from_rgb(0.118, 0.161, 0.231); // Result panel
pub const SLATE_700: Color = Color::from_rgb(0.200, 0.255, 0.333); // Input background
pub const SLATE_600: Color = Color::from_rgb(0.278, 0.333, 0.412); // Panel borders
pub const SLATE_500: Color = Color::from_rgb(0.392, 0.455, 0.545); // Input borders

// Blue for primary actions
pub const BLUE_500: Color = Color::from_rgb(0.231, 0.510, 0.965); // Primary button
pub const BLUE_700: Color = Color::from_rgb(0.114, 0.306, 0.847); // Hover state
pub const BLUE_400: Color = Color::from_rgb(0.376, 0.647, 0.980); // Focus border

// Gray scale for text
pub const GRAY_300: Color = Color::from_rgb(0.820, 0.835, 0.859); // Body text
pub const GRAY_400: Color = Color::from_rgb(0.612, 0.639, 0.686); // Placeholder / input value
pub const GRAY_500: Color = Color::from_rgb(0.420, 0.447, 0.502); // Disabled text

pub const WHITE: Color = Color::from_rgb(1.0, 1.0, 1.0);

// Status colors
pub const SUCCESS: Color = Color::from_rgb(0.063, 0.725, 0.506); // Emerald
pub const DANGER: Color = Color::from_rgb(0.937, 0.267, 0.267); // Red

// Toast surface (dark theme, near-black)
pub const TOAST_BACKGROUND: Color = Color::from_rgb(0.071, 0.071, 0.071);

// Text colors for compatibility
pub const TEXT_PRIMARY: Color = WHITE;
pub const TEXT_SECONDARY: Color = GRAY_300;

// --- Container Styles ---

pub struct RootContainer;

impl container::StyleSheet for RootContainer {
    type Style = Theme;

    fn appearance(&self, _style: &Self::Style) -> container::Appearance {
        container::Appearance {
            text_color: Some(TEXT_PRIMARY),
            background: Some(Background::Color(SLATE_900)),
            ..Default::default()
        }
    }
}

pub struct ResultPanelContainer;

impl container::StyleSheet for ResultPanelContainer {
    type Style = Theme;

    fn appearance(&self, _style: &Self::Style) -> container::Appearance {
        container::Appearance {
            text_color: Some(TEXT_SECONDARY),
            background: Some(Background::Color(SLATE_800)),
            border: Border {
                color: SLATE_600,
                width: 1.0,
                radius: 12.0.into(),
            },
            shadow: Shadow {
                color: Color::from_rgba(0.0, 0.0, 0.0, 0.35),
                offset: Vector::new(0.0, 6.0),
                blur_radius: 18.0,
            },
        }
    }
}

/// Toast card; the accent edge tracks the notification kind.
pub enum ToastContainer {
    Success,
    Error,
}

impl container::StyleSheet for ToastContainer {
    type Style = Theme;

    fn appearance(&self, _style: &Self::Style) -> container::Appearance {
        let accent = match self {
            Self::Success => SUCCESS,
            Self::Error => DANGER,
        };

        container::Appearance {
            text_color: Some(WHITE),
            background: Some(Background::Color(TOAST_BACKGROUND)),
            border: Border {
                color: accent,
                width: 1.5,
                radius: 8.0.into(),
            },
            shadow: Shadow {
                color: Color::from_rgba(0.0, 0.0, 0.0, 0.5),
                offset: Vector::new(0.0, 4.0),
                blur_radius: 12.0,
            },
        }
    }
}

// --- Button Styles ---

pub struct PrimaryButton;

impl button::StyleSheet for PrimaryButton {
    type Style = Theme;

    fn active(&self, _style: &Self::Style) -> button::Appearance {
        button::Appearance {
            background: Some(Background::Color(BLUE_500)),
            text_color: WHITE,
            border: Border {
                radius: 24.0.into(),
                ..Default::default()
            },
            shadow: Shadow {
                color: Color::from_rgba(0.231, 0.510, 0.965, 0.3),
                offset: Vector::new(0.0, 4.0),
                blur_radius: 12.0,
            },
            shadow_offset: Vector::new(0.0, 0.0),
        }
    }

    fn hovered(&self, style: &Self::Style) -> button::Appearance {
        let active = self.active(style);
        button::Appearance {
            background: Some(Background::Color(BLUE_700)),
            ..active
        }
    }

    fn disabled(&self, style: &Self::Style) -> button::Appearance {
        let active = self.active(style);
        button::Appearance {
            background: Some(Background::Color(SLATE_700)),
            text_color: GRAY_500,
            shadow: Shadow::default(),
            ..active
        }
    }
}

pub struct IconButton;

impl button::StyleSheet for IconButton {
    type Style = Theme;

    fn active(&self, _style: &Self::Style) -> button::Appearance {
        button::Appearance {
            background: None,
            text_color: GRAY_400,
            border: Border {
                radius: 8.0.into(),
                ..Default::default()
            },
            ..Default::default()
        }
    }

    fn hovered(&self, _style: &Self::Style) -> button::Appearance {
        button::Appearance {
            text_color: WHITE,
            background: Some(Background::Color(SLATE_700)),
            border: Border {
                radius: 8.0.into(),
                ..Default::default()
            },
            ..Default::default()
        }
    }
}

// --- Input Styles ---

pub struct InputStyle;

impl text_input::StyleSheet for InputStyle {
    type Style = Theme;

    fn active(&self, _style: &Self::Style) -> text_input::Appearance {
        text_input::Appearance {
            background: Background::Color(SLATE_700),
            border: Border {
                radius: 24.0.into(),
                width: 1.0,
                color: SLATE_500,
            },
            icon_color: GRAY_400,
        }
    }

    fn focused(&self, style: &Self::Style) -> text_input::Appearance {
        let active = self.active(style);
        text_input::Appearance {
            border: Border {
                color: BLUE_400,
                ..active.border
            },
            ..active
        }
    }

    fn placeholder_color(&self, _style: &Self::Style) -> Color {
        GRAY_500
    }

    fn value_color(&self, _style: &Self::Style) -> Color {
        GRAY_400
    }

    fn selection_color(&self, _style: &Self::Style) -> Color {
        Color::from_rgba(0.231, 0.510, 0.965, 0.3)
    }

    fn disabled(&self, style: &Self::Style) -> text_input::Appearance {
        let active = self.active(style);
        text_input::Appearance {
            background: Background::Color(SLATE_800),
            ..active
        }
    }

    fn disabled_color(&self, _style: &Self::Style) -> Color {
        GRAY_500
    }
}

// --- Scrollable Styles ---

pub struct ScrollableStyle;

impl scrollable::StyleSheet for ScrollableStyle {
    type Style = Theme;

    fn active(&self, _style: &Self::Style) -> scrollable::Appearance {
        scrollable::Appearance {
            container: container::Appearance::default(),
            scrollbar: scrollable::Scrollbar {
                background: Some(Background::Color(Color::TRANSPARENT)),
                border: Border::default(),
                scroller: scrollable::Scroller {
                    color: Color::from_rgba(0.392, 0.455, 0.545, 0.4),
                    border: Border {
                        radius: 4.0.into(),
                        ..Default::default()
                    },
                },
            },
            gap: None,
        }
    }

    fn hovered(
        &self,
        style: &Self::Style,
        is_mouse_over_scrollbar: bool,
    ) -> scrollable::Appearance {
        let active = self.active(style);
        if is_mouse_over_scrollbar {
            scrollable::Appearance {
                scrollbar: scrollable::Scrollbar {
                    scroller: scrollable::Scroller {
                        color: Color::from_rgba(0.392, 0.455, 0.545, 0.7),
                        ..active.scrollbar.scroller
                    },
                    ..active.scrollbar
                },
                ..active
            }
        } else {
            active
        }
    }
}

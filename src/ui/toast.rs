// SPDX-License-Identifier: MPL-2.0
//! Toast widget for rendering individual snackbars.
//!
//! Toasts are small cards with a variant-colored accent, an optional variant
//! glyph, the message, an optional action and a dismiss button.

use crate::snackbar::{Message, Snack, Variant};
use crate::ui::design_tokens::{
    border, opacity, palette, radius, shadow, sizing, spacing, typography,
};
use iced::widget::{button, container, mouse_area, text, Container, Row, Text};
use iced::{alignment, Color, Element, Length, Theme};

/// Rendering switches shared by every toast of a provider.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ToastStyle {
    /// Compact layout.
    pub dense: bool,
    /// Fade applied to the whole toast (`1.0` is fully visible).
    pub alpha: f32,
}

impl Default for ToastStyle {
    fn default() -> Self {
        Self {
            dense: false,
            alpha: opacity::OPAQUE,
        }
    }
}

/// Toast widget.
pub struct Toast;

impl Toast {
    /// Renders a single snackbar, or its custom content when it has one.
    pub fn view(snack: &Snack, style: ToastStyle) -> Element<'_, Message> {
        let key = snack.key().clone();
        let card: Element<'_, Message> = match snack.content() {
            Some(content) => content.render(snack.key(), snack.message()),
            None => Self::card(snack, style),
        };

        mouse_area(card)
            .on_enter(Message::PointerEntered(key.clone()))
            .on_exit(Message::PointerLeft(key))
            .into()
    }

    fn card(snack: &Snack, style: ToastStyle) -> Element<'_, Message> {
        let key = snack.key().clone();
        let accent = fade(variant_color(snack.variant()), style.alpha);
        let (text_size, padding, width) = if style.dense {
            (typography::BODY_SM, spacing::XS, sizing::TOAST_WIDTH_DENSE)
        } else {
            (typography::BODY, spacing::SM, sizing::TOAST_WIDTH)
        };
        let alpha = style.alpha;

        let mut content = Row::new()
            .spacing(spacing::SM)
            .align_y(alignment::Vertical::Center);

        if let Some(glyph) = leading_glyph(snack) {
            content = content.push(
                Text::new(glyph)
                    .size(sizing::ICON_MD)
                    .style(move |_: &Theme| text::Style { color: Some(accent) }),
            );
        }

        content = content.push(
            Container::new(Text::new(snack.message()).size(text_size).style(
                move |theme: &Theme| text::Style {
                    color: Some(fade(theme.palette().text, alpha)),
                },
            ))
            .width(Length::Fill)
            .align_x(alignment::Horizontal::Left),
        );

        if let Some(label) = snack.action() {
            content = content.push(
                button(Text::new(label).size(text_size))
                    .on_press(Message::Dismiss(key.clone()))
                    .padding(spacing::XXS)
                    .style(dismiss_button_style),
            );
        }

        content = content.push(
            button(Text::new("\u{2715}").size(sizing::ICON_SM))
                .on_press(Message::Dismiss(key))
                .padding(spacing::XXS)
                .style(dismiss_button_style),
        );

        Container::new(content)
            .width(Length::Fixed(width))
            .padding(padding)
            .style(move |theme: &Theme| toast_container_style(theme, accent, alpha))
            .into()
    }
}

/// Accent color of a variant.
#[must_use]
pub fn variant_color(variant: Variant) -> Color {
    match variant {
        Variant::Default => palette::GRAY_700,
        Variant::Success => palette::SUCCESS_500,
        Variant::Error => palette::ERROR_500,
        Variant::Warning => palette::WARNING_500,
        Variant::Info => palette::INFO_500,
    }
}

/// Glyph shown before the message; the default variant has none.
#[must_use]
pub fn variant_glyph(variant: Variant) -> Option<&'static str> {
    match variant {
        Variant::Default => None,
        Variant::Success => Some("\u{2714}"),
        Variant::Error => Some("\u{2716}"),
        Variant::Warning => Some("\u{26A0}"),
        Variant::Info => Some("\u{2139}"),
    }
}

/// Icon override if set, else the variant glyph; nothing when icons are hidden.
fn leading_glyph(snack: &Snack) -> Option<&str> {
    if snack.hide_icon_variant() {
        return None;
    }
    snack.icon().or_else(|| variant_glyph(snack.variant()))
}

fn fade(color: Color, alpha: f32) -> Color {
    Color {
        a: color.a * alpha,
        ..color
    }
}

fn toast_container_style(theme: &Theme, accent_color: Color, alpha: f32) -> container::Style {
    let bg_color = theme.extended_palette().background.base.color;

    container::Style {
        background: Some(iced::Background::Color(fade(bg_color, alpha))),
        border: iced::Border {
            color: accent_color,
            width: border::WIDTH_MD,
            radius: radius::MD.into(),
        },
        shadow: iced::Shadow {
            color: fade(shadow::MD.color, alpha * opacity::OVERLAY_MEDIUM),
            ..shadow::MD
        },
        text_color: Some(fade(theme.palette().text, alpha)),
        ..Default::default()
    }
}

fn dismiss_button_style(theme: &Theme, status: button::Status) -> button::Style {
    let base = theme.extended_palette().background.base;
    let hover = |a: f32| button::Style {
        background: Some(iced::Background::Color(Color {
            a,
            ..palette::GRAY_400
        })),
        text_color: base.text,
        border: iced::Border {
            radius: radius::SM.into(),
            ..Default::default()
        },
        shadow: shadow::NONE,
        snap: true,
    };

    match status {
        button::Status::Active => button::Style {
            background: None,
            text_color: base.text,
            border: iced::Border::default(),
            shadow: shadow::NONE,
            snap: true,
        },
        button::Status::Hovered => hover(opacity::OVERLAY_SUBTLE),
        button::Status::Pressed => hover(opacity::OVERLAY_MEDIUM),
        button::Status::Disabled => button::Style {
            background: None,
            text_color: Color {
                a: opacity::OVERLAY_MEDIUM,
                ..base.text
            },
            border: iced::Border::default(),
            shadow: shadow::NONE,
            snap: true,
        },
    }
}

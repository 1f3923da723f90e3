// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.

use super::Message;
use crate::snackbar::{SnackbarProvider, Variant};
use crate::ui::container;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::transition::TransitionTracker;
use iced::widget::{button, mouse_area, Column, Container, Row, Stack, Text};
use iced::{alignment, Element, Length};
use std::time::Instant;

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub provider: &'a SnackbarProvider,
    pub tracker: &'a TransitionTracker,
    pub now: Instant,
}

/// Renders the demo controls with the snackbar overlay on top.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let controls = view_controls(ctx.provider);

    let background = mouse_area(
        Container::new(controls)
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(alignment::Horizontal::Center)
            .align_y(alignment::Vertical::Center),
    )
    .on_press(Message::ClickedAway);

    let overlay = container::view_overlay(ctx.provider, ctx.tracker, ctx.now).map(Message::Snackbar);

    Stack::new()
        .push(background)
        .push(overlay)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

fn view_controls(provider: &SnackbarProvider) -> Element<'_, Message> {
    let variants = [
        ("Default", Variant::Default),
        ("Success", Variant::Success),
        ("Error", Variant::Error),
        ("Warning", Variant::Warning),
        ("Info", Variant::Info),
    ];

    let variant_row = variants
        .into_iter()
        .fold(Row::new().spacing(spacing::XS), |row, (label, variant)| {
            row.push(control_button(label, Message::Enqueue(variant)))
        });

    let action_row = Row::new()
        .spacing(spacing::XS)
        .push(control_button("Persistent", Message::EnqueuePersistent))
        .push(control_button("Duplicate", Message::EnqueueDuplicate))
        .push(control_button("Close all", Message::CloseAll))
        .push(control_button("Export diagnostics", Message::ExportDiagnostics));

    let status = Text::new(format!(
        "{} visible, {} queued (max {})",
        provider.snacks().len(),
        provider.queued_count(),
        provider.max_snack().value()
    ))
    .size(typography::BODY);

    Column::new()
        .spacing(spacing::MD)
        .align_x(alignment::Horizontal::Center)
        .push(Text::new("Snackbar queue").size(typography::TITLE_MD))
        .push(variant_row)
        .push(action_row)
        .push(status)
        .into()
}

fn control_button(label: &str, message: Message) -> Element<'_, Message> {
    button(Text::new(label).size(typography::BODY))
        .height(Length::Fixed(sizing::BUTTON_HEIGHT))
        .padding([spacing::XXS, spacing::SM])
        .on_press(message)
        .into()
}

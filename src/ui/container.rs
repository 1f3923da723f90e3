// SPDX-License-Identifier: MPL-2.0
//! Overlay placing one toast column per anchor origin.
//!
//! Top anchors stack downward with the oldest toast at the top. Bottom anchors
//! stack upward with the oldest toast at the bottom.

use crate::snackbar::{AnchorGroup, AnchorOrigin, Horizontal, Message, SnackbarProvider, Vertical};
use crate::ui::toast::{Toast, ToastStyle};
use crate::ui::transition::TransitionTracker;
use iced::widget::{text, Column, Container, Stack};
use iced::{alignment, Element, Length};
use std::time::Instant;

/// Distance between the window edge and a toast column.
pub const VIEW_INDENT: f32 = 20.0;
pub const VIEW_INDENT_DENSE: f32 = 4.0;

/// Vertical gap between two toasts.
pub const SNACKBAR_INDENT: f32 = 6.0;
pub const SNACKBAR_INDENT_DENSE: f32 = 2.0;

/// Maps an anchor origin to container alignment.
#[must_use]
pub fn alignment_of(origin: AnchorOrigin) -> (alignment::Horizontal, alignment::Vertical) {
    let horizontal = match origin.horizontal {
        Horizontal::Left => alignment::Horizontal::Left,
        Horizontal::Center => alignment::Horizontal::Center,
        Horizontal::Right => alignment::Horizontal::Right,
    };
    let vertical = match origin.vertical {
        Vertical::Top => alignment::Vertical::Top,
        Vertical::Bottom => alignment::Vertical::Bottom,
    };
    (horizontal, vertical)
}

/// Renders every admitted snackbar, grouped by anchor origin.
pub fn view_overlay<'a>(
    provider: &'a SnackbarProvider,
    tracker: &TransitionTracker,
    now: Instant,
) -> Element<'a, Message> {
    let dense = provider.config().dense;
    let groups = provider.by_anchor();

    if groups.is_empty() {
        return Container::new(text(""))
            .width(Length::Shrink)
            .height(Length::Shrink)
            .into();
    }

    let layers: Vec<Element<'a, Message>> = groups
        .into_iter()
        .map(|group| view_group(group, tracker, now, dense))
        .collect();

    Stack::with_children(layers)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

fn view_group<'a>(
    group: AnchorGroup<'a>,
    tracker: &TransitionTracker,
    now: Instant,
    dense: bool,
) -> Element<'a, Message> {
    let (align_x, align_y) = alignment_of(group.origin);
    let (view_indent, gap) = if dense {
        (VIEW_INDENT_DENSE, SNACKBAR_INDENT_DENSE)
    } else {
        (VIEW_INDENT, SNACKBAR_INDENT)
    };

    let mut toasts: Vec<Element<'a, Message>> = group
        .snacks
        .into_iter()
        .map(|snack| {
            let style = ToastStyle {
                dense,
                alpha: tracker.progress(snack.key(), now),
            };
            Toast::view(snack, style)
        })
        .collect();

    if group.origin.vertical == Vertical::Bottom {
        toasts.reverse();
    }

    let column = Column::with_children(toasts)
        .spacing(gap)
        .align_x(align_x);

    Container::new(column)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(align_x)
        .align_y(align_y)
        .padding(view_indent)
        .into()
}

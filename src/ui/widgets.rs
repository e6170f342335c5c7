//! iced widgets for the file list
//!
//! Turns a `FileListView` into elements: a wrapping grid of cards in tile
//! mode, full-width rows in list mode, plus the toolbar and the total line.

use iced::widget::{button, column, container, image, row, scrollable, text, Space};
use iced::{Alignment, Element, Length, Theme};
use iced_aw::Wrap;

use crate::config::{CARD_WIDTH, PREVIEW_DISPLAY_SIZE, SPACING};
use crate::state::data::{TileId, ViewMode};
use crate::ui::render::{EntryView, FileListView, Preview};
use crate::Message;

/// The whole window: toolbar, file container, total size
pub fn app_view(view: &FileListView, active: ViewMode) -> Element<'_, Message> {
    column![
        toolbar(active),
        scrollable(file_list(view)).height(Length::Fill),
        total_line(view),
    ]
    .spacing(12)
    .padding(16)
    .into()
}

fn toolbar<'a>(active: ViewMode) -> Element<'a, Message> {
    row![
        button("Add file")
            .on_press(Message::PickFiles)
            .padding(10),
        Space::with_width(Length::Fill),
        view_toggle(ViewMode::Tiles, active),
        view_toggle(ViewMode::List, active),
    ]
    .spacing(8)
    .align_y(Alignment::Center)
    .into()
}

/// Exactly one toggle is highlighted: the one matching the active mode
fn is_highlighted(target: ViewMode, active: ViewMode) -> bool {
    target == active
}

/// How the file container arranges its entries
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Layout {
    /// Wrapping grid of fixed-width cards
    Grid,
    /// One full-width row per file
    Rows,
}

fn layout_for(mode: ViewMode) -> Layout {
    match mode {
        ViewMode::Tiles => Layout::Grid,
        ViewMode::List => Layout::Rows,
    }
}

fn view_toggle<'a>(target: ViewMode, active: ViewMode) -> Element<'a, Message> {
    let style: fn(&Theme, button::Status) -> button::Style = if is_highlighted(target, active) {
        button::primary
    } else {
        button::secondary
    };

    button(text(target.label()))
        .on_press(Message::SetView(target))
        .style(style)
        .padding([6, 14])
        .into()
}

/// The file container, fully rebuilt from the view every frame
pub fn file_list(view: &FileListView) -> Element<'_, Message> {
    match layout_for(view.mode) {
        Layout::Grid => Wrap::with_elements(view.entries.iter().map(tile_card).collect())
            .spacing(SPACING)
            .line_spacing(SPACING)
            .into(),
        Layout::Rows => column(view.entries.iter().map(list_row))
            .spacing(SPACING)
            .width(Length::Fill)
            .into(),
    }
}

fn tile_card(entry: &EntryView) -> Element<'_, Message> {
    // Long names are clipped by the card, the full name is still there
    let header = row![
        container(text(&entry.name).size(14))
            .width(Length::Fill)
            .clip(true),
        delete_button(entry.id),
    ]
    .spacing(4)
    .align_y(Alignment::Center);

    let body = container(preview(&entry.preview))
        .center_x(Length::Fill)
        .center_y(Length::Fixed(PREVIEW_DISPLAY_SIZE * 2.0));

    let footer = row![
        container(text(&entry.mime).size(12))
            .width(Length::Fill)
            .clip(true),
        text(&entry.size).size(12),
    ]
    .spacing(4);

    container(column![header, body, footer].spacing(6))
        .width(CARD_WIDTH)
        .padding(8)
        .style(container::bordered_box)
        .into()
}

fn list_row(entry: &EntryView) -> Element<'_, Message> {
    let details = column![text(&entry.mime).size(14), text(&entry.size).size(12)]
        .align_x(Alignment::End);

    container(
        row![
            preview(&entry.preview),
            text(&entry.name).size(16),
            Space::with_width(Length::Fill),
            details,
            delete_button(entry.id),
        ]
        .spacing(12)
        .align_y(Alignment::Center),
    )
    .width(Length::Fill)
    .padding(8)
    .style(container::bordered_box)
    .into()
}

fn preview(preview: &Preview) -> Element<'_, Message> {
    match preview {
        Preview::Thumbnail(thumbnail) => image(thumbnail.handle.clone())
            .width(PREVIEW_DISPLAY_SIZE)
            .height(PREVIEW_DISPLAY_SIZE)
            .into(),
        Preview::Placeholder => container(Space::new(PREVIEW_DISPLAY_SIZE, PREVIEW_DISPLAY_SIZE))
            .style(container::bordered_box)
            .into(),
        Preview::FileIcon => container(text("FILE").size(11))
            .center_x(Length::Fixed(PREVIEW_DISPLAY_SIZE))
            .center_y(Length::Fixed(PREVIEW_DISPLAY_SIZE))
            .style(container::rounded_box)
            .into(),
    }
}

fn delete_button<'a>(id: TileId) -> Element<'a, Message> {
    button(text("x").size(12))
        .on_press(Message::RemoveTile(id))
        .style(button::danger)
        .padding([2, 6])
        .into()
}

fn total_line(view: &FileListView) -> Element<'_, Message> {
    row![text("Total size:").size(14), text(&view.total_size).size(14)]
        .spacing(6)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    const MODES: [ViewMode; 2] = [ViewMode::Tiles, ViewMode::List];

    #[test]
    fn test_exactly_one_toggle_highlighted() {
        for active in MODES {
            let highlighted: Vec<ViewMode> = MODES
                .into_iter()
                .filter(|&target| is_highlighted(target, active))
                .collect();
            assert_eq!(highlighted, vec![active]);
        }
    }

    #[test]
    fn test_layout_follows_mode() {
        assert_eq!(layout_for(ViewMode::Tiles), Layout::Grid);
        assert_eq!(layout_for(ViewMode::List), Layout::Rows);
    }
}

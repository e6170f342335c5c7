use iced::{event, window, Element, Event, Subscription, Task, Theme};
use rfd::AsyncFileDialog;
use std::path::PathBuf;

mod config;
mod controller;
mod error;
mod files;
mod format;
mod state;
mod thumbnail;
mod ui;

use controller::Controller;
use error::PreviewError;
use state::data::{SelectedFile, TileId, ViewMode};
use state::preview::{PreviewRequest, Thumbnail};

/// Main application state
struct FileTiles {
    /// Owns the tile store, the preview cache and the view mode
    controller: Controller,
}

/// Application messages (events)
#[derive(Debug, Clone)]
pub enum Message {
    /// User clicked the "Add file" button
    PickFiles,
    /// Picked files have been probed (may be empty if the dialog was cancelled)
    FilesSelected(Vec<SelectedFile>),
    /// A file was dropped onto the window
    FileDropped(PathBuf),
    /// User clicked a tile's delete button
    RemoveTile(TileId),
    /// User clicked one of the view toggles
    SetView(ViewMode),
    /// Background preview decode finished
    PreviewDecoded(TileId, Result<Thumbnail, PreviewError>),
}

impl FileTiles {
    /// Create a new instance of the application
    fn new() -> (Self, Task<Message>) {
        log::info!("🗂️  {} started", config::APP_TITLE);

        (
            FileTiles {
                controller: Controller::new(),
            },
            Task::none(),
        )
    }

    /// Handle application messages and update state
    fn update(&mut self, message: Message) -> Task<Message> {
        let renders = self.controller.render_count();

        let task = match message {
            Message::PickFiles => Task::perform(pick_files(), Message::FilesSelected),
            Message::FilesSelected(files) => {
                let requests = self.controller.on_files_selected(files);
                decode_previews(requests)
            }
            Message::FileDropped(path) => {
                Task::perform(files::probe_first(vec![path]), Message::FilesSelected)
            }
            Message::RemoveTile(id) => {
                let requests = self.controller.on_delete_clicked(id);
                decode_previews(requests)
            }
            Message::SetView(mode) => {
                let requests = self.controller.set_view(mode);
                decode_previews(requests)
            }
            Message::PreviewDecoded(id, result) => {
                self.controller.on_preview_decoded(id, result);
                Task::none()
            }
        };

        if self.controller.render_count() != renders {
            log::debug!(
                "🔁 Full render #{} ({} files, {} total)",
                self.controller.render_count(),
                self.controller.view().entries.len(),
                self.controller.view().total_size
            );
        }
        task
    }

    /// Build the user interface
    fn view(&self) -> Element<Message> {
        ui::widgets::app_view(self.controller.view(), self.controller.mode())
    }

    /// Listen for files dropped onto the window
    fn subscription(&self) -> Subscription<Message> {
        event::listen_with(|event, _status, _window| match event {
            Event::Window(window::Event::FileDropped(path)) => Some(Message::FileDropped(path)),
            _ => None,
        })
    }

    /// Set the application theme
    fn theme(&self) -> Theme {
        Theme::Dark
    }
}

fn main() -> iced::Result {
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(config::DEFAULT_LOG_FILTER),
    )
    .init();

    iced::application(config::APP_TITLE, FileTiles::update, FileTiles::view)
        .subscription(FileTiles::subscription)
        .theme(FileTiles::theme)
        .centered()
        .run_with(FileTiles::new)
}

/// Show the native file picker and probe the first file chosen
async fn pick_files() -> Vec<SelectedFile> {
    let Some(handles) = AsyncFileDialog::new()
        .set_title("Select a file")
        .pick_files()
        .await
    else {
        return Vec::new();
    };

    let paths = handles
        .into_iter()
        .map(|handle| handle.path().to_path_buf())
        .collect();
    files::probe_first(paths).await
}

/// One background decode per request; results come back as `PreviewDecoded`
fn decode_previews(requests: Vec<PreviewRequest>) -> Task<Message> {
    Task::batch(requests.into_iter().map(|request| {
        let id = request.id;
        Task::perform(thumbnail::decode_preview(request), move |result| {
            Message::PreviewDecoded(id, result)
        })
    }))
}

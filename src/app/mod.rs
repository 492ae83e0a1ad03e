// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the toolbar and gallery.
//!
//! The `App` struct wires together the domains (catalog, gallery, localization,
//! notifications) and translates messages into side effects like import tasks
//! or state persistence. This file intentionally keeps policy decisions
//! (minimum window size, persistence format, mode restoration) close to the
//! main update loop so it is easy to audit user-facing behavior.

pub mod config;
mod message;
pub mod paths;
pub mod persisted_state;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::catalog::{accept, Catalog, MediaId};
use crate::i18n::fluent::I18n;
use crate::ui::gallery::{self, DropTarget};
use crate::ui::notifications;
use crate::ui::theming::AppTheme;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;

/// Root Iced application state that bridges the catalog, gallery UI,
/// localization, and persisted preferences.
pub struct App {
    pub i18n: I18n,
    config: config::Config,
    theme: AppTheme,
    /// Editable (curation) surface when `true`, display storefront otherwise.
    editable: bool,
    catalog: Catalog,
    /// Explicitly pinned featured media, if any.
    featured_media: Option<MediaId>,
    gallery: gallery::State,
    /// Picker strings for the gallery's add-media flow. Owned here so the
    /// view can lend it out across frames.
    drop_target: DropTarget,
    /// Persisted application state (last import directory, etc.).
    app_state: persisted_state::AppState,
    /// Toast notification manager for user feedback.
    notifications: notifications::Manager,
    /// Bookkeeping for the import batch currently decoding, if any.
    import_batch: Option<update::ImportBatch>,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("editable", &self.editable)
            .field("media_count", &self.catalog.len())
            .finish()
    }
}

pub const WINDOW_DEFAULT_HEIGHT: u32 = 650;
pub const WINDOW_DEFAULT_WIDTH: u32 = 800;
pub const MIN_WINDOW_HEIGHT: u32 = 650;
pub const MIN_WINDOW_WIDTH: u32 = 650;

/// Builds the window settings
pub fn window_settings() -> window::Settings {
    let icon = crate::icon::load_window_icon();

    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        icon,
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // Wrap flags in RefCell<Option<_>> to satisfy Fn trait requirement
    // while only consuming flags once (iced 0.14 requires Fn, not FnOnce)
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl Default for App {
    fn default() -> Self {
        let i18n = I18n::default();
        let drop_target = DropTarget::new(
            i18n.tr("picker-dialog-title"),
            i18n.tr("picker-filter-images"),
        );

        Self {
            i18n,
            config: config::Config::default(),
            theme: AppTheme::default(),
            editable: false,
            catalog: Catalog::new(),
            featured_media: None,
            gallery: gallery::State::new(),
            drop_target,
            app_state: persisted_state::AppState::default(),
            notifications: notifications::Manager::new(),
            import_batch: None,
        }
    }
}

impl App {
    /// Initializes application state and optionally kicks off import tasks
    /// for paths received from the launcher.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load();
        let i18n = I18n::new(flags.lang.clone(), flags.i18n_dir.clone(), &config);
        let theme = AppTheme::new(config.general.theme_mode);

        // Restore the session (last import directory, surface mode).
        let (app_state, state_warning) = persisted_state::AppState::load();
        let editable = app_state.editable_mode;

        let mut app = App {
            i18n,
            config,
            theme,
            editable,
            app_state,
            ..Self::default()
        };
        app.drop_target = DropTarget::new(
            app.i18n.tr("picker-dialog-title"),
            app.i18n.tr("picker-filter-images"),
        );

        if let Some(key) = config_warning {
            app.notifications
                .push(notifications::Notification::warning(key));
        }
        if let Some(key) = state_warning {
            app.notifications
                .push(notifications::Notification::warning(key));
        }

        // Launcher paths go through the same pipeline as drops, so the
        // accept filter and feedback behave identically.
        let task = if flags.paths.is_empty() {
            Task::none()
        } else {
            let (accepted, rejected) = accept::partition_uploads(flags.paths);
            update::begin_import(&mut app.update_context(), accepted, rejected)
        };

        (app, task)
    }

    fn title(&self) -> String {
        let app_name = self.i18n.tr("app-title");

        // Title tracks the featured media: the explicit pin when set,
        // otherwise the first catalog entry.
        let featured = self
            .featured_media
            .and_then(|id| self.catalog.get(id))
            .or_else(|| self.catalog.first());

        match featured {
            Some(record) => format!("{} - {}", record.file_name(), app_name),
            None => app_name,
        }
    }

    fn theme(&self) -> Theme {
        if self.theme.mode.is_dark() {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    fn subscription(&self) -> Subscription<Message> {
        let event_sub = subscription::create_event_subscription(self.editable);
        let tick_sub =
            subscription::create_tick_subscription(self.notifications.has_notifications());

        Subscription::batch([event_sub, tick_sub])
    }

    /// Builds the borrowed context handed to the update handlers.
    fn update_context(&mut self) -> update::UpdateContext<'_> {
        update::UpdateContext {
            i18n: &self.i18n,
            config: &self.config,
            editable: &mut self.editable,
            catalog: &mut self.catalog,
            featured_media: &mut self.featured_media,
            gallery: &mut self.gallery,
            notifications: &mut self.notifications,
            persisted: &mut self.app_state,
            import_batch: &mut self.import_batch,
        }
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Gallery(gallery_message) => {
                update::handle_gallery_message(&mut self.update_context(), gallery_message)
            }
            Message::Notification(notification_message) => {
                self.notifications.handle_message(&notification_message);
                Task::none()
            }
            Message::SetEditable(editable) => {
                update::handle_set_editable(&mut self.update_context(), editable)
            }
            Message::OpenImportDialog => {
                update::handle_open_import_dialog(&mut self.update_context())
            }
            Message::ImportPicked(choice) => {
                update::handle_import_picked(&mut self.update_context(), choice)
            }
            Message::ImportFinished(result) => {
                update::handle_import_finished(&mut self.update_context(), result)
            }
            Message::WindowCloseRequested(id) => {
                update::handle_close_requested(&mut self.update_context(), id)
            }
            Message::Tick(_instant) => {
                // Let the notification manager expire stale toasts.
                self.notifications.tick();
                Task::none()
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            theme: &self.theme,
            editable: self.editable,
            media: self.catalog.records(),
            featured_media: self.featured_media.and_then(|id| self.catalog.get(id)),
            gallery: &self.gallery,
            drop_target: &self.drop_target,
            admin_access: self.config.admin_access(),
            allow_featured_media_hover: self.config.allow_featured_hover(),
            thumbnail_size: self.config.thumbnail_size(),
            notifications: &self.notifications,
        })
    }
}

// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! This module routes native window events (close requests, file drops)
//! and the notification tick into top-level messages.

use super::Message;
use crate::ui::gallery;
use iced::{event, time, Subscription};
use std::time::Duration;

/// Creates the window event subscription.
///
/// Window close requests are always routed so state can be persisted
/// before exit. File drops are forwarded to the gallery only while the
/// editable surface is active; the display storefront ignores them.
pub fn create_event_subscription(editable: bool) -> Subscription<Message> {
    if editable {
        event::listen_with(|event, _status, window_id| match event {
            event::Event::Window(iced::window::Event::CloseRequested) => {
                Some(Message::WindowCloseRequested(window_id))
            }
            event::Event::Window(iced::window::Event::FileDropped(path)) => Some(
                Message::Gallery(gallery::Message::FilesDropped(vec![path])),
            ),
            _ => None,
        })
    } else {
        event::listen_with(|event, _status, window_id| match event {
            event::Event::Window(iced::window::Event::CloseRequested) => {
                Some(Message::WindowCloseRequested(window_id))
            }
            _ => None,
        })
    }
}

/// Creates a periodic tick subscription for notification auto-dismiss.
///
/// Only active while notifications are visible so the app stays idle
/// the rest of the time.
pub fn create_tick_subscription(has_notifications: bool) -> Subscription<Message> {
    if has_notifications {
        time::every(Duration::from_millis(100)).map(Message::Tick)
    } else {
        Subscription::none()
    }
}

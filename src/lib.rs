// SPDX-License-Identifier: MPL-2.0
//! `iced_vitrine` is a product media gallery manager built with the Iced GUI framework.
//!
//! It curates the image gallery of a storefront catalog product: drag-and-drop
//! imports, featured media selection, thumbnail ordering, and a display-mode
//! preview, with internationalization via Fluent and user preference management.

#![doc(html_root_url = "https://docs.rs/iced_vitrine/0.1.0")]

pub mod app;
pub mod catalog;
pub mod error;
pub mod i18n;
pub mod icon;
pub mod ui;

pub use app::config;

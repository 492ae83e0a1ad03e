// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! This module organizes all UI-related code following a component-based architecture
//! with the Elm-style "state down, messages up" pattern.
//!
//! # Components
//!
//! - [`gallery`] - Media gallery with featured surface and thumbnail strip
//!
//! # Shared Infrastructure
//!
//! - [`widgets`] - Custom Iced widgets (size probe)
//! - [`styles`] - Centralized styling (buttons, containers, tooltips)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management
//! - [`icons`] - SVG icon loading and rendering
//! - [`notifications`] - Toast notification system for user feedback

pub mod design_tokens;
pub mod gallery;
pub mod icons;
pub mod notifications;
pub mod styles;
pub mod theming;
pub mod widgets;

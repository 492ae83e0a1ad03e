// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the application. Constants are organized by category.
//!
//! # Categories
//!
//! - **Thumbnail**: Thumbnail strip sizing bounds
//! - **Gallery**: Hover affordance on the featured slot
//! - **Access**: Merchant privilege defaults

// ==========================================================================
// Thumbnail Defaults
// ==========================================================================

/// Default edge length of a thumbnail strip entry, in pixels.
pub const DEFAULT_THUMBNAIL_SIZE: u16 = 96;

/// Minimum allowed thumbnail size.
pub const MIN_THUMBNAIL_SIZE: u16 = 48;

/// Maximum allowed thumbnail size.
pub const MAX_THUMBNAIL_SIZE: u16 = 192;

// ==========================================================================
// Gallery Defaults
// ==========================================================================

/// Whether hovering the featured view may show a zoom affordance.
pub const DEFAULT_ALLOW_FEATURED_HOVER: bool = false;

// ==========================================================================
// Access Defaults
// ==========================================================================

/// Whether the current user has elevated merchant privileges.
/// Elevated access only selects an accent frame on the featured slot.
pub const DEFAULT_ADMIN_ACCESS: bool = false;

// ==========================================================================
// Compile-time validation
// ==========================================================================

// These checks run at compile time and produce a build error if the
// constants drift into inconsistent states.
const _: () = {
    assert!(MIN_THUMBNAIL_SIZE < MAX_THUMBNAIL_SIZE);
    assert!(DEFAULT_THUMBNAIL_SIZE >= MIN_THUMBNAIL_SIZE);
    assert!(DEFAULT_THUMBNAIL_SIZE <= MAX_THUMBNAIL_SIZE);
};

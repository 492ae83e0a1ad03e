// SPDX-License-Identifier: MPL-2.0
//! Internationalization (i18n) support for the application.
//!
//! Localization is built on the Fluent system: translation catalogs are
//! embedded `.ftl` files, with an optional on-disk override directory for
//! translators. Locale detection cascades CLI argument, config file, and
//! system locale, falling back to `en-US`.

pub mod fluent;

// SPDX-License-Identifier: MPL-2.0
//! Internationalization (i18n) support for the application.
//!
//! Translations are Fluent `.ftl` files embedded at build time from
//! `assets/i18n/`. The active locale is picked once at startup from the CLI,
//! the config file or the system settings, falling back to `en-US`. Keys
//! missing from the active locale fall back to `en-US` too.

pub mod fluent;

pub use fluent::I18n;

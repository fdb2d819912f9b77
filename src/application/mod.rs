// SPDX-License-Identifier: MPL-2.0
//! Application layer - Use cases and orchestration.
//!
//! This module contains the application layer of the Clean Architecture:
//!
//! - [`port`]: Trait definitions (interfaces) for dependency inversion
//!
//! # Dependency Rule
//!
//! - Application layer depends on domain layer (uses domain types)
//! - Infrastructure layer implements application layer ports
//! - Presentation layer uses application layer services
//!
//! # Example
//!
//! ```ignore
//! use showreel::application::port::ScriptHost;
//! use showreel::infrastructure::http_script::HttpScriptHost;
//!
//! let host: std::sync::Arc<dyn ScriptHost> = std::sync::Arc::new(HttpScriptHost::new());
//! ```

pub mod port;

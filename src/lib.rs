// SPDX-License-Identifier: MPL-2.0
//! `agentcore_showcase` is a marketing landing page for the AgentCore platform
//! built with the Iced GUI framework.
//!
//! It renders a scrollable single-page layout with scroll-triggered reveal
//! animations, toast notifications, smooth section navigation, and a contact
//! form, demonstrating Elm-style component design.

#![doc(html_root_url = "https://docs.rs/agentcore_showcase/0.1.0")]

pub mod app;
pub mod config;
pub mod error;
pub mod page;
pub mod reveal;
pub mod ui;

// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! This module organizes all UI-related code following a component-based
//! architecture with the Elm-style "state down, messages up" pattern.
//!
//! # Page Components
//!
//! - [`header`] - Sticky header with nav links and hamburger menu
//! - [`hero`] - Hero banner with parallax copy and CTA buttons
//! - [`sections`] - Features, steps, pricing, contact, and footer sections
//! - [`contact`] - Contact form state and email validation
//!
//! # Shared Infrastructure
//!
//! - [`widgets`] - Custom Iced widgets (particle field canvas)
//! - [`styles`] - Centralized styling (buttons, containers)
//! - [`design_tokens`] - Design system constants (colors, spacing, motion)
//! - [`theming`] - Light/Dark/System theme mode management
//! - [`motion`] - Easing curves and animation progress helpers
//! - [`notifications`] - Toast notification system for user feedback

pub mod contact;
pub mod design_tokens;
pub mod header;
pub mod hero;
pub mod motion;
pub mod notifications;
pub mod sections;
pub mod styles;
pub mod theming;
pub mod widgets;

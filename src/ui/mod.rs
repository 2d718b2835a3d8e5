// SPDX-License-Identifier: MPL-2.0
//! User interface components and styling.
//!
//! This module organizes all UI-related code following a component-based
//! architecture with the Elm-style "state down, messages up" pattern.
//!
//! # Structure
//!
//! - [`navbar`] - Tab strip for switching between the four scenes
//! - [`toolbar`] - Animate / Auto / Clear controls and status pills
//! - [`scenes`] - One pure view function per illustration scene
//! - [`components`] - Reusable pieces (node button, pill, card, connector)
//! - [`styles`] - Centralized styling (buttons, containers, tooltips)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management

pub mod components;
pub mod design_tokens;
pub mod navbar;
pub mod scenes;
pub mod styles;
pub mod theming;
pub mod toolbar;

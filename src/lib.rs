// SPDX-License-Identifier: MPL-2.0
//! `iced_primer` is an interactive computer-literacy lesson built with the
//! Iced GUI framework.
//!
//! It walks through four illustrated scenes (the input-process-output model,
//! the elements of a computer system, hardware categories, and software
//! layers) with clickable highlights, an auto-play sequencer, and animated
//! connectors. It also demonstrates internationalization with Fluent, user
//! preference management, and modular UI design.

#![doc(html_root_url = "https://docs.rs/iced_primer/0.1.0")]

pub mod app;
pub mod config;
pub mod error;
pub mod i18n;
pub mod scene;
pub mod ui;

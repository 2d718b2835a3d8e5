// SPDX-License-Identifier: MPL-2.0
//! Reusable UI pieces shared by the scene renderers.

pub mod card;
pub mod connector;
pub mod node;
pub mod pill;

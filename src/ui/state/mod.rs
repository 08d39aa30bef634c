// SPDX-License-Identifier: MPL-2.0
//! Reusable state management for the page scroll.

pub mod scroll;
pub mod viewport;

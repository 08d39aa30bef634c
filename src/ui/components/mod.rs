// SPDX-License-Identifier: MPL-2.0
//! Reusable UI components.

pub mod brand_art;

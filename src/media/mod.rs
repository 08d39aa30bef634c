// SPDX-License-Identifier: MPL-2.0
//! Feature illustrations: procedural artwork and lazy loading.

pub mod artwork;
pub mod lazy;

pub use lazy::LazyImages;

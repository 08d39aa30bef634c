// SPDX-License-Identifier: MPL-2.0
//! `iced_landing` is the interactive marketing landing page for the
//! Northwind banking app, built with the Iced GUI framework.
//!
//! The page is a single scrollable column whose interactivity — modal
//! dialog, cookie notice, smooth-scroll navigation, hover fade, tabbed
//! operations panel, sticky navigation, scroll-triggered reveals, lazy
//! image loading, and a testimonials carousel — is driven by small
//! per-component state machines and a viewport intersection reporter.

pub mod app;
pub mod config;
pub mod error;
pub mod i18n;
pub mod media;
pub mod page;
pub mod ui;
pub mod viewport;

#[cfg(test)]
pub mod test_utils;

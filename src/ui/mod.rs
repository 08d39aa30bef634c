// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! This module organizes all UI-related code following a component-based architecture
//! with the Elm-style "state down, messages up" pattern.
//!
//! # Page Areas
//!
//! - [`navbar`] - Navigation bar with hover fade and sticky presentation
//! - [`hero`] - Headline area with the "learn more" scroll trigger
//! - [`cookie_notice`] - Dismissible cookie banner at the top of the header
//! - [`features`] - Feature rows with lazily loaded illustrations
//! - [`operations`] - Tabbed operations panel
//! - [`testimonials`] - Carousel with pagination dots
//! - [`signup`] - Closing call to action (opens the modal)
//! - [`footer`] - Tagline and copyright
//! - [`modal`] - Account sign-up dialog layered over the page
//!
//! # Shared Infrastructure
//!
//! - [`state`] - Reusable state management (scroll animation, viewport)
//! - [`components`] - Reusable UI components (brand artwork)
//! - [`styles`] - Centralized styling (buttons, containers)
//! - [`design_tokens`] - Design system constants (colors, spacing, geometry)
//! - [`theming`] - Light/Dark/System theme mode management

pub mod components;
pub mod cookie_notice;
pub mod design_tokens;
pub mod features;
pub mod footer;
pub mod hero;
pub mod modal;
pub mod navbar;
pub mod operations;
pub mod signup;
pub mod state;
pub mod styles;
pub mod testimonials;
pub mod theming;

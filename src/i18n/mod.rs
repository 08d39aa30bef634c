// SPDX-License-Identifier: MPL-2.0
//! Internationalization support backed by Fluent resources.

pub mod fluent;

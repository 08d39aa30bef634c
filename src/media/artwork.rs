// SPDX-License-Identifier: MPL-2.0
//! Procedural rendering of the feature illustrations.
//!
//! The landing page ships no bitmap assets; each illustration is a seeded
//! gradient rendered at runtime. The placeholder variant renders at a tiny
//! resolution and is upscaled by the renderer, which produces the blurred
//! look the lazy loader relies on until the full-size render arrives.

use crate::error::{Error, Result};
use iced::widget::image::Handle;
use image_rs::{Rgba, RgbaImage};

/// Full-size render dimensions, matching the rendered widget size.
pub const FULL_WIDTH: u32 = 420;
pub const FULL_HEIGHT: u32 = 260;

/// Placeholder dimensions; small enough that upscaling blurs heavily.
pub const PLACEHOLDER_WIDTH: u32 = 21;
pub const PLACEHOLDER_HEIGHT: u32 = 13;

/// Renders the tiny placeholder for illustration `index`.
#[must_use]
pub fn render_placeholder(index: usize) -> RgbaImage {
    render(index, PLACEHOLDER_WIDTH, PLACEHOLDER_HEIGHT)
}

/// Renders the full-size illustration for `index`.
#[must_use]
pub fn render_full(index: usize) -> RgbaImage {
    render(index, FULL_WIDTH, FULL_HEIGHT)
}

/// Renders the full-size illustration on a blocking worker thread.
///
/// The render itself is pure CPU work; running it off the UI thread keeps
/// the swap decoupled from the visibility event that requested it.
pub async fn load_full(index: usize) -> Result<Handle> {
    let image = tokio::task::spawn_blocking(move || render_full(index))
        .await
        .map_err(|err| Error::Render(err.to_string()))?;
    Ok(to_handle(image))
}

/// Converts a rendered image into an Iced image handle.
#[must_use]
pub fn to_handle(image: RgbaImage) -> Handle {
    let (width, height) = image.dimensions();
    Handle::from_rgba(width, height, image.into_raw())
}

/// Deterministic render: a diagonal two-stop gradient with a soft radial
/// highlight, both derived from the illustration index.
fn render(index: usize, width: u32, height: u32) -> RgbaImage {
    let (top, bottom) = gradient_stops(index);
    // Highlight drifts across illustrations so the four renders read as a set
    // rather than copies.
    let cx = 0.25 + 0.5 * hash_unit(index, 1);
    let cy = 0.3 + 0.4 * hash_unit(index, 2);

    RgbaImage::from_fn(width, height, |x, y| {
        let u = x as f32 / (width.max(2) - 1) as f32;
        let v = y as f32 / (height.max(2) - 1) as f32;

        let t = ((u + v) / 2.0).clamp(0.0, 1.0);
        let mut r = lerp(top[0], bottom[0], t);
        let mut g = lerp(top[1], bottom[1], t);
        let mut b = lerp(top[2], bottom[2], t);

        let d2 = (u - cx) * (u - cx) + (v - cy) * (v - cy);
        let glow = (1.0 - (d2 * 6.0).min(1.0)) * 0.25;
        r = (r + glow).min(1.0);
        g = (g + glow).min(1.0);
        b = (b + glow).min(1.0);

        Rgba([
            (r * 255.0) as u8,
            (g * 255.0) as u8,
            (b * 255.0) as u8,
            255,
        ])
    })
}

fn gradient_stops(index: usize) -> ([f32; 3], [f32; 3]) {
    // Stay in the brand's green-leaning range, shifting hue per index.
    let shift = hash_unit(index, 0) * 0.3;
    let top = [0.18 + shift * 0.4, 0.62, 0.42 + shift];
    let bottom = [0.05, 0.32 + shift * 0.5, 0.24 + shift * 0.6];
    (top, bottom)
}

/// Cheap deterministic hash mapped to `[0, 1)`.
fn hash_unit(index: usize, salt: u64) -> f32 {
    let mut x = index as u64 ^ (salt.wrapping_mul(0x9e37_79b9_7f4a_7c15));
    x ^= x >> 33;
    x = x.wrapping_mul(0xff51_afd7_ed55_8ccd);
    x ^= x >> 33;
    (x % 10_000) as f32 / 10_000.0
}

fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn placeholder_is_much_smaller_than_full_render() {
        let placeholder = render_placeholder(0);
        let full = render_full(0);
        assert_eq!(
            placeholder.dimensions(),
            (PLACEHOLDER_WIDTH, PLACEHOLDER_HEIGHT)
        );
        assert_eq!(full.dimensions(), (FULL_WIDTH, FULL_HEIGHT));
        assert!(placeholder.len() < full.len() / 100);
    }

    #[test]
    fn renders_are_deterministic() {
        assert_eq!(render_full(2).into_raw(), render_full(2).into_raw());
    }

    #[test]
    fn different_indices_produce_different_art() {
        assert_ne!(render_full(0).into_raw(), render_full(1).into_raw());
    }

    #[test]
    fn pixels_are_opaque() {
        let image = render_placeholder(3);
        assert!(image.pixels().all(|px| px.0[3] == 255));
    }
}

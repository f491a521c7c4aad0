//! Waveform bar rendering for the daily puzzle player.
//!
//! Amplitude samples are bucketed into a fixed number of bars, normalized so
//! the loudest bar spans the full canvas height, and drawn as rounded capsule
//! bars into a PNG with a transparent background.

use std::io::Cursor;

use image::{ImageFormat, Rgba, RgbaImage};

use crate::error::AppError;

pub const DEFAULT_BAR_COUNT: usize = 200;
pub const DEFAULT_BAR_WIDTH: u32 = 8;
pub const DEFAULT_BAR_GAP: u32 = 8;

const CANVAS_HEIGHT: u32 = 160;
const MIN_BAR_HEIGHT: u32 = 2;

/// Color treatment of the rendered bars.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderMode {
    /// Dark bars, shown while the puzzle is still hidden.
    Locked,
    /// Light bars, shown once the player's attempt is terminal.
    Unlocked,
    /// Horizontal color gradient used for the playback progress overlay.
    Progress,
}

/// Reduces raw samples to `bar_count` peak amplitudes.
///
/// Each bucket keeps the maximum absolute sample it covers, so short loud
/// transients stay visible regardless of the bucket size.
pub fn bucket_peaks(samples: &[f32], bar_count: usize) -> Vec<f32> {
    if bar_count == 0 {
        return Vec::new();
    }
    if samples.is_empty() {
        return vec![0.0; bar_count];
    }

    let window = samples.len() as f64 / bar_count as f64;
    (0..bar_count)
        .map(|bar| {
            let start = (bar as f64 * window) as usize;
            let end = (((bar + 1) as f64 * window) as usize).max(start + 1);
            samples[start..end.min(samples.len())]
                .iter()
                .fold(0.0f32, |peak, sample| peak.max(sample.abs()))
        })
        .collect()
}

/// Scales peaks so the loudest reaches 1.0. A silent signal stays at zero.
pub fn normalize(peaks: &mut [f32]) {
    let loudest = peaks.iter().fold(0.0f32, |max, peak| max.max(*peak));
    if loudest > 0.0 {
        for peak in peaks {
            *peak /= loudest;
        }
    }
}

/// Renders samples to a PNG of rounded vertical bars.
pub fn render(
    samples: &[f32],
    mode: RenderMode,
    bar_count: usize,
    bar_width: u32,
    bar_gap: u32,
) -> Result<Vec<u8>, AppError> {
    let mut peaks = bucket_peaks(samples, bar_count);
    normalize(&mut peaks);

    let width = (bar_count as u32) * (bar_width + bar_gap);
    let mut canvas = RgbaImage::new(width.max(1), CANVAS_HEIGHT);

    for (bar, peak) in peaks.iter().enumerate() {
        let height = ((peak * CANVAS_HEIGHT as f32) as u32).max(MIN_BAR_HEIGHT);
        let x0 = bar as u32 * (bar_width + bar_gap) + bar_gap / 2;
        let y0 = (CANVAS_HEIGHT - height) / 2;
        draw_capsule(&mut canvas, x0, y0, bar_width, height, mode);
    }

    let mut encoded = Vec::new();
    image::DynamicImage::ImageRgba8(canvas)
        .write_to(&mut Cursor::new(&mut encoded), ImageFormat::Png)?;
    Ok(encoded)
}

/// Vertical luma range of a bar for the grayscale modes.
fn luma_range(mode: RenderMode) -> (f32, f32) {
    match mode {
        RenderMode::Locked => (0x3c as f32, 0x1e as f32),
        RenderMode::Unlocked | RenderMode::Progress => (0xe0 as f32, 0x8c as f32),
    }
}

/// Three-stop horizontal gradient for the progress overlay.
fn progress_color(t: f32) -> [u8; 3] {
    const STOPS: [[f32; 3]; 3] = [
        [0x4c as f32, 0xaf as f32, 0x50 as f32],
        [0xff as f32, 0xc1 as f32, 0x07 as f32],
        [0xf4 as f32, 0x43 as f32, 0x36 as f32],
    ];

    let position = t.clamp(0.0, 1.0) * (STOPS.len() - 1) as f32;
    let index = (position as usize).min(STOPS.len() - 2);
    let local = position - index as f32;
    let (from, to) = (STOPS[index], STOPS[index + 1]);
    [
        (from[0] + (to[0] - from[0]) * local) as u8,
        (from[1] + (to[1] - from[1]) * local) as u8,
        (from[2] + (to[2] - from[2]) * local) as u8,
    ]
}

/// Draws one rounded bar: a rectangle capped by half-circles top and bottom.
fn draw_capsule(canvas: &mut RgbaImage, x0: u32, y0: u32, width: u32, height: u32, mode: RenderMode) {
    let (top_luma, bottom_luma) = luma_range(mode);
    let radius = f32::min(width as f32 / 2.0, height as f32 / 2.0);
    let center_x = x0 as f32 + width as f32 / 2.0;
    let canvas_width = canvas.width();

    for y in y0..(y0 + height).min(canvas.height()) {
        let along = (y - y0) as f32 / height.max(1) as f32;
        let luma = (top_luma + (bottom_luma - top_luma) * along) as u8;

        // Pixel rows inside the end caps shrink towards a half-circle.
        let from_top = (y - y0) as f32 + 0.5;
        let from_bottom = height as f32 - from_top;
        let cap_distance = f32::min(from_top, from_bottom);
        let half = if cap_distance >= radius {
            width as f32 / 2.0
        } else {
            let dy = radius - cap_distance;
            (radius * radius - dy * dy).max(0.0).sqrt()
        };

        let left = (center_x - half).floor().max(0.0) as u32;
        let right = (center_x + half).ceil().min(canvas_width as f32) as u32;
        for x in left..right {
            let color = match mode {
                RenderMode::Progress => {
                    let [r, g, b] = progress_color(x as f32 / canvas_width.max(1) as f32);
                    Rgba([r, g, b, 0xff])
                }
                _ => Rgba([luma, luma, luma, 0xff]),
            };
            canvas.put_pixel(x, y, color);
        }
    }
}

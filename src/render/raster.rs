//! `Canvas` implementation for RGB images via `imageproc`.
//!
//! Available when the `draw` feature is enabled. Text labels are ignored
//! because no font is bundled.

use super::{Canvas, Color, Fill, Point};
use image::{Rgb, RgbImage};
use imageproc::drawing;

impl From<Color> for Rgb<u8> {
    fn from(color: Color) -> Self {
        Rgb([color.r, color.g, color.b])
    }
}

/// Offsets covering a stroke of `thickness` pixels around zero.
fn stroke_offsets(thickness: u32) -> std::ops::RangeInclusive<i32> {
    let t = thickness.max(1) as i32;
    -((t - 1) / 2)..=t / 2
}

impl Canvas for RgbImage {
    fn draw_line(&mut self, from: Point, to: Point, color: Color, thickness: u32) {
        let px = Rgb::from(color);
        for ox in stroke_offsets(thickness) {
            for oy in stroke_offsets(thickness) {
                drawing::draw_line_segment_mut(
                    self,
                    ((from.x + ox) as f32, (from.y + oy) as f32),
                    ((to.x + ox) as f32, (to.y + oy) as f32),
                    px,
                );
            }
        }
    }

    fn draw_circle(&mut self, center: Point, radius: i32, color: Color, fill: Fill) {
        let px = Rgb::from(color);
        let center = (center.x, center.y);
        match fill {
            Fill::Solid => drawing::draw_filled_circle_mut(self, center, radius.max(0), px),
            Fill::Outline(thickness) => {
                for offset in stroke_offsets(thickness) {
                    let r = radius + offset;
                    if r >= 0 {
                        drawing::draw_hollow_circle_mut(self, center, r, px);
                    }
                }
            }
        }
    }
}

use image::{Rgba, RgbaImage, RgbImage};

use crate::{
    constants::BACKGROUND_INDEX,
    palette::DEFAULT_PALETTE,
    types::{MaxBigImage, MaxImage, MaxMulti, MaxMultiFrame},
};

/// Canvas extents derived from the hotspot maxima of every frame. The
/// canvas is `left + right` wide and `top + bottom` tall, with all hotspots
/// meeting at `(left, top)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CanvasBounds {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl CanvasBounds {
    pub fn width(&self) -> i32 {
        self.left + self.right
    }

    pub fn height(&self) -> i32 {
        self.top + self.bottom
    }
}

fn expand_rgb8(pixels: &[u8], width: u32, height: u32, palette: &[[u8; 3]]) -> RgbImage {
    let mut image = RgbImage::new(width, height);

    image.enumerate_rows_mut().for_each(|(_, pixels_row)| {
        pixels_row.for_each(|(x, y, pixel)| {
            let color_index = pixels[(x + y * width) as usize];
            *pixel = palette[color_index as usize].into();
        })
    });

    image
}

impl MaxImage {
    /// Expands the indexed buffer through the built-in palette.
    pub fn to_rgb8(&self) -> RgbImage {
        expand_rgb8(
            &self.pixels,
            self.header.width as u32,
            self.header.height as u32,
            &DEFAULT_PALETTE,
        )
    }
}

impl MaxBigImage {
    /// Expands the indexed buffer through the embedded palette.
    pub fn to_rgb8(&self) -> RgbImage {
        expand_rgb8(
            &self.pixels,
            self.header.width as u32,
            self.header.height as u32,
            &self.palette,
        )
    }
}

impl MaxMulti {
    pub fn canvas_bounds(&self) -> CanvasBounds {
        let mut bounds = CanvasBounds {
            left: 0,
            top: 0,
            right: 0,
            bottom: 0,
        };

        for frame in &self.frames {
            let header = &frame.header;

            bounds.left = bounds.left.max(header.hotx as i32);
            bounds.top = bounds.top.max(header.hoty as i32);
            bounds.right = bounds.right.max(header.width as i32 - header.hotx as i32);
            bounds.bottom = bounds.bottom.max(header.height as i32 - header.hoty as i32);
        }

        bounds
    }

    /// Upper-left corner of `frame` on the shared canvas.
    pub fn frame_origin(&self, frame: &MaxMultiFrame) -> (i32, i32) {
        let bounds = self.canvas_bounds();

        (
            bounds.left - frame.header.hotx as i32,
            bounds.top - frame.header.hoty as i32,
        )
    }

    /// One frame at its own dimensions. The background index stays
    /// transparent; everything else resolves through the built-in palette.
    pub fn frame_to_rgba8(&self, frame_index: usize) -> RgbaImage {
        let frame = &self.frames[frame_index];
        let width = frame.header.width as u32;
        let mut image = RgbaImage::new(width, frame.header.height as u32);

        image.enumerate_rows_mut().for_each(|(_, pixels_row)| {
            pixels_row.for_each(|(x, y, pixel)| {
                let color_index = frame.pixels[(x + y * width) as usize];
                *pixel = expand_key_color(color_index);
            })
        });

        image
    }

    /// Every frame placed on the shared canvas, first frame at the bottom.
    pub fn composite_rgba8(&self) -> RgbaImage {
        let bounds = self.canvas_bounds();
        let mut canvas = RgbaImage::new(bounds.width().max(0) as u32, bounds.height().max(0) as u32);

        for frame in &self.frames {
            let (origin_x, origin_y) = self.frame_origin(frame);
            let width = frame.header.width as i32;
            let height = frame.header.height as i32;

            for y in 0..height {
                for x in 0..width {
                    let color_index = frame.pixels[(x + y * width) as usize];

                    if color_index == BACKGROUND_INDEX {
                        continue;
                    }

                    canvas.put_pixel(
                        (origin_x + x) as u32,
                        (origin_y + y) as u32,
                        expand_key_color(color_index),
                    );
                }
            }
        }

        canvas
    }
}

fn expand_key_color(color_index: u8) -> Rgba<u8> {
    if color_index == BACKGROUND_INDEX {
        return Rgba([0, 0, 0, 0]);
    }

    let [r, g, b] = DEFAULT_PALETTE[color_index as usize];

    Rgba([r, g, b, 255])
}

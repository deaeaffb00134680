//! Visualization of interest points and matches.
//!
//! Drawing goes through the [`Canvas`] trait, so the geometry can be recorded
//! as a list of [`Primitive`]s (the `Vec<Primitive>` canvas) or rasterized
//! into an RGB image with the `draw` feature. All float coordinates are
//! converted with [`f_round`](crate::util::f_round).

use crate::ipoint::Laplacian;

mod draw;
mod fps;
#[cfg(feature = "draw")]
pub mod raster;

pub use draw::{
    draw_correspondence, draw_ipoint, draw_ipoints, draw_matches, draw_point, draw_points,
    draw_window, draw_windows, IpointStyle,
};
pub use fps::{draw_fps, FpsCounter};

/// Integer pixel coordinate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// 8-bit RGB color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLUE: Color = Color::rgb(0, 0, 255);
    pub const GREEN: Color = Color::rgb(0, 255, 0);
    pub const RED: Color = Color::rgb(255, 0, 0);
    pub const CYAN: Color = Color::rgb(0, 255, 255);
    pub const YELLOW: Color = Color::rgb(255, 255, 0);
    pub const MAGENTA: Color = Color::rgb(255, 0, 255);
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const BLACK: Color = Color::rgb(0, 0, 0);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Cluster colors, indexed modulo their count.
pub const PALETTE: [Color; 8] = [
    Color::BLUE,
    Color::GREEN,
    Color::RED,
    Color::CYAN,
    Color::YELLOW,
    Color::MAGENTA,
    Color::WHITE,
    Color::BLACK,
];

/// Looks up a palette color; any index is valid.
pub fn palette_color(index: usize) -> Color {
    PALETTE[index % PALETTE.len()]
}

/// Scale-circle color for a Laplacian class.
pub fn laplacian_color(laplacian: Laplacian) -> Color {
    match laplacian {
        Laplacian::DarkOnLight => Color::BLUE,
        Laplacian::LightOnDark => Color::RED,
        Laplacian::Unclassified => Color::GREEN,
    }
}

/// How a circle is painted.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Fill {
    /// Filled disc.
    Solid,
    /// Ring with the given stroke thickness.
    Outline(u32),
}

/// A single drawing command.
#[derive(Clone, Debug, PartialEq)]
pub enum Primitive {
    Line {
        from: Point,
        to: Point,
        color: Color,
        thickness: u32,
    },
    Circle {
        center: Point,
        radius: i32,
        color: Color,
        fill: Fill,
    },
    Text {
        origin: Point,
        text: String,
        color: Color,
    },
}

/// A 2D surface that accepts lines, circles and text.
pub trait Canvas {
    fn draw_line(&mut self, from: Point, to: Point, color: Color, thickness: u32);

    fn draw_circle(&mut self, center: Point, radius: i32, color: Color, fill: Fill);

    /// Draws a text label with its baseline starting at `origin`.
    ///
    /// Surfaces without text rendering ignore labels.
    fn draw_text(&mut self, origin: Point, text: &str, color: Color) {
        let _ = (origin, text, color);
    }

    /// Replays a recorded primitive.
    fn draw(&mut self, primitive: &Primitive) {
        match primitive {
            Primitive::Line {
                from,
                to,
                color,
                thickness,
            } => self.draw_line(*from, *to, *color, *thickness),
            Primitive::Circle {
                center,
                radius,
                color,
                fill,
            } => self.draw_circle(*center, *radius, *color, *fill),
            Primitive::Text {
                origin,
                text,
                color,
            } => self.draw_text(*origin, text, *color),
        }
    }
}

impl Canvas for Vec<Primitive> {
    fn draw_line(&mut self, from: Point, to: Point, color: Color, thickness: u32) {
        self.push(Primitive::Line {
            from,
            to,
            color,
            thickness,
        });
    }

    fn draw_circle(&mut self, center: Point, radius: i32, color: Color, fill: Fill) {
        self.push(Primitive::Circle {
            center,
            radius,
            color,
            fill,
        });
    }

    fn draw_text(&mut self, origin: Point, text: &str, color: Color) {
        self.push(Primitive::Text {
            origin,
            text: text.to_owned(),
            color,
        });
    }
}

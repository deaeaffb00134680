//! Geometry of the interest point overlays.

use super::{laplacian_color, palette_color, Canvas, Color, Fill, Point};
use crate::ipoint::{Correspondence, Ipoint, Orientation};
use crate::util::f_round;
use crate::util::math::rotate;

/// Scale circle and orientation line radius, in units of the feature scale.
const SCALE_RADIUS: f32 = 2.5;
/// Half-width of the descriptor window, in units of the feature scale.
const WINDOW_HALF_WIDTH: f32 = 10.0;
/// Radius of the cluster-colored dot.
const CLUSTER_DOT_RADIUS: i32 = 3;
/// Stroke of the descriptor window box.
const WINDOW_THICKNESS: u32 = 2;
/// Stroke of the ring around a cluster-colored dot.
const CLUSTER_RING_THICKNESS: u32 = 2;

/// Options for [`draw_ipoint`].
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct IpointStyle {
    /// Multiplier for the motion tail; `0` draws no tail.
    pub tail_length: u32,
}

fn location(ipt: &Ipoint) -> Point {
    Point::new(f_round(ipt.x()), f_round(ipt.y()))
}

fn upright_dot<C: Canvas + ?Sized>(canvas: &mut C, at: Point) {
    canvas.draw_circle(at, 1, Color::GREEN, Fill::Solid);
}

/// Draws orientation, scale circle and optional motion tail of one point.
///
/// Oriented points get a green line of length `2.5 * scale` along their angle;
/// upright points get a green dot. The scale circle is colored by the
/// Laplacian class.
pub fn draw_ipoint<C: Canvas + ?Sized>(canvas: &mut C, ipt: &Ipoint, style: IpointStyle) {
    let s = SCALE_RADIUS * ipt.scale();
    let center = location(ipt);

    match ipt.orientation() {
        Orientation::Computed(o) => {
            let (sin, cos) = o.sin_cos();
            let (cx, cy) = (center.x as f32, center.y as f32);
            let tip = Point::new(f_round(cx + s * cos), f_round(cy + s * sin));
            canvas.draw_line(center, tip, Color::GREEN, 1);
        }
        Orientation::NotComputed => upright_dot(canvas, center),
    }

    canvas.draw_circle(
        center,
        f_round(s),
        laplacian_color(ipt.laplacian()),
        Fill::Outline(1),
    );

    if style.tail_length != 0 {
        let tail = style.tail_length as f32;
        let (dx, dy) = ipt.motion();
        let end = Point::new(f_round(ipt.x() + dx * tail), f_round(ipt.y() + dy * tail));
        canvas.draw_line(center, end, Color::WHITE, 1);
    }
}

/// Draws every point with [`draw_ipoint`].
pub fn draw_ipoints<C: Canvas + ?Sized>(canvas: &mut C, ipts: &[Ipoint], style: IpointStyle) {
    for ipt in ipts {
        draw_ipoint(canvas, ipt, style);
    }
}

/// Draws a cluster-colored dot with a ring in the next palette color.
pub fn draw_point<C: Canvas + ?Sized>(canvas: &mut C, ipt: &Ipoint) {
    let center = location(ipt);
    let slot = ipt.cluster_index() % super::PALETTE.len();
    canvas.draw_circle(
        center,
        CLUSTER_DOT_RADIUS,
        palette_color(slot),
        Fill::Solid,
    );
    canvas.draw_circle(
        center,
        CLUSTER_DOT_RADIUS + 1,
        palette_color(slot + 1),
        Fill::Outline(CLUSTER_RING_THICKNESS),
    );
}

/// Draws [`draw_point`] for every point.
pub fn draw_points<C: Canvas + ?Sized>(canvas: &mut C, ipts: &[Ipoint]) {
    for ipt in ipts {
        draw_point(canvas, ipt);
    }
}

/// Draws the rotated descriptor window of one point.
///
/// The window is a square of half-width `10 * scale` centered on the rounded
/// location and rotated by the orientation (upright points use angle zero).
pub fn draw_window<C: Canvas + ?Sized>(canvas: &mut C, ipt: &Ipoint) {
    let s = WINDOW_HALF_WIDTH * ipt.scale();
    let center = location(ipt);
    let (cx, cy) = (center.x as f32, center.y as f32);
    let (sin, cos) = ipt.orientation().radians().sin_cos();

    let corners = [(s, -s), (-s, -s), (-s, s), (s, s)].map(|(u, v)| {
        let (rx, ry) = rotate(u, v, sin, cos);
        Point::new(f_round(rx + cx), f_round(ry + cy))
    });

    match ipt.orientation() {
        Orientation::Computed(_) => {
            let tip = Point::new(f_round(s * cos + cx), f_round(s * sin + cy));
            canvas.draw_line(center, tip, Color::GREEN, 1);
        }
        Orientation::NotComputed => upright_dot(canvas, center),
    }

    for (&from, &to) in corners.iter().zip(corners.iter().cycle().skip(1)) {
        canvas.draw_line(from, to, Color::BLUE, WINDOW_THICKNESS);
    }
}

/// Draws [`draw_window`] for every point.
pub fn draw_windows<C: Canvas + ?Sized>(canvas: &mut C, ipts: &[Ipoint]) {
    for ipt in ipts {
        draw_window(canvas, ipt);
    }
}

/// Draws one match across two side-by-side canvases.
///
/// Both points get a cluster dot. Each canvas also gets a white line to the
/// partner point, shifted by `first_width` (the width of the first image) as
/// if the second image sat to the right of the first.
pub fn draw_correspondence<A, B>(
    first: &mut A,
    second: &mut B,
    pair: &Correspondence,
    first_width: i32,
) where
    A: Canvas + ?Sized,
    B: Canvas + ?Sized,
{
    draw_point(first, &pair.first);
    draw_point(second, &pair.second);

    let a = location(&pair.first);
    let b = location(&pair.second);
    // Coordinates saturate; f_round already clamps far-off features to i32.
    first.draw_line(
        a,
        Point::new(b.x.saturating_add(first_width), b.y),
        Color::WHITE,
        1,
    );
    second.draw_line(
        Point::new(a.x.saturating_sub(first_width), a.y),
        b,
        Color::WHITE,
        1,
    );
}

/// Draws [`draw_correspondence`] for every match.
pub fn draw_matches<A, B>(first: &mut A, second: &mut B, pairs: &[Correspondence], first_width: i32)
where
    A: Canvas + ?Sized,
    B: Canvas + ?Sized,
{
    for pair in pairs {
        draw_correspondence(first, second, pair, first_width);
    }
}

use std::f32::consts::{FRAC_PI_2, FRAC_PI_4};
use surfcore::render::{
    draw_correspondence, draw_ipoint, draw_ipoints, draw_matches, draw_points, draw_window,
    draw_windows,
};
use surfcore::{
    f_round, palette_color, Color, Correspondence, Fill, Ipoint, IpointStyle, Laplacian,
    Orientation, Point, Primitive, DESCRIPTOR_LEN,
};

fn make_ipoint(x: f32, y: f32, scale: f32, orientation: Orientation, lap: Laplacian) -> Ipoint {
    Ipoint::new(x, y, scale, orientation, lap, [0.0; DESCRIPTOR_LEN]).unwrap()
}

fn render(ipt: &Ipoint, style: IpointStyle) -> Vec<Primitive> {
    let mut out: Vec<Primitive> = Vec::new();
    draw_ipoint(&mut out, ipt, style);
    out
}

#[test]
fn rounding_is_half_up() {
    assert_eq!(f_round(2.4), 2);
    assert_eq!(f_round(2.5), 3);
    assert_eq!(f_round(-0.5), 0);
}

#[test]
fn upright_point_draws_dot_not_line() {
    let ipt = make_ipoint(
        12.2,
        7.5,
        2.0,
        Orientation::NotComputed,
        Laplacian::DarkOnLight,
    );
    let out = render(&ipt, IpointStyle::default());

    assert_eq!(
        out,
        vec![
            Primitive::Circle {
                center: Point::new(12, 8),
                radius: 1,
                color: Color::GREEN,
                fill: Fill::Solid,
            },
            Primitive::Circle {
                center: Point::new(12, 8),
                radius: 5,
                color: Color::BLUE,
                fill: Fill::Outline(1),
            },
        ]
    );
    assert!(!out.iter().any(|p| matches!(p, Primitive::Line { .. })));
}

#[test]
fn quarter_turn_draws_vertical_line() {
    let scale = 2.8;
    let ipt = make_ipoint(
        30.0,
        40.0,
        scale,
        Orientation::Computed(FRAC_PI_2),
        Laplacian::LightOnDark,
    );
    let out = render(&ipt, IpointStyle::default());

    let len = f_round(2.5 * scale);
    assert_eq!(len, 7);
    assert_eq!(
        out[0],
        Primitive::Line {
            from: Point::new(30, 40),
            to: Point::new(30, 40 + len),
            color: Color::GREEN,
            thickness: 1,
        }
    );
}

#[test]
fn computed_zero_angle_still_draws_line() {
    let ipt = make_ipoint(
        5.0,
        5.0,
        2.0,
        Orientation::Computed(0.0),
        Laplacian::LightOnDark,
    );
    let out = render(&ipt, IpointStyle::default());
    assert_eq!(
        out[0],
        Primitive::Line {
            from: Point::new(5, 5),
            to: Point::new(10, 5),
            color: Color::GREEN,
            thickness: 1,
        }
    );
}

#[test]
fn scale_circle_color_follows_laplacian() {
    let expected = [
        (Laplacian::DarkOnLight, Color::BLUE),
        (Laplacian::LightOnDark, Color::RED),
        (Laplacian::Unclassified, Color::GREEN),
    ];
    for (lap, color) in expected {
        let out = render(
            &make_ipoint(0.0, 0.0, 1.0, Orientation::NotComputed, lap),
            IpointStyle::default(),
        );
        assert_eq!(
            out[1],
            Primitive::Circle {
                center: Point::new(0, 0),
                radius: 3,
                color,
                fill: Fill::Outline(1),
            }
        );
    }
}

#[test]
fn zero_tail_length_skips_motion() {
    let ipt = make_ipoint(
        1.0,
        1.0,
        1.0,
        Orientation::NotComputed,
        Laplacian::Unclassified,
    )
    .with_motion(3.0, 3.0);
    assert_eq!(render(&ipt, IpointStyle::default()).len(), 2);
    assert_eq!(render(&ipt, IpointStyle { tail_length: 2 }).len(), 3);
}

#[test]
fn batch_drawing_concatenates_single_draws() {
    let ipts = vec![
        make_ipoint(1.0, 2.0, 1.0, Orientation::NotComputed, Laplacian::DarkOnLight),
        make_ipoint(8.0, 9.0, 3.0, Orientation::Computed(1.0), Laplacian::LightOnDark),
    ];
    let mut batch: Vec<Primitive> = Vec::new();
    draw_ipoints(&mut batch, &ipts, IpointStyle::default());
    let single: Vec<Primitive> = ipts
        .iter()
        .flat_map(|ipt| render(ipt, IpointStyle::default()))
        .collect();
    assert_eq!(batch, single);

    let mut windows: Vec<Primitive> = Vec::new();
    draw_windows(&mut windows, &ipts);
    assert_eq!(windows.len(), 10);
}

#[test]
fn rotated_window_corners_follow_orientation() {
    let ipt = make_ipoint(
        100.0,
        100.0,
        1.0,
        Orientation::Computed(FRAC_PI_2),
        Laplacian::DarkOnLight,
    );
    let mut out: Vec<Primitive> = Vec::new();
    draw_window(&mut out, &ipt);

    assert_eq!(
        out[0],
        Primitive::Line {
            from: Point::new(100, 100),
            to: Point::new(100, 110),
            color: Color::GREEN,
            thickness: 1,
        }
    );
    let edges: Vec<(Point, Point)> = out[1..]
        .iter()
        .map(|p| match p {
            Primitive::Line {
                from,
                to,
                color,
                thickness,
            } => {
                assert_eq!((*color, *thickness), (Color::BLUE, 2));
                (*from, *to)
            }
            other => panic!("unexpected {other:?}"),
        })
        .collect();
    assert_eq!(
        edges,
        vec![
            (Point::new(110, 110), Point::new(110, 90)),
            (Point::new(110, 90), Point::new(90, 90)),
            (Point::new(90, 90), Point::new(90, 110)),
            (Point::new(90, 110), Point::new(110, 110)),
        ]
    );
}

#[test]
fn window_edges_have_equal_length() {
    let ipt = make_ipoint(
        64.0,
        64.0,
        2.0,
        Orientation::Computed(FRAC_PI_4),
        Laplacian::DarkOnLight,
    );
    let mut out: Vec<Primitive> = Vec::new();
    draw_window(&mut out, &ipt);
    let lengths: Vec<f32> = out[1..]
        .iter()
        .filter_map(|p| match p {
            Primitive::Line { from, to, .. } => {
                let dx = (to.x - from.x) as f32;
                let dy = (to.y - from.y) as f32;
                Some((dx * dx + dy * dy).sqrt())
            }
            _ => None,
        })
        .collect();
    assert_eq!(lengths.len(), 4);
    for len in lengths {
        assert!((len - 40.0).abs() <= 1.5, "edge length {len}");
    }
}

#[test]
fn cluster_points_cycle_palette() {
    let mut ipts: Vec<Ipoint> = (0..10)
        .map(|i| {
            make_ipoint(
                i as f32,
                0.0,
                1.0,
                Orientation::NotComputed,
                Laplacian::Unclassified,
            )
        })
        .collect();
    for (i, ipt) in ipts.iter_mut().enumerate() {
        ipt.set_cluster_index(i);
    }
    let mut out: Vec<Primitive> = Vec::new();
    draw_points(&mut out, &ipts);
    assert_eq!(out.len(), 20);

    for (i, pair) in out.chunks(2).enumerate() {
        match (&pair[0], &pair[1]) {
            (
                Primitive::Circle {
                    radius: 3,
                    color: inner,
                    fill: Fill::Solid,
                    ..
                },
                Primitive::Circle {
                    radius: 4,
                    color: ring,
                    fill: Fill::Outline(2),
                    ..
                },
            ) => {
                assert_eq!(*inner, palette_color(i));
                assert_eq!(*ring, palette_color(i + 1));
            }
            other => panic!("unexpected pair {other:?}"),
        }
    }
}

#[test]
fn correspondence_lines_are_offset_by_first_width() {
    let pair = Correspondence::new(
        make_ipoint(10.4, 20.0, 1.0, Orientation::NotComputed, Laplacian::DarkOnLight),
        make_ipoint(15.0, 22.6, 1.0, Orientation::NotComputed, Laplacian::DarkOnLight),
    );
    let mut left: Vec<Primitive> = Vec::new();
    let mut right: Vec<Primitive> = Vec::new();
    draw_correspondence(&mut left, &mut right, &pair, 320);

    assert_eq!(left.len(), 3);
    assert_eq!(right.len(), 3);
    assert_eq!(
        left[2],
        Primitive::Line {
            from: Point::new(10, 20),
            to: Point::new(335, 23),
            color: Color::WHITE,
            thickness: 1,
        }
    );
    assert_eq!(
        right[2],
        Primitive::Line {
            from: Point::new(-310, 20),
            to: Point::new(15, 23),
            color: Color::WHITE,
            thickness: 1,
        }
    );
}

#[test]
fn matches_render_every_pair() {
    let a = make_ipoint(1.0, 1.0, 1.0, Orientation::NotComputed, Laplacian::DarkOnLight);
    let b = make_ipoint(2.0, 2.0, 1.0, Orientation::NotComputed, Laplacian::DarkOnLight);
    let pairs = vec![
        Correspondence::from((a.clone(), b.clone())),
        Correspondence::from((b, a)),
    ];
    let mut left: Vec<Primitive> = Vec::new();
    let mut right: Vec<Primitive> = Vec::new();
    draw_matches(&mut left, &mut right, &pairs, 50);
    assert_eq!(left.len(), 6);
    assert_eq!(right.len(), 6);
}

#[test]
fn far_off_feature_saturates_instead_of_overflowing() {
    let ipt = make_ipoint(
        2.0e9,
        10.0,
        1.0e9,
        Orientation::Computed(0.1),
        Laplacian::DarkOnLight,
    );
    let out = render(&ipt, IpointStyle::default());
    assert_eq!(out.len(), 2);
    match out[0] {
        Primitive::Line { from, to, .. } => {
            assert_eq!(from, Point::new(f_round(2.0e9), 10));
            assert_eq!(to.x, i32::MAX);
            assert!(to.y > 10);
        }
        ref other => panic!("unexpected {other:?}"),
    }
    match out[1] {
        Primitive::Circle { radius, .. } => assert_eq!(radius, i32::MAX),
        ref other => panic!("unexpected {other:?}"),
    }

    let pair = Correspondence::new(ipt.clone(), ipt);
    let mut left: Vec<Primitive> = Vec::new();
    let mut right: Vec<Primitive> = Vec::new();
    draw_correspondence(&mut left, &mut right, &pair, i32::MAX);
    match (&left[2], &right[2]) {
        (Primitive::Line { to, .. }, Primitive::Line { from, .. }) => {
            assert_eq!(to.x, i32::MAX);
            assert_eq!(from.x, f_round(2.0e9) - i32::MAX);
        }
        other => panic!("unexpected {other:?}"),
    }
}

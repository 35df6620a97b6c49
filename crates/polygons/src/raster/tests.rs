use super::*;
use crate::geom::Vector;
use crate::shape::Polygon;
use proptest::prelude::*;
use std::collections::HashSet;

fn square(side: f64) -> Polygon {
    Polygon::rectangle(side, side).unwrap()
}

/// Set pixels with their 4-neighbourhood degree split into (horizontal, vertical).
fn neighbour_profile(frame: &Frame) -> Vec<((usize, usize), usize, usize)> {
    let set: HashSet<(usize, usize)> = frame.set_pixels().collect();
    set.iter()
        .map(|&(x, y)| {
            let h = [x.wrapping_sub(1), x + 1]
                .iter()
                .filter(|&&nx| set.contains(&(nx, y)))
                .count();
            let v = [y.wrapping_sub(1), y + 1]
                .iter()
                .filter(|&&ny| set.contains(&(x, ny)))
                .count();
            ((x, y), h, v)
        })
        .collect()
}

#[test]
fn default_cfg_matches_console_layout() {
    let cfg = RasterCfg::default();
    assert_eq!(cfg.width, 79);
    assert_eq!(cfg.height(), 39);
    assert!(cfg.validate().is_ok());
}

#[test]
fn invalid_cfg_is_rejected() {
    let polys = [square(1.0)];
    let zero = RasterCfg::with_width(0);
    assert_eq!(rasterize(&polys, &zero), Err(RasterError::ZeroWidth));
    let tight = RasterCfg {
        margin: 1.0,
        ..RasterCfg::default()
    };
    assert_eq!(tight.validate(), Err(RasterError::InvalidMargin(1.0)));
    let flat = RasterCfg {
        pixel_aspect: 0.0,
        ..RasterCfg::default()
    };
    assert!(matches!(flat.validate(), Err(RasterError::InvalidAspect(_))));
}

#[test]
fn oversized_width_is_rejected_before_allocating() {
    let polys = [square(1.0)];
    assert!(RasterCfg::with_width(MAX_WIDTH).validate().is_ok());
    for width in [MAX_WIDTH + 1, 1 << 40, usize::MAX] {
        assert_eq!(
            rasterize(&polys, &RasterCfg::with_width(width)),
            Err(RasterError::WidthTooLarge(width))
        );
    }
}

#[test]
fn axis_aligned_square_is_a_closed_loop_with_four_corners() {
    let frame = rasterize(&[square(2.0)], &RasterCfg::default()).unwrap();
    assert_eq!(frame.mid(), (39, 19));
    assert!((frame.extent().unwrap() - 1.2).abs() < 1e-12);

    // ±1 maps to round(±32.92) = ±33 columns and round(±16.25) = ±16 rows.
    let (x0, x1, y0, y1) = (6, 72, 3, 35);
    for (x, y) in [(x0, y0), (x0, y1), (x1, y0), (x1, y1)] {
        assert!(frame.is_set(x, y), "corner ({x}, {y}) missing");
    }

    let profile = neighbour_profile(&frame);
    assert_eq!(profile.len(), 2 * (x1 - x0 + 1) + 2 * (y1 - y0 + 1) - 4);
    for &(p, h, v) in &profile {
        assert_eq!(h + v, 2, "pixel {p:?} is not on a simple loop");
    }
    let corners: HashSet<_> = profile
        .iter()
        .filter(|&&(_, h, v)| h == 1 && v == 1)
        .map(|&(p, _, _)| p)
        .collect();
    let expected: HashSet<_> = [(x0, y0), (x0, y1), (x1, y0), (x1, y1)].into();
    assert_eq!(corners, expected);
}

#[test]
fn axes_and_origin_markers_sit_at_mid() {
    let frame = rasterize(&[square(2.0)], &RasterCfg::default()).unwrap();
    let (mx, my) = frame.mid();
    assert_eq!(frame.glyph(mx, my), GLYPH_ORIGIN);
    assert_eq!(frame.glyph(mx, my + 5), GLYPH_Y_AXIS);
    assert_eq!(frame.glyph(mx + 5, my), GLYPH_X_AXIS);
    assert_eq!(frame.glyph(mx + 5, my + 5), GLYPH_BLANK);
    // edges win over axes
    assert_eq!(frame.glyph(mx, 3), GLYPH_EDGE);
    assert_eq!(frame.glyph(6, my), GLYPH_EDGE);

    let rows: Vec<String> = frame.rows().collect();
    assert_eq!(rows.len(), 40);
    assert!(rows.iter().all(|r| r.chars().count() == 79));
    // top row is y = height, so the origin row is height - mid_y from the top
    let origin_row: Vec<char> = rows[frame.height() - my].chars().collect();
    assert_eq!(origin_row[mx], 'O');
    assert_eq!(origin_row[0], '-');
    assert_eq!(origin_row[6], 'x');
}

#[test]
fn render_appends_caption() {
    let text = render(&[square(2.0)], 79).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 40 + 2);
    assert_eq!(lines[40], "");
    assert_eq!(lines[41], "The width of the image is 2.4 units.");
}

#[test]
fn empty_scene_renders_axes_only() {
    let none: [Polygon; 0] = [];
    let frame = rasterize(&none, &RasterCfg::default()).unwrap();
    assert!(frame.is_empty());
    assert_eq!(frame.set_pixels().count(), 0);
    assert_eq!(frame.caption(), "Nothing to draw.");

    let text = render(&none, 79).unwrap();
    assert!(!text.contains('x'));
    assert_eq!(text.matches('O').count(), 1);
    assert!(text.ends_with("Nothing to draw.\n"));
}

#[test]
fn collapsed_polygon_counts_as_empty() {
    let mut p = square(2.0);
    p.rescale(0.0, 0.0);
    let frame = rasterize(&[p], &RasterCfg::default()).unwrap();
    assert!(frame.is_empty());
}

#[test]
fn collinear_polygon_draws_its_outline() {
    let mut p = square(2.0);
    p.rescale(1.0, 0.0);
    let frame = rasterize(&[p], &RasterCfg::default()).unwrap();
    let (_, my) = frame.mid();
    let row: Vec<usize> = frame
        .set_pixels()
        .filter(|&(_, y)| y == my)
        .map(|(x, _)| x)
        .collect();
    assert_eq!(row, (6..=72).collect::<Vec<_>>());
    assert_eq!(frame.set_pixels().count(), row.len());
}

#[test]
fn non_finite_vertices_are_reported() {
    let mut bad = square(1.0);
    bad.rescale(f64::NAN, 1.0);
    let err = rasterize(&[square(1.0), bad], &RasterCfg::default()).unwrap_err();
    assert_eq!(
        err,
        RasterError::NonFiniteVertex {
            polygon: 1,
            vertex: 0
        }
    );
}

#[test]
fn unrepresentable_extent_is_reported() {
    let mut far = square(1.0);
    far.translate(Vector::new(1.0e308, 0.0));
    let err = rasterize(&[far], &RasterCfg::default()).unwrap_err();
    assert!(matches!(err, RasterError::ExtentOverflow(r) if r >= 1.0e308));

    // large but drawable
    let mut wide = square(1.0);
    wide.translate(Vector::new(1.0e300, 0.0));
    let frame = rasterize(&[wide], &RasterCfg::default()).unwrap();
    assert!(frame.extent().unwrap().is_finite());
}

#[test]
fn every_polygon_is_drawn() {
    let mut left = square(1.0);
    left.translate(Vector::new(-3.0, 0.0));
    let mut right = Polygon::hexagon(1.0).unwrap();
    right.translate(Vector::new(3.0, 2.0));
    let frame = rasterize(&[left, right], &RasterCfg::default()).unwrap();
    let (mx, _) = frame.mid();
    assert!(frame.set_pixels().any(|(x, _)| x < mx));
    assert!(frame.set_pixels().any(|(x, _)| x > mx));
}

proptest! {
    #[test]
    fn vertices_land_on_set_pixels_for_any_width(
        width in 1usize..240,
        n in 3usize..12,
        r in 0.01f64..100.0,
        angle in -6.0f64..6.0,
        dx in -50.0f64..50.0,
        dy in -50.0f64..50.0,
    ) {
        let mut p = Polygon::ngon(n, r).unwrap();
        p.rotate_centre(angle);
        p.translate(Vector::new(dx, dy));
        let cfg = RasterCfg::with_width(width);
        let frame = rasterize(std::slice::from_ref(&p), &cfg).unwrap();
        let extent = frame.extent().unwrap();
        let sx = width as f64 / (2.0 * extent);
        let sy = cfg.height() as f64 / (2.0 * extent);
        let (mx, my) = frame.mid();
        for v in p.vertices() {
            let x = ((sx * v.x()).round() as i64 + mx as i64) as usize;
            let y = ((sy * v.y()).round() as i64 + my as i64) as usize;
            prop_assert!(frame.is_set(x, y));
        }
    }
}

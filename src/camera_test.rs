#![allow(clippy::float_cmp)]

use super::*;

const EPSILON: f64 = 1e-10;

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

fn point_approx_eq(a: Point, b: Point) -> bool {
    approx_eq(a.x, b.x) && approx_eq(a.y, b.y)
}

// --- Point ---

#[test]
fn point_new() {
    let p = Point::new(3.0, 4.0);
    assert_eq!(p.x, 3.0);
    assert_eq!(p.y, 4.0);
}

// --- Camera::default ---

#[test]
fn default_is_identity() {
    let cam = Camera::default();
    let p = Point::new(123.0, 456.0);
    assert_eq!(cam.screen_to_world(p), p);
    assert_eq!(cam.world_to_screen(p), p);
}

// --- Camera::fit ---

#[test]
fn fit_exact_size_is_identity() {
    let cam = Camera::fit(600.0, 600.0);
    assert_eq!(cam.scale, 1.0);
    assert_eq!(cam.offset_x, 0.0);
    assert_eq!(cam.offset_y, 0.0);
}

#[test]
fn fit_half_size_scales_down() {
    let cam = Camera::fit(300.0, 300.0);
    assert_eq!(cam.scale, 0.5);
    assert!(point_approx_eq(cam.screen_to_world(Point::new(150.0, 150.0)), Point::new(300.0, 300.0)));
}

#[test]
fn fit_wide_box_letterboxes_horizontally() {
    let cam = Camera::fit(900.0, 600.0);
    assert_eq!(cam.scale, 1.0);
    assert_eq!(cam.offset_x, 150.0);
    assert_eq!(cam.offset_y, 0.0);
    assert!(point_approx_eq(cam.screen_to_world(Point::new(150.0, 0.0)), Point::new(0.0, 0.0)));
}

#[test]
fn fit_tall_box_letterboxes_vertically() {
    let cam = Camera::fit(300.0, 500.0);
    assert_eq!(cam.scale, 0.5);
    assert_eq!(cam.offset_x, 0.0);
    assert_eq!(cam.offset_y, 100.0);
}

#[test]
fn fit_degenerate_box_falls_back_to_identity() {
    let cam = Camera::fit(0.0, 400.0);
    assert_eq!(cam.scale, 1.0);
    assert_eq!(cam.offset_x, 0.0);
}

// --- Round trips ---

#[test]
fn screen_world_round_trip() {
    let cam = Camera::fit(1024.0, 768.0);
    let p = Point::new(37.5, 410.25);
    assert!(point_approx_eq(cam.world_to_screen(cam.screen_to_world(p)), p));
}

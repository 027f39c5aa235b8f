// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tests for the `cropview_geometry` crate.
//!
//! These check the fill, centering and crop round‑trip guarantees of
//! `ViewportState` over a grid of image and viewport shapes, plus the
//! concrete portrait scenario.

use cropview_geometry::{CropConfig, ViewportState};
use kurbo::{Point, Rect, Size, Vec2};

const CONTENT_SIZES: &[(f64, f64)] = &[
    (1000.0, 2000.0),
    (2000.0, 1000.0),
    (640.0, 480.0),
    (37.0, 91.0),
    (4032.0, 3024.0),
    (1.0, 1.0),
];

const VIEWPORT_SIZES: &[(f64, f64)] = &[
    (500.0, 500.0),
    (320.0, 568.0),
    (1920.0, 1080.0),
    (13.0, 7.0),
];

const USER_MIN_SCALES: &[f64] = &[0.8, 0.1, 3.0];

fn all_states() -> Vec<ViewportState> {
    let mut states = Vec::new();
    for &(cw, ch) in CONTENT_SIZES {
        for &(vw, vh) in VIEWPORT_SIZES {
            for &user_min_scale in USER_MIN_SCALES {
                let state =
                    ViewportState::initialize(Size::new(cw, ch), Size::new(vw, vh), user_min_scale)
                        .unwrap();
                states.push(state);
            }
        }
    }
    states
}

/// Initial states plus a few panned and zoomed variants of each.
fn interacted_states() -> Vec<ViewportState> {
    let mut states = Vec::new();
    for state in all_states() {
        states.push(state);

        let mut zoomed = state;
        let center = (state.viewport_size().to_vec2() / 2.0).to_point();
        zoomed.zoom_about_view_point(center, 1.3);
        states.push(zoomed);

        let mut panned = zoomed;
        panned.pan_by(Vec2::new(-17.0, 23.0));
        states.push(panned);

        let mut corner = zoomed;
        corner.pan_by(Vec2::new(1e6, 1e6));
        states.push(corner);
    }
    states
}

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() <= 1e-6 * a.abs().max(b.abs()).max(1.0)
}

#[test]
fn fill_scale_covers_viewport_with_one_tight_axis() {
    for state in all_states() {
        let content = state.content_size();
        let viewport = state.viewport_size();
        let min = state.min_zoom_scale();
        let eps = 1e-9 * viewport.width.max(viewport.height);

        assert!(content.width * min >= viewport.width - eps, "{state:?}");
        assert!(content.height * min >= viewport.height - eps, "{state:?}");
        assert!(
            close(content.width * min, viewport.width)
                || close(content.height * min, viewport.height),
            "{state:?}"
        );
    }
}

#[test]
fn zoom_range_is_ordered_and_contains_zoom() {
    for state in all_states() {
        assert!(state.min_zoom_scale() <= state.max_zoom_scale(), "{state:?}");
        assert_eq!(
            state.max_zoom_scale(),
            state.min_zoom_scale().max(state.user_min_scale())
        );
        assert_eq!(state.zoom_scale(), state.min_zoom_scale());
    }
}

#[test]
fn initial_state_is_centered() {
    for state in all_states() {
        let displayed = state.displayed_content_size();
        let viewport = state.viewport_size();
        assert!(
            close(state.offset().x, (displayed.width - viewport.width) / 2.0),
            "{state:?}"
        );
        assert!(
            close(state.offset().y, (displayed.height - viewport.height) / 2.0),
            "{state:?}"
        );
    }
}

#[test]
fn crop_rect_stays_inside_image() {
    for state in interacted_states() {
        let crop = state.crop_rect();
        let image = state.native_pixel_size();
        let slack = 1e-6 * image.width.max(image.height);
        assert!(crop.x0 >= -slack && crop.y0 >= -slack, "{state:?} -> {crop:?}");
        assert!(crop.x1 <= image.width + slack, "{state:?} -> {crop:?}");
        assert!(crop.y1 <= image.height + slack, "{state:?} -> {crop:?}");
    }
}

#[test]
fn apply_crop_of_crop_rect_reproduces_state() {
    for state in interacted_states() {
        let back = state.with_crop(state.crop_rect()).unwrap();
        assert!(close(back.zoom_scale(), state.zoom_scale()), "{state:?}");
        assert!(close(back.offset().x, state.offset().x), "{state:?}");
        assert!(close(back.offset().y, state.offset().y), "{state:?}");
    }
}

#[test]
fn crop_rect_of_applied_crop_reproduces_rect() {
    let states = interacted_states();
    // Each crop comes from a real state; apply it to a different state
    // sharing content and viewport.
    for pair in states.chunks(4) {
        let target = pair[0];
        for source in &pair[1..] {
            let rect = source.crop_rect();
            let framed = target.with_crop(rect).unwrap().crop_rect();
            assert!(close(framed.x0, rect.x0), "{rect:?} -> {framed:?}");
            assert!(close(framed.y0, rect.y0), "{rect:?} -> {framed:?}");
            assert!(close(framed.x1, rect.x1), "{rect:?} -> {framed:?}");
            assert!(close(framed.y1, rect.y1), "{rect:?} -> {framed:?}");
        }
    }
}

#[test]
fn round_trip_holds_with_pixel_ratio() {
    let config = CropConfig::default().with_pixel_ratio(3.0);
    let mut state =
        ViewportState::initialize_with(Size::new(390.0, 844.0), Size::new(300.0, 300.0), &config)
            .unwrap();
    state.zoom_about_view_point(Point::new(40.0, 260.0), 1.1);
    state.pan_by(Vec2::new(5.0, -9.0));

    let crop = state.crop_rect();
    assert!(close(crop.width(), 300.0 * 3.0 / state.zoom_scale()));
    let back = state.with_crop(crop).unwrap();
    assert!(close(back.zoom_scale(), state.zoom_scale()));
    assert!(close(back.offset().x, state.offset().x));
    assert!(close(back.offset().y, state.offset().y));
}

#[test]
fn portrait_scenario() {
    let state =
        ViewportState::initialize(Size::new(1000.0, 2000.0), Size::new(500.0, 500.0), 0.8)
            .unwrap();
    assert_eq!(state.min_zoom_scale(), 0.5);
    assert_eq!(state.max_zoom_scale(), 0.8);
    assert_eq!(state.zoom_scale(), 0.5);
    assert_eq!(state.offset(), Point::new(0.0, 250.0));

    let crop = state.crop_rect();
    assert_eq!(crop, Rect::new(0.0, 500.0, 1000.0, 1500.0));
    assert_eq!(crop.width(), crop.height());
}

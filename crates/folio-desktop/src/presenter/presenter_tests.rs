use super::*;

const VIEWPORT: Size = Size::new(1440.0, 900.0);
const LAYOUT: Rect = Rect {
    x: 370.0,
    y: 200.0,
    width: 700.0,
    height: 500.0,
};
const DOCK_ICON: Rect = Rect {
    x: 688.0,
    y: 836.0,
    width: 64.0,
    height: 64.0,
};

fn window(is_open: bool, is_maximized: bool, z_index: ZIndex, origin: Option<Rect>) -> Window {
    Window {
        is_open,
        is_maximized,
        z_index,
        origin_rect: origin,
        ..Window::new("finder", 0)
    }
}

fn presenter() -> WindowPresenter {
    WindowPresenter::new(&Window::new("finder", 0), TransitionTimings::default())
}

fn approx(a: f32, b: f32) -> bool {
    (a - b).abs() < 0.01
}

fn approx_rect(a: Rect, b: Rect) -> bool {
    approx(a.x, b.x) && approx(a.y, b.y) && approx(a.width, b.width) && approx(a.height, b.height)
}

fn approx_transform(a: Transform, b: Transform) -> bool {
    approx(a.x, b.x) && approx(a.y, b.y) && approx(a.scale_x, b.scale_x) && approx(a.scale_y, b.scale_y)
}

/// Open at t=0 and settle at t=1000
fn opened() -> WindowPresenter {
    let mut p = presenter();
    p.sync(&window(true, false, 1, Some(DOCK_ICON)), Some(LAYOUT), VIEWPORT, 0.0);
    p.tick(1000.0);
    assert_eq!(p.state(), PresenterState::Open);
    p
}

#[test]
fn test_initial_frame_hidden() {
    let p = presenter();
    let frame = p.frame(0.0);
    assert_eq!(p.state(), PresenterState::Closed);
    assert!(!frame.visible);
    assert!(!frame.interactive);
    assert!(!frame.will_change);
}

#[test]
fn test_genie_open() {
    let mut p = presenter();
    p.sync(&window(true, false, 1, Some(DOCK_ICON)), Some(LAYOUT), VIEWPORT, 0.0);
    assert_eq!(p.state(), PresenterState::Opening);

    // Starts exactly on top of the trigger, transparent
    let start = p.frame(0.0);
    assert!(approx_rect(start.visual_rect(LAYOUT), DOCK_ICON));
    assert_eq!(start.opacity, 0.0);
    assert!(start.visible);
    assert!(start.will_change);

    // Opacity settles before the motion does
    let mid = p.frame(200.0);
    assert_eq!(mid.opacity, 1.0);
    assert!(!approx_transform(mid.transform, Transform::IDENTITY));

    p.tick(499.0);
    assert_eq!(p.state(), PresenterState::Opening);
    p.tick(500.0);
    assert_eq!(p.state(), PresenterState::Open);

    let rest = p.frame(500.0);
    assert_eq!(rest.transform, Transform::IDENTITY);
    assert!(!rest.will_change);
    assert!(rest.draggable);
    assert_eq!(rest.corner_radius, FRAME_STYLE.corner_radius);
}

#[test]
fn test_open_without_origin_fades_and_rises() {
    let mut p = presenter();
    p.sync(&window(true, false, 1, None), Some(LAYOUT), VIEWPORT, 0.0);

    let start = p.frame(0.0);
    assert_eq!(start.transform.y, FRAME_STYLE.fallback_rise);
    assert_eq!(start.transform.scale_x, FRAME_STYLE.fallback_scale);
    assert_eq!(start.opacity, 0.0);

    p.tick(300.0);
    assert_eq!(p.state(), PresenterState::Open);
    assert_eq!(p.frame(300.0).transform, Transform::IDENTITY);
}

#[test]
fn test_open_unmounted_falls_back() {
    let mut p = presenter();
    p.sync(&window(true, false, 1, Some(DOCK_ICON)), None, VIEWPORT, 0.0);
    assert_eq!(p.frame(0.0).transform.y, FRAME_STYLE.fallback_rise);
}

#[test]
fn test_genie_close() {
    let mut p = opened();
    p.sync(&window(false, false, 0, Some(DOCK_ICON)), Some(LAYOUT), VIEWPORT, 1000.0);
    assert_eq!(p.state(), PresenterState::Closing);
    assert_eq!(p.last_visual_position(), Some(Transform::IDENTITY));

    // The fade waits for the shrink to get going
    assert_eq!(p.frame(1250.0).opacity, 1.0);
    assert!(p.frame(1300.0).opacity < 1.0);

    let end = p.frame(1400.0);
    assert!(approx_rect(end.visual_rect(LAYOUT), DOCK_ICON));
    assert_eq!(end.opacity, 0.0);

    p.tick(1400.0);
    assert_eq!(p.state(), PresenterState::Closed);
    let closed = p.frame(1400.0);
    assert!(!closed.visible);
    assert!(!closed.interactive);
    assert!(!closed.will_change);
}

#[test]
fn test_stacking_snapshot_while_closing() {
    let mut p = presenter();
    p.sync(&window(true, false, 7, None), Some(LAYOUT), VIEWPORT, 0.0);
    p.tick(1000.0);
    p.sync(&window(false, false, 0, None), Some(LAYOUT), VIEWPORT, 1000.0);

    assert_eq!(p.frame(1100.0).z_index, 7);
    p.tick(2000.0);
    assert_eq!(p.frame(2000.0).z_index, 0);
}

#[test]
fn test_reopen_interrupts_close_without_jump() {
    let mut p = opened();
    p.sync(&window(false, false, 0, Some(DOCK_ICON)), Some(LAYOUT), VIEWPORT, 1000.0);

    let before = p.frame(1200.0);
    p.sync(&window(true, false, 2, None), Some(LAYOUT), VIEWPORT, 1200.0);
    assert_eq!(p.state(), PresenterState::Opening);

    let after = p.frame(1200.0);
    assert!(approx_transform(before.transform, after.transform));
    assert!(approx(before.opacity, after.opacity));

    p.tick(1700.0);
    assert_eq!(p.state(), PresenterState::Open);
    assert_eq!(p.frame(1700.0).transform, Transform::IDENTITY);
}

#[test]
fn test_drag_only_when_open() {
    let mut p = presenter();
    p.sync(&window(true, false, 1, None), Some(LAYOUT), VIEWPORT, 0.0);
    assert!(!p.drag_by(10.0, 10.0));

    p.tick(1000.0);
    assert!(p.drag_by(30.0, -20.0));
    assert_eq!(p.frame(1000.0).transform, Transform::at(30.0, -20.0));
}

#[test]
fn test_draggable_flag_matches_drag_in_every_state() {
    let mut p = presenter();
    let mut cases = vec![(p.clone(), 0.0)];

    p.sync(&window(true, false, 1, Some(DOCK_ICON)), Some(LAYOUT), VIEWPORT, 0.0);
    cases.push((p.clone(), 100.0));
    p.tick(1000.0);
    cases.push((p.clone(), 1000.0));

    let mut closing = p.clone();
    closing.sync(&window(false, false, 0, Some(DOCK_ICON)), Some(LAYOUT), VIEWPORT, 1000.0);
    cases.push((closing, 1100.0));

    p.sync(&window(true, true, 2, None), Some(LAYOUT), VIEWPORT, 1000.0);
    cases.push((p.clone(), 1100.0));
    p.tick(1400.0);
    cases.push((p.clone(), 1400.0));
    p.sync(&window(true, false, 3, None), Some(LAYOUT), VIEWPORT, 2000.0);
    cases.push((p.clone(), 2100.0));

    let states: Vec<_> = cases.iter().map(|(p, _)| p.state()).collect();
    assert_eq!(
        states,
        vec![
            PresenterState::Closed,
            PresenterState::Opening,
            PresenterState::Open,
            PresenterState::Closing,
            PresenterState::Maximizing,
            PresenterState::Maximized,
            PresenterState::Restoring,
        ]
    );

    for (mut p, now) in cases {
        let draggable = p.frame(now).draggable;
        assert_eq!(draggable, p.drag_by(1.0, 1.0), "{:?}", p.state());
        assert_eq!(draggable, p.state() == PresenterState::Open);
    }
}

#[test]
fn test_open_from_non_finite_origin_falls_back() {
    let mut p = presenter();
    let origin = Rect::new(f32::NAN, 836.0, 64.0, 64.0);
    p.sync(&window(true, false, 1, Some(origin)), Some(LAYOUT), VIEWPORT, 0.0);

    let start = p.frame(0.0);
    assert!(start.transform.x.is_finite());
    assert_eq!(start.transform.y, FRAME_STYLE.fallback_rise);
    assert_eq!(start.transform.scale_x, FRAME_STYLE.fallback_scale);
}

#[test]
fn test_reopen_resumes_last_position() {
    let mut p = opened();
    assert!(p.drag_by(120.0, 40.0));

    p.sync(&window(false, false, 0, None), Some(LAYOUT), VIEWPORT, 1000.0);
    assert_eq!(p.last_visual_position(), Some(Transform::at(120.0, 40.0)));
    p.tick(2000.0);

    p.sync(&window(true, false, 2, None), Some(LAYOUT), VIEWPORT, 3000.0);
    p.tick(4000.0);
    assert_eq!(p.frame(4000.0).transform, Transform::at(120.0, 40.0));
}

#[test]
fn test_maximize_and_restore() {
    let mut p = opened();
    assert!(p.drag_by(50.0, 25.0));
    let windowed = Transform::at(50.0, 25.0).apply(LAYOUT);

    p.sync(&window(true, true, 2, Some(DOCK_ICON)), Some(LAYOUT), VIEWPORT, 1000.0);
    assert_eq!(p.state(), PresenterState::Maximizing);
    assert_eq!(
        p.saved_restore(),
        Some(RestoreGeometry {
            transform: Transform::at(50.0, 25.0),
            rect: windowed,
        })
    );

    let start = p.frame(1000.0);
    assert!(!start.draggable);
    assert!(approx_rect(start.visual_rect(LAYOUT), windowed));
    assert!(!p.drag_by(5.0, 5.0));

    p.tick(1400.0);
    assert_eq!(p.state(), PresenterState::Maximized);
    let max = p.frame(1400.0);
    assert_eq!(max.bounds, Some(VIEWPORT.to_rect()));
    assert_eq!(max.transform, Transform::IDENTITY);
    assert_eq!(max.corner_radius, 0.0);

    p.sync(&window(true, false, 3, Some(DOCK_ICON)), Some(LAYOUT), VIEWPORT, 2000.0);
    assert_eq!(p.state(), PresenterState::Restoring);
    assert!(approx_rect(p.frame(2400.0).visual_rect(LAYOUT), windowed));

    p.tick(2400.0);
    assert_eq!(p.state(), PresenterState::Open);
    let rest = p.frame(2400.0);
    assert_eq!(rest.bounds, None);
    assert_eq!(rest.transform, Transform::at(50.0, 25.0));
    assert_eq!(rest.corner_radius, FRAME_STYLE.corner_radius);
    assert!(rest.draggable);
    assert_eq!(p.saved_restore(), None);
}

#[test]
fn test_close_while_maximized_keeps_windowed_anchor() {
    let mut p = opened();
    assert!(p.drag_by(-80.0, 10.0));
    p.sync(&window(true, true, 2, Some(DOCK_ICON)), Some(LAYOUT), VIEWPORT, 1000.0);
    p.tick(1400.0);

    p.sync(&window(false, true, 0, Some(DOCK_ICON)), Some(LAYOUT), VIEWPORT, 2000.0);
    assert_eq!(p.state(), PresenterState::Closing);
    assert_eq!(p.last_visual_position(), Some(Transform::at(-80.0, 10.0)));

    p.tick(2400.0);
    assert_eq!(p.state(), PresenterState::Closed);
    let closed = p.frame(2400.0);
    assert_eq!(closed.bounds, None);
    assert_eq!(closed.corner_radius, FRAME_STYLE.corner_radius);
    assert_eq!(p.saved_restore(), None);
}

#[test]
fn test_maximize_while_closed_is_recorded() {
    let mut p = presenter();
    p.sync(&window(false, true, 1, None), Some(LAYOUT), VIEWPORT, 0.0);
    assert_eq!(p.state(), PresenterState::Closed);

    p.sync(&window(true, true, 2, None), Some(LAYOUT), VIEWPORT, 100.0);
    assert_eq!(p.state(), PresenterState::Opening);
    assert_eq!(p.frame(100.0).bounds, Some(VIEWPORT.to_rect()));

    p.tick(1000.0);
    assert_eq!(p.state(), PresenterState::Maximized);
    assert_eq!(
        p.saved_restore(),
        Some(RestoreGeometry {
            transform: Transform::IDENTITY,
            rect: LAYOUT,
        })
    );

    p.sync(&window(true, false, 3, None), Some(LAYOUT), VIEWPORT, 1000.0);
    p.tick(2000.0);
    assert_eq!(p.state(), PresenterState::Open);
    assert_eq!(p.frame(2000.0).bounds, None);
}

#[test]
fn test_restore_interrupts_maximize_from_current_bounds() {
    let mut p = opened();
    p.sync(&window(true, true, 2, None), Some(LAYOUT), VIEWPORT, 1000.0);

    let mid = p.frame(1200.0).visual_rect(LAYOUT);
    p.sync(&window(true, false, 3, None), Some(LAYOUT), VIEWPORT, 1200.0);
    assert_eq!(p.state(), PresenterState::Restoring);
    assert!(approx_rect(p.frame(1200.0).visual_rect(LAYOUT), mid));

    p.tick(1600.0);
    assert_eq!(p.state(), PresenterState::Open);
    assert_eq!(p.frame(1600.0).transform, Transform::IDENTITY);
}

#[test]
fn test_close_during_open_remembers_target() {
    let mut p = presenter();
    p.sync(&window(true, false, 1, Some(DOCK_ICON)), Some(LAYOUT), VIEWPORT, 0.0);
    p.sync(&window(false, false, 0, Some(DOCK_ICON)), Some(LAYOUT), VIEWPORT, 100.0);
    assert_eq!(p.last_visual_position(), Some(Transform::IDENTITY));
    assert_eq!(p.state(), PresenterState::Closing);
}

#[test]
fn test_instant_timings_settle_on_next_tick() {
    let mut p = WindowPresenter::new(&Window::new("finder", 0), TransitionTimings::instant());
    p.sync(&window(true, false, 1, Some(DOCK_ICON)), Some(LAYOUT), VIEWPORT, 0.0);
    p.tick(0.0);
    assert_eq!(p.state(), PresenterState::Open);
    assert!(!p.is_animating());
}

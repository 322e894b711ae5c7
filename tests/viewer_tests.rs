//! End-to-end tests driving a mounted viewer with synthetic input against
//! a counting backend.

use fractile::prelude::*;
use std::sync::{Arc, Mutex};

/// Backend that counts handle traffic so teardown symmetry is observable.
#[derive(Default)]
struct CountingRenderer {
    next_id: u64,
    live: HashSet<TileHandle>,
    created: usize,
    released: usize,
    positioned: usize,
}

impl TileRenderer for CountingRenderer {
    fn create_tile(&mut self, _key: TileKey, _address: TileAddress) -> TileHandle {
        self.next_id += 1;
        let handle = TileHandle(self.next_id);
        self.live.insert(handle);
        self.created += 1;
        handle
    }

    fn position_tile(&mut self, handle: TileHandle, _x: f64, _y: f64) {
        assert!(self.live.contains(&handle));
        self.positioned += 1;
    }

    fn release_tile(&mut self, handle: TileHandle) {
        assert!(self.live.remove(&handle));
        self.released += 1;
    }
}

/// Observer capturing the last notification for assertions.
#[derive(Clone, Default)]
struct SharedStatus {
    last: Arc<Mutex<Option<(u8, f64, f64)>>>,
}

impl StatusObserver for SharedStatus {
    fn status_changed(&mut self, zoom: u8, plane_x: f64, plane_y: f64) {
        *self.last.lock().unwrap() = Some((zoom, plane_x, plane_y));
    }
}

fn start_viewer(viewport: ViewportSize) -> Viewer<CountingRenderer> {
    let _ = env_logger::builder().is_test(true).try_init();
    Viewer::start(ViewerConfig::default(), viewport, CountingRenderer::default()).unwrap()
}

#[test]
fn mount_performs_initial_reconciliation() {
    let viewer = start_viewer(ViewportSize::new(512.0, 512.0));
    let expected = visible_tiles(viewer.camera(), 256, viewer.viewport()).len();
    assert!(expected > 0);
    assert_eq!(viewer.tile_count(), expected);
    assert_eq!(viewer.renderer().created, expected);
}

#[test]
fn mount_then_teardown_releases_everything() {
    let viewer = start_viewer(ViewportSize::new(800.0, 600.0));
    let renderer = viewer.stop();
    assert_eq!(renderer.created, renderer.released);
    assert!(renderer.live.is_empty());
}

#[test]
fn teardown_after_interaction_stays_balanced() {
    let mut viewer = start_viewer(ViewportSize::new(800.0, 600.0));
    viewer.handle_event(&InputEvent::PointerDown {
        position: Point::new(400.0, 300.0),
        button: MouseButton::Left,
    });
    viewer.handle_event(&InputEvent::PointerMove {
        position: Point::new(150.0, 100.0),
    });
    viewer.handle_event(&InputEvent::PointerUp);
    viewer.handle_event(&InputEvent::Wheel {
        delta_y: -300.0,
        position: Point::new(123.0, 456.0),
    });

    let renderer = viewer.stop();
    assert_eq!(renderer.created, renderer.released);
    assert!(renderer.live.is_empty());
}

#[test]
fn drag_pans_the_camera_and_back() {
    let mut viewer = start_viewer(ViewportSize::new(800.0, 600.0));
    let start_camera = *viewer.camera();

    viewer.handle_event(&InputEvent::PointerDown {
        position: Point::new(400.0, 300.0),
        button: MouseButton::Left,
    });
    viewer.handle_event(&InputEvent::PointerMove {
        position: Point::new(430.0, 280.0),
    });
    assert!(viewer.camera().center_x < start_camera.center_x);
    assert!(viewer.camera().center_y > start_camera.center_y);

    viewer.handle_event(&InputEvent::PointerMove {
        position: Point::new(400.0, 300.0),
    });
    viewer.handle_event(&InputEvent::PointerUp);
    assert!((viewer.camera().center_x - start_camera.center_x).abs() < 1e-12);
    assert!((viewer.camera().center_y - start_camera.center_y).abs() < 1e-12);
}

#[test]
fn wheel_accumulation_zooms_out_once() {
    let mut viewer = start_viewer(ViewportSize::new(800.0, 600.0));
    assert_eq!(viewer.camera().zoom, 2);

    let cursor = Point::new(400.0, 300.0);
    for _ in 0..3 {
        viewer.handle_event(&InputEvent::Wheel {
            delta_y: 100.0,
            position: cursor,
        });
    }
    assert_eq!(viewer.camera().zoom, 1);

    // Threshold was consumed: the next small delta does not zoom again.
    viewer.handle_event(&InputEvent::Wheel {
        delta_y: 100.0,
        position: cursor,
    });
    assert_eq!(viewer.camera().zoom, 1);
}

#[test]
fn wheel_zoom_keeps_cursor_point_fixed() {
    let mut viewer = start_viewer(ViewportSize::new(800.0, 600.0));
    let cursor = Point::new(130.0, 520.0);
    let before = viewer
        .camera()
        .local_to_plane(256, viewer.viewport(), cursor);

    viewer.handle_event(&InputEvent::Wheel {
        delta_y: -300.0,
        position: cursor,
    });
    assert_eq!(viewer.camera().zoom, 3);

    let after = viewer
        .camera()
        .local_to_plane(256, viewer.viewport(), cursor);
    assert!((after.0 - before.0).abs() < 1e-12);
    assert!((after.1 - before.1).abs() < 1e-12);
}

#[test]
fn zoom_out_at_min_zoom_is_a_noop() {
    let config = ViewerConfig {
        initial_camera: Camera::new(0.5, 0.5, 0),
        ..Default::default()
    };
    let mut viewer = Viewer::start(
        config,
        ViewportSize::new(800.0, 600.0),
        CountingRenderer::default(),
    )
    .unwrap();
    let camera_before = *viewer.camera();
    let positioned_before = viewer.renderer().positioned;

    viewer.handle_event(&InputEvent::Wheel {
        delta_y: 300.0,
        position: Point::new(10.0, 10.0),
    });

    // Camera unchanged and no redundant reconciliation happened.
    assert_eq!(*viewer.camera(), camera_before);
    assert_eq!(viewer.renderer().positioned, positioned_before);
}

#[test]
fn pinch_zooms_in_anchored_at_midpoint() {
    let mut viewer = start_viewer(ViewportSize::new(800.0, 600.0));
    let touches = |a: (f64, f64), b: (f64, f64)| {
        vec![
            TouchPoint::new(1, Point::new(a.0, a.1)),
            TouchPoint::new(2, Point::new(b.0, b.1)),
        ]
    };

    viewer.handle_event(&InputEvent::TouchStart {
        touches: touches((350.0, 300.0), (450.0, 300.0)),
    });
    let midpoint = Point::new(400.0, 300.0);
    let before = viewer
        .camera()
        .local_to_plane(256, viewer.viewport(), midpoint);

    // Fingers spread from 100px to 200px: one level in.
    viewer.handle_event(&InputEvent::TouchMove {
        touches: touches((300.0, 300.0), (500.0, 300.0)),
    });
    assert_eq!(viewer.camera().zoom, 3);

    let after = viewer
        .camera()
        .local_to_plane(256, viewer.viewport(), midpoint);
    assert!((after.0 - before.0).abs() < 1e-12);
    assert!((after.1 - before.1).abs() < 1e-12);
}

#[test]
fn resize_to_zero_area_empties_the_tile_set() {
    let mut viewer = start_viewer(ViewportSize::new(512.0, 512.0));
    assert!(viewer.tile_count() > 0);

    viewer.handle_event(&InputEvent::Resize {
        width: 0.0,
        height: 0.0,
    });
    assert_eq!(viewer.tile_count(), 0);

    viewer.handle_event(&InputEvent::Resize {
        width: 512.0,
        height: 512.0,
    });
    assert!(viewer.tile_count() > 0);
}

#[test]
fn status_observer_sees_logical_plane_center() {
    let mut viewer = start_viewer(ViewportSize::new(512.0, 512.0));
    let status = SharedStatus::default();
    viewer.set_status_observer(Box::new(status.clone()));

    // Default mapping sends the centered camera to (-0.75, 0.0).
    let (zoom, re, im) = status.last.lock().unwrap().unwrap();
    assert_eq!(zoom, 2);
    assert!((re - -0.75).abs() < 1e-12);
    assert!(im.abs() < 1e-12);

    viewer.handle_event(&InputEvent::Wheel {
        delta_y: -300.0,
        position: Point::new(256.0, 256.0),
    });
    let (zoom, _, _) = status.last.lock().unwrap().unwrap();
    assert_eq!(zoom, 3);
}

#[test]
fn invalid_config_is_rejected_at_mount() {
    let config = ViewerConfig {
        min_zoom: 9,
        max_zoom: 3,
        ..Default::default()
    };
    assert!(Viewer::start(
        config,
        ViewportSize::new(800.0, 600.0),
        CountingRenderer::default()
    )
    .is_err());
}

//! The assembled viewer: camera, gesture interpreter and tile set wired to
//! a rendering backend. Single-threaded and event-driven; every entry
//! point runs synchronously on the host's UI loop and nothing blocks.

use crate::core::{
    camera::Camera,
    config::ViewerConfig,
    geometry::{Point, ViewportSize},
};
use crate::input::{
    events::{EventHandled, InputEvent},
    gestures::{Action, GestureInterpreter},
};
use crate::status::StatusObserver;
use crate::tiles::{renderer::TileRenderer, set::TileSet};
use crate::Result;

/// A mounted viewer instance. `start` and `stop` are symmetric: every tile
/// handle acquired over the lifetime is released at teardown, and the
/// backend is handed back so the host can verify or reuse it.
pub struct Viewer<R: TileRenderer> {
    config: ViewerConfig,
    camera: Camera,
    viewport: ViewportSize,
    tiles: TileSet,
    gestures: GestureInterpreter,
    renderer: R,
    observer: Option<Box<dyn StatusObserver>>,
}

impl<R: TileRenderer> Viewer<R> {
    /// Validates the configuration, mounts the viewer and performs the
    /// initial reconciliation.
    pub fn start(config: ViewerConfig, viewport: ViewportSize, renderer: R) -> Result<Self> {
        config.validate()?;
        let mut viewer = Self {
            camera: config.initial_camera,
            viewport,
            tiles: TileSet::new(config.clamped_resolution_scale()),
            gestures: GestureInterpreter::new(config.scroll_threshold),
            renderer,
            observer: None,
            config,
        };
        log::debug!(
            "viewer started at ({}, {}) z={}",
            viewer.camera.center_x,
            viewer.camera.center_y,
            viewer.camera.zoom
        );
        viewer.refresh();
        Ok(viewer)
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn viewport(&self) -> ViewportSize {
        self.viewport
    }

    pub fn config(&self) -> &ViewerConfig {
        &self.config
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    /// Number of tile handles currently alive.
    pub fn tile_count(&self) -> usize {
        self.tiles.len()
    }

    /// Registers the status observer and pushes the current state to it.
    pub fn set_status_observer(&mut self, observer: Box<dyn StatusObserver>) {
        self.observer = Some(observer);
        self.notify_status();
    }

    pub fn clear_status_observer(&mut self) {
        self.observer = None;
    }

    /// Routes one input event through the gesture interpreter, applies the
    /// resulting camera updates, and reconciles when anything changed.
    /// Returns whether the host should suppress the platform default.
    pub fn handle_event(&mut self, event: &InputEvent) -> EventHandled {
        if let InputEvent::Resize { width, height } = *event {
            self.viewport = ViewportSize::new(width, height);
            self.refresh();
            return EventHandled::Handled;
        }

        let (actions, handled) = self.gestures.handle(event, self.camera.zoom);
        let mut changed = false;
        for action in actions {
            changed |= self.apply(action);
        }
        if changed {
            self.refresh();
        }
        handled
    }

    fn apply(&mut self, action: Action) -> bool {
        match action {
            Action::Pan { dx, dy } => {
                self.camera = self.camera.pan(self.config.tile_size, dx, dy);
                true
            }
            Action::ZoomStep { delta, anchor } => {
                self.zoom_to(self.camera.zoom as i32 + delta, anchor)
            }
            Action::ZoomTo { zoom, anchor } => self.zoom_to(zoom, anchor),
        }
    }

    fn zoom_to(&mut self, zoom: i32, anchor: Point) -> bool {
        match self.camera.zoom_anchored(
            self.config.tile_size,
            self.viewport,
            anchor,
            zoom,
            self.config.min_zoom,
            self.config.max_zoom,
        ) {
            Some(camera) => {
                self.camera = camera;
                true
            }
            None => false,
        }
    }

    /// Reconciles the tile set against the current camera and viewport and
    /// notifies the status observer. Idempotent.
    pub fn refresh(&mut self) {
        self.tiles.reconcile(
            &mut self.renderer,
            &self.camera,
            self.config.tile_size,
            self.viewport,
        );
        self.notify_status();
    }

    fn notify_status(&mut self) {
        if let Some(observer) = self.observer.as_mut() {
            let (plane_x, plane_y) = self.config.plane_mapping.project_camera(&self.camera);
            observer.status_changed(self.camera.zoom, plane_x, plane_y);
        }
    }

    /// Tears the viewer down: releases every tile handle, clears gesture
    /// state and the observer, and hands the backend back.
    pub fn stop(mut self) -> R {
        self.tiles.release_all(&mut self.renderer);
        self.gestures.reset();
        self.observer = None;
        log::debug!("viewer stopped");
        self.renderer
    }
}

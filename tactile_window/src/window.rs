// Copyright 2025 the Tactile Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The frame loop.

use std::time::Instant;

use kurbo::{Point, Rect, Size, Vec2};
use tactile_event::{Action, Button, Event};
use tactile_handler::{Element, InteractionContext};

use crate::backend::Backend;
use crate::config::{WindowConfig, WindowDescriptor};
use crate::error::{BackendError, WindowError};
use crate::stats::FrameStats;

/// Lifecycle of a [`Window`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum WindowState {
    /// Configured but not yet shown.
    Created,
    /// Inside [`Window::show`].
    Running,
    /// The backend reported the window closed.
    Terminated,
}

/// Owns the root element and the interaction context, and drives them from a
/// polling [`Backend`].
#[derive(Debug)]
pub struct Window<E> {
    config: WindowConfig,
    root: E,
    ctx: InteractionContext,
    state: WindowState,
    /// Bounds last reported by the backend.
    bounds: Size,
    /// Layout size: `bounds` clamped to the minimum size.
    size: Size,
    cursor: Point,
    stats: FrameStats,
}

impl<E: Element> Window<E> {
    /// Create a window that will lay out `root` according to `config`.
    pub fn new(config: WindowConfig, root: E) -> Self {
        Self {
            config,
            root,
            ctx: InteractionContext::new(),
            state: WindowState::Created,
            bounds: Size::ZERO,
            size: Size::ZERO,
            cursor: Point::ZERO,
            stats: FrameStats::new(Instant::now()),
        }
    }

    /// The configuration.
    pub fn config(&self) -> &WindowConfig {
        &self.config
    }

    /// Limit the layout size from below.
    ///
    /// Takes effect on the next layout; it is also forwarded to the backend
    /// when the window is shown.
    pub fn set_min_size(&mut self, width: f64, height: f64) {
        self.config.set_min_size(width, height);
    }

    /// The root element.
    pub fn root(&self) -> &E {
        &self.root
    }

    /// Mutable access to the root element.
    pub fn root_mut(&mut self) -> &mut E {
        &mut self.root
    }

    /// The hover registry and focus pointer.
    pub fn context(&self) -> &InteractionContext {
        &self.ctx
    }

    /// Mutable access to the hover registry and focus pointer.
    pub fn context_mut(&mut self) -> &mut InteractionContext {
        &mut self.ctx
    }

    /// Current lifecycle state.
    pub fn state(&self) -> WindowState {
        self.state
    }

    /// Size the root is currently laid out at.
    pub fn size(&self) -> Size {
        self.size
    }

    /// Frames drawn during the last full second, once one has elapsed.
    pub fn fps(&self) -> Option<u32> {
        self.stats.fps()
    }

    /// Open a backend window and run the frame loop until it is closed.
    ///
    /// `open` receives the [`WindowDescriptor`] derived from the config. A
    /// creation failure is returned as [`WindowError::Create`]; there is no
    /// degraded mode without a window, so callers usually abort on it. On a
    /// normal close the backend is handed back.
    pub fn show<B, F>(&mut self, open: F) -> Result<B, WindowError>
    where
        B: Backend,
        F: FnOnce(&WindowDescriptor) -> Result<B, BackendError>,
    {
        if self.state != WindowState::Created {
            return Err(WindowError::Terminated);
        }
        let desc = self.config.descriptor();
        let mut backend = open(&desc).map_err(WindowError::Create)?;
        tracing::info!(
            title = %desc.title,
            width = desc.size.width,
            height = desc.size.height,
            "window created"
        );

        self.state = WindowState::Running;
        self.bounds = desc.size;
        self.size = self.config.clamp(desc.size);
        self.update_root();
        self.stats = FrameStats::new(Instant::now());

        while !backend.closed() {
            self.run_frame(&mut backend);
        }

        self.state = WindowState::Terminated;
        tracing::info!("window closed");
        Ok(backend)
    }

    /// Run one poll, dispatch and draw iteration.
    ///
    /// [`Window::show`] calls this in a loop. Input is always dispatched
    /// before drawing, so a frame shows the effect of its own input.
    pub fn run_frame<B: Backend>(&mut self, backend: &mut B) {
        backend.update();

        let bounds = backend.bounds();
        if bounds != self.bounds {
            self.bounds = bounds;
            let size = self.config.clamp(bounds);
            // Resizing below the minimum leaves the layout size unchanged.
            if size != self.size {
                self.size = size;
                tracing::debug!(
                    width = self.size.width,
                    height = self.size.height,
                    "window resized"
                );
                self.update_root();
            }
        }

        let cursor = backend.cursor_position();
        let mut held = Button::None;
        for button in Button::ALL {
            if backend.pressed(button) {
                held = button;
            }
            if backend.just_pressed(button) {
                self.dispatch(Action::Press.the(button), cursor);
            }
            if backend.just_released(button) {
                self.dispatch(Action::Release.the(button), cursor);
            }
        }

        if cursor != self.cursor {
            // Root first, so elements hovered by this move are registered
            // before the exit scan runs.
            let event = Action::Move.the(held);
            self.dispatch(event, cursor);
            self.ctx.reconcile(event, cursor);
            self.cursor = cursor;
        }

        let scroll = backend.scroll_delta();
        if scroll != Vec2::ZERO {
            self.dispatch(Event::scroll(scroll), cursor);
        }

        if let Some(fps) = self.stats.tick(Instant::now()) {
            tracing::trace!(fps, "frame rate");
        }

        backend.clear(self.config.background);
        self.root.draw(backend);
    }

    /// Lay the root out over the whole window and re-rasterize it.
    pub fn update_root(&mut self) {
        self.root
            .fit_into(Rect::from_origin_size(Point::ZERO, self.size));
        self.root.rasterize();
    }

    fn dispatch(&mut self, event: Event, point: Point) {
        self.root.handle(&mut self.ctx, event, point);
    }
}

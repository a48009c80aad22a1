// Copyright 2025 the Tactile Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A backend that replays scripted input and records what was drawn.
//!
//! Each [`FrameInput`] describes the window as one call to
//! [`Backend::update`] would observe it. Button edges are derived by
//! comparing consecutive frames, the way a polling windowing library reports
//! them. The backend reports itself closed once the script is exhausted, so
//! [`Window::show`](crate::Window::show) runs exactly one iteration per
//! scripted frame.
//!
//! ```
//! use kurbo::{Point, Size};
//! use tactile_event::Button;
//! use tactile_handler::Handler;
//! use tactile_window::{FrameInput, HeadlessBackend, Window, WindowConfig};
//!
//! let button = Handler::new();
//! let mut window = Window::new(WindowConfig::default(), button.clone());
//!
//! let size = Size::new(1280.0, 720.0);
//! let at = Point::new(100.0, 100.0);
//! let backend = window
//!     .show(|desc| {
//!         Ok(HeadlessBackend::new(desc)
//!             .frame(FrameInput::new(size).cursor(at))
//!             .frame(FrameInput::new(size).cursor(at).hold(Button::Left)))
//!     })
//!     .unwrap();
//!
//! assert_eq!(backend.drawn().len(), 2);
//! assert!(button.is_pressed());
//! ```

use std::collections::VecDeque;

use kurbo::{Point, Size, Vec2};
use peniko::Color;
use tactile_event::Button;
use tactile_style::{Sprite, Surface};

use crate::backend::Backend;
use crate::config::WindowDescriptor;

/// Window state observed by one update.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct FrameInput {
    /// Drawable size.
    pub bounds: Size,
    /// Pointer position.
    pub cursor: Point,
    /// Held state of left, right and middle, in that order.
    pub held: [bool; 3],
    /// Scroll since the previous frame.
    pub scroll: Vec2,
}

impl FrameInput {
    /// A frame of the given size with the pointer at the origin, nothing held
    /// and no scroll.
    pub fn new(bounds: Size) -> Self {
        Self {
            bounds,
            cursor: Point::ZERO,
            held: [false; 3],
            scroll: Vec2::ZERO,
        }
    }

    /// Place the pointer.
    pub fn cursor(mut self, cursor: Point) -> Self {
        self.cursor = cursor;
        self
    }

    /// Hold `button` during this frame.
    pub fn hold(mut self, button: Button) -> Self {
        if let Some(i) = slot(button) {
            self.held[i] = true;
        }
        self
    }

    /// Scroll by `delta` during this frame.
    pub fn scroll(mut self, delta: Vec2) -> Self {
        self.scroll = delta;
        self
    }

    fn is_held(&self, button: Button) -> bool {
        slot(button).is_some_and(|i| self.held[i])
    }
}

fn slot(button: Button) -> Option<usize> {
    match button {
        Button::None => None,
        Button::Left => Some(0),
        Button::Right => Some(1),
        Button::Middle => Some(2),
    }
}

/// A surface operation recorded by [`HeadlessBackend`].
#[derive(Clone, Debug)]
pub enum SurfaceOp {
    /// The frame was cleared.
    Clear(Color),
    /// A sprite was composited.
    Sprite {
        /// Size the sprite was recorded at.
        size: Size,
        /// Top-left corner in window coordinates.
        origin: Point,
    },
}

/// Scripted, windowless [`Backend`].
#[derive(Debug)]
pub struct HeadlessBackend {
    descriptor: WindowDescriptor,
    script: VecDeque<FrameInput>,
    previous: FrameInput,
    current: FrameInput,
    drawn: Vec<Vec<SurfaceOp>>,
    updates: usize,
}

impl HeadlessBackend {
    /// Create a backend for `descriptor` with an empty script.
    ///
    /// Before the first update the window reports the descriptor's size.
    pub fn new(descriptor: &WindowDescriptor) -> Self {
        let initial = FrameInput::new(descriptor.size);
        Self {
            descriptor: descriptor.clone(),
            script: VecDeque::new(),
            previous: initial,
            current: initial,
            drawn: Vec::new(),
            updates: 0,
        }
    }

    /// Append a frame to the script.
    pub fn frame(mut self, input: FrameInput) -> Self {
        self.script.push_back(input);
        self
    }

    /// Append several frames to the script.
    pub fn frames(mut self, inputs: impl IntoIterator<Item = FrameInput>) -> Self {
        self.script.extend(inputs);
        self
    }

    /// What the window was created with.
    pub fn descriptor(&self) -> &WindowDescriptor {
        &self.descriptor
    }

    /// Operations of every drawn frame, oldest first.
    ///
    /// Each [`Surface::clear`] starts a new frame.
    pub fn drawn(&self) -> &[Vec<SurfaceOp>] {
        &self.drawn
    }

    /// Number of updates performed.
    pub fn updates(&self) -> usize {
        self.updates
    }
}

impl Surface for HeadlessBackend {
    fn clear(&mut self, color: Color) {
        self.drawn.push(vec![SurfaceOp::Clear(color)]);
    }

    fn draw_sprite(&mut self, sprite: &Sprite, origin: Point) {
        let op = SurfaceOp::Sprite {
            size: sprite.size(),
            origin,
        };
        match self.drawn.last_mut() {
            Some(frame) => frame.push(op),
            None => self.drawn.push(vec![op]),
        }
    }
}

impl Backend for HeadlessBackend {
    fn update(&mut self) {
        self.updates += 1;
        self.previous = self.current;
        match self.script.pop_front() {
            Some(next) => self.current = next,
            // Nothing new: keep the last state, with no edges and no scroll.
            None => self.current.scroll = Vec2::ZERO,
        }
    }

    fn closed(&self) -> bool {
        self.script.is_empty()
    }

    fn bounds(&self) -> Size {
        self.current.bounds
    }

    fn cursor_position(&self) -> Point {
        self.current.cursor
    }

    fn pressed(&self, button: Button) -> bool {
        self.current.is_held(button)
    }

    fn just_pressed(&self, button: Button) -> bool {
        self.current.is_held(button) && !self.previous.is_held(button)
    }

    fn just_released(&self, button: Button) -> bool {
        !self.current.is_held(button) && self.previous.is_held(button)
    }

    fn scroll_delta(&self) -> Vec2 {
        self.current.scroll
    }
}

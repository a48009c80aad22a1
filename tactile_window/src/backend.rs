// Copyright 2025 the Tactile Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The polling contract a native window backend provides.

use kurbo::{Point, Size, Vec2};
use tactile_event::Button;
use tactile_style::Surface;

/// A native window polled once per frame.
///
/// Every query reports the state captured by the most recent
/// [`update`](Backend::update). Calls must not block; frame pacing is up to
/// the backend (typically vsync inside `update`).
pub trait Backend: Surface {
    /// Present the previous frame and capture fresh input and window state.
    fn update(&mut self);

    /// Returns `true` once the user asked to close the window.
    fn closed(&self) -> bool;

    /// Current drawable size in logical pixels.
    fn bounds(&self) -> Size;

    /// Pointer position in window coordinates.
    fn cursor_position(&self) -> Point;

    /// Returns `true` while `button` is held.
    fn pressed(&self, button: Button) -> bool;

    /// Returns `true` if `button` went down since the previous update.
    fn just_pressed(&self, button: Button) -> bool;

    /// Returns `true` if `button` went up since the previous update.
    fn just_released(&self, button: Button) -> bool;

    /// Scroll accumulated since the previous update.
    fn scroll_delta(&self) -> Vec2;
}

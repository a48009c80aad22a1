// Copyright 2025 the Tactile Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tactile Window: the per-frame poll, dispatch and draw loop.
//!
//! ## Overview
//!
//! A [`Window`] owns the root [`Element`](tactile_handler::Element) and the
//! [`InteractionContext`](tactile_handler::InteractionContext), and drives
//! both from a [`Backend`], a native window that is polled once per frame.
//! Backend creation is the only fallible step: [`Window::show`] reports it as
//! [`WindowError::Create`].
//!
//! ## One frame
//!
//! 1) Poll the backend ([`Backend::update`]).
//! 2) If the bounds changed, lay the root out over the new size (clamped to
//!    the configured minimum) and re-rasterize it.
//! 3) For left, right and middle: dispatch `Press` / `Release` on edges and
//!    remember which button is held.
//! 4) If the pointer moved: dispatch `Move` carrying the held button (or
//!    none) to the root, then let the context evict handlers the pointer
//!    has left.
//! 5) If there was scroll, dispatch a `Scroll` event.
//! 6) Clear the surface and draw the root.
//!
//! The loop is single-threaded and never blocks on its own; pacing is the
//! backend's job. It ends when the backend reports itself closed.
//!
//! ## Testing without a display
//!
//! [`HeadlessBackend`] replays a script of [`FrameInput`]s and records every
//! [`SurfaceOp`], which makes the loop observable in tests.
//!
//! ## Logging
//!
//! The loop logs through `tracing`: window creation and close at `info`,
//! re-layout at `debug`, and the frame rate at `trace`.

mod backend;
mod config;
mod error;
mod headless;
mod stats;
mod window;

pub use backend::Backend;
pub use config::{DEFAULT_HEIGHT, DEFAULT_WIDTH, WindowConfig, WindowDescriptor};
pub use error::{BackendError, WindowError};
pub use headless::{FrameInput, HeadlessBackend, SurfaceOp};
pub use stats::FrameStats;
pub use window::{Window, WindowState};

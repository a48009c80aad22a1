// Copyright 2025 the Tactile Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tactile Style: pre-rendered visual styles for interactive elements.
//!
//! A [`Style`] owns a drawing routine (a [`Drawing`]) and, once rasterized, a
//! cached [`Sprite`] recorded at a fixed size. Drawing a style onto a
//! [`Surface`] replays the sprite centered on a point; the drawing routine
//! itself never runs at frame time.
//!
//! # Position in the stack
//!
//! - **Drawing routines** paint into a [`Canvas`], which records
//!   [`PaintOp`]s in local coordinates (origin at the top-left of the
//!   element, extent [`Canvas::size`]).
//! - **Sprites** are the finished recordings. They are cheap to clone and are
//!   what surfaces consume.
//! - **Surfaces** are implemented by windowing backends. They clear the frame
//!   and composite sprites; turning paint ops into pixels is their business.
//!
//! ```rust
//! use kurbo::{Point, Size};
//! use peniko::Color;
//! use tactile_style::{Canvas, Sprite, Style, Surface};
//!
//! let mut style = Style::new(|cx: &mut Canvas| {
//!     let bounds = cx.bounds();
//!     cx.fill(&bounds, Color::from_rgb8(0x20, 0x40, 0x60));
//! });
//! assert!(!style.is_rasterized());
//!
//! style.rasterize(Size::new(80.0, 24.0));
//! assert!(style.is_rasterized());
//! assert_eq!(style.sprite().map(|s| s.ops().len()), Some(1));
//!
//! #[derive(Default)]
//! struct Log(Vec<Point>);
//! impl Surface for Log {
//!     fn clear(&mut self, _color: Color) {}
//!     fn draw_sprite(&mut self, _sprite: &Sprite, origin: Point) {
//!         self.0.push(origin);
//!     }
//! }
//!
//! let mut log = Log::default();
//! style.draw(&mut log, Point::new(100.0, 100.0));
//! assert_eq!(log.0, vec![Point::new(60.0, 88.0)]);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod canvas;
mod style;

pub use canvas::{Canvas, PaintOp, Sprite};
pub use style::{Drawing, Style, drawing};

use kurbo::Point;
use peniko::Color;

/// A frame target that sprites are composited onto.
///
/// Backends implement this for their frame buffer. All coordinates are in
/// window space with the origin at the top-left corner.
pub trait Surface {
    /// Fill the whole frame with `color`.
    fn clear(&mut self, color: Color);

    /// Composite `sprite` with its top-left corner at `origin`.
    fn draw_sprite(&mut self, sprite: &Sprite, origin: Point);
}

// Copyright 2025 the Tactile Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Recording canvas and the sprites it produces.

use alloc::rc::Rc;
use alloc::vec::Vec;
use core::fmt;

use kurbo::{BezPath, Rect, Shape, Size, Stroke};
use peniko::Brush;

/// Flattening tolerance used when converting shapes to paths.
const TOLERANCE: f64 = 0.1;

/// A single recorded paint operation, in canvas-local coordinates.
#[derive(Clone, Debug)]
pub enum PaintOp {
    /// Fill the interior of a path.
    Fill {
        /// Geometry to fill.
        path: BezPath,
        /// Paint to fill with.
        brush: Brush,
    },
    /// Stroke the outline of a path.
    Stroke {
        /// Geometry to stroke.
        path: BezPath,
        /// Stroke width, joins and caps.
        style: Stroke,
        /// Paint to stroke with.
        brush: Brush,
    },
}

/// Records paint operations issued by a drawing routine.
///
/// The canvas spans `(0, 0)` to [`Canvas::size`]. Routines are expected to
/// size their content from [`Canvas::bounds`] so that the same routine can be
/// re-recorded when the element is resized.
#[derive(Debug)]
pub struct Canvas {
    size: Size,
    ops: Vec<PaintOp>,
}

impl Canvas {
    /// Create an empty canvas of the given size.
    pub fn new(size: Size) -> Self {
        Self {
            size,
            ops: Vec::new(),
        }
    }

    /// Size of the recording area.
    pub fn size(&self) -> Size {
        self.size
    }

    /// The recording area as a rectangle anchored at the origin.
    pub fn bounds(&self) -> Rect {
        self.size.to_rect()
    }

    /// Operations recorded so far.
    pub fn ops(&self) -> &[PaintOp] {
        &self.ops
    }

    /// Fill `shape` with `brush`.
    pub fn fill(&mut self, shape: &impl Shape, brush: impl Into<Brush>) {
        self.ops.push(PaintOp::Fill {
            path: shape.to_path(TOLERANCE),
            brush: brush.into(),
        });
    }

    /// Stroke the outline of `shape` with `brush`.
    pub fn stroke(&mut self, shape: &impl Shape, style: &Stroke, brush: impl Into<Brush>) {
        self.ops.push(PaintOp::Stroke {
            path: shape.to_path(TOLERANCE),
            style: style.clone(),
            brush: brush.into(),
        });
    }

    /// Finish recording and produce a sprite.
    pub fn finish(self) -> Sprite {
        Sprite {
            size: self.size,
            ops: self.ops.into(),
        }
    }
}

/// A finished, immutable recording at a fixed size.
///
/// Cloning a sprite shares its operations.
#[derive(Clone)]
pub struct Sprite {
    size: Size,
    ops: Rc<[PaintOp]>,
}

impl Sprite {
    /// Size the sprite was recorded at.
    pub fn size(&self) -> Size {
        self.size
    }

    /// The recorded operations.
    pub fn ops(&self) -> &[PaintOp] {
        &self.ops
    }

    /// Returns `true` if both sprites share the same recording.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.ops, &other.ops)
    }
}

impl fmt::Debug for Sprite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Sprite")
            .field("size", &self.size)
            .field("ops", &self.ops.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use peniko::Color;

    #[test]
    fn records_in_issue_order() {
        let mut cx = Canvas::new(Size::new(10.0, 10.0));
        let bounds = cx.bounds();
        cx.fill(&bounds, Color::WHITE);
        cx.stroke(&bounds, &Stroke::new(2.0), Color::BLACK);

        assert!(matches!(cx.ops()[0], PaintOp::Fill { .. }));
        assert!(matches!(cx.ops()[1], PaintOp::Stroke { .. }));
    }

    #[test]
    fn bounds_span_size() {
        let cx = Canvas::new(Size::new(30.0, 12.0));
        assert_eq!(cx.bounds(), Rect::new(0.0, 0.0, 30.0, 12.0));
    }

    #[test]
    fn finish_keeps_size_and_shares_ops() {
        let mut cx = Canvas::new(Size::new(4.0, 3.0));
        cx.fill(&Rect::new(0.0, 0.0, 1.0, 1.0), Color::WHITE);
        let sprite = cx.finish();
        let copy = sprite.clone();

        assert_eq!(sprite.size(), Size::new(4.0, 3.0));
        assert_eq!(sprite.ops().len(), 1);
        assert!(sprite.ptr_eq(&copy));
    }
}

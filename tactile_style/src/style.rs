// Copyright 2025 the Tactile Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A single visual variant: drawing routine plus cached sprite.

use alloc::rc::Rc;
use core::fmt;

use kurbo::{Point, Size};

use crate::{Canvas, Sprite, Surface};

/// A shared drawing routine.
///
/// Routines are reference-counted so that a handler can wrap a variant's
/// routine together with shared overlays without cloning closures.
pub type Drawing = Rc<dyn Fn(&mut Canvas)>;

/// Wrap a closure as a [`Drawing`].
pub fn drawing(f: impl Fn(&mut Canvas) + 'static) -> Drawing {
    Rc::new(f)
}

/// One visual variant of an element.
///
/// A style is inert until [rasterized](Style::rasterize): drawing an
/// unrasterized style is a no-op, as is drawing a style without a routine.
#[derive(Clone, Default)]
pub struct Style {
    drawing: Option<Drawing>,
    sprite: Option<Sprite>,
}

impl Style {
    /// Create a style from a drawing routine.
    pub fn new(f: impl Fn(&mut Canvas) + 'static) -> Self {
        Self::from_drawing(drawing(f))
    }

    /// Create a style from an already shared routine.
    pub fn from_drawing(drawing: Drawing) -> Self {
        Self {
            drawing: Some(drawing),
            sprite: None,
        }
    }

    /// The drawing routine, if any.
    pub fn drawing(&self) -> Option<&Drawing> {
        self.drawing.as_ref()
    }

    /// Replace the drawing routine.
    ///
    /// This does not invalidate an existing sprite; call
    /// [`Style::rasterize`] to re-record.
    pub fn set_drawing(&mut self, drawing: Option<Drawing>) {
        self.drawing = drawing;
    }

    /// The cached sprite, if the style has been rasterized.
    pub fn sprite(&self) -> Option<&Sprite> {
        self.sprite.as_ref()
    }

    /// Returns `true` once a sprite has been recorded.
    pub fn is_rasterized(&self) -> bool {
        self.sprite.is_some()
    }

    /// Record the drawing routine at `size`, replacing any previous sprite.
    ///
    /// A style without a routine records an empty sprite.
    pub fn rasterize(&mut self, size: Size) {
        let mut cx = Canvas::new(size);
        if let Some(drawing) = &self.drawing {
            drawing(&mut cx);
        }
        self.sprite = Some(cx.finish());
    }

    /// Composite the cached sprite centered on `center`.
    pub fn draw(&self, surface: &mut dyn Surface, center: Point) {
        if let Some(sprite) = &self.sprite {
            let origin = center - sprite.size().to_vec2() / 2.0;
            surface.draw_sprite(sprite, origin);
        }
    }
}

impl fmt::Debug for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Style")
            .field("drawing", &self.drawing.is_some())
            .field("sprite", &self.sprite)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;
    use crate::PaintOp;
    use kurbo::{Rect, Shape};
    use peniko::Color;

    #[derive(Default)]
    struct Recorder {
        origins: Vec<Point>,
    }

    impl Surface for Recorder {
        fn clear(&mut self, _color: Color) {}

        fn draw_sprite(&mut self, _sprite: &Sprite, origin: Point) {
            self.origins.push(origin);
        }
    }

    fn square() -> Style {
        Style::new(|cx| {
            let bounds = cx.bounds();
            cx.fill(&bounds, Color::WHITE);
        })
    }

    #[test]
    fn unrasterized_style_draws_nothing() {
        let style = square();
        let mut surface = Recorder::default();
        style.draw(&mut surface, Point::new(5.0, 5.0));
        assert!(surface.origins.is_empty());
    }

    #[test]
    fn rasterize_records_at_size() {
        let mut style = square();
        style.rasterize(Size::new(20.0, 10.0));
        let sprite = style.sprite().unwrap();
        assert_eq!(sprite.size(), Size::new(20.0, 10.0));
        match &sprite.ops()[0] {
            PaintOp::Fill { path, .. } => {
                assert_eq!(path.bounding_box(), Rect::new(0.0, 0.0, 20.0, 10.0));
            }
            other => panic!("unexpected op {other:?}"),
        }
    }

    #[test]
    fn rasterize_again_replaces_sprite() {
        let mut style = square();
        style.rasterize(Size::new(20.0, 10.0));
        let first = style.sprite().cloned().unwrap();
        style.rasterize(Size::new(40.0, 10.0));
        let second = style.sprite().unwrap();
        assert!(!first.ptr_eq(second));
        assert_eq!(second.size(), Size::new(40.0, 10.0));
    }

    #[test]
    fn draw_centers_sprite() {
        let mut style = square();
        style.rasterize(Size::new(20.0, 10.0));
        let mut surface = Recorder::default();
        style.draw(&mut surface, Point::new(50.0, 50.0));
        assert_eq!(surface.origins, [Point::new(40.0, 45.0)]);
    }

    #[test]
    fn empty_style_rasterizes_to_empty_sprite() {
        let mut style = Style::default();
        style.rasterize(Size::new(1.0, 1.0));
        assert!(style.is_rasterized());
        assert!(style.sprite().unwrap().ops().is_empty());
    }
}

// Copyright 2025 the Tactile Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The element contract the frame loop drives.

use kurbo::{Point, Rect};
use tactile_event::Event;
use tactile_style::Surface;

use crate::context::InteractionContext;

/// A node of the element tree.
///
/// The frame loop only talks to the root. Containers forward events, draws,
/// layout and rasterization to their children themselves; typically they
/// forward pointer events only to children that [`contain`](Element::contains)
/// the pointer, which is what makes a [`Handler`](crate::Handler) see its
/// first move as a hover-enter.
pub trait Element {
    /// React to a pointer event at `point` (window coordinates).
    fn handle(&mut self, ctx: &mut InteractionContext, event: Event, point: Point);

    /// Draw the current visual state.
    fn draw(&self, surface: &mut dyn Surface);

    /// Lay the element out inside `bounds`.
    fn fit_into(&mut self, bounds: Rect);

    /// Pre-render styles at the current size.
    fn rasterize(&mut self);

    /// Returns `true` if `point` hits the element.
    fn contains(&self, point: Point) -> bool;

    /// Anchor point used for drawing.
    fn center(&self) -> Point;
}

impl<E: Element + ?Sized> Element for alloc::boxed::Box<E> {
    fn handle(&mut self, ctx: &mut InteractionContext, event: Event, point: Point) {
        (**self).handle(ctx, event, point);
    }

    fn draw(&self, surface: &mut dyn Surface) {
        (**self).draw(surface);
    }

    fn fit_into(&mut self, bounds: Rect) {
        (**self).fit_into(bounds);
    }

    fn rasterize(&mut self) {
        (**self).rasterize();
    }

    fn contains(&self, point: Point) -> bool {
        (**self).contains(point)
    }

    fn center(&self) -> Point {
        (**self).center()
    }
}

// Copyright 2025 the Tactile Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Hover registry and focus pointer shared by all handlers of one window.
//!
//! A handler can tell when the pointer enters it, because it receives the
//! move event, but it cannot tell when the pointer leaves: the next move is
//! routed to whatever is under the pointer now. Hovered handlers therefore
//! register themselves here, and the frame loop calls
//! [`InteractionContext::reconcile`] once per pointer move to land the ones
//! the pointer has left. The scan costs O(hovered) rather than O(elements).
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::{Point, Rect};
//! use tactile_event::{Action, Button};
//! use tactile_handler::{Handler, InteractionContext};
//!
//! let mut ctx = InteractionContext::new();
//! let a = Handler::new().with_bounds(Rect::new(0.0, 0.0, 10.0, 10.0));
//!
//! a.handle(&mut ctx, Action::Move.the(Button::None), Point::new(1.0, 1.0));
//! assert_eq!(ctx.hovered_len(), 1);
//!
//! // A drag outside the bounds keeps the hover.
//! ctx.reconcile(Action::Move.the(Button::Left), Point::new(50.0, 50.0));
//! assert!(a.is_hovered());
//!
//! // A bare move outside evicts it.
//! ctx.reconcile(Action::Move.the(Button::None), Point::new(50.0, 50.0));
//! assert!(!a.is_hovered());
//! assert_eq!(ctx.hovered_len(), 0);
//! ```

use alloc::vec::Vec;

use kurbo::Point;
use tactile_event::Event;

use crate::handler::{Handler, WeakHandler};

/// Interaction state scoped to one window: which handlers are hovered and
/// which one was pressed last.
///
/// Both hold [`WeakHandler`]s; the element tree keeps handlers alive.
#[derive(Debug, Default)]
pub struct InteractionContext {
    hovered: Vec<WeakHandler>,
    focused: Option<WeakHandler>,
}

impl InteractionContext {
    /// Create an empty context.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `handler` as hovered, unless it already is.
    pub fn register(&mut self, handler: &Handler) {
        if !self.hovered.iter().any(|weak| weak.points_to(handler)) {
            self.hovered.push(handler.downgrade());
        }
    }

    /// Land every hovered handler that no longer contains `point`.
    ///
    /// Moves with a button held are drags and leave the registry untouched.
    /// Landed handlers are removed with `swap_remove`, so the order of the
    /// remaining entries is unspecified. Entries whose handler has been
    /// dropped are discarded.
    pub fn reconcile(&mut self, event: Event, point: Point) {
        if event.is_drag() {
            return;
        }
        let mut i = 0;
        while i < self.hovered.len() {
            match self.hovered[i].upgrade() {
                Some(handler) if handler.contains(point) => i += 1,
                Some(handler) => {
                    handler.land();
                    self.hovered.swap_remove(i);
                }
                None => {
                    self.hovered.swap_remove(i);
                }
            }
        }
    }

    /// Live handlers currently registered as hovered.
    pub fn hovered(&self) -> impl Iterator<Item = Handler> + '_ {
        self.hovered.iter().filter_map(WeakHandler::upgrade)
    }

    /// Number of registry entries, including any not yet pruned.
    pub fn hovered_len(&self) -> usize {
        self.hovered.len()
    }

    /// Returns `true` if `handler` is registered as hovered.
    pub fn is_hovered(&self, handler: &Handler) -> bool {
        self.hovered.iter().any(|weak| weak.points_to(handler))
    }

    /// The most recently pressed handler, if it is still alive.
    pub fn focused(&self) -> Option<Handler> {
        self.focused.as_ref().and_then(WeakHandler::upgrade)
    }

    /// Publish `handler` as the focus holder.
    ///
    /// Returns the previous holder when it is a different, live handler, so
    /// the caller can [`defocus`](crate::defocus) it.
    pub fn set_focus(&mut self, handler: &Handler) -> Option<Handler> {
        let previous = self.focused.replace(handler.downgrade());
        previous
            .and_then(|weak| weak.upgrade())
            .filter(|prev| !prev.ptr_eq(handler))
    }

    /// Move focus to `handler`, clearing selection on the previous holder.
    ///
    /// Presses only publish focus; embedders that want a single selected
    /// handler per window call this from `on_press` or after dispatch.
    pub fn focus(&mut self, handler: &Handler) {
        crate::defocus(self.set_focus(handler).as_ref());
    }

    /// Forget the focus holder, returning it if still alive.
    pub fn take_focus(&mut self) -> Option<Handler> {
        self.focused.take().and_then(|weak| weak.upgrade())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kurbo::Rect;
    use tactile_event::{Action, Button};

    fn at(x: f64) -> Handler {
        Handler::new().with_bounds(Rect::new(x, 0.0, x + 10.0, 10.0))
    }

    #[test]
    fn register_is_idempotent() {
        let mut ctx = InteractionContext::new();
        let h = at(0.0);
        ctx.register(&h);
        ctx.register(&h);
        assert_eq!(ctx.hovered_len(), 1);
        assert!(ctx.is_hovered(&h));
    }

    #[test]
    fn reconcile_checks_every_entry_after_swap_remove() {
        let mut ctx = InteractionContext::new();
        let a = at(0.0);
        let b = at(20.0);
        let c = at(40.0);
        for h in [&a, &b, &c] {
            h.handle(&mut ctx, Action::Move.the(Button::None), Point::ZERO);
        }

        // Only `c` still contains the pointer. Removing `a` swaps `c` into
        // slot 0, which must be examined too.
        ctx.reconcile(Action::Move.the(Button::None), Point::new(45.0, 5.0));

        assert!(!a.is_hovered());
        assert!(!b.is_hovered());
        assert!(c.is_hovered());
        assert_eq!(ctx.hovered_len(), 1);
        assert!(ctx.is_hovered(&c));
    }

    #[test]
    fn reconcile_runs_for_non_move_events() {
        let mut ctx = InteractionContext::new();
        let a = at(0.0);
        a.handle(&mut ctx, Action::Move.the(Button::None), Point::ZERO);
        ctx.reconcile(Action::Release.the(Button::Left), Point::new(99.0, 99.0));
        assert!(!a.is_hovered());
    }

    #[test]
    fn any_held_button_skips_reconcile() {
        let mut ctx = InteractionContext::new();
        let a = at(0.0);
        a.handle(&mut ctx, Action::Move.the(Button::None), Point::ZERO);
        for button in Button::ALL {
            ctx.reconcile(Action::Move.the(button), Point::new(99.0, 99.0));
        }
        assert!(a.is_hovered());
        assert_eq!(ctx.hovered_len(), 1);
    }

    #[test]
    fn dropped_handlers_are_pruned() {
        let mut ctx = InteractionContext::new();
        let a = at(0.0);
        ctx.register(&a);
        drop(a);
        assert_eq!(ctx.hovered().count(), 0);
        ctx.reconcile(Action::Move.the(Button::None), Point::ZERO);
        assert_eq!(ctx.hovered_len(), 0);
    }

    #[test]
    fn set_focus_returns_previous_holder() {
        let mut ctx = InteractionContext::new();
        let a = at(0.0);
        let b = at(20.0);
        assert!(ctx.set_focus(&a).is_none());
        assert!(ctx.set_focus(&a).is_none());
        let prev = ctx.set_focus(&b).unwrap();
        assert!(prev.ptr_eq(&a));
        assert!(ctx.focused().unwrap().ptr_eq(&b));
        assert!(ctx.take_focus().unwrap().ptr_eq(&b));
        assert!(ctx.focused().is_none());
    }

    #[test]
    fn focus_defocuses_previous_holder() {
        let mut ctx = InteractionContext::new();
        let a = at(0.0);
        let b = at(20.0);
        a.handle(&mut ctx, Action::Press.the(Button::Left), a.center());
        assert!(a.is_selected());

        ctx.focus(&b);
        assert!(!a.is_selected());
        assert!(ctx.focused().unwrap().ptr_eq(&b));

        // Refocusing the holder leaves it alone.
        b.handle(&mut ctx, Action::Press.the(Button::Left), b.center());
        ctx.focus(&b);
        assert!(b.is_selected());
    }

    #[test]
    fn focus_does_not_keep_handler_alive() {
        let mut ctx = InteractionContext::new();
        let a = at(0.0);
        ctx.set_focus(&a);
        drop(a);
        assert!(ctx.focused().is_none());
    }
}

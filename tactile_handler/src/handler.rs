// Copyright 2025 the Tactile Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The interactive element state machine.

use alloc::boxed::Box;
use alloc::rc::{Rc, Weak};
use core::cell::RefCell;
use core::fmt;
use core::mem;

use kurbo::{Point, Rect};
use tactile_event::{Action, Button, Event};
use tactile_style::{Drawing, Surface};

use crate::context::InteractionContext;
use crate::element::Element;
use crate::style::{HandlerStyle, StyleSlot};

bitflags::bitflags! {
    /// Interaction flags driven by pointer input.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct Interaction: u8 {
        /// The left button went down on the element and has not been released.
        const PRESSED  = 0b0000_0001;
        /// The pointer is believed to be over the element.
        const HOVERED  = 0b0000_0010;
        /// The element was the target of the most recent press it received.
        const SELECTED = 0b0000_0100;
    }
}

/// A user callback invoked on an interaction edge.
pub type Callback = Box<dyn FnMut(&Handler)>;

#[derive(Copy, Clone, Debug)]
enum Trigger {
    Press,
    Release,
    Hover,
}

#[derive(Default)]
struct Callbacks {
    on_press: Option<Callback>,
    on_release: Option<Callback>,
    on_hover: Option<Callback>,
}

impl Callbacks {
    fn slot(&mut self, trigger: Trigger) -> &mut Option<Callback> {
        match trigger {
            Trigger::Press => &mut self.on_press,
            Trigger::Release => &mut self.on_release,
            Trigger::Hover => &mut self.on_hover,
        }
    }
}

struct State {
    bounds: Rect,
    style: HandlerStyle,
    final_overlay: Option<Drawing>,
    disabled: bool,
    flags: Interaction,
    background: StyleSlot,
    foreground: Option<StyleSlot>,
    callbacks: Callbacks,
}

impl State {
    fn update(&mut self) {
        self.background = if self.flags.contains(Interaction::PRESSED) {
            StyleSlot::Active
        } else if self.flags.contains(Interaction::HOVERED) {
            StyleSlot::Hover
        } else {
            StyleSlot::Idle
        };
        self.foreground = if self.flags.contains(Interaction::SELECTED) {
            Some(StyleSlot::Focus)
        } else if self.disabled {
            Some(StyleSlot::Disabled)
        } else {
            None
        };
    }
}

/// Press, hover and focus state for one clickable element.
///
/// A `Handler` is a shared handle: clones refer to the same element state.
/// The element tree owns handlers; an [`InteractionContext`] only keeps
/// [`WeakHandler`]s, so dropping the last handle releases the element even if
/// it is still registered as hovered or focused.
///
/// Every flag change recomputes the cached [`background`](Self::background)
/// and [`foreground`](Self::foreground) slots immediately; drawing never
/// decides which variant applies.
///
/// ```rust
/// use kurbo::{Point, Rect};
/// use tactile_event::{Action, Button};
/// use tactile_handler::{Handler, InteractionContext, StyleSlot};
///
/// let mut ctx = InteractionContext::new();
/// let button = Handler::new().with_bounds(Rect::new(0.0, 0.0, 100.0, 30.0));
/// let inside = Point::new(10.0, 10.0);
///
/// button.handle(&mut ctx, Action::Move.the(Button::None), inside);
/// assert_eq!(button.background(), StyleSlot::Hover);
///
/// button.handle(&mut ctx, Action::Press.the(Button::Left), inside);
/// assert_eq!(button.background(), StyleSlot::Active);
/// assert_eq!(button.foreground(), Some(StyleSlot::Focus));
/// assert!(ctx.focused().is_some_and(|f| f.ptr_eq(&button)));
///
/// // Moving away with no button held lands the handler.
/// ctx.reconcile(Action::Move.the(Button::None), Point::new(500.0, 500.0));
/// assert_eq!(button.background(), StyleSlot::Idle);
/// ```
#[derive(Clone)]
pub struct Handler {
    state: Rc<RefCell<State>>,
}

impl Default for Handler {
    fn default() -> Self {
        Self::new()
    }
}

impl Handler {
    /// Create an enabled handler with empty bounds and no styles.
    pub fn new() -> Self {
        let mut state = State {
            bounds: Rect::ZERO,
            style: HandlerStyle::default(),
            final_overlay: None,
            disabled: false,
            flags: Interaction::empty(),
            background: StyleSlot::Idle,
            foreground: None,
            callbacks: Callbacks::default(),
        };
        state.update();
        Self {
            state: Rc::new(RefCell::new(state)),
        }
    }

    /// Builder form of [`Handler::set_bounds`].
    pub fn with_bounds(self, bounds: Rect) -> Self {
        self.set_bounds(bounds);
        self
    }

    /// Builder form of [`Handler::set_style`].
    pub fn with_style(self, style: HandlerStyle) -> Self {
        self.set_style(style);
        self
    }

    /// Builder form of [`Handler::set_final_overlay`].
    pub fn with_final_overlay(self, drawing: Drawing) -> Self {
        self.set_final_overlay(Some(drawing));
        self
    }

    /// Builder form of [`Handler::set_disabled`].
    pub fn with_disabled(self, disabled: bool) -> Self {
        self.set_disabled(disabled);
        self
    }

    /// Invoke `f` when the left button goes down on this handler.
    pub fn on_press(self, f: impl FnMut(&Self) + 'static) -> Self {
        self.state.borrow_mut().callbacks.on_press = Some(Box::new(f));
        self
    }

    /// Invoke `f` when a press on this handler is released.
    pub fn on_release(self, f: impl FnMut(&Self) + 'static) -> Self {
        self.state.borrow_mut().callbacks.on_release = Some(Box::new(f));
        self
    }

    /// Invoke `f` once each time the pointer starts hovering this handler.
    pub fn on_hover(self, f: impl FnMut(&Self) + 'static) -> Self {
        self.state.borrow_mut().callbacks.on_hover = Some(Box::new(f));
        self
    }

    /// Replace the area used for hit testing and centering.
    pub fn set_bounds(&self, bounds: Rect) {
        self.state.borrow_mut().bounds = bounds;
    }

    /// Replace the style set.
    ///
    /// Call [`Handler::rasterize`] afterwards; unrasterized variants draw
    /// nothing.
    pub fn set_style(&self, style: HandlerStyle) {
        let mut state = self.state.borrow_mut();
        state.style = style;
        state.update();
    }

    /// Replace the overlay drawn last on every finished variant.
    pub fn set_final_overlay(&self, drawing: Option<Drawing>) {
        self.state.borrow_mut().final_overlay = drawing;
    }

    /// Enable or disable input handling.
    pub fn set_disabled(&self, disabled: bool) {
        let mut state = self.state.borrow_mut();
        state.disabled = disabled;
        state.update();
    }

    /// The hit-testing area.
    pub fn bounds(&self) -> Rect {
        self.state.borrow().bounds
    }

    /// Returns `true` if `point` lies within the bounds.
    pub fn contains(&self, point: Point) -> bool {
        self.state.borrow().bounds.contains(point)
    }

    /// Center of the bounds.
    pub fn center(&self) -> Point {
        self.state.borrow().bounds.center()
    }

    /// Current interaction flags.
    pub fn interaction(&self) -> Interaction {
        self.state.borrow().flags
    }

    /// Returns `true` while the left button is held on this handler.
    pub fn is_pressed(&self) -> bool {
        self.interaction().contains(Interaction::PRESSED)
    }

    /// Returns `true` while the pointer is believed to be over this handler.
    pub fn is_hovered(&self) -> bool {
        self.interaction().contains(Interaction::HOVERED)
    }

    /// Returns `true` while this handler holds focus.
    pub fn is_selected(&self) -> bool {
        self.interaction().contains(Interaction::SELECTED)
    }

    /// Returns `true` if input is ignored.
    pub fn is_disabled(&self) -> bool {
        self.state.borrow().disabled
    }

    /// Cached background variant. Always present; idle is the fallback.
    pub fn background(&self) -> StyleSlot {
        self.state.borrow().background
    }

    /// Cached foreground variant, present only while selected or disabled.
    pub fn foreground(&self) -> Option<StyleSlot> {
        self.state.borrow().foreground
    }

    /// Returns `true` if both handles refer to the same element.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.state, &other.state)
    }

    /// Create a non-owning handle.
    pub fn downgrade(&self) -> WeakHandler {
        WeakHandler {
            state: Rc::downgrade(&self.state),
        }
    }

    /// Feed one pointer event to the state machine.
    ///
    /// A disabled handler ignores everything. Otherwise:
    ///
    /// - A left press fires `on_press`, marks the handler pressed and
    ///   selected, and publishes it as the context's focus.
    /// - A left release fires `on_release` if pressed and clears the press,
    ///   then runs the hover check below, since the pointer is still here.
    /// - Any move runs the hover check: the first one fires `on_hover` and
    ///   registers the handler with the context's hover registry.
    ///
    /// All other events are ignored.
    pub fn handle(&self, ctx: &mut InteractionContext, event: Event, _point: Point) {
        if self.is_disabled() {
            return;
        }
        if event == Action::Press.the(Button::Left) {
            self.press(ctx);
        } else if event == Action::Release.the(Button::Left) {
            self.release();
            self.hover(ctx);
        } else if event.action == Action::Move {
            self.hover(ctx);
        }
    }

    fn press(&self, ctx: &mut InteractionContext) {
        self.fire(Trigger::Press);
        {
            let mut state = self.state.borrow_mut();
            state.flags |= Interaction::PRESSED | Interaction::SELECTED;
            state.update();
        }
        ctx.set_focus(self);
    }

    fn release(&self) {
        if !self.is_pressed() {
            return;
        }
        self.fire(Trigger::Release);
        let mut state = self.state.borrow_mut();
        state.flags.remove(Interaction::PRESSED);
        state.update();
    }

    fn hover(&self, ctx: &mut InteractionContext) {
        if self.is_hovered() {
            return;
        }
        self.fire(Trigger::Hover);
        ctx.register(self);
        let mut state = self.state.borrow_mut();
        state.flags.insert(Interaction::HOVERED);
        state.update();
    }

    /// Run a callback without holding a borrow, so it may query or mutate
    /// this handler.
    fn fire(&self, trigger: Trigger) {
        let taken = self.state.borrow_mut().callbacks.slot(trigger).take();
        if let Some(mut callback) = taken {
            callback(self);
            let mut state = self.state.borrow_mut();
            let slot = state.callbacks.slot(trigger);
            // Keep a replacement installed by the callback itself.
            if slot.is_none() {
                *slot = Some(callback);
            }
        }
    }

    /// Clear press and hover; the pointer left the element.
    pub fn land(&self) {
        let mut state = self.state.borrow_mut();
        state.flags.remove(Interaction::PRESSED | Interaction::HOVERED);
        state.update();
    }

    /// Clear selection; focus moved elsewhere.
    pub fn defocus(&self) {
        let mut state = self.state.borrow_mut();
        state.flags.remove(Interaction::SELECTED);
        state.update();
    }

    /// Recompute the cached background and foreground slots.
    pub fn update(&self) {
        self.state.borrow_mut().update();
    }

    /// Finish and pre-render every style variant at the current size.
    ///
    /// Unrasterized idle, hover, active and disabled variants are first
    /// wrapped so they draw their own content, then the shared `common`
    /// overlay, then the final overlay. Call again after a resize to
    /// re-record at the new size.
    ///
    /// Drawing routines run with the style set moved out of the handler, so
    /// they may query it (they see no styles while recording).
    pub fn rasterize(&self) {
        let (mut style, overlay, size) = {
            let mut state = self.state.borrow_mut();
            (
                mem::take(&mut state.style),
                state.final_overlay.clone(),
                state.bounds.size(),
            )
        };
        style.finish(overlay.as_ref());
        style.rasterize(size);
        let mut state = self.state.borrow_mut();
        state.style = style;
        state.update();
    }

    /// Draw the cached background, then foreground, centered on the bounds.
    pub fn draw(&self, surface: &mut dyn Surface) {
        let (center, background, foreground) = {
            let state = self.state.borrow();
            let foreground = state.foreground.and_then(|slot| state.style.get(slot));
            (
                state.bounds.center(),
                state.style.get(state.background).cloned(),
                foreground.cloned(),
            )
        };
        for style in background.iter().chain(&foreground) {
            style.draw(surface, center);
        }
    }
}

/// Clear selection on `handler` if there is one.
///
/// Lets callers defocus the previous focus holder without checking whether
/// there was one.
pub fn defocus(handler: Option<&Handler>) {
    if let Some(handler) = handler {
        handler.defocus();
    }
}

impl Element for Handler {
    fn handle(&mut self, ctx: &mut InteractionContext, event: Event, point: Point) {
        Self::handle(self, ctx, event, point);
    }

    fn draw(&self, surface: &mut dyn Surface) {
        Self::draw(self, surface);
    }

    fn fit_into(&mut self, bounds: Rect) {
        self.set_bounds(bounds);
    }

    fn rasterize(&mut self) {
        Self::rasterize(self);
    }

    fn contains(&self, point: Point) -> bool {
        Self::contains(self, point)
    }

    fn center(&self) -> Point {
        Self::center(self)
    }
}

impl fmt::Debug for Handler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.state.borrow();
        f.debug_struct("Handler")
            .field("bounds", &state.bounds)
            .field("disabled", &state.disabled)
            .field("flags", &state.flags)
            .field("background", &state.background)
            .field("foreground", &state.foreground)
            .finish_non_exhaustive()
    }
}

/// A non-owning reference to a [`Handler`].
#[derive(Clone)]
pub struct WeakHandler {
    state: Weak<RefCell<State>>,
}

impl WeakHandler {
    /// Recover a handle if the element is still alive.
    pub fn upgrade(&self) -> Option<Handler> {
        self.state.upgrade().map(|state| Handler { state })
    }

    /// Returns `true` if this refers to the same element as `handler`.
    pub fn points_to(&self, handler: &Handler) -> bool {
        core::ptr::eq(self.state.as_ptr(), Rc::as_ptr(&handler.state))
    }
}

impl fmt::Debug for WeakHandler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WeakHandler")
            .field("alive", &(self.state.strong_count() > 0))
            .finish()
    }
}

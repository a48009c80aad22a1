// Copyright 2025 the Tactile Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tactile Handler: press, hover and focus state for interactive elements.
//!
//! ## Overview
//!
//! A [`Handler`] is the input-and-style state machine of one clickable
//! element. It tracks three interaction flags (pressed, hovered, selected)
//! plus a user-set disabled flag, and maps them onto the variants of a
//! [`HandlerStyle`]:
//!
//! | background | when                      |
//! |------------|---------------------------|
//! | Active     | pressed                   |
//! | Hover      | hovered, not pressed      |
//! | Idle       | otherwise                 |
//!
//! | foreground | when                      |
//! |------------|---------------------------|
//! | Focus      | selected                  |
//! | Disabled   | disabled, not selected    |
//! | none       | otherwise                 |
//!
//! The chosen slots are cached and recomputed on every flag change, so the
//! draw pass only reads them.
//!
//! ## Transitions
//!
//! [`Handler::handle`] is edge-triggered: `on_press`, `on_release` and
//! `on_hover` fire once per transition, never once per frame.
//!
//! - Left press: pressed and selected are set; the handler becomes the
//!   context's focus.
//! - Left release: pressed is cleared, then the release is also treated as a
//!   move at the same spot.
//! - Move: the first one sets hovered and registers with the hover registry.
//!
//! Hovered is only ever cleared by [`Handler::land`], which
//! [`InteractionContext::reconcile`] calls for handlers the pointer has left.
//! Selected is only ever cleared by [`Handler::defocus`].
//!
//! ## Shared state
//!
//! The hover registry and focus pointer live in an [`InteractionContext`],
//! owned by the frame loop and passed to every [`Element::handle`] call.
//! They hold [`WeakHandler`]s and never keep an element alive.
//!
//! ```rust
//! use std::cell::Cell;
//! use std::rc::Rc;
//!
//! use kurbo::{Point, Rect};
//! use tactile_event::{Action, Button};
//! use tactile_handler::{Handler, InteractionContext, defocus};
//!
//! let clicks = Rc::new(Cell::new(0));
//! let counter = clicks.clone();
//!
//! let mut ctx = InteractionContext::new();
//! let ok = Handler::new()
//!     .with_bounds(Rect::new(0.0, 0.0, 80.0, 24.0))
//!     .on_release(move |_| counter.set(counter.get() + 1));
//! let cancel = Handler::new().with_bounds(Rect::new(100.0, 0.0, 180.0, 24.0));
//!
//! let at = Point::new(10.0, 10.0);
//! ok.handle(&mut ctx, Action::Press.the(Button::Left), at);
//! ok.handle(&mut ctx, Action::Release.the(Button::Left), at);
//! assert_eq!(clicks.get(), 1);
//! assert!(ok.is_selected());
//!
//! // Pressing elsewhere hands focus over; the caller defocuses the old holder.
//! let previous = ctx.focused();
//! cancel.handle(&mut ctx, Action::Press.the(Button::Left), Point::new(110.0, 10.0));
//! defocus(previous.as_ref());
//! assert!(!ok.is_selected());
//! assert!(cancel.is_selected());
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod context;
mod element;
mod handler;
mod style;

pub use context::InteractionContext;
pub use element::Element;
pub use handler::{Callback, Handler, Interaction, WeakHandler, defocus};
pub use style::{HandlerStyle, StyleSlot};

// Copyright 2025 the Tactile Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tactile Event: the pointer event model shared by handlers and the frame loop.
//!
//! An [`Event`] pairs an [`Action`] with the [`Button`] it concerns. Scroll
//! events additionally carry a 2D delta. Events are plain `Copy` values; the
//! frame loop synthesizes them from backend state once per frame and hands them
//! to the element tree.
//!
//! ```rust
//! use tactile_event::{Action, Button, Event};
//! use kurbo::Vec2;
//!
//! let press = Action::Press.the(Button::Left);
//! assert_eq!(press, Action::Press.the(Button::Left));
//! assert_ne!(press, Action::Press.the(Button::Right));
//!
//! // A bare pointer move carries no button.
//! let hover = Action::Move.the(Button::None);
//! assert!(hover.button.is_none());
//!
//! // Scroll payload is not part of equality.
//! let a = Event::scroll(Vec2::new(0.0, 1.0));
//! let b = Event::scroll(Vec2::new(0.0, -3.0));
//! assert_eq!(a, b);
//! ```
//!
//! Equality deliberately compares only the action and button: handlers match
//! on "left press" or "left release", never on a particular scroll amount.
//! Read the `scroll` field to inspect the delta.

#![no_std]

use kurbo::Vec2;

/// What happened to the pointer.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Action {
    /// A button went down.
    Press,
    /// A button went up.
    Release,
    /// The pointer moved, possibly while a button is held.
    Move,
    /// The scroll wheel or trackpad produced a delta.
    Scroll,
}

impl Action {
    /// Build an event of this action bound to `button`.
    ///
    /// Scroll events carry a vector rather than a button; prefer
    /// [`Event::scroll`] for those.
    #[inline]
    pub const fn the(self, button: Button) -> Event {
        Event {
            action: self,
            button,
            scroll: Vec2::ZERO,
        }
    }
}

/// A pointer button, or the sentinel [`Button::None`] for "no button".
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Button {
    /// No button is involved (bare moves and scrolls).
    #[default]
    None,
    /// Primary button.
    Left,
    /// Secondary button.
    Right,
    /// Wheel button.
    Middle,
}

impl Button {
    /// The buttons tracked by the frame loop, in polling order.
    pub const ALL: [Self; 3] = [Self::Left, Self::Right, Self::Middle];

    /// Returns `true` for the [`Button::None`] sentinel.
    #[inline]
    pub const fn is_none(self) -> bool {
        matches!(self, Self::None)
    }
}

/// An immutable pointer event.
#[derive(Copy, Clone, Debug)]
pub struct Event {
    /// What happened.
    pub action: Action,
    /// Which button it happened to, or [`Button::None`].
    pub button: Button,
    /// Scroll delta; zero unless `action` is [`Action::Scroll`].
    pub scroll: Vec2,
}

impl Event {
    /// Build a scroll event carrying `delta`.
    #[inline]
    pub const fn scroll(delta: Vec2) -> Self {
        Self {
            action: Action::Scroll,
            button: Button::None,
            scroll: delta,
        }
    }

    /// Returns `true` if this event has the given action and button.
    #[inline]
    pub fn is(&self, action: Action, button: Button) -> bool {
        self.action == action && self.button == button
    }

    /// Returns `true` for a move with a button held.
    #[inline]
    pub fn is_drag(&self) -> bool {
        self.action == Action::Move && !self.button.is_none()
    }
}

impl PartialEq for Event {
    fn eq(&self, other: &Self) -> bool {
        self.action == other.action && self.button == other.button
    }
}

impl Eq for Event {}

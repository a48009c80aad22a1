// Copyright 2025 the Tactile Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The per-state style set of a handler.

use core::fmt;

use kurbo::Size;
use tactile_style::{Drawing, Style, drawing};

/// Names one variant of a [`HandlerStyle`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum StyleSlot {
    /// Resting state.
    Idle,
    /// Pointer over the element.
    Hover,
    /// Button held on the element.
    Active,
    /// Element holds focus.
    Focus,
    /// Element does not accept input.
    Disabled,
}

/// Visual variants for each interaction state, plus a shared overlay.
///
/// Background variants are `idle`, `hover` and `active`; foreground variants
/// are `focus` and `disabled`. A missing variant draws nothing.
#[derive(Clone, Default)]
pub struct HandlerStyle {
    /// Drawn when neither pressed nor hovered.
    pub idle: Option<Style>,
    /// Drawn while hovered and not pressed.
    pub hover: Option<Style>,
    /// Drawn while pressed.
    pub active: Option<Style>,
    /// Overlay drawn while selected.
    pub focus: Option<Style>,
    /// Overlay drawn while disabled and not selected.
    pub disabled: Option<Style>,
    /// Drawn on top of idle, hover, active and disabled content.
    pub common: Option<Drawing>,
}

impl HandlerStyle {
    /// The style for `slot`, if configured.
    pub fn get(&self, slot: StyleSlot) -> Option<&Style> {
        match slot {
            StyleSlot::Idle => self.idle.as_ref(),
            StyleSlot::Hover => self.hover.as_ref(),
            StyleSlot::Active => self.active.as_ref(),
            StyleSlot::Focus => self.focus.as_ref(),
            StyleSlot::Disabled => self.disabled.as_ref(),
        }
    }

    /// Layer `common` and `final_overlay` over every background variant and
    /// the disabled variant.
    ///
    /// Variants that are already rasterized were finished before and are
    /// skipped, so repeated calls never stack overlays twice. Focus is left
    /// untouched.
    pub(crate) fn finish(&mut self, final_overlay: Option<&Drawing>) {
        let variants = [
            &mut self.idle,
            &mut self.hover,
            &mut self.active,
            &mut self.disabled,
        ];
        for style in variants.into_iter().flatten() {
            if style.is_rasterized() {
                continue;
            }
            let local = style.drawing().cloned();
            let common = self.common.clone();
            let last = final_overlay.cloned();
            style.set_drawing(Some(drawing(move |cx| {
                if let Some(local) = &local {
                    local(cx);
                }
                if let Some(common) = &common {
                    common(cx);
                }
                if let Some(last) = &last {
                    last(cx);
                }
            })));
        }
    }

    /// Record every configured variant at `size`.
    pub fn rasterize(&mut self, size: Size) {
        let variants = [
            &mut self.idle,
            &mut self.hover,
            &mut self.active,
            &mut self.focus,
            &mut self.disabled,
        ];
        for style in variants.into_iter().flatten() {
            style.rasterize(size);
        }
    }
}

impl fmt::Debug for HandlerStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HandlerStyle")
            .field("idle", &self.idle)
            .field("hover", &self.hover)
            .field("active", &self.active)
            .field("focus", &self.focus)
            .field("disabled", &self.disabled)
            .field("common", &self.common.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;
    use kurbo::{Rect, Shape};
    use peniko::Color;
    use tactile_style::PaintOp;

    fn fill(x: f64) -> Style {
        Style::new(move |cx| cx.fill(&Rect::new(x, 0.0, x + 1.0, 1.0), Color::WHITE))
    }

    fn first_xs(style: &Style) -> Vec<f64> {
        style
            .sprite()
            .unwrap()
            .ops()
            .iter()
            .map(|op| match op {
                PaintOp::Fill { path, .. } | PaintOp::Stroke { path, .. } => {
                    path.bounding_box().x0
                }
            })
            .collect()
    }

    #[test]
    fn finish_layers_local_common_then_final() {
        let mut set = HandlerStyle {
            idle: Some(fill(0.0)),
            common: Some(drawing(|cx| cx.fill(&Rect::new(5.0, 0.0, 6.0, 1.0), Color::BLACK))),
            ..HandlerStyle::default()
        };
        let last = drawing(|cx| cx.fill(&Rect::new(9.0, 0.0, 10.0, 1.0), Color::BLACK));
        set.finish(Some(&last));
        set.rasterize(Size::new(10.0, 1.0));

        assert_eq!(first_xs(set.idle.as_ref().unwrap()), [0.0, 5.0, 9.0]);
    }

    #[test]
    fn finish_skips_rasterized_variants() {
        let mut set = HandlerStyle {
            idle: Some(fill(0.0)),
            common: Some(drawing(|cx| cx.fill(&Rect::new(5.0, 0.0, 6.0, 1.0), Color::BLACK))),
            ..HandlerStyle::default()
        };
        set.finish(None);
        set.rasterize(Size::new(10.0, 1.0));
        set.finish(None);
        set.rasterize(Size::new(10.0, 1.0));

        assert_eq!(first_xs(set.idle.as_ref().unwrap()), [0.0, 5.0]);
    }

    #[test]
    fn focus_is_not_finished() {
        let mut set = HandlerStyle {
            focus: Some(fill(2.0)),
            common: Some(drawing(|cx| cx.fill(&Rect::new(5.0, 0.0, 6.0, 1.0), Color::BLACK))),
            ..HandlerStyle::default()
        };
        set.finish(None);
        set.rasterize(Size::new(10.0, 1.0));

        assert_eq!(first_xs(set.focus.as_ref().unwrap()), [2.0]);
    }

    #[test]
    fn missing_variants_are_skipped() {
        let mut set = HandlerStyle::default();
        set.finish(None);
        set.rasterize(Size::new(3.0, 3.0));
        assert!(set.get(StyleSlot::Idle).is_none());
        assert!(set.get(StyleSlot::Disabled).is_none());
    }
}

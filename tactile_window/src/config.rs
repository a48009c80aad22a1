// Copyright 2025 the Tactile Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Window configuration.

use kurbo::Size;
use peniko::Color;

/// Width used when [`WindowConfig::width`] is zero.
pub const DEFAULT_WIDTH: f64 = 1280.0;
/// Height used when [`WindowConfig::height`] is zero.
pub const DEFAULT_HEIGHT: f64 = 720.0;

/// User-facing window settings.
///
/// Zero width or height falls back to [`DEFAULT_WIDTH`] / [`DEFAULT_HEIGHT`].
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct WindowConfig {
    /// Title bar text.
    pub title: String,
    /// Initial width in logical pixels.
    pub width: f64,
    /// Initial height in logical pixels.
    pub height: f64,
    /// Start maximized.
    pub fullscreen: bool,
    /// Smallest width the root is laid out at. Zero disables the limit.
    pub min_width: f64,
    /// Smallest height the root is laid out at. Zero disables the limit.
    pub min_height: f64,
    /// Sync presentation to the display refresh.
    pub vsync: bool,
    /// Let the user resize the window.
    pub resizable: bool,
    /// Frame clear color.
    #[cfg_attr(feature = "serde", serde(skip, default = "default_background"))]
    pub background: Color,
}

fn default_background() -> Color {
    Color::from_rgb8(0x1e, 0x1e, 0x1e)
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: String::from("Tactile"),
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            fullscreen: false,
            min_width: 0.0,
            min_height: 0.0,
            vsync: true,
            resizable: true,
            background: default_background(),
        }
    }
}

impl WindowConfig {
    /// Set the minimum layout size.
    pub fn set_min_size(&mut self, width: f64, height: f64) {
        self.min_width = width;
        self.min_height = height;
    }

    /// Initial size, with zero dimensions replaced by the defaults.
    pub fn initial_size(&self) -> Size {
        let width = if self.width == 0.0 {
            DEFAULT_WIDTH
        } else {
            self.width
        };
        let height = if self.height == 0.0 {
            DEFAULT_HEIGHT
        } else {
            self.height
        };
        Size::new(width, height)
    }

    /// Minimum size, if any dimension is limited.
    pub fn min_size(&self) -> Option<Size> {
        (self.min_width > 0.0 || self.min_height > 0.0)
            .then(|| Size::new(self.min_width.max(0.0), self.min_height.max(0.0)))
    }

    /// Clamp `size` to the minimum size.
    pub fn clamp(&self, size: Size) -> Size {
        Size::new(
            size.width.max(self.min_width),
            size.height.max(self.min_height),
        )
    }

    /// Describe the window a backend should create.
    pub fn descriptor(&self) -> WindowDescriptor {
        WindowDescriptor {
            title: self.title.clone(),
            size: self.initial_size(),
            min_size: self.min_size(),
            maximized: self.fullscreen,
            vsync: self.vsync,
            resizable: self.resizable,
        }
    }
}

/// What the backend is asked to create.
#[derive(Clone, Debug, PartialEq)]
pub struct WindowDescriptor {
    /// Title bar text.
    pub title: String,
    /// Initial size in logical pixels.
    pub size: Size,
    /// Minimum size the backend should allow, if it supports limits.
    pub min_size: Option<Size>,
    /// Start maximized.
    pub maximized: bool,
    /// Sync presentation to the display refresh.
    pub vsync: bool,
    /// Let the user resize the window.
    pub resizable: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_dimensions_fall_back_to_defaults() {
        let config = WindowConfig {
            width: 0.0,
            height: 0.0,
            ..WindowConfig::default()
        };
        assert_eq!(config.initial_size(), Size::new(1280.0, 720.0));

        let config = WindowConfig {
            width: 640.0,
            height: 0.0,
            ..WindowConfig::default()
        };
        assert_eq!(config.initial_size(), Size::new(640.0, 720.0));
    }

    #[test]
    fn min_size_clamps_each_axis() {
        let mut config = WindowConfig::default();
        assert_eq!(config.min_size(), None);
        assert_eq!(config.clamp(Size::new(10.0, 10.0)), Size::new(10.0, 10.0));

        config.set_min_size(300.0, 0.0);
        assert_eq!(config.min_size(), Some(Size::new(300.0, 0.0)));
        assert_eq!(config.clamp(Size::new(200.0, 50.0)), Size::new(300.0, 50.0));
    }

    #[test]
    fn descriptor_forwards_settings() {
        let mut config = WindowConfig {
            title: String::from("Four buttons"),
            fullscreen: true,
            vsync: false,
            ..WindowConfig::default()
        };
        config.set_min_size(320.0, 240.0);
        let desc = config.descriptor();
        assert_eq!(desc.title, "Four buttons");
        assert_eq!(desc.size, Size::new(1280.0, 720.0));
        assert_eq!(desc.min_size, Some(Size::new(320.0, 240.0)));
        assert!(desc.maximized);
        assert!(!desc.vsync);
        assert!(desc.resizable);
    }
}

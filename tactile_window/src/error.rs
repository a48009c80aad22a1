// Copyright 2025 the Tactile Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Frame loop errors.

use core::fmt;

/// Error produced by a backend while opening its window.
pub type BackendError = Box<dyn core::error::Error + Send + Sync>;

/// Error returned by [`Window::show`](crate::Window::show).
#[derive(Debug)]
pub enum WindowError {
    /// The backend could not create the native window.
    Create(BackendError),
    /// The window already ran to completion; a window is shown once.
    Terminated,
}

impl fmt::Display for WindowError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Create(err) => write!(f, "failed to create window: {err}"),
            Self::Terminated => f.write_str("window has already terminated"),
        }
    }
}

impl core::error::Error for WindowError {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        match self {
            Self::Create(err) => Some(&**err),
            Self::Terminated => None,
        }
    }
}

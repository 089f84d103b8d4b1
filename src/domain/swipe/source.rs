// SPDX-License-Identifier: MPL-2.0
//! Address of the image shown on a card.

use std::fmt;

/// Opaque image address supplied by the parent.
///
/// The card never validates it: whatever is given is handed to the image
/// primitive as-is, and a broken address simply renders as a broken image.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ImageSource(String);

impl ImageSource {
    pub fn new(address: impl Into<String>) -> Self {
        Self(address.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Last path segment, for status lines and logs.
    #[must_use]
    pub fn display_name(&self) -> &str {
        self.0
            .rsplit(['/', '\\'])
            .find(|segment| !segment.is_empty())
            .unwrap_or(&self.0)
    }
}

impl From<&str> for ImageSource {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for ImageSource {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl fmt::Display for ImageSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

//! Slide cursor for the homepage image carousel.
//!
//! Previous/next wrap around both ends; dot navigation jumps directly.

use serde::{Deserialize, Serialize};

/// Current slide of a fixed-length carousel.
///
/// ## Example
///
/// ```
/// use ethics_bowl::carousel::Carousel;
///
/// let mut carousel = Carousel::new(3);
/// carousel.prev();
/// assert_eq!(carousel.current(), 2);
/// carousel.next();
/// assert_eq!(carousel.current(), 0);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Carousel {
    len: usize,
    current: usize,
}

impl Carousel {
    /// Create a carousel showing slide 0.
    #[must_use]
    pub fn new(len: usize) -> Self {
        Self { len, current: 0 }
    }

    /// Number of slides.
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Check if there are no slides.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Index of the visible slide.
    #[must_use]
    pub fn current(&self) -> usize {
        self.current
    }

    /// Check if a dot should render as active.
    #[must_use]
    pub fn is_current(&self, index: usize) -> bool {
        self.current == index
    }

    /// Advance one slide, wrapping to the first.
    pub fn next(&mut self) {
        if self.len > 0 {
            self.current = (self.current + 1) % self.len;
        }
    }

    /// Go back one slide, wrapping to the last.
    pub fn prev(&mut self) {
        if self.len > 0 {
            self.current = (self.current + self.len - 1) % self.len;
        }
    }

    /// Jump to a slide. Out-of-range indices are ignored.
    ///
    /// Returns true if the slide changed.
    pub fn select(&mut self, index: usize) -> bool {
        if index >= self.len || index == self.current {
            return false;
        }
        self.current = index;
        true
    }
}

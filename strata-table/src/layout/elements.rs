//! Leaf elements that can sit in a table cell.
//!
//! `TextElement` estimates its size from monospace metrics instead of shaping,
//! which is enough to drive table layout in the demo and in tests. Metrics are
//! scaled by the font size and by the table's [`Density`] (both the density
//! and the user's font scale), so text grows with the rest of the table.

use serde::{Deserialize, Serialize};
use unicode_width::UnicodeWidthChar;

use super::constraints::LayoutConstraints;
use super::length::{Density, BASE_FONT_SIZE, CHAR_WIDTH, LINE_HEIGHT};
use super::measurable::{Measurable, Placeable};

/// Compute the display width of a string in terminal cells.
pub(crate) fn unicode_display_width(text: &str) -> f32 {
    text.chars()
        .map(|c| UnicodeWidthChar::width(c).unwrap_or(0) as f32)
        .sum()
}

/// A run of text that wraps at whitespace.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextElement {
    pub text: String,
    /// Font size in pixels. `None` means [`BASE_FONT_SIZE`].
    #[serde(default)]
    pub size: Option<f32>,
    #[serde(default)]
    pub density: Density,
}

impl TextElement {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            size: None,
            density: Density::default(),
        }
    }

    pub fn size(mut self, size: f32) -> Self {
        self.size = Some(size);
        self
    }

    pub fn density(mut self, density: Density) -> Self {
        self.density = density;
        self
    }

    /// Get the effective font size for this element.
    pub(crate) fn font_size(&self) -> f32 {
        self.size.unwrap_or(BASE_FONT_SIZE)
    }

    fn metrics(&self) -> (f32, f32) {
        let scale = self.font_size() / BASE_FONT_SIZE
            * self.density.density
            * self.density.font_scale;
        (CHAR_WIDTH * scale, LINE_HEIGHT * scale)
    }

    /// Width of the whole text on a single line.
    fn line_width(&self) -> f32 {
        let (char_width, _) = self.metrics();
        unicode_display_width(&self.text) * char_width
    }

    /// Width of the longest word.
    fn widest_word(&self) -> f32 {
        let (char_width, _) = self.metrics();
        self.text
            .split_whitespace()
            .map(unicode_display_width)
            .fold(0.0, f32::max)
            * char_width
    }

    /// Height after greedy word wrapping at `width`. Always at least one line.
    fn height_for_width(&self, width: f32) -> f32 {
        let (char_width, line_height) = self.metrics();
        if !width.is_finite() {
            return line_height;
        }

        let space = char_width;
        let mut lines = 1usize;
        let mut current = 0.0f32;
        for word in self.text.split_whitespace() {
            let word_width = unicode_display_width(word) * char_width;
            if current == 0.0 {
                current = word_width;
            } else if current + space + word_width <= width {
                current += space + word_width;
            } else {
                lines += 1;
                current = word_width;
            }
        }
        lines as f32 * line_height
    }
}

impl Measurable for TextElement {
    fn measure(&self, constraints: LayoutConstraints) -> Placeable {
        let width = self
            .line_width()
            .min(constraints.max_width)
            .max(constraints.min_width);
        let height = self
            .height_for_width(width)
            .min(constraints.max_height)
            .max(constraints.min_height);
        Placeable::new(width, height)
    }

    fn min_intrinsic_width(&self, _height: f32) -> f32 {
        self.widest_word()
    }

    fn max_intrinsic_width(&self, _height: f32) -> f32 {
        self.line_width()
    }

    fn min_intrinsic_height(&self, width: f32) -> f32 {
        self.height_for_width(width)
    }

    fn max_intrinsic_height(&self, width: f32) -> f32 {
        self.height_for_width(width)
    }
}

//! Text elements.
//!
//! Text is placed at its baseline start point (bottom-left of the first
//! line). A [`TextBlock`] holds either a single line or a list of wrapped
//! lines; wrapped lines are emitted as `<tspan>` children stacked with a
//! fixed `dy`.
//!
//! Wrapping is a character-count heuristic, see [`wrap_lines`]. No font
//! metrics are consulted, so wrapped lines differ in rendered width.

use svg::node::{Text as SvgText, element as svg_element};

use crate::{
    color::Paint,
    draw::{Drawable, SvgNode},
    geometry::{Length, Point},
};

/// Font and paint settings for a text element.
///
/// # Default Values
///
/// | Property | Default |
/// |----------|---------|
/// | Font size | `20px` |
/// | Font family | `"Arial"` |
/// | Fill | `rgb(0, 0, 0)` |
/// | Stroke | `rgb(0, 0, 0)` |
/// | Stroke width | `1.5` (pixels) |
///
/// The style serializes into a single `style` attribute:
///
/// ```
/// # use easel_core::draw::TextStyle;
/// let style = TextStyle::default();
/// assert_eq!(
///     style.to_css(),
///     "font-size: 20px; font-family: Arial; fill: rgb(0, 0, 0); \
///      stroke: rgb(0, 0, 0); stroke-width: 1.5px;"
/// );
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct TextStyle {
    font_size: Length,
    font_family: String,
    fill: Paint,
    stroke: Paint,
    stroke_width: f32,
}

impl TextStyle {
    /// Creates a new text style with default values.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_font_size(mut self, size: Length) -> Self {
        self.font_size = size;
        self
    }

    pub fn with_font_family(mut self, family: impl Into<String>) -> Self {
        self.font_family = family.into();
        self
    }

    pub fn with_fill(mut self, fill: Paint) -> Self {
        self.fill = fill;
        self
    }

    pub fn with_stroke(mut self, stroke: Paint) -> Self {
        self.stroke = stroke;
        self
    }

    /// Sets the stroke width in pixels.
    pub fn with_stroke_width(mut self, width: f32) -> Self {
        self.stroke_width = width;
        self
    }

    pub fn font_size(&self) -> Length {
        self.font_size
    }

    pub fn font_family(&self) -> &str {
        &self.font_family
    }

    pub fn fill(&self) -> &Paint {
        &self.fill
    }

    pub fn stroke(&self) -> &Paint {
        &self.stroke
    }

    pub fn stroke_width(&self) -> f32 {
        self.stroke_width
    }

    /// Returns the inline CSS written to the `style` attribute.
    pub fn to_css(&self) -> String {
        format!(
            "font-size: {}; font-family: {}; fill: {}; stroke: {}; stroke-width: {}px;",
            self.font_size, self.font_family, self.fill, self.stroke, self.stroke_width
        )
    }
}

impl Default for TextStyle {
    fn default() -> Self {
        let black = Paint::Color("rgb(0, 0, 0)".to_string());
        Self {
            font_size: Length::px(20.0),
            font_family: "Arial".to_string(),
            fill: black.clone(),
            stroke: black,
            stroke_width: 1.5,
        }
    }
}

/// Settings for [`TextBlock::wrapped`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WrapOptions {
    /// Character count after which the next space ends the line.
    pub width_limit_chars: usize,
    /// Vertical distance between consecutive baselines.
    pub line_height: f32,
}

impl WrapOptions {
    pub fn new(width_limit_chars: usize, line_height: f32) -> Self {
        Self {
            width_limit_chars,
            line_height,
        }
    }
}

impl Default for WrapOptions {
    fn default() -> Self {
        Self {
            width_limit_chars: 100,
            line_height: 20.0,
        }
    }
}

/// Splits `content` into lines by character count.
///
/// Characters are appended to the current line one at a time; once the line
/// holds at least `width_limit_chars` characters, the next space closes it.
/// Whatever remains becomes the last line. Lines are trimmed and lines left
/// empty by trimming are dropped.
///
/// # Examples
///
/// ```
/// # use easel_core::draw::wrap_lines;
/// let lines = wrap_lines("aaaaa bbbbb ccccc", 10);
/// assert_eq!(lines, vec!["aaaaa bbbbb", "ccccc"]);
/// ```
pub fn wrap_lines(content: &str, width_limit_chars: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut line = String::new();
    let mut count = 0;

    for ch in content.chars() {
        line.push(ch);
        count += 1;
        if count >= width_limit_chars && ch == ' ' {
            push_trimmed(&mut lines, &line);
            line.clear();
            count = 0;
        }
    }
    push_trimmed(&mut lines, &line);

    lines
}

fn push_trimmed(lines: &mut Vec<String>, line: &str) {
    let trimmed = line.trim();
    if !trimmed.is_empty() {
        lines.push(trimmed.to_string());
    }
}

/// A text element: one line, or several wrapped lines sharing a style.
#[derive(Debug, Clone, PartialEq)]
pub struct TextBlock {
    position: Point,
    lines: Vec<String>,
    line_height: Option<f32>,
    style: TextStyle,
}

impl TextBlock {
    /// Creates a single-line text element with its baseline starting at
    /// `position`.
    pub fn single(position: Point, content: impl Into<String>, style: TextStyle) -> Self {
        Self {
            position,
            lines: vec![content.into()],
            line_height: None,
            style,
        }
    }

    /// Creates a text element whose content is wrapped with [`wrap_lines`].
    /// The first baseline starts at `position`; each following line moves
    /// down by `wrap.line_height`.
    pub fn wrapped(position: Point, content: &str, style: TextStyle, wrap: WrapOptions) -> Self {
        Self {
            position,
            lines: wrap_lines(content, wrap.width_limit_chars),
            line_height: Some(wrap.line_height),
            style,
        }
    }

    pub fn position(&self) -> Point {
        self.position
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Returns the line spacing for wrapped text, `None` for a single line.
    pub fn line_height(&self) -> Option<f32> {
        self.line_height
    }

    pub fn style(&self) -> &TextStyle {
        &self.style
    }
}

impl Drawable for TextBlock {
    fn render_to_svg(&self) -> SvgNode {
        let Some(line_height) = self.line_height else {
            let content = self.lines.concat();
            let text = svg_element::Text::new(content)
                .set("x", self.position.x())
                .set("y", self.position.y())
                .set("style", self.style.to_css());
            return Box::new(text);
        };

        let mut text = svg_element::Text::new("")
            .set("x", self.position.x())
            .set("y", self.position.y())
            .set("style", self.style.to_css());

        for (index, line) in self.lines.iter().enumerate() {
            let dy = if index == 0 { 0.0 } else { line_height };
            let tspan = svg_element::TSpan::new("")
                .set("x", self.position.x())
                .set("dy", dy)
                .add(SvgText::new(line.as_str()));
            text = text.add(tspan);
        }

        Box::new(text)
    }
}


#[cfg(test)]
mod proptest_tests {
    use proptest::prelude::*;

    use super::*;

    fn sentence_strategy() -> impl Strategy<Value = String> {
        "[a-z]{1,8}( [a-z]{1,8}){0,20}"
    }

    /// Joining wrapped lines with single spaces restores a single-spaced input.
    fn check_wrap_preserves_words(content: &str, limit: usize) -> Result<(), TestCaseError> {
        let lines = wrap_lines(content, limit);
        prop_assert_eq!(lines.join(" "), content);
        Ok(())
    }

    /// Every line but the last reached the limit before it was closed.
    fn check_wrap_lines_reach_limit(content: &str, limit: usize) -> Result<(), TestCaseError> {
        let lines = wrap_lines(content, limit);
        if let Some((_, closed)) = lines.split_last() {
            for line in closed {
                // The closing space is trimmed away
                prop_assert!(line.chars().count() + 1 >= limit);
            }
        }
        Ok(())
    }

    proptest! {
        #[test]
        fn wrap_preserves_words(content in sentence_strategy(), limit in 1usize..30) {
            check_wrap_preserves_words(&content, limit)?;
        }

        #[test]
        fn wrap_lines_reach_limit(content in sentence_strategy(), limit in 1usize..30) {
            check_wrap_lines_reach_limit(&content, limit)?;
        }
    }
}

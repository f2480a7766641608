use alloc::string::String;

use vlist::{Color, ItemHandle, ItemView, LayoutPass, Point};

/// A text item wrapped to the list width with fixed-advance glyph metrics.
///
/// Lines break at `\n` and every `chars_per_line` characters; the height is the number of
/// wrapped lines times `line_height`, plus vertical padding.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TextRow {
    pub id: u64,
    pub text: String,
    pub char_width: f32,
    pub line_height: f32,
    pub padding: f32,
    pub color: Color,
}

impl TextRow {
    pub fn new(id: u64, text: impl Into<String>) -> Self {
        Self {
            id,
            text: text.into(),
            char_width: 8.0,
            line_height: 18.0,
            padding: 2.0,
            color: Color::rgba(0xe0, 0xe0, 0xe0, 0xff),
        }
    }

    pub fn with_metrics(mut self, char_width: f32, line_height: f32) -> Self {
        self.char_width = char_width;
        self.line_height = line_height;
        self
    }

    pub fn with_padding(mut self, padding: f32) -> Self {
        self.padding = padding;
        self
    }

    /// Characters that fit on one line at `width` (at least one).
    pub fn chars_per_line(&self, width: f32) -> usize {
        let usable = width - 2.0 * self.padding;
        if !(self.char_width > 0.0) || !(usable > 0.0) {
            return 1;
        }
        ((usable / self.char_width) as usize).max(1)
    }

    /// Number of wrapped lines at `width`.
    pub fn line_count(&self, width: f32) -> usize {
        let per_line = self.chars_per_line(width);
        self.text
            .split('\n')
            .map(|para| para.chars().count().div_ceil(per_line).max(1))
            .sum()
    }

    fn for_each_line(&self, width: f32, mut f: impl FnMut(usize, &str)) {
        let per_line = self.chars_per_line(width);
        let mut n = 0;
        for para in self.text.split('\n') {
            if para.is_empty() {
                f(n, "");
                n += 1;
                continue;
            }
            let mut start = 0;
            let mut chars = 0;
            for (at, _) in para.char_indices() {
                if chars == per_line {
                    f(n, &para[start..at]);
                    n += 1;
                    start = at;
                    chars = 0;
                }
                chars += 1;
            }
            f(n, &para[start..]);
            n += 1;
        }
    }
}

impl ItemView for TextRow {
    fn layout(&self, pass: LayoutPass<'_>, width: f32) -> f32 {
        if let LayoutPass::Paint { origin, surface } = pass {
            self.for_each_line(width, |n, line| {
                let at = Point::new(
                    origin.x + self.padding,
                    origin.y + self.padding + n as f32 * self.line_height,
                );
                surface.draw_text(at, line, self.color);
            });
        }
        self.line_count(width) as f32 * self.line_height + 2.0 * self.padding
    }

    fn handle(&self, _index: usize) -> ItemHandle {
        ItemHandle(self.id)
    }
}

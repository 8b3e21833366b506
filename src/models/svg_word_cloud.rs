use crate::models::{RenderConfig, Renderer};
use crate::types::{Label, Weight};
use crate::Error;
use log::{debug, warn};
use std::borrow::Cow;
use std::fmt::Write;

/// A label as it was placed on the canvas.
#[derive(Clone, Debug, PartialEq)]
pub struct PlacedLabel {
    pub label: Label,
    pub weight: Weight,
    pub font_size: u32,
    /// Left edge of the text.
    pub x: u32,
    /// Text baseline.
    pub y: u32,
}

/// An SVG word cloud.
#[derive(Clone, Debug)]
pub struct WordCloudImage {
    pub width: u32,
    pub height: u32,
    pub placed_labels: Vec<PlacedLabel>,
    svg: String,
}

impl WordCloudImage {
    pub fn svg(&self) -> &str {
        &self.svg
    }

    pub fn into_svg(self) -> String {
        self.svg
    }
}

/// Picks the fill colour of a placed label.
pub type ColorFunc = fn(&PlacedLabel) -> String;

/// Renders weighted labels into an SVG document using a simple row-flow layout.
///
/// Labels are placed heaviest first, left to right, wrapping to a new row when the
/// current one is full. A label that does not fit at its weighted size is shrunk one
/// step at a time until it does, and no later label is drawn larger than an earlier
/// one. Only labels that do not fit even at `min_font_size` are left out.
#[derive(Clone, Debug)]
pub struct SvgWordCloud {
    pub font_family: Cow<'static, str>,
    pub min_font_size: u32,
    /// Average glyph advance as a fraction of the font size.
    pub glyph_width_ratio: f32,
    /// Horizontal space between neighbouring labels, in pixels.
    pub spacing: u32,
    /// Per-label fill; `None` draws every label in `DEFAULT_LABEL_COLOR`.
    pub color_func: Option<ColorFunc>,
}

impl Default for SvgWordCloud {
    fn default() -> Self {
        Self {
            font_family: Cow::Borrowed("sans-serif"),
            min_font_size: 4,
            glyph_width_ratio: 0.6,
            spacing: 8,
            color_func: None,
        }
    }
}

const TITLE_FONT_SIZE: u32 = 32;

pub const DEFAULT_LABEL_COLOR: &str = "black";

/// Row-flow position of the next label.
#[derive(Clone, Copy, Debug)]
struct Cursor {
    x: u32,
    y: u32,
    row_height: u32,
}

impl SvgWordCloud {
    pub fn with_color_func(mut self, color_func: ColorFunc) -> Self {
        self.color_func = Some(color_func);
        self
    }

    /// Font size for `weight`, scaled against the heaviest weight in the same call.
    ///
    /// With `relative_scaling` at 0 every label gets `max_font_size`; at 1 the size is
    /// proportional to the weight.
    pub fn font_size(weight: Weight, max_weight: Weight, config: &RenderConfig) -> u32 {
        if max_weight <= 0.0 {
            return 0;
        }

        let scaling = config.relative_scaling.clamp(0.0, 1.0);
        let ratio = (weight / max_weight).clamp(0.0, 1.0);

        ((1.0 - scaling + scaling * ratio) * config.max_font_size as f32).round() as u32
    }

    fn text_width(&self, label: &str, font_size: u32) -> u32 {
        (label.chars().count() as f32 * font_size as f32 * self.glyph_width_ratio).ceil() as u32
    }

    /// Top-left corner for a `text_width` x `font_size` box, on the current row if it
    /// fits there and on a fresh row otherwise.
    fn fit(
        &self,
        cursor: Cursor,
        text_width: u32,
        font_size: u32,
        config: &RenderConfig,
    ) -> Option<(u32, u32)> {
        if text_width > config.width {
            return None;
        }

        let (x, y) = if cursor.x + text_width <= config.width {
            (cursor.x, cursor.y)
        } else {
            (0, cursor.y + cursor.row_height)
        };

        (y + font_size <= config.height).then_some((x, y))
    }

    fn layout(&self, weights: &[(Label, Weight)], config: &RenderConfig) -> Vec<PlacedLabel> {
        let max_weight = weights
            .iter()
            .map(|(_, weight)| *weight)
            .fold(0.0, Weight::max);

        // Heaviest first; equal weights keep their incoming order
        let mut ordered: Vec<&(Label, Weight)> = weights.iter().collect();
        ordered.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));

        let top = if config.title.is_some() {
            TITLE_FONT_SIZE * 2
        } else {
            0
        };

        let min_font_size = self.min_font_size.max(1);
        let mut placed_labels = Vec::with_capacity(ordered.len());
        let mut cursor = Cursor {
            x: 0,
            y: top,
            row_height: 0,
        };
        let mut size_cap = config.max_font_size;

        for (label, weight) in ordered {
            let mut font_size = Self::font_size(*weight, max_weight, config).min(size_cap);
            let mut position = None;

            while font_size >= min_font_size {
                let text_width = self.text_width(label, font_size);
                if let Some((x, y)) = self.fit(cursor, text_width, font_size, config) {
                    position = Some((x, y, text_width));
                    break;
                }
                font_size -= 1;
            }

            let Some((x, y, text_width)) = position else {
                debug!("Skipping {:?}: does not fit at {}px", label, min_font_size);
                continue;
            };

            if x == 0 && y != cursor.y {
                cursor.y = y;
                cursor.row_height = 0;
            }
            cursor.x = x + text_width + self.spacing;
            cursor.row_height = cursor.row_height.max(font_size);
            size_cap = font_size;

            placed_labels.push(PlacedLabel {
                label: label.clone(),
                weight: *weight,
                font_size,
                x,
                y: y + font_size,
            });
        }

        placed_labels
    }

    fn to_svg(&self, placed_labels: &[PlacedLabel], config: &RenderConfig) -> String {
        let mut svg = String::new();

        // Writing into a `String` cannot fail
        let _ = writeln!(
            svg,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#,
            w = config.width,
            h = config.height
        );
        let _ = writeln!(
            svg,
            r#"  <rect width="100%" height="100%" fill="{}"/>"#,
            escape_xml(&config.background_color)
        );

        if let Some(title) = &config.title {
            let _ = writeln!(
                svg,
                r#"  <text x="{}" y="{}" font-family="{}" font-size="{}" text-anchor="middle">{}</text>"#,
                config.width / 2,
                TITLE_FONT_SIZE + TITLE_FONT_SIZE / 2,
                escape_xml(&self.font_family),
                TITLE_FONT_SIZE,
                escape_xml(title)
            );
        }

        for placed in placed_labels {
            let _ = writeln!(
                svg,
                r#"  <text x="{}" y="{}" font-family="{}" font-size="{}" fill="{}">{}</text>"#,
                placed.x,
                placed.y,
                escape_xml(&self.font_family),
                placed.font_size,
                escape_xml(&self.label_color(placed)),
                escape_xml(&placed.label)
            );
        }

        svg.push_str("</svg>\n");
        svg
    }

    fn label_color(&self, placed: &PlacedLabel) -> Cow<'static, str> {
        match self.color_func {
            Some(color_func) => Cow::Owned(color_func(placed)),
            None => Cow::Borrowed(DEFAULT_LABEL_COLOR),
        }
    }
}

impl Renderer for SvgWordCloud {
    type Artifact = WordCloudImage;

    fn render(
        &self,
        weights: &[(Label, Weight)],
        config: &RenderConfig,
    ) -> Result<WordCloudImage, Error> {
        if config.width == 0 || config.height == 0 {
            return Err(Error::RenderError(format!(
                "Invalid canvas size {}x{}",
                config.width, config.height
            )));
        }

        if weights.is_empty() {
            return Err(Error::RenderError("No labels to render".to_string()));
        }

        let placed_labels = self.layout(weights, config);
        if placed_labels.is_empty() {
            return Err(Error::RenderError(format!(
                "None of the {} labels fit on a {}x{} canvas",
                weights.len(),
                config.width,
                config.height
            )));
        }

        if placed_labels.len() < weights.len() {
            warn!(
                "Placed {} of {} labels; the rest do not fit on a {}x{} canvas",
                placed_labels.len(),
                weights.len(),
                config.width,
                config.height
            );
        } else {
            debug!("Placed all {} labels", placed_labels.len());
        }

        let svg = self.to_svg(&placed_labels, config);

        Ok(WordCloudImage {
            width: config.width,
            height: config.height,
            placed_labels,
            svg,
        })
    }
}

fn escape_xml(text: &str) -> Cow<'_, str> {
    if !text.contains(['&', '<', '>', '"', '\'']) {
        return Cow::Borrowed(text);
    }

    let mut escaped = String::with_capacity(text.len() + 8);
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            _ => escaped.push(c),
        }
    }
    Cow::Owned(escaped)
}

use std::borrow::Cow;

/// Controls where the export is read from and which field is tabulated.
#[derive(Clone, Debug, PartialEq)]
pub struct PipelineConfig {
    /// Path or resource name handed to the `CorpusSource`.
    pub source_path: Cow<'static, str>,
    /// Line prefix that starts each record.
    pub record_marker: Cow<'static, str>,
    /// Line prefix of the field whose values are counted.
    pub field_tag: Cow<'static, str>,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        crate::DEFAULT_PIPELINE_CONFIG.clone()
    }
}

/// Pass-through settings for a `Renderer`.
#[derive(Clone, Debug, PartialEq)]
pub struct RenderConfig {
    /// Canvas width in pixels.
    pub width: u32,
    /// Canvas height in pixels.
    pub height: u32,
    pub background_color: Cow<'static, str>,
    /// Upper bound on the rendered size of the heaviest label.
    pub max_font_size: u32,
    /// How strongly weight differences show up as size differences. `0.0` renders all
    /// labels at the same size; `1.0` makes size proportional to weight.
    pub relative_scaling: f32,
    pub title: Option<Cow<'static, str>>,
}

impl Default for RenderConfig {
    fn default() -> Self {
        crate::DEFAULT_RENDER_CONFIG.clone()
    }
}

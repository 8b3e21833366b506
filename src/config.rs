use crate::constants::{RECORD_START_MARKER, SOURCE_TAG};
use crate::models::{PipelineConfig, RenderConfig};
use std::borrow::Cow;

pub const DEFAULT_PIPELINE_CONFIG: &PipelineConfig = &PipelineConfig {
    source_path: Cow::Borrowed("main.txt"),
    record_marker: Cow::Borrowed(RECORD_START_MARKER),
    field_tag: Cow::Borrowed(SOURCE_TAG),
};

pub const DEFAULT_RENDER_CONFIG: &RenderConfig = &RenderConfig {
    width: 1600,
    height: 1000,
    background_color: Cow::Borrowed("mintcream"),
    max_font_size: 300,
    relative_scaling: 0.5,
    title: None,
};

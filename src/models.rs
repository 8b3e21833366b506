pub mod config;
pub use config::{PipelineConfig, RenderConfig};

pub mod corpus_source;
pub use corpus_source::{CorpusSource, FileSource, MemorySource};

pub mod error;
pub use error::Error;

pub mod frequency_table;
pub use frequency_table::FrequencyTable;

pub mod renderer;
pub use renderer::Renderer;

pub mod svg_word_cloud;
pub use svg_word_cloud::{
    ColorFunc, PlacedLabel, SvgWordCloud, WordCloudImage, DEFAULT_LABEL_COLOR,
};

pub mod word_cloud_outcome;
pub use word_cloud_outcome::WordCloudOutcome;

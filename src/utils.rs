pub mod count_by;
pub use count_by::count_by;

pub mod count_frequencies;
pub use count_frequencies::count_frequencies;

pub mod decode_corpus;
pub use decode_corpus::decode_corpus;

pub mod extract_field;
pub use extract_field::{
    extract_field, extract_publication_year, extract_publisher, extract_source,
};

pub mod sort_results;
pub use sort_results::sort_results;

pub mod split_records;
pub use split_records::split_records;

pub mod to_weights;
pub use to_weights::to_weights;

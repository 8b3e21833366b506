/// Line prefix that opens every record in a tagged export.
pub const RECORD_START_MARKER: &str = "PT ";

/// Source (journal) name.
pub const SOURCE_TAG: &str = "SO ";

/// Publication year.
pub const PUBLICATION_YEAR_TAG: &str = "PY ";

/// Publisher name.
pub const PUBLISHER_TAG: &str = "PU ";

/// Exports saved from the web interface begin with a UTF-8 byte-order mark.
pub const BYTE_ORDER_MARK: char = '\u{FEFF}';

pub const GZIP_MAGIC_BYTES: [u8; 2] = [0x1f, 0x8b];

// Types listed here are either shared across multiple files and/or exposed via the library.

/// The entire contents of an export file, decoded to text. Created once per run and
/// discarded after splitting.
pub type RawCorpus = String;

/// One bibliographic entry, starting at its record-start marker line and running up to
/// (but excluding) the next marker line or the end of the corpus.
pub type Record = String;

/// A fixed-width line prefix identifying a record attribute (e.g. `"SO "`).
pub type FieldTag = str;

/// The value of a tagged field within a single record, or `None` when the tag is absent.
pub type FieldValue = Option<String>;

/// A categorical value being counted (journal name, publisher, etc.).
pub type Label = String;

/// The number of occurrences of a label.
pub type Frequency = usize;

/// Label weights as handed to a `Renderer`.
pub type Weight = f32;

/// Frequency table entries ordered by descending count. Entries with equal counts
/// keep the order in which their keys were first encountered.
pub type RankedTable<K = Label> = Vec<(K, Frequency)>;

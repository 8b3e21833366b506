use crate::types::RankedTable;

/// Result of a full run.
#[derive(Debug)]
pub struct WordCloudOutcome<A> {
    /// Number of records found in the export.
    pub record_count: usize,
    pub ranked_table: RankedTable,
    /// `None` when there was nothing to render; the renderer was not called.
    pub artifact: Option<A>,
}

impl<A> WordCloudOutcome<A> {
    pub fn has_data(&self) -> bool {
        self.artifact.is_some()
    }
}

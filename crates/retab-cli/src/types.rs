use std::path::PathBuf;

use retab_model::ProcessedDataset;

#[derive(Debug)]
pub struct ProcessResult {
    pub template: String,
    pub input: PathBuf,
    /// Where the output was written; `None` on a dry run.
    pub output: Option<PathBuf>,
    pub rows_in: usize,
    pub dataset: ProcessedDataset,
}

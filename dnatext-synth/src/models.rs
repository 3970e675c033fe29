use serde::{Deserialize, Serialize};

/// A maximal run of a single base.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Homopolymer {
    /// The run itself, e.g. `AAAAAA`
    pub sequence: String,
    /// 0-based start of the run
    pub position: usize,
}

/// An exact substring found again later in the sequence.
///
/// `positions[0]` is where the pattern starts and `positions[1]` is the
/// first later position where it occurs again.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Repeat {
    pub pattern: String,
    pub positions: [usize; 2],
}

///
/// Everything computed for one sequence: the raw metrics and the
/// guideline issues derived from them.
///
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisReport {
    /// Sequence length in bp
    pub length: usize,
    /// GC content, in percent
    pub gc_content: f64,
    /// Max minus min windowed GC content, in percent
    pub gc_variation: f64,
    pub homopolymers: Vec<Homopolymer>,
    pub repeats: Vec<Repeat>,
    /// Human-readable guideline violations, empty when all checks pass
    pub issues: Vec<String>,
}

impl AnalysisReport {
    pub fn passes(&self) -> bool {
        self.issues.is_empty()
    }
}

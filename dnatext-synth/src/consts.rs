/// Minimum sequence length, in bp, accepted for synthesis.
pub const DEFAULT_MIN_LENGTH: usize = 300;
/// Lower bound of the recommended GC content, in percent.
pub const DEFAULT_GC_MIN: f64 = 25.0;
/// Upper bound of the recommended GC content, in percent.
pub const DEFAULT_GC_MAX: f64 = 65.0;
/// Largest accepted difference between the most and least GC-rich window, in percent.
pub const DEFAULT_MAX_GC_VARIATION: f64 = 52.0;
/// Window size, in bp, for GC variation.
pub const DEFAULT_GC_WINDOW: usize = 50;
/// Shortest exact repeat that is reported.
pub const DEFAULT_REPEAT_MIN_LENGTH: usize = 20;
/// Shortest single-base run that is reported.
pub const DEFAULT_HOMOPOLYMER_MIN_LENGTH: usize = 5;
/// Number of homopolymers listed individually in the issue list.
pub const DEFAULT_MAX_HOMOPOLYMER_EXAMPLES: usize = 3;

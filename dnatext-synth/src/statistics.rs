//! Sequence statistics used to judge synthesizability
//!
//! GC content, windowed GC variation, homopolymer runs and exact repeats.
//! All functions are pure and work on the raw bytes of the sequence, so
//! positions are byte offsets (identical to base offsets for DNA).
//!

use fxhash::FxHashMap;

use dnatext_core::models::{Base, DnaSequence};

use crate::models::{Homopolymer, Repeat};

/// Trait for computing synthesis-relevant statistics of a DNA sequence.
pub trait SequenceStatistics {
    /// Percentage of bases that are G or C. Zero for an empty sequence.
    fn gc_content(&self) -> f64;

    /// Difference between the highest and lowest GC content across every
    /// window of `window` bases (stride 1). Zero when the sequence is
    /// shorter than one window.
    fn gc_variation(&self, window: usize) -> f64;

    /// Maximal single-base runs of at least `min_length`, grouped by base
    /// in the order A, C, G, T and by position within each group.
    fn homopolymers(&self, min_length: usize) -> Vec<Homopolymer>;

    /// For every start position, the first later occurrence of the
    /// `min_length`-long substring starting there.
    fn repeats(&self, min_length: usize) -> Vec<Repeat>;
}

impl SequenceStatistics for str {
    fn gc_content(&self) -> f64 {
        calc_gc_content(self)
    }

    fn gc_variation(&self, window: usize) -> f64 {
        calc_gc_variation(self, window)
    }

    fn homopolymers(&self, min_length: usize) -> Vec<Homopolymer> {
        find_homopolymers(self, min_length)
    }

    fn repeats(&self, min_length: usize) -> Vec<Repeat> {
        find_repeats(self, min_length)
    }
}

impl SequenceStatistics for DnaSequence {
    fn gc_content(&self) -> f64 {
        calc_gc_content(self.as_str())
    }

    fn gc_variation(&self, window: usize) -> f64 {
        calc_gc_variation(self.as_str(), window)
    }

    fn homopolymers(&self, min_length: usize) -> Vec<Homopolymer> {
        find_homopolymers(self.as_str(), min_length)
    }

    fn repeats(&self, min_length: usize) -> Vec<Repeat> {
        find_repeats(self.as_str(), min_length)
    }
}

#[inline]
fn is_gc(byte: u8) -> bool {
    matches!(byte, b'G' | b'C')
}

#[inline]
fn percent(count: usize, total: usize) -> f64 {
    (count as f64 / total as f64) * 100.0
}

///
/// Calculate GC content of a sequence, in percent.
///
pub fn calc_gc_content(dna: &str) -> f64 {
    if dna.is_empty() {
        return 0.0;
    }
    let gc_count = dna.bytes().filter(|&b| is_gc(b)).count();
    percent(gc_count, dna.len())
}

///
/// Calculate the spread of GC content across sliding windows.
///
/// Keeps a running G/C count that is updated as the window slides one
/// base at a time, which gives the same values as recounting every window.
///
pub fn calc_gc_variation(dna: &str, window: usize) -> f64 {
    let bytes = dna.as_bytes();
    if window == 0 || bytes.len() < window {
        return 0.0;
    }

    let mut gc_count = bytes[..window].iter().filter(|&&b| is_gc(b)).count();
    let mut min_count = gc_count;
    let mut max_count = gc_count;

    for end in window..bytes.len() {
        if is_gc(bytes[end]) {
            gc_count += 1;
        }
        if is_gc(bytes[end - window]) {
            gc_count -= 1;
        }
        min_count = min_count.min(gc_count);
        max_count = max_count.max(gc_count);
    }

    percent(max_count, window) - percent(min_count, window)
}

///
/// Find homopolymers (runs of the same base) of at least `min_length`.
///
/// Runs are maximal: a run of six `A`s is reported once, never as two
/// overlapping runs of five. A `min_length` of 0 behaves like 1.
///
pub fn find_homopolymers(dna: &str, min_length: usize) -> Vec<Homopolymer> {
    let bytes = dna.as_bytes();
    let min_length = min_length.max(1);
    let mut homopolymers = Vec::new();

    for base in Base::ALL {
        let target = base.as_byte();
        let mut i = 0;
        while i < bytes.len() {
            if bytes[i] != target {
                i += 1;
                continue;
            }
            let start = i;
            while i < bytes.len() && bytes[i] == target {
                i += 1;
            }
            if i - start >= min_length {
                homopolymers.push(Homopolymer {
                    // the run is pure ASCII, so both ends are char boundaries
                    sequence: dna[start..i].to_string(),
                    position: start,
                });
            }
        }
    }

    homopolymers
}

///
/// Find exact repeats of length `min_length`.
///
/// For each start `i` (in increasing order) the substring
/// `dna[i..i + min_length]` is looked up again at positions `j > i`; the
/// first such `j` is recorded as `positions: [i, j]` and later occurrences
/// are left to the entry for `j`. A k-mer index built right to left gives
/// every position its next occurrence in one pass, which matches a
/// left-to-right scan of all later positions exactly.
///
pub fn find_repeats(dna: &str, min_length: usize) -> Vec<Repeat> {
    let bytes = dna.as_bytes();
    if min_length == 0 || bytes.len() < min_length {
        return Vec::new();
    }

    let n_kmers = bytes.len() - min_length + 1;
    let mut next_occurrence: Vec<Option<usize>> = vec![None; n_kmers];
    let mut last_seen: FxHashMap<&[u8], usize> = FxHashMap::default();

    for i in (0..n_kmers).rev() {
        let kmer = &bytes[i..i + min_length];
        next_occurrence[i] = last_seen.insert(kmer, i);
    }

    next_occurrence
        .into_iter()
        .enumerate()
        .filter_map(|(i, next)| {
            next.map(|j| Repeat {
                pattern: String::from_utf8_lossy(&bytes[i..i + min_length]).into_owned(),
                positions: [i, j],
            })
        })
        .collect()
}

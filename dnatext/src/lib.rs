//! Text ↔ DNA ↔ protein encoding with synthesis-guideline analysis.
//!
//! Each part lives in its own crate and is re-exported here behind a
//! feature of the same name:
//!
//! - `core`: validated `DnaSequence` and input helpers
//! - `codec`: text/bits/DNA conversion and translation
//! - `synth`: GC content, repeats, homopolymers and guideline checks

#[cfg(feature = "core")]
#[doc(inline)]
pub use dnatext_core as core;

#[cfg(feature = "codec")]
#[doc(inline)]
pub use dnatext_codec as codec;

#[cfg(feature = "synth")]
#[doc(inline)]
pub use dnatext_synth as synth;

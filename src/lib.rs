//! sanitext cures adversarially-obfuscated Unicode into a canonical,
//! comparable form and runs fuzzy matching, censoring and replacement
//! against the *original* text.
//!
//! Curing resolves what a reader sees: right-to-left runs are reordered,
//! homoglyphs (`乇`, `𝔽`, `Ⓐ`, `н`), fullwidth forms, enclosed
//! alphanumerics, emoji-spelled letters and zalgo decoration are all
//! flattened to plain lowercase ASCII where a lookalike exists. Every
//! canonical unit remembers the byte range of the original codepoint it
//! came from, so matches land on the obfuscated bytes:
//!
//! ```
//! use sanitext::{cure, Options};
//!
//! let mut cured = cure("vＥⓡ𝔂 𝔽𝕌Ňℕｙ ţ乇𝕏𝓣", Options::default())?;
//! assert!(cured.equals("very funny text"));
//! assert!(cured.contains("funny"));
//!
//! cured.censor("funny", '*')?;
//! assert_eq!(cured.render(), "vＥⓡ𝔂 ***** ţ乇𝕏𝓣");
//! # Ok::<(), sanitext::CureError>(())
//! ```

pub mod options;
pub mod unicode;

mod bidi;
mod cure;
mod cured;
mod matcher;
mod table;

pub use bidi::BidiError;
pub use cure::{CureError, cure, cure_bytes};
pub use cured::{CanonicalForm, CuredText, Match};
pub use options::Options;
pub use unicode::Category;

#[cfg(test)]
mod tests {
    include!("tests/unit.rs");
    include!("tests/integration.rs");
    include!("tests/proptest.rs");
}

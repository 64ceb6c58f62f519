//! Kamasutra substitution cipher for the Russian alphabet.
//!
//! The Kamasutra cipher splits an alphabet into two halves and pairs the
//! letters of the first half with the letters of the second half in reverse
//! order. Each letter is replaced by its partner; characters outside the
//! alphabet pass through unchanged. Because every pair works in both
//! directions, the same transform both encrypts and decrypts.
//!
//! This crate implements the cipher over the 33-letter Russian alphabet
//! (including Ё/ё). The odd alphabet length leaves exactly one letter of the
//! second half unpaired (П), which maps to itself.
//!
//! # Architecture
//!
//! ```text
//! alphabet          (fixed 33-letter uppercase alphabet, lowercase derivation)
//!     ↓
//! SubstitutionTable (mirrored pairwise mapping — 66 entries, one fixed point)
//!     ↓
//! KamasutraCipher   (transform engine: encrypt/decrypt + permutation views)
//! ```
//!
//! # Examples
//!
//! Encrypt and decrypt a line of text:
//!
//! ```
//! use kamasutra::KamasutraCipher;
//!
//! let cipher = KamasutraCipher::new();
//!
//! let secret = cipher.encrypt("Привет, Мир! 123");
//! assert_eq!(secret, "Поцэъм, Тцо! 123");
//!
//! assert_eq!(cipher.decrypt(&secret), "Привет, Мир! 123");
//! ```
//!
//! Work with the table directly:
//!
//! ```
//! use kamasutra::{transform, SubstitutionTable};
//!
//! let table = SubstitutionTable::new();
//! assert_eq!(table.lookup('А'), Some('Я'));
//! assert_eq!(transform(&table, "Ёлка"), "Щуфя");
//! ```

#![deny(clippy::all)]

pub mod error;

pub mod alphabet;
pub mod cipher;
pub mod mode;
pub mod table;

pub use cipher::{transform, KamasutraCipher};
pub use mode::Mode;
pub use table::SubstitutionTable;

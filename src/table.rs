//! SubstitutionTable: pairwise mirrored letter mapping.
//!
//! Builds the substitution at the heart of the cipher: the alphabet is split
//! into a first half of `floor(n/2)` letters and a second half holding the
//! rest, and letter `i` of the first half is paired with letter
//! `second_len - 1 - i` of the second half. With the 33-letter Russian
//! alphabet the second half is one letter longer, so its middle letter (П)
//! stays unpaired and maps to itself. Lowercase pairs are derived from the
//! uppercase pairs, giving 66 entries total.
//!
//! The resulting mapping is an involution: applying it twice to any covered
//! character returns the original character.

use std::collections::HashMap;

use crate::alphabet::{self, RU_UPPER};

/// Involutive character substitution over the Russian alphabet.
///
/// Covers every alphabet letter in both cases (66 entries) and nothing else.
/// Built once and never mutated; safe to share by reference across callers.
#[derive(Debug, Clone)]
pub struct SubstitutionTable {
    map: HashMap<char, char>,
    fixed_point: Option<char>,
}

impl SubstitutionTable {
    /// Builds the table for the fixed 33-letter Russian alphabet.
    ///
    /// # Returns
    /// A table pairing А↔Я, Б↔Ю, В↔Э, … О↔Р with П mapped to itself,
    /// plus the corresponding lowercase pairs.
    ///
    /// # Examples
    ///
    /// ```
    /// use kamasutra::SubstitutionTable;
    ///
    /// let table = SubstitutionTable::new();
    /// assert_eq!(table.len(), 66);
    /// assert_eq!(table.lookup('Б'), Some('Ю'));
    /// assert_eq!(table.lookup('п'), Some('п'));
    /// assert_eq!(table.lookup('z'), None);
    /// ```
    pub fn new() -> Self {
        Self::from_alphabet(RU_UPPER)
    }

    /// Builds a table over an arbitrary uppercase alphabet.
    ///
    /// Splits the alphabet into `floor(n/2)` letters and the rest, pairs the
    /// halves in mirrored order, and self-maps the leftover middle letter of
    /// the second half when the split is odd. An even split produces no
    /// fixed point.
    ///
    /// # Parameters
    /// - `upper`: Uppercase alphabet with distinct letters.
    pub(crate) fn from_alphabet(upper: &str) -> Self {
        let letters: Vec<char> = upper.chars().collect();
        let half = letters.len() / 2;
        let (first, second) = letters.split_at(half);

        let mut map = HashMap::with_capacity(letters.len() * 2);

        // Mirrored pairing: first[i] <-> second[second_len - 1 - i]
        for (i, &a) in first.iter().enumerate() {
            let b = second[second.len() - 1 - i];
            map.insert(a, b);
            map.insert(b, a);
        }

        // The odd split leaves one middle letter of the second half unpaired.
        let mut fixed_point = None;
        if second.len() > first.len() {
            let leftover = second[second.len() - 1 - first.len()];
            map.insert(leftover, leftover);
            fixed_point = Some(leftover);
        }

        // Derive lowercase pairs from the uppercase pairs.
        let upper_pairs: Vec<(char, char)> = map.iter().map(|(&a, &b)| (a, b)).collect();
        for (a, b) in upper_pairs {
            map.insert(alphabet::to_lower(a), alphabet::to_lower(b));
        }

        let table = SubstitutionTable { map, fixed_point };
        table.debug_verify(upper);
        table
    }

    /// Verifies the involution and coverage invariants in debug builds.
    ///
    /// Every entry must map back to its source when applied twice, and no
    /// entry may exist for a character outside the alphabet (either case).
    fn debug_verify(&self, upper: &str) {
        debug_assert_eq!(self.map.len(), upper.chars().count() * 2);
        for (&from, &to) in &self.map {
            debug_assert_eq!(
                self.map.get(&to).copied(),
                Some(from),
                "table is not an involution at {from} -> {to}"
            );
            debug_assert!(
                upper.contains(from) || upper.chars().any(|c| alphabet::to_lower(c) == from),
                "table covers {from}, which is outside the alphabet"
            );
        }
    }

    /// Returns the table image of `c`, or `None` if `c` is not covered.
    ///
    /// # Parameters
    /// - `c`: Any character.
    pub fn lookup(&self, c: char) -> Option<char> {
        self.map.get(&c).copied()
    }

    /// Returns the number of entries in the table (66 for the full alphabet).
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Returns `true` if the table has no entries.
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Returns the uppercase letter mapped to itself, if the split left one.
    pub fn fixed_point(&self) -> Option<char> {
        self.fixed_point
    }
}

impl Default for SubstitutionTable {
    fn default() -> Self {
        Self::new()
    }
}

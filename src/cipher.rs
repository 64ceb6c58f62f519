//! KamasutraCipher: the transform engine.
//!
//! Applies a [`SubstitutionTable`] to text character by character. Each
//! character is looked up independently, so the transform preserves order and
//! length, needs no cross-character context, and is exactly self-inverse:
//! covered characters swap within their pair and everything else is left
//! untouched. Encryption and decryption are the same operation; only the
//! caller's label differs.

use crate::alphabet::{self, RU_UPPER};
use crate::table::SubstitutionTable;

/// Replaces every character covered by `table` with its image, passing all
/// other characters (punctuation, digits, whitespace, foreign letters)
/// through unchanged.
///
/// Total over any input: there is no invalid text and no error path.
///
/// # Parameters
/// - `table`: The substitution to apply.
/// - `input`: Arbitrary text.
///
/// # Returns
/// A fresh string with the same number of characters as `input`.
///
/// # Examples
///
/// ```
/// use kamasutra::{transform, SubstitutionTable};
///
/// let table = SubstitutionTable::new();
/// let once = transform(&table, "Мир 2024");
/// let twice = transform(&table, &once);
/// assert_eq!(twice, "Мир 2024");
/// ```
pub fn transform(table: &SubstitutionTable, input: &str) -> String {
    input.chars().map(|c| table.lookup(c).unwrap_or(c)).collect()
}

/// Kamasutra cipher over the fixed Russian alphabet.
///
/// Owns the substitution table and precomputed permutation views of both
/// alphabet cases. Immutable after construction; all operations take `&self`
/// and may run concurrently without coordination.
pub struct KamasutraCipher {
    table: SubstitutionTable,
    perm_upper: String,
    perm_lower: String,
}

impl KamasutraCipher {
    /// Creates the cipher, building the table and both permutation views.
    ///
    /// # Examples
    ///
    /// ```
    /// use kamasutra::KamasutraCipher;
    ///
    /// let cipher = KamasutraCipher::new();
    /// assert_eq!(cipher.encrypt("Я"), "А");
    /// ```
    pub fn new() -> Self {
        let table = SubstitutionTable::new();
        let perm_upper = transform(&table, RU_UPPER);
        let perm_lower = transform(&table, &alphabet::lower_alphabet());
        KamasutraCipher {
            table,
            perm_upper,
            perm_lower,
        }
    }

    /// Encrypts `text`. Identical to [`decrypt`](Self::decrypt) — the table
    /// is an involution.
    pub fn encrypt(&self, text: &str) -> String {
        self.transform(text)
    }

    /// Decrypts `text`. Identical to [`encrypt`](Self::encrypt) — the table
    /// is an involution.
    pub fn decrypt(&self, text: &str) -> String {
        self.transform(text)
    }

    /// Applies the substitution to `text`.
    pub fn transform(&self, text: &str) -> String {
        transform(&self.table, text)
    }

    /// Borrows the underlying substitution table.
    pub fn table(&self) -> &SubstitutionTable {
        &self.table
    }

    /// Returns the image of the uppercase alphabet under the table,
    /// in alphabet order.
    pub fn perm_upper(&self) -> &str {
        &self.perm_upper
    }

    /// Returns the image of the lowercase alphabet under the table,
    /// in alphabet order.
    pub fn perm_lower(&self) -> &str {
        &self.perm_lower
    }
}

impl Default for KamasutraCipher {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encrypt_decrypt_roundtrip() {
        let cipher = KamasutraCipher::new();
        let original = "Съешь же ещё этих мягких французских булок";
        let secret = cipher.encrypt(original);
        assert_ne!(secret, original);
        assert_eq!(cipher.decrypt(&secret), original);
    }

    #[test]
    fn test_encrypt_and_decrypt_are_identical() {
        let cipher = KamasutraCipher::new();
        let text = "Привет, Мир! 123";
        assert_eq!(cipher.encrypt(text), cipher.decrypt(text));
    }

    #[test]
    fn test_transform_leaves_foreign_characters() {
        let cipher = KamasutraCipher::new();
        assert_eq!(cipher.transform("abc XYZ 0-9; ä 中"), "abc XYZ 0-9; ä 中");
    }

    #[test]
    fn test_transform_empty_string() {
        let cipher = KamasutraCipher::new();
        assert_eq!(cipher.transform(""), "");
    }

    #[test]
    fn test_transform_preserves_char_count() {
        let cipher = KamasutraCipher::new();
        for text in ["", "П", "Привет, Мир! 123", "mixed Текст 42\n"] {
            let result = cipher.transform(text);
            assert_eq!(result.chars().count(), text.chars().count());
        }
    }

    #[test]
    fn test_perm_views_are_alphabet_images() {
        let cipher = KamasutraCipher::new();
        assert_eq!(cipher.perm_upper().chars().count(), 33);
        assert_eq!(cipher.perm_lower().chars().count(), 33);
        // Mirrored pairing with a central fixed point reads as the reversed
        // alphabet.
        assert_eq!(cipher.perm_upper(), "ЯЮЭЬЫЪЩШЧЦХФУТСРПОНМЛКЙИЗЖЁЕДГВБА");
        assert_eq!(cipher.perm_lower(), "яюэьыъщшчцхфутсрпонмлкйизжёедгвба");
    }

    #[test]
    fn test_perm_views_invert_to_source_alphabets() {
        let cipher = KamasutraCipher::new();
        assert_eq!(cipher.transform(cipher.perm_upper()), RU_UPPER);
        assert_eq!(
            cipher.transform(cipher.perm_lower()),
            alphabet::lower_alphabet()
        );
    }

    #[test]
    fn test_table_borrow_matches_cipher_output() {
        let cipher = KamasutraCipher::new();
        let via_table = transform(cipher.table(), "Мир");
        assert_eq!(via_table, cipher.transform("Мир"));
    }
}

use alloc::string::String;

use crate::{CipherError, Extended, GenericCipher, KeyAdvance, Latin, VigenereKey};

/// The classic 26 letter Vigenère cipher.
///
/// ASCII letters are upper-cased and shifted, the key only advances on letters and every
/// other character is copied as is. This is the cipher the Kasiski estimator targets
pub struct SimpleVigenere {
    key: VigenereKey,
}

impl SimpleVigenere {
    pub fn new(key: &str) -> Result<Self, CipherError> {
        Ok(Self {
            key: VigenereKey::latin(key)?,
        })
    }

    fn cipher(&self) -> GenericCipher<'_, Latin> {
        GenericCipher::new(&self.key, KeyAdvance::Symbols)
    }

    pub fn key(&self) -> &VigenereKey {
        &self.key
    }

    pub fn encode(&self, plaintext: &str) -> String {
        self.cipher().encode(plaintext)
    }

    pub fn decode(&self, ciphertext: &str) -> String {
        self.cipher().decode(ciphertext)
    }
}

/// Vigenère over the 124 symbol [`Extended`] alphabet.
///
/// Case is preserved, and the key advances on every input character, so characters
/// outside the alphabet still use up a key position
pub struct ExtendedVigenere {
    key: VigenereKey,
}

impl ExtendedVigenere {
    pub fn new(key: &str) -> Result<Self, CipherError> {
        Ok(Self {
            key: VigenereKey::extended(key)?,
        })
    }

    fn cipher(&self) -> GenericCipher<'_, Extended> {
        GenericCipher::new(&self.key, KeyAdvance::Every)
    }

    pub fn key(&self) -> &VigenereKey {
        &self.key
    }

    pub fn encode(&self, plaintext: &str) -> String {
        self.cipher().encode(plaintext)
    }

    pub fn decode(&self, ciphertext: &str) -> String {
        self.cipher().decode(ciphertext)
    }
}

/// Encrypts `plaintext` with the simple Vigenère cipher
pub fn encode(plaintext: &str, key: &str) -> Result<String, CipherError> {
    Ok(SimpleVigenere::new(key)?.encode(plaintext))
}

/// Decrypts `ciphertext` with the simple Vigenère cipher
pub fn decode(ciphertext: &str, key: &str) -> Result<String, CipherError> {
    Ok(SimpleVigenere::new(key)?.decode(ciphertext))
}

pub fn encode_extended(plaintext: &str, key: &str) -> Result<String, CipherError> {
    Ok(ExtendedVigenere::new(key)?.encode(plaintext))
}

pub fn decode_extended(ciphertext: &str, key: &str) -> Result<String, CipherError> {
    Ok(ExtendedVigenere::new(key)?.decode(ciphertext))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{Rng, SeedableRng};

    #[test]
    fn simple_known_vectors() {
        assert_eq!(encode("Hello, World", "key").unwrap(), "RIJVS, UYVJN");
        assert_eq!(
            encode("CRYPTOGRAPHYCRYPTOGRAPHY", "KEY").unwrap(),
            "MVWZXMQVYZLWMVWZXMQVYZLW"
        );
        assert_eq!(decode("RIJVS, UYVJN", "KEY").unwrap(), "HELLO, WORLD");
    }

    #[test]
    fn simple_rejects_bad_keys() {
        assert_eq!(encode("abc", ""), Err(CipherError::EmptyKey));
        assert_eq!(encode("abc", "k3y"), Err(CipherError::InvalidKeyChar('3')));
        assert!(SimpleVigenere::new("Lemon").is_ok());
    }

    #[test]
    fn simple_passes_accents_through() {
        // Only ASCII letters are shifted, the key does not advance on 'é'
        assert_eq!(encode("été", "B").unwrap(), "éUé");
    }

    #[test]
    fn extended_known_vectors() {
        assert_eq!(
            encode_extended("Bonjour, été!", "clé").unwrap(),
            "dô<Öô$éHn(0SB"
        );
        assert_eq!(
            encode_extended("Prix: 10€ net", "Kß").unwrap(),
            "ZSsY-à.È€àxFÇ"
        );
        assert_eq!(encode_extended("Z", "b").unwrap(), "À");
        assert_eq!(decode_extended("dô<Öô$éHn(0SB", "clé").unwrap(), "Bonjour, été!");
    }

    #[test]
    fn simple_round_trip() {
        const CHARSET: &[u8] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ .,!?-0123456789";
        for i in 0..20 {
            let mut rng = rand::rngs::StdRng::seed_from_u64(i);

            let len = rng.gen_range(0..200);
            let plaintext: String = (0..len)
                .map(|_| CHARSET[rng.gen_range(0..CHARSET.len())] as char)
                .collect();
            let key_len = rng.gen_range(1..12);
            let key: String = (0..key_len)
                .map(|_| (b'a' + rng.gen_range(0..26u8)) as char)
                .collect();

            let cipher = SimpleVigenere::new(&key).unwrap();
            let ciphertext = cipher.encode(&plaintext);
            assert_eq!(ciphertext.len(), plaintext.len());
            assert_eq!(cipher.decode(&ciphertext), plaintext.to_ascii_uppercase());
        }
    }

    #[test]
    fn extended_round_trip() {
        for i in 0..20 {
            let mut rng = rand::rngs::StdRng::seed_from_u64(0xDEADBEEF + i);

            let len = rng.gen_range(0..200);
            // Mix of alphabet symbols and characters that pass through
            let plaintext: String = (0..len)
                .map(|_| match rng.gen_range(0..10) {
                    0 => '\n',
                    1 => '€',
                    _ => crate::EXTENDED_SYMBOLS[rng.gen_range(0..crate::EXTENDED_SYMBOLS.len())],
                })
                .collect();
            let key: String = (0..rng.gen_range(1..8))
                .map(|_| char::from_u32(rng.gen_range(0x20..0x250)).unwrap_or('k'))
                .collect();

            let cipher = ExtendedVigenere::new(&key).unwrap();
            let ciphertext = cipher.encode(&plaintext);
            assert_eq!(ciphertext.chars().count(), plaintext.chars().count());
            assert_eq!(cipher.decode(&ciphertext), plaintext);
        }
    }
}

use super::SigningAlgorithm;
use ring::hmac;

/// HMAC over SHA-256
pub struct HmacSha256;

impl SigningAlgorithm for HmacSha256 {
    fn name(&self) -> &'static str {
        "hmac-sha256"
    }

    fn sign(&self, msg: &[u8], secret: &[u8]) -> Vec<u8> {
        let key = hmac::Key::new(hmac::HMAC_SHA256, secret);
        hmac::sign(&key, msg).as_ref().to_vec()
    }
}

/// HMAC over SHA-512
pub struct HmacSha512;

impl SigningAlgorithm for HmacSha512 {
    fn name(&self) -> &'static str {
        "hmac-sha512"
    }

    fn sign(&self, msg: &[u8], secret: &[u8]) -> Vec<u8> {
        let key = hmac::Key::new(hmac::HMAC_SHA512, secret);
        hmac::sign(&key, msg).as_ref().to_vec()
    }
}

#[cfg(test)]
mod test {
    use super::{HmacSha256, HmacSha512};
    use crate::crypto::SigningAlgorithm;
    use hex_simd::AsciiCase;

    // RFC 4231, test case 2
    const KEY: &[u8] = b"Jefe";
    const DATA: &[u8] = b"what do ya want for nothing?";

    #[test]
    fn hmac_sha256_known_answer() {
        let tag = HmacSha256.sign(DATA, KEY);
        assert_eq!(
            hex_simd::encode_to_string(tag, AsciiCase::Lower),
            "5bdcc146bf60754e6a042426089575c75a003f089d2739839dec58b964ec3843"
        );
    }

    #[test]
    fn hmac_sha512_known_answer() {
        let tag = HmacSha512.sign(DATA, KEY);
        assert_eq!(
            hex_simd::encode_to_string(tag, AsciiCase::Lower),
            "164b7a7bfcf819e2e395fbe73b56e0a387bd64222e831fd610270cd7ea2505549758bf75c05a994a6d034f65f8f0e6fdcaeab1a34d4a6b4b636e070a38bce737"
        );
    }

    #[test]
    fn names_follow_the_registry() {
        assert_eq!(HmacSha256.name(), "hmac-sha256");
        assert_eq!(HmacSha512.name(), "hmac-sha512");
    }
}

const ALPHABET: &[u8; 62] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz";

/// Encodes a numeric ID as a base62 short code.
pub fn base62(mut value: u64) -> String {
    if value == 0 {
        return "0".to_owned();
    }
    let mut digits = Vec::new();
    while value > 0 {
        digits.push(ALPHABET[(value % 62) as usize]);
        value /= 62;
    }
    digits.iter().rev().map(|&b| b as char).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encodes_known_values() {
        assert_eq!(base62(0), "0");
        assert_eq!(base62(9), "9");
        assert_eq!(base62(10), "A");
        assert_eq!(base62(61), "z");
        assert_eq!(base62(62), "10");
        assert_eq!(base62(62 * 62), "100");
    }

    #[test]
    fn codes_stay_in_alphabet() {
        for value in [1u64, 12345, u64::MAX] {
            let code = base62(value);
            assert!(code.bytes().all(|b| ALPHABET.contains(&b)), "{code}");
        }
    }

    #[test]
    fn distinct_values_get_distinct_codes() {
        let mut codes: Vec<String> = (0..10_000).map(base62).collect();
        codes.sort();
        codes.dedup();
        assert_eq!(codes.len(), 10_000);
    }
}

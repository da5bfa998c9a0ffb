//! Equipment barcode codes
//!
//! Codes are generated server-side when equipment is registered. The unique
//! constraint on `equipment.barcode_code` backs up the generator.

use rand::Rng;

/// Generate a fresh barcode code: `EQ`, the current epoch millis, and a
/// random suffix
pub fn generate_code() -> String {
    let millis = chrono::Utc::now().timestamp_millis();
    let suffix: u32 = rand::thread_rng().gen_range(0..1000);
    format!("EQ{}{}", millis, suffix)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_codes_have_the_expected_shape() {
        let code = generate_code();
        assert!(code.starts_with("EQ"));
        assert!(code[2..].chars().all(|c| c.is_ascii_digit()));
        assert!(code.len() >= 15);
    }

    #[test]
    fn generated_codes_differ() {
        // The random suffix makes collisions within one millisecond unlikely
        let codes: Vec<String> = (0..8).map(|_| generate_code()).collect();
        let mut deduped = codes.clone();
        deduped.sort();
        deduped.dedup();
        assert!(deduped.len() > 1);
    }
}

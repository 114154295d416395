//! PII masking utilities.
//!
//! Pure, stateless, deterministic transforms that redact personally
//! identifiable fields for display. Same input always yields the same
//! output; no I/O.
//!
//! Masking is **not** idempotent: running an already-masked id through a
//! masker again may alter it further. Callers mask exactly once, at the
//! read-model boundary, never on the way into storage. The `Secure*`
//! constructors in `wardboard-types` are the single place that happens.
//!
//! Malformed input degrades gracefully (empty string or pass-through)
//! rather than erroring; these functions never fail.

use std::sync::LazyLock;

use regex::Regex;

/// Bullet character used for masked-out characters.
const BULLET: char = '\u{2022}';

/// Patient-id shaped substrings inside free text: one uppercase letter
/// followed by digits.
static PATIENT_ID_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b[A-Z]\d+\b").expect("invalid patient id pattern"));

/// Full-name shaped substrings inside free text: two or more capitalised
/// words in a row. Requires at least one lowercase letter per word to keep
/// acronyms like "ECG" out of the match.
static FULL_NAME_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b[A-Z][a-z]+(?:\s+[A-Z][a-z]+)+\b").expect("invalid full name pattern")
});

/// Mask a full name for display.
///
/// Splits on whitespace. Multi-token names become
/// `"{first} {last initial}."`; single-token names pass through unchanged;
/// empty input returns the empty string.
///
/// ```
/// use wardboard_masking::mask_pii;
///
/// assert_eq!(mask_pii("Sarah Chen"), "Sarah C.");
/// assert_eq!(mask_pii("Cher"), "Cher");
/// assert_eq!(mask_pii(""), "");
/// ```
pub fn mask_pii(full_name: &str) -> String {
    let tokens: Vec<&str> = full_name.split_whitespace().collect();
    match tokens.as_slice() {
        [] => String::new(),
        [single] => (*single).to_string(),
        [first, .., last] => {
            // Tokens from split_whitespace are never empty.
            let initial = last.chars().next().unwrap_or_default();
            format!("{first} {initial}.")
        }
    }
}

/// Mask a patient id for display.
///
/// Ids matching "one uppercase letter followed by digits" keep the letter
/// and the final digit and replace each interior digit with a bullet, so
/// the masked form has the same length as the input. Any other id keeps its
/// first and last character with a bulleted interior. Ids of two characters
/// or fewer pass through unchanged.
///
/// ```
/// use wardboard_masking::mask_patient_id;
///
/// assert_eq!(mask_patient_id("P001"), "P\u{2022}\u{2022}1");
/// assert_eq!(mask_patient_id("XY"), "XY");
/// ```
pub fn mask_patient_id(id: &str) -> String {
    let chars: Vec<char> = id.chars().collect();
    if chars.len() <= 2 {
        return id.to_string();
    }
    // Pattern-shaped and generic ids mask the same positions, so one code
    // path covers both.
    let first = chars[0];
    let last = chars[chars.len() - 1];
    let mut masked = String::with_capacity(id.len());
    masked.push(first);
    for _ in 1..chars.len() - 1 {
        masked.push(BULLET);
    }
    masked.push(last);
    masked
}

/// Mask a staff id for display.
///
/// Ids of three characters or more keep their first and last character and
/// replace every interior character with `*`; shorter ids pass through
/// unchanged.
///
/// ```
/// use wardboard_masking::mask_staff_id;
///
/// assert_eq!(mask_staff_id("S001"), "S**1");
/// assert_eq!(mask_staff_id("S1"), "S1");
/// ```
pub fn mask_staff_id(id: &str) -> String {
    let chars: Vec<char> = id.chars().collect();
    if chars.len() < 3 {
        return id.to_string();
    }
    let mut masked = String::with_capacity(id.len());
    masked.push(chars[0]);
    for _ in 1..chars.len() - 1 {
        masked.push('*');
    }
    masked.push(chars[chars.len() - 1]);
    masked
}

/// Mask an email address for display.
///
/// The local part keeps its first and last character with a bulleted
/// interior; the domain stays unmasked. Local parts of two characters or
/// fewer pass through. Input without an `@` is not an email and returns the
/// empty string.
pub fn mask_email(email: &str) -> String {
    let Some((local, domain)) = email.split_once('@') else {
        return String::new();
    };
    let chars: Vec<char> = local.chars().collect();
    if chars.len() <= 2 {
        return format!("{local}@{domain}");
    }
    let mut masked = String::with_capacity(email.len());
    masked.push(chars[0]);
    for _ in 1..chars.len() - 1 {
        masked.push(BULLET);
    }
    masked.push(chars[chars.len() - 1]);
    format!("{masked}@{domain}")
}

/// Mask a phone number for display.
///
/// All non-digit characters are stripped first. Fewer than five digits are
/// returned unmasked; otherwise the result is `"•••-•••-"` followed by the
/// last four digits.
///
/// ```
/// use wardboard_masking::mask_phone_number;
///
/// assert_eq!(
///     mask_phone_number("(415) 555-0172"),
///     "\u{2022}\u{2022}\u{2022}-\u{2022}\u{2022}\u{2022}-0172"
/// );
/// assert_eq!(mask_phone_number("x123"), "123");
/// ```
pub fn mask_phone_number(phone: &str) -> String {
    let digits: String = phone.chars().filter(char::is_ascii_digit).collect();
    if digits.len() < 5 {
        return digits;
    }
    let last_four = &digits[digits.len() - 4..];
    format!("{BULLET}{BULLET}{BULLET}-{BULLET}{BULLET}{BULLET}-{last_four}")
}

/// Best-effort scan of free text, masking patient-id shaped substrings and
/// capitalised full-name shaped substrings.
///
/// False negatives (formats the patterns miss) are acceptable; the patterns
/// are written to keep false positives low. Ids are replaced before names so
/// already-bulleted ids cannot feed the name pattern.
pub fn mask_text_content(text: &str) -> String {
    let ids_masked = PATIENT_ID_RE.replace_all(text, |caps: &regex::Captures<'_>| {
        mask_patient_id(&caps[0])
    });
    FULL_NAME_RE
        .replace_all(&ids_masked, |caps: &regex::Captures<'_>| mask_pii(&caps[0]))
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn masks_multi_token_names() {
        assert_eq!(mask_pii("Sarah Chen"), "Sarah C.");
        assert_eq!(mask_pii("Amelia Rose Hartley"), "Amelia H.");
        assert_eq!(mask_pii("  Sarah   Chen  "), "Sarah C.");
    }

    #[test]
    fn single_token_names_pass_through() {
        assert_eq!(mask_pii("Cher"), "Cher");
    }

    #[test]
    fn empty_name_yields_empty_string() {
        assert_eq!(mask_pii(""), "");
        assert_eq!(mask_pii("   "), "");
    }

    #[test]
    fn patient_id_keeps_letter_and_final_digit() {
        assert_eq!(mask_patient_id("P001"), "P••1");
        assert_eq!(mask_patient_id("A12345"), "A••••5");
    }

    #[test]
    fn patient_id_mask_preserves_length() {
        for id in ["P001", "A12345", "Z99"] {
            assert_eq!(mask_patient_id(id).chars().count(), id.chars().count());
        }
    }

    #[test]
    fn generic_id_keeps_first_and_last_character() {
        assert_eq!(mask_patient_id("abc-42"), "a••••2");
    }

    #[test]
    fn short_ids_pass_through() {
        assert_eq!(mask_patient_id("P1"), "P1");
        assert_eq!(mask_patient_id("x"), "x");
        assert_eq!(mask_patient_id(""), "");
    }

    #[test]
    fn staff_id_interior_becomes_asterisks() {
        assert_eq!(mask_staff_id("S001"), "S**1");
        assert_eq!(mask_staff_id("NUR-018"), "N*****8");
        assert_eq!(mask_staff_id("S1"), "S1");
    }

    #[test]
    fn staff_id_mask_preserves_length() {
        for id in ["S001", "NUR-018", "ab2"] {
            assert_eq!(mask_staff_id(id).chars().count(), id.chars().count());
        }
    }

    #[test]
    fn email_masks_local_part_only() {
        assert_eq!(mask_email("a.hartley@example.com"), "a•••••••y@example.com");
        assert_eq!(mask_email("ab@example.com"), "ab@example.com");
    }

    #[test]
    fn non_email_yields_empty_string() {
        assert_eq!(mask_email("not an email"), "");
    }

    #[test]
    fn phone_keeps_last_four_digits() {
        assert_eq!(mask_phone_number("(415) 555-0172"), "•••-•••-0172");
        assert_eq!(mask_phone_number("+44 20 7946 0958"), "•••-•••-0958");
    }

    #[test]
    fn short_phone_returns_bare_digits() {
        assert_eq!(mask_phone_number("x123"), "123");
        assert_eq!(mask_phone_number("1234"), "1234");
        assert_eq!(mask_phone_number("12345"), "•••-•••-2345");
    }

    #[test]
    fn text_scan_masks_ids_and_names() {
        let text = "Transferred P014 to ward 3 after review by Sarah Chen.";
        let masked = mask_text_content(text);
        assert_eq!(masked, "Transferred P••4 to ward 3 after review by Sarah C..");
    }

    #[test]
    fn text_scan_leaves_plain_text_alone() {
        let text = "vitals stable overnight, continue current medication";
        assert_eq!(mask_text_content(text), text);
    }

    #[test]
    fn text_scan_skips_acronyms() {
        let text = "ECG ordered, MRI pending";
        assert_eq!(mask_text_content(text), text);
    }

    #[test]
    fn masking_is_not_idempotent() {
        // Documented contract: mask exactly once. A second pass over a
        // masked phone strips the bullets and exposes a bare digit string.
        let once = mask_phone_number("(415) 555-0172");
        let twice = mask_phone_number(&once);
        assert_ne!(once, twice);
        assert_eq!(twice, "0172");
    }
}

use rand::Rng;

/// Maximum length of the name-derived part of a slug, leaving room for the
/// timestamp suffix.
const BASE_SLUG_LEN: usize = 40;

/// Length of a public award permalink.
pub const PERMALINK_LEN: usize = 8;

const PERMALINK_CHARS: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789";

/// Derive a URL-safe slug from a badge name: lowercase, non-alphanumeric runs
/// collapsed to hyphens, trimmed, truncated, plus a base36 millisecond
/// timestamp suffix for uniqueness. Collisions within the same millisecond
/// are left to the database's unique constraint.
pub fn generate_slug(name: &str) -> String {
    slug_with_timestamp(name, chrono::Utc::now().timestamp_millis())
}

pub(crate) fn slug_with_timestamp(name: &str, millis: i64) -> String {
    let mut base = String::new();
    let mut pending_hyphen = false;
    for c in name.chars() {
        if c.is_ascii_alphanumeric() {
            if pending_hyphen && !base.is_empty() {
                base.push('-');
            }
            pending_hyphen = false;
            base.push(c.to_ascii_lowercase());
            if base.len() >= BASE_SLUG_LEN {
                break;
            }
        } else {
            pending_hyphen = true;
        }
    }
    base.truncate(BASE_SLUG_LEN);
    let base = base.trim_matches('-');

    format!("{base}-{}", to_base36(millis.max(0) as u64))
}

fn to_base36(mut n: u64) -> String {
    const DIGITS: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";
    if n == 0 {
        return "0".to_string();
    }
    let mut out = Vec::new();
    while n > 0 {
        out.push(DIGITS[(n % 36) as usize]);
        n /= 36;
    }
    out.reverse();
    String::from_utf8(out).expect("base36 digits are ASCII")
}

/// Generate an 8-character lowercase alphanumeric permalink token.
pub fn generate_permalink() -> String {
    let mut rng = rand::rng();
    (0..PERMALINK_LEN)
        .map(|_| PERMALINK_CHARS[rng.random_range(0..PERMALINK_CHARS.len())] as char)
        .collect()
}

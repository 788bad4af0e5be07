//! Masking of personal data before it reaches the logs.

/// Number of leading characters left readable in a masked value.
const VISIBLE_PREFIX: usize = 3;

/// Mask an email address for logging, keeping a short prefix of the local
/// part and the whole domain: `ann.smith@x.com` becomes `ann***@x.com`.
///
/// Works on characters, so non-ASCII addresses never split a code point.
pub fn mask_email(email: &str) -> String {
    match email.split_once('@') {
        Some((local, domain)) => format!("{}@{}", mask_prefix(local), domain),
        None => mask_prefix(email),
    }
}

fn mask_prefix(value: &str) -> String {
    let visible: String = value.chars().take(VISIBLE_PREFIX).collect();
    format!("{}***", visible)
}

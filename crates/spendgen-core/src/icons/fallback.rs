use sha2::{Digest, Sha256};

const ICON_CODE_BASE: u32 = 0xE000;
const ICON_CODE_SPAN: u64 = 0x1FFF;

/// Deterministic fallback code point for an icon name, landing in the
/// private-use range so it resembles a real font code point.
///
/// SHA-256 is the documented stable hash here: the first 8 digest bytes are
/// read big-endian and reduced into an 8191-wide window above U+E000, so the
/// same icon name maps to the same code on every platform.
pub fn icon_code(icon_name: &str) -> u32 {
    let digest = Sha256::digest(icon_name.as_bytes());
    let mut prefix = [0u8; 8];
    prefix.copy_from_slice(&digest[..8]);
    let reduced = u64::from_be_bytes(prefix) % ICON_CODE_SPAN;
    ICON_CODE_BASE + u32::try_from(reduced).unwrap_or(0)
}

/// Synthesized icon name for a category with no extracted hint: lowercase,
/// spaces and slashes folded to underscores.
pub fn fallback_icon_name(category_name: &str) -> String {
    let normalized = category_name.to_lowercase().replace([' ', '/'], "_");
    format!("Icons.default_{normalized}")
}

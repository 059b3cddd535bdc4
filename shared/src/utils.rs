//! # Shared Utility Functions
//!
//! Common utility functions used by the backend and the terminal.
//!
//! ## Address Formatting
//!
//! Functions for formatting `0x`-prefixed EVM addresses for display:
//! - [`format_address`] - Keep the `0x` prefix, first N and last M hex digits
//! - [`truncate_address`] - `format_address` with 4/4 digits
//!
//! ```rust
//! use shared::utils::format_address;
//!
//! let address = "0x23F0Be0A6C4116110Ca5DA97755418e5adBC7eb8";
//! assert_eq!(format_address(address, 4, 4), "0x23F0...7eb8");
//! ```

/// Format a wallet address by showing the first `prefix_len` and last `suffix_len`
/// hex digits. A leading `0x` is kept and not counted.
///
/// If the address is too short to shorten, it is returned as-is.
///
/// # Examples
///
/// ```rust
/// use shared::utils::format_address;
///
/// let addr = "0x23F0Be0A6C4116110Ca5DA97755418e5adBC7eb8";
/// assert_eq!(format_address(addr, 4, 4), "0x23F0...7eb8");
/// assert_eq!(format_address(addr, 6, 2), "0x23F0Be...b8");
/// assert_eq!(format_address("0xabc", 4, 4), "0xabc");
/// ```
pub fn format_address(address: &str, prefix_len: usize, suffix_len: usize) -> String {
    let (prefix, digits) = match address.strip_prefix("0x") {
        Some(rest) => ("0x", rest),
        None => ("", address),
    };

    // Hex addresses are ASCII, so byte slicing is safe once lengths are checked
    if !digits.is_ascii() || digits.len() <= prefix_len + suffix_len {
        return address.to_string();
    }

    format!(
        "{}{}...{}",
        prefix,
        &digits[..prefix_len],
        &digits[digits.len() - suffix_len..]
    )
}

/// Format a wallet address with a 4-digit head and tail.
///
/// ```rust
/// use shared::utils::truncate_address;
///
/// let addr = "0x23F0Be0A6C4116110Ca5DA97755418e5adBC7eb8";
/// assert_eq!(truncate_address(addr), "0x23F0...7eb8");
/// ```
pub fn truncate_address(address: &str) -> String {
    format_address(address, 4, 4)
}

//! Bounded previews of received payloads for logging
//!
//! Received data is logged, never interpreted. To keep log lines bounded and
//! single-line, a preview substitutes non-printable bytes and truncates to
//! `PREVIEW_MAX` bytes.

use heapless::String;

/// Maximum preview length in bytes
///
/// Matches the historical 128-byte NUL-terminated log buffer (127 bytes of
/// payload).
pub const PREVIEW_MAX: usize = 127;

/// Substitute for non-printable bytes in previews
const SUBSTITUTE: char = '.';

/// Produce a printable preview of `payload`, truncated to [`PREVIEW_MAX`]
///
/// Printable ASCII passes through; everything else (control bytes, CR/LF,
/// non-ASCII) becomes [`SUBSTITUTE`].
pub fn preview(payload: &[u8]) -> String<PREVIEW_MAX> {
    let mut out = String::new();
    for &byte in payload.iter().take(PREVIEW_MAX) {
        let ch = if (0x20..0x7f).contains(&byte) {
            byte as char
        } else {
            SUBSTITUTE
        };
        if out.push(ch).is_err() {
            break;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn printable_ascii_passes_through() {
        assert_eq!(preview(b"hello server").as_str(), "hello server");
    }

    #[test]
    fn control_bytes_are_substituted() {
        assert_eq!(preview(b"ok\r\n").as_str(), "ok..");
        assert_eq!(preview(&[0x00, 0x1f, 0x7f, 0xff]).as_str(), "....");
    }

    #[test]
    fn long_payloads_are_truncated() {
        let payload = [b'a'; 512];
        let p = preview(&payload);
        assert_eq!(p.len(), PREVIEW_MAX);
        assert!(p.as_str().bytes().all(|b| b == b'a'));
    }

    #[test]
    fn empty_payload_gives_empty_preview() {
        assert_eq!(preview(&[]).as_str(), "");
    }
}

//! File signature and header lines shared by all text formats.

use crate::error::{FxError, Result};

use super::cursor::LineCursor;

/// Leading bytes of the binary encoding.
pub const BINARY_SIGNATURE: &[u8; 3] = b"BIN";

/// Marker that line 1 of a text file must contain.
pub const TEXT_MAGIC: &str = "TXT";

/// Optional version tag on line 2 (matched case-insensitively).
const ARCHIVE_VERSION_KEY: &str = "sinsarchiveversion";

/// Reject files in the binary encoding.
pub fn check_signature(bytes: &[u8]) -> Result<()> {
    if bytes.starts_with(BINARY_SIGNATURE) {
        return Err(FxError::UnsupportedVariant);
    }
    Ok(())
}

/// Header lines read before the format-specific body.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Header {
    /// The archive version line, trimmed
    pub archive_version: Option<String>,
}

impl Header {
    /// Physical lines the header occupies beyond the magic line.
    pub fn extra_lines(&self) -> usize {
        usize::from(self.archive_version.is_some())
    }
}

/// Read the magic line and the optional archive version line.
///
/// When line 2 is not a version tag it is left unread for the body parser.
pub fn read_header(cursor: &mut LineCursor<'_>) -> Result<Header> {
    let magic = cursor.advance().unwrap_or_default();
    if !magic.contains(TEXT_MAGIC) {
        return Err(FxError::expected(TEXT_MAGIC, cursor.line_number()));
    }

    let archive_version = match cursor.peek() {
        Some(line) if line.to_lowercase().contains(ARCHIVE_VERSION_KEY) => {
            cursor.advance();
            Some(line.trim().to_string())
        }
        _ => None,
    };

    Ok(Header { archive_version })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_binary_signature_rejected() {
        assert!(matches!(
            check_signature(b"BIN\x00\x01"),
            Err(FxError::UnsupportedVariant)
        ));
        assert!(check_signature(b"TXT\n").is_ok());
        assert!(check_signature(b"").is_ok());
    }

    #[test]
    fn test_header_with_version() {
        let mut cursor = LineCursor::new("TXT\nSinsArchiveVersion 194\nParticleSimulation");
        let header = read_header(&mut cursor).unwrap();

        assert_eq!(header.archive_version.as_deref(), Some("SinsArchiveVersion 194"));
        assert_eq!(header.extra_lines(), 1);
        assert_eq!(cursor.advance(), Some("ParticleSimulation"));
        assert_eq!(cursor.line_number(), 3);
    }

    #[test]
    fn test_header_without_version_leaves_line() {
        let mut cursor = LineCursor::new("TXT\nParticleSimulation");
        let header = read_header(&mut cursor).unwrap();

        assert_eq!(header, Header::default());
        assert_eq!(cursor.advance(), Some("ParticleSimulation"));
        assert_eq!(cursor.line_number(), 2);
    }

    #[test]
    fn test_missing_magic() {
        let mut cursor = LineCursor::new("ParticleSimulation\n");
        match read_header(&mut cursor) {
            Err(FxError::Format { expected, line }) => {
                assert_eq!(expected, "TXT");
                assert_eq!(line, 1);
            }
            other => panic!("expected format error, got {:?}", other),
        }
    }
}

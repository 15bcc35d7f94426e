use crate::config::RunConfig;
use crate::error::{EngineError, Result};
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

/// Open `path` and count its lines.
///
/// The handle lives only for the duration of this call and is closed on every
/// return path, including read failures.
///
/// # Errors
/// Returns `FileRead` if the file cannot be opened or read, or if it holds
/// invalid UTF-8.
pub fn count_file(path: &Path, config: &RunConfig) -> Result<u64> {
    let file = File::open(path).map_err(|e| EngineError::FileRead {
        path: path.to_path_buf(),
        source: e,
    })?;
    let mut reader = BufReader::with_capacity(config.buffer_capacity.max(1), file);

    let lines = count_lines(&mut reader).map_err(|e| EngineError::FileRead {
        path: path.to_path_buf(),
        source: e,
    })?;
    log::trace!("{} lines in {}", lines, path.display());
    Ok(lines)
}

/// Count text records the way a text-mode reader splits them.
///
/// `\n`, `\r\n` and a lone `\r` each end a record; a final unterminated
/// record counts too. Every record must decode as UTF-8.
///
/// # Errors
/// Propagates reader failures; invalid UTF-8 is reported as `InvalidData`.
pub fn count_lines<R: BufRead>(reader: &mut R) -> io::Result<u64> {
    let mut lines = 0;
    let mut record = Vec::new();
    // Previous chunk ended in `\r`; a leading `\n` here belongs to that record.
    let mut after_cr = false;

    loop {
        let buf = reader.fill_buf()?;
        if buf.is_empty() {
            break;
        }

        let mut rest = buf;
        if after_cr && rest[0] == b'\n' {
            rest = &rest[1..];
        }
        after_cr = false;

        while let Some(pos) = rest.iter().position(|&b| b == b'\n' || b == b'\r') {
            record.extend_from_slice(&rest[..pos]);
            finish_record(&mut record)?;
            lines += 1;

            let terminator = rest[pos];
            rest = &rest[pos + 1..];
            if terminator == b'\r' {
                match rest.first() {
                    Some(b'\n') => rest = &rest[1..],
                    Some(_) => {}
                    None => after_cr = true,
                }
            }
        }
        record.extend_from_slice(rest);

        let len = buf.len();
        reader.consume(len);
    }

    if !record.is_empty() {
        finish_record(&mut record)?;
        lines += 1;
    }

    Ok(lines)
}

/// Check one record's bytes and reset the buffer.
///
/// Terminators are ASCII and never occur inside a multi-byte sequence, so a
/// record boundary never splits a character.
fn finish_record(record: &mut Vec<u8>) -> io::Result<()> {
    if std::str::from_utf8(record).is_err() {
        return Err(io::Error::new(
            io::ErrorKind::InvalidData,
            "stream did not contain valid UTF-8",
        ));
    }
    record.clear();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RunConfigBuilder;
    use std::io::{Cursor, Write};
    use tempfile::NamedTempFile;

    fn count(content: &[u8]) -> u64 {
        count_lines(&mut Cursor::new(content)).unwrap()
    }

    /// Feed `content` through a reader whose buffer holds `capacity` bytes.
    fn count_chunked(content: &[u8], capacity: usize) -> u64 {
        count_lines(&mut BufReader::with_capacity(capacity, content)).unwrap()
    }

    #[test]
    fn test_empty_input_has_no_lines() {
        assert_eq!(count(b""), 0);
    }

    #[test]
    fn test_terminated_lines() {
        assert_eq!(count(b"a\nb\nc\n"), 3);
    }

    #[test]
    fn test_trailing_partial_line_counts() {
        assert_eq!(count(b"a\nb\nc"), 3);
        assert_eq!(count(b"no newline"), 1);
    }

    #[test]
    fn test_blank_lines_count() {
        assert_eq!(count(b"\n\n\n"), 3);
        assert_eq!(count(b"a\r\nb\r\n"), 2);
        assert_eq!(count(b"\r\r"), 2);
        assert_eq!(count(b"\r\n\r\n"), 2);
    }

    #[test]
    fn test_lone_carriage_returns_end_lines() {
        assert_eq!(count(b"a\rb\rc\r"), 3);
        assert_eq!(count(b"a\rb\rc"), 3);
    }

    #[test]
    fn test_mixed_line_endings() {
        assert_eq!(count(b"a\r\nb\rc"), 3);
        assert_eq!(count(b"a\n\rb\r\n\nc"), 5);
    }

    #[test]
    fn test_crlf_split_across_chunks() {
        // capacity 2: "a\r" | "\nb" | "\r\n" | "c"
        assert_eq!(count_chunked(b"a\r\nb\r\nc", 2), 3);
        // capacity 1 puts every terminator in its own chunk
        assert_eq!(count_chunked(b"a\r\nb\rc\r\n", 1), 3);
        assert_eq!(count_chunked(b"\r\r\n\r", 1), 3);
    }

    #[test]
    fn test_small_buffer_spans_chunks() {
        let content = "línea uno\r\nlínea dos\rend\n".repeat(50);
        let config = RunConfigBuilder::default()
            .buffer_capacity(3usize)
            .build()
            .unwrap();
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();

        assert_eq!(count_file(file.path(), &config).unwrap(), 150);
    }

    #[test]
    fn test_invalid_utf8_is_rejected() {
        let err = count_lines(&mut Cursor::new(&b"ok\n\xff\xfe\n"[..])).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidData);
        assert_eq!(err.to_string(), "stream did not contain valid UTF-8");

        // truncated multi-byte sequence in the final unterminated record
        assert!(count_lines(&mut Cursor::new(&b"ok\n\xc3"[..])).is_err());
    }

    #[test]
    fn test_multibyte_split_across_chunks_is_valid() {
        assert_eq!(count_chunked("ü\nß".as_bytes(), 1), 2);
    }

    #[test]
    fn test_count_file_missing_is_read_error() {
        let file = NamedTempFile::new().unwrap();
        let path = file.path().to_path_buf();
        drop(file);

        let err = count_file(&path, &RunConfig::default()).unwrap_err();
        assert!(matches!(err, EngineError::FileRead { .. }));
        assert!(err.to_string().starts_with("Error reading file: "));
    }
}

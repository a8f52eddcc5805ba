//! JSON line output.
//!
//! Results are written with `", "` and `": "` separators and with every
//! character outside printable ASCII escaped as `\uXXXX`, so downstream
//! consumers that compare output byte-for-byte see the same line regardless
//! of locale.

use std::io::{self, Write};

use serde::Serialize;
use serde_json::ser::Formatter;

/// Compact single-line formatter with spaced separators.
#[derive(Debug, Default, Clone, Copy)]
pub struct SpacedFormatter;

impl Formatter for SpacedFormatter {
    fn begin_array_value<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + Write,
    {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_key<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + Write,
    {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_value<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + Write,
    {
        writer.write_all(b": ")
    }

    fn write_string_fragment<W>(&mut self, writer: &mut W, fragment: &str) -> io::Result<()>
    where
        W: ?Sized + Write,
    {
        if fragment.chars().all(is_printable_ascii) {
            return writer.write_all(fragment.as_bytes());
        }
        let mut units = [0u16; 2];
        for ch in fragment.chars() {
            if is_printable_ascii(ch) {
                writer.write_all(&[ch as u8])?;
            } else {
                for unit in ch.encode_utf16(&mut units) {
                    write!(writer, "\\u{:04x}", unit)?;
                }
            }
        }
        Ok(())
    }
}

fn is_printable_ascii(ch: char) -> bool {
    (' '..='~').contains(&ch)
}

/// Serialize `value` as one line, without the trailing newline.
pub fn to_json_line<T: Serialize>(value: &T) -> serde_json::Result<String> {
    let mut buf = Vec::new();
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, SpacedFormatter);
    value.serialize(&mut ser)?;
    // Formatter output is ASCII only
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

/// Write `value` followed by a newline and flush.
pub fn write_line<T: Serialize, W: Write>(writer: &mut W, value: &T) -> anyhow::Result<()> {
    let line = to_json_line(value)?;
    writeln!(writer, "{}", line)?;
    writer.flush()?;
    Ok(())
}

use log::trace;

use crate::json::{JsonError, Result};

/// Advance past one unwanted value without materializing it.
///
/// Scanning starts at `start` (leading `:` and whitespace are allowed) and
/// stops at the first `,`, `}` or `]` outside any string and bracket nesting.
/// Returns the offset of that terminator, or `bytes.len()` when the input ends
/// at nesting depth zero. Brackets inside strings are ignored and a backslash
/// always escapes the following byte.
pub fn skip_value(bytes: &[u8], start: usize) -> Result<usize> {
	let mut open: Vec<(u8, usize)> = Vec::new();
	let mut string_start: Option<usize> = None;
	let mut pos = start;

	while pos < bytes.len() {
		let byte = bytes[pos];

		if string_start.is_some() {
			match byte {
				b'\\' => pos += 1,
				b'"' => string_start = None,
				_ => {}
			}
			pos += 1;
			continue;
		}

		match byte {
			b'"' => string_start = Some(pos),
			b'{' | b'[' => open.push((byte, pos)),
			b'}' | b']' => match open.last() {
				None => break,
				Some(&(opener, _)) if closes(opener, byte) => {
					open.pop();
				}
				Some(_) => {
					return Err(JsonError::UnexpectedToken {
						at: pos,
						found: char::from(byte),
						expected: "matching bracket",
					});
				}
			},
			b',' if open.is_empty() => break,
			_ => {}
		}
		pos += 1;
	}

	if let Some(at) = string_start {
		return Err(JsonError::UnterminatedString { at });
	}
	if let Some(&(opener, at)) = open.last() {
		return Err(match opener {
			b'{' => JsonError::UnterminatedObject { at },
			_ => JsonError::UnterminatedArray { at },
		});
	}

	trace!("skipped bytes {start}..{pos}");
	Ok(pos)
}

fn closes(opener: u8, closer: u8) -> bool {
	matches!((opener, closer), (b'{', b'}') | (b'[', b']'))
}

#[cfg(test)]
mod tests;

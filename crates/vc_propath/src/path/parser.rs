use alloc::borrow::Cow;
use alloc::string::String;
use alloc::vec::Vec;

use super::{PropertyPath, Segment};
use crate::Error;

fn error(path: &str, offset: usize, reason: impl Into<Cow<'static, str>>) -> Error {
    Error::Parse {
        path: String::from(path),
        offset,
        reason: reason.into(),
    }
}

/// Parses `path`; `token` names the alternate root.
pub(super) fn parse(path: &str, token: &str) -> Result<PropertyPath, Error> {
    if path.is_empty() {
        return Err(error(path, 0, "empty path"));
    }

    let mut alternate_root = None;
    let mut segments = Vec::new();
    let mut offset = 0;

    for (position, part) in path.split('.').enumerate() {
        if part.is_empty() {
            return Err(error(path, offset, "empty segment"));
        }
        if position == 0 && !token.is_empty() && part.eq_ignore_ascii_case(token) {
            alternate_root = Some(String::from(part));
        } else {
            segments.push(parse_segment(path, offset, part)?);
        }
        offset += part.len() + 1;
    }

    if segments.is_empty() {
        let reason = alloc::format!("`{token}` alone is not addressable");
        return Err(error(path, 0, reason));
    }

    Ok(PropertyPath {
        alternate_root,
        segments,
    })
}

fn parse_segment(path: &str, offset: usize, part: &str) -> Result<Segment, Error> {
    if let Some(pos) = part.find(']')
        && !part[..pos].contains('[')
    {
        return Err(error(path, offset + pos, "unexpected `]`"));
    }

    let Some(open) = part.find('[') else {
        return Ok(Segment::new(part));
    };
    if open == 0 {
        return Err(error(path, offset, "missing property name before `[`"));
    }

    let inner_start = open + 1;
    let Some(close) = part[inner_start..].find(']').map(|c| c + inner_start) else {
        return Err(error(path, offset + open, "missing `]`"));
    };
    let inner = &part[inner_start..close];

    if inner.is_empty() {
        return Err(error(path, offset + open, "empty selector `[]`"));
    }
    if let Some(nested) = inner.find('[') {
        return Err(error(path, offset + inner_start + nested, "unexpected `[` in selector"));
    }
    if close + 1 != part.len() {
        return Err(error(path, offset + close + 1, "unexpected text after `]`"));
    }
    if inner.bytes().all(|b| b.is_ascii_digit()) && inner.parse::<usize>().is_err() {
        return Err(error(path, offset + inner_start, "index is too large"));
    }

    Ok(Segment::with_selector(&part[..open], inner))
}

// -----------------------------------------------------------------------------
// Tests

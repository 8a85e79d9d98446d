//! IPv6 literals.
//!
//! Decoding expands a single `::` into as many zero groups as needed to
//! reach eight. Encoding follows RFC 5952: groups are lowercase without
//! leading zeros, and the longest run of two or more zero groups (the first
//! one on ties) collapses to `::`.

use super::errors::FormatError;

const GROUPS: usize = 8;
const BYTES: usize = 16;

fn parse_group(group: &str) -> Option<u16> {
    if group.is_empty() || group.len() > 4 || !group.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    u16::from_str_radix(group, 16).ok()
}

fn parse_groups(part: &str) -> Result<Vec<u16>, FormatError> {
    if part.is_empty() {
        return Ok(Vec::new());
    }
    part.split(':')
        .map(|group| {
            parse_group(group)
                .ok_or_else(|| FormatError::malformed(group, "group must be 1-4 hex digits"))
        })
        .collect()
}

fn parse(input: &str) -> Result<[u16; GROUPS], FormatError> {
    let mut halves = input.split("::");
    let head = halves.next().unwrap_or_default();
    let tail = halves.next();
    if halves.next().is_some() {
        return Err(FormatError::malformed(input, "'::' may appear only once"));
    }

    let head_groups = parse_groups(head)?;
    let mut groups = [0u16; GROUPS];

    match tail {
        None => {
            if head_groups.len() != GROUPS {
                return Err(FormatError::malformed(
                    input,
                    format!("expected 8 groups, found {}", head_groups.len()),
                ));
            }
            groups.copy_from_slice(&head_groups);
        }
        Some(tail) => {
            let tail_groups = parse_groups(tail)?;
            let explicit = head_groups.len() + tail_groups.len();
            // '::' stands for at least one zero group
            if explicit >= GROUPS {
                return Err(FormatError::malformed(
                    input,
                    format!("'::' leaves no room among {} explicit groups", explicit),
                ));
            }
            groups[..head_groups.len()].copy_from_slice(&head_groups);
            groups[GROUPS - tail_groups.len()..].copy_from_slice(&tail_groups);
        }
    }

    Ok(groups)
}

pub fn validate(input: &str) -> bool {
    parse(input).is_ok()
}

pub fn decode(input: &str) -> Result<Vec<u8>, FormatError> {
    Ok(parse(input)?
        .iter()
        .flat_map(|group| group.to_be_bytes())
        .collect())
}

/// Longest run of zero groups as `(start, len)`, first run winning ties.
fn longest_zero_run(groups: &[u16]) -> Option<(usize, usize)> {
    let mut best: Option<(usize, usize)> = None;
    let mut start = 0;

    while start < groups.len() {
        if groups[start] != 0 {
            start += 1;
            continue;
        }
        let len = groups[start..].iter().take_while(|&&g| g == 0).count();
        if best.is_none_or(|(_, best_len)| len > best_len) {
            best = Some((start, len));
        }
        start += len;
    }

    best
}

pub fn encode(data: &[u8]) -> Result<String, FormatError> {
    if data.len() != BYTES {
        return Err(FormatError::length_mismatch(BYTES, data.len()));
    }

    let groups: Vec<u16> = data
        .chunks_exact(2)
        .map(|pair| u16::from_be_bytes([pair[0], pair[1]]))
        .collect();
    let render = |groups: &[u16]| {
        groups
            .iter()
            .map(|g| format!("{:x}", g))
            .collect::<Vec<_>>()
            .join(":")
    };

    match longest_zero_run(&groups) {
        Some((start, len)) if len > 1 => Ok(format!(
            "{}::{}",
            render(&groups[..start]),
            render(&groups[start + len..])
        )),
        _ => Ok(render(&groups)),
    }
}

//! Request path normalization.
//!
//! [`normalize`] percent-decodes the path until no `%HH` triple remains, then removes dot
//! segments as described in [RFC 3986 §5.2.4][rfc].
//!
//! Decoding happens first, so an encoded dot segment such as `%2e%2e` is removed as well.
//!
//! [rfc]: <https://www.rfc-editor.org/rfc/rfc3986.html#section-5.2.4>


/// Percent-decode then remove dot segments.
///
/// The result is a fixpoint, `normalize(&normalize(path)) == normalize(path)`.
///
/// # Examples
///
/// ```
/// use httptree::normalize;
///
/// assert_eq!(normalize(b"/a/b/../c"), b"/a/c");
/// assert_eq!(normalize(b"/a/%2e%2e/b"), b"/b");
/// ```
pub fn normalize(path: &[u8]) -> Vec<u8> {
    remove_dot_segments(&percent_decode(path))
}

/// Replace every `%HH` triple with the byte it encodes.
///
/// Decoding repeats until a pass finds no triple, so `%2541` decodes to `A`. Incomplete or
/// non hex triples are kept as is.
pub fn percent_decode(bytes: &[u8]) -> Vec<u8> {
    let mut buf = bytes.to_vec();
    while decode_pass(&mut buf) { }
    buf
}

/// Single left to right pass, returns `true` if any triple was decoded.
fn decode_pass(buf: &mut Vec<u8>) -> bool {
    let mut read = 0;
    let mut write = 0;
    let mut decoded = false;

    while let Some(&byte) = buf.get(read) {
        if byte == b'%' {
            let hi = buf.get(read + 1).copied().and_then(hex);
            let lo = buf.get(read + 2).copied().and_then(hex);
            if let (Some(hi), Some(lo)) = (hi, lo) {
                buf[write] = hi << 4 | lo;
                read += 3;
                write += 1;
                decoded = true;
                continue;
            }
        }
        buf[write] = byte;
        read += 1;
        write += 1;
    }

    buf.truncate(write);
    decoded
}

fn hex(byte: u8) -> Option<u8> {
    match byte {
        b'0'..=b'9' => Some(byte - b'0'),
        b'a'..=b'f' => Some(byte - b'a' + 10),
        b'A'..=b'F' => Some(byte - b'A' + 10),
        _ => None,
    }
}

/// Remove `.` and `..` segments.
///
/// Leading `..` segments that would climb above the root are dropped.
pub fn remove_dot_segments(path: &[u8]) -> Vec<u8> {
    let mut input = path;
    let mut output = Vec::with_capacity(path.len());

    while !input.is_empty() {
        if let Some(rest) = input.strip_prefix(b"../") {
            input = rest;
        } else if let Some(rest) = input.strip_prefix(b"./") {
            input = rest;
        } else if input.starts_with(b"/./") {
            input = &input[2..];
        } else if input == b"/." {
            input = b"/";
        } else if input.starts_with(b"/../") {
            input = &input[3..];
            pop_segment(&mut output);
        } else if input == b"/.." {
            input = b"/";
            pop_segment(&mut output);
        } else if input == b"." || input == b".." {
            input = &[];
        } else {
            // first segment, with its leading slash, up to the next slash
            let start = usize::from(input.starts_with(b"/"));
            let end = input[start..]
                .iter()
                .position(|&byte| byte == b'/')
                .map_or(input.len(), |at| start + at);
            output.extend_from_slice(&input[..end]);
            input = &input[end..];
        }
    }

    output
}

/// Remove the last segment and its preceding slash.
fn pop_segment(output: &mut Vec<u8>) {
    let at = output.iter().rposition(|&byte| byte == b'/').unwrap_or(0);
    output.truncate(at);
}

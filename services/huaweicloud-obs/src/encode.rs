use percent_encoding::{percent_encode, AsciiSet};
use presign_core::{BoundedString, Overflow};

use crate::constants::{OBS_PATH_ENCODE_SET, OBS_QUERY_ENCODE_SET};

/// Whether `/` passes through the encoder untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Slash {
    /// Keep `/` as a separator. Used for the object key in the resource path.
    Keep,
    /// Encode `/` as `%2F`. Used for query names and values.
    Encode,
}

impl Slash {
    fn encode_set(self) -> &'static AsciiSet {
        match self {
            Slash::Keep => &OBS_PATH_ENCODE_SET,
            Slash::Encode => &OBS_QUERY_ENCODE_SET,
        }
    }
}

/// Percent-encode `input` into `buf`, returning the number of bytes written.
///
/// Unreserved characters pass through and every other byte becomes `%XX`
/// with uppercase hex. Nothing is written if the encoded form does not fit.
pub(crate) fn encode_into(
    buf: &mut BoundedString,
    input: &[u8],
    slash: Slash,
) -> Result<usize, Overflow> {
    let before = buf.len();
    buf.push_all(percent_encode(input, slash.encode_set()))?;
    Ok(buf.len() - before)
}

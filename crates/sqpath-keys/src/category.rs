//! Category codes for archive paths
//!
//! Every path in the packed archive belongs to one of a fixed set of
//! top-level categories. The category number occupies bits 16-23 of the
//! packed code; the background, cutscene and music families additionally
//! carry an expansion (and, for background, a zone segment) number in the
//! low 16 bits.
//!
//! Matching is a literal byte comparison against fixed prefix tokens, so
//! callers must supply forward-slash, lowercase paths.

use crate::error::SqPathError;

/// Top-level archive category
///
/// Discriminants are the category numbers used by the archive's directory
/// taxonomy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Category {
    /// `common/`
    Common = 0x00,
    /// `bgcommon/`
    BgCommon = 0x01,
    /// `bg/`, with expansion and zone segment sub-ids
    Background = 0x02,
    /// `cut/`, with an expansion sub-id
    Cutscene = 0x03,
    /// `chara/`
    Character = 0x04,
    /// `shader/`
    Shader = 0x05,
    /// `ui/`
    Ui = 0x06,
    /// `sound/`
    Sound = 0x07,
    /// `vfx/`
    Vfx = 0x08,
    /// `ui_script/`
    UiScript = 0x09,
    /// `exd/` sheet database
    Exd = 0x0A,
    /// `game_script/`
    GameScript = 0x0B,
    /// `music/`, with an expansion sub-id
    Music = 0x0C,
    /// `_sqpack_test/`
    SqpackTest = 0x12,
    /// `_debug/`
    Debug = 0x13,
}

/// Ordered prefix dispatch table
///
/// Tokens are three bytes, except `bg/` and `ui/` which include the
/// separator so they cannot collide with `bgc` (bgcommon) and `ui_`
/// (ui script).
const TOKENS: [(&str, Category); 15] = [
    ("com", Category::Common),
    ("bgc", Category::BgCommon),
    ("bg/", Category::Background),
    ("cut", Category::Cutscene),
    ("cha", Category::Character),
    ("sha", Category::Shader),
    ("ui/", Category::Ui),
    ("sou", Category::Sound),
    ("vfx", Category::Vfx),
    ("ui_", Category::UiScript),
    ("exd", Category::Exd),
    ("gam", Category::GameScript),
    ("mus", Category::Music),
    ("_sq", Category::SqpackTest),
    ("_de", Category::Debug),
];

impl Category {
    /// Match a path against the prefix table
    ///
    /// Returns `None` for unrecognized prefixes. Note that the archive
    /// also uses code 0 for [`Category::Common`], so an unknown prefix
    /// and a `com` path produce the same packed code.
    pub fn from_path(path: &str) -> Option<Self> {
        TOKENS
            .iter()
            .find(|(token, _)| path.starts_with(token))
            .map(|&(_, category)| category)
    }

    /// The category number shifted into bits 16-23 of the packed code
    pub const fn base_id(self) -> u32 {
        (self as u32) << 16
    }
}

/// Compute the packed category code for a path
///
/// The base category number lands in bits 16-23. Background paths add an
/// `expansion << 8 | segment` sub-id, cutscene and music paths add
/// `expansion << 8`, and every other category (and every unrecognized
/// prefix) has a zero low half.
///
/// # Examples
///
/// ```
/// use sqpath_keys::category_id;
///
/// assert_eq!(category_id("exd/root.exl")?, 0x0A_0000);
/// assert_eq!(category_id("bg/ex2/03/field.lgb")?, 0x02_0203);
/// # Ok::<(), sqpath_keys::SqPathError>(())
/// ```
pub fn category_id(path: &str) -> Result<u32, SqPathError> {
    let Some(category) = Category::from_path(path) else {
        return Ok(0);
    };

    let sub_id = match category {
        Category::Background => SubIdScanner::background(path).run()?,
        Category::Cutscene => SubIdScanner::numbered(path, 4).run()?,
        Category::Music => SubIdScanner::numbered(path, 6).run()?,
        _ => 0,
    };

    Ok(category.base_id() | sub_id)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScanState {
    ReadFirstToken,
    ReadExpansionDigits,
    ReadSegmentDigits,
    Done,
}

/// Bounded scanner for the numbered sub-id families
///
/// Expansion-scoped paths look like `bg/ex<N>/<NN>/...` (background) or
/// `cut/ex<N>/...` / `music/ex<N>/...`, where `<N>` is one or two digits.
/// The scanner walks a fixed set of states with a length check before
/// every offset access; a missing byte or a non-digit in a numeric field
/// is a [`SqPathError::MalformedPath`].
struct SubIdScanner<'a> {
    path: &'a str,
    bytes: &'a [u8],
    /// Width of the first path component including its separator
    first_dir_len: usize,
    /// Background paths carry a two-digit zone segment after the expansion
    with_segment: bool,
    /// Offset where segment digits start
    pos: usize,
    expansion: u32,
    segment: u32,
}

impl<'a> SubIdScanner<'a> {
    fn background(path: &'a str) -> Self {
        Self::new(path, 3, true)
    }

    fn numbered(path: &'a str, first_dir_len: usize) -> Self {
        Self::new(path, first_dir_len, false)
    }

    fn new(path: &'a str, first_dir_len: usize, with_segment: bool) -> Self {
        Self {
            path,
            bytes: path.as_bytes(),
            first_dir_len,
            with_segment,
            pos: first_dir_len,
            expansion: 0,
            segment: 0,
        }
    }

    fn run(mut self) -> Result<u32, SqPathError> {
        let mut state = ScanState::ReadFirstToken;
        loop {
            state = match state {
                ScanState::ReadFirstToken => self.read_first_token()?,
                ScanState::ReadExpansionDigits => self.read_expansion_digits()?,
                ScanState::ReadSegmentDigits => self.read_segment_digits()?,
                ScanState::Done => return Ok(self.expansion + self.segment),
            };
        }
    }

    fn read_first_token(&mut self) -> Result<ScanState, SqPathError> {
        // Only `ex<N>` second components carry an expansion number.
        if self.byte(self.first_dir_len)? != b'e' {
            return Ok(ScanState::Done);
        }
        Ok(ScanState::ReadExpansionDigits)
    }

    /// Detect a one- or two-digit expansion number by probing for the
    /// separator that must follow it
    fn read_expansion_digits(&mut self) -> Result<ScanState, SqPathError> {
        let digits = self.first_dir_len + 2;
        if self.byte(digits + 1)? == b'/' {
            self.expansion = self.parse_number(digits, 1)? << 8;
            self.pos = digits + 2;
        } else if self.byte(digits + 2)? == b'/' {
            self.expansion = self.parse_number(digits, 2)? << 8;
            self.pos = digits + 3;
        } else if self.with_segment {
            // No separator boundary matched. The expansion defaults to 0
            // and segment parsing proceeds from the first component,
            // where the `e` fails the digit check.
            self.pos = self.first_dir_len;
        } else {
            return Ok(ScanState::Done);
        }

        if self.with_segment {
            Ok(ScanState::ReadSegmentDigits)
        } else {
            Ok(ScanState::Done)
        }
    }

    fn read_segment_digits(&mut self) -> Result<ScanState, SqPathError> {
        self.segment = self.parse_number(self.pos, 2)?;
        Ok(ScanState::Done)
    }

    fn byte(&self, offset: usize) -> Result<u8, SqPathError> {
        self.bytes
            .get(offset)
            .copied()
            .ok_or_else(|| SqPathError::malformed(self.path, offset))
    }

    /// Parse a fixed-width decimal field
    fn parse_number(&self, start: usize, len: usize) -> Result<u32, SqPathError> {
        let mut value = 0u32;
        for offset in start..start + len {
            let byte = self.byte(offset)?;
            if !byte.is_ascii_digit() {
                return Err(SqPathError::malformed(self.path, offset));
            }
            value = value * 10 + u32::from(byte - b'0');
        }
        Ok(value)
    }
}

//! Byte-oriented string transforms.
//!
//! Widths and positions are measured in UTF-8 bytes, so a Hangul syllable
//! counts as three. Transforms never split a multi-byte character: only ASCII
//! bytes (backslash, CR, LF, space, tab, ASCII letters) are ever rewritten.

use crate::error::{Error, Result};
use crate::options::PadSide;

const BR_TAG: &str = "<br />";

/// Escapes backslashes by doubling them. A backslash that is already doubled
/// is kept as is.
///
/// # Examples
///
/// ```rust
/// use strproc::add_slashes;
///
/// assert_eq!(add_slashes(r"a\bcdefgz"), r"a\\bcdefgz");
/// assert_eq!(add_slashes(r"a\\bcdefgz"), r"a\\bcdefgz");
/// ```
#[must_use]
pub fn add_slashes(s: &str) -> String {
    let mut out = String::with_capacity(s.len() * 2);
    let mut chars = s.chars().peekable();
    while let Some(c) = chars.next() {
        out.push(c);
        if c == '\\' {
            out.push('\\');
            chars.next_if_eq(&'\\');
        }
    }
    out
}

/// Removes one level of backslash escaping: every character drops the
/// backslash that immediately follows it.
///
/// # Examples
///
/// ```rust
/// use strproc::strip_slashes;
///
/// assert_eq!(strip_slashes(r"a\\bcdefgz"), r"a\bcdefgz");
/// assert_eq!(strip_slashes(r"a\\\\bcdefgz"), r"a\\bcdefgz");
/// ```
#[must_use]
pub fn strip_slashes(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut chars = s.chars().peekable();
    while let Some(c) = chars.next() {
        out.push(c);
        chars.next_if_eq(&'\\');
    }
    out
}

/// Replaces line breaks with `<br />`. `\r\n` and `\n\r` count as one break.
///
/// # Examples
///
/// ```rust
/// use strproc::nl2br;
///
/// assert_eq!(nl2br("abc\ndefgh"), "abc<br />defgh");
/// assert_eq!(nl2br("abcde\r\nfgh"), "abcde<br />fgh");
/// ```
#[must_use]
pub fn nl2br(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + BR_TAG.len());
    let mut chars = s.chars().peekable();
    while let Some(c) = chars.next() {
        if is_newline(c) {
            out.push_str(BR_TAG);
            chars.next_if(|&next| is_newline(next));
        } else {
            out.push(c);
        }
    }
    out
}

fn is_newline(c: char) -> bool {
    c == '\n' || c == '\r'
}

fn is_break_point(c: char) -> bool {
    c == ' ' || c == '\t'
}

/// Replaces a space or tab with `brk` once at least `width` bytes have been
/// written since the previous break.
///
/// # Examples
///
/// ```rust
/// use strproc::word_wrap_simple;
///
/// let text = "The quick brown fox jumped over the lazy dog.";
/// assert_eq!(
///     word_wrap_simple(text, 8, "*").unwrap(),
///     "The quick*brown fox*jumped over*the lazy*dog."
/// );
/// ```
///
/// # Errors
///
/// Returns [`Error::InvalidInput`] when `width` is zero.
pub fn word_wrap_simple(s: &str, width: usize, brk: &str) -> Result<String> {
    check_width(width)?;
    let mut out = String::with_capacity(s.len() * 2);
    let mut run = 0;
    for c in s.chars() {
        if is_break_point(c) && run >= width {
            out.push_str(brk);
            run = 0;
        } else {
            out.push(c);
            run += c.len_utf8();
        }
    }
    Ok(out)
}

/// Replaces a space or tab at byte offset `v` with `brk` when `v` reaches the
/// current limit. The limit starts at `width` and grows by `width` after every
/// break, so lines stay close to multiples of `width` in the original text.
///
/// # Examples
///
/// ```rust
/// use strproc::word_wrap_around;
///
/// let text = "The quick brown fox jumped over the lazy dog.";
/// assert_eq!(
///     word_wrap_around(text, 8, "*").unwrap(),
///     "The quick*brown fox*jumped*over the*lazy*dog."
/// );
/// ```
///
/// # Errors
///
/// Returns [`Error::InvalidInput`] when `width` is zero.
pub fn word_wrap_around(s: &str, width: usize, brk: &str) -> Result<String> {
    check_width(width)?;
    let mut out = String::with_capacity(s.len() * 2);
    let mut limit = width;
    for (offset, c) in s.char_indices() {
        if is_break_point(c) && offset >= limit {
            out.push_str(brk);
            limit += width;
        } else {
            out.push(c);
        }
    }
    Ok(out)
}

fn check_width(width: usize) -> Result<()> {
    if width == 0 {
        return Err(Error::InvalidInput("wrap width must be at least 1".to_string()));
    }
    Ok(())
}

/// Pads `s` to `max` bytes by repeating `fill` on the chosen side.
///
/// With [`PadSide::Both`] the left side gets half of the missing bytes rounded
/// down. A fill character that would overshoot its side is dropped. Inputs
/// already `max` bytes or longer, and an empty `fill`, are returned unchanged.
///
/// # Examples
///
/// ```rust
/// use strproc::{padding, PadSide};
///
/// let s = "Life isn't always what one like.";
/// assert_eq!(padding(s, "*-=", PadSide::Both, 37), "*-Life isn't always what one like.*-=");
/// assert_eq!(padding(s, "*-=", PadSide::Left, 37), "*-=*-Life isn't always what one like.");
/// ```
#[must_use]
pub fn padding(s: &str, fill: &str, side: PadSide, max: usize) -> String {
    if s.len() >= max || fill.is_empty() {
        return s.to_string();
    }
    let missing = max - s.len();
    let (left, right) = match side {
        PadSide::Left => (missing, 0),
        PadSide::Right => (0, missing),
        PadSide::Both => (missing / 2, missing - missing / 2),
    };

    let mut out = String::with_capacity(max);
    push_fill(&mut out, fill, left);
    out.push_str(s);
    push_fill(&mut out, fill, right);
    out
}

fn push_fill(out: &mut String, fill: &str, budget: usize) {
    let mut used = 0;
    for c in fill.chars().cycle() {
        if used + c.len_utf8() > budget {
            break;
        }
        out.push(c);
        used += c.len_utf8();
    }
}

/// Same as [`padding`] with [`PadSide::Left`].
#[must_use]
pub fn padding_left(s: &str, fill: &str, max: usize) -> String {
    padding(s, fill, PadSide::Left, max)
}

/// Same as [`padding`] with [`PadSide::Right`].
#[must_use]
pub fn padding_right(s: &str, fill: &str, max: usize) -> String {
    padding(s, fill, PadSide::Right, max)
}

/// Same as [`padding`] with [`PadSide::Both`].
#[must_use]
pub fn padding_both(s: &str, fill: &str, max: usize) -> String {
    padding(s, fill, PadSide::Both, max)
}

/// Applies `f` to the first character of every word. Words are separated by
/// ASCII whitespace (`\t`, `\n`, `\v`, `\f`, `\r`, space).
fn map_first_letters(s: &str, f: impl Fn(char) -> char) -> String {
    let mut at_word_start = true;
    s.chars()
        .map(|c| {
            let c = if at_word_start { f(c) } else { c };
            at_word_start = matches!(c, '\t'..='\r' | ' ');
            c
        })
        .collect()
}

/// Lowercases the first ASCII letter of each word.
///
/// # Examples
///
/// ```rust
/// use strproc::lower_case_first_words;
///
/// assert_eq!(
///     lower_case_first_words("LIFE ISN'T ALWAYS WHAT ONE LIKE."),
///     "lIFE iSN'T aLWAYS wHAT oNE lIKE."
/// );
/// ```
#[must_use]
pub fn lower_case_first_words(s: &str) -> String {
    map_first_letters(s, |c| c.to_ascii_lowercase())
}

/// Uppercases the first ASCII letter of each word.
///
/// # Examples
///
/// ```rust
/// use strproc::upper_case_first_words;
///
/// assert_eq!(
///     upper_case_first_words("life isn't always what one like."),
///     "Life Isn't Always What One Like."
/// );
/// ```
#[must_use]
pub fn upper_case_first_words(s: &str) -> String {
    map_first_letters(s, |c| c.to_ascii_uppercase())
}

/// Swaps the case of the first ASCII letter of each word.
#[must_use]
pub fn swap_case_first_words(s: &str) -> String {
    map_first_letters(s, |c| {
        if c.is_ascii_uppercase() {
            c.to_ascii_lowercase()
        } else {
            c.to_ascii_uppercase()
        }
    })
}

/// Reverses `s` character by character.
///
/// # Examples
///
/// ```rust
/// use strproc::reverse_str;
///
/// assert_eq!(reverse_str("가나다라마바사"), "사바마라다나가");
/// ```
#[must_use]
pub fn reverse_str(s: &str) -> String {
    s.chars().rev().collect()
}

/// Reverses `s` byte by byte when it is pure ASCII, otherwise by character.
#[must_use]
pub fn reverse_normal_str(s: &str) -> String {
    if !s.is_ascii() {
        return reverse_str(s);
    }
    let bytes: Vec<u8> = s.bytes().rev().collect();
    // Reversed ASCII is still ASCII.
    String::from_utf8(bytes).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slashes_multibyte() {
        assert_eq!(add_slashes(r"대한\민국만세"), r"대한\\민국만세");
        assert_eq!(add_slashes(r"대한\\민국만세"), r"대한\\민국만세");
        assert_eq!(strip_slashes(r"대한\\\\민국만세"), r"대한\\민국만세");
        assert_eq!(strip_slashes("a\\bcdefgz"), "abcdefgz");
    }

    #[test]
    fn test_nl2br_pairs() {
        assert_eq!(nl2br("대한민국만세\n\r"), "대한민국만세<br />");
        assert_eq!(nl2br("abcdefgh\r\n"), "abcdefgh<br />");
        assert_eq!(nl2br("a\n\n\nb"), "a<br /><br />b");
    }

    #[test]
    fn test_wrap_counts_bytes() {
        let korean = "가 나 다 라 마 바 사 아 자 차 카 타 파 하";
        assert_eq!(
            word_wrap_simple(korean, 3, "*").unwrap(),
            "가*나*다*라*마*바*사*아*자*차*카*타*파*하"
        );
        assert_eq!(
            word_wrap_around(korean, 5, "-").unwrap(),
            "가 나-다-라-마 바-사-아-자-차 카-타-파-하"
        );
    }

    #[test]
    fn test_wrap_rejects_zero_width() {
        assert!(matches!(
            word_wrap_simple("a b", 0, "*"),
            Err(Error::InvalidInput(_))
        ));
        assert!(word_wrap_around("a b", 0, "*").is_err());
    }

    #[test]
    fn test_padding_edges() {
        assert_eq!(padding_right("abc", "*", 2), "abc");
        assert_eq!(padding_left("abc", "", 10), "abc");
        assert_eq!(padding_both("가나다라마바사아자차카타파하", "*", 48).len(), 48);
        // "é" is two bytes and cannot fit in the last remaining byte.
        assert_eq!(padding_right("ab", "é", 5), "abé");
    }

    #[test]
    fn test_case_first_words_ignores_non_ascii() {
        assert_eq!(upper_case_first_words("가나다 라 마 바사아brownd 가나"), "가나다 라 마 바사아brownd 가나");
        assert_eq!(
            swap_case_first_words("o sAY, cAN yOU sEE"),
            "O SAY, CAN YOU SEE"
        );
        assert_eq!(upper_case_first_words("a\tb\nc"), "A\tB\nC");
    }

    #[test]
    fn test_reverse() {
        assert_eq!(reverse_normal_str("abcdefg"), "gfedcba");
        assert_eq!(reverse_normal_str("あいうえお"), "おえういあ");
        assert_eq!(reverse_str("天地玄黃宇宙洪荒"), "荒洪宙宇黃玄地天");
    }
}

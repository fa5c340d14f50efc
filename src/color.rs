//! Color-code translation for operator-facing message strings.
//!
//! Settings files carry colors as `&`-prefixed tokens (`&c`, `&8`) because
//! the display code character is awkward to type in a text editor. The
//! loader resolves those tokens to display codes once at load time and
//! writes the resolved form back.

/// Display-code escape character used by the game chat protocol.
pub const COLOR_CHAR: char = '\u{a7}';

/// Characters recognized as color or formatting codes after `&`.
const CODE_CHARS: &str = "0123456789abcdefklmnor";

/// Translates `&`-prefixed color tokens to display codes.
///
/// Recognizes `&0`-`&9`, `&a`-`&f`, `&k`-`&o` and `&r`, case-insensitively.
/// Unrecognized pairs and a trailing `&` pass through unchanged.
///
/// # Examples
///
/// ```
/// use skywars_config::color::translate_codes;
///
/// assert_eq!(translate_codes("&cSkyWars"), "\u{a7}cSkyWars");
/// assert_eq!(translate_codes("tom & jerry"), "tom & jerry");
/// ```
#[must_use]
pub fn translate_codes(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut chars = input.chars().peekable();
    while let Some(current) = chars.next() {
        if current == '&' {
            match chars.peek() {
                Some(&next) if CODE_CHARS.contains(next.to_ascii_lowercase()) => {
                    chars.next();
                    out.push(COLOR_CHAR);
                    out.push(next.to_ascii_lowercase());
                }
                _ => out.push(current),
            }
        } else {
            out.push(current);
        }
    }
    out
}

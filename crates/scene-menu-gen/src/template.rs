//! Fixed-slot placeholder substitution for the generated C# source.

/// A named placeholder in one of the fixed templates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot {
    /// Quoted menu path literal.
    Menu,
    /// Scene name plus action suffix, used in the function identifier.
    Name,
    /// Quoted scene path literal.
    Path,
    /// Menu priority literal.
    Priority,
    /// Concatenated method bodies inside the outer class.
    Methods,
}

impl Slot {
    /// The literal token that marks this slot in a template.
    pub const fn token(self) -> &'static str {
        match self {
            Slot::Menu => "#SCENEMENU#",
            Slot::Name => "#SCENENAME#",
            Slot::Path => "#SCENEPATH#",
            Slot::Priority => "#PRIORITY#",
            Slot::Methods => "#METHODS#",
        }
    }
}

/// Replace every slot token in `template` with its value.
///
/// Single left-to-right pass: substituted values are copied verbatim and
/// never scanned for further tokens. Tokens without a value and stray `#`
/// characters are kept as-is.
pub fn fill(template: &str, values: &[(Slot, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    'scan: while let Some(start) = rest.find('#') {
        out.push_str(&rest[..start]);
        let tail = &rest[start..];

        for &(slot, value) in values {
            let token = slot.token();
            if tail.starts_with(token) {
                out.push_str(value);
                rest = &tail[token.len()..];
                continue 'scan;
            }
        }

        out.push('#');
        rest = &tail[1..];
    }

    out.push_str(rest);
    out
}

/// Quote `s` as a C# regular string literal.
pub fn csharp_string_literal(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    for ch in s.chars() {
        match ch {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            _ => out.push(ch),
        }
    }
    out.push('"');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fill_all_slots() {
        let out = fill(
            "[#SCENEMENU#] Open_#SCENENAME#(#SCENEPATH#, #PRIORITY#)",
            &[
                (Slot::Menu, "\"Scenes/Main\""),
                (Slot::Name, "Main_Add"),
                (Slot::Path, "\"Assets/Main.unity\""),
                (Slot::Priority, "12"),
            ],
        );
        assert_eq!(
            out,
            "[\"Scenes/Main\"] Open_Main_Add(\"Assets/Main.unity\", 12)"
        );
    }

    #[test]
    fn test_fill_repeated_token() {
        let out = fill("#SCENENAME#/#SCENENAME#", &[(Slot::Name, "A")]);
        assert_eq!(out, "A/A");
    }

    #[test]
    fn test_fill_does_not_rescan_values() {
        // A path that happens to contain a token must come through untouched.
        let out = fill(
            "#SCENEPATH# #PRIORITY#",
            &[(Slot::Path, "a#PRIORITY#b"), (Slot::Priority, "23")],
        );
        assert_eq!(out, "a#PRIORITY#b 23");
    }

    #[test]
    fn test_fill_keeps_unknown_tokens_and_stray_hashes() {
        let out = fill("# #OTHER# #METHODS##", &[(Slot::Methods, "x")]);
        assert_eq!(out, "# #OTHER# x#");
    }

    #[test]
    fn test_csharp_string_literal_escapes() {
        assert_eq!(csharp_string_literal("Assets/Main.unity"), "\"Assets/Main.unity\"");
        assert_eq!(csharp_string_literal(r#"a"b\c"#), r#""a\"b\\c""#);
    }
}

//! Parsing of `#[env("...")]` tag strings.

/// Directive naming the default literal, matched case-insensitively.
const DEFAULT_DIRECTIVE: &str = "default";

/// A parsed field tag, e.g. `"KEY1,KEY2,default=value"`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Tag {
    /// Lookup keys in declaration order.
    pub keys: Vec<String>,

    /// Default literal:
    /// - `None`: no `default=` directive
    /// - `Some("")`: an explicit empty default
    pub default: Option<String>,
}

impl Tag {
    /// Parse a raw tag string.
    ///
    /// Segments are separated by `,`. A segment containing `=` is a
    /// directive; only `default` is recognized and everything after its
    /// first `=` is the literal. Other directives are ignored.
    pub fn parse(raw: &str) -> Self {
        let mut tag = Self::default();

        for segment in raw.split(',') {
            if let Some((name, value)) = segment.split_once('=') {
                if name.eq_ignore_ascii_case(DEFAULT_DIRECTIVE) {
                    tag.default = Some(value.to_string());
                }
                continue;
            }
            tag.keys.push(segment.to_string());
        }

        tag
    }

    /// The key that is looked up in the snapshot.
    ///
    /// Only the first declared key is consulted; further keys are recorded
    /// but never used for lookup.
    pub fn primary(&self) -> Option<&str> {
        self.keys.first().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_single_key() {
        let tag = Tag::parse("HOME");
        assert_eq!(tag.keys, vec!["HOME"]);
        assert_eq!(tag.primary(), Some("HOME"));
        assert_eq!(tag.default, None);
    }

    #[test]
    fn test_parse_default() {
        let tag = Tag::parse("MISSING_STRING,default=found");
        assert_eq!(tag.primary(), Some("MISSING_STRING"));
        assert_eq!(tag.default.as_deref(), Some("found"));
    }

    #[test]
    fn test_parse_default_keeps_later_equals() {
        let tag = Tag::parse("MISSING_KVSTRING,default=key=value");
        assert_eq!(tag.default.as_deref(), Some("key=value"));
    }

    #[test]
    fn test_parse_default_is_case_insensitive() {
        let tag = Tag::parse("KEY,DEFAULT=x");
        assert_eq!(tag.default.as_deref(), Some("x"));

        let tag = Tag::parse("KEY,Default=y");
        assert_eq!(tag.default.as_deref(), Some("y"));
    }

    #[test]
    fn test_parse_empty_default_is_present() {
        let tag = Tag::parse("KEY,default=");
        assert_eq!(tag.default.as_deref(), Some(""));
    }

    #[test]
    fn test_parse_unknown_directive_ignored() {
        let tag = Tag::parse("KEY,required=true");
        assert_eq!(tag.keys, vec!["KEY"]);
        assert_eq!(tag.default, None);
    }

    #[test]
    fn test_parse_multiple_keys_first_is_primary() {
        let tag = Tag::parse("MISSING_1,PRESENT,default=present");
        assert_eq!(tag.keys, vec!["MISSING_1", "PRESENT"]);
        assert_eq!(tag.primary(), Some("MISSING_1"));
        assert_eq!(tag.default.as_deref(), Some("present"));
    }

    #[test]
    fn test_parse_default_only_has_no_primary() {
        let tag = Tag::parse("default=x");
        assert_eq!(tag.primary(), None);
        assert_eq!(tag.default.as_deref(), Some("x"));
    }
}

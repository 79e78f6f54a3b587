//! Placeholder token syntax and placeholder-name extraction.

use std::collections::BTreeSet;
use std::ops::Range;

use serde::{
    Deserialize,
    Serialize,
};

/// Bracket style delimiting placeholder tokens in a template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PlaceholderStyle {
    /// `{name}`
    Single,
    /// `{{name}}`
    #[default]
    Double,
}

impl PlaceholderStyle {
    #[must_use]
    pub const fn open(self) -> &'static str {
        match self {
            Self::Single => "{",
            Self::Double => "{{",
        }
    }

    #[must_use]
    pub const fn close(self) -> &'static str {
        match self {
            Self::Single => "}",
            Self::Double => "}}",
        }
    }

    /// Builds the exact token string for `name`.
    ///
    /// ```
    /// use msg_translator::PlaceholderStyle;
    ///
    /// assert_eq!(PlaceholderStyle::Double.token("name"), "{{name}}");
    /// assert_eq!(PlaceholderStyle::Single.token("name"), "{name}");
    /// ```
    #[must_use]
    pub fn token(self, name: &str) -> String {
        format!("{}{name}{}", self.open(), self.close())
    }

    /// Byte range of the first exact occurrence of the token for `name`.
    ///
    /// An occurrence directly preceded by `{` or followed by `}` belongs to a
    /// wider brace group and is skipped, so `{name}` never matches inside
    /// `{{name}}`.
    #[must_use]
    pub fn find_token(self, template: &str, name: &str) -> Option<Range<usize>> {
        let token = self.token(name);
        template
            .match_indices(token.as_str())
            .map(|(start, matched)| start..start + matched.len())
            .find(|range| {
                let wrapped_before =
                    template.get(..range.start).is_some_and(|before| before.ends_with('{'));
                let wrapped_after =
                    template.get(range.end..).is_some_and(|after| after.starts_with('}'));
                !wrapped_before && !wrapped_after
            })
    }
}

impl std::str::FromStr for PlaceholderStyle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "single" => Ok(Self::Single),
            "double" => Ok(Self::Double),
            other => Err(format!("unknown placeholder style '{other}' (expected single or double)")),
        }
    }
}

/// Collects the placeholder names declared by `template`.
///
/// Scans left to right: the text between the first opening delimiter and the
/// first closing delimiter after it is a name, then scanning resumes after that
/// closing delimiter. Duplicate names collapse. An opening delimiter without a
/// matching close ends the scan.
///
/// ```
/// use msg_translator::{PlaceholderStyle, placeholder_names};
///
/// let names = placeholder_names("{{a}} and {{b}}, again {{a}}", PlaceholderStyle::Double);
/// assert_eq!(names.into_iter().collect::<Vec<_>>(), vec!["a", "b"]);
/// ```
#[must_use]
pub fn placeholder_names(template: &str, style: PlaceholderStyle) -> BTreeSet<&str> {
    let mut names = BTreeSet::new();
    let mut rest = template;

    while let Some((_, after_open)) = rest.split_once(style.open()) {
        let Some((name, after_close)) = after_open.split_once(style.close()) else {
            break;
        };
        names.insert(name);
        rest = after_close;
    }

    names
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use googletest::prelude::*;
    use rstest::*;

    use super::*;

    fn names(template: &str, style: PlaceholderStyle) -> Vec<&str> {
        placeholder_names(template, style).into_iter().collect()
    }

    #[rstest]
    #[case::none("Hello world", vec![])]
    #[case::single_name("Hi {{name}}!", vec!["name"])]
    #[case::two_names("{{greeting}}, {{name}}", vec!["greeting", "name"])]
    #[case::duplicates_collapse("{{n}} and {{n}}", vec!["n"])]
    #[case::unterminated("Hi {{name", vec![])]
    #[case::after_unterminated("{{a}} then {{b", vec!["a"])]
    #[case::single_braces_ignored("Hi {name}", vec![])]
    #[case::empty_name("{{}}", vec![""])]
    fn double_style_names(#[case] template: &str, #[case] expected: Vec<&str>) {
        assert_eq!(names(template, PlaceholderStyle::Double), expected);
    }

    #[rstest]
    #[case::single_name("Hi {name}!", vec!["name"])]
    #[case::two_names("{a}-{b}", vec!["a", "b"])]
    #[case::double_read_as_single("{{name}}", vec!["{name"])]
    fn single_style_names(#[case] template: &str, #[case] expected: Vec<&str>) {
        assert_eq!(names(template, PlaceholderStyle::Single), expected);
    }

    #[rstest]
    #[case::single_exact(PlaceholderStyle::Single, "Hi {name}!", Some(3..9))]
    #[case::single_inside_double(PlaceholderStyle::Single, "Hi {{name}}!", None)]
    #[case::single_after_double(PlaceholderStyle::Single, "{{name}} / {name}", Some(11..17))]
    #[case::double_exact(PlaceholderStyle::Double, "Hi {{name}}!", Some(3..11))]
    #[case::double_inside_triple(PlaceholderStyle::Double, "{{{name}}}", None)]
    #[case::adjacent_tokens(PlaceholderStyle::Single, "{a}{name}", Some(3..9))]
    #[case::absent(PlaceholderStyle::Double, "Hello", None)]
    fn find_token_matches_exact_style(
        #[case] style: PlaceholderStyle,
        #[case] template: &str,
        #[case] expected: Option<Range<usize>>,
    ) {
        assert_eq!(style.find_token(template, "name"), expected);
    }

    #[rstest]
    fn style_deserializes_from_lowercase() {
        let style: PlaceholderStyle = serde_json::from_str(r#""single""#).unwrap();

        assert_that!(style, eq(PlaceholderStyle::Single));
        assert_that!(PlaceholderStyle::default(), eq(PlaceholderStyle::Double));
    }

    #[rstest]
    fn style_parses_from_str() {
        assert_eq!("double".parse::<PlaceholderStyle>(), Ok(PlaceholderStyle::Double));

        let error = "curly".parse::<PlaceholderStyle>().unwrap_err();
        assert_that!(error, contains_substring("curly"));
    }
}

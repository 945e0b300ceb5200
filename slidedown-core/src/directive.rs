//! Metadata line classification.
//!
//! A directive is a line that starts with one of a fixed set of prefixes.
//! The prefixes are checked in table order and every prefix that matches
//! fires, so a single line could in principle feed more than one field.
//! With the built-in table no two prefixes can match the same line.

/// Slide field a directive writes to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Title,
    Subtitle,
    Class,
    /// Appended rather than overwritten
    Note,
    Image,
    BackgroundImage,
    /// Boolean; only fires when the value mentions `true`
    BuildLists,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Directive {
    pub prefix: &'static str,
    pub field: Field,
}

/// Recognized prefixes in precedence order
pub const DIRECTIVES: &[Directive] = &[
    Directive { prefix: "title:", field: Field::Title },
    Directive { prefix: "subtitle:", field: Field::Subtitle },
    Directive { prefix: "# ", field: Field::Title },
    Directive { prefix: "## ", field: Field::Subtitle },
    Directive { prefix: "* ", field: Field::Title },
    Directive { prefix: "** ", field: Field::Subtitle },
    Directive { prefix: "class:", field: Field::Class },
    Directive { prefix: "note:", field: Field::Note },
    Directive { prefix: "image:", field: Field::Image },
    Directive { prefix: "background:", field: Field::BackgroundImage },
    Directive { prefix: "!build_lists:", field: Field::BuildLists },
];

const CLASS_PREFIX: &str = "class:";
const SEGUE_TOKEN: &str = "segue";
const BUILD_TOKEN: &str = "true";

/// A directive that fired on a line, with its trimmed value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DirectiveMatch<'a> {
    pub field: Field,
    pub value: &'a str,
}

impl Directive {
    /// Value of this directive on `line`, or `None` when it does not fire
    pub fn apply<'a>(&self, line: &'a str) -> Option<&'a str> {
        let rest = line.strip_prefix(self.prefix)?;
        if self.field == Field::BuildLists && !rest.contains(BUILD_TOKEN) {
            return None;
        }
        Some(rest.trim_matches(' '))
    }
}

/// Run every directive in the table against `line`.
///
/// An empty result means the line is body text.
pub fn classify(line: &str) -> Vec<DirectiveMatch<'_>> {
    classify_with(DIRECTIVES, line)
}

/// Same as [`classify`] against a custom table
pub fn classify_with<'a>(table: &[Directive], line: &'a str) -> Vec<DirectiveMatch<'a>> {
    table
        .iter()
        .filter_map(|directive| {
            directive.apply(line).map(|value| DirectiveMatch {
                field: directive.field,
                value,
            })
        })
        .collect()
}

/// Whether `line` is a `class:` directive naming a segue
pub fn is_segue(line: &str) -> bool {
    line.strip_prefix(CLASS_PREFIX)
        .map(|rest| rest.trim_matches(' ').contains(SEGUE_TOKEN))
        .unwrap_or(false)
}

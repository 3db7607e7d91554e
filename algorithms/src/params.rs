//! Custom-parameter argument parsing for batch export.
//!
//! The host hands the filter its custom parameter as a list of
//! arguments where the first item is the filter name. The last argument
//! may restrict the glyph set with an `include:` or `exclude:` prefix
//! followed by comma-separated glyph names.

/// Which glyphs a batch invocation applies to.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GlyphScope {
    All,
    Include(Vec<String>),
    Exclude(Vec<String>),
}

impl GlyphScope {
    /// Parses the scope from a full argument list.
    ///
    /// Only the last argument is inspected for a glyph list, and only
    /// when it is not the sole (filter name) argument.
    pub fn from_arguments(arguments: &[&str]) -> Self {
        match arguments.last() {
            Some(last) if arguments.len() > 1 => Self::parse(last),
            _ => GlyphScope::All,
        }
    }

    /// Parses one `include:`/`exclude:` argument; anything else is `All`.
    pub fn parse(argument: &str) -> Self {
        if argument.contains("exclude:") {
            GlyphScope::Exclude(glyph_names(&argument.replace("exclude:", "")))
        } else if argument.contains("include:") {
            GlyphScope::Include(glyph_names(&argument.replace("include:", "")))
        } else {
            GlyphScope::All
        }
    }

    /// Whether the named glyph is in scope.
    pub fn allows(&self, name: &str) -> bool {
        match self {
            GlyphScope::All => true,
            GlyphScope::Include(names) => names.iter().any(|n| n == name),
            GlyphScope::Exclude(names) => !names.iter().any(|n| n == name),
        }
    }
}

fn glyph_names(list: &str) -> Vec<String> {
    list.split(',')
        .map(|name| name.trim().to_string())
        .filter(|name| !name.is_empty())
        .collect()
}

#[test]
fn parse_include() {
    let scope = GlyphScope::parse("include: A, B.alt ,C");
    assert_eq!(
        scope,
        GlyphScope::Include(vec!["A".to_string(), "B.alt".to_string(), "C".to_string()])
    );
    assert!(scope.allows("A"));
    assert!(scope.allows("B.alt"));
    assert!(!scope.allows("D"));
}

#[test]
fn parse_exclude() {
    let scope = GlyphScope::parse("exclude: space,period");
    assert_eq!(
        scope,
        GlyphScope::Exclude(vec!["space".to_string(), "period".to_string()])
    );
    assert!(!scope.allows("space"));
    assert!(scope.allows("A"));
}

#[test]
fn no_prefix_means_all() {
    assert_eq!(GlyphScope::parse("0.5"), GlyphScope::All);
    assert!(GlyphScope::All.allows("anything"));
}

#[test]
fn from_argument_list() {
    assert_eq!(
        GlyphScope::from_arguments(&["MakeCorner"]),
        GlyphScope::All
    );
    assert_eq!(
        GlyphScope::from_arguments(&["MakeCorner", "include: A"]),
        GlyphScope::Include(vec!["A".to_string()])
    );
    assert_eq!(GlyphScope::from_arguments(&[]), GlyphScope::All);
}

pub mod identifier;

use std::fmt;

pub use identifier::is_qualified_name;

/// A class name split into its package and simple name
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ClassName {
    pub package: Option<String>,
    pub name: String,
}

impl ClassName {
    /// Split a trimmed line at its last dot.
    ///
    /// Example: `"com.acme.FooBar"` -> package `com.acme`, name `FooBar`
    pub fn parse(input: &str) -> Self {
        let trimmed = input.trim();

        match trimmed.rfind('.') {
            Some(idx) => Self {
                package: Some(trimmed[..idx].to_string()),
                name: trimmed[idx + 1..].to_string(),
            },
            None => Self {
                package: None,
                name: trimmed.to_string(),
            },
        }
    }

    pub fn qualified_name(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for ClassName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.package {
            Some(package) => write!(f, "{}.{}", package, self.name),
            None => write!(f, "{}", self.name),
        }
    }
}

/// Extract the valid class names from a list of lines
pub fn parse_lines(content: &str) -> Vec<ClassName> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| is_qualified_name(line))
        .map(ClassName::parse)
        .filter(|class| !class.name.trim().is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_and_restore_qualified_name() {
        let cases = [
            ("a.b.FooBarBaz", "a.b.FooBarBaz"),
            ("codeborne.MindReader", "codeborne.MindReader"),
            ("FooBarBaz", "FooBarBaz"),
            ("a.b.", "a.b."),
            (".FooBarBaz", ".FooBarBaz"),
            ("     FooBarBaz     ", "FooBarBaz"),
        ];
        for (input, expected) in cases {
            assert_eq!(ClassName::parse(input).qualified_name(), expected);
        }
    }

    #[test]
    fn test_parse_parts() {
        let class = ClassName::parse("com.acme.FooBar");
        assert_eq!(class.package.as_deref(), Some("com.acme"));
        assert_eq!(class.name, "FooBar");

        let class = ClassName::parse("FooBar");
        assert_eq!(class.package, None);
        assert_eq!(class.name, "FooBar");
    }

    #[test]
    fn test_parse_lines_filters_invalid() {
        let content = "a.b.FooBarBaz\n  c.d.FooBar  \n\nnot a class\na.b.\nclass\n1.Foo\nWidget\n";
        let classes = parse_lines(content);
        let names: Vec<String> = classes.iter().map(ClassName::qualified_name).collect();
        assert_eq!(names, vec!["a.b.FooBarBaz", "c.d.FooBar", "Widget"]);
    }
}

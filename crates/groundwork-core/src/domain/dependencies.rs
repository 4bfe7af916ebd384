//! Dependency-specification formatting.
//!
//! A dependency spec arrives as one whitespace-separated string, e.g.
//! `"pytest matplotlib~=3.7"`. The internal format of each requirement is
//! opaque to this module; no validation is performed on tokens.

/// Split a raw spec string into its requirement tokens.
///
/// Runs of whitespace collapse; leading/trailing whitespace is ignored.
/// Empty or whitespace-only input yields an empty sequence, not an error.
pub fn split_spec(spec: &str) -> Vec<&str> {
    spec.split_whitespace().collect()
}

/// Format a dependency spec as manifest list lines.
///
/// Each token becomes a line of the exact shape `    "<token>",\n`
/// (four-space indent, double-quoted, trailing comma), concatenated in the
/// original order. Empty input yields the empty string.
pub fn format_dependency_lines(spec: &str) -> String {
    split_spec(spec)
        .iter()
        .map(|dep| format!("    \"{dep}\",\n"))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_and_whitespace_inputs_format_to_nothing() {
        assert_eq!(format_dependency_lines(""), "");
        assert_eq!(format_dependency_lines(" "), "");
        assert_eq!(format_dependency_lines(" \t\n "), "");
    }

    #[test]
    fn tokens_become_quoted_indented_lines_in_order() {
        let out = format_dependency_lines("pytest matplotlib~=3.7 black!=1.2.3");
        assert_eq!(
            out,
            "    \"pytest\",\n    \"matplotlib~=3.7\",\n    \"black!=1.2.3\",\n"
        );
    }

    #[test]
    fn line_count_matches_token_count() {
        let spec = "a b==1 c>=2 d~=3.7 e";
        let out = format_dependency_lines(spec);
        assert_eq!(out.lines().count(), 5);
        for (line, token) in out.lines().zip(split_spec(spec)) {
            assert_eq!(line, format!("    \"{token}\","));
        }
    }

    #[test]
    fn whitespace_runs_collapse() {
        let out = format_dependency_lines("  pytest \t  numpy  ");
        assert_eq!(out, "    \"pytest\",\n    \"numpy\",\n");
    }
}

//! Filename parsing for the `<prefix>_<YYYY>.svg` convention.
//!
//! An assets directory holds one aggregate file plus any number of per-year
//! files, all sharing a prefix:
//!
//! ```text
//! assets/
//! ├── github.svg          # aggregate ("Total"), required
//! ├── github_2023.svg     # year 2023
//! ├── github_2024.svg     # year 2024
//! ├── github_v2.svg       # ignored: not a year
//! └── github_12345.svg    # ignored: not four digits
//! ```
//!
//! The year part is exactly four ASCII digits and the extension is exactly
//! lowercase `.svg`. Anything else is not a year file.

/// Extension shared by the aggregate and year files.
pub const SVG_EXTENSION: &str = ".svg";

/// Filename of the aggregate file for a prefix (`github` → `github.svg`).
pub fn aggregate_filename(prefix: &str) -> String {
    format!("{prefix}{SVG_EXTENSION}")
}

/// Extract the year from a `<prefix>_<YYYY>.svg` filename.
///
/// - `"github_2024.svg"` → `Some("2024")`
/// - `"github.svg"` → `None` (aggregate, not a year)
/// - `"github_v2.svg"` → `None`
/// - `"github_12345.svg"` → `None`
/// - `"github_2024.SVG"` → `None`
pub fn parse_year_filename<'a>(prefix: &str, filename: &'a str) -> Option<&'a str> {
    let year = filename
        .strip_prefix(prefix)?
        .strip_prefix('_')?
        .strip_suffix(SVG_EXTENSION)?;
    is_year_token(year).then_some(year)
}

/// True when `s` is exactly four ASCII digits.
pub fn is_year_token(s: &str) -> bool {
    s.len() == 4 && s.bytes().all(|b| b.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn year_file_parses() {
        assert_eq!(parse_year_filename("github", "github_2024.svg"), Some("2024"));
    }

    #[test]
    fn leading_zero_year_parses() {
        assert_eq!(parse_year_filename("github", "github_0999.svg"), Some("0999"));
    }

    #[test]
    fn aggregate_is_not_a_year() {
        assert_eq!(parse_year_filename("github", "github.svg"), None);
    }

    #[test]
    fn non_numeric_suffix_rejected() {
        assert_eq!(parse_year_filename("github", "github_v2.svg"), None);
        assert_eq!(parse_year_filename("github", "github_20a4.svg"), None);
    }

    #[test]
    fn wrong_digit_count_rejected() {
        assert_eq!(parse_year_filename("github", "github_12345.svg"), None);
        assert_eq!(parse_year_filename("github", "github_999.svg"), None);
    }

    #[test]
    fn extension_is_case_sensitive() {
        assert_eq!(parse_year_filename("github", "github_2024.SVG"), None);
        assert_eq!(parse_year_filename("github", "github_2024.svg.bak"), None);
    }

    #[test]
    fn separator_must_be_underscore() {
        assert_eq!(parse_year_filename("github", "github-2024.svg"), None);
        assert_eq!(parse_year_filename("github", "github2024.svg"), None);
    }

    #[test]
    fn other_prefix_does_not_match() {
        assert_eq!(parse_year_filename("github", "gitlab_2024.svg"), None);
        assert_eq!(parse_year_filename("strava", "strava_2021.svg"), Some("2021"));
    }

    #[test]
    fn unicode_digits_are_not_years() {
        // Arabic-Indic digits
        assert_eq!(parse_year_filename("github", "github_٢٠٢٤.svg"), None);
    }

    #[test]
    fn aggregate_filename_from_prefix() {
        assert_eq!(aggregate_filename("github"), "github.svg");
        assert_eq!(aggregate_filename("strava"), "strava.svg");
    }
}

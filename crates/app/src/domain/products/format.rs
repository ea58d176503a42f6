//! Display helpers for product pages.

use jiff::{Timestamp, tz::TimeZone};

/// Capitalise the first letter of each space-separated word.
#[must_use]
pub fn title_case(input: &str) -> String {
    input
        .split(' ')
        .map(|word| {
            let mut chars = word.chars();

            chars.next().map_or_else(String::new, |first| {
                first.to_uppercase().chain(chars).collect()
            })
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Posting date in long form, e.g. `January 1, 2024`.
#[must_use]
pub fn posted_on(created: Timestamp) -> String {
    created
        .to_zoned(TimeZone::UTC)
        .strftime("%B %-d, %Y")
        .to_string()
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    #[test]
    fn title_case_capitalises_each_word() {
        assert_eq!(title_case("like new"), "Like New");
        assert_eq!(title_case("navy blue"), "Navy Blue");
        assert_eq!(title_case("éclair"), "Éclair");
    }

    #[test]
    fn title_case_keeps_spacing() {
        assert_eq!(title_case(""), "");
        assert_eq!(title_case("a  b"), "A  B");
    }

    #[test]
    fn posted_on_uses_long_month() -> TestResult {
        assert_eq!(posted_on("2024-01-01T00:00:00Z".parse()?), "January 1, 2024");
        assert_eq!(posted_on("2023-11-25T23:59:59Z".parse()?), "November 25, 2023");

        Ok(())
    }
}

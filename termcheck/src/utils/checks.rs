//! # Check factories and combinators
//!
//! Every function here builds a [`Check`] without evaluating anything.
//! Factories that take a caller-written regex return a [`Result`] so a
//! malformed pattern is reported at construction, never at input time.
//!
//! ## Examples
//!
//! ### Choose between options
//! ```rust
//! use termcheck::utils::{Validate, checks};
//!
//! let answer = checks::custom(checks::is(["quick", "deep"]), "quick or deep?");
//! assert!(answer.validate("Deep").is_ok());
//! assert_eq!(answer.validate("full").unwrap_err().to_string(), "quick or deep?");
//! ```
//!
//! ### Compose
//! ```rust
//! use termcheck::utils::{Validate, checks};
//!
//! # fn main() -> Result<(), termcheck::Error> {
//! // A hex byte or the word "none"
//! let byte = checks::any([
//!     checks::consists_of("0-9a-fA-F")?,
//!     checks::is(["none"]),
//! ]);
//! let two_chars = checks::length(2);
//!
//! assert!(byte.validate("ff").is_ok() && two_chars.validate("ff").is_ok());
//! assert!(byte.validate("NONE").is_ok());
//! assert!(checks::inverse(two_chars).validate("fff").is_ok());
//! # Ok(())
//! # }
//! ```

use crate::utils::check::{Check, FullMatch};
use crate::utils::error::{Error, Result};
use crate::utils::numeric::Numeric;
use regex::Regex;

/// Accepts when the candidate equals one of `options`, ignoring case.
pub fn is<I, S>(options: I) -> Check
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    is_cased(options, false)
}

/// Like [`is`], with an explicit case policy.
pub fn is_cased<I, S>(options: I, case_sensitive: bool) -> Check
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    Check::Is {
        options: options.into_iter().map(Into::into).collect(),
        case_sensitive,
    }
}

/// Accepts when the whole candidate matches `pattern`.
///
/// # Errors
///
/// Returns [`Error::Pattern`] when `pattern` does not compile.
pub fn matches_regex(pattern: &str) -> Result<Check> {
    let anchored = format!("^(?:{})$", pattern);
    let regex = Regex::new(&anchored).map_err(|source| Error::Pattern {
        pattern: pattern.to_string(),
        source,
    })?;
    Ok(Check::Pattern(FullMatch::anchored(regex)))
}

/// Full-match check from an already compiled regex, keeping the flags it was
/// built with.
///
/// The leftmost match has to span the whole candidate. With alternations
/// where an earlier branch is a prefix of a later one (`a|ab`), put the
/// longer branch first or anchor the pattern yourself.
pub fn matches(regex: &Regex) -> Check {
    Check::Pattern(FullMatch::unanchored(regex.clone()))
}

/// Accepts candidates of exactly `n` characters, none of them a line break.
pub fn length(n: usize) -> Check {
    Check::Length(n)
}

/// Accepts non-empty candidates made only of characters from `charset`.
///
/// `charset` is the body of a regex character class, so ranges such as
/// `"a-z0-9"` work and `]`, `\` or `^` need escaping.
///
/// # Errors
///
/// Returns [`Error::Pattern`] when `[charset]` is not a valid class.
pub fn consists_of(charset: &str) -> Result<Check> {
    matches_regex(&format!("[{}]+", charset))
}

/// Accepts literals of the numeric type `T`.
///
/// ```rust
/// use termcheck::utils::{Validate, checks};
///
/// assert!(checks::numeric::<i64>().validate("-12").is_ok());
/// assert!(checks::numeric::<u64>().validate("-12").is_err());
/// assert!(checks::numeric::<f32>().validate("1.5").is_ok());
/// assert!(checks::numeric::<f32>().validate("1").is_err());
/// ```
pub fn numeric<T: Numeric>() -> Check {
    Check::Numeric(T::KIND)
}

/// Accepts literals of `T` whose value lies in `[min, max]`.
pub fn range<T: Numeric>(min: T, max: T) -> Check {
    Check::Range {
        kind: T::KIND,
        min: min.to_number(),
        max: max.to_number(),
    }
}

/// [`range`] with no upper bound beyond `T::MAX`.
pub fn range_from<T: Numeric>(min: T) -> Check {
    range(min, T::MAX)
}

/// [`range`] with no lower bound beyond `T::MIN`.
pub fn range_to<T: Numeric>(max: T) -> Check {
    range(T::MIN, max)
}

/// [`range`] over every representable value of `T`: the literal must parse
/// without overflowing.
pub fn numeric_range<T: Numeric>() -> Check {
    range(T::MIN, T::MAX)
}

/// Replaces the rejection message of `check`.
pub fn custom(check: Check, message: impl Into<String>) -> Check {
    Check::Custom {
        check: Box::new(check),
        message: message.into(),
    }
}

/// Accepts exactly what `check` rejects.
pub fn inverse(check: Check) -> Check {
    Check::Inverse(Box::new(check))
}

/// Accepts when any of `checks` accepts, trying them in order. Rejections
/// from the inner checks are replaced by the generic message.
pub fn any<I>(checks: I) -> Check
where
    I: IntoIterator<Item = Check>,
{
    Check::Any(checks.into_iter().collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::check::Validate;
    use pretty_assertions::assert_eq;
    use rand::rngs::SmallRng;
    use rand::{Rng, SeedableRng};
    use regex::RegexBuilder;
    use test_case::test_case;

    const ALPHABET: &[u8] = b"abcXYZ019-. \n";

    fn random_inputs(seed: u64, count: usize) -> Vec<String> {
        let mut rng = SmallRng::seed_from_u64(seed);
        (0..count)
            .map(|_| {
                let len = rng.random_range(0..8);
                (0..len)
                    .map(|_| ALPHABET[rng.random_range(0..ALPHABET.len())] as char)
                    .collect()
            })
            .collect()
    }

    fn sample_checks() -> Result<Vec<Check>> {
        Ok(vec![
            length(3),
            is(["abc", "x"]),
            is_cased(["XYZ"], true),
            consists_of("a-c")?,
            matches_regex("[0-9]+|Z")?,
            numeric::<i32>(),
            numeric::<f64>(),
            range::<u8>(1, 10),
        ])
    }

    #[test_case("abcde", true)]
    #[test_case("12345", true)]
    #[test_case("a b c", true)]
    #[test_case("", false)]
    #[test_case("abcd", false)]
    #[test_case("abcdef", false)]
    fn test_length_five(input: &str, expected: bool) {
        assert_eq!(length(5).validate(input).is_ok(), expected);
    }

    #[test_case("1", true)]
    #[test_case("5", true)]
    #[test_case("10", true)]
    #[test_case("0", false)]
    #[test_case("11", false)]
    #[test_case("-3", false)]
    #[test_case("abc", false)]
    #[test_case("", false)]
    #[test_case("5.0", false)]
    fn test_range_i32_one_to_ten(input: &str, expected: bool) {
        assert_eq!(range::<i32>(1, 10).validate(input).is_ok(), expected);
    }

    #[test]
    fn test_range_accepts_every_value_in_bounds() {
        let check = range::<i32>(1, 10);
        for n in 1..=10 {
            assert!(check.validate(&n.to_string()).is_ok(), "{} rejected", n);
        }
    }

    #[test]
    fn test_range_defaults_to_type_bounds() {
        assert!(range_from::<i8>(0).validate("127").is_ok());
        assert!(range_from::<i8>(0).validate("128").is_err());
        assert!(range_to::<i8>(0).validate("-128").is_ok());
        assert!(range_to::<i8>(0).validate("1").is_err());
        assert!(numeric_range::<u16>().validate("65535").is_ok());
        assert!(numeric_range::<u16>().validate("65536").is_err());
    }

    #[test]
    fn test_range_float() {
        let check = range::<f64>(-1.5, 2.5);
        assert!(check.validate("-1.5").is_ok());
        assert!(check.validate("2.5").is_ok());
        assert!(check.validate("2.6").is_err());
        assert!(check.validate("2").is_err());
    }

    #[test_case("y", true)]
    #[test_case("Y", true)]
    #[test_case("n", true)]
    #[test_case("N", true)]
    #[test_case("yes", false)]
    #[test_case("", false)]
    fn test_is_yes_no(input: &str, expected: bool) {
        assert_eq!(is(["Y", "N"]).validate(input).is_ok(), expected);
    }

    #[test]
    fn test_matches_regex_is_full_match() -> Result<()> {
        let check = matches_regex("[a-z]+")?;
        assert!(check.validate("abc").is_ok());
        assert!(check.validate("abc1").is_err());
        assert!(check.validate("1abc").is_err());
        Ok(())
    }

    #[test]
    fn test_matches_regex_alternation_is_anchored_as_a_whole() -> Result<()> {
        let check = matches_regex("a|ab")?;
        assert!(check.validate("ab").is_ok());
        assert!(check.validate("abc").is_err());
        Ok(())
    }

    #[test]
    fn test_matches_compiled_regex() -> Result<()> {
        let regex = Regex::new(r"\d{3}").map_err(|source| Error::Pattern {
            pattern: r"\d{3}".to_string(),
            source,
        })?;
        let check = matches(&regex);
        assert!(check.validate("123").is_ok());
        assert!(check.validate("1234").is_err());
        assert!(check.validate("x123").is_err());
        Ok(())
    }

    #[test]
    fn test_matches_keeps_builder_flags() -> Result<()> {
        let regex = RegexBuilder::new("abc")
            .case_insensitive(true)
            .build()
            .map_err(|source| Error::Pattern {
                pattern: "abc".to_string(),
                source,
            })?;
        let check = matches(&regex);
        assert!(check.validate("ABC").is_ok());
        assert!(check.validate("aBc").is_ok());
        assert!(check.validate("ABCD").is_err());
        Ok(())
    }

    #[test]
    fn test_matches_regex_malformed_pattern() {
        let res = matches_regex("(unclosed");
        assert!(matches!(res, Err(Error::Pattern { ref pattern, .. }) if pattern == "(unclosed"));
    }

    #[test]
    fn test_consists_of() -> Result<()> {
        let check = consists_of("abc")?;
        assert!(check.validate("cab").is_ok());
        assert!(check.validate("abd").is_err());
        assert!(check.validate("").is_err());
        Ok(())
    }

    #[test]
    fn test_consists_of_malformed_class() {
        assert!(consists_of("z-a").is_err());
    }

    #[test]
    fn test_custom_message_surfaces() {
        let check = custom(length(1), "One key only");
        assert_eq!(
            check.validate("ab").map_err(|e| e.to_string()),
            Err("One key only".to_string())
        );
    }

    #[test]
    fn test_inverse_rejects_with_generic_message() {
        let check = inverse(custom(length(1), "One key only"));
        assert!(check.validate("ab").is_ok());
        assert_eq!(
            check.validate("a").map_err(|e| e.to_string()),
            Err("Invalid Input".to_string())
        );
    }

    #[test]
    fn test_any_discards_inner_messages() {
        let check = any([custom(length(1), "first"), custom(length(2), "second")]);
        assert!(check.validate("a").is_ok());
        assert!(check.validate("ab").is_ok());
        assert_eq!(
            check.validate("abc").map_err(|e| e.to_string()),
            Err("Invalid Input".to_string())
        );
    }

    #[test]
    fn test_double_inverse_agrees_with_original() -> Result<()> {
        let inputs = random_inputs(7, 300);
        for check in sample_checks()? {
            let twice = inverse(inverse(check.clone()));
            for input in &inputs {
                assert_eq!(
                    check.validate(input).is_ok(),
                    twice.validate(input).is_ok(),
                    "{:?} on {:?}",
                    check,
                    input
                );
            }
        }
        Ok(())
    }

    #[test]
    fn test_any_is_logical_or() -> Result<()> {
        let inputs = random_inputs(11, 200);
        let checks = sample_checks()?;
        for a in &checks {
            for b in &checks {
                let either = any([a.clone(), b.clone()]);
                let flipped = any([b.clone(), a.clone()]);
                for input in &inputs {
                    let expected = a.validate(input).is_ok() || b.validate(input).is_ok();
                    assert_eq!(either.validate(input).is_ok(), expected);
                    assert_eq!(flipped.validate(input).is_ok(), expected);
                }
            }
        }
        Ok(())
    }

    #[test]
    fn test_checks_are_pure() -> Result<()> {
        let inputs = random_inputs(23, 100);
        for check in sample_checks()? {
            for input in &inputs {
                assert_eq!(check.validate(input), check.validate(input));
            }
        }
        Ok(())
    }
}

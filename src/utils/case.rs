//! Identifier case conversion.
//!
//! Tag and attribute names are written camelCase on the authoring side
//! (`dataFoo`, `ariaLabel`) and hyphenated in markup (`data-foo`, `aria-label`).

/// Check if a character counts as uppercase for word splitting.
///
/// Only ASCII `A`-`Z` qualify; everything else (digits, punctuation, lowercase,
/// non-ASCII letters) never starts a new word.
#[inline]
const fn is_upper(c: char) -> bool {
    c.is_ascii_uppercase()
}

/// Convert a camelCase identifier to kebab-case.
///
/// An uppercase letter starts a new word when it follows a non-uppercase
/// character, or when it is the last letter of an uppercase run that is
/// followed by a lowercase one (`HTTPRequest` splits before `R`). Word starts
/// get a hyphen, except at position 0. Every uppercase letter is lowercased.
///
/// # Example
/// ```
/// use jsxmark::utils::case::to_kebab_case;
///
/// assert_eq!(to_kebab_case("dataFoo"), "data-foo");
/// assert_eq!(to_kebab_case("XMLHttpRequest"), "xml-http-request");
/// assert_eq!(to_kebab_case("ID"), "id");
/// ```
pub fn to_kebab_case(s: &str) -> String {
    let chars: Vec<char> = s.chars().collect();
    let last = chars.len().saturating_sub(1);
    let mut result = String::with_capacity(s.len() + 4);

    for (i, &c) in chars.iter().enumerate() {
        if !is_upper(c) {
            result.push(c);
            continue;
        }

        // Out-of-range neighbours count as uppercase
        let prev_upper = i == 0 || is_upper(chars[i - 1]);
        let next_upper = i == last || is_upper(chars[i + 1]);

        if i > 0 && (!prev_upper || !next_upper) {
            result.push('-');
        }
        result.push(c.to_ascii_lowercase());
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty() {
        assert_eq!(to_kebab_case(""), "");
    }

    #[test]
    fn test_lowercase_unchanged() {
        assert_eq!(to_kebab_case("id"), "id");
        assert_eq!(to_kebab_case("div"), "div");
        assert_eq!(to_kebab_case("aria-label"), "aria-label");
    }

    #[test]
    fn test_camel_case() {
        assert_eq!(to_kebab_case("dataFoo"), "data-foo");
        assert_eq!(to_kebab_case("ariaLabelledBy"), "aria-labelled-by");
        assert_eq!(to_kebab_case("aB"), "a-b");
    }

    #[test]
    fn test_uppercase_run() {
        assert_eq!(to_kebab_case("ID"), "id");
        assert_eq!(to_kebab_case("myID"), "my-id");
        assert_eq!(to_kebab_case("innerHTML"), "inner-html");
        assert_eq!(to_kebab_case("fooBAR"), "foo-bar");
    }

    #[test]
    fn test_uppercase_run_before_word() {
        assert_eq!(to_kebab_case("XMLHttpRequest"), "xml-http-request");
        assert_eq!(to_kebab_case("HTMLElement"), "html-element");
    }

    #[test]
    fn test_leading_uppercase_has_no_hyphen() {
        assert_eq!(to_kebab_case("Div"), "div");
        assert_eq!(to_kebab_case("A"), "a");
        assert_eq!(to_kebab_case("MyComponent"), "my-component");
    }

    #[test]
    fn test_non_letters_pass_through() {
        assert_eq!(to_kebab_case("h1"), "h1");
        assert_eq!(to_kebab_case("x2Y"), "x2-y");
        assert_eq!(to_kebab_case("data_foo"), "data_foo");
        assert_eq!(to_kebab_case("ÄÖü"), "ÄÖü");
        assert_eq!(to_kebab_case("1A"), "1-a");
    }
}

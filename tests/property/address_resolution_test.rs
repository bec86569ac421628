//! Property-based tests for address-bar input resolution.

use proptest::prelude::*;
use stark_browser::managers::navigation_controller::resolve_input;

const SCHEME: &str = "https://";
const SEARCH: &str = "https://www.google.com/search?q=";

proptest! {
    #![proptest_config(ProptestConfig::with_cases(50))]

    #[test]
    fn dotless_input_becomes_search(words in prop::collection::vec("[a-zA-Z0-9]{1,8}", 1..5)) {
        let text = words.join(" ");
        let resolved = resolve_input(&text, SCHEME, SEARCH);
        prop_assert!(resolved.starts_with(SEARCH));
        let query = &resolved[SEARCH.len()..];
        prop_assert!(!query.contains(' '));
        prop_assert_eq!(query, words.join("+"));
    }

    #[test]
    fn dotted_input_gets_scheme(host in "[a-gi-z][a-z0-9]{0,10}\\.[a-z]{2,4}(/[a-z0-9]{0,6})?") {
        let resolved = resolve_input(&host, SCHEME, SEARCH);
        prop_assert_eq!(resolved, format!("{}{}", SCHEME, host));
    }

    #[test]
    fn http_prefixed_input_is_unchanged(rest in "s?://[a-z]{1,10}\\.[a-z]{2,4}(/[a-z0-9]{0,6})?") {
        let text = format!("http{}", rest);
        prop_assert_eq!(resolve_input(&text, SCHEME, SEARCH), text);
    }

    #[test]
    fn surrounding_whitespace_is_ignored(host in "[a-gi-z][a-z]{0,8}\\.com", pad in " {0,3}") {
        let padded = format!("{}{}{}", pad, host, pad);
        prop_assert_eq!(
            resolve_input(&padded, SCHEME, SEARCH),
            resolve_input(&host, SCHEME, SEARCH)
        );
    }
}

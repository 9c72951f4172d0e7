use std::{sync::Arc, thread};

use field_naming::{
    abbreviate, split_camel_case, CamelCaseAbbreviatingStrategy, FieldNamingStrategy,
    NamingStrategy, Property,
};
use miette::Diagnostic;
use proptest::prelude::*;
use similar_asserts::assert_eq;

/// A document property as a mapping layer would hand it to a naming strategy.
struct DocumentProperty {
    name: String,
}

impl DocumentProperty {
    fn new(name: &str) -> Self {
        DocumentProperty {
            name: name.to_owned(),
        }
    }
}

impl Property for DocumentProperty {
    fn name(&self) -> Option<&str> {
        Some(&self.name)
    }
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn field_names(strategy: &dyn FieldNamingStrategy, properties: &[&str]) -> Vec<String> {
    properties
        .iter()
        .map(|name| strategy.field_name(&DocumentProperty::new(name)).unwrap())
        .collect()
}

#[test]
fn document_field_names() {
    init_tracing();

    let properties = ["id", "firstName", "lastName", "homeURL", "createdAt"];

    let cases = [
        (
            "property-name",
            vec!["id", "firstName", "lastName", "homeURL", "createdAt"],
        ),
        (
            "snake-case",
            vec!["id", "first_name", "last_name", "home_url", "created_at"],
        ),
        ("camel-case-abbreviating", vec!["i", "fn", "ln", "hu", "ca"]),
        (
            "camel-case-splitting:.",
            vec!["id", "first.name", "last.name", "home.url", "created.at"],
        ),
    ];

    for (name, expected) in cases {
        let strategy: NamingStrategy = name.parse().unwrap();
        assert_eq!(strategy.to_string(), name.to_owned());
        assert_eq!(
            field_names(&strategy, &properties),
            expected
                .into_iter()
                .map(str::to_owned)
                .collect::<Vec<_>>()
        );
    }
}

#[test]
fn unnamed_property_diagnostic() {
    init_tracing();

    let err = CamelCaseAbbreviatingStrategy
        .field_name(&None::<&str>)
        .unwrap_err();

    assert!(err.is_invalid_input());
    assert_eq!(
        err.code().map(|code| code.to_string()),
        Some("field_naming::invalid_input".to_owned())
    );
    assert!(err.help().is_some());
}

#[test]
fn unknown_strategy_diagnostic() {
    let err = "kebab-case".parse::<NamingStrategy>().unwrap_err();

    assert!(err.is_unknown_strategy());
    assert_eq!(
        err.code().map(|code| code.to_string()),
        Some("field_naming::unknown_strategy".to_owned())
    );

    let report = miette::Report::new(err);
    assert_eq!(
        report.to_string(),
        "unknown field naming strategy 'kebab-case'".to_owned()
    );
}

#[test]
fn shared_between_threads() {
    let strategy: Arc<dyn FieldNamingStrategy + Send + Sync> =
        Arc::new("camel-case-abbreviating".parse::<NamingStrategy>().unwrap());

    let handles: Vec<_> = ["fooBar", "fooBARFooBar", "createdAt", ""]
        .into_iter()
        .map(|name| {
            let strategy = Arc::clone(&strategy);
            thread::spawn(move || strategy.field_name(&name).unwrap())
        })
        .collect();

    let results: Vec<String> = handles
        .into_iter()
        .map(|handle| handle.join().unwrap())
        .collect();

    assert_eq!(
        results,
        vec![
            "fb".to_owned(),
            "fbfb".to_owned(),
            "ca".to_owned(),
            String::new()
        ]
    );
}

fn camel_case_words() -> impl Strategy<Value = Vec<String>> {
    (
        "[a-z][a-z0-9]{0,6}",
        prop::collection::vec("[A-Z][a-z][a-z0-9]{0,5}", 0..6),
    )
        .prop_map(|(first, rest)| {
            let mut words = vec![first];
            words.extend(rest);
            words
        })
}

proptest! {
    #[test]
    fn abbreviate_has_one_letter_per_word(words in camel_case_words()) {
        let name = words.concat();
        let expected: String = words
            .iter()
            .map(|word| word.chars().next().unwrap().to_ascii_lowercase())
            .collect();

        prop_assert_eq!(split_camel_case(&name).count(), words.len());
        prop_assert_eq!(abbreviate(&name), expected);
    }

    #[test]
    fn abbreviate_is_lowercase(name in "[ -~]{0,32}") {
        let field = abbreviate(&name);
        prop_assert!(!field.chars().any(char::is_uppercase));
    }

    #[test]
    fn abbreviate_lowercases_non_ascii(name in "[a-z0-9_\\p{Lu}]{0,32}") {
        let field = abbreviate(&name);
        prop_assert!(field
            .chars()
            .all(|ch| ch.to_lowercase().eq(std::iter::once(ch))));
    }

    #[test]
    fn abbreviate_has_one_char_per_word(name in "\\PC{0,32}") {
        prop_assert_eq!(abbreviate(&name).chars().count(), split_camel_case(&name).count());
    }

    #[test]
    fn abbreviate_is_deterministic(name in "\\PC{0,32}") {
        prop_assert_eq!(abbreviate(&name), abbreviate(&name));
    }

    #[test]
    fn split_words_concatenate_to_name(name in "\\PC{0,32}") {
        let words: Vec<&str> = split_camel_case(&name).collect();
        prop_assert!(words.iter().all(|word| !word.is_empty()));
        prop_assert_eq!(words.concat(), name);
    }

    #[test]
    fn naming_strategy_display_round_trips(delimiter in "[-_.:/ ]{0,3}") {
        for strategy in [
            NamingStrategy::PropertyName,
            NamingStrategy::SnakeCase,
            NamingStrategy::CamelCaseAbbreviating,
            NamingStrategy::CamelCaseSplitting(field_naming::CamelCaseSplittingStrategy::new(delimiter.clone())),
        ] {
            let parsed: NamingStrategy = strategy.to_string().parse().unwrap();
            prop_assert_eq!(parsed, strategy);
        }
    }
}

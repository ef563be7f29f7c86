//! Property tests for injection idempotence

use proptest::prelude::*;
use starter_inject::{Directive, Injector, Location};

proptest! {
    // Re-running any directive list over its own output must be a no-op.
    // Anchors draw from uppercase and directive text from lowercase so a
    // generated anchor can never appear inside generated text.
    #[test]
    fn test_second_application_never_changes_content(
        head in "[a-z ]{0,20}",
        anchor in "[A-Z]{3,8}",
        tail in "[a-z \n]{0,40}",
        text in "[a-z][a-z ]{0,20}",
        indent in " {0,6}",
        after in any::<bool>(),
    ) {
        let content = format!("{head}\n{indent}{anchor}()\n{tail}");
        let location = if after { Location::After } else { Location::Before };
        let directives = vec![
            Directive::import(format!("import {{ {text} }} from './{text}';")),
            Directive::inject(text.clone(), format!("{anchor}()"), location),
        ];

        let injector = Injector::new();
        let first = injector.apply(&content, &directives);
        let second = injector.apply(&first.content, &directives);

        prop_assert!(!second.changed);
        prop_assert_eq!(&second.content, &first.content);
    }

    #[test]
    fn test_multiline_injection_is_idempotent(
        indent in " {0,8}",
        first_line in "[a-z]{1,10}",
        second_line in "[a-z]{1,10}",
    ) {
        let content = format!("{indent}ANCHOR()\n{indent}done\n");
        let directives = vec![Directive::inject(
            format!("{first_line}\n  {second_line}"),
            "ANCHOR()",
            Location::After,
        )];

        let injector = Injector::new();
        let first = injector.apply(&content, &directives);
        let second = injector.apply(&first.content, &directives);

        prop_assert!(!second.changed);
        prop_assert_eq!(&second.content, &first.content);
    }

    #[test]
    fn test_unmatched_anchor_leaves_content_untouched(
        content in "[a-z \n]{0,60}",
        text in "[A-Z]{1,10}",
    ) {
        let directives = vec![Directive::inject(text, "NEVERFOUND", Location::After)];

        let outcome = Injector::new().apply(&content, &directives);

        prop_assert!(!outcome.changed);
        prop_assert_eq!(outcome.content, content);
    }
}

//! Property-based tests for the tag stripper.

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use crate::strip::strip_tags;
    use proptest::prelude::*;

    #[derive(Debug, Clone)]
    enum Fragment {
        Text(String),
        Void { name: String, attr: String },
        Element { name: String, attr: String, children: Vec<Fragment> },
    }

    impl Fragment {
        fn markup(&self, out: &mut String) {
            match self {
                Fragment::Text(text) => out.push_str(text),
                Fragment::Void { name, attr } => {
                    out.push_str(&format!("<{name} data=\"{attr}\"/>"));
                }
                Fragment::Element {
                    name,
                    attr,
                    children,
                } => {
                    out.push_str(&format!("<{name} title=\"{attr}\">"));
                    for child in children {
                        child.markup(out);
                    }
                    out.push_str(&format!("</{name}>"));
                }
            }
        }

        fn text(&self, out: &mut String) {
            match self {
                Fragment::Text(text) => out.push_str(text),
                Fragment::Void { .. } => {}
                Fragment::Element { children, .. } => {
                    for child in children {
                        child.text(out);
                    }
                }
            }
        }
    }

    fn tag_name() -> impl Strategy<Value = String> {
        "[a-z][a-z0-9]{0,6}"
    }

    // Attribute values may hold `>` and `<` since they are quoted
    fn attr_value() -> impl Strategy<Value = String> {
        "[a-z <>=/]{0,8}"
    }

    fn fragment() -> impl Strategy<Value = Fragment> {
        let leaf = prop_oneof![
            "[^<\"]{0,12}".prop_map(Fragment::Text),
            (tag_name(), attr_value()).prop_map(|(name, attr)| Fragment::Void { name, attr }),
        ];
        leaf.prop_recursive(4, 32, 4, |inner| {
            (tag_name(), attr_value(), prop::collection::vec(inner, 0..4)).prop_map(
                |(name, attr, children)| Fragment::Element {
                    name,
                    attr,
                    children,
                },
            )
        })
    }

    proptest! {
        #[test]
        fn test_plain_text_unchanged(text in "[^<]*") {
            prop_assert_eq!(strip_tags(&text).unwrap(), text);
        }

        #[test]
        fn test_well_formed_fragments_keep_text_runs(fragments in prop::collection::vec(fragment(), 0..4)) {
            let mut markup = String::new();
            let mut expected = String::new();
            for fragment in &fragments {
                fragment.markup(&mut markup);
                fragment.text(&mut expected);
            }
            prop_assert_eq!(strip_tags(&markup).unwrap(), expected);
        }

        #[test]
        fn test_strip_is_idempotent(fragments in prop::collection::vec(fragment(), 0..4)) {
            let mut markup = String::new();
            for fragment in &fragments {
                fragment.markup(&mut markup);
            }
            let once = strip_tags(&markup).unwrap();
            prop_assume!(!once.contains('<'));
            prop_assert_eq!(strip_tags(&once).unwrap(), once);
        }

        #[test]
        fn test_self_closing_tags_vanish(name in tag_name(), text in "[^<]{0,16}") {
            let markup = format!("<{name} src=\"x\"/>{text}");
            prop_assert_eq!(strip_tags(&markup).unwrap(), text);
        }

        #[test]
        fn test_unclosed_tag_always_fails(name in tag_name(), text in "[^<]{0,16}") {
            let markup = format!("<{name}>{text}");
            prop_assert!(strip_tags(&markup).is_err());
        }
    }
}

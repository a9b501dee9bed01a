//! Placeholder substitution for `{{name}}` markers

use regex::Regex;
use std::sync::LazyLock;

static PLACEHOLDER: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\{\{(\w+)\}\}").expect("placeholder pattern is valid"));

/// Result of rendering a template
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rendered {
    /// Template text after substitution
    pub text: String,
    /// Every placeholder left in `text`, in order, repeats included
    pub unresolved: Vec<String>,
}

/// Substitute each `(name, value)` binding into `template`.
///
/// Bindings are applied in order as plain text replacement. A value that itself
/// contains `{{...}}` is not substituted again by the same binding, but a later
/// binding may match it.
pub fn render(template: &str, variables: &[(String, String)]) -> Rendered {
    let mut text = template.to_string();
    for (name, value) in variables {
        text = text.replace(&format!("{{{{{}}}}}", name), value);
    }

    let unresolved = PLACEHOLDER
        .captures_iter(&text)
        .map(|caps| caps[1].to_string())
        .collect();

    Rendered { text, unresolved }
}

/// Distinct placeholder names in first-appearance order
pub fn placeholders(template: &str) -> Vec<String> {
    let mut names: Vec<String> = Vec::new();
    for caps in PLACEHOLDER.captures_iter(template) {
        let name = &caps[1];
        if !names.iter().any(|n| n == name) {
            names.push(name.to_string());
        }
    }
    names
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn vars(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
        pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect()
    }

    #[test]
    fn test_render_substitutes_every_occurrence() {
        let rendered = render("{{a}} and {{a}} then {{b}}", &vars(&[("a", "1"), ("b", "2")]));
        assert_eq!(rendered.text, "1 and 1 then 2");
        assert!(rendered.unresolved.is_empty());
    }

    #[test]
    fn test_render_reports_unresolved_with_repeats() {
        let rendered = render("{{x}} {{y}} {{x}} {{known}}", &vars(&[("known", "ok")]));
        assert_eq!(rendered.text, "{{x}} {{y}} {{x}} ok");
        assert_eq!(rendered.unresolved, vec!["x", "y", "x"]);
    }

    #[test]
    fn test_render_ignores_non_word_markers() {
        let rendered = render("{{ spaced }} {{dash-ed}} {x}", &[]);
        assert!(rendered.unresolved.is_empty());
        assert_eq!(rendered.text, "{{ spaced }} {{dash-ed}} {x}");
    }

    #[test]
    fn test_render_value_with_placeholder_syntax_is_not_recursed() {
        let rendered = render("{{a}}", &vars(&[("a", "{{a}}")]));
        assert_eq!(rendered.text, "{{a}}");
        assert_eq!(rendered.unresolved, vec!["a"]);
    }

    #[test]
    fn test_render_later_binding_sees_earlier_value() {
        let rendered = render("{{a}}", &vars(&[("a", "{{b}}"), ("b", "done")]));
        assert_eq!(rendered.text, "done");
    }

    #[test]
    fn test_render_unused_binding_is_harmless() {
        let rendered = render("plain", &vars(&[("unused", "v")]));
        assert_eq!(rendered.text, "plain");
    }

    #[test]
    fn test_placeholders_dedupes_in_order() {
        assert_eq!(placeholders("{{b}} {{a}} {{b}} {{c_1}}"), vec!["b", "a", "c_1"]);
        assert!(placeholders("no markers").is_empty());
    }

    proptest! {
        #[test]
        fn prop_bound_names_never_remain(
            names in prop::collection::vec("[a-z]{1,6}", 1..5),
            value in "[A-Za-z0-9 .=]{0,12}",
        ) {
            let template: String = names.iter().map(|n| format!("<{{{{{}}}}}>", n)).collect();
            let bindings: Vec<(String, String)> = names.iter().map(|n| (n.clone(), value.clone())).collect();

            let rendered = render(&template, &bindings);
            prop_assert!(rendered.unresolved.is_empty());
            prop_assert_eq!(rendered.text, format!("<{}>", value).repeat(names.len()));
        }

        #[test]
        fn prop_unbound_names_all_reported(names in prop::collection::vec("[a-z]{1,6}", 0..6)) {
            let template = names.iter().map(|n| format!("{{{{{}}}}}", n)).collect::<Vec<_>>().join(" ");

            let rendered = render(&template, &[]);
            prop_assert_eq!(&rendered.text, &template);
            prop_assert_eq!(rendered.unresolved, names);
        }
    }
}

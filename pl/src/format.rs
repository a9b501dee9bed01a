//! Human-readable views of templates

use colored::*;

use crate::library::{Template, group_by_category};
use crate::render::placeholders;

fn category_icon(category: &str) -> &'static str {
    match category {
        "coding" => "💻",
        "writing" => "✍️",
        "analysis" => "📊",
        "translation" => "🌐",
        "summarization" => "📝",
        "extraction" => "🔍",
        "agent" => "🤖",
        "system" => "⚙️",
        _ => "📄",
    }
}

/// Grouped listing used by `list` and `search`
pub(crate) fn prompt_list<'a>(templates: impl IntoIterator<Item = &'a Template>) -> String {
    let templates: Vec<&Template> = templates.into_iter().collect();
    let mut lines = Vec::new();

    lines.push(format!("\n{}", format!("📚 prompt-library v{}", crate::VERSION).bold()));
    lines.push("─".repeat(65).dimmed().to_string());
    lines.push(format!("  {} templates available\n", templates.len()));

    for (category, group) in group_by_category(templates) {
        lines.push(format!("  {} {}", category_icon(category), category.bold()));
        for t in group {
            let tags = t.tags.iter().take(3).map(String::as_str).collect::<Vec<_>>().join(", ");
            lines.push(format!(
                "     {} {:<25} {}",
                format!("{:<20}", t.id).cyan(),
                t.name,
                tags.dimmed()
            ));
        }
        lines.push(String::new());
    }

    lines.push(format!(
        "  {}\n",
        "Use: prompt-library get <id> | prompt-library use <id> --var key=value".dimmed()
    ));
    lines.join("\n")
}

/// Full view of one template used by `get`
pub(crate) fn prompt_detail(t: &Template) -> String {
    let mut lines = Vec::new();
    lines.push(format!(
        "\n{} {} ({})",
        category_icon(&t.category),
        t.name.bold(),
        t.id.cyan()
    ));
    lines.push(format!("  Category: {}", t.category));
    lines.push(format!("  Tags: {}", t.tags.join(", ")));

    let variables = placeholders(&t.template);
    if !variables.is_empty() {
        lines.push(format!("  Variables: {}", variables.join(", ").yellow()));
    }

    let rule = "─".repeat(50).dimmed().to_string();
    lines.push(format!("\n{}", rule));
    lines.push(t.template.clone());
    lines.push(format!("{}\n", rule));
    lines.join("\n")
}

/// One row of the `tags` output
pub(crate) fn tag_line(tag: &str, count: usize) -> String {
    format!("  {} ({})", format!("{:<20}", tag).cyan(), count)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Template {
        Template {
            id: "greet".to_string(),
            name: "Greeting".to_string(),
            category: "writing".to_string(),
            tags: vec!["a".into(), "b".into(), "c".into(), "d".into()],
            template: "Hello {{who}} from {{where}} and {{who}}".to_string(),
        }
    }

    #[test]
    fn test_list_shows_count_and_first_three_tags() {
        colored::control::set_override(false);
        let t = sample();
        let out = prompt_list([&t]);

        assert!(out.contains("1 templates available"));
        assert!(out.contains("✍️ writing"));
        assert!(out.contains("greet"));
        assert!(out.contains("a, b, c"));
        assert!(!out.contains("a, b, c, d"));
    }

    #[test]
    fn test_list_orders_categories() {
        colored::control::set_override(false);
        let mut first = sample();
        first.category = "zeta".to_string();
        let mut second = sample();
        second.id = "other-id".to_string();
        second.category = "alpha".to_string();

        let out = prompt_list([&first, &second]);
        let alpha = out.find("alpha").unwrap();
        let zeta = out.find("zeta").unwrap();
        assert!(alpha < zeta);
    }

    #[test]
    fn test_detail_lists_distinct_variables() {
        colored::control::set_override(false);
        let out = prompt_detail(&sample());

        assert!(out.contains("Greeting (greet)"));
        assert!(out.contains("Tags: a, b, c, d"));
        assert!(out.contains("Variables: who, where\n"));
        assert!(out.contains("Hello {{who}} from {{where}} and {{who}}"));
    }

    #[test]
    fn test_detail_without_variables() {
        colored::control::set_override(false);
        let mut t = sample();
        t.template = "static".to_string();
        assert!(!prompt_detail(&t).contains("Variables:"));
    }

    #[test]
    fn test_tag_line_pads() {
        colored::control::set_override(false);
        assert_eq!(tag_line("git", 2), format!("  {:<20} (2)", "git"));
    }
}

//! Built-in prompt catalog
//!
//! Seeds a fresh library and is what `reset` restores.

use crate::library::{Library, Template};

/// A catalog entry compiled into the binary
#[derive(Debug, Clone, Copy)]
pub struct BuiltinPrompt {
    pub id: &'static str,
    pub name: &'static str,
    pub category: &'static str,
    pub tags: &'static [&'static str],
    pub template: &'static str,
}

impl BuiltinPrompt {
    fn to_template(self) -> Template {
        Template {
            id: self.id.to_string(),
            name: self.name.to_string(),
            category: self.category.to_string(),
            tags: self.tags.iter().map(|t| t.to_string()).collect(),
            template: self.template.to_string(),
        }
    }
}

pub const BUILTIN_PROMPTS: &[BuiltinPrompt] = &[
    BuiltinPrompt {
        id: "code-review",
        name: "Code Review",
        category: "coding",
        tags: &["review", "quality", "best-practices"],
        template: "Review this code for bugs, security issues, performance problems, and style.\nProvide specific suggestions with line references.\n\n```\n{{code}}\n```\n\nFormat: list each issue with severity (critical/warning/info), line number, and fix.",
    },
    BuiltinPrompt {
        id: "bug-fix",
        name: "Bug Fix Assistant",
        category: "coding",
        tags: &["debug", "fix", "error"],
        template: "I have a bug in my code.\n\nCode:\n```\n{{code}}\n```\n\nError message:\n```\n{{error}}\n```\n\nExplain the root cause and provide a corrected version.",
    },
    BuiltinPrompt {
        id: "write-tests",
        name: "Write Unit Tests",
        category: "coding",
        tags: &["testing", "unittest", "pytest"],
        template: "Write comprehensive unit tests for this code using {{framework}}.\nCover edge cases, error handling, and typical usage.\n\n```\n{{code}}\n```\n\nInclude at least 5 test cases with descriptive names.",
    },
    BuiltinPrompt {
        id: "refactor",
        name: "Refactor Code",
        category: "coding",
        tags: &["clean-code", "refactor", "improve"],
        template: "Refactor this code for better readability, maintainability, and performance.\nKeep the same behavior. Explain each change.\n\n```{{language}}\n{{code}}\n```",
    },
    BuiltinPrompt {
        id: "explain-code",
        name: "Explain Code",
        category: "coding",
        tags: &["explain", "learn", "understand"],
        template: "Explain this code step by step. Assume the reader is a {{level}} developer.\n\n```{{language}}\n{{code}}\n```\n\nCover: what it does, how it works, key concepts, and potential improvements.",
    },
    BuiltinPrompt {
        id: "summarize",
        name: "Summarize Text",
        category: "summarization",
        tags: &["summary", "tldr", "condense"],
        template: "Summarize the following text in {{length}}.\nPreserve key facts, numbers, and conclusions.\n\n---\n{{text}}\n---\n\nFormat: bullet points with the most important information first.",
    },
    BuiltinPrompt {
        id: "translate",
        name: "Translate Text",
        category: "translation",
        tags: &["translate", "language", "i18n"],
        template: "Translate the following from {{source_lang}} to {{target_lang}}.\nPreserve tone, formatting, and technical terms.\n\n---\n{{text}}\n---",
    },
    BuiltinPrompt {
        id: "system-prompt",
        name: "System Prompt Builder",
        category: "system",
        tags: &["system", "persona", "instructions"],
        template: "Create a system prompt for an AI assistant with these characteristics:\n- Role: {{role}}\n- Tone: {{tone}}\n- Key behaviors: {{behaviors}}\n- Constraints: {{constraints}}\n\nThe system prompt should be clear, specific, and under 500 words.",
    },
    BuiltinPrompt {
        id: "agent-persona",
        name: "Agent Persona Designer",
        category: "agent",
        tags: &["agent", "persona", "character"],
        template: "Design a detailed persona for an AI agent:\n- Name: {{name}}\n- Purpose: {{purpose}}\n- Target users: {{users}}\n\nInclude: personality traits, communication style, knowledge domains, limitations, example interactions.",
    },
    BuiltinPrompt {
        id: "data-analysis",
        name: "Data Analysis Prompt",
        category: "analysis",
        tags: &["data", "analysis", "insights"],
        template: "Analyze this dataset and provide insights:\n\n```\n{{data}}\n```\n\nInclude:\n1. Key patterns and trends\n2. Statistical summary\n3. Anomalies or outliers\n4. Actionable recommendations\n5. Suggested visualizations",
    },
    BuiltinPrompt {
        id: "email-draft",
        name: "Email Draft",
        category: "writing",
        tags: &["email", "professional", "communication"],
        template: "Draft a {{tone}} email:\n- To: {{recipient}}\n- Subject: {{subject}}\n- Key points: {{points}}\n- Call to action: {{cta}}\n\nKeep it concise and professional. Under 200 words.",
    },
    BuiltinPrompt {
        id: "commit-message",
        name: "Git Commit Message",
        category: "coding",
        tags: &["git", "commit", "conventional"],
        template: "Write a conventional commit message for this diff:\n\n```diff\n{{diff}}\n```\n\nFormat: type(scope): description\n\nTypes: feat, fix, docs, style, refactor, test, chore\nInclude body if changes are complex.",
    },
    BuiltinPrompt {
        id: "pr-description",
        name: "PR Description",
        category: "coding",
        tags: &["git", "pull-request", "documentation"],
        template: "Write a pull request description for these changes:\n\n{{changes}}\n\nInclude:\n- Summary (1-2 sentences)\n- What changed and why\n- How to test\n- Screenshots/examples if relevant\n- Breaking changes",
    },
    BuiltinPrompt {
        id: "api-docs",
        name: "API Documentation",
        category: "coding",
        tags: &["api", "documentation", "openapi"],
        template: "Generate API documentation for this endpoint:\n\n```\n{{code}}\n```\n\nInclude:\n- Endpoint URL and method\n- Request parameters (path, query, body) with types\n- Response format with example\n- Error codes\n- Usage example with curl",
    },
    BuiltinPrompt {
        id: "regex-helper",
        name: "Regex Helper",
        category: "coding",
        tags: &["regex", "pattern", "validation"],
        template: "Create a regex pattern that matches: {{description}}\n\nProvide:\n1. The regex pattern\n2. Explanation of each part\n3. Test cases (3 matching, 3 non-matching)\n4. Common edge cases\n5. Usage example in {{language}}",
    },
    BuiltinPrompt {
        id: "tech-explainer",
        name: "Technical Concept Explainer",
        category: "writing",
        tags: &["explain", "technical", "education"],
        template: "Explain {{concept}} to a {{audience}}.\n\nUse:\n- Simple analogy first\n- Then technical details\n- A practical example\n- Common misconceptions\n- Further reading suggestions",
    },
];

/// Materialize the catalog as a fresh library, in catalog order
pub fn catalog() -> Library {
    BUILTIN_PROMPTS.iter().map(|p| p.to_template()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_catalog_ids_are_unique() {
        let ids: HashSet<_> = BUILTIN_PROMPTS.iter().map(|p| p.id).collect();
        assert_eq!(ids.len(), BUILTIN_PROMPTS.len());
    }

    #[test]
    fn test_catalog_preserves_order() {
        let library = catalog();
        assert_eq!(library.len(), 16);
        assert_eq!(library.templates()[0].id, "code-review");
        assert_eq!(library.templates()[15].id, "tech-explainer");
    }

    #[test]
    fn test_every_builtin_has_a_placeholder() {
        for prompt in BUILTIN_PROMPTS {
            assert!(
                !crate::render::placeholders(prompt.template).is_empty(),
                "{} has no placeholders",
                prompt.id
            );
        }
    }

    #[test]
    fn test_code_review_body() {
        let library = catalog();
        let review = library.find("code-review").expect("code-review is built in");
        assert_eq!(review.category, "coding");
        assert_eq!(review.tags, vec!["review", "quality", "best-practices"]);
        assert!(review.template.contains("```\n{{code}}\n```"));
    }
}

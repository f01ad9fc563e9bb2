use regex::{Regex, RegexBuilder};

/// A title must contain at least one of these to make the digest. The same
/// list feeds the server-side query expression in the query strategy.
pub const KEYWORDS: [&str; 6] = [
    "LLM",
    "OpenAI",
    "Transformer",
    "Llama",
    "RAG",
    "LangChain",
];

pub struct Filters {}

impl Filters {
    /// Compile the keywords into case-insensitive literal matchers.
    #[must_use]
    pub fn compile(keywords: &[&str]) -> Vec<Regex> {
        let mut filters: Vec<Regex> = Vec::new();
        for keyword in keywords {
            match RegexBuilder::new(&regex::escape(keyword))
                .case_insensitive(true)
                .build()
            {
                Ok(re) => filters.push(re),
                Err(e) => tracing::warn!(keyword, error = %e, "skipping unusable keyword"),
            }
        }
        filters
    }

    /// The boolean OR expression submitted as the full-text query parameter.
    #[must_use]
    pub fn query_expression() -> String {
        KEYWORDS
            .iter()
            .map(|keyword| format!("\"{keyword}\""))
            .collect::<Vec<String>>()
            .join(" OR ")
    }
}

#[cfg(test)]
mod test {
    use super::{Filters, KEYWORDS};

    #[test]
    fn test_compile_is_case_insensitive() {
        let filters = Filters::compile(&["llm"]);
        assert_eq!(filters.len(), 1);

        for title in [
            "New LLM breakthrough",
            "llm inference on a toaster",
            "Why your Llm benchmark lies",
        ] {
            assert!(
                filters.iter().any(|f| f.is_match(title)),
                "keyword should match {title}",
            );
        }
        assert!(!filters
            .iter()
            .any(|f| f.is_match("Show HN: a static site generator")));
    }

    #[test]
    fn test_keywords_match_as_substrings() {
        let filters = Filters::compile(&KEYWORDS);
        assert_eq!(filters.len(), KEYWORDS.len());
        assert!(filters
            .iter()
            .any(|f| f.is_match("Fine-tuning llama-3 at home")));
    }

    #[test]
    fn test_query_expression_is_quoted_or_list() {
        let expr = Filters::query_expression();
        assert!(expr.starts_with("\"LLM\" OR "));
        assert_eq!(expr.matches(" OR ").count(), KEYWORDS.len() - 1);
    }
}

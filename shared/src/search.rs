//! Search query policy and the backend seam.
//!
//! No index ships with the theme. [`PlaceholderSearch`] stands in until a
//! real [`SearchBackend`] is supplied.

/// What the modal should do with the current input value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryAction {
    /// Too short: empty the results pane without searching.
    Clear,
    /// Run the backend with this trimmed query.
    Search(String),
}

/// Decide how to handle `raw` input. Length counts characters, not bytes.
pub fn classify_query(raw: &str, min_chars: usize) -> QueryAction {
    let query = raw.trim();
    if query.chars().count() < min_chars {
        QueryAction::Clear
    } else {
        QueryAction::Search(query.to_string())
    }
}

/// One rendered result row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchHit {
    /// Headline text.
    pub title: String,
    /// Secondary line.
    pub excerpt: String,
    /// Emphasized fragment appended to the excerpt, if any.
    pub highlight: Option<String>,
    /// Link target for real results.
    pub url: Option<String>,
}

/// Anything able to answer a query for the search modal.
pub trait SearchBackend {
    /// Results for an already-classified query.
    fn search(&self, query: &str) -> Vec<SearchHit>;
}

/// Echoes the query back under an "under development" notice.
#[derive(Debug, Clone)]
pub struct PlaceholderSearch {
    notice: String,
    keyword_label: String,
}

impl PlaceholderSearch {
    /// Build with localized strings.
    pub fn new(notice: impl Into<String>, keyword_label: impl Into<String>) -> Self {
        Self {
            notice: notice.into(),
            keyword_label: keyword_label.into(),
        }
    }
}

impl SearchBackend for PlaceholderSearch {
    fn search(&self, query: &str) -> Vec<SearchHit> {
        vec![SearchHit {
            title: self.notice.clone(),
            excerpt: self.keyword_label.clone(),
            highlight: Some(query.to_string()),
            url: None,
        }]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_queries_clear() {
        assert_eq!(classify_query("", 2), QueryAction::Clear);
        assert_eq!(classify_query("a", 2), QueryAction::Clear);
        assert_eq!(classify_query("  a  ", 2), QueryAction::Clear);
        assert_eq!(classify_query("中", 2), QueryAction::Clear);
    }

    #[test]
    fn long_enough_queries_search_trimmed_text() {
        assert_eq!(classify_query("ab", 2), QueryAction::Search("ab".into()));
        assert_eq!(classify_query("  rust  ", 2), QueryAction::Search("rust".into()));
        assert_eq!(classify_query("中文", 2), QueryAction::Search("中文".into()));
    }

    #[test]
    fn placeholder_echoes_literal_query() {
        let backend = PlaceholderSearch::new("under construction", "keyword: ");
        let hits = backend.search("<b>wasm</b>");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].title, "under construction");
        assert_eq!(hits[0].highlight.as_deref(), Some("<b>wasm</b>"));
        assert_eq!(hits[0].url, None);
    }
}

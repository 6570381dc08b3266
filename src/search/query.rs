//! Caller-supplied search intent.

/// Free text plus optional structured filters.
///
/// An empty query is legal and matches nothing; there is no implicit
/// "match everything".
#[derive(Debug, Default, Clone)]
pub struct SearchQuery {
    pub text: Option<String>,
    pub category: Option<String>,
    pub framework: Option<String>,
    pub tags: Vec<String>,
}

impl SearchQuery {
    /// Whether no field carries a usable value.
    ///
    /// Whitespace-only strings count as absent so that `{"text": "  "}`
    /// behaves like `{}`.
    pub fn is_empty(&self) -> bool {
        self.text().is_none()
            && self.category().is_none()
            && self.framework().is_none()
            && self.tags().next().is_none()
    }

    /// Trimmed free-text term, if present.
    pub fn text(&self) -> Option<&str> {
        non_blank(self.text.as_deref())
    }

    /// Trimmed category filter, if present.
    pub fn category(&self) -> Option<&str> {
        non_blank(self.category.as_deref())
    }

    /// Trimmed framework filter, if present.
    pub fn framework(&self) -> Option<&str> {
        non_blank(self.framework.as_deref())
    }

    /// Non-blank tag filters.
    pub fn tags(&self) -> impl Iterator<Item = &str> {
        self.tags.iter().map(String::as_str).filter_map(|t| {
            let t = t.trim();
            (!t.is_empty()).then_some(t)
        })
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

//! Declarative endpoint table for TheMealDB API.
//!
//! Every operation the client exposes maps to one entry here: a path
//! segment, an optional query parameter, and the envelope key the service
//! nests results under. The service wraps every payload in a single-key
//! JSON object, but the key differs by endpoint family (`meals` for
//! lookup, search, filter, and the `list.php` endpoints; `categories` for
//! `categories.php`), so each entry records which key to unwrap.

/// Top-level JSON key a response nests its payload under.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum EnvelopeKey {
    Meals,
    Categories,
}

impl EnvelopeKey {
    pub(crate) fn as_str(self) -> &'static str {
        match self {
            EnvelopeKey::Meals => "meals",
            EnvelopeKey::Categories => "categories",
        }
    }
}

/// One API endpoint: where to send the request and how to unwrap the reply.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Endpoint {
    /// Path segment appended to the base URL.
    pub path: &'static str,
    /// Query parameter name, if the endpoint takes one.
    pub param: Option<&'static str>,
    /// Envelope key the payload is nested under.
    pub key: EnvelopeKey,
}

impl Endpoint {
    /// Builds the full request URL. Query values are percent-encoded so
    /// spaces, `&`, and `#` in caller-supplied terms cannot corrupt the
    /// query string.
    pub(crate) fn url(&self, base_url: &str, value: Option<&str>) -> String {
        match (self.param, value) {
            (Some(param), Some(value)) => format!(
                "{}/{}?{}={}",
                base_url,
                self.path,
                param,
                urlencoding::encode(value)
            ),
            _ => format!("{}/{}", base_url, self.path),
        }
    }
}

/// Full meal detail by id: `lookup.php?i=<id>`.
pub(crate) const LOOKUP_BY_ID: Endpoint = Endpoint {
    path: "lookup.php",
    param: Some("i"),
    key: EnvelopeKey::Meals,
};

/// Meal search by full or partial name: `search.php?s=<name>`.
pub(crate) const SEARCH_BY_NAME: Endpoint = Endpoint {
    path: "search.php",
    param: Some("s"),
    key: EnvelopeKey::Meals,
};

/// Meal search by first letter: `search.php?f=<letter>`.
pub(crate) const SEARCH_BY_FIRST_LETTER: Endpoint = Endpoint {
    path: "search.php",
    param: Some("f"),
    key: EnvelopeKey::Meals,
};

/// All meal categories: `categories.php`.
pub(crate) const ALL_CATEGORIES: Endpoint = Endpoint {
    path: "categories.php",
    param: None,
    key: EnvelopeKey::Categories,
};

/// Meals in one category: `filter.php?c=<category>`.
pub(crate) const FILTER_BY_CATEGORY: Endpoint = Endpoint {
    path: "filter.php",
    param: Some("c"),
    key: EnvelopeKey::Meals,
};

/// All areas: `list.php?a=list`.
pub(crate) const LIST_AREAS: Endpoint = Endpoint {
    path: "list.php",
    param: Some("a"),
    key: EnvelopeKey::Meals,
};

/// Meals from one area: `filter.php?a=<area>`.
pub(crate) const FILTER_BY_AREA: Endpoint = Endpoint {
    path: "filter.php",
    param: Some("a"),
    key: EnvelopeKey::Meals,
};

/// All ingredients: `list.php?i=list`.
pub(crate) const LIST_INGREDIENTS: Endpoint = Endpoint {
    path: "list.php",
    param: Some("i"),
    key: EnvelopeKey::Meals,
};

/// Meals containing one ingredient: `filter.php?i=<ingredient>`.
pub(crate) const FILTER_BY_INGREDIENT: Endpoint = Endpoint {
    path: "filter.php",
    param: Some("i"),
    key: EnvelopeKey::Meals,
};

/// Fixed selector value the `list.php` endpoints expect.
pub(crate) const LIST_SELECTOR: &str = "list";

// src/domain/content/query.rs
//! Search predicates over the content pools.
use crate::domain::content::category::Category;

/// Which pool a listing draws from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Collection {
    /// Every published piece; search looks at title and category name.
    General,
    /// The `FairReview` category; search looks at title only.
    Review,
    /// A single catalog category; search looks at title only.
    Category(Category),
}

impl Collection {
    /// Rows per page for this listing context.
    #[must_use]
    pub const fn page_size(self) -> u32 {
        match self {
            Self::General => 7,
            Self::Review => 8,
            Self::Category(_) => 9,
        }
    }

    /// Whether listed items carry like and comment totals.
    #[must_use]
    pub const fn includes_engagement(self) -> bool {
        matches!(self, Self::Review)
    }
}

/// How the search term constrains a row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TextMatch {
    /// No constraint (empty term).
    Any,
    /// No stored row can satisfy the term. Text columns never hold NUL, so
    /// a term containing one lands here instead of reaching the store.
    Nothing,
    TitleOrCategory(String),
    Title(String),
}

/// Structured filter handed to the read repository. The term is always a
/// literal substring; storage adapters must escape pattern metacharacters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentPredicate {
    collection: Collection,
    text: TextMatch,
    category: Option<Category>,
}

impl ContentPredicate {
    #[must_use]
    pub fn build(search_text: &str, collection: Collection) -> Self {
        let (wrap, category): (fn(String) -> TextMatch, _) = match collection {
            Collection::General => (TextMatch::TitleOrCategory, None),
            Collection::Review => (TextMatch::Title, Some(Category::REVIEW)),
            Collection::Category(cat) => (TextMatch::Title, Some(cat)),
        };
        Self {
            collection,
            text: Self::text_match(search_text, wrap),
            category,
        }
    }

    fn text_match(term: &str, wrap: fn(String) -> TextMatch) -> TextMatch {
        if term.is_empty() {
            TextMatch::Any
        } else if term.contains('\0') {
            TextMatch::Nothing
        } else {
            wrap(term.to_string())
        }
    }

    #[must_use]
    pub const fn collection(&self) -> Collection {
        self.collection
    }

    #[must_use]
    pub const fn text(&self) -> &TextMatch {
        &self.text
    }

    /// Exact category the row must belong to, if any.
    #[must_use]
    pub const fn category(&self) -> Option<Category> {
        self.category
    }

    /// Whether the predicate rules out every row.
    #[must_use]
    pub const fn is_unsatisfiable(&self) -> bool {
        matches!(self.text, TextMatch::Nothing)
    }

    /// Evaluate the predicate against a row in memory.
    #[must_use]
    pub fn matches(&self, title: &str, category: Category) -> bool {
        if self.category.is_some_and(|required| required != category) {
            return false;
        }
        match &self.text {
            TextMatch::Any => true,
            TextMatch::Nothing => false,
            TextMatch::Title(term) => contains_ignore_case(title, term),
            TextMatch::TitleOrCategory(term) => {
                contains_ignore_case(title, term) || contains_ignore_case(category.name(), term)
            }
        }
    }
}

fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// Normalised listing request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    pub search: String,
    pub collection: Collection,
    pub page: u32,
}

impl SearchQuery {
    /// Normalise raw request parameters: missing search becomes "", a missing,
    /// non-numeric or non-positive page becomes 1.
    #[must_use]
    pub fn from_raw(search: Option<&str>, page: Option<&str>, collection: Collection) -> Self {
        Self {
            search: search.unwrap_or_default().to_string(),
            collection,
            page: parse_page(page),
        }
    }

    #[must_use]
    pub fn predicate(&self) -> ContentPredicate {
        ContentPredicate::build(&self.search, self.collection)
    }
}

/// Page number from the raw query value. Anything that is not a positive
/// integer reads as 1; positive values beyond `u32::MAX` clamp to it,
/// however many digits they have.
#[must_use]
pub fn parse_page(raw: Option<&str>) -> u32 {
    let Some(value) = raw.map(str::trim) else {
        return 1;
    };
    let digits = value.strip_prefix('+').unwrap_or(value);
    if digits.is_empty() || !digits.bytes().all(|byte| byte.is_ascii_digit()) {
        return 1;
    }
    match digits.parse::<u32>() {
        Ok(0) => 1,
        Ok(page) => page,
        // only overflow is left once the input is all digits
        Err(_) => u32::MAX,
    }
}

use super::{
    category::{Category, classify},
    natural::natural_cmp,
};
use crate::Result;
use indexmap::IndexMap;

/// A token paired with the category it was classified as.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClassifiedItem<'a> {
    pub value: &'a str,
    pub category: Category,
}

impl<'a> ClassifiedItem<'a> {
    pub fn new(value: &'a str) -> Self {
        Self {
            value,
            category: classify(value),
        }
    }
}

/// Splits raw content on `,`, trims each piece and drops empty pieces.
///
/// Dropping empties removes the artifact left by the trailing comma of
/// every record.
pub fn tokenize(content: &str) -> impl Iterator<Item = &str> {
    content.split(',').map(str::trim).filter(|token| !token.is_empty())
}

/// Stable sort by category rank, then [`natural_cmp`] on the value.
pub fn sort_items(items: &mut [ClassifiedItem<'_>]) {
    items.sort_by(|a, b| {
        a.category
            .rank()
            .cmp(&b.category.rank())
            .then_with(|| natural_cmp(a.value, b.value))
    });
}

/// Builds the value to category mapping in iteration order.
///
/// A repeated value keeps the position of its first insertion and the
/// category of its last one. Equal values always classify the same way, so
/// in practice repeats simply collapse into one entry.
pub fn collect_mapping<'a, I>(items: I) -> IndexMap<&'a str, Category>
where
    I: IntoIterator<Item = ClassifiedItem<'a>>,
{
    let items = items.into_iter();
    let mut mapping = IndexMap::with_capacity(items.size_hint().0);
    for item in items {
        mapping.insert(item.value, item.category);
    }
    mapping
}

/// Renders the mapping as pretty-printed JSON with a 2-space indent.
///
/// # Errors
///
/// Returns [`crate::Error::Unknown`] if serialization fails.
pub fn render(mapping: &IndexMap<&str, Category>) -> Result<String> {
    Ok(serde_json::to_string_pretty(mapping)?)
}

/// The JSON document produced from one raw file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessedDocument {
    pub json: String,
    /// Number of distinct values in the document.
    pub items: usize,
}

impl ProcessedDocument {
    /// Runs tokenize, classify, sort, collect and render over `content`.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::Unknown`] if serialization fails.
    pub fn from_content(content: &str) -> Result<Self> {
        let mut items: Vec<ClassifiedItem<'_>> =
            tokenize(content).map(ClassifiedItem::new).collect();
        sort_items(&mut items);
        let mapping = collect_mapping(items);
        let json = render(&mapping)?;

        #[cfg(feature = "tracing")]
        tracing::debug!("Sorted Processed Data: {}", json);

        Ok(Self {
            json,
            items: mapping.len(),
        })
    }
}

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// One row of the price registry.
///
/// Prices are in USD per one million tokens. Records are `Copy` so every
/// pipeline stage works on its own copy and the registry itself is never touched.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PriceRecord {
    pub provider: &'static str,

    /// Unique within a provider, not across the whole table.
    pub name: &'static str,

    pub input_price: f64,
    pub output_price: f64,

    /// Maximum tokens per request.
    pub context_window: u64,

    pub category: Category,

    /// Free text, may be empty.
    pub notes: &'static str,
}

/// Coarse capability/cost tier of a model.
///
/// `Embedding` and `Image` exist in the data model but are not offered by
/// `--category`, hence the `#[value(skip)]`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Reasoning,
    General,
    Fast,
    #[value(skip)]
    Embedding,
    #[value(skip)]
    Image,
}

impl Category {
    /// Glyph shown in the `Cat` column of the table.
    pub fn icon(&self) -> &'static str {
        match self {
            Category::Reasoning => "🧠",
            Category::General => "⚡",
            Category::Fast => "🚀",
            Category::Embedding => "📐",
            Category::Image => "🖼️",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Reasoning => "reasoning",
            Category::General => "general",
            Category::Fast => "fast",
            Category::Embedding => "embedding",
            Category::Image => "image",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Token counts given to `--calc IN OUT`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TokenWorkload {
    pub input_tokens: u64,
    pub output_tokens: u64,
}

impl TokenWorkload {
    pub fn new(input_tokens: u64, output_tokens: u64) -> Self {
        TokenWorkload {
            input_tokens,
            output_tokens,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_serializes_lowercase() {
        let json = serde_json::to_string(&Category::Reasoning).unwrap();
        assert_eq!(json, "\"reasoning\"");
    }

    #[test]
    fn category_flag_hides_embedding_and_image() {
        let offered: Vec<String> = Category::value_variants()
            .iter()
            .filter_map(|variant| variant.to_possible_value())
            .map(|value| value.get_name().to_owned())
            .collect();

        assert_eq!(offered, vec!["reasoning", "general", "fast"]);
    }

    #[test]
    fn every_category_has_a_glyph() {
        for category in [
            Category::Reasoning,
            Category::General,
            Category::Fast,
            Category::Embedding,
            Category::Image,
        ] {
            assert!(!category.icon().is_empty());
        }
    }
}

pub const DEFAULT_LIMIT: u8 = 5;
pub const DEFAULT_MIN_RATING: f64 = 3.5;
pub const DEFAULT_MAX_PRICE: u8 = 2;

pub const MAX_LIMIT: u8 = 10;
pub const MAX_RATING: f64 = 5.0;
pub const MAX_PRICE_TIER: u8 = 4;

/// Structured form of a general search command.
///
/// A `category` of `None` means "any category": the filter is left out of
/// the request entirely instead of being sent empty.
#[derive(Clone, Debug, PartialEq)]
pub struct SearchQuery {
    pub category: Option<String>,
    pub limit: u8,
    pub min_rating: f64,
    pub max_price: u8,
}

impl Default for SearchQuery {
    fn default() -> Self {
        Self {
            category: None,
            limit: DEFAULT_LIMIT,
            min_rating: DEFAULT_MIN_RATING,
            max_price: DEFAULT_MAX_PRICE,
        }
    }
}

impl SearchQuery {
    pub fn new(
        category: Option<String>,
        limit: u8,
        min_rating: f64,
        max_price: u8,
    ) -> Self {
        Self {
            category: category.filter(|c| !c.is_empty()),
            limit: limit.clamp(1, MAX_LIMIT),
            min_rating: min_rating.clamp(0.0, MAX_RATING),
            max_price: max_price.clamp(1, MAX_PRICE_TIER),
        }
    }

    /// The API filters on a set of acceptable tiers, not a ceiling.
    pub fn price_tiers(&self) -> Vec<u8> {
        (1..=self.max_price).collect()
    }

    pub fn price_param(&self) -> String {
        self.price_tiers()
            .iter()
            .map(|tier| tier.to_string())
            .collect::<Vec<_>>()
            .join(",")
    }
}

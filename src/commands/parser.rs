use std::ops::Range;
use std::sync::OnceLock;

use regex::Regex;

use crate::models::search_query::{
    SearchQuery, DEFAULT_LIMIT, DEFAULT_MAX_PRICE, DEFAULT_MIN_RATING,
};

fn count_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"n(10|[1-9])").expect("valid regex"))
}

fn rating_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"r([0-5](?:\.[05])?)").expect("valid regex"))
}

fn price_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"p([1-4])").expect("valid regex"))
}

fn category_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[a-z][a-z,]*[a-z]").expect("valid regex"))
}

/// A recognised `n`/`r`/`p` tag: where it sits in the text and its value.
struct Tag<'a> {
    span: Range<usize>,
    value: &'a str,
}

/// Parses the arguments of a general search (`chinese,noodles n3 r4.0 p2`).
///
/// Every argument is optional and may appear anywhere, even glued to other
/// arguments (`thai n3p4`, `sushi,n3`). Anything that is not recognised falls
/// back to its default, so this never fails. Count, rating and price tags are
/// located first and cut out of the text; only what is left is searched for a
/// category, so `n5` or `p2` can never end up inside one.
pub fn parse(text: &str) -> SearchQuery {
    let counts = tags(count_re(), text);
    let ratings = tags(rating_re(), text);
    let prices = tags(price_re(), text);

    let limit = first_value::<u8>(&counts);
    let min_rating = first_value::<f64>(&ratings);
    let max_price = first_value::<u8>(&prices);

    let mut leftover = text.to_string();
    let mut spans: Vec<_> = counts
        .iter()
        .chain(&ratings)
        .chain(&prices)
        .map(|tag| tag.span.clone())
        .collect();
    spans.sort_by_key(|span| std::cmp::Reverse(span.start));
    for span in spans {
        leftover.replace_range(span, " ");
    }

    let category = category_re()
        .find(&leftover)
        .map(|m| m.as_str().to_string());

    SearchQuery::new(
        category,
        limit.unwrap_or(DEFAULT_LIMIT),
        min_rating.unwrap_or(DEFAULT_MIN_RATING),
        max_price.unwrap_or(DEFAULT_MAX_PRICE),
    )
}

fn tags<'a>(re: &Regex, text: &'a str) -> Vec<Tag<'a>> {
    re.captures_iter(text)
        .filter_map(|caps| {
            let whole = caps.get(0)?;
            let value = caps.get(1)?;
            is_standalone(text, whole.range()).then(|| Tag {
                span: whole.range(),
                value: value.as_str(),
            })
        })
        .collect()
}

/// A tag must not continue a word (`chinese`, `pan5`) and must not be the
/// front of a longer number (`n11`, `r3.2`).
fn is_standalone(text: &str, span: Range<usize>) -> bool {
    let letter_before = text[..span.start]
        .chars()
        .next_back()
        .is_some_and(|c| c.is_alphabetic());

    let mut after = text[span.end..].chars();
    let number_continues = match after.next() {
        Some(c) if c.is_ascii_digit() => true,
        Some('.') => after.next().is_some_and(|c| c.is_ascii_digit()),
        _ => false,
    };

    !letter_before && !number_continues
}

fn first_value<T: std::str::FromStr>(tags: &[Tag<'_>]) -> Option<T> {
    tags.iter().find_map(|tag| tag.value.parse().ok())
}

use crate::models::business::{BusinessDetail, BusinessSummary};
use crate::models::search_query::SearchQuery;

/// Keeps, in order, up to `query.limit` businesses rated at least
/// `query.min_rating` and renders one `Name:` line for each.
///
/// Returns an empty string when nothing qualifies.
pub fn filter_and_format(
    results: &[BusinessSummary],
    query: &SearchQuery,
) -> String {
    results
        .iter()
        .filter(|business| business.rating >= query.min_rating)
        .take(usize::from(query.limit))
        .map(|business| format!("Name: {}", business.name))
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn format_detail(
    detail: &BusinessDetail,
    reference_label: &str,
) -> String {
    let open_now = if detail.is_open_now { "Yes" } else { "No" };

    format!(
        "Name: {}\n\
         Address: {}\n              {}, {}, {}\n\
         Phone Number: {}\n\
         Rating: {:.1}/5\n\
         Distance: Around {:.1} mi from {}\n\
         Open now: {}",
        detail.name,
        detail.address1,
        detail.city,
        detail.state,
        detail.zip_code,
        detail.phone,
        detail.rating,
        detail.relative_distance,
        reference_label,
        open_now,
    )
}

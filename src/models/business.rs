/// One row of a general search, as much as the list reply needs.
#[derive(Clone, Debug, PartialEq)]
pub struct BusinessSummary {
    pub name: String,
    pub rating: f64,
}

/// A single business joined from a search hit and its detail record.
#[derive(Clone, Debug, PartialEq)]
pub struct BusinessDetail {
    pub name: String,
    pub address1: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    pub phone: String,
    pub rating: f64,
    /// Distance from the search location in multiples of the search radius.
    pub relative_distance: f64,
    pub is_open_now: bool,
}

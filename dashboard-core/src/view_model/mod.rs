//! Pure transforms from fetched arrays to what a page renders.

mod entities;
mod list;
mod summary;

pub use entities::{AVAILABILITY_FACET, CITY_FACET, STATUS_FACET, TYPE_FACET, URGENCY_FACET};
pub use list::{
    ALL, ListAction, ListQuery, ListView, Listable, filter_items,
    matches_search, paginate, total_pages,
};
pub use summary::{
    CenterSummary, HospitalSummary, OrderSummary, RiderSummary, count_where,
    tally,
};

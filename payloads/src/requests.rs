use crate::{
    ApprovalStatus, OrderStatus, RiderStatus, SortOrder, Urgency,
};
use jiff::civil::Date;
use serde::{Deserialize, Serialize};

pub const REJECTION_REASON_MAX_LEN: usize = 500;
pub const DEFAULT_ORDER_LIMIT: u32 = 20;

/// Body of a rejection. The reason is shown to the rejected party.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RejectRequest {
    pub reason: String,
}

/// Validate a rejection reason, returning a user facing message if it
/// can't be submitted.
pub fn validate_reason(reason: &str) -> Result<(), &'static str> {
    let trimmed = reason.trim();
    if trimmed.is_empty() {
        return Err("A reason is required to reject");
    }
    if trimmed.chars().count() > REJECTION_REASON_MAX_LEN {
        return Err("Reason must be at most 500 characters");
    }
    Ok(())
}

impl RejectRequest {
    /// Build a request from user input, trimming and validating it.
    pub fn new(reason: &str) -> Result<Self, &'static str> {
        validate_reason(reason)?;
        Ok(Self {
            reason: reason.trim().to_string(),
        })
    }
}

/// Status change for any entity with a status enum.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusUpdate<S> {
    pub status: S,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl<S> StatusUpdate<S> {
    pub fn new(status: S) -> Self {
        Self { status, note: None }
    }

    pub fn with_note(mut self, note: &str) -> Self {
        let note = note.trim();
        self.note = (!note.is_empty()).then(|| note.to_string());
        self
    }
}

pub type ApprovalStatusUpdate = StatusUpdate<ApprovalStatus>;
pub type RiderStatusUpdate = StatusUpdate<RiderStatus>;
pub type OrderStatusUpdate = StatusUpdate<OrderStatus>;

/// Enable or disable a named feature for a hospital.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeatureToggle {
    pub feature: String,
    pub enabled: bool,
}

/// Query string for the entity listings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListFilter {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
}

/// Columns the orders listing can be sorted by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderSortField {
    CreatedAt,
    Amount,
    Status,
    Urgency,
}

/// Query string for the server-side paginated orders listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderQuery {
    pub limit: u32,
    pub offset: u32,
    pub sort_by: OrderSortField,
    pub sort_order: SortOrder,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<OrderStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub urgency: Option<Urgency>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_from: Option<Date>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_to: Option<Date>,
}

impl Default for OrderQuery {
    fn default() -> Self {
        Self {
            limit: DEFAULT_ORDER_LIMIT,
            offset: 0,
            sort_by: OrderSortField::CreatedAt,
            sort_order: SortOrder::Desc,
            status: None,
            urgency: None,
            search: None,
            date_from: None,
            date_to: None,
        }
    }
}

impl OrderQuery {
    /// Any change to what is being listed starts again from the first page.
    pub fn with_filters(
        &self,
        status: Option<OrderStatus>,
        urgency: Option<Urgency>,
        search: Option<String>,
    ) -> Self {
        Self {
            status,
            urgency,
            search: search.filter(|s| !s.trim().is_empty()),
            offset: 0,
            ..self.clone()
        }
    }

    pub fn next_page(&self) -> Self {
        Self {
            offset: self.offset + self.limit,
            ..self.clone()
        }
    }

    pub fn previous_page(&self) -> Self {
        Self {
            offset: self.offset.saturating_sub(self.limit),
            ..self.clone()
        }
    }

    /// 1-based page number for display.
    pub fn page_number(&self) -> u32 {
        if self.limit == 0 {
            return 1;
        }
        self.offset / self.limit + 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_reason_is_rejected() {
        assert_eq!(
            validate_reason("   "),
            Err("A reason is required to reject")
        );
        assert!(RejectRequest::new("").is_err());
    }

    #[test]
    fn reason_is_trimmed() {
        let req = RejectRequest::new("  missing license \n").unwrap();
        assert_eq!(req.reason, "missing license");
    }

    #[test]
    fn overly_long_reason_is_rejected() {
        let long = "x".repeat(REJECTION_REASON_MAX_LEN + 1);
        assert!(validate_reason(&long).is_err());
    }

    #[test]
    fn filter_change_resets_offset() {
        let query = OrderQuery::default().next_page().next_page();
        assert_eq!(query.offset, 40);
        assert_eq!(query.page_number(), 3);

        let filtered = query.with_filters(
            Some(OrderStatus::Pending),
            None,
            Some("  ".to_string()),
        );
        assert_eq!(filtered.offset, 0);
        assert_eq!(filtered.search, None);
        assert_eq!(filtered.status, Some(OrderStatus::Pending));
    }

    #[test]
    fn previous_page_saturates_at_zero() {
        let query = OrderQuery::default().previous_page();
        assert_eq!(query.offset, 0);
    }

    #[test]
    fn empty_note_is_dropped() {
        let update = StatusUpdate::new(RiderStatus::Suspended).with_note(" ");
        assert_eq!(update.note, None);
        let json = serde_json::to_value(&update).unwrap();
        assert_eq!(json, serde_json::json!({ "status": "suspended" }));
    }
}

use payloads::responses::{CollectionCenter, Hospital, Order, Rider};
use payloads::{ApprovalStatus, OrderStatus, RiderStatus, Urgency};
use rust_decimal::Decimal;
use std::collections::BTreeMap;

pub fn count_where<T>(items: &[T], predicate: impl Fn(&T) -> bool) -> usize {
    items.iter().filter(|item| predicate(item)).count()
}

/// Count items per key.
pub fn tally<T, K: Ord>(items: &[T], key: impl Fn(&T) -> K) -> BTreeMap<K, usize> {
    let mut counts = BTreeMap::new();
    for item in items {
        *counts.entry(key(item)).or_insert(0) += 1;
    }
    counts
}

/// Counts shown on top of the hospitals page.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HospitalSummary {
    pub total: usize,
    pub pending: usize,
    pub approved: usize,
    pub rejected: usize,
    pub suspended: usize,
}

impl HospitalSummary {
    pub fn from_hospitals(hospitals: &[Hospital]) -> Self {
        let by_status =
            |status: ApprovalStatus| count_where(hospitals, |h| h.status == status);
        Self {
            total: hospitals.len(),
            pending: by_status(ApprovalStatus::Pending),
            approved: by_status(ApprovalStatus::Approved),
            rejected: by_status(ApprovalStatus::Rejected),
            suspended: by_status(ApprovalStatus::Suspended),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CenterSummary {
    pub total: usize,
    pub pending: usize,
    pub approved: usize,
    pub daily_capacity: u64,
}

impl CenterSummary {
    pub fn from_centers(centers: &[CollectionCenter]) -> Self {
        Self {
            total: centers.len(),
            pending: count_where(centers, |c| c.status == ApprovalStatus::Pending),
            approved: count_where(centers, |c| {
                c.status == ApprovalStatus::Approved
            }),
            daily_capacity: centers
                .iter()
                .filter(|c| c.status == ApprovalStatus::Approved)
                .map(|c| u64::from(c.daily_capacity))
                .sum(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RiderSummary {
    pub total: usize,
    pub active: usize,
    /// Active and currently free to take an order.
    pub available: usize,
    pub pending: usize,
    pub inactive: usize,
    pub suspended: usize,
}

impl RiderSummary {
    pub fn from_riders(riders: &[Rider]) -> Self {
        let by_status =
            |status: RiderStatus| count_where(riders, |r| r.status == status);
        Self {
            total: riders.len(),
            active: by_status(RiderStatus::Active),
            available: count_where(riders, |r| {
                r.status == RiderStatus::Active && r.is_available
            }),
            pending: by_status(RiderStatus::Pending),
            inactive: by_status(RiderStatus::Inactive),
            suspended: by_status(RiderStatus::Suspended),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrderSummary {
    pub total: usize,
    pub by_status: BTreeMap<OrderStatus, usize>,
    /// Urgent and STAT orders not yet delivered or cancelled.
    pub open_urgent: usize,
    /// Sum of delivered order amounts.
    pub delivered_revenue: Decimal,
}

impl OrderSummary {
    pub fn from_orders(orders: &[Order]) -> Self {
        Self {
            total: orders.len(),
            by_status: tally(orders, |o| o.status),
            open_urgent: count_where(orders, |o| {
                o.urgency != Urgency::Routine && !o.status.is_terminal()
            }),
            delivered_revenue: orders
                .iter()
                .filter(|o| o.status == OrderStatus::Delivered)
                .map(|o| o.amount)
                .sum(),
        }
    }

    pub fn count(&self, status: OrderStatus) -> usize {
        self.by_status.get(&status).copied().unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_helpers::mock;

    #[test]
    fn hospital_counts_add_up() {
        let summary = HospitalSummary::from_hospitals(&mock::hospitals());
        assert_eq!(summary.total, 5);
        assert_eq!(summary.pending, 2);
        assert_eq!(
            summary.pending + summary.approved + summary.rejected + summary.suspended,
            summary.total
        );
    }

    #[test]
    fn only_approved_centers_contribute_capacity() {
        let summary = CenterSummary::from_centers(&mock::collection_centers());
        assert_eq!(summary.approved, 2);
        assert_eq!(summary.daily_capacity, 200 + 600);
    }

    #[test]
    fn available_riders_must_be_active() {
        let summary = RiderSummary::from_riders(&mock::riders());
        assert_eq!(summary.active, 2);
        assert_eq!(summary.available, 1);
    }

    #[test]
    fn order_tally_covers_every_order() {
        let orders = mock::orders();
        let summary = OrderSummary::from_orders(&orders);
        assert_eq!(summary.by_status.values().sum::<usize>(), orders.len());
        assert_eq!(summary.count(OrderStatus::Pending), 4);
        assert!(summary.delivered_revenue > Decimal::ZERO);
    }

    #[test]
    fn empty_input_gives_zero_counts() {
        assert_eq!(HospitalSummary::from_hospitals(&[]), HospitalSummary::default());
        assert_eq!(count_where::<u8>(&[], |_| true), 0);
    }
}

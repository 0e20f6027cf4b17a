use jiff::Timestamp;
use jiff::civil::Date;
use payloads::responses::{
    CollectionCenter, DashboardStats, Hospital, Order, Rider,
};
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

use super::{Cell, Report, ReportTable};

/// A type that can be laid out as one table row.
pub trait Tabular {
    const HEADERS: &'static [&'static str];

    fn cells(&self) -> Vec<Cell>;
}

fn timestamp(ts: &Timestamp) -> Cell {
    Cell::Text(ts.strftime("%Y-%m-%d %H:%M").to_string())
}

fn money(amount: &Decimal) -> Cell {
    Cell::Number(amount.to_f64().unwrap_or_default())
}

fn optional(text: &Option<String>) -> Cell {
    Cell::Text(text.clone().unwrap_or_else(|| "-".to_string()))
}

impl Tabular for Hospital {
    const HEADERS: &'static [&'static str] = &[
        "Name", "Type", "City", "Email", "Phone", "Status", "Orders", "Joined",
    ];

    fn cells(&self) -> Vec<Cell> {
        vec![
            self.name.as_str().into(),
            self.hospital_type.label().into(),
            self.city.as_str().into(),
            self.contact_email.as_str().into(),
            self.contact_phone.as_str().into(),
            self.status.label().into(),
            self.total_orders.into(),
            timestamp(&self.created_at),
        ]
    }
}

impl Tabular for CollectionCenter {
    const HEADERS: &'static [&'static str] =
        &["Name", "City", "Address", "Phone", "Status", "Daily Capacity"];

    fn cells(&self) -> Vec<Cell> {
        vec![
            self.name.as_str().into(),
            self.city.as_str().into(),
            self.address.as_str().into(),
            self.contact_phone.as_str().into(),
            self.status.label().into(),
            u64::from(self.daily_capacity).into(),
        ]
    }
}

impl Tabular for Rider {
    const HEADERS: &'static [&'static str] = &[
        "Name",
        "Phone",
        "City",
        "Vehicle",
        "Status",
        "Available",
        "Deliveries",
        "Rating",
    ];

    fn cells(&self) -> Vec<Cell> {
        vec![
            self.name.as_str().into(),
            self.phone.as_str().into(),
            self.city.as_str().into(),
            self.vehicle_number.as_str().into(),
            self.status.label().into(),
            if self.is_available { "Yes" } else { "No" }.into(),
            self.completed_deliveries.into(),
            self.rating
                .as_ref()
                .map(money)
                .unwrap_or_else(|| "-".into()),
        ]
    }
}

impl Tabular for Order {
    const HEADERS: &'static [&'static str] = &[
        "Reference",
        "Hospital",
        "Patient",
        "Test",
        "Rider",
        "Status",
        "Urgency",
        "Amount",
        "Created",
    ];

    fn cells(&self) -> Vec<Cell> {
        vec![
            self.reference.as_str().into(),
            self.hospital_name.as_str().into(),
            self.patient_name.as_str().into(),
            self.test_type.as_str().into(),
            optional(&self.rider_name),
            self.status.label().into(),
            self.urgency.label().into(),
            money(&self.amount),
            timestamp(&self.created_at),
        ]
    }
}

fn key_values(title: &str, rows: Vec<(&str, Cell)>) -> ReportTable {
    ReportTable {
        title: title.to_string(),
        headers: vec!["Metric".to_string(), "Value".to_string()],
        rows: rows
            .into_iter()
            .map(|(key, value)| vec![key.into(), value])
            .collect(),
    }
}

/// Network-wide report: headline numbers and one table per entity.
pub fn dashboard_report(
    stats: &DashboardStats,
    hospitals: &[Hospital],
    centers: &[CollectionCenter],
    riders: &[Rider],
    orders: &[Order],
    generated_on: Date,
) -> Report {
    let summary = key_values(
        "Summary",
        vec![
            ("Hospitals", stats.total_hospitals.into()),
            ("Hospitals pending approval", stats.pending_hospitals.into()),
            ("Collection centers", stats.total_collection_centers.into()),
            (
                "Collection centers pending approval",
                stats.pending_collection_centers.into(),
            ),
            ("Riders", stats.total_riders.into()),
            ("Active riders", stats.active_riders.into()),
            ("Orders today", stats.orders_today.into()),
            ("Pending orders", stats.pending_orders.into()),
            ("Delivered orders", stats.delivered_orders.into()),
            ("Revenue today", money(&stats.revenue_today)),
        ],
    );
    Report {
        title: "Operations Report".to_string(),
        subject: None,
        generated_on,
        tables: vec![
            summary,
            ReportTable::from_items("Hospitals", hospitals),
            ReportTable::from_items("Collection Centers", centers),
            ReportTable::from_items("Riders", riders),
            ReportTable::from_items("Orders", orders),
        ],
    }
}

/// Report on one hospital and the orders it placed.
pub fn hospital_report(
    hospital: &Hospital,
    orders: &[Order],
    generated_on: Date,
) -> Report {
    let own_orders: Vec<Order> = orders
        .iter()
        .filter(|o| o.hospital_id == hospital.id)
        .cloned()
        .collect();
    let enabled_features = hospital
        .features
        .iter()
        .filter(|f| f.enabled)
        .map(|f| f.name.as_str())
        .collect::<Vec<_>>()
        .join(", ");
    let mut details = key_values(
        "Details",
        vec![
            ("Name", hospital.name.as_str().into()),
            ("Type", hospital.hospital_type.label().into()),
            ("Address", hospital.address.as_str().into()),
            ("City", hospital.city.as_str().into()),
            ("Email", hospital.contact_email.as_str().into()),
            ("Phone", hospital.contact_phone.as_str().into()),
            ("Status", hospital.status.label().into()),
            ("Total orders", hospital.total_orders.into()),
            ("Joined", timestamp(&hospital.created_at)),
        ],
    );
    if !enabled_features.is_empty() {
        details
            .rows
            .push(vec!["Enabled features".into(), enabled_features.into()]);
    }
    if let Some(reason) = &hospital.rejection_reason {
        details
            .rows
            .push(vec!["Rejection reason".into(), reason.as_str().into()]);
    }
    details.headers = vec!["Field".to_string(), "Value".to_string()];

    Report {
        title: "Hospital Report".to_string(),
        subject: Some(hospital.name.clone()),
        generated_on,
        tables: vec![details, ReportTable::from_items("Orders", &own_orders)],
    }
}

pub fn orders_report(orders: &[Order], generated_on: Date) -> Report {
    Report {
        title: "Orders Report".to_string(),
        subject: None,
        generated_on,
        tables: vec![ReportTable::from_items("Orders", orders)],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jiff::civil::date;
    use test_helpers::mock;

    #[test]
    fn rows_match_header_width() {
        let report = dashboard_report(
            &mock::dashboard_stats(),
            &mock::hospitals(),
            &mock::collection_centers(),
            &mock::riders(),
            &mock::orders(),
            date(2026, 3, 9),
        );
        assert_eq!(report.tables.len(), 5);
        for table in &report.tables {
            for row in &table.rows {
                assert_eq!(row.len(), table.headers.len(), "{}", table.title);
            }
        }
    }

    #[test]
    fn hospital_report_only_includes_its_orders() {
        let hospital = &mock::hospitals()[0];
        let report =
            hospital_report(hospital, &mock::orders(), date(2026, 3, 9));
        assert_eq!(report.subject.as_deref(), Some("St. Mary's General"));
        let orders = &report.tables[1];
        assert_eq!(orders.rows.len(), 12);
        assert!(
            orders
                .rows
                .iter()
                .all(|row| row[1] == Cell::Text(hospital.name.clone()))
        );
        let details = &report.tables[0];
        assert!(details.rows.iter().any(|row| {
            row[0] == Cell::from("Enabled features")
                && row[1] == Cell::from("priority_pickup")
        }));
    }

    #[test]
    fn missing_rider_renders_as_dash() {
        let order = mock::orders()
            .into_iter()
            .find(|o| o.rider_name.is_none())
            .unwrap();
        assert_eq!(order.cells()[4], Cell::from("-"));
    }
}

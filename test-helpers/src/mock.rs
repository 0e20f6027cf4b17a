//! Realistic operations data for tests.
//!
//! The dataset covers a small regional network:
//! - hospitals in every approval state, one with features enabled
//! - collection centers pending and approved
//! - riders across statuses and availability
//! - orders spanning statuses, urgencies and days

use jiff::Timestamp;
use payloads::responses::{
    CollectionCenter, DashboardStats, Hospital, HospitalFeature, Order,
    OrdersPage, Rider,
};
use payloads::{
    ApprovalStatus, CollectionCenterId, HospitalId, HospitalType, OrderId,
    OrderStatus, RiderId, RiderStatus, Urgency,
};
use rust_decimal::Decimal;
use uuid::Uuid;

fn ts(s: &str) -> Timestamp {
    s.parse().expect("fixture timestamps are valid")
}

pub fn hospital_id(n: u128) -> HospitalId {
    HospitalId(Uuid::from_u128(0x1000 + n))
}

pub fn center_id(n: u128) -> CollectionCenterId {
    CollectionCenterId(Uuid::from_u128(0x2000 + n))
}

pub fn rider_id(n: u128) -> RiderId {
    RiderId(Uuid::from_u128(0x3000 + n))
}

pub fn order_id(n: u128) -> OrderId {
    OrderId(Uuid::from_u128(0x4000 + n))
}

fn hospital(
    n: u128,
    name: &str,
    city: &str,
    hospital_type: HospitalType,
    status: ApprovalStatus,
) -> Hospital {
    Hospital {
        id: hospital_id(n),
        name: name.to_string(),
        hospital_type,
        city: city.to_string(),
        address: format!("{n} Main Road, {city}"),
        contact_email: format!("ops{n}@example.org"),
        contact_phone: format!("+91 98450 0{n:04}"),
        status,
        rejection_reason: None,
        features: Vec::new(),
        total_orders: (n as u64) * 12,
        created_at: ts("2026-01-05T08:00:00Z"),
    }
}

pub fn hospitals() -> Vec<Hospital> {
    let mut st_marys = hospital(
        1,
        "St. Mary's General",
        "Bengaluru",
        HospitalType::General,
        ApprovalStatus::Approved,
    );
    st_marys.features = vec![
        HospitalFeature {
            name: "priority_pickup".to_string(),
            enabled: true,
        },
        HospitalFeature {
            name: "bulk_orders".to_string(),
            enabled: false,
        },
    ];

    let mut lakeside = hospital(
        4,
        "Lakeside Diagnostics",
        "Mysuru",
        HospitalType::Diagnostic,
        ApprovalStatus::Rejected,
    );
    lakeside.rejection_reason = Some("License expired".to_string());

    vec![
        st_marys,
        hospital(
            2,
            "City Care Clinic",
            "Bengaluru",
            HospitalType::Clinic,
            ApprovalStatus::Pending,
        ),
        hospital(
            3,
            "Apollo Heart Institute",
            "Chennai",
            HospitalType::Specialty,
            ApprovalStatus::Pending,
        ),
        lakeside,
        hospital(
            5,
            "Green Valley Hospital",
            "Hubballi",
            HospitalType::General,
            ApprovalStatus::Suspended,
        ),
    ]
}

pub fn collection_centers() -> Vec<CollectionCenter> {
    let center = |n: u128, name: &str, city: &str, status| CollectionCenter {
        id: center_id(n),
        name: name.to_string(),
        city: city.to_string(),
        address: format!("Plot {n}, Industrial Area, {city}"),
        contact_phone: format!("+91 80 4000 {n:04}"),
        status,
        rejection_reason: None,
        daily_capacity: 200 * n as u32,
        latitude: Some(12.97 + n as f64 / 100.0),
        longitude: Some(77.59 + n as f64 / 100.0),
        created_at: ts("2026-01-10T10:30:00Z"),
    };
    vec![
        center(1, "Central Lab Koramangala", "Bengaluru", ApprovalStatus::Approved),
        center(2, "Northside Sample Hub", "Bengaluru", ApprovalStatus::Pending),
        center(3, "Coastal Labs", "Mangaluru", ApprovalStatus::Approved),
    ]
}

pub fn riders() -> Vec<Rider> {
    let rider = |n: u128, name: &str, status, is_available| Rider {
        id: rider_id(n),
        name: name.to_string(),
        phone: format!("+91 99000 1{n:04}"),
        city: "Bengaluru".to_string(),
        vehicle_number: format!("KA-01-AB-{n:04}"),
        status,
        is_available,
        rejection_reason: None,
        completed_deliveries: (n as u64) * 40,
        rating: Some(Decimal::new(45 - n as i64, 1)),
        created_at: ts("2026-02-01T07:15:00Z"),
    };
    vec![
        rider(1, "Ravi Kumar", RiderStatus::Active, true),
        rider(2, "Anita Sharma", RiderStatus::Active, false),
        rider(3, "Mohammed Irfan", RiderStatus::Pending, false),
        rider(4, "Deepa Nair", RiderStatus::Inactive, false),
        rider(5, "Suresh Gowda", RiderStatus::Suspended, false),
    ]
}

/// Twenty-three orders, enough to span three pages of ten.
pub fn orders() -> Vec<Order> {
    let statuses = OrderStatus::ALL;
    let urgencies = Urgency::ALL;
    let hospitals = hospitals();
    (0..23u128)
        .map(|n| {
            let hospital = &hospitals[(n % 2) as usize];
            let status = statuses[(n as usize) % statuses.len()];
            let created_at = ts("2026-03-01T06:00:00Z")
                .checked_add(jiff::Span::new().hours(n as i64 * 7))
                .expect("fixture timestamps stay in range");
            let assigned = !matches!(status, OrderStatus::Pending);
            Order {
                id: order_id(n),
                reference: format!("ORD-{:05}", 10_000 + n),
                hospital_id: hospital.id,
                hospital_name: hospital.name.clone(),
                collection_center_id: Some(center_id(1)),
                collection_center_name: Some(
                    "Central Lab Koramangala".to_string(),
                ),
                rider_id: assigned.then(|| rider_id(1)),
                rider_name: assigned.then(|| "Ravi Kumar".to_string()),
                patient_name: format!("Patient {n}"),
                test_type: if n % 3 == 0 {
                    "Complete Blood Count".to_string()
                } else {
                    "Lipid Profile".to_string()
                },
                status,
                urgency: urgencies[(n as usize) % urgencies.len()],
                amount: Decimal::new(45_000 + (n as i64) * 1_250, 2),
                created_at,
                delivered_at: matches!(status, OrderStatus::Delivered)
                    .then_some(created_at),
            }
        })
        .collect()
}

/// First page of [`orders`] as the server would return it.
pub fn orders_page(limit: u32, offset: u32) -> OrdersPage {
    let all = orders();
    let total = all.len() as u64;
    let orders = all
        .into_iter()
        .skip(offset as usize)
        .take(limit as usize)
        .collect();
    OrdersPage {
        orders,
        total,
        limit,
        offset,
    }
}

pub fn dashboard_stats() -> DashboardStats {
    let hospitals = hospitals();
    let riders = riders();
    let orders = orders();
    DashboardStats {
        total_hospitals: hospitals.len() as u64,
        pending_hospitals: hospitals
            .iter()
            .filter(|h| h.status == ApprovalStatus::Pending)
            .count() as u64,
        total_collection_centers: collection_centers().len() as u64,
        pending_collection_centers: 1,
        total_riders: riders.len() as u64,
        active_riders: riders
            .iter()
            .filter(|r| r.status == RiderStatus::Active)
            .count() as u64,
        orders_today: 4,
        pending_orders: orders
            .iter()
            .filter(|o| o.status == OrderStatus::Pending)
            .count() as u64,
        delivered_orders: orders
            .iter()
            .filter(|o| o.status == OrderStatus::Delivered)
            .count() as u64,
        revenue_today: Decimal::new(1_850_00, 2),
    }
}

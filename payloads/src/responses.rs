use crate::{
    ApprovalStatus, CollectionCenterId, HospitalId, HospitalType, OrderId,
    OrderStatus, RiderId, RiderStatus, Urgency,
};
use jiff::Timestamp;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Message used when the server reports a failure without saying why.
pub const DEFAULT_FAILURE_MESSAGE: &str = "The request was not successful";

/// Wrapper returned by every operations endpoint.
///
/// When `success` is true `data` carries the payload. When it is false
/// `error` carries a human readable message and `data` must be ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: Option<T>,
    #[serde(default)]
    pub error: Option<String>,
}

impl<T> ApiResponse<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(message.into()),
        }
    }

    /// Collapse the envelope into a `Result`, enforcing that successful
    /// envelopes actually carry data.
    pub fn into_result(self) -> Result<T, crate::ClientError> {
        match (self.success, self.data) {
            (true, Some(data)) => Ok(data),
            (true, None) => Err(crate::ClientError::MissingData),
            (false, _) => Err(crate::ClientError::Rejected(
                self.error
                    .filter(|e| !e.trim().is_empty())
                    .unwrap_or_else(|| DEFAULT_FAILURE_MESSAGE.to_string()),
            )),
        }
    }
}

/// The operator currently signed in to the dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OperatorProfile {
    pub name: String,
    pub email: String,
    pub role: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HospitalFeature {
    pub name: String,
    pub enabled: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hospital {
    pub id: HospitalId,
    pub name: String,
    pub hospital_type: HospitalType,
    pub city: String,
    pub address: String,
    pub contact_email: String,
    pub contact_phone: String,
    pub status: ApprovalStatus,
    #[serde(default)]
    pub rejection_reason: Option<String>,
    #[serde(default)]
    pub features: Vec<HospitalFeature>,
    pub total_orders: u64,
    pub created_at: Timestamp,
}

impl Hospital {
    pub fn feature_enabled(&self, feature: &str) -> bool {
        self.features
            .iter()
            .any(|f| f.name == feature && f.enabled)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CollectionCenter {
    pub id: CollectionCenterId,
    pub name: String,
    pub city: String,
    pub address: String,
    pub contact_phone: String,
    pub status: ApprovalStatus,
    #[serde(default)]
    pub rejection_reason: Option<String>,
    /// Samples the center can process per day.
    pub daily_capacity: u32,
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub longitude: Option<f64>,
    pub created_at: Timestamp,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rider {
    pub id: RiderId,
    pub name: String,
    pub phone: String,
    pub city: String,
    pub vehicle_number: String,
    pub status: RiderStatus,
    pub is_available: bool,
    #[serde(default)]
    pub rejection_reason: Option<String>,
    pub completed_deliveries: u64,
    #[serde(default)]
    pub rating: Option<Decimal>,
    pub created_at: Timestamp,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: OrderId,
    /// Short human facing reference, e.g. `ORD-10442`.
    pub reference: String,
    pub hospital_id: HospitalId,
    pub hospital_name: String,
    #[serde(default)]
    pub collection_center_id: Option<CollectionCenterId>,
    #[serde(default)]
    pub collection_center_name: Option<String>,
    #[serde(default)]
    pub rider_id: Option<RiderId>,
    #[serde(default)]
    pub rider_name: Option<String>,
    pub patient_name: String,
    pub test_type: String,
    pub status: OrderStatus,
    pub urgency: Urgency,
    pub amount: Decimal,
    pub created_at: Timestamp,
    #[serde(default)]
    pub delivered_at: Option<Timestamp>,
}

/// One page of orders as returned by the server-side paginated listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrdersPage {
    pub orders: Vec<Order>,
    pub total: u64,
    pub limit: u32,
    pub offset: u32,
}

impl OrdersPage {
    pub fn has_next(&self) -> bool {
        u64::from(self.offset) + (self.orders.len() as u64) < self.total
    }

    pub fn has_previous(&self) -> bool {
        self.offset > 0
    }
}

/// Headline numbers for the overview page.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DashboardStats {
    pub total_hospitals: u64,
    pub pending_hospitals: u64,
    pub total_collection_centers: u64,
    pub pending_collection_centers: u64,
    pub total_riders: u64,
    pub active_riders: u64,
    pub orders_today: u64,
    pub pending_orders: u64,
    pub delivered_orders: u64,
    pub revenue_today: Decimal,
}

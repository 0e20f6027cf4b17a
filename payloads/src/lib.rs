//! Wire types shared between the operations API and the dashboard.

pub mod api_client;
pub mod requests;
pub mod responses;

pub use api_client::{APIClient, ClientError};
pub use responses::ApiResponse;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Id type wrapper helps ensure we don't mix up ids for different entities.
macro_rules! entity_id {
    ($name:ident) => {
        #[derive(
            Debug,
            Clone,
            Copy,
            PartialEq,
            Eq,
            Hash,
            PartialOrd,
            Ord,
            Serialize,
            Deserialize,
            derive_more::Display,
        )]
        #[serde(transparent)]
        pub struct $name(pub Uuid);

        impl $name {
            pub fn new_v4() -> Self {
                Self(Uuid::new_v4())
            }
        }

        // Route parameters in the dashboard are parsed through this.
        impl std::str::FromStr for $name {
            type Err = uuid::Error;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Uuid::parse_str(s).map(Self)
            }
        }
    };
}

entity_id!(HospitalId);
entity_id!(CollectionCenterId);
entity_id!(RiderId);
entity_id!(OrderId);

/// Error returned when parsing one of the status enums from a string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown {kind} value: {value}")]
pub struct ParseEnumError {
    pub kind: &'static str,
    pub value: String,
}

/// Declares a wire enum with snake_case serde names, `Display`, `FromStr`
/// and an `ALL` slice for select controls.
macro_rules! wire_enum {
    (
        $(#[$meta:meta])*
        $name:ident, $kind:literal {
            $($variant:ident => $wire:literal, $label:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord,
            Serialize, Deserialize,
        )]
        pub enum $name {
            $(#[serde(rename = $wire)] $variant),+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// Value used on the wire and in query strings.
            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $wire),+
                }
            }

            /// Human readable label.
            pub fn label(&self) -> &'static str {
                match self {
                    $($name::$variant => $label),+
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl std::str::FromStr for $name {
            type Err = ParseEnumError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($wire => Ok($name::$variant),)+
                    _ => Err(ParseEnumError {
                        kind: $kind,
                        value: s.to_string(),
                    }),
                }
            }
        }
    };
}

wire_enum! {
    /// Onboarding state shared by hospitals and collection centers.
    ApprovalStatus, "approval status" {
        Pending => "pending", "Pending",
        Approved => "approved", "Approved",
        Rejected => "rejected", "Rejected",
        Suspended => "suspended", "Suspended",
    }
}

wire_enum! {
    RiderStatus, "rider status" {
        Pending => "pending", "Pending",
        Active => "active", "Active",
        Inactive => "inactive", "Inactive",
        Suspended => "suspended", "Suspended",
    }
}

wire_enum! {
    OrderStatus, "order status" {
        Pending => "pending", "Pending",
        Assigned => "assigned", "Assigned",
        PickedUp => "picked_up", "Picked Up",
        InTransit => "in_transit", "In Transit",
        Delivered => "delivered", "Delivered",
        Cancelled => "cancelled", "Cancelled",
    }
}

wire_enum! {
    /// How quickly a sample must reach the collection center.
    Urgency, "urgency" {
        Routine => "routine", "Routine",
        Urgent => "urgent", "Urgent",
        Stat => "stat", "STAT",
    }
}

wire_enum! {
    HospitalType, "hospital type" {
        General => "general", "General",
        Specialty => "specialty", "Specialty",
        Clinic => "clinic", "Clinic",
        Diagnostic => "diagnostic", "Diagnostic",
    }
}

wire_enum! {
    SortOrder, "sort order" {
        Asc => "asc", "Ascending",
        Desc => "desc", "Descending",
    }
}

impl OrderStatus {
    /// Orders in a terminal state can no longer change status.
    pub fn is_terminal(&self) -> bool {
        matches!(self, OrderStatus::Delivered | OrderStatus::Cancelled)
    }
}

impl ApprovalStatus {
    /// Only entities awaiting review can be approved or rejected.
    pub fn is_reviewable(&self) -> bool {
        matches!(self, ApprovalStatus::Pending)
    }
}

impl RiderStatus {
    pub fn is_reviewable(&self) -> bool {
        matches!(self, RiderStatus::Pending)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_round_trips_through_strings() {
        for status in OrderStatus::ALL {
            let parsed: OrderStatus = status.to_string().parse().unwrap();
            assert_eq!(parsed, *status);
        }
    }

    #[test]
    fn unknown_value_is_rejected() {
        let err = "on_fire".parse::<Urgency>().unwrap_err();
        assert_eq!(err.kind, "urgency");
        assert_eq!(err.to_string(), "unknown urgency value: on_fire");
    }

    #[test]
    fn wire_names_are_snake_case() {
        let json = serde_json::to_string(&OrderStatus::PickedUp).unwrap();
        assert_eq!(json, "\"picked_up\"");
        assert_eq!(OrderStatus::PickedUp.label(), "Picked Up");
    }

    #[test]
    fn ids_serialize_transparently() {
        let id = HospitalId(Uuid::nil());
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"00000000-0000-0000-0000-000000000000\"");
    }
}

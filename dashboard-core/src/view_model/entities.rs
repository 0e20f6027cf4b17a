use payloads::responses::{CollectionCenter, Hospital, Order, Rider};

use super::Listable;

pub const STATUS_FACET: &str = "status";
pub const TYPE_FACET: &str = "type";
pub const CITY_FACET: &str = "city";
pub const URGENCY_FACET: &str = "urgency";
pub const AVAILABILITY_FACET: &str = "availability";

impl Listable for Hospital {
    fn search_fields(&self) -> Vec<&str> {
        vec![
            self.name.as_str(),
            self.city.as_str(),
            self.contact_email.as_str(),
        ]
    }

    fn facet(&self, name: &str) -> Option<String> {
        match name {
            STATUS_FACET => Some(self.status.to_string()),
            TYPE_FACET => Some(self.hospital_type.to_string()),
            CITY_FACET => Some(self.city.clone()),
            _ => None,
        }
    }
}

impl Listable for CollectionCenter {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.name.as_str(), self.city.as_str(), self.address.as_str()]
    }

    fn facet(&self, name: &str) -> Option<String> {
        match name {
            STATUS_FACET => Some(self.status.to_string()),
            CITY_FACET => Some(self.city.clone()),
            _ => None,
        }
    }
}

impl Listable for Rider {
    fn search_fields(&self) -> Vec<&str> {
        vec![
            self.name.as_str(),
            self.phone.as_str(),
            self.vehicle_number.as_str(),
            self.city.as_str(),
        ]
    }

    fn facet(&self, name: &str) -> Option<String> {
        match name {
            STATUS_FACET => Some(self.status.to_string()),
            CITY_FACET => Some(self.city.clone()),
            AVAILABILITY_FACET => Some(
                if self.is_available { "available" } else { "unavailable" }
                    .to_string(),
            ),
            _ => None,
        }
    }
}

impl Listable for Order {
    fn search_fields(&self) -> Vec<&str> {
        let mut fields = vec![
            self.reference.as_str(),
            self.patient_name.as_str(),
            self.hospital_name.as_str(),
        ];
        if let Some(rider) = &self.rider_name {
            fields.push(rider.as_str());
        }
        fields
    }

    fn facet(&self, name: &str) -> Option<String> {
        match name {
            STATUS_FACET => Some(self.status.to_string()),
            URGENCY_FACET => Some(self.urgency.to_string()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view_model::{ListAction, ListQuery, filter_items};
    use test_helpers::mock;

    fn facet(name: &str, value: &str) -> ListAction {
        ListAction::SetFacet {
            name: name.to_string(),
            value: value.to_string(),
        }
    }

    #[test]
    fn hospitals_filter_by_status_and_city_search() {
        let query = ListQuery::new(10)
            .apply(facet(STATUS_FACET, "pending"))
            .apply(ListAction::SetSearch("bengaluru".into()));
        let found = filter_items(&mock::hospitals(), &query);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].name, "City Care Clinic");
    }

    #[test]
    fn riders_filter_by_availability() {
        let query = ListQuery::new(10).apply(facet(AVAILABILITY_FACET, "available"));
        let found = filter_items(&mock::riders(), &query);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].name, "Ravi Kumar");
    }

    #[test]
    fn orders_search_by_rider_name() {
        let query = ListQuery::new(50).apply(ListAction::SetSearch("ravi".into()));
        let found = filter_items(&mock::orders(), &query);
        assert!(!found.is_empty());
        assert!(found.iter().all(|o| o.rider_name.is_some()));
    }

    #[test]
    fn orders_filter_by_urgency() {
        let query = ListQuery::new(50).apply(facet(URGENCY_FACET, "stat"));
        let found = filter_items(&mock::orders(), &query);
        assert!(!found.is_empty());
        assert!(found.iter().all(|o| o.urgency == payloads::Urgency::Stat));
    }
}

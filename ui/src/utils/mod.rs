pub mod time;

use payloads::{ApprovalStatus, HospitalType, OrderStatus, RiderStatus, Urgency};
use std::collections::BTreeSet;
use std::fmt::Display;

/// A wire enum offered in a select control.
pub trait Choice: Copy + 'static {
    fn all() -> &'static [Self];
    fn value(&self) -> &'static str;
    fn label(&self) -> &'static str;
}

macro_rules! choice {
    ($($ty:ty),+) => {
        $(impl Choice for $ty {
            fn all() -> &'static [Self] {
                <$ty>::ALL
            }

            fn value(&self) -> &'static str {
                self.as_str()
            }

            fn label(&self) -> &'static str {
                <$ty>::label(self)
            }
        })+
    };
}

choice!(ApprovalStatus, RiderStatus, OrderStatus, Urgency, HospitalType);

/// `(value, label)` pairs for every variant of `T`.
pub fn options<T: Choice>() -> Vec<(String, String)> {
    T::all()
        .iter()
        .map(|choice| (choice.value().to_string(), choice.label().to_string()))
        .collect()
}

/// Sorted distinct values of `key`, as select options.
pub fn distinct<T>(items: &[T], key: impl Fn(&T) -> &str) -> Vec<(String, String)> {
    items
        .iter()
        .map(|item| key(item).to_string())
        .filter(|value| !value.is_empty())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(|value| (value.clone(), value))
        .collect()
}

pub fn format_amount(amount: impl Display) -> String {
    format!("{amount:.2}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distinct_sorts_and_skips_blanks() {
        let cities = ["Pune", "", "Mumbai", "Pune"];
        assert_eq!(
            distinct(&cities, |city| *city),
            vec![
                ("Mumbai".to_string(), "Mumbai".to_string()),
                ("Pune".to_string(), "Pune".to_string()),
            ]
        );
    }

    #[test]
    fn options_use_wire_values() {
        let urgencies = options::<Urgency>();
        assert_eq!(urgencies.len(), Urgency::ALL.len());
        assert_eq!(urgencies[0].0, Urgency::ALL[0].as_str());
    }

    #[test]
    fn amounts_have_two_decimals() {
        assert_eq!(format_amount(12.5), "12.50");
    }
}

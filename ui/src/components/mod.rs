pub mod empty_state;
pub mod error_panel;
pub mod export_buttons;
pub mod feature_toggles;
pub mod filter_bar;
pub mod layout;
pub mod modal;
pub mod pagination_controls;
pub mod review_modal;
pub mod stat_card;
pub mod status_badge;
pub mod status_modal;
pub mod toast;

pub use empty_state::EmptyState;
pub use error_panel::ErrorPanel;
pub use export_buttons::ExportButtons;
pub use feature_toggles::FeatureToggles;
pub use filter_bar::{Facet, FilterBar};
pub use pagination_controls::PaginationControls;
pub use review_modal::{Review, ReviewDecision, ReviewModal};
pub use stat_card::StatCard;
pub use status_badge::StatusBadge;
pub use status_modal::{StatusModal, StatusOption};
pub use toast::ToastContainer;

pub mod collection_centers;
pub mod dashboard;
pub mod hospital_detail;
pub mod hospitals;
pub mod not_found;
pub mod orders;
pub mod riders;

pub use collection_centers::CollectionCentersPage;
pub use dashboard::DashboardPage;
pub use hospital_detail::HospitalDetailPage;
pub use hospitals::HospitalsPage;
pub use not_found::NotFoundPage;
pub use orders::OrdersPage;
pub use riders::RidersPage;

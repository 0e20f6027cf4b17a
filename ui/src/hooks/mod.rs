pub mod use_api;
pub mod use_api_mutation;
pub mod use_authentication;
pub mod use_clock;
pub mod use_debounce;
pub mod use_list_query;
pub mod use_logout;
pub mod use_title;

pub use use_api::{ApiHookReturn, use_api};
pub use use_api_mutation::{MutationHandle, use_api_mutation};
pub use use_authentication::use_authentication;
pub use use_clock::use_clock;
pub use use_debounce::use_debounce;
pub use use_list_query::{ListQueryHandle, use_list_query};
pub use use_logout::use_logout;
pub use use_title::use_title;

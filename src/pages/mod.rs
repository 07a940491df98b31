pub mod dashboard;
pub mod enrollment_keys;
pub mod hosts;
pub mod login;
pub mod network_details;
pub mod networks;
pub mod not_found;
pub mod users;

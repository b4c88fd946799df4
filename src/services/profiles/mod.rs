pub mod profile_service;

pub use profile_service::*;

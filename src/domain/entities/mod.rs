//! 영속 엔티티 모듈

pub mod profiles;

pub use profiles::profile::ProfileDocument;

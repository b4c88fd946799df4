pub mod authenticated_user;
pub mod oauth_request;

pub use authenticated_user::AuthenticatedUser;
pub use oauth_request::{OAuthCredential, OAuthRequest};

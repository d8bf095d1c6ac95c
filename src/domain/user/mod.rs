pub mod claims;
pub mod entity;
pub mod repository;
pub mod value_objects;

pub use claims::{ClaimsMetadata, SessionClaims, role_of};
pub use entity::{NewUser, User};
pub use repository::UserRepository;
pub use value_objects::{ExternalUserId, Role, UserId};

//! Service clients and stateless domain services.

pub mod cloudinary;
pub mod token;

pub use cloudinary::{CloudinaryClient, CloudinaryError, ResourceType, UploadedAsset};
pub use token::{AdminClaims, TokenError, TokenService};

//! Backend object-query client
//!
//! The backend exposes named collections ("classes") of records queryable by
//! equality filters. Four classes are well-known; the rest are discovered at
//! runtime from the content schema.

pub mod client;
pub mod endpoints;
pub mod object;

pub use client::{BackendClient, ClassQuery};
pub use object::{FileRef, Pointer, RawObject};

/// Class holding site definitions
pub const SITE_CLASS: &str = "Site";

/// Class holding content model definitions
pub const MODEL_CLASS: &str = "Model";

/// Class holding per-model field definitions
pub const MODEL_FIELD_CLASS: &str = "ModelField";

/// Class holding uploaded media assets
pub const MEDIA_ITEM_CLASS: &str = "MediaItem";

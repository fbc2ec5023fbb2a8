//! Data contracts shared by the Huduku frontend modules.
//!
//! Pure serde types mirroring the REST payloads of the listing, region and
//! auth services, plus the slug helpers the filter layer relies on.

pub mod domain;
pub mod slug;

//! Adapters describing the notification source

mod html_head;
mod visibility;

pub use html_head::{HtmlHeadMetadata, LinkTag, NoDocument};
pub use visibility::StaticVisibility;

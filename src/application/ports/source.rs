//! Ports describing the source that issues notifications

/// Reports whether the notification source is currently in front of the user
pub trait Visibility: Send + Sync {
    fn is_source_active(&self) -> bool;
}

/// Read access to the source document's head metadata
pub trait DocumentMetadata: Send + Sync {
    /// `href` of the first `<link>` whose `rel` equals `rel` and, when
    /// given, whose `type` equals `mime`. Returned as an absolute URL.
    fn link_href(&self, rel: &str, mime: Option<&str>) -> Option<String>;

    /// Origin of the document (`scheme://host[:port]`)
    fn origin(&self) -> Option<String>;
}

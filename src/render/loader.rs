/// Seam for lazily fetching the external rendering library.
///
/// `request` only begins the fetch. The host delivers the outcome back to
/// the engine through [`crate::api::DiagramEngine::library_loaded`] or
/// [`crate::api::DiagramEngine::library_load_failed`]; a failed fetch is
/// never retried automatically.
pub trait LibraryLoader {
    fn request(&mut self, source_url: &str);
}

/// Loader that records requested URLs without fetching anything.
#[derive(Debug, Default)]
pub struct NullLoader {
    pub requested: Vec<String>,
}

impl LibraryLoader for NullLoader {
    fn request(&mut self, source_url: &str) {
        self.requested.push(source_url.to_owned());
    }
}

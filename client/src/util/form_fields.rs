//! Read-only access to submitted form values.

use std::collections::HashMap;
use std::hash::BuildHasher;

/// Named text values collected from a form.
pub trait FormFields {
    fn field(&self, name: &str) -> Option<String>;
}

#[cfg(feature = "hydrate")]
impl FormFields for web_sys::FormData {
    fn field(&self, name: &str) -> Option<String> {
        self.get(name).as_string()
    }
}

impl<S: BuildHasher> FormFields for HashMap<String, String, S> {
    fn field(&self, name: &str) -> Option<String> {
        self.get(name).cloned()
    }
}

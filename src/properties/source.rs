//! Capability traits for the two property stores.

/// Read access to the process-wide runtime property store.
///
/// Runtime properties are deployment configuration, assumed stable for the
/// lifetime of the process.
pub trait RuntimePropertySource: Send + Sync {
    /// Look up a runtime property by name.
    fn property(&self, name: &str) -> Option<String>;
}

/// Read access to the live administrative (global) property store.
///
/// Implementations must return the store's current value on every call.
pub trait GlobalPropertySource: Send + Sync {
    /// Look up a global property by name.
    fn global_property(&self, name: &str) -> Option<String>;
}

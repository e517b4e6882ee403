use thiserror::Error;

/// Error raised while wiring up application components at startup
#[derive(Error, Debug)]
pub enum InitContextError {
    /// A component was requested before it was initialized
    #[error("component not initialized: {0}")]
    NotInitialized(String),
    /// Any lower level failure while initializing a component
    #[error("primitive error: {0}")]
    Primitive(String),
}

pub const SERVICE_NAME: &str = "GenAI Service";
pub const SERVICE_DESCRIPTION: &str =
    "Document ingestion, RAG pipeline, and content creation service";

/// Static identity reported by the status endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceInfo {
    pub status: &'static str,
    pub service: &'static str,
    pub version: &'static str,
    pub description: &'static str,
}

impl ServiceInfo {
    pub fn current() -> Self {
        Self {
            status: "healthy",
            service: SERVICE_NAME,
            version: env!("CARGO_PKG_VERSION"),
            description: SERVICE_DESCRIPTION,
        }
    }
}

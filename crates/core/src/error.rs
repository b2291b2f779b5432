#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Failed to read channel catalog {path}: {source}")]
    CatalogRead {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid channel catalog: {0}")]
    Catalog(#[from] serde_json::Error),

    #[error("Failed to write XMLTV document: {0}")]
    Xml(#[from] std::io::Error),
}

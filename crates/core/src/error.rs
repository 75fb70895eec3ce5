#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("page_size {page_size} exceeds the allowed maximum of {max_page_size}; raise max_page_size if this is intended")]
    PageSizeTooLarge { page_size: i64, max_page_size: u64 },

    #[error("Invalid page size: {0}")]
    InvalidPageSize(i64),

    #[error("max_page_size ({max_page_size}) cannot be greater than max_records ({max_records})")]
    ContradictoryLimits { max_page_size: u64, max_records: u64 },

    #[error("Field '{0}' does not exist")]
    UnknownField(String),

    #[error("Records cannot be serialized directly; pass an explicit field list")]
    SerializationNotSupported,

    #[error("Query parameter '{name}' is not a valid integer: '{value}'")]
    InvalidParameter { name: String, value: String },

    #[error("Invalid HTTP status code: {0}")]
    InvalidStatus(u16),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProtocolError {
    #[error("unknown protocol: {0}")]
    UnknownProtocol(String),

    #[error("unknown category '{category_id}' for protocol '{protocol_id}'")]
    UnknownCategory {
        protocol_id: String,
        category_id: String,
    },

    #[error("unknown item '{item_id}' for protocol '{protocol_id}'")]
    UnknownItem {
        protocol_id: String,
        item_id: String,
    },
}

use thiserror::Error;
use uuid::Uuid;

use altea_core::models::score::ScoreValue;
use altea_protocols::error::ProtocolError;

#[derive(Debug, Error)]
pub enum EvalError {
    #[error(transparent)]
    NotFound(#[from] ProtocolError),

    #[error("evaluation {0} is completed and can no longer be modified")]
    InvalidState(Uuid),

    #[error("score {value:?} is out of range for item '{item_id}'")]
    OutOfRange { item_id: String, value: ScoreValue },
}

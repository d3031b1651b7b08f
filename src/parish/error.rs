use crate::failure::Classified;
use crate::model::{RecordId, RecordKind};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ParishError {
    #[error("{kind} {id} não encontrado")]
    RecordNotFound { kind: RecordKind, id: RecordId },

    #[error("{}", .0.message)]
    Load(Classified),

    #[error("A lista de {kind} não está pronta ({state})")]
    NotReady { kind: RecordKind, state: String },

    #[error("Participante {participant} já inscrito no evento {event}")]
    AlreadySubscribed { event: RecordId, participant: RecordId },

    #[error("Participante {participant} não está inscrito no evento {event}")]
    NotSubscribed { event: RecordId, participant: RecordId },

    #[error("Evento {event} lotado ({capacity} vagas)")]
    EventFull { event: RecordId, capacity: u32 },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Api Error: {0}")]
    Api(String),
}

pub type Result<T> = std::result::Result<T, ParishError>;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CastError {
    /// Le service renderer n'a pas pu démarrer (port occupé, enregistrement
    /// refusé). Remonté comme échec de construction de la session.
    #[error("Renderer service failed to start: {0}")]
    ServiceStart(String),
    #[error("Playback engine error: {0}")]
    Engine(String),
    #[error("Identity error: {0}")]
    Identity(String),
}

impl CastError {
    pub fn service_start(message: impl Into<String>) -> Self {
        CastError::ServiceStart(message.into())
    }

    pub fn engine(message: impl Into<String>) -> Self {
        CastError::Engine(message.into())
    }
}

//! Gestion des erreurs pour le client du portail

use thiserror::Error;

/// Type Result personnalisé pour vdapi
pub type Result<T> = std::result::Result<T, ApiError>;

/// Erreurs possibles lors de l'utilisation du client du portail
#[derive(Error, Debug)]
pub enum ApiError {
    /// Erreur HTTP
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Erreur de parsing JSON
    #[error("JSON parsing error: {0}")]
    JsonParse(#[from] serde_json::Error),

    /// Erreur applicative renvoyée par le portail (code non nul)
    #[error("Portal error (code {code}): {message}")]
    Portal { code: i64, message: String },

    /// Réponse sans champ `data` alors que le code indiquait un succès
    #[error("Portal response has no data for {0}")]
    MissingData(String),
}

impl ApiError {
    /// Crée une erreur applicative depuis l'enveloppe du portail
    pub fn portal(code: i64, message: impl Into<String>) -> Self {
        ApiError::Portal {
            code,
            message: message.into(),
        }
    }
}

//! Seam over the local playback engine.

use anyhow::Result;
use crossbeam_channel::Receiver;

use crate::events::PlayerStatusEvent;

/// Abstraction du moteur de lecture local (décodage et rendu).
///
/// La session n'attend du moteur que les commandes de transport et son flux
/// d'événements de cycle de vie ; tout le reste (pipeline de décodage,
/// sorties audio/vidéo) appartient à l'implémentation.
///
/// Les commandes sont fire-and-forget du point de vue de la session : un
/// échec est journalisé mais ne traverse jamais le relais d'événements.
pub trait PlaybackEngine: Send + Sync {
    /// Remet le moteur dans son état initial (aucune source chargée).
    fn reset(&self);

    /// Applique un rapport d'affichage ("-1" = automatique).
    fn set_aspect(&self, aspect: &str) -> Result<()>;

    /// Charge une nouvelle source et démarre la lecture.
    fn set_url(&self, url: &str) -> Result<()>;

    /// Reprend la lecture en cours.
    fn resume(&self) -> Result<()>;

    /// Met la lecture en pause.
    fn pause(&self) -> Result<()>;

    /// Arrête la lecture et libère la source.
    fn stop(&self) -> Result<()>;

    /// Seek vers une position `H:MM:SS`.
    fn seek(&self, position: &str) -> Result<()>;

    /// Ajuste le volume (échelle 0–100, valeur brute du point de contrôle).
    fn set_volume(&self, volume: &str) -> Result<()>;

    /// Volume courant, en entier 0–100.
    fn volume(&self) -> i64;

    /// Flux des événements de cycle de vie du moteur.
    fn subscribe_status(&self) -> Receiver<PlayerStatusEvent>;
}

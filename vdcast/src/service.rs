//! Seam over the UPnP/DLNA MediaRenderer service.

use crossbeam_channel::Receiver;

use crate::errors::CastError;
use crate::events::TransportEvent;
use crate::state_variables::StateVarUpdate;

/// Abstraction du service MediaRenderer (SSDP, description de device, SOAP,
/// GENA). Le service possède ses propres threads réseau : les événements de
/// transport arrivent donc sur un thread arbitraire.
///
/// Les implémentations embarquent typiquement un
/// [`crate::TransportEventBus`] et diffusent dessus depuis leurs handlers
/// d'actions.
pub trait MediaRendererService: Send + Sync {
    /// Renseigne un champ de métadonnées du device ("friendlyName",
    /// "manufacturer", "modelName", ...). Doit être appelé avant
    /// [`MediaRendererService::start`].
    fn set_device_info(&self, field: &str, value: &str);

    /// Ouvre les listeners réseau et commence à accepter des sessions de
    /// contrôle distantes.
    fn start(&self) -> Result<(), CastError>;

    /// Ferme les listeners et termine toute session distante active.
    fn stop(&self);

    /// Flux des actions de transport reçues des points de contrôle.
    fn subscribe_transport(&self) -> Receiver<TransportEvent>;

    /// Pousse une mise à jour de variable d'état vers les points de contrôle
    /// abonnés.
    fn fire(&self, update: StateVarUpdate);
}

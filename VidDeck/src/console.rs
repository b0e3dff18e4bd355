//! Implémentations console des seams de la session de cast.
//!
//! Chaque implémentation journalise ce que la vraie couche plateforme ferait
//! (pipeline de décodage, vue vidéo, service UPnP), ce qui rend le harnais
//! utilisable
//! pour vérifier le câblage complet sans réseau ni écran.

use std::sync::atomic::{AtomicI64, Ordering};

use anyhow::Result;
use crossbeam_channel::Receiver;
use tracing::info;
use vdcast::{
    CastError, MediaRendererService, PlaybackEngine, PlayerStatusBus, PlayerStatusEvent,
    StateVarUpdate, TransportEvent, TransportEventBus, VideoView,
};

/// Moteur de lecture factice : journalise les commandes, mémorise le volume.
pub struct ConsoleEngine {
    volume: AtomicI64,
    status_bus: PlayerStatusBus,
}

impl Default for ConsoleEngine {
    fn default() -> Self {
        Self {
            volume: AtomicI64::new(100),
            status_bus: PlayerStatusBus::new(),
        }
    }
}

impl PlaybackEngine for ConsoleEngine {
    fn reset(&self) {
        info!("engine: reset");
    }

    fn set_aspect(&self, aspect: &str) -> Result<()> {
        info!("engine: aspect {}", aspect);
        Ok(())
    }

    fn set_url(&self, url: &str) -> Result<()> {
        info!("engine: load {}", url);
        self.status_bus.broadcast(PlayerStatusEvent::FileStarted);
        Ok(())
    }

    fn resume(&self) -> Result<()> {
        info!("engine: resume");
        self.status_bus.broadcast(PlayerStatusEvent::Resumed);
        Ok(())
    }

    fn pause(&self) -> Result<()> {
        info!("engine: pause");
        self.status_bus.broadcast(PlayerStatusEvent::Paused);
        Ok(())
    }

    fn stop(&self) -> Result<()> {
        info!("engine: stop");
        Ok(())
    }

    fn seek(&self, position: &str) -> Result<()> {
        info!("engine: seek {}", position);
        Ok(())
    }

    fn set_volume(&self, volume: &str) -> Result<()> {
        info!("engine: volume {}", volume);
        if let Ok(v) = volume.parse::<i64>() {
            self.volume.store(v, Ordering::SeqCst);
            self.status_bus.broadcast(PlayerStatusEvent::VolumeChanged(v));
        }
        Ok(())
    }

    fn volume(&self) -> i64 {
        self.volume.load(Ordering::SeqCst)
    }

    fn subscribe_status(&self) -> Receiver<PlayerStatusEvent> {
        self.status_bus.subscribe()
    }
}

/// Vue console : tout finit dans les logs, rien n'est interactif.
pub struct ConsoleView;

impl VideoView for ConsoleView {
    fn set_title(&self, title: &str) {
        info!("view: title «{}»", title);
    }

    fn show_osd(&self, visible: bool) {
        info!("view: osd {}", if visible { "on" } else { "off" });
    }

    fn show_osd_text(&self, text: &str) {
        info!("view: overlay «{}»", text);
    }

    fn is_osd_locked(&self) -> bool {
        false
    }

    fn toggle_osd(&self) {
        info!("view: toggle osd");
    }

    fn set_endpoint_hint(&self, endpoint: &str) {
        info!("view: discoverable at {}", endpoint);
    }

    fn hide_remote_irrelevant_controls(&self) {
        info!("view: remote-irrelevant controls hidden");
    }

    fn disable_close_on_end_of_file(&self) {
        info!("view: close-on-end-of-file disabled");
    }

    fn present_quit_dialog(&self, on_confirm: Box<dyn FnOnce() + Send>) {
        // Pas de dialogue en console : confirmation immédiate.
        info!("view: quit confirmed");
        on_confirm();
    }

    fn pop_activity(&self) {
        info!("view: activity popped");
    }
}

/// Service renderer local : le bus de transport est exposé pour injecter des
/// commandes, les variables d'état partent dans les logs.
#[derive(Default)]
pub struct LocalRendererService {
    bus: TransportEventBus,
}

impl LocalRendererService {
    /// Injecte une action de transport comme le ferait un point de contrôle.
    #[allow(dead_code)]
    pub fn push(&self, event: TransportEvent) {
        self.bus.broadcast(event);
    }
}

impl MediaRendererService for LocalRendererService {
    fn set_device_info(&self, field: &str, value: &str) {
        info!("renderer: {} = {}", field, value);
    }

    fn start(&self) -> Result<(), CastError> {
        info!("renderer: started (local, no network listeners)");
        Ok(())
    }

    fn stop(&self) {
        info!("renderer: stopped");
    }

    fn subscribe_transport(&self) -> Receiver<TransportEvent> {
        self.bus.subscribe()
    }

    fn fire(&self, update: StateVarUpdate) {
        let mut value: String = update.value.chars().take(96).collect();
        if value.len() < update.value.len() {
            value.push('…');
        }
        info!("renderer: {} ← {}", update.var, value);
    }
}

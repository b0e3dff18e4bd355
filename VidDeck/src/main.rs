//! Harnais console de la session de cast VidDeck.
//!
//! Câble une [`DlnaSession`] complète sur des implémentations console du
//! moteur, de la vue et du service renderer : chaque commande distante et
//! chaque variable d'état traversent le vrai contrôleur et finissent dans les
//! logs. Le service réseau réel est fourni par la couche plateforme ; ce
//! binaire sert de harnais de bout en bout et de référence de câblage.

mod console;

use std::sync::Arc;

use tracing::info;
use vdcast::{DlnaSession, SessionIdentity, UiQueue};

use crate::console::{ConsoleEngine, ConsoleView, LocalRendererService};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();

    // ========== PHASE 1 : Configuration et identité ==========

    let config = vdconfig::get_config();
    let identity = SessionIdentity::from_config(&config)?;
    info!("📺 {} ready to be discovered", identity.friendly_name);

    // ========== PHASE 2 : Câblage de la session ==========

    let engine = Arc::new(ConsoleEngine::default());
    let view = Arc::new(ConsoleView);
    let service = Arc::new(LocalRendererService::default());
    let (ui_handle, ui_queue) = UiQueue::new();

    let session = DlnaSession::start(
        identity,
        engine,
        view,
        service,
        ui_handle,
        &config.get_player_aspect(),
    )?;
    session.on_content_available();

    info!("✅ Cast session ready at {}", session.identity().endpoint());
    info!("Press Ctrl+C to stop...");

    // Le thread UI draine la file jusqu'à la disparition des producteurs.
    let ui_thread = std::thread::spawn(move || ui_queue.run());

    tokio::signal::ctrl_c().await?;

    // ========== PHASE 3 : Teardown ==========

    drop(session);
    let _ = ui_thread.join();
    info!("✅ VidDeck stopped cleanly");

    Ok(())
}

//! DLNA cast session controller.
//!
//! One session is active per cast activity. Construction wires the renderer
//! service and the playback engine together through two owned relay
//! subscriptions; dropping the session unwinds everything in a safe order.

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::engine::PlaybackEngine;
use crate::errors::CastError;
use crate::events::{PlayerStatusEvent, TransportEvent};
use crate::identity::SessionIdentity;
use crate::protocol_info::SINK_PROTOCOL_INFO;
use crate::service::MediaRendererService;
use crate::state_variables::{StateVar, StateVarUpdate};
use crate::subscription::Subscription;
use crate::ui::UiHandle;
use crate::view::VideoView;
use vdutils::format_dlna_time;

/// Titre affiché quand une source est poussée par un point de contrôle.
pub const DLNA_TITLE: &str = "DLNA";
/// Titre affiché en attente d'une commande distante.
pub const WAITING_TITLE: &str = "Waiting for a device to cast…";

const MANUFACTURER: &str = "VidDeck";
const MANUFACTURER_URL: &str = "https://viddeck.org";
const MODEL_DESCRIPTION: &str = "VidDeck DMR";
const MODEL_NAME: &str = "VidDeck";
const MODEL_NUMBER: &str = env!("CARGO_PKG_VERSION");
const MODEL_URL: &str = "https://viddeck.org";

/// Contrôleur de session DLNA.
///
/// Relie le service MediaRenderer au moteur de lecture local : les actions de
/// transport distantes pilotent le moteur et la vue (via la file UI), les
/// événements du moteur repartent vers les points de contrôle sous forme de
/// variables d'état UPnP.
pub struct DlnaSession {
    identity: SessionIdentity,
    engine: Arc<dyn PlaybackEngine>,
    view: Arc<dyn VideoView>,
    service: Arc<dyn MediaRendererService>,
    // Lâchées dans cet ordre au teardown : statut joueur d'abord, transport
    // ensuite, avant l'arrêt des services.
    player_sub: Option<Subscription>,
    transport_sub: Option<Subscription>,
}

impl DlnaSession {
    /// Construit la session et démarre le service renderer.
    ///
    /// Contrat de construction :
    /// 1. remet le moteur à zéro et applique le rapport d'affichage persisté ;
    /// 2. renseigne les métadonnées du device ;
    /// 3. abonne les deux relais d'événements (les abonnements précèdent le
    ///    démarrage du service, aucun événement ne peut se perdre ni toucher
    ///    une session partiellement construite) ;
    /// 4. démarre le service ; un échec d'ouverture de port est remonté en
    ///    échec de construction, le moteur est arrêté et les relais défaits ;
    /// 5. annonce l'état initial aux points de contrôle.
    pub fn start(
        identity: SessionIdentity,
        engine: Arc<dyn PlaybackEngine>,
        view: Arc<dyn VideoView>,
        service: Arc<dyn MediaRendererService>,
        ui: UiHandle,
        aspect: &str,
    ) -> Result<Self, CastError> {
        engine.reset();
        if let Err(e) = engine.set_aspect(aspect) {
            warn!("Failed to apply aspect '{}': {}", aspect, e);
        }

        service.set_device_info("friendlyName", &identity.friendly_name);
        service.set_device_info("manufacturer", MANUFACTURER);
        service.set_device_info("manufacturerURL", MANUFACTURER_URL);
        service.set_device_info("modelDescription", MODEL_DESCRIPTION);
        service.set_device_info("modelName", MODEL_NAME);
        service.set_device_info("modelNumber", MODEL_NUMBER);
        service.set_device_info("modelURL", MODEL_URL);

        let transport_sub = {
            let engine = engine.clone();
            let view = view.clone();
            let service = service.clone();
            let ui = ui.clone();
            Subscription::spawn(
                "dlna-transport-relay",
                service.subscribe_transport(),
                move |event| Self::handle_transport(&engine, &view, &service, &ui, event),
            )
        };

        let player_sub = {
            let service = service.clone();
            Subscription::spawn("player-status-relay", engine.subscribe_status(), {
                move |event| Self::handle_status(&service, event)
            })
        };

        if let Err(e) = service.start() {
            // Les relais locaux sont défaits par leur Drop ; le moteur a déjà
            // été touché (reset), il est arrêté ici même.
            drop(player_sub);
            drop(transport_sub);
            if let Err(stop_err) = engine.stop() {
                warn!("Failed to stop engine after start failure: {}", stop_err);
            }
            return Err(e);
        }

        Self::announce_initial_state(service.as_ref(), engine.volume());

        Ok(Self {
            identity,
            engine,
            view,
            service,
            player_sub: Some(player_sub),
            transport_sub: Some(transport_sub),
        })
    }

    /// Identité réseau annoncée par la session.
    pub fn identity(&self) -> &SessionIdentity {
        &self.identity
    }

    /// À appeler (sur le thread UI) quand la vue hôte est prête.
    ///
    /// Masque les affordances sans objet pour une session pilotée à distance,
    /// neutralise la fermeture automatique en fin de fichier et affiche
    /// l'adresse de découverte.
    pub fn on_content_available(&self) {
        self.view.hide_remote_irrelevant_controls();
        self.view.disable_close_on_end_of_file();
        self.view.set_title(WAITING_TITLE);
        self.view.show_osd(false);
        self.view.set_endpoint_hint(&self.identity.endpoint());
    }

    /// Action « retour » contextuelle : replie l'OSD s'il est verrouillé,
    /// sinon demande la fermeture de l'activité.
    pub fn on_back(&self) {
        if self.view.is_osd_locked() {
            self.view.toggle_osd();
        } else {
            self.dismiss();
        }
    }

    /// Demande de fermeture : boîte de dialogue de confirmation, sans effet
    /// sur la session DLNA elle-même (le teardown appartient au Drop).
    pub fn dismiss(&self) {
        let confirm_view = self.view.clone();
        self.view
            .present_quit_dialog(Box::new(move || confirm_view.pop_activity()));
    }

    /// Relais des actions de transport entrantes.
    ///
    /// Appelé depuis le thread du relais : chaque branche qui touche la vue
    /// ou le moteur passe par la file UI, les échos sortants partent
    /// directement dans le service.
    fn handle_transport(
        engine: &Arc<dyn PlaybackEngine>,
        view: &Arc<dyn VideoView>,
        service: &Arc<dyn MediaRendererService>,
        ui: &UiHandle,
        event: TransportEvent,
    ) {
        match event {
            TransportEvent::SetUri(url) => {
                info!("CurrentURI: {}", url);
                let engine = engine.clone();
                let view = view.clone();
                ui.post(move || {
                    engine.reset();
                    view.set_title(DLNA_TITLE);
                    view.show_osd(true);
                    if let Err(e) = engine.set_url(&url) {
                        warn!("Failed to load '{}': {}", url, e);
                    }
                });
            }
            TransportEvent::SetMetadata(name) => {
                let view = view.clone();
                ui.post(move || view.set_title(&name));
            }
            TransportEvent::Stop => {
                let engine = engine.clone();
                let view = view.clone();
                ui.post(move || {
                    if let Err(e) = engine.pause() {
                        warn!("Failed to pause on Stop: {}", e);
                    }
                    view.show_osd(false);
                    view.set_title(WAITING_TITLE);
                });
            }
            TransportEvent::Play => {
                let engine = engine.clone();
                ui.post(move || {
                    if let Err(e) = engine.resume() {
                        warn!("Failed to resume: {}", e);
                    }
                });
                service.fire(StateVarUpdate::new(StateVar::TransportState, "PLAYING"));
            }
            TransportEvent::Pause => {
                let engine = engine.clone();
                ui.post(move || {
                    if let Err(e) = engine.pause() {
                        warn!("Failed to pause: {}", e);
                    }
                });
                service.fire(StateVarUpdate::new(
                    StateVar::TransportState,
                    "PAUSED_PLAYBACK",
                ));
            }
            TransportEvent::Seek(position) => {
                let engine = engine.clone();
                ui.post(move || {
                    if let Err(e) = engine.seek(&position) {
                        warn!("Failed to seek to {}: {}", position, e);
                    }
                });
            }
            TransportEvent::SetVolume(volume) => {
                let engine = engine.clone();
                let view = view.clone();
                ui.post(move || {
                    if let Err(e) = engine.set_volume(&volume) {
                        warn!("Failed to set volume to {}: {}", volume, e);
                    }
                    view.show_osd_text(&format!("Volume: {}", volume));
                });
            }
            TransportEvent::Error(message) => {
                let view = view.clone();
                ui.post(move || {
                    view.show_osd(false);
                    view.set_title(&format!("[Error] {}", message));
                });
            }
        }
    }

    /// Ré-encodage des événements du moteur en variables d'état UPnP.
    ///
    /// Aucun passage par la file UI : seule la face réseau du service est
    /// touchée.
    fn handle_status(service: &Arc<dyn MediaRendererService>, event: PlayerStatusEvent) {
        match event {
            PlayerStatusEvent::Resumed => {
                service.fire(StateVarUpdate::new(StateVar::TransportState, "PLAYING"));
            }
            PlayerStatusEvent::Paused => {
                service.fire(StateVarUpdate::new(
                    StateVar::TransportState,
                    "PAUSED_PLAYBACK",
                ));
            }
            PlayerStatusEvent::FileStarted => {
                service.fire(StateVarUpdate::new(
                    StateVar::TransportState,
                    "TRANSITIONING",
                ));
            }
            PlayerStatusEvent::Stopped | PlayerStatusEvent::EndOfFile => {
                service.fire(StateVarUpdate::new(StateVar::TransportState, "STOPPED"));
            }
            PlayerStatusEvent::DurationUpdated(seconds) => {
                service.fire(StateVarUpdate::new(
                    StateVar::CurrentTrackDuration,
                    format_dlna_time(seconds),
                ));
            }
            PlayerStatusEvent::ProgressUpdated(seconds) => {
                let position = format_dlna_time(seconds);
                service.fire(StateVarUpdate::new(
                    StateVar::AbsoluteTimePosition,
                    position.clone(),
                ));
                service.fire(StateVarUpdate::new(StateVar::RelativeTimePosition, position));
            }
            PlayerStatusEvent::VolumeChanged(volume) => {
                service.fire(StateVarUpdate::new(StateVar::Volume, volume.to_string()));
            }
        }
    }

    /// Annonce initiale : un point de contrôle qui se connecte doit voir un
    /// état cohérent sans avoir assisté aux événements précédents.
    fn announce_initial_state(service: &dyn MediaRendererService, volume: i64) {
        service.fire(StateVarUpdate::new(StateVar::TransportState, "STOPPED"));
        service.fire(StateVarUpdate::new(StateVar::TransportPlaySpeed, "1"));
        service.fire(StateVarUpdate::new(StateVar::TransportStatus, "OK"));
        service.fire(StateVarUpdate::new(
            StateVar::AbsoluteTimePosition,
            "0:00:00",
        ));
        service.fire(StateVarUpdate::new(
            StateVar::RelativeTimePosition,
            "0:00:00",
        ));
        service.fire(StateVarUpdate::new(
            StateVar::CurrentTrackDuration,
            "0:00:00",
        ));
        // Positions en octets non suivies : valeur maximale annoncée.
        service.fire(StateVarUpdate::new(
            StateVar::AbsoluteCounterPosition,
            i32::MAX.to_string(),
        ));
        service.fire(StateVarUpdate::new(
            StateVar::RelativeCounterPosition,
            i32::MAX.to_string(),
        ));
        service.fire(StateVarUpdate::new(StateVar::Volume, volume.to_string()));
        service.fire(StateVarUpdate::new(
            StateVar::SinkProtocolInfo,
            SINK_PROTOCOL_INFO,
        ));
    }
}

impl Drop for DlnaSession {
    fn drop(&mut self) {
        debug!("DLNA session teardown");
        // Relais morts avant l'arrêt des services : plus aucun événement ne
        // peut atteindre une session en cours de destruction.
        self.player_sub.take();
        self.transport_sub.take();
        self.service.stop();
        if let Err(e) = self.engine.stop() {
            warn!("Failed to stop playback engine: {}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::{PlayerStatusBus, TransportEventBus};
    use crate::ui::UiQueue;
    use anyhow::Result;
    use crossbeam_channel::Receiver;
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
    use std::time::{Duration, Instant};

    #[derive(Default)]
    struct FakeEngine {
        commands: Mutex<Vec<String>>,
        volume: i64,
        stop_count: AtomicUsize,
        status_bus: PlayerStatusBus,
    }

    impl FakeEngine {
        fn with_volume(volume: i64) -> Self {
            Self {
                volume,
                ..Self::default()
            }
        }

        fn record(&self, command: impl Into<String>) {
            self.commands.lock().unwrap().push(command.into());
        }

        fn commands(&self) -> Vec<String> {
            self.commands.lock().unwrap().clone()
        }
    }

    impl PlaybackEngine for FakeEngine {
        fn reset(&self) {
            self.record("reset");
        }
        fn set_aspect(&self, aspect: &str) -> Result<()> {
            self.record(format!("aspect {}", aspect));
            Ok(())
        }
        fn set_url(&self, url: &str) -> Result<()> {
            self.record(format!("url {}", url));
            Ok(())
        }
        fn resume(&self) -> Result<()> {
            self.record("resume");
            Ok(())
        }
        fn pause(&self) -> Result<()> {
            self.record("pause");
            Ok(())
        }
        fn stop(&self) -> Result<()> {
            self.stop_count.fetch_add(1, Ordering::SeqCst);
            self.record("stop");
            Ok(())
        }
        fn seek(&self, position: &str) -> Result<()> {
            self.record(format!("seek {}", position));
            Ok(())
        }
        fn set_volume(&self, volume: &str) -> Result<()> {
            self.record(format!("volume {}", volume));
            Ok(())
        }
        fn volume(&self) -> i64 {
            self.volume
        }
        fn subscribe_status(&self) -> Receiver<PlayerStatusEvent> {
            self.status_bus.subscribe()
        }
    }

    #[derive(Default)]
    struct FakeView {
        calls: Mutex<Vec<String>>,
        osd_locked: AtomicBool,
        quit_confirm: Mutex<Option<Box<dyn FnOnce() + Send>>>,
    }

    impl FakeView {
        fn record(&self, call: impl Into<String>) {
            self.calls.lock().unwrap().push(call.into());
        }

        fn calls(&self) -> Vec<String> {
            self.calls.lock().unwrap().clone()
        }
    }

    impl VideoView for FakeView {
        fn set_title(&self, title: &str) {
            self.record(format!("title {}", title));
        }
        fn show_osd(&self, visible: bool) {
            self.record(format!("osd {}", visible));
        }
        fn show_osd_text(&self, text: &str) {
            self.record(format!("osd_text {}", text));
        }
        fn is_osd_locked(&self) -> bool {
            self.osd_locked.load(Ordering::SeqCst)
        }
        fn toggle_osd(&self) {
            self.record("toggle_osd");
        }
        fn set_endpoint_hint(&self, endpoint: &str) {
            self.record(format!("endpoint {}", endpoint));
        }
        fn hide_remote_irrelevant_controls(&self) {
            self.record("hide_controls");
        }
        fn disable_close_on_end_of_file(&self) {
            self.record("keep_open");
        }
        fn present_quit_dialog(&self, on_confirm: Box<dyn FnOnce() + Send>) {
            self.record("quit_dialog");
            *self.quit_confirm.lock().unwrap() = Some(on_confirm);
        }
        fn pop_activity(&self) {
            self.record("pop_activity");
        }
    }

    #[derive(Default)]
    struct FakeService {
        device_info: Mutex<Vec<(String, String)>>,
        fired: Mutex<Vec<StateVarUpdate>>,
        bus: TransportEventBus,
        fail_start: bool,
        start_count: AtomicUsize,
        stop_count: AtomicUsize,
    }

    impl FakeService {
        fn failing() -> Self {
            Self {
                fail_start: true,
                ..Self::default()
            }
        }

        fn fired(&self) -> Vec<StateVarUpdate> {
            self.fired.lock().unwrap().clone()
        }

        fn fired_value(&self, var: StateVar) -> Option<String> {
            self.fired()
                .iter()
                .rev()
                .find(|u| u.var == var)
                .map(|u| u.value.clone())
        }
    }

    impl MediaRendererService for FakeService {
        fn set_device_info(&self, field: &str, value: &str) {
            self.device_info
                .lock()
                .unwrap()
                .push((field.to_string(), value.to_string()));
        }
        fn start(&self) -> Result<(), CastError> {
            self.start_count.fetch_add(1, Ordering::SeqCst);
            if self.fail_start {
                Err(CastError::service_start("address already in use"))
            } else {
                Ok(())
            }
        }
        fn stop(&self) {
            self.stop_count.fetch_add(1, Ordering::SeqCst);
        }
        fn subscribe_transport(&self) -> Receiver<TransportEvent> {
            self.bus.subscribe()
        }
        fn fire(&self, update: StateVarUpdate) {
            self.fired.lock().unwrap().push(update);
        }
    }

    struct Harness {
        engine: Arc<FakeEngine>,
        view: Arc<FakeView>,
        service: Arc<FakeService>,
        queue: UiQueue,
        session: Option<DlnaSession>,
    }

    fn identity() -> SessionIdentity {
        SessionIdentity {
            ip: "10.0.0.5".into(),
            port: 9958,
            udn: "uuid:test".into(),
            friendly_name: "VidDeck Test".into(),
        }
    }

    fn start_session(engine: FakeEngine, service: FakeService) -> Harness {
        let engine = Arc::new(engine);
        let view = Arc::new(FakeView::default());
        let service = Arc::new(service);
        let (handle, queue) = UiQueue::new();

        let session = DlnaSession::start(
            identity(),
            engine.clone(),
            view.clone(),
            service.clone(),
            handle,
            "-1",
        )
        .unwrap();

        Harness {
            engine,
            view,
            service,
            queue,
            session: Some(session),
        }
    }

    impl Harness {
        /// Attend que le relais ait posté au moins une tâche UI et l'exécute.
        fn drain_ui(&self) {
            let deadline = Instant::now() + Duration::from_secs(2);
            loop {
                if self.queue.process_pending() > 0 {
                    return;
                }
                assert!(Instant::now() < deadline, "no UI task arrived in time");
                std::thread::sleep(Duration::from_millis(1));
            }
        }

        /// Nombre de variables déjà poussées (borne pour `wait_fired_from`).
        fn fired_len(&self) -> usize {
            self.service.fired().len()
        }

        /// Attend une valeur pour `var` parmi les updates postérieures à
        /// l'index `from` (pris avant le broadcast, pour ne pas confondre
        /// l'écho attendu avec l'annonce initiale).
        fn wait_fired_from(&self, from: usize, var: StateVar, expected: &str) {
            let deadline = Instant::now() + Duration::from_secs(2);
            loop {
                let fired = self.service.fired();
                if fired[from.min(fired.len())..]
                    .iter()
                    .any(|u| u.var == var && u.value == expected)
                {
                    return;
                }
                assert!(
                    Instant::now() < deadline,
                    "state variable {var} never reached {expected}"
                );
                std::thread::sleep(Duration::from_millis(1));
            }
        }
    }

    #[test]
    fn initial_announcement_is_complete_and_stopped() {
        let h = start_session(FakeEngine::with_volume(37), FakeService::default());

        let s = &h.service;
        assert_eq!(s.fired_value(StateVar::TransportState).unwrap(), "STOPPED");
        assert_eq!(s.fired_value(StateVar::TransportPlaySpeed).unwrap(), "1");
        assert_eq!(s.fired_value(StateVar::TransportStatus).unwrap(), "OK");
        assert_eq!(
            s.fired_value(StateVar::AbsoluteTimePosition).unwrap(),
            "0:00:00"
        );
        assert_eq!(
            s.fired_value(StateVar::RelativeTimePosition).unwrap(),
            "0:00:00"
        );
        assert_eq!(
            s.fired_value(StateVar::CurrentTrackDuration).unwrap(),
            "0:00:00"
        );
        assert_eq!(
            s.fired_value(StateVar::AbsoluteCounterPosition).unwrap(),
            "2147483647"
        );
        assert_eq!(
            s.fired_value(StateVar::RelativeCounterPosition).unwrap(),
            "2147483647"
        );
        assert_eq!(s.fired_value(StateVar::Volume).unwrap(), "37");
        assert_eq!(
            s.fired_value(StateVar::SinkProtocolInfo).unwrap(),
            SINK_PROTOCOL_INFO
        );
    }

    #[test]
    fn device_metadata_is_configured_before_start() {
        let h = start_session(FakeEngine::default(), FakeService::default());
        let info = h.service.device_info.lock().unwrap().clone();

        assert!(info.contains(&("friendlyName".into(), "VidDeck Test".into())));
        assert!(info.contains(&("manufacturer".into(), "VidDeck".into())));
        assert!(info.contains(&("modelDescription".into(), "VidDeck DMR".into())));
        assert_eq!(h.service.start_count.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn set_uri_resets_then_loads_and_shows_osd() {
        let h = start_session(FakeEngine::default(), FakeService::default());
        h.engine.commands.lock().unwrap().clear();
        h.view.calls.lock().unwrap().clear();

        h.service
            .bus
            .broadcast(TransportEvent::SetUri("http://cp/video.mp4".into()));
        h.drain_ui();

        assert_eq!(
            h.engine.commands(),
            vec!["reset".to_string(), "url http://cp/video.mp4".to_string()]
        );
        assert_eq!(
            h.view.calls(),
            vec!["title DLNA".to_string(), "osd true".to_string()]
        );
    }

    #[test]
    fn set_metadata_only_updates_the_title() {
        let h = start_session(FakeEngine::default(), FakeService::default());
        h.engine.commands.lock().unwrap().clear();
        h.view.calls.lock().unwrap().clear();

        h.service
            .bus
            .broadcast(TransportEvent::SetMetadata("Big Buck Bunny".into()));
        h.drain_ui();

        assert!(h.engine.commands().is_empty());
        assert_eq!(h.view.calls(), vec!["title Big Buck Bunny".to_string()]);
    }

    #[test]
    fn stop_pauses_and_returns_to_waiting() {
        let h = start_session(FakeEngine::default(), FakeService::default());
        h.engine.commands.lock().unwrap().clear();
        h.view.calls.lock().unwrap().clear();

        h.service.bus.broadcast(TransportEvent::Stop);
        h.drain_ui();

        assert_eq!(h.engine.commands(), vec!["pause".to_string()]);
        assert_eq!(
            h.view.calls(),
            vec![
                "osd false".to_string(),
                format!("title {}", WAITING_TITLE)
            ]
        );
    }

    #[test]
    fn play_resumes_and_echoes_playing() {
        let h = start_session(FakeEngine::default(), FakeService::default());
        h.engine.commands.lock().unwrap().clear();

        let mark = h.fired_len();
        h.service.bus.broadcast(TransportEvent::Play);
        h.wait_fired_from(mark, StateVar::TransportState, "PLAYING");
        h.drain_ui();

        assert_eq!(h.engine.commands(), vec!["resume".to_string()]);
    }

    #[test]
    fn pause_pauses_and_echoes_paused_playback() {
        let h = start_session(FakeEngine::default(), FakeService::default());
        h.engine.commands.lock().unwrap().clear();

        let mark = h.fired_len();
        h.service.bus.broadcast(TransportEvent::Pause);
        h.wait_fired_from(mark, StateVar::TransportState, "PAUSED_PLAYBACK");
        h.drain_ui();

        assert_eq!(h.engine.commands(), vec!["pause".to_string()]);
    }

    #[test]
    fn seek_reaches_the_engine_untouched() {
        let h = start_session(FakeEngine::default(), FakeService::default());
        h.engine.commands.lock().unwrap().clear();

        h.service
            .bus
            .broadcast(TransportEvent::Seek("0:12:34".into()));
        h.drain_ui();

        assert_eq!(h.engine.commands(), vec!["seek 0:12:34".to_string()]);
    }

    #[test]
    fn set_volume_updates_engine_and_overlay() {
        let h = start_session(FakeEngine::default(), FakeService::default());
        h.engine.commands.lock().unwrap().clear();
        h.view.calls.lock().unwrap().clear();

        h.service
            .bus
            .broadcast(TransportEvent::SetVolume("42".into()));
        h.drain_ui();

        assert_eq!(h.engine.commands(), vec!["volume 42".to_string()]);
        assert_eq!(h.view.calls(), vec!["osd_text Volume: 42".to_string()]);
    }

    #[test]
    fn protocol_error_clears_osd_and_shows_the_message() {
        let h = start_session(FakeEngine::default(), FakeService::default());
        h.engine.commands.lock().unwrap().clear();
        h.view.calls.lock().unwrap().clear();

        h.service
            .bus
            .broadcast(TransportEvent::Error("no such resource".into()));
        h.drain_ui();

        assert!(h.engine.commands().is_empty());
        assert_eq!(
            h.view.calls(),
            vec![
                "osd false".to_string(),
                "title [Error] no such resource".to_string()
            ]
        );
    }

    #[test]
    fn player_status_maps_to_state_variables() {
        let h = start_session(FakeEngine::default(), FakeService::default());

        let mark = h.fired_len();
        h.engine.status_bus.broadcast(PlayerStatusEvent::Resumed);
        h.wait_fired_from(mark, StateVar::TransportState, "PLAYING");

        let mark = h.fired_len();
        h.engine.status_bus.broadcast(PlayerStatusEvent::Paused);
        h.wait_fired_from(mark, StateVar::TransportState, "PAUSED_PLAYBACK");

        let mark = h.fired_len();
        h.engine
            .status_bus
            .broadcast(PlayerStatusEvent::FileStarted);
        h.wait_fired_from(mark, StateVar::TransportState, "TRANSITIONING");

        let mark = h.fired_len();
        h.engine.status_bus.broadcast(PlayerStatusEvent::EndOfFile);
        h.wait_fired_from(mark, StateVar::TransportState, "STOPPED");

        let mark = h.fired_len();
        h.engine
            .status_bus
            .broadcast(PlayerStatusEvent::DurationUpdated(3661.0));
        h.wait_fired_from(mark, StateVar::CurrentTrackDuration, "1:01:01");

        let mark = h.fired_len();
        h.engine
            .status_bus
            .broadcast(PlayerStatusEvent::ProgressUpdated(62.0));
        h.wait_fired_from(mark, StateVar::AbsoluteTimePosition, "0:01:02");
        h.wait_fired_from(mark, StateVar::RelativeTimePosition, "0:01:02");

        let mark = h.fired_len();
        h.engine
            .status_bus
            .broadcast(PlayerStatusEvent::VolumeChanged(55));
        h.wait_fired_from(mark, StateVar::Volume, "55");
    }

    #[test]
    fn activation_prepares_the_view_for_remote_control() {
        let h = start_session(FakeEngine::default(), FakeService::default());
        h.view.calls.lock().unwrap().clear();

        h.session.as_ref().unwrap().on_content_available();

        assert_eq!(
            h.view.calls(),
            vec![
                "hide_controls".to_string(),
                "keep_open".to_string(),
                format!("title {}", WAITING_TITLE),
                "osd false".to_string(),
                "endpoint http://10.0.0.5:9958".to_string()
            ]
        );
    }

    #[test]
    fn back_toggles_a_locked_osd_instead_of_dismissing() {
        let h = start_session(FakeEngine::default(), FakeService::default());
        h.view.osd_locked.store(true, Ordering::SeqCst);
        h.view.calls.lock().unwrap().clear();

        h.session.as_ref().unwrap().on_back();

        assert_eq!(h.view.calls(), vec!["toggle_osd".to_string()]);
    }

    #[test]
    fn dismissal_pops_only_after_confirmation() {
        let h = start_session(FakeEngine::default(), FakeService::default());
        h.view.calls.lock().unwrap().clear();

        h.session.as_ref().unwrap().on_back();
        assert_eq!(h.view.calls(), vec!["quit_dialog".to_string()]);

        // Annulation : rien ne se passe tant que la confirmation n'est pas
        // invoquée.
        let confirm = h.view.quit_confirm.lock().unwrap().take().unwrap();
        confirm();
        assert_eq!(
            h.view.calls(),
            vec!["quit_dialog".to_string(), "pop_activity".to_string()]
        );
    }

    #[test]
    fn teardown_stops_both_services_exactly_once() {
        let mut h = start_session(FakeEngine::default(), FakeService::default());

        h.session.take();

        assert_eq!(h.service.stop_count.load(Ordering::SeqCst), 1);
        assert_eq!(h.engine.stop_count.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn immediate_destruction_without_events_is_clean() {
        let engine = Arc::new(FakeEngine::default());
        let view = Arc::new(FakeView::default());
        let service = Arc::new(FakeService::default());
        let (handle, _queue) = UiQueue::new();

        let session = DlnaSession::start(
            identity(),
            engine.clone(),
            view,
            service.clone(),
            handle,
            "-1",
        )
        .unwrap();
        drop(session);

        assert_eq!(service.stop_count.load(Ordering::SeqCst), 1);
        assert_eq!(engine.stop_count.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn start_failure_is_reported_and_stops_the_engine_once() {
        let engine = Arc::new(FakeEngine::default());
        let view = Arc::new(FakeView::default());
        let service = Arc::new(FakeService::failing());
        let (handle, _queue) = UiQueue::new();

        let result = DlnaSession::start(
            identity(),
            engine.clone(),
            view,
            service.clone(),
            handle,
            "-1",
        );

        assert!(matches!(result, Err(CastError::ServiceStart(_))));
        assert_eq!(engine.stop_count.load(Ordering::SeqCst), 1);
        // Jamais démarré, donc jamais stoppé.
        assert_eq!(service.stop_count.load(Ordering::SeqCst), 0);
    }
}

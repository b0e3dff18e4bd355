//! Owned subscription handles over event-relay threads.

use std::thread::{self, JoinHandle};

use crossbeam_channel::{Receiver, Sender, bounded, select};
use tracing::debug;

/// Poignée RAII sur un thread de relais d'événements.
///
/// Le thread boucle sur le receiver et applique le handler à chaque
/// événement. Lâcher la poignée signale l'arrêt puis attend la fin du
/// thread : après le retour de `drop`, plus aucun événement ne sera relayé.
/// C'est ce qui rend l'ordre de destruction de la session sûr : les relais
/// sont morts avant que les services ne soient stoppés.
pub struct Subscription {
    name: &'static str,
    shutdown: Sender<()>,
    handle: Option<JoinHandle<()>>,
}

impl Subscription {
    /// Démarre un thread de relais nommé consommant `rx` avec `handler`.
    ///
    /// Le thread se termine quand la poignée est lâchée ou quand le bus
    /// émetteur disparaît (receiver déconnecté).
    pub fn spawn<T, F>(name: &'static str, rx: Receiver<T>, mut handler: F) -> Self
    where
        T: Send + 'static,
        F: FnMut(T) + Send + 'static,
    {
        let (shutdown, shutdown_rx) = bounded::<()>(1);

        let handle = thread::Builder::new()
            .name(name.to_string())
            .spawn(move || {
                loop {
                    select! {
                        recv(rx) -> msg => match msg {
                            Ok(event) => handler(event),
                            Err(_) => break,
                        },
                        recv(shutdown_rx) -> _ => break,
                    }
                }
            })
            .expect("failed to spawn relay thread");

        Self {
            name,
            shutdown,
            handle: Some(handle),
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        let _ = self.shutdown.send(());
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
        debug!(relay = self.name, "Relay unsubscribed");
    }
}

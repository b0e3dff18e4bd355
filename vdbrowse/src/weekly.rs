//! Présenteur des sélections hebdomadaires.

use tracing::warn;
use vdapi::{VideoEntry, WeeklyBucket};

use crate::feed::PortalFeed;

/// Libellé sentinelle placé en tête de la liste des sélections.
pub const REFRESH_LABEL: &str = "Refresh";

/// Retours du présenteur vers la vue hôte.
pub trait WeeklyListener {
    /// La liste des sélections vient d'être (re)chargée.
    fn on_weekly_list(&self, buckets: &[WeeklyBucket]);

    /// Les vidéos d'une sélection sont prêtes à afficher.
    fn on_video_list(&self, videos: Vec<VideoEntry>, label: String, reminder: String);

    /// Erreur de récupération ; pas de relance automatique.
    fn on_error(&self, error: String);
}

/// Cache ordonné des sélections hebdomadaires, plus récente en premier.
///
/// Confiné au thread UI par contrat : aucun verrou interne, tous les appels
/// doivent venir du même thread que la vue.
pub struct WeeklyPresenter<C> {
    client: C,
    weekly_list: Vec<WeeklyBucket>,
}

impl<C: PortalFeed> WeeklyPresenter<C> {
    pub fn new(client: C) -> Self {
        Self {
            client,
            weekly_list: Vec::new(),
        }
    }

    /// Point d'entrée de l'écran : charge la liste des sélections.
    pub async fn request_data(&mut self, listener: &dyn WeeklyListener) {
        self.request_weekly_list(listener).await;
    }

    /// Charge la liste des sélections puis, automatiquement, les vidéos de
    /// la plus récente.
    pub async fn request_weekly_list(&mut self, listener: &dyn WeeklyListener) {
        match self.client.weekly_series().await {
            Ok(result) => {
                listener.on_weekly_list(&result);
                self.weekly_list = result;

                // La liste obtenue, charger la dernière sélection parue
                if !self.weekly_list.is_empty() {
                    let number = self.weekly_list[0].number;
                    self.request_weekly_videos(number, listener).await;
                }
            }
            Err(e) => {
                warn!("Weekly series fetch failed: {}", e);
                listener.on_error(e.to_string());
            }
        }
    }

    /// Charge les vidéos de la sélection `number`.
    pub async fn request_weekly_videos(&self, number: i64, listener: &dyn WeeklyListener) {
        match self.client.weekly_videos(number).await {
            Ok(page) => listener.on_video_list(page.list, page.label, page.reminder),
            Err(e) => {
                warn!("Weekly videos fetch failed for {}: {}", number, e);
                listener.on_error(e.to_string());
            }
        }
    }

    /// Charge les vidéos de la sélection à l'index `index` du cache.
    ///
    /// Hors bornes : no-op silencieux. Une sélection périmée de l'UI peut
    /// référencer un index disparu pendant un rafraîchissement de la liste ;
    /// ce n'est pas une erreur.
    pub async fn request_by_index(&self, index: usize, listener: &dyn WeeklyListener) {
        if index >= self.weekly_list.len() {
            return;
        }
        self.request_weekly_videos(self.weekly_list[index].number, listener)
            .await;
    }

    /// Libellés d'affichage : sentinelle de rafraîchissement puis
    /// « nom    sujet » pour chaque sélection en cache.
    pub fn bucket_labels(&self) -> Vec<String> {
        let mut labels = vec![REFRESH_LABEL.to_string()];
        for bucket in &self.weekly_list {
            labels.push(format!("{}    {}", bucket.name, bucket.subject));
        }
        labels
    }

    /// Sélections actuellement en cache.
    pub fn buckets(&self) -> &[WeeklyBucket] {
        &self.weekly_list
    }
}

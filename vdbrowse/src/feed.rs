//! Contrôleur du flux « trésors de l'histoire ».

use std::collections::HashSet;

use async_trait::async_trait;
use tracing::warn;
use vdapi::{HotHistoryPage, PortalClient, WeeklyBucket, WeeklyPage};

use crate::datasource::VideoListDataSource;

/// Seam sur les flux du portail consommés par les écrans d'accueil.
///
/// Implémenté par [`PortalClient`] en production et par des fakes
/// enregistreurs dans les tests des présenteurs.
#[async_trait]
pub trait PortalFeed: Send + Sync {
    async fn hot_history(&self) -> vdapi::Result<HotHistoryPage>;
    async fn weekly_series(&self) -> vdapi::Result<Vec<WeeklyBucket>>;
    async fn weekly_videos(&self, number: i64) -> vdapi::Result<WeeklyPage>;
}

#[async_trait]
impl PortalFeed for PortalClient {
    async fn hot_history(&self) -> vdapi::Result<HotHistoryPage> {
        self.get_hot_history().await
    }

    async fn weekly_series(&self) -> vdapi::Result<Vec<WeeklyBucket>> {
        self.get_weekly_list().await
    }

    async fn weekly_videos(&self, number: i64) -> vdapi::Result<WeeklyPage> {
        self.get_weekly_videos(number).await
    }
}

/// Retours du flux vers la vue hôte.
///
/// Les callbacks sont invoqués sur la tâche appelante ; la vue marshale
/// elle-même vers son thread UI si nécessaire.
pub trait HotHistoryListener {
    /// Une page fraîche remplace entièrement la source précédente.
    fn on_feed(&self, source: VideoListDataSource, explain: String);

    /// Erreur de récupération : état d'erreur affiché dans la grille, pas de
    /// relance automatique.
    fn on_error(&self, error: String);
}

/// Récupère le flux et construit une source de données filtrée.
pub struct HotHistoryFeed<C> {
    client: C,
    banned: HashSet<u64>,
}

impl<C: PortalFeed> HotHistoryFeed<C> {
    pub fn new(client: C, banned: HashSet<u64>) -> Self {
        Self { client, banned }
    }

    /// Lance (ou relance, pour un rafraîchissement manuel) la récupération
    /// du flux. Chaque succès produit une source neuve.
    pub async fn request(&self, listener: &dyn HotHistoryListener) {
        match self.client.hot_history().await {
            Ok(page) => {
                let source = VideoListDataSource::new(page.list, &self.banned);
                listener.on_feed(source, page.explain);
            }
            Err(e) => {
                warn!("Hot history fetch failed: {}", e);
                listener.on_error(e.to_string());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;
    use vdapi::{ApiError, Owner, VideoEntry, VideoStat};

    struct FakePortal {
        page: Option<HotHistoryPage>,
    }

    #[async_trait]
    impl PortalFeed for FakePortal {
        async fn hot_history(&self) -> vdapi::Result<HotHistoryPage> {
            match &self.page {
                Some(page) => Ok(page.clone()),
                None => Err(ApiError::portal(-500, "backend down")),
            }
        }

        async fn weekly_series(&self) -> vdapi::Result<Vec<WeeklyBucket>> {
            unimplemented!("not used by the feed")
        }

        async fn weekly_videos(&self, _number: i64) -> vdapi::Result<WeeklyPage> {
            unimplemented!("not used by the feed")
        }
    }

    #[derive(Default)]
    struct Recorder {
        feeds: Mutex<Vec<(usize, String)>>,
        errors: Mutex<Vec<String>>,
    }

    impl HotHistoryListener for Recorder {
        fn on_feed(&self, source: VideoListDataSource, explain: String) {
            self.feeds
                .lock()
                .unwrap()
                .push((source.item_count(), explain));
        }

        fn on_error(&self, error: String) {
            self.errors.lock().unwrap().push(error);
        }
    }

    fn entry(bvid: &str, mid: u64) -> VideoEntry {
        VideoEntry {
            bvid: bvid.to_string(),
            title: bvid.to_string(),
            pic: "p".into(),
            owner: Owner {
                mid,
                name: "o".into(),
            },
            pubdate: 0,
            stat: VideoStat::default(),
            duration: 0,
            achievement: String::new(),
        }
    }

    #[tokio::test]
    async fn success_hands_a_filtered_source_to_the_listener() {
        let portal = FakePortal {
            page: Some(HotHistoryPage {
                explain: "the vault".into(),
                list: vec![entry("a", 1), entry("b", 2), entry("c", 3)],
            }),
        };
        let feed = HotHistoryFeed::new(portal, [2u64].into_iter().collect());
        let recorder = Recorder::default();

        feed.request(&recorder).await;

        let feeds = recorder.feeds.lock().unwrap();
        assert_eq!(feeds.len(), 1);
        assert_eq!(feeds[0], (2, "the vault".to_string()));
        assert!(recorder.errors.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn failure_reaches_the_error_path_only() {
        let feed = HotHistoryFeed::new(FakePortal { page: None }, HashSet::new());
        let recorder = Recorder::default();

        feed.request(&recorder).await;

        assert!(recorder.feeds.lock().unwrap().is_empty());
        let errors = recorder.errors.lock().unwrap();
        assert_eq!(errors.len(), 1);
        assert!(errors[0].contains("backend down"));
    }
}

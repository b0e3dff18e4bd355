//! Client haut-niveau du portail vidéo
//!
//! Ce module fournit le client asynchrone utilisé par les écrans d'accueil.
//! Chaque appel est un GET sans état ; le portail ne demande aucune
//! authentification pour ces flux publics.

use crate::error::{ApiError, Result};
use crate::models::{Envelope, HotHistoryPage, WeeklyBucket, WeeklyPage, WeeklySeries};
use reqwest::Client;
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::debug;

/// URL de base du portail
const PORTAL_BASE_URL: &str = "https://api.viddeck.org";

/// Flux « trésors de l'histoire »
const HOT_HISTORY_ENDPOINT: &str = "/x/feed/history";
/// Liste des sélections hebdomadaires
const WEEKLY_SERIES_ENDPOINT: &str = "/x/feed/weekly/series";
/// Vidéos d'une sélection hebdomadaire
const WEEKLY_VIDEOS_ENDPOINT: &str = "/x/feed/weekly";

/// Client du portail vidéo
pub struct PortalClient {
    /// Client HTTP
    client: Client,
    /// URL de base (surchargée dans les tests)
    base_url: String,
}

impl PortalClient {
    /// Crée un client pointant sur le portail de production
    pub fn new() -> Result<Self> {
        Self::with_base_url(PORTAL_BASE_URL)
    }

    /// Crée un client avec une URL de base personnalisée
    pub fn with_base_url(base_url: impl Into<String>) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .user_agent("VidDeck/0.1")
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }

    /// Récupère le flux « trésors de l'histoire » avec sa légende
    pub async fn get_hot_history(&self) -> Result<HotHistoryPage> {
        self.get(HOT_HISTORY_ENDPOINT, &[]).await
    }

    /// Récupère la liste ordonnée des sélections hebdomadaires, la plus
    /// récente en premier
    pub async fn get_weekly_list(&self) -> Result<Vec<WeeklyBucket>> {
        let series: WeeklySeries = self.get(WEEKLY_SERIES_ENDPOINT, &[]).await?;
        Ok(series.list)
    }

    /// Récupère les vidéos de la sélection hebdomadaire `number`
    pub async fn get_weekly_videos(&self, number: i64) -> Result<WeeklyPage> {
        let number = number.to_string();
        self.get(WEEKLY_VIDEOS_ENDPOINT, &[("number", number.as_str())])
            .await
    }

    /// Effectue une requête GET et décode l'enveloppe du portail
    async fn get<T: DeserializeOwned>(&self, endpoint: &str, params: &[(&str, &str)]) -> Result<T> {
        let url = format!("{}{}", self.base_url, endpoint);
        debug!("GET {} with {} params", url, params.len());

        let response = self
            .client
            .get(&url)
            .query(params)
            .send()
            .await?
            .error_for_status()?;

        let envelope: Envelope<T> = response.json().await?;
        if envelope.code != 0 {
            return Err(ApiError::portal(envelope.code, envelope.message));
        }

        envelope
            .data
            .ok_or_else(|| ApiError::MissingData(endpoint.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn video_json(bvid: &str, mid: u64) -> String {
        format!(
            r#"{{"bvid": "{bvid}", "title": "title {bvid}", "pic": "http://i.example/{bvid}.jpg",
                "owner": {{"mid": {mid}, "name": "owner {mid}"}},
                "pubdate": 1659283200, "stat": {{"view": 1000, "danmaku": 20}},
                "duration": 300, "achievement": ""}}"#
        )
    }

    #[tokio::test]
    async fn hot_history_decodes_the_envelope() {
        let mut server = mockito::Server::new_async().await;
        let body = format!(
            r#"{{"code": 0, "message": "ok",
                "data": {{"explain": "the vault", "list": [{}, {}]}}}}"#,
            video_json("BV1a", 1),
            video_json("BV1b", 2)
        );
        let mock = server
            .mock("GET", "/x/feed/history")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(body)
            .create_async()
            .await;

        let client = PortalClient::with_base_url(server.url()).unwrap();
        let page = client.get_hot_history().await.unwrap();

        mock.assert_async().await;
        assert_eq!(page.explain, "the vault");
        assert_eq!(page.list.len(), 2);
        assert_eq!(page.list[0].bvid, "BV1a");
    }

    #[tokio::test]
    async fn non_zero_code_maps_to_portal_error() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/x/feed/weekly/series")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"code": -404, "message": "nothing here", "data": null}"#)
            .create_async()
            .await;

        let client = PortalClient::with_base_url(server.url()).unwrap();
        let err = client.get_weekly_list().await.unwrap_err();

        match err {
            ApiError::Portal { code, message } => {
                assert_eq!(code, -404);
                assert_eq!(message, "nothing here");
            }
            other => panic!("expected portal error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn weekly_videos_passes_the_number() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/x/feed/weekly")
            .match_query(mockito::Matcher::UrlEncoded(
                "number".into(),
                "207".into(),
            ))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(format!(
                r#"{{"code": 0, "message": "ok",
                    "data": {{"label": "Week 207", "reminder": "every friday",
                              "list": [{}]}}}}"#,
                video_json("BV2a", 3)
            ))
            .create_async()
            .await;

        let client = PortalClient::with_base_url(server.url()).unwrap();
        let page = client.get_weekly_videos(207).await.unwrap();

        mock.assert_async().await;
        assert_eq!(page.label, "Week 207");
        assert_eq!(page.list.len(), 1);
    }
}

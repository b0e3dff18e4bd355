//! Structures de données pour représenter les objets du portail

use serde::{Deserialize, Deserializer, Serialize};

/// Désérialiseur flexible pour les identifiants qui peuvent être des strings
/// ou des entiers selon l'endpoint
pub(crate) fn deserialize_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::Error;
    use serde_json::Value;

    let value = Value::deserialize(deserializer)?;
    match value {
        Value::String(s) => Ok(s),
        Value::Number(n) => Ok(n.to_string()),
        _ => Err(Error::custom("ID must be a string or number")),
    }
}

/// Propriétaire (uploader) d'une vidéo
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Owner {
    /// Identifiant unique du propriétaire
    pub mid: u64,
    /// Nom affiché
    pub name: String,
}

/// Compteurs associés à une vidéo
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct VideoStat {
    /// Nombre de lectures
    #[serde(default)]
    pub view: u64,
    /// Nombre de commentaires danmaku
    #[serde(default)]
    pub danmaku: u64,
}

/// Une entrée de liste vidéo telle que renvoyée par le portail.
///
/// Les entrées ne sont jamais modifiées après désérialisation : elles sont
/// filtrées puis copiées dans les listes d'affichage.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VideoEntry {
    /// Identifiant de contenu
    #[serde(deserialize_with = "deserialize_id")]
    pub bvid: String,
    /// Titre de la vidéo
    pub title: String,
    /// URL de l'image de couverture
    pub pic: String,
    /// Propriétaire de la vidéo
    pub owner: Owner,
    /// Date de publication (timestamp Unix)
    #[serde(default)]
    pub pubdate: i64,
    /// Compteurs de lecture
    #[serde(default)]
    pub stat: VideoStat,
    /// Durée en secondes
    #[serde(default)]
    pub duration: u64,
    /// Badge de distinction ("hot", "weekly pick", ...)
    #[serde(default)]
    pub achievement: String,
}

/// Une sélection hebdomadaire (numéro + nom + sujet)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WeeklyBucket {
    /// Numéro de la sélection, croissant avec le temps
    pub number: i64,
    /// Nom de la sélection
    pub name: String,
    /// Sujet ou sous-titre
    #[serde(default)]
    pub subject: String,
}

/// Page du flux « trésors de l'histoire »
#[derive(Debug, Clone, Deserialize)]
pub struct HotHistoryPage {
    /// Légende affichée au-dessus de la grille
    #[serde(default)]
    pub explain: String,
    /// Entrées de la page
    #[serde(default)]
    pub list: Vec<VideoEntry>,
}

/// Page des vidéos d'une sélection hebdomadaire
#[derive(Debug, Clone, Deserialize)]
pub struct WeeklyPage {
    /// Légende de la sélection
    #[serde(default)]
    pub label: String,
    /// Texte de rappel affiché en pied de liste
    #[serde(default)]
    pub reminder: String,
    /// Entrées de la sélection
    #[serde(default)]
    pub list: Vec<VideoEntry>,
}

/// Réponse des sélections hebdomadaires
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct WeeklySeries {
    #[serde(default)]
    pub list: Vec<WeeklyBucket>,
}

/// Enveloppe commune à toutes les réponses du portail
#[derive(Debug, Deserialize)]
pub(crate) struct Envelope<T> {
    pub code: i64,
    #[serde(default)]
    pub message: String,
    pub data: Option<T>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bvid_accepts_string_or_number() {
        let json = r#"{"bvid": 170001, "title": "t", "pic": "p",
                       "owner": {"mid": 1, "name": "n"}}"#;
        let entry: VideoEntry = serde_json::from_str(json).unwrap();
        assert_eq!(entry.bvid, "170001");

        let json = r#"{"bvid": "BV1xx411c7mD", "title": "t", "pic": "p",
                       "owner": {"mid": 1, "name": "n"}}"#;
        let entry: VideoEntry = serde_json::from_str(json).unwrap();
        assert_eq!(entry.bvid, "BV1xx411c7mD");
    }

    #[test]
    fn missing_counters_default_to_zero() {
        let json = r#"{"bvid": "BV1", "title": "t", "pic": "p",
                       "owner": {"mid": 1, "name": "n"}}"#;
        let entry: VideoEntry = serde_json::from_str(json).unwrap();
        assert_eq!(entry.stat.view, 0);
        assert_eq!(entry.stat.danmaku, 0);
        assert_eq!(entry.duration, 0);
        assert!(entry.achievement.is_empty());
    }
}

//! Source de données des grilles vidéo, avec filtrage par bannissement.

use std::collections::HashSet;

use tracing::info;
use vdapi::VideoEntry;

/// Suffixe de vignette demandé au CDN (format webp recadré).
pub const THUMB_SUFFIX: &str = "@672w_378h_1c.webp";

/// Dérive l'URL de vignette d'une couverture.
///
/// Les sources `.gif` sont décodées comme `.jpg` : le CDN ne sait pas
/// produire de webp animé à partir d'un gif.
pub fn thumbnail_url(pic: &str) -> String {
    if pic.ends_with(".gif") {
        format!("{}{}", pic, THUMB_SUFFIX.replace(".webp", ".jpg"))
    } else {
        format!("{}{}", pic, THUMB_SUFFIX)
    }
}

/// Contenu prêt à afficher d'une cellule de la grille.
#[derive(Clone, Debug, PartialEq)]
pub struct VideoCard {
    pub cover: String,
    pub title: String,
    pub owner_name: String,
    pub pubdate: i64,
    pub views: u64,
    pub danmaku: u64,
    pub duration: u64,
    pub achievement: String,
}

/// Liste d'entrées vidéo filtrée par la liste de bannissement.
///
/// Le filtre est appliqué à la construction et à chaque ajout ; les entrées
/// déjà présentes ne sont jamais retouchées. Un rafraîchissement manuel
/// remplace la source entière par une nouvelle instance.
pub struct VideoListDataSource {
    video_list: Vec<VideoEntry>,
}

impl VideoListDataSource {
    pub fn new(entries: Vec<VideoEntry>, banned: &HashSet<u64>) -> Self {
        let mut source = Self {
            video_list: Vec::with_capacity(entries.len()),
        };
        source.append(entries, banned);
        source
    }

    /// Nombre d'entrées affichables.
    pub fn item_count(&self) -> usize {
        self.video_list.len()
    }

    /// Contenu de la cellule `index`, ou `None` hors bornes.
    pub fn card(&self, index: usize) -> Option<VideoCard> {
        let entry = self.video_list.get(index)?;
        Some(VideoCard {
            cover: thumbnail_url(&entry.pic),
            title: entry.title.clone(),
            owner_name: entry.owner.name.clone(),
            pubdate: entry.pubdate,
            views: entry.stat.view,
            danmaku: entry.stat.danmaku,
            duration: entry.duration,
            achievement: entry.achievement.clone(),
        })
    }

    /// Sélection d'une cellule : délègue l'ouverture de la vidéo à l'action
    /// externe `open`, avec l'identifiant de contenu.
    pub fn on_item_selected(&self, index: usize, open: impl FnOnce(&str)) {
        if let Some(entry) = self.video_list.get(index) {
            open(&entry.bvid);
        }
    }

    /// Ajoute une page d'entrées (pagination), en appliquant le même filtre
    /// aux seules nouvelles entrées.
    pub fn append(&mut self, entries: Vec<VideoEntry>, banned: &HashSet<u64>) {
        for entry in entries {
            if banned.contains(&entry.owner.mid) {
                info!("Banned {} {}", entry.owner.name, entry.owner.mid);
                continue;
            }
            self.video_list.push(entry);
        }
    }

    pub fn clear(&mut self) {
        self.video_list.clear();
    }
}

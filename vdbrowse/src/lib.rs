//! Écrans d'accueil de VidDeck : flux « trésors de l'histoire » et
//! sélections hebdomadaires.
//!
//! Ce crate contient la logique de présentation indépendante du toolkit :
//! filtrage par liste de bannissement, dérivation des URLs de vignettes,
//! cache des sélections hebdomadaires. Le widget grille et la navigation
//! appartiennent à la couche UI, qui ne voit ici que des structures de
//! données prêtes à afficher.

pub mod datasource;
pub mod feed;
pub mod weekly;

pub use datasource::{VideoCard, VideoListDataSource, thumbnail_url};
pub use feed::{HotHistoryFeed, HotHistoryListener, PortalFeed};
pub use weekly::{REFRESH_LABEL, WeeklyListener, WeeklyPresenter};

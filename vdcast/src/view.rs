//! Seam over the hosting video view.

/// Abstraction de la vue vidéo qui héberge la session.
///
/// Toutes les méthodes doivent être appelées depuis le thread UI ; la session
/// s'en charge en passant par sa file [`crate::UiHandle`].
pub trait VideoView: Send + Sync {
    /// Remplace le titre affiché dans l'OSD.
    fn set_title(&self, title: &str);

    /// Affiche ou masque l'OSD.
    fn show_osd(&self, visible: bool);

    /// Affiche un texte transitoire dans l'OSD ("Volume: 42").
    fn show_osd_text(&self, text: &str);

    /// Indique si l'OSD est verrouillé en position dépliée.
    fn is_osd_locked(&self) -> bool;

    /// Bascule la visibilité de l'OSD.
    fn toggle_osd(&self);

    /// Affiche l'adresse de découverte ("http://ip:port") dans la vue.
    fn set_endpoint_hint(&self, endpoint: &str);

    /// Masque les contrôles sans objet pour une session pilotée à distance
    /// (qualité, danmaku, sous-titres, historique, saut d'intro).
    fn hide_remote_irrelevant_controls(&self);

    /// Une session DLNA survit à la fin de fichier : la vue ne doit pas se
    /// fermer toute seule en attendant la commande suivante.
    fn disable_close_on_end_of_file(&self);

    /// Présente la boîte de dialogue de sortie ; `on_confirm` n'est invoqué
    /// que si l'utilisateur valide.
    fn present_quit_dialog(&self, on_confirm: Box<dyn FnOnce() + Send>);

    /// Dépile l'activité courante.
    fn pop_activity(&self);
}

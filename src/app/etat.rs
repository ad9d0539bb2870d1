//! src/app/etat.rs
//!
//! État UI (sans vue, sans noyau).
//!
//! Rôle : contenir l’état de la calculatrice (entrée, résultat, erreur, réglages, démarche)
//! et offrir des opérations simples (C/CLR/AC) sans logique d’affichage.
//!
//! Contrats :
//! - Aucune évaluation ici (pas de noyau, pas de parsing).
//! - Actions déterministes, sans effet de bord caché.

use calculatrice_rpn::noyau::Reglages;

#[derive(Clone, Default, Debug)]
pub struct Demarche {
    pub jetons: String,
    pub rpn: String,
    pub note: String,
}

/// Mode de saisie : expression infixe, ou RPN déjà écrite ("3 4 2 * +").
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Saisie {
    #[default]
    Infixe,
    Rpn,
}

#[derive(Clone, Debug)]
pub struct AppCalc {
    // --- entrée utilisateur ---
    pub entree: String,
    pub saisie: Saisie,

    // --- sorties ---
    pub resultat: String, // "= valeur"
    pub erreur: String,   // message d’erreur (si parsing/éval échoue)

    // --- démarche (panneau d’explication) ---
    pub demarche: Demarche,

    // --- paramètres ---
    pub reglages: Reglages,
    reglages_initiaux: Reglages,

    // --- UX ---
    // Permet à vue.rs de redonner le focus à l’entrée après un clic sur un bouton.
    pub focus_entree: bool,
}

impl Default for AppCalc {
    fn default() -> Self {
        Self::new(Reglages::default())
    }
}

impl AppCalc {
    pub fn new(reglages: Reglages) -> Self {
        Self {
            entree: String::new(),
            saisie: Saisie::default(),
            resultat: String::new(),
            erreur: String::new(),
            demarche: Demarche::default(),
            reglages,
            reglages_initiaux: reglages,
            focus_entree: true, // au lancement, on veut pouvoir taper tout de suite
        }
    }

    /* ------------------------ Actions “boutons” (état seulement) ------------------------ */

    /// AC : remise à zéro totale (entrée + résultats + réglages de démarrage).
    pub fn reset_total(&mut self) {
        self.entree.clear();
        self.clear_resultats();
        self.reglages = self.reglages_initiaux;
        self.saisie = Saisie::default();
        self.focus_entree = true;
    }

    /// C : effacer seulement l’entrée (sans toucher aux résultats).
    pub fn clear_entree(&mut self) {
        self.entree.clear();
        self.focus_entree = true;
    }

    /// CLR : effacer résultat + erreur + démarche (sans toucher à l’entrée).
    pub fn clear_resultats(&mut self) {
        self.resultat.clear();
        self.erreur.clear();
        self.demarche = Demarche::default();
        self.focus_entree = true;
    }

    /// Utilitaire : placer une erreur.
    ///
    /// On CONSERVE le dernier résultat pour ne pas “effacer l’écran” sur une faute,
    /// mais la démarche n’est plus fiable : on l’efface.
    pub fn set_erreur(&mut self, msg: impl Into<String>) {
        self.erreur = msg.into();
        self.demarche = Demarche::default();
        self.focus_entree = true;
    }

    /// Utilitaire : déposer un résultat déjà formaté + sa démarche.
    pub fn set_resultat(&mut self, valeur: &str, demarche: Demarche) {
        self.erreur.clear();
        self.resultat = format!("= {valeur}");
        self.demarche = demarche;
        self.focus_entree = true;
    }

    /// Garde-fou : la précision passe par les réglages (bornés).
    pub fn set_chiffres(&mut self, chiffres: usize) {
        self.reglages.set_chiffres(chiffres);
        self.focus_entree = true;
    }
}

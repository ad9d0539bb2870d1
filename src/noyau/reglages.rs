//! Réglages d’évaluation (sans UI).
//!
//! - `parentheses_strictes` : une "(" jamais refermée est signalée par le parseur.
//!   Sinon (ancien comportement), elle est vidée en sortie et l’évaluateur la rejette
//!   comme symbole inconnu.
//! - `pile_stricte` : la pile finale doit contenir exactement une valeur.
//!   Sinon (défaut), seul le sommet est rendu : "2 3" vaut 3.
//! - `chiffres` : précision d’affichage du résultat (bornée).

/// Précision d’affichage par défaut.
pub const CHIFFRES_DEFAUT: usize = 10;

/// Garde-fou : au-delà, un f64 n’a plus de chiffres significatifs à montrer.
pub const CHIFFRES_MAX: usize = 17;

const VAR_STRICT: &str = "CALCULATRICE_STRICT";
const VAR_CHIFFRES: &str = "CALCULATRICE_CHIFFRES";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Reglages {
    pub parentheses_strictes: bool,
    pub pile_stricte: bool,
    pub chiffres: usize,
}

impl Default for Reglages {
    fn default() -> Self {
        Self {
            parentheses_strictes: true,
            pile_stricte: false,
            chiffres: CHIFFRES_DEFAUT,
        }
    }
}

impl Reglages {
    /// Mode historique : aucune règle stricte.
    pub fn permissifs() -> Self {
        Self {
            parentheses_strictes: false,
            pile_stricte: false,
            ..Self::default()
        }
    }

    /// Les deux règles strictes activées.
    pub fn stricts() -> Self {
        Self {
            parentheses_strictes: true,
            pile_stricte: true,
            ..Self::default()
        }
    }

    /// Défauts surchargés par l’environnement (`CALCULATRICE_STRICT`, `CALCULATRICE_CHIFFRES`).
    /// Une valeur illisible est ignorée (avec un avertissement).
    pub fn depuis_env() -> Self {
        Self::depuis_valeurs(
            std::env::var(VAR_STRICT).ok().as_deref(),
            std::env::var(VAR_CHIFFRES).ok().as_deref(),
        )
    }

    fn depuis_valeurs(strict: Option<&str>, chiffres: Option<&str>) -> Self {
        let mut r = match strict.map(|v| v.trim().to_ascii_lowercase()) {
            None => Self::default(),
            Some(v) => match v.as_str() {
                "1" | "true" | "oui" => Self::stricts(),
                "0" | "false" | "non" => Self::permissifs(),
                _ => {
                    log::warn!("{VAR_STRICT}={v:?} ignoré (attendu: oui/non, true/false, 1/0)");
                    Self::default()
                }
            },
        };

        if let Some(c) = chiffres {
            match c.trim().parse::<usize>() {
                Ok(n) => r.set_chiffres(n),
                Err(e) => log::warn!("{VAR_CHIFFRES}={c:?} ignoré: {e}"),
            }
        }

        r
    }

    /// Garde-fou : limite la précision d’affichage.
    pub fn set_chiffres(&mut self, chiffres: usize) {
        self.chiffres = chiffres.min(CHIFFRES_MAX);
    }
}

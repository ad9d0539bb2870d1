// src/noyau/erreur.rs
//
// Taxonomie des erreurs du noyau.
// Toutes sont fatales pour l’évaluation en cours : pas de reprise, pas de résultat partiel.

use std::num::ParseFloatError;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ErreurCalcul {
    /// Aucun classifieur ne reconnaît la suite de l’entrée.
    #[error("impossible d’analyser la chaîne « {reste} »")]
    Lexicale { reste: String },

    #[error("parenthèse fermante rencontrée avant la parenthèse ouvrante")]
    FermanteSansOuvrante,

    #[error("parenthèse ouvrante non fermée")]
    OuvranteNonFermee,

    #[error("fonction non supportée « {symbole} ». N’oubliez pas les parenthèses.")]
    SymboleInconnu { symbole: String },

    #[error("impossible de lire un nombre depuis « {litteral} » : {source}")]
    NombreInvalide {
        litteral: String,
        #[source]
        source: ParseFloatError,
    },

    /// Arité non satisfaite : `taille` opérandes disponibles, `attendue` requises.
    #[error("{operation} : la pile a une taille {taille} mais une taille {attendue} est attendue")]
    PileInsuffisante {
        operation: String,
        taille: usize,
        attendue: usize,
    },

    #[error("l’entrée ne contient pas d’expression mathématique valide")]
    ExpressionVide,

    #[error("expression incomplète : {restants} valeurs restent sur la pile")]
    PileResiduelle { restants: usize },
}

impl ErreurCalcul {
    pub(crate) fn symbole_inconnu(symbole: &str) -> Self {
        ErreurCalcul::SymboleInconnu {
            symbole: symbole.to_string(),
        }
    }
}

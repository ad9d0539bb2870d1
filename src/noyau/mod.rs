//! Noyau RPN
//!
//! Organisation interne :
//! - jetons.rs   : tokenisation (vues sur l’entrée, moins unaire)
//! - rpn.rs      : shunting-yard -> RPN
//! - registre.rs : tables fixes (priorités + opérations)
//! - eval.rs     : pile de f64 + pipeline complet
//! - format.rs   : affichage du résultat
//! - reglages.rs : règles strictes + précision
//! - erreur.rs   : erreurs du noyau

pub mod erreur;
pub mod eval;
pub mod format;
pub mod jetons;
pub mod registre;
pub mod reglages;
pub mod rpn;

#[cfg(test)]
mod tests_scientifiques;

#[cfg(test)]
mod tests_fuzz_safe;

// API publique minimale
pub use erreur::ErreurCalcul;
pub use eval::{calcule_rpn, eval_expression, evaluate_expression};
pub use format::formate_resultat;
pub use reglages::Reglages;

//! Noyau — évaluation (pipeline réel)
//!
//! texte -> jetons -> RPN (shunting-yard) -> pile de f64 -> résultat
//!
//! L’évaluateur ne connaît que la RPN : il peut donc aussi relire une RPN écrite
//! à la main ("3 4 2 * +"), via `calcule_rpn`.

use super::erreur::ErreurCalcul;
use super::jetons::{format_jetons, tokenize, Jeton, Nature};
use super::registre::{operation, Operation};
use super::reglages::Reglages;
use super::rpn::vers_postfixe;

#[derive(Default, Clone, Debug)]
pub struct DemarcheNoyau {
    pub jetons: String,
    pub rpn: String,
    pub note: String,
}

/// API publique minimale : évalue une expression infixe avec les réglages par défaut.
pub fn evaluate_expression(expr: &str) -> Result<f64, ErreurCalcul> {
    let postfixe = vers_postfixe(expr, &Reglages::default())?;
    if postfixe.is_empty() {
        return Err(ErreurCalcul::ExpressionVide);
    }
    calcule_postfixe(&postfixe, &Reglages::default())
}

/// API publique : évalue une expression et retourne:
/// - la valeur
/// - la démarche (jetons, RPN)
pub fn eval_expression(
    expr: &str,
    reglages: &Reglages,
) -> Result<(f64, DemarcheNoyau), ErreurCalcul> {
    // 1) RPN (le parseur tokenize lui-même)
    let postfixe = vers_postfixe(expr, reglages)?;
    if postfixe.is_empty() {
        return Err(ErreurCalcul::ExpressionVide);
    }

    // 2) Pile
    let valeur = calcule_postfixe(&postfixe, reglages)?;

    // 3) Démarche (l’entrée a déjà été tokenisée sans erreur)
    let jetons = format_jetons(&tokenize(expr)?);
    log::debug!("jetons de {expr:?} : {jetons}");
    let d = DemarcheNoyau {
        jetons,
        rpn: format_jetons(&postfixe),
        note: "Pipeline: jetons → RPN (shunting-yard) → pile → résultat.".into(),
    };

    Ok((valeur, d))
}

/// Évalue une RPN écrite en texte, jetons séparés par des espaces ("3 4 ~ -").
pub fn calcule_rpn(rpn: &str, reglages: &Reglages) -> Result<f64, ErreurCalcul> {
    let jetons: Vec<Jeton<'_>> = rpn.split_whitespace().map(Jeton::depuis_texte).collect();
    if jetons.is_empty() {
        return Err(ErreurCalcul::ExpressionVide);
    }
    calcule_postfixe(&jetons, reglages)
}

/// Exécute une suite postfixe sur une pile de f64.
///
/// - nombre : lu (f64) puis empilé
/// - sinon  : opération du registre, dépile son arité (droite d’abord, puis gauche),
///            empile le résultat
///
/// Le résultat est le sommet final. Avec `pile_stricte`, la pile doit finir à 1 élément.
pub fn calcule_postfixe<'a, 'b: 'a>(
    jetons: impl IntoIterator<Item = &'a Jeton<'b>>,
    reglages: &Reglages,
) -> Result<f64, ErreurCalcul> {
    let mut pile: Vec<f64> = Vec::new();

    for jeton in jetons {
        if jeton.nature == Nature::Nombre {
            let v = lit_nombre(jeton.texte)?;
            pile.push(v);
            continue;
        }

        let op = operation(jeton.texte)?;
        let arite = op.arite();
        verifie_taille(&pile, arite, jeton.texte)?;

        // [gauche, droite] : l’ordre source est conservé
        let args = pile.split_off(pile.len() - arite);
        let v = match op {
            Operation::Constante(c) => c,
            Operation::Unaire(f) => f(args[0]),
            Operation::Binaire(f) => f(args[0], args[1]),
        };
        log::trace!("{} -> {v} (pile: {})", jeton.texte, pile.len() + 1);
        pile.push(v);
    }

    if reglages.pile_stricte && pile.len() > 1 {
        return Err(ErreurCalcul::PileResiduelle {
            restants: pile.len(),
        });
    }

    // pile vide : le sommet n’existe pas, on ne le lit pas
    let resultat = pile.pop().ok_or(ErreurCalcul::ExpressionVide)?;
    log::debug!("résultat: {resultat}");
    Ok(resultat)
}

fn lit_nombre(litteral: &str) -> Result<f64, ErreurCalcul> {
    litteral
        .parse::<f64>()
        .map_err(|source| ErreurCalcul::NombreInvalide {
            litteral: litteral.to_string(),
            source,
        })
}

fn verifie_taille(pile: &[f64], attendue: usize, operation: &str) -> Result<(), ErreurCalcul> {
    if pile.len() < attendue {
        return Err(ErreurCalcul::PileInsuffisante {
            operation: operation.to_string(),
            taille: pile.len(),
            attendue,
        });
    }
    Ok(())
}

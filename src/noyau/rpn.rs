// src/noyau/rpn.rs
//
// Shunting-yard : infixe -> RPN (postfixe)
//
// Deux files :
// - `sortie`  : la RPN, dans l’ordre final
// - `attente` : opérateurs/fonctions/parenthèses en attente, ordonnés par l’AVANT
//               (le front est le dernier empilé)
//
// Déplacer un préfixe contigu de `attente` vers la fin de `sortie` se fait par
// `drain(..k)` : l’ordre est conservé, sans recopier toute la file.
//
// Règles:
// - Nombre, pi          => sortie directe
// - "("                 => front de l’attente (sans regarder les priorités)
// - ")"                 => vide l’attente jusqu’à "(" puis retire "("
// - ","                 => vide l’attente jusqu’à "(" (garde "(") : log(2,8) -> 2 8 log
// - opérateur/fonction  => vide l’attente tant que priorité(front) >= priorité(jeton),
//                          puis empile au front
// - préfixe (~, fonction) => empilé sans rien vider (pas encore d’opérande à gauche)

use std::collections::VecDeque;

use super::erreur::ErreurCalcul;
use super::jetons::{Jeton, Lexeur, Nature};
use super::registre::{priorite, PRIORITE_OUVRANTE};
use super::reglages::Reglages;

/// Suite ordonnée de jetons en notation postfixe.
pub type Postfixe<'a> = VecDeque<Jeton<'a>>;

/// Entrée de la file d’attente : le jeton et sa priorité (lue une seule fois).
type EnAttente<'a> = (Jeton<'a>, u8);

/// Convertit une expression infixe en RPN (notation polonaise inversée).
///
/// Exemple:
///   "3 + 4 * 2"   -> 3 4 2 * +
///   "sin(pi/2)"   -> pi 2 / sin
pub fn vers_postfixe<'a>(expr: &'a str, reglages: &Reglages) -> Result<Postfixe<'a>, ErreurCalcul> {
    let mut sortie: Postfixe<'a> = VecDeque::new();
    let mut attente: VecDeque<EnAttente<'a>> = VecDeque::new();

    for jeton in Lexeur::new(expr) {
        let jeton = jeton?;

        match jeton.nature {
            Nature::Nombre => sortie.push_back(jeton),
            Nature::Mot if jeton.est_pi() => sortie.push_back(jeton),

            Nature::Ouvrante => attente.push_front((jeton, PRIORITE_OUVRANTE)),

            Nature::Fermante => {
                let k = position_ouvrante(&attente).ok_or(ErreurCalcul::FermanteSansOuvrante)?;
                transfere(&mut attente, k, &mut sortie);
                attente.pop_front();
            }

            Nature::Virgule => {
                let k = position_ouvrante(&attente).unwrap_or(attente.len());
                transfere(&mut attente, k, &mut sortie);
            }

            Nature::Operateur | Nature::Mot => ajoute_operateur(jeton, &mut attente, &mut sortie)?,
        }
    }

    if reglages.parentheses_strictes && position_ouvrante(&attente).is_some() {
        return Err(ErreurCalcul::OuvranteNonFermee);
    }

    // fin d’entrée : toute l’attente part en sortie, du front vers l’arrière
    let k = attente.len();
    transfere(&mut attente, k, &mut sortie);

    log::debug!("RPN de {expr:?} : {}", super::jetons::format_jetons(&sortie));
    Ok(sortie)
}

fn ajoute_operateur<'a>(
    jeton: Jeton<'a>,
    attente: &mut VecDeque<EnAttente<'a>>,
    sortie: &mut Postfixe<'a>,
) -> Result<(), ErreurCalcul> {
    let p = priorite(jeton.texte)?;

    if !jeton.est_prefixe() {
        // "(" a la priorité la plus basse : le balayage s’y arrête toujours
        let k = attente
            .iter()
            .position(|&(_, p_front)| p_front < p)
            .unwrap_or(attente.len());
        transfere(attente, k, sortie);
    }

    attente.push_front((jeton, p));
    Ok(())
}

fn position_ouvrante(attente: &VecDeque<EnAttente<'_>>) -> Option<usize> {
    attente
        .iter()
        .position(|(j, _)| j.nature == Nature::Ouvrante)
}

/// Déplace les `k` premiers jetons en attente à la fin de la sortie (ordre conservé).
fn transfere<'a>(attente: &mut VecDeque<EnAttente<'a>>, k: usize, sortie: &mut Postfixe<'a>) {
    sortie.extend(attente.drain(..k).map(|(j, _)| j));
}

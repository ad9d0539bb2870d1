//! Tests scientifiques (campagne) : propriétés du pipeline infixe -> RPN -> pile.
//!
//! Notes importantes (aligné avec l’état actuel du noyau) :
//! - La puissance n’est PAS associative à droite : à priorité égale, l’attente est
//!   vidée de gauche à droite, donc 2^3^2 = (2^3)^2 = 64.
//! - Le moins unaire lie plus fort que tout opérateur binaire : -2^2 = (-2)^2 = 4.
//! - Les arguments en trop ("sin(1,2)") ne sont pas rejetés par la structure :
//!   seule une pile insuffisante déclenche une erreur (réglages par défaut).

use std::f64::consts::PI;

use super::erreur::ErreurCalcul;
use super::eval::{calcule_rpn, eval_expression};
use super::evaluate_expression;
use super::reglages::Reglages;

fn eval_ok(expr: &str) -> f64 {
    evaluate_expression(expr).unwrap_or_else(|e| panic!("expr={expr:?} err={e}"))
}

fn assert_proche(expr: &str, attendu: f64) {
    let v = eval_ok(expr);
    assert!(
        (v - attendu).abs() < 1e-9,
        "expr={expr:?} obtenu={v} attendu={attendu}"
    );
}

/// Relit la RPN produite (textes des jetons) et la réévalue.
fn aller_retour(expr: &str, reglages: &Reglages) -> (f64, f64) {
    let (v, d) = eval_expression(expr, reglages).unwrap_or_else(|e| panic!("expr={expr:?} err={e}"));
    let relu = calcule_rpn(&d.rpn, reglages)
        .unwrap_or_else(|e| panic!("rpn={:?} (de {expr:?}) err={e}", d.rpn));
    (v, relu)
}

/* ------------------------ Priorités ------------------------ */

#[test]
fn sci_priorites_standard() {
    assert_eq!(eval_ok("3 + 4 * 2"), 11.0);
    assert_eq!(eval_ok("(3 + 4) * 2"), 14.0);
    assert_eq!(eval_ok("2 * 3 + 4 * 5"), 26.0);
    assert_eq!(eval_ok("100 / 10 / 5"), 2.0);
    assert_eq!(eval_ok("10 - 4 - 3"), 3.0);
    assert_eq!(eval_ok("2 * (3 + (4 - 1)) ^ 2"), 72.0);
}

#[test]
fn sci_moins_unaire() {
    assert_eq!(eval_ok("-3 + 4"), 1.0);
    assert_eq!(eval_ok("3 - -4"), 7.0);
    assert_eq!(eval_ok("2 * -3"), -6.0);
    assert_eq!(eval_ok("-(2 + 3)"), -5.0);
    assert_eq!(eval_ok("--3"), 3.0);
    assert_eq!(eval_ok("-2 ^ 2"), 4.0);
    assert_eq!(eval_ok("-sqrt(4)"), -2.0);
    // les négations successives attendent toutes leur opérande
    assert_eq!(eval_ok("2 + - - 3"), 5.0);
    assert_eq!(eval_ok("2 - - - 3"), -1.0);
}

#[test]
fn sci_puissance_de_gauche_a_droite() {
    assert_eq!(eval_ok("2 ^ 3 ^ 2"), 64.0);
    assert_eq!(eval_ok("2 ^ (3 ^ 2)"), 512.0);
}

/* ------------------------ Fonctions + constante ------------------------ */

#[test]
fn sci_fonctions() {
    assert_eq!(eval_ok("sqrt(16)"), 4.0);
    assert_proche("log(2,8)", 3.0);
    assert_proche("pi", PI);
    assert_proche("sin(pi/6) * 2", 1.0);
    assert_proche("sqrt(16) + sqrt(9)", 7.0);
    assert_proche("0.5!", PI.sqrt() / 2.0);
}

#[test]
fn sci_arguments_en_trop_tolere() {
    // 1 2 sin : le sommet est sin(2)
    assert_proche("sin(1,2)", 2.0_f64.sin());
}

/* ------------------------ Aller-retour sur la RPN ------------------------ */

#[test]
fn sci_aller_retour_rpn() {
    let r = Reglages::default();
    for expr in [
        "3 + 4 * 2",
        "(3 + 4) * 2",
        "-3 + 4",
        "3 - -4",
        "2 ^ 3 ^ 2",
        "log(2,8)",
        "sqrt(16) / -pi",
        "3! - 1.5",
        "exp(ln(2)) * lg(100)",
    ] {
        let (v, relu) = aller_retour(expr, &r);
        assert_eq!(v.to_bits(), relu.to_bits(), "expr={expr:?}");
    }
}

/* ------------------------ Erreurs ------------------------ */

#[test]
fn sci_erreurs_attendues() {
    assert!(matches!(
        evaluate_expression(")("),
        Err(ErreurCalcul::FermanteSansOuvrante)
    ));

    assert!(matches!(
        evaluate_expression("3 $ 4"),
        Err(ErreurCalcul::Lexicale { .. })
    ));

    assert!(matches!(
        evaluate_expression("x + 1"),
        Err(ErreurCalcul::SymboleInconnu { .. })
    ));

    assert!(matches!(
        evaluate_expression(""),
        Err(ErreurCalcul::ExpressionVide)
    ));
    assert!(matches!(
        evaluate_expression("  \t "),
        Err(ErreurCalcul::ExpressionVide)
    ));
}

#[test]
fn sci_operateur_seul() {
    let e = evaluate_expression("+").unwrap_err();
    match &e {
        ErreurCalcul::PileInsuffisante {
            operation,
            taille,
            attendue,
        } => {
            assert_eq!(operation, "+");
            assert_eq!(*taille, 0);
            assert_eq!(*attendue, 2);
        }
        autre => panic!("attendu PileInsuffisante, obtenu {autre:?}"),
    }
    let msg = e.to_string();
    assert!(msg.contains("taille 0"), "{msg}");
    assert!(msg.contains("taille 2"), "{msg}");
}

#[test]
fn sci_messages_lisibles() {
    let msg = evaluate_expression("3 $ 4").unwrap_err().to_string();
    assert!(msg.contains("$ 4"), "{msg}");

    let msg = evaluate_expression("cot(1)").unwrap_err().to_string();
    assert!(msg.contains("parenthèses"), "{msg}");

    let msg = evaluate_expression("").unwrap_err().to_string();
    assert!(msg.contains("expression mathématique valide"), "{msg}");
}

/* ------------------------ Réglages ------------------------ */

#[test]
fn sci_reglages_stricts_et_permissifs() {
    let strict = Reglages::stricts();
    let permissif = Reglages::permissifs();

    assert!(matches!(
        eval_expression("(3 + 4", &strict),
        Err(ErreurCalcul::OuvranteNonFermee)
    ));
    assert!(matches!(
        eval_expression("(3 + 4", &permissif),
        Err(ErreurCalcul::SymboleInconnu { .. })
    ));

    assert!(matches!(
        eval_expression("sin(1,2)", &strict),
        Err(ErreurCalcul::PileResiduelle { restants: 2 })
    ));
    assert!(eval_expression("sin(1,2)", &permissif).is_ok());

    // une expression bien formée passe partout
    for r in [strict, permissif, Reglages::default()] {
        let (v, _) = eval_expression("log(2, 8) * (1 + 1)", &r).unwrap();
        assert!((v - 6.0).abs() < 1e-9);
    }
}

// src/noyau/registre.rs
//
// Registre des opérateurs et fonctions : deux tables fixes, construites une seule fois.
// - priorités  : utilisées par le shunting-yard (ordre seulement)
// - opérations : utilisées par l’évaluateur (arité + calcul f64)
//
// Aucune mutation après initialisation : lecture concurrente sans verrou.

use std::collections::HashMap;
use std::f64::consts::PI;
use std::sync::OnceLock;

use super::erreur::ErreurCalcul;

/// Priorité de la parenthèse ouvrante : la plus basse, jamais dépilée par un opérateur.
pub const PRIORITE_OUVRANTE: u8 = 1;

/// Calcul associé à un symbole, classé par arité.
#[derive(Clone, Copy, Debug)]
pub enum Operation {
    Constante(f64),
    Unaire(fn(f64) -> f64),
    Binaire(fn(f64, f64) -> f64),
}

impl Operation {
    pub fn arite(&self) -> usize {
        match self {
            Operation::Constante(_) => 0,
            Operation::Unaire(_) => 1,
            Operation::Binaire(_) => 2,
        }
    }
}

/// Factorielle continue : x! = Γ(x+1) (accepte les non-entiers).
fn factorielle(x: f64) -> f64 {
    libm::tgamma(x + 1.0)
}

/// log(base, x) = ln(x) / ln(base)
fn log_base(base: f64, x: f64) -> f64 {
    x.ln() / base.ln()
}

const FONCTIONS_NOMMEES: &[&str] = &[
    "exp", "ln", "lg", "log", "sqrt", "sin", "cos", "tan", "asin", "acos", "atan", "sinh", "cosh",
    "tanh",
];

fn table_priorites() -> &'static HashMap<&'static str, u8> {
    static PRIORITES: OnceLock<HashMap<&'static str, u8>> = OnceLock::new();

    PRIORITES.get_or_init(|| {
        let mut t = HashMap::from([
            ("(", PRIORITE_OUVRANTE),
            ("+", 2),
            ("-", 2),
            ("*", 3),
            ("/", 3),
            ("^", 4),
            ("~", 6),
            ("!", 7),
            (")", 8),
        ]);
        t.extend(FONCTIONS_NOMMEES.iter().map(|&f| (f, 5)));
        t
    })
}

fn table_operations() -> &'static HashMap<&'static str, Operation> {
    static OPERATIONS: OnceLock<HashMap<&'static str, Operation>> = OnceLock::new();

    OPERATIONS.get_or_init(|| {
        use Operation::*;

        HashMap::from([
            // binaires
            ("+", Binaire(|a, b| a + b)),
            ("-", Binaire(|a, b| a - b)),
            ("*", Binaire(|a, b| a * b)),
            ("/", Binaire(|a, b| a / b)),
            ("^", Binaire(f64::powf)),
            ("log", Binaire(log_base)),
            // unaires
            ("~", Unaire(|x| -x)),
            ("!", Unaire(factorielle)),
            ("exp", Unaire(f64::exp)),
            ("ln", Unaire(f64::ln)),
            ("lg", Unaire(f64::log10)),
            ("sqrt", Unaire(f64::sqrt)),
            ("sin", Unaire(f64::sin)),
            ("cos", Unaire(f64::cos)),
            ("tan", Unaire(f64::tan)),
            ("asin", Unaire(f64::asin)),
            ("acos", Unaire(f64::acos)),
            ("atan", Unaire(f64::atan)),
            ("sinh", Unaire(f64::sinh)),
            ("cosh", Unaire(f64::cosh)),
            ("tanh", Unaire(f64::tanh)),
            // constante
            ("pi", Constante(PI)),
        ])
    })
}

/// Priorité d’ordonnancement d’un symbole (plus grand = plus liant).
pub fn priorite(symbole: &str) -> Result<u8, ErreurCalcul> {
    table_priorites()
        .get(symbole)
        .copied()
        .ok_or_else(|| ErreurCalcul::symbole_inconnu(symbole))
}

/// Opération associée à un symbole.
pub fn operation(symbole: &str) -> Result<Operation, ErreurCalcul> {
    table_operations()
        .get(symbole)
        .copied()
        .ok_or_else(|| ErreurCalcul::symbole_inconnu(symbole))
}

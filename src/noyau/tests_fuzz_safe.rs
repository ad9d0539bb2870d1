//! Tests fuzz safe : robustesse + déterminisme + limites contrôlées.
//!
//! But : marteler le pipeline sans brûler la machine.
//! - RNG déterministe (seed fixe)
//! - profondeur bornée
//! - budget temps global
//! - invariant clé : relire la RPN produite redonne exactement la même valeur

use std::time::{Duration, Instant};

use super::eval::{calcule_rpn, eval_expression};
use super::reglages::Reglages;

/* ------------------------ RNG déterministe minimal ------------------------ */

#[derive(Clone)]
struct Rng {
    state: u64,
}
impl Rng {
    fn new(seed: u64) -> Self {
        Self { state: seed }
    }
    fn next_u32(&mut self) -> u32 {
        // LCG simple (déterministe)
        self.state = self.state.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.state >> 32) as u32
    }
    fn pick(&mut self, n: u32) -> u32 {
        if n == 0 {
            0
        } else {
            self.next_u32() % n
        }
    }
}

/* ------------------------ Budget anti-gel ------------------------ */

fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {:?}", max);
    }
}

/* ------------------------ Génération d’expressions (bornée) ------------------------ */

fn gen_nombre(rng: &mut Rng) -> String {
    let a = rng.pick(10);
    match rng.pick(3) {
        0 => format!("{a}.{}", rng.pick(100)),
        _ => format!("{a}"),
    }
}

fn gen_atom(rng: &mut Rng) -> String {
    match rng.pick(4) {
        0 => "pi".to_string(),
        _ => gen_nombre(rng),
    }
}

const FONCTIONS: &[&str] = &[
    "exp", "ln", "lg", "sqrt", "sin", "cos", "tan", "asin", "acos", "atan", "sinh", "cosh", "tanh",
];

const BINAIRES: &[&str] = &["+", "-", "*", "/", "^"];

fn gen_expr(rng: &mut Rng, depth: usize) -> String {
    if depth == 0 {
        return gen_atom(rng);
    }

    match rng.pick(7) {
        0 => gen_atom(rng),
        1 | 2 => {
            let op = BINAIRES[rng.pick(BINAIRES.len() as u32) as usize];
            format!(
                "{} {op} {}",
                gen_expr(rng, depth - 1),
                gen_expr(rng, depth - 1)
            )
        }
        3 => format!("({})", gen_expr(rng, depth - 1)),
        4 => format!("-{}", gen_expr(rng, depth - 1)),
        5 => {
            let f = FONCTIONS[rng.pick(FONCTIONS.len() as u32) as usize];
            format!("{f}({})", gen_expr(rng, depth - 1))
        }
        _ => format!(
            "log({}, {})",
            gen_expr(rng, depth - 1),
            gen_expr(rng, depth - 1)
        ),
    }
}

fn meme_valeur(a: f64, b: f64) -> bool {
    a.to_bits() == b.to_bits() || (a.is_nan() && b.is_nan())
}

/* ------------------------ Tests ------------------------ */

#[test]
fn fuzz_safe_determinisme_et_aller_retour() {
    let t0 = Instant::now();
    let max = Duration::from_millis(500);

    let reglages = Reglages::default();
    let mut rng = Rng::new(0xC0FFEE_u64);
    let mut rng_bis = Rng::new(0xC0FFEE_u64);

    for _ in 0..300 {
        budget(t0, max);

        let expr = gen_expr(&mut rng, 4);
        // Même seed => même expression
        assert_eq!(expr, gen_expr(&mut rng_bis, 4));

        // Bien formée par construction : aucune erreur attendue
        let (v, d) = eval_expression(&expr, &reglages)
            .unwrap_or_else(|e| panic!("erreur non attendue: expr={expr:?} err={e}"));

        let relu = calcule_rpn(&d.rpn, &reglages)
            .unwrap_or_else(|e| panic!("rpn illisible: {:?} (de {expr:?}) err={e}", d.rpn));

        assert!(
            meme_valeur(v, relu),
            "aller-retour: expr={expr:?} rpn={:?} {v} != {relu}",
            d.rpn
        );

        let (v2, _) = eval_expression(&expr, &reglages).unwrap();
        assert!(meme_valeur(v, v2), "non déterministe: expr={expr:?}");
    }
}

#[test]
fn fuzz_safe_pile_exactement_un_element() {
    let t0 = Instant::now();
    let max = Duration::from_millis(300);

    // Expressions bien formées : la règle stricte ne doit jamais se déclencher.
    let strict = Reglages::stricts();
    let mut rng = Rng::new(0xBADC0DE_u64);

    for _ in 0..200 {
        budget(t0, max);

        let expr = gen_expr(&mut rng, 3);
        if let Err(e) = eval_expression(&expr, &strict) {
            panic!("expr={expr:?} err={e}");
        }
    }
}

#[test]
fn fuzz_safe_entrees_abimees_sans_panique() {
    let t0 = Instant::now();
    let max = Duration::from_millis(300);

    let mut rng = Rng::new(0x5EED_u64);
    let alphabet: Vec<char> = "0123456789.+-*/^!(),pisqrtlogx $".chars().collect();

    for _ in 0..400 {
        budget(t0, max);

        let n = rng.pick(12) as usize;
        let expr: String = (0..n)
            .map(|_| alphabet[rng.pick(alphabet.len() as u32) as usize])
            .collect();

        // Ok ou Err, mais jamais de panique ; une erreur a toujours un message
        if let Err(e) = eval_expression(&expr, &Reglages::default()) {
            assert!(!e.to_string().is_empty(), "expr={expr:?}");
        }
    }
}

#[test]
fn fuzz_safe_somme_longue() {
    let t0 = Instant::now();
    let max = Duration::from_millis(300);

    // pas de récursion : une longue somme ne coûte que la taille des files
    let expr = vec!["0.5"; 2000].join(" + ");
    budget(t0, max);

    let (v, _) = eval_expression(&expr, &Reglages::stricts()).unwrap();
    assert_eq!(v, 1000.0);

    let imbrique = format!("{}1{}", "(".repeat(500), ")".repeat(500));
    let (v, _) = eval_expression(&imbrique, &Reglages::stricts()).unwrap();
    assert_eq!(v, 1.0);
}

// src/noyau/jetons.rs
//
// Tokenisation : découpe l’entrée en jetons sans jamais copier le texte.
// Un jeton est une vue (&str) sur l’entrée + sa nature lexicale.
// La valeur d’un nombre n’est lue qu’à l’évaluation.

use super::erreur::ErreurCalcul;

/// Texte interne du moins unaire (distinct de la soustraction "-").
pub const NEGATION: &str = "~";

/// Lettres autorisées dans un nom de fonction (exp, ln, lg, log, sqrt, sin, cos, tan, asin, …, pi).
const LETTRES_FONCTIONS: &[char] = &[
    'a', 'c', 'e', 'g', 'h', 'i', 'l', 'n', 'o', 'p', 'q', 'r', 's', 't', 'x',
];

const OPERATEURS: &[char] = &['+', '-', '*', '/', '^', '!'];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Nature {
    Nombre,
    Operateur,
    /// Mot alphabétique : fonction ou constante (pi). Validé plus tard par le registre.
    Mot,
    Ouvrante,
    Fermante,
    Virgule,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Jeton<'a> {
    pub texte: &'a str,
    pub nature: Nature,
}

impl<'a> Jeton<'a> {
    fn new(texte: &'a str, nature: Nature) -> Self {
        Self { texte, nature }
    }

    /// Reclasse un texte isolé (ex: morceau d’une RPN déjà écrite "3 4 ~ -").
    ///
    /// Un nombre commence par un chiffre (ou un point), ou est un "-" suivi d’autre chose.
    /// Un "-" seul reste donc l’opérateur de soustraction.
    pub fn depuis_texte(texte: &'a str) -> Self {
        let premier = texte.chars().next();
        let nature = match premier {
            Some(c) if c.is_ascii_digit() || c == '.' => Nature::Nombre,
            Some('-') if texte.len() > 1 => Nature::Nombre,
            _ => match texte {
                "(" => Nature::Ouvrante,
                ")" => Nature::Fermante,
                "," => Nature::Virgule,
                NEGATION => Nature::Operateur,
                t if t.len() == 1 && t.starts_with(OPERATEURS) => Nature::Operateur,
                _ => Nature::Mot,
            },
        };
        Self::new(texte, nature)
    }

    pub fn est_pi(&self) -> bool {
        self.nature == Nature::Mot && self.texte == "pi"
    }

    pub fn est_negation(&self) -> bool {
        self.texte == NEGATION
    }

    /// Jeton "préfixe" : il n’a pas encore d’opérande à gauche (moins unaire, fonction nommée).
    pub fn est_prefixe(&self) -> bool {
        self.est_negation() || (self.nature == Nature::Mot && !self.est_pi())
    }

    /// Vrai si, après ce jeton, l’expression est “liée” (un opérande vient d’être complété).
    /// Sert à distinguer le moins unaire de la soustraction.
    fn lie_apres(&self) -> bool {
        match self.nature {
            Nature::Nombre | Nature::Fermante => true,
            Nature::Mot => self.est_pi(),
            Nature::Operateur => self.texte == "!",
            Nature::Ouvrante | Nature::Virgule => false,
        }
    }
}

/* ------------------------ Classifieurs (sans état) ------------------------ */

/// Nombre : suite maximale de chiffres avec au plus un point décimal.
fn lit_nombre(s: &str) -> Option<&str> {
    let mut points = 0usize;
    let fin = s
        .char_indices()
        .find(|&(_, c)| {
            if c.is_ascii_digit() {
                false
            } else if c == '.' && points == 0 {
                points += 1;
                false
            } else {
                true
            }
        })
        .map_or(s.len(), |(i, _)| i);

    (fin > 0).then(|| &s[..fin])
}

fn lit_operateur(s: &str) -> Option<&str> {
    s.starts_with(OPERATEURS).then(|| &s[..1])
}

/// Nom de fonction : suite maximale de lettres autorisées (aucune liste de mots-clés ici).
fn lit_fonction(s: &str) -> Option<&str> {
    let fin = s
        .find(|c: char| !LETTRES_FONCTIONS.contains(&c))
        .unwrap_or(s.len());
    (fin > 0).then(|| &s[..fin])
}

/// Reconnaît le prochain jeton à partir de `s` (espaces déjà sautés).
/// `lie` : l’expression vient-elle de compléter un opérande ?
fn classe(s: &str, lie: bool) -> Option<Jeton<'_>> {
    if let Some(n) = lit_nombre(s) {
        return Some(Jeton::new(n, Nature::Nombre));
    }

    match s.as_bytes().first() {
        Some(b'(') => return Some(Jeton::new(&s[..1], Nature::Ouvrante)),
        Some(b')') => return Some(Jeton::new(&s[..1], Nature::Fermante)),
        Some(b',') => return Some(Jeton::new(&s[..1], Nature::Virgule)),
        // moins unaire
        Some(b'-') if !lie => return Some(Jeton::new(NEGATION, Nature::Operateur)),
        _ => {}
    }

    if let Some(op) = lit_operateur(s) {
        return Some(Jeton::new(op, Nature::Operateur));
    }

    lit_fonction(s).map(|f| Jeton::new(f, Nature::Mot))
}

/* ------------------------ Lexeur ------------------------ */

/// Itérateur de jetons sur une entrée. S’arrête après la première erreur.
pub struct Lexeur<'a> {
    reste: &'a str,
    lie: bool,
    // dernier jeton = nombre (pour refuser "1.2.3" lu comme 1.2 puis .3)
    apres_nombre: bool,
}

impl<'a> Lexeur<'a> {
    pub fn new(entree: &'a str) -> Self {
        Self {
            reste: entree,
            lie: false,
            apres_nombre: false,
        }
    }
}

impl<'a> Iterator for Lexeur<'a> {
    type Item = Result<Jeton<'a>, ErreurCalcul>;

    fn next(&mut self) -> Option<Self::Item> {
        let avant = self.reste.len();
        self.reste = self.reste.trim_start();
        if self.reste.is_empty() {
            return None;
        }
        let colle = self.reste.len() == avant;

        match classe(self.reste, self.lie) {
            // deux nombres sans séparateur : second point décimal
            Some(jeton) if jeton.nature == Nature::Nombre && self.apres_nombre && colle => {
                let reste = std::mem::take(&mut self.reste);
                Some(Err(ErreurCalcul::Lexicale {
                    reste: reste.to_string(),
                }))
            }
            Some(jeton) => {
                // le moins unaire "~" remplace un "-" d’un caractère
                let consomme = if jeton.est_negation() {
                    1
                } else {
                    jeton.texte.len()
                };
                self.reste = &self.reste[consomme..];
                self.lie = jeton.lie_apres();
                self.apres_nombre = jeton.nature == Nature::Nombre;
                Some(Ok(jeton))
            }
            None => {
                let reste = std::mem::take(&mut self.reste);
                Some(Err(ErreurCalcul::Lexicale {
                    reste: reste.to_string(),
                }))
            }
        }
    }
}

/// Tokenize une chaîne complète (utile pour la démarche et les tests).
pub fn tokenize(s: &str) -> Result<Vec<Jeton<'_>>, ErreurCalcul> {
    Lexeur::new(s).collect()
}

/// Format utilitaire (démarche) : liste de jetons en texte, séparés par des espaces.
pub fn format_jetons<'a, 'b: 'a>(jetons: impl IntoIterator<Item = &'a Jeton<'b>>) -> String {
    jetons
        .into_iter()
        .map(|j| j.texte)
        .collect::<Vec<_>>()
        .join(" ")
}

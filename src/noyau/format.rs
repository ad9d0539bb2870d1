// src/noyau/format.rs
//
// Affichage du résultat flottant : `chiffres` décimales au plus, zéros finaux retirés.
// NaN => "indéfini" ; ±inf => "∞" / "-∞".

pub fn formate_resultat(v: f64, chiffres: usize) -> String {
    if v.is_nan() {
        return "indéfini".to_string();
    }
    if v.is_infinite() {
        return if v > 0.0 { "∞" } else { "-∞" }.to_string();
    }

    let mut s = format!("{v:.chiffres$}");
    if s.contains('.') {
        let garde = s.trim_end_matches('0').trim_end_matches('.').len();
        s.truncate(garde);
    }

    // -0.0000001 arrondi à 6 chiffres => "-0"
    if s == "-0" {
        s.remove(0);
    }
    s
}

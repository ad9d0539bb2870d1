// src/app/vue.rs
//
// Vue egui de la calculatrice RPN.
//
// Deux modes de saisie (infixe / RPN), un pavé, les réglages du noyau et la démarche
// (jetons + RPN). Le calcul lui-même vit dans calculatrice_rpn::noyau.
// Enter et "=" évaluent ; DEL retire un motif complet ("sqrt(", "pi").

use eframe::egui;

use super::etat::{AppCalc, Demarche, Saisie};
use calculatrice_rpn::noyau::{self, reglages::CHIFFRES_MAX};

/// Motifs retirés d’un coup par Backspace (les plus longs d’abord : "asin(" avant "sin(").
const MOTIFS_EFFACEMENT: &[&str] = &[
    "sqrt(", "asin(", "acos(", "atan(", "sinh(", "cosh(", "tanh(", "sin(", "cos(", "tan(", "exp(",
    "log(", "ln(", "lg(", "pi",
];

impl AppCalc {
    /// Dessine toute la calculatrice (appelé par `update`).
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        // Densité “calc”
        ui.spacing_mut().item_spacing = egui::vec2(6.0, 6.0);

        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                ui.heading("Calculatrice RPN");
                ui.add_space(6.0);

                self.ui_entree(ui);

                ui.add_space(8.0);
                ui.separator();
                ui.add_space(8.0);

                self.ui_resultat(ui);

                ui.add_space(8.0);
                ui.separator();
                ui.add_space(8.0);

                self.ui_reglages(ui);
                self.ui_demarche(ui);
            });
    }

    fn ui_entree(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.label("Entrée :");
            ui.selectable_value(&mut self.saisie, Saisie::Infixe, "infixe");
            ui.selectable_value(&mut self.saisie, Saisie::Rpn, "RPN");
        });

        let hint = match self.saisie {
            Saisie::Infixe => "Ex: 3 + 4 * 2, sqrt(16), log(2,8), -pi/2",
            Saisie::Rpn => "Ex: 3 4 2 * +, 16 sqrt, 2 8 log",
        };

        // IMPORTANT : id stable + focus contrôlé
        let resp = ui.add(
            egui::TextEdit::singleline(&mut self.entree)
                .desired_width(ui.available_width())
                .hint_text(hint)
                .id_salt("entree_edit")
                .code_editor(),
        );

        // Si on a cliqué un bouton, on redonne le focus
        if self.focus_entree {
            resp.request_focus();
            self.focus_entree = false;
        }

        // --- Clavier : Enter évalue (seulement si le champ est focus) ---
        let enter = ui.input(|i| i.key_pressed(egui::Key::Enter));
        if resp.has_focus() && enter {
            self.eval_via_noyau();
        }

        ui.add_space(6.0);

        // Contrat: C = entrée seulement ; CLR = résultats seulement ; AC = tout
        ui.horizontal(|ui| {
            self.bouton_action(ui, "C", "Efface seulement l’entrée", Action::ClearEntree);
            self.bouton_action(
                ui,
                "CLR",
                "Efface résultat + erreur + démarche",
                Action::ClearResultats,
            );
            self.bouton_action(ui, "AC", "Remise à zéro totale", Action::ResetTotal);
            self.bouton_action(ui, "DEL", "Efface le dernier symbole", Action::Backspace);
        });

        ui.add_space(8.0);

        // Opérateurs + "="
        ui.horizontal_wrapped(|ui| {
            for s in ["(", ")", ",", "+", "-", "*", "/", "^", "!"] {
                self.bouton_insert(ui, s, s);
            }

            ui.add_space(10.0);

            let eq = ui.add_sized([64.0, 32.0], egui::Button::new("="));
            if eq.clicked() {
                self.eval_via_noyau();
            }
        });

        // Fonctions + constante
        ui.horizontal_wrapped(|ui| {
            self.bouton_insert(ui, "pi", "pi");
            for f in [
                "sqrt", "exp", "ln", "lg", "log", "sin", "cos", "tan", "asin", "acos", "atan",
                "sinh", "cosh", "tanh",
            ] {
                let insere = match self.saisie {
                    Saisie::Infixe => format!("{f}("),
                    Saisie::Rpn => f.to_string(),
                };
                self.bouton_insert(ui, f, &insere);
            }
        });

        ui.add_space(8.0);

        self.ui_pave_numerique(ui);
    }

    fn ui_pave_numerique(&mut self, ui: &mut egui::Ui) {
        egui::Grid::new("pave_numerique_rpn")
            .num_columns(3)
            .spacing([6.0, 6.0])
            .show(ui, |ui| {
                for ligne in [["7", "8", "9"], ["4", "5", "6"], ["1", "2", "3"]] {
                    for c in ligne {
                        self.bouton_insert(ui, c, c);
                    }
                    ui.end_row();
                }

                self.bouton_insert(ui, "0", "0");
                self.bouton_insert(ui, ".", ".");
                self.bouton_insert(ui, "esp", " ");
                ui.end_row();
            });
    }

    fn ui_resultat(&mut self, ui: &mut egui::Ui) {
        ui.label("Résultat :");
        Self::champ_monospace(ui, "resultat_out", &self.resultat, 1);

        if !self.erreur.is_empty() {
            ui.add_space(6.0);
            ui.colored_label(ui.visuals().error_fg_color, &self.erreur);
        }
    }

    fn ui_reglages(&mut self, ui: &mut egui::Ui) {
        egui::CollapsingHeader::new("Réglages")
            .default_open(false)
            .show(ui, |ui| {
                ui.checkbox(
                    &mut self.reglages.parentheses_strictes,
                    "Parenthèse ouvrante non fermée = erreur",
                );
                ui.checkbox(
                    &mut self.reglages.pile_stricte,
                    "La pile doit finir avec une seule valeur",
                );

                ui.horizontal(|ui| {
                    ui.label("Précision :");
                    let mut d = self.reglages.chiffres as u32;
                    let resp = ui.add(
                        egui::DragValue::new(&mut d)
                            .speed(1)
                            .range(0..=CHIFFRES_MAX as u32)
                            .suffix(" chiffres"),
                    );
                    if resp.changed() {
                        self.set_chiffres(d as usize);
                    }
                });
            });
    }

    fn ui_demarche(&mut self, ui: &mut egui::Ui) {
        egui::CollapsingHeader::new("Démarche")
            .default_open(true)
            .show(ui, |ui| {
                Self::champ_demarche(ui, "Jetons", "demarche_jetons", &self.demarche.jetons);
                Self::champ_demarche(ui, "RPN", "demarche_rpn", &self.demarche.rpn);
                Self::champ_demarche(ui, "Note", "demarche_note", &self.demarche.note);
            });
    }

    fn champ_demarche(ui: &mut egui::Ui, titre: &str, id: &str, contenu: &str) {
        ui.add_space(4.0);
        ui.label(format!("{titre} :"));
        Self::champ_monospace(ui, id, contenu, 1);
    }

    fn champ_monospace(ui: &mut egui::Ui, id: &str, contenu: &str, rows: usize) {
        // Affichage lecture seule “stable”, sans TextEdit interactif.
        egui::Frame::group(ui.style())
            .fill(ui.visuals().extreme_bg_color)
            .show(ui, |ui| {
                ui.push_id(id, |ui| {
                    ui.set_min_width(ui.available_width());
                    ui.set_min_height(
                        rows as f32 * ui.text_style_height(&egui::TextStyle::Monospace),
                    );
                    ui.monospace(contenu);
                });
            });
    }

    fn bouton_action(&mut self, ui: &mut egui::Ui, label: &str, tip: &str, action: Action) {
        let resp = ui
            .add_sized([56.0, 30.0], egui::Button::new(label))
            .on_hover_text(tip);

        if resp.clicked() {
            match action {
                Action::ClearEntree => self.clear_entree(),
                Action::ClearResultats => self.clear_resultats(),
                Action::ResetTotal => self.reset_total(),
                Action::Backspace => self.backspace_entree(),
            }
            self.focus_entree = true;
        }
    }

    fn bouton_insert(&mut self, ui: &mut egui::Ui, label: &str, to_insert: &str) {
        let resp = ui.add_sized([46.0, 28.0], egui::Button::new(label));
        if resp.clicked() {
            self.insere(to_insert);
        }
    }

    /// Insère un morceau dans l’entrée. En RPN, chaque jeton est séparé par un espace.
    pub(crate) fn insere(&mut self, morceau: &str) {
        if self.saisie == Saisie::Rpn {
            let colle_au_nombre = morceau
                .chars()
                .all(|c| c.is_ascii_digit() || c == '.');
            let apres_nombre = self
                .entree
                .chars()
                .last()
                .is_some_and(|c| c.is_ascii_digit() || c == '.');
            if !self.entree.is_empty() && !(colle_au_nombre && apres_nombre) {
                self.entree.push(' ');
            }
        }
        self.entree.push_str(morceau);
        self.focus_entree = true;
    }

    /// Backspace “intelligent” : retire d’un coup les motifs utiles ("sin(", "pi", etc.).
    pub(crate) fn backspace_entree(&mut self) {
        while self.entree.ends_with(' ') {
            self.entree.pop();
        }

        match MOTIFS_EFFACEMENT.iter().find(|m| self.entree.ends_with(*m)) {
            Some(m) => self.entree.truncate(self.entree.len() - m.len()),
            None => {
                self.entree.pop();
            }
        }

        while self.entree.ends_with(' ') {
            self.entree.pop();
        }
    }

    /// Évalue l’entrée via le noyau, puis dépose résultat/démarche dans l’état UI.
    pub(crate) fn eval_via_noyau(&mut self) {
        let s = self.entree.trim();

        let res = match self.saisie {
            Saisie::Infixe => noyau::eval_expression(s, &self.reglages).map(|(v, d)| {
                let d_ui = Demarche {
                    jetons: d.jetons,
                    rpn: d.rpn,
                    note: d.note,
                };
                (v, d_ui)
            }),
            Saisie::Rpn => noyau::calcule_rpn(s, &self.reglages).map(|v| {
                let d_ui = Demarche {
                    jetons: String::new(),
                    rpn: s.split_whitespace().collect::<Vec<_>>().join(" "),
                    note: "Saisie RPN : évaluée directement sur la pile.".into(),
                };
                (v, d_ui)
            }),
        };

        match res {
            Ok((v, d)) => {
                let texte = noyau::formate_resultat(v, self.reglages.chiffres);
                log::info!("{:?} = {texte}", self.entree.trim());
                self.set_resultat(&texte, d);
            }
            Err(e) => {
                log::warn!("{:?} : {e}", self.entree.trim());
                self.set_erreur(e.to_string());
            }
        }
        self.focus_entree = true;
    }
}

#[derive(Clone, Copy, Debug)]
enum Action {
    ClearEntree,
    ClearResultats,
    ResetTotal,
    Backspace,
}

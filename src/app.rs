// ============================================================================
// Structure : App
// ============================================================================
// Gère l'état global de l'application TUI
//
// CONCEPTS RUST :
// 1. State Management : centraliser l'état dans une seule structure
// 2. Composition : App contient le Coordinator (état du calcul)
// 3. Mutabilité contrôlée : &mut self pour modifier l'état
//
// PATTERN : "Application State"
// - Le rendu lit depuis App
// - Toutes les modifications passent par les méthodes de App
// - Les paramètres du calcul ne sont modifiés QUE par le Coordinator
// ============================================================================

use tracing::{debug, info};

use crate::config::Config;
use crate::coordinator::{BoundParam, Coordinator};
use crate::ui::display::TerminalDisplay;
use crate::ui::events::{
    get_char_from_event, is_backspace_event, is_delete_event, is_down_event, is_edit_event,
    is_enter_event, is_escape_event, is_left_event, is_quit_event, is_right_event,
    is_text_char_event, is_up_event, Event,
};

/// Écrans de l'application
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Screen {
    /// Vue principale : contrôles + résultats + graphique
    Calculator,

    /// Mode saisie : les touches sont envoyées au champ numérique focalisé
    /// CONCEPT : Modal input mode (Vim-like)
    /// - Chaque touche est un événement "input" du champ
    /// - Enter ou ESC quitte le mode
    EditField,
}

/// Contrôle ayant le focus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Principal,
    Rate,
    Years,
    Frequency,
}

impl Focus {
    /// Ordre d'affichage des contrôles
    pub fn all() -> [Focus; 4] {
        [Focus::Principal, Focus::Rate, Focus::Years, Focus::Frequency]
    }

    /// Contrôle suivant (cycle)
    pub fn next(&self) -> Focus {
        match self {
            Focus::Principal => Focus::Rate,
            Focus::Rate => Focus::Years,
            Focus::Years => Focus::Frequency,
            Focus::Frequency => Focus::Principal, // Boucle
        }
    }

    /// Contrôle précédent (cycle)
    pub fn previous(&self) -> Focus {
        match self {
            Focus::Principal => Focus::Frequency, // Boucle
            Focus::Rate => Focus::Principal,
            Focus::Years => Focus::Rate,
            Focus::Frequency => Focus::Years,
        }
    }

    /// Paire champ/slider correspondante (None pour le sélecteur de fréquence)
    pub fn bound_param(&self) -> Option<BoundParam> {
        match self {
            Focus::Principal => Some(BoundParam::Principal),
            Focus::Rate => Some(BoundParam::Rate),
            Focus::Years => Some(BoundParam::Years),
            Focus::Frequency => None,
        }
    }
}

/// État principal de l'application
pub struct App {
    /// Indique si l'application doit continuer à tourner
    pub running: bool,

    /// Écran actuellement affiché
    pub current_screen: Screen,

    /// Contrôle ayant le focus
    pub focus: Focus,

    /// Indique si l'utilisateur a demandé à quitter (attend confirmation)
    /// CONCEPT : Two-step quit pour éviter les sorties accidentelles
    /// - Première pression de 'q' : confirm_quit = true
    /// - Deuxième pression de 'q' : running = false (quit réel)
    /// - N'importe quelle autre touche : confirm_quit = false (annulation)
    pub confirm_quit: bool,

    /// Paramètres, contrôles liés et résultats affichés
    pub calculator: Coordinator<TerminalDisplay>,
}

impl App {
    /// Crée l'application à partir de la configuration
    ///
    /// Le Coordinator effectue le premier calcul dès sa création
    pub fn new(config: &Config) -> Self {
        Self {
            running: true,
            current_screen: Screen::Calculator,
            focus: Focus::Principal,
            confirm_quit: false,
            calculator: Coordinator::new(config, TerminalDisplay::new()),
        }
    }

    /// Quitte l'application
    pub fn quit(&mut self) {
        self.running = false;
    }

    /// Vérifie si l'application doit continuer
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Tick : appelé à chaque itération de la boucle
    ///
    /// Rien à faire : tout recalcul est déclenché par un événement
    pub fn tick(&mut self) {}

    // ========================================================================
    // Focus
    // ========================================================================

    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
    }

    pub fn focus_previous(&mut self) {
        self.focus = self.focus.previous();
    }

    /// Déplace le slider focalisé, ou change la fréquence
    ///
    /// CONCEPT : un cran de slider = un événement "input" du slider
    pub fn adjust(&mut self, steps: i32) {
        match self.focus.bound_param() {
            Some(param) => self.calculator.nudge_slider(param, steps),
            None if steps > 0 => self.calculator.next_frequency(),
            None => self.calculator.previous_frequency(),
        }
    }

    // ========================================================================
    // Quit Confirmation Management
    // ========================================================================

    pub fn request_quit(&mut self) {
        self.confirm_quit = true;
    }

    pub fn cancel_quit(&mut self) {
        self.confirm_quit = false;
    }

    pub fn is_awaiting_quit_confirmation(&self) -> bool {
        self.confirm_quit
    }

    // ========================================================================
    // Edit Mode Management
    // ========================================================================

    /// Entre en mode saisie sur le champ focalisé (sans effet sur la fréquence)
    pub fn start_edit(&mut self) {
        if self.focus.bound_param().is_some() {
            self.current_screen = Screen::EditField;
        }
    }

    /// Quitte le mode saisie (la valeur est déjà appliquée)
    pub fn finish_edit(&mut self) {
        self.current_screen = Screen::Calculator;
    }

    pub fn is_editing(&self) -> bool {
        self.current_screen == Screen::EditField
    }

    /// Texte actuel du champ en cours d'édition
    pub fn editing_text(&self) -> Option<&str> {
        if !self.is_editing() {
            return None;
        }
        let param = self.focus.bound_param()?;
        Some(self.calculator.control(param).field.text())
    }

    /// Ajoute un caractère au champ focalisé
    pub fn append_char(&mut self, c: char) {
        self.edit_field(|text| text.push(c));
    }

    /// Supprime le dernier caractère du champ focalisé
    pub fn backspace(&mut self) {
        self.edit_field(|text| {
            text.pop();
        });
    }

    /// Vide le champ focalisé (équivaut à saisir "")
    pub fn clear_field(&mut self) {
        self.edit_field(|text| text.clear());
    }

    /// Applique une modification au texte du champ puis le transmet au Coordinator
    ///
    /// CONCEPT RUST : Closure FnOnce(&mut String)
    /// - L'appelant décrit la modification, edit_field gère la propagation
    fn edit_field(&mut self, edit: impl FnOnce(&mut String)) {
        let Some(param) = self.focus.bound_param() else {
            return;
        };

        let mut text = self.calculator.control(param).field.text().to_string();
        edit(&mut text);
        self.calculator.on_field_input(param, &text);
    }

    // ========================================================================
    // Event dispatch
    // ========================================================================

    /// Traite un événement et met à jour l'état de l'application
    ///
    /// CONCEPT RUST : Pattern matching avec guards
    /// - Le mode saisie est prioritaire : 'q', 'h', 'l' y sont du texte
    pub fn handle_event(&mut self, event: Event) {
        match event {
            Event::Tick => {}

            // ========================================
            // Mode saisie
            // ========================================
            Event::Key(_) if self.is_editing() => {
                if is_enter_event(&event) || is_escape_event(&event) {
                    debug!("User finished editing");
                    self.finish_edit();
                } else if is_backspace_event(&event) {
                    self.backspace();
                } else if is_delete_event(&event) {
                    self.clear_field();
                } else if is_text_char_event(&event) {
                    if let Some(c) = get_char_from_event(&event) {
                        self.append_char(c);
                    }
                }
            }

            // ========================================
            // Vue calculateur
            // ========================================
            Event::Key(_) if is_quit_event(&event) => {
                if self.is_awaiting_quit_confirmation() {
                    info!("User confirmed quit");
                    self.quit();
                } else {
                    info!("User requested quit (awaiting confirmation)");
                    self.request_quit();
                }
            }

            Event::Key(_) if is_up_event(&event) => {
                self.cancel_quit();
                self.focus_previous();
                debug!(focus = ?self.focus, "User moved focus up");
            }

            Event::Key(_) if is_down_event(&event) => {
                self.cancel_quit();
                self.focus_next();
                debug!(focus = ?self.focus, "User moved focus down");
            }

            Event::Key(_) if is_left_event(&event) => {
                self.cancel_quit();
                self.adjust(-1);
            }

            Event::Key(_) if is_right_event(&event) => {
                self.cancel_quit();
                self.adjust(1);
            }

            Event::Key(_) if is_edit_event(&event) || is_enter_event(&event) => {
                self.cancel_quit();
                debug!(focus = ?self.focus, "User started editing");
                self.start_edit();
            }

            Event::Key(_) => {
                // Toute autre touche : annule la confirmation si active
                self.cancel_quit();
            }
        }
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new(&Config::default())
    }
}

// ============================================================================
// Tests unitaires
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Frequency;
    use crate::ui::events::tests::key;
    use crossterm::event::KeyCode;

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            app.handle_event(key(KeyCode::Char(c)));
        }
    }

    #[test]
    fn test_app_creation() {
        let app = App::default();
        assert!(app.is_running());
        assert_eq!(app.focus, Focus::Principal);
        assert_eq!(app.calculator.recompute_count(), 1);
        assert_eq!(app.calculator.sink().redraws, 1);
        assert_eq!(app.calculator.sink().final_value, "$16,288.95");
        assert_eq!(app.calculator.sink().total_interest, "$6,288.95");
    }

    #[test]
    fn test_two_step_quit() {
        let mut app = App::default();

        app.handle_event(key(KeyCode::Char('q')));
        assert!(app.is_running());
        assert!(app.is_awaiting_quit_confirmation());

        // Autre touche : annulation
        app.handle_event(key(KeyCode::Char('x')));
        assert!(!app.is_awaiting_quit_confirmation());

        app.handle_event(key(KeyCode::Char('q')));
        app.handle_event(key(KeyCode::Char('q')));
        assert!(!app.is_running());
    }

    #[test]
    fn test_focus_cycle() {
        let mut app = App::default();

        app.handle_event(key(KeyCode::Down));
        assert_eq!(app.focus, Focus::Rate);
        app.handle_event(key(KeyCode::Tab));
        app.handle_event(key(KeyCode::Tab));
        assert_eq!(app.focus, Focus::Frequency);
        app.handle_event(key(KeyCode::Down));
        assert_eq!(app.focus, Focus::Principal);
        app.handle_event(key(KeyCode::Up));
        assert_eq!(app.focus, Focus::Frequency);
    }

    #[test]
    fn test_edit_rate_field_live() {
        let mut app = App::default();
        app.handle_event(key(KeyCode::Down)); // Rate
        app.handle_event(key(KeyCode::Char('e')));
        assert!(app.is_editing());

        app.handle_event(key(KeyCode::Delete));
        assert_eq!(app.calculator.parameters().annual_rate_percent, 0.0);
        assert_eq!(app.editing_text(), Some(""));

        type_text(&mut app, "7");
        let rate = app.calculator.control(BoundParam::Rate);
        assert_eq!(rate.slider.value(), 7.0);
        assert_eq!(rate.label, "7%");
        assert_eq!(app.calculator.parameters().annual_rate_percent, 7.0);

        // création + Delete + '7'
        assert_eq!(app.calculator.recompute_count(), 3);

        app.handle_event(key(KeyCode::Enter));
        assert!(!app.is_editing());
        assert_eq!(app.editing_text(), None);
    }

    #[test]
    fn test_edit_mode_captures_letters() {
        let mut app = App::default();
        app.handle_event(key(KeyCode::Enter)); // Principal
        type_text(&mut app, "q");

        // 'q' est du texte en mode saisie : pas de demande de quit
        assert!(!app.is_awaiting_quit_confirmation());
        assert_eq!(app.editing_text(), Some("10000q"));
        assert_eq!(app.calculator.parameters().principal, 0.0);
        assert_eq!(app.calculator.sink().final_value, "$0.00");

        app.handle_event(key(KeyCode::Backspace));
        assert_eq!(app.calculator.parameters().principal, 10_000.0);

        app.handle_event(key(KeyCode::Esc));
        assert!(!app.is_editing());
    }

    #[test]
    fn test_arrows_move_slider() {
        let mut app = App::default();
        app.handle_event(key(KeyCode::Right));

        assert_eq!(app.calculator.parameters().principal, 10_100.0);
        assert_eq!(app.calculator.control(BoundParam::Principal).field.text(), "10100");

        app.handle_event(key(KeyCode::Left));
        app.handle_event(key(KeyCode::Left));
        assert_eq!(app.calculator.parameters().principal, 9_900.0);
    }

    #[test]
    fn test_frequency_selector_keys() {
        let mut app = App::default();
        app.focus = Focus::Frequency;

        app.handle_event(key(KeyCode::Right));
        assert_eq!(app.calculator.parameters().frequency, Frequency::SemiAnnually);
        app.handle_event(key(KeyCode::Left));
        app.handle_event(key(KeyCode::Left));
        assert_eq!(app.calculator.parameters().frequency, Frequency::Daily);

        // Pas de mode saisie sur le sélecteur
        app.handle_event(key(KeyCode::Char('e')));
        assert!(!app.is_editing());
    }

    #[test]
    fn test_tick_does_not_recompute() {
        let mut app = App::default();
        app.handle_event(Event::Tick);
        app.tick();
        assert_eq!(app.calculator.recompute_count(), 1);
    }
}

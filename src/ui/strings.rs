use crate::model::dilemma::Language;

/// Fixed interface chrome in both languages, resolved once per frame.
/// Dilemma content is localized separately, at catalog load.
pub struct UiStrings {
    pub title: &'static str,
    pub tagline: &'static str,
    pub new_game: &'static str,
    pub continue_game: &'static str,
    pub credits: &'static str,
    pub back: &'static str,
    pub continue_button: &'static str,
    pub correct_answer: &'static str,
    pub results_title: &'static str,
    pub correct_label: &'static str,
    pub incorrect_label: &'static str,
    pub play_again: &'static str,
    pub main_menu: &'static str,
    pub no_save_notice: &'static str,
    pub phase_label: &'static str,
    pub dilemma_label: &'static str,
    pub now_playing: &'static str,
    pub credits_body: &'static [&'static str],
}

pub fn for_language(language: Language) -> &'static UiStrings {
    match language {
        Language::Es => &ES,
        Language::En => &EN,
    }
}

static ES: UiStrings = UiStrings {
    title: "WELL OF POWER",
    tagline: "Cada decisión perfora más hondo",
    new_game: "Nueva partida",
    continue_game: "Continuar partida",
    credits: "Créditos",
    back: "Volver",
    continue_button: "Continuar",
    correct_answer: "¡Respuesta correcta!",
    results_title: "Resultados",
    correct_label: "Correctas",
    incorrect_label: "Incorrectas",
    play_again: "Jugar de nuevo",
    main_menu: "Menú principal",
    no_save_notice: "No hay partida guardada",
    phase_label: "Fase",
    dilemma_label: "Dilema",
    now_playing: "Sonando",
    credits_body: &[
        "Un juego narrativo sobre el precio de cada ascenso.",
        "Historia y dilemas: el equipo de Well of Power.",
        "Música: pistas incluidas en assets/sounds.",
        "Hecho con Rust y egui.",
    ],
};

static EN: UiStrings = UiStrings {
    title: "WELL OF POWER",
    tagline: "Every decision drills deeper",
    new_game: "New Game",
    continue_game: "Continue Game",
    credits: "Credits",
    back: "Back",
    continue_button: "Continue",
    correct_answer: "Correct answer!",
    results_title: "Your results",
    correct_label: "Correct",
    incorrect_label: "Incorrect",
    play_again: "Play again",
    main_menu: "Main menu",
    no_save_notice: "No saved game found",
    phase_label: "Phase",
    dilemma_label: "Dilemma",
    now_playing: "Now playing",
    credits_body: &[
        "A narrative game about the price of every promotion.",
        "Story and dilemmas: the Well of Power team.",
        "Music: tracks shipped under assets/sounds.",
        "Built with Rust and egui.",
    ],
};

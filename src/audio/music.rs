use rand::seq::SliceRandom;

use crate::model::dilemma::{DilemmaCatalog, DilemmaCategory};
use crate::model::game_state::{GameStateSnapshot, Screen};
use crate::model::phase::Phase;

const MENU_TRACKS: &[&str] = &["assets/sounds/game1.mp3", "assets/sounds/game2.mp3"];
const INTERN_TRACKS: &[&str] = &["assets/sounds/game3.mp3", "assets/sounds/game4.mp3"];
const JUNIOR_TRACKS: &[&str] = &["assets/sounds/game5.mp3", "assets/sounds/game6.mp3"];
const SUPERVISOR_TRACKS: &[&str] = &["assets/sounds/game7.mp3", "assets/sounds/game8.mp3"];
const MANAGER_TRACKS: &[&str] = &["assets/sounds/game9.mp3", "assets/sounds/game10.mp3"];
const MAGNATE_TRACKS: &[&str] = &[
    "assets/sounds/game11.mp3",
    "assets/sounds/game12.mp3",
    "assets/sounds/game13.mp3",
];

const CLICK_CUES: &[&str] = &["assets/sounds/click1.mp3", "assets/sounds/click2.mp3"];
const CORRECT_CUE: &str = "assets/sounds/correct.mp3";
const INCORRECT_CUE: &str = "assets/sounds/incorrect.mp3";

fn phase_tracks(phase: Phase) -> &'static [&'static str] {
    match phase {
        Phase::Intern => INTERN_TRACKS,
        Phase::Junior => JUNIOR_TRACKS,
        Phase::Supervisor => SUPERVISOR_TRACKS,
        Phase::Manager => MANAGER_TRACKS,
        Phase::Magnate => MAGNATE_TRACKS,
    }
}

/// A dilemma tagged with a theme gets its fixed track; everything else
/// falls back to the phase pool.
fn category_track(category: DilemmaCategory) -> &'static str {
    match category {
        DilemmaCategory::Safety => "assets/sounds/game3.mp3",
        DilemmaCategory::Technical => "assets/sounds/game5.mp3",
        DilemmaCategory::Management => "assets/sounds/game7.mp3",
        DilemmaCategory::Business => "assets/sounds/game9.mp3",
        DilemmaCategory::Crisis => "assets/sounds/game11.mp3",
    }
}

/// What should be sounding right now, keyed purely on the snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MusicContext {
    Menu,
    Dilemma(DilemmaCategory),
    Phase(Phase),
    Silence,
}

/// Selects looping background tracks keyed on the career phase (or the
/// current dilemma's authored category) plus one-shot cues. Playback
/// itself belongs to the embedding platform; this manager's output is
/// the chosen asset path. It reacts to snapshots and never calls into
/// the engine.
pub struct MusicManager {
    muted: bool,
    context: Option<MusicContext>,
    current_track: Option<&'static str>,
}

impl Default for MusicManager {
    fn default() -> Self {
        Self::new()
    }
}

impl MusicManager {
    pub fn new() -> Self {
        Self {
            muted: false,
            context: None,
            current_track: None,
        }
    }

    /// Reconcile with the latest snapshot. Returns the track that just
    /// started, if the context change started one.
    pub fn sync(
        &mut self,
        snapshot: &GameStateSnapshot,
        catalog: &DilemmaCatalog,
    ) -> Option<&'static str> {
        self.muted = snapshot.muted;

        let context = if self.muted {
            MusicContext::Silence
        } else {
            match snapshot.screen {
                Screen::Menu => MusicContext::Menu,
                Screen::Ended => MusicContext::Silence,
                Screen::Playing => {
                    let category = catalog
                        .get(snapshot.position)
                        .and_then(|dilemma| dilemma.category);
                    match (category, snapshot.phase) {
                        (Some(category), _) => MusicContext::Dilemma(category),
                        (None, Some(phase)) => MusicContext::Phase(phase),
                        (None, None) => MusicContext::Silence,
                    }
                }
            }
        };

        if self.context == Some(context) {
            return None;
        }
        self.context = Some(context);
        self.current_track = match context {
            MusicContext::Silence => None,
            MusicContext::Menu => pick(MENU_TRACKS),
            MusicContext::Dilemma(category) => Some(category_track(category)),
            MusicContext::Phase(phase) => pick(phase_tracks(phase)),
        };
        self.current_track
    }

    pub fn now_playing(&self) -> Option<&'static str> {
        self.current_track
    }

    /// Cue for a button press.
    pub fn click_cue(&self) -> Option<&'static str> {
        if self.muted {
            None
        } else {
            pick(CLICK_CUES)
        }
    }

    /// Correct and incorrect answers get distinct cues.
    pub fn answer_cue(&self, correct: bool) -> Option<&'static str> {
        if self.muted {
            return None;
        }
        Some(if correct { CORRECT_CUE } else { INCORRECT_CUE })
    }
}

fn pick(pool: &'static [&'static str]) -> Option<&'static str> {
    pool.choose(&mut rand::thread_rng()).copied()
}

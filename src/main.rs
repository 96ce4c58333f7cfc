//! Wukong Dodge entry point
//!
//! The native build has no window or camera backend, so it runs a headless
//! session: a scripted tracker sweeps a wrist across the camera while the
//! simulation plays through the menu, one game, and the game over screen.

use std::process::ExitCode;

use wukong_dodge::audio::NullAudio;
use wukong_dodge::platform::{ScriptedTracker, TrackedHandSource};
use wukong_dodge::session::{Control, SessionCommand, SessionController, SessionPhase};
use wukong_dodge::settings::Settings;
use wukong_dodge::ui::{self, InputEvent, MenuLayout};

/// Ticks the scripted hand spends in each zone
const SWEEP_HOLD_TICKS: usize = 45;

fn main() -> ExitCode {
    #[cfg(not(target_arch = "wasm32"))]
    env_logger::init();
    log::info!("Wukong Dodge (headless) starting...");

    let settings = Settings::load();
    log::info!(
        "Hand orientation: {}, seed: {:?}",
        settings.orientation.as_str(),
        settings.seed
    );

    let tuning = settings.tuning.clone();
    let menu = MenuLayout::new(tuning.screen_width, tuning.screen_height);
    let mut audio = settings.audio_manager(NullAudio);
    let tracker = ScriptedTracker::sweep(SWEEP_HOLD_TICKS);
    let mut hand = TrackedHandSource::from_settings(tracker, &settings);
    let mut session = SessionController::from_settings(&settings);

    // Click PLAY
    let play = menu.play.center();
    if let Some(command) = ui::command_for(session.phase(), InputEvent::Click(play), &menu) {
        session.handle(command);
    }

    let mut ticks = 0u64;
    while session.phase() == SessionPhase::Playing && ticks < settings.max_ticks {
        session.tick_with(&mut hand);
        audio.handle_all(&session.take_events());
        ticks += 1;
    }

    let snapshot = session.snapshot();
    for line in ui::hud_lines(&snapshot) {
        log::info!("{}", line);
    }
    match serde_json::to_string(&snapshot) {
        Ok(json) => log::debug!("Final frame: {}", json),
        Err(e) => log::warn!("Could not serialize final frame: {}", e),
    }

    if session.phase() == SessionPhase::Playing {
        log::info!("Tick limit reached after {} ticks", ticks);
    }
    println!("Final Score: {}", session.game().score);

    // Press Q on the game over screen, or close the window if still playing
    let exit = match session.phase() {
        SessionPhase::GameOver => SessionCommand::Quit,
        _ => SessionCommand::QuitSignal,
    };
    if session.handle(exit) == Control::Exit {
        log::info!("Goodbye");
    }
    ExitCode::SUCCESS
}

mod display;

use std::fs::File;
use std::io::{stdout, BufWriter, Write};
use std::sync::{mpsc, Arc};
use std::thread;
use std::time::Instant;

use anyhow::Context;
use clap::Parser;
use crossterm::{
    cursor,
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyboardEnhancementFlags,
        PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
    },
    terminal, ExecutableCommand,
};
use log::{info, LevelFilter};

use raycast_shooter::assets::ViewModelLoader;
use raycast_shooter::config::Settings;
use raycast_shooter::frame::{FrameClock, Game};
use raycast_shooter::input::{InputOutcome, InputState, SurfaceArea};
use raycast_shooter::sound::{BellSound, NullSound, SoundSink};

// ── Logging ───────────────────────────────────────────────────────────────────

/// The terminal is in raw mode on the alternate screen, so logs go to a file.
fn init_logging(settings: &Settings) -> anyhow::Result<()> {
    let path = settings.log_path();
    let file = File::create(&path)
        .with_context(|| format!("cannot create log file {}", path.display()))?;
    env_logger::Builder::new()
        .filter_level(LevelFilter::Info)
        .parse_default_env()
        .target(env_logger::Target::Pipe(Box::new(file)))
        .init();
    Ok(())
}

// ── Game loop ─────────────────────────────────────────────────────────────────

/// Runs until the player quits.
///
/// Input model: terminal events are drained into an `InputState` at the
/// top of every frame, then frozen into a single snapshot that the whole
/// step reads. Overlay buttons are applied before the step.
fn game_loop<W: Write>(
    out: &mut W,
    settings: &Settings,
    rx: &mpsc::Receiver<Event>,
) -> anyhow::Result<()> {
    let map = Arc::new(settings.load_map().context("failed to load map")?);
    let (width, height) = settings.surface_size();

    let sound: Box<dyn SoundSink> = if settings.bell {
        Box::new(BellSound::new(stdout()))
    } else {
        Box::new(NullSound)
    };
    let mut game = Game::new(map, width, height, settings.rng(), sound);

    let mut loader = match &settings.weapon_sprite {
        Some(path) => ViewModelLoader::spawn(path.clone(), width / 4),
        None => ViewModelLoader::none(),
    };

    let mut input = InputState::new(settings.mouse_sensitivity);
    let surface = SurfaceArea {
        cols: width as u16,
        rows: (height / 2) as u16,
    };
    let frame_budget = settings.frame_duration();
    let mut clock = FrameClock::new();
    let mut terminal_size = terminal::size()?;
    let mut frame: u64 = 0;

    info!("surface {}x{}, {} fps", width, height, settings.fps);

    loop {
        let frame_start = Instant::now();
        frame += 1;

        // ── Input ─────────────────────────────────────────────────────────────
        while let Ok(ev) = rx.try_recv() {
            if let Event::Resize(cols, rows) = ev {
                terminal_size = (cols, rows);
                out.execute(terminal::Clear(terminal::ClearType::All))?;
                continue;
            }
            if input.handle_event(&ev, frame, surface) == InputOutcome::Quit {
                info!("quit requested");
                return Ok(());
            }
        }

        game.apply_controls(&input.take_controls());
        let snapshot = input.snapshot(frame);
        let dt = clock.tick(frame_start);

        loader.poll(game.viewmodel_mut());
        game.frame(&snapshot, dt);

        display::present(
            out,
            game.framebuffer(),
            game.hud(),
            game.state().overlay,
            input.pointer_captured(),
            terminal_size,
        )?;

        let elapsed = frame_start.elapsed();
        if elapsed < frame_budget {
            thread::sleep(frame_budget - elapsed);
        }
    }
}

// ── Terminal setup ────────────────────────────────────────────────────────────

/// Alternate screen, hidden cursor, mouse capture and, where supported,
/// key-release reporting. Returns whether keyboard enhancement was pushed.
fn enter_screen<W: Write>(out: &mut W) -> std::io::Result<bool> {
    out.execute(terminal::EnterAlternateScreen)?;
    out.execute(cursor::Hide)?;
    out.execute(EnableMouseCapture)?;

    // Release events make held keys exact; without them the hold window
    // in `InputState` takes over.
    Ok(out
        .execute(PushKeyboardEnhancementFlags(
            KeyboardEnhancementFlags::REPORT_EVENT_TYPES,
        ))
        .is_ok())
}

/// Undo `enter_screen`. Safe to call after a partial setup; failures are
/// ignored so every step gets its chance.
fn leave_screen<W: Write>(out: &mut W, keyboard_enhanced: bool) {
    if keyboard_enhanced {
        let _ = out.execute(PopKeyboardEnhancementFlags);
    }
    let _ = out.execute(DisableMouseCapture);
    let _ = out.execute(cursor::Show);
    let _ = out.execute(terminal::LeaveAlternateScreen);
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> anyhow::Result<()> {
    let settings = Settings::parse();
    init_logging(&settings)?;
    info!("starting with {:?}", settings);

    let raw_out = stdout();
    let mut out = BufWriter::new(raw_out);

    terminal::enable_raw_mode()?;

    // Everything after raw mode runs before the restore below, error or not.
    let mut keyboard_enhanced = false;
    let result = enter_screen(&mut out)
        .map_err(anyhow::Error::from)
        .and_then(|enhanced| {
            keyboard_enhanced = enhanced;

            // Blocking reads happen here; the frame loop only ever polls the channel.
            let (tx, rx) = mpsc::channel::<Event>();
            thread::spawn(move || loop {
                match event::read() {
                    Ok(ev) => {
                        if tx.send(ev).is_err() {
                            break; // game loop is gone
                        }
                    }
                    Err(_) => break,
                }
            });

            game_loop(&mut out, &settings, &rx)
        });

    leave_screen(&mut out, keyboard_enhanced);
    let _ = terminal::disable_raw_mode();

    if let Err(err) = &result {
        log::error!("exiting with error: {:#}", err);
    }
    result
}

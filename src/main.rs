use std::io::{stdout, BufWriter, Write};
use std::sync::mpsc;
use std::thread;
use std::time::{Duration, Instant};

use crossterm::{
    cursor,
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
    },
    terminal, ExecutableCommand,
};
use rand::thread_rng;

use crossing_game::compute::{handle_input, init_state, select_cards, tick, update_card};
use crossing_game::display;
use crossing_game::entities::{Direction, GameState, Pointer, Skin};

const FRAME: Duration = Duration::from_millis(33); // ≈30 FPS

/// Decode a key into a semantic direction; every other key is ignored.
fn direction_for(code: KeyCode) -> Option<Direction> {
    match code {
        KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') => Some(Direction::Left),
        KeyCode::Up | KeyCode::Char('w') | KeyCode::Char('W') => Some(Direction::Up),
        KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') => Some(Direction::Right),
        KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('S') => Some(Direction::Down),
        _ => None,
    }
}

// ── Character-select screen ───────────────────────────────────────────────────

enum SelectResult {
    Start(Skin),
    Quit,
}

/// Runs until the player picks a skin (mouse click or 1-5) or quits.
///
/// Mouse events arrive in terminal cells; `display::pointer_px` maps them
/// back to canvas pixels before the cards are hit-tested.
fn select_screen<W: Write>(
    out: &mut W,
    rx: &mpsc::Receiver<Event>,
) -> std::io::Result<SelectResult> {
    let mut cards = select_cards();
    let mut pointer = Pointer::default();

    loop {
        let frame_start = Instant::now();

        // Drain all pending input events (non-blocking)
        while let Ok(ev) = rx.try_recv() {
            match ev {
                Event::Key(KeyEvent { code, kind, .. }) if kind == KeyEventKind::Press => {
                    match code {
                        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                            return Ok(SelectResult::Quit);
                        }
                        KeyCode::Char(c @ '1'..='5') => {
                            let idx = c as usize - '1' as usize;
                            return Ok(SelectResult::Start(Skin::ALL[idx]));
                        }
                        _ => {}
                    }
                }
                Event::Mouse(MouseEvent {
                    kind, column, row, ..
                }) => {
                    let (px, py) = display::pointer_px(column, row);
                    pointer.x = px;
                    pointer.y = py;
                    if kind == MouseEventKind::Down(MouseButton::Left) {
                        pointer.click = true;
                    }
                }
                _ => {}
            }
        }

        // Hit-test every card against the latest pointer sample
        let mut picked = None;
        let mut refreshed = Vec::with_capacity(cards.len());
        for card in &cards {
            let (card, choice) = update_card(card, &pointer);
            if let Some(skin) = choice {
                picked = Some(skin);
            }
            refreshed.push(card);
        }
        cards = refreshed;
        pointer.click = false; // a click only counts on the frame it arrived

        if let Some(skin) = picked {
            log::info!("character selected: {:?}", skin);
            return Ok(SelectResult::Start(skin));
        }

        display::render_select(out, &cards)?;

        let elapsed = frame_start.elapsed();
        if elapsed < FRAME {
            thread::sleep(FRAME - elapsed);
        }
    }
}

// ── Game loop ─────────────────────────────────────────────────────────────────

/// Returns `true` → quit program,  `false` → back to the select screen.
///
/// One key press is one tile step; repeat events are ignored so holding a
/// key does not glide the player across the grid.  The bounding-box
/// overlay flag is owned here and passed explicitly into every render call.
fn game_loop<W: Write>(
    out: &mut W,
    state: &mut GameState,
    rx: &mpsc::Receiver<Event>,
) -> std::io::Result<bool> {
    let mut rng = thread_rng();
    let mut debug = false;
    let mut last = Instant::now();

    loop {
        let frame_start = Instant::now();
        let delta = frame_start.duration_since(last).as_secs_f64();
        last = frame_start;

        // Drain all pending input events (non-blocking)
        while let Ok(ev) = rx.try_recv() {
            let Event::Key(KeyEvent {
                code,
                kind,
                modifiers,
                ..
            }) = ev
            else {
                continue;
            };
            if kind != KeyEventKind::Press {
                continue;
            }
            match code {
                KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                    return Ok(false);
                }
                KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => {
                    return Ok(true);
                }
                KeyCode::Char('b') | KeyCode::Char('B') => {
                    debug = !debug;
                }
                _ => {
                    if let Some(dir) = direction_for(code) {
                        state.player = handle_input(&state.player, dir);
                    }
                }
            }
        }

        *state = tick(state, delta, &mut rng);

        display::render(out, state, debug)?;

        let elapsed = frame_start.elapsed();
        if elapsed < FRAME {
            thread::sleep(FRAME - elapsed);
        }
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> std::io::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let raw_out = stdout();
    let mut out = BufWriter::new(raw_out);

    terminal::enable_raw_mode()?;
    out.execute(terminal::EnterAlternateScreen)?;
    out.execute(cursor::Hide)?;
    out.execute(EnableMouseCapture)?;

    // Dedicate a thread exclusively to blocking event reads, sending them
    // through a channel so the frame loop never has to block on I/O.
    let (tx, rx) = mpsc::channel::<Event>();
    thread::spawn(move || loop {
        match event::read() {
            Ok(ev) => {
                if tx.send(ev).is_err() {
                    break; // receiver dropped → program exiting
                }
            }
            Err(_) => break,
        }
    });

    let result = run(&mut out, &rx);

    // Always restore the terminal
    let _ = out.execute(DisableMouseCapture);
    let _ = out.execute(cursor::Show);
    let _ = out.execute(terminal::LeaveAlternateScreen);
    let _ = terminal::disable_raw_mode();

    result
}

fn run<W: Write>(out: &mut W, rx: &mpsc::Receiver<Event>) -> std::io::Result<()> {
    let mut rng = thread_rng();

    loop {
        match select_screen(out, rx)? {
            SelectResult::Quit => break,
            SelectResult::Start(skin) => {
                let mut state = init_state(skin, &mut rng);
                if game_loop(out, &mut state, rx)? {
                    break;
                }
                // Otherwise loop back to the select screen
            }
        }
    }
    Ok(())
}

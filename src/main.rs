//! Terminal Connect Four runner.
//!
//! Digits drop a coin for the human player; the engine answers with the AI's
//! move before returning. `--seed N` reproduces a session.

use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{anyhow, Result};
use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};

use tui_connect4::core::GameEngine;
use tui_connect4::term::{notification_lines, GameView, TerminalRenderer};
use tui_connect4::types::{Color, GameConfig};

/// Log entries retained between redraws.
const LOG_CAPACITY: usize = 64;

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let seed = parse_seed(&args)?.unwrap_or_else(clock_seed);

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, seed);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer, seed: u32) -> Result<()> {
    let mut engine = GameEngine::new(GameConfig::default(), seed);
    let view = GameView::default();
    let mut log: Vec<String> = vec!["Pick a column to drop your first coin".to_string()];

    loop {
        let lines = view.render(&engine, &log);
        term.draw(&lines)?;

        // Turn-based: block until the next key press.
        let Event::Key(key) = event::read()? else {
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }
        if should_quit(key.code, key.modifiers) {
            return Ok(());
        }

        if let Some(column) = column_for_key(key.code, engine.config().cols) {
            engine.play(Color::Human, column);
            for notification in engine.take_notifications() {
                log.extend(notification_lines(&notification));
            }
            if log.len() > LOG_CAPACITY {
                let drop = log.len() - LOG_CAPACITY;
                log.drain(..drop);
            }
        }
    }
}

fn should_quit(code: KeyCode, modifiers: KeyModifiers) -> bool {
    matches!(code, KeyCode::Char('q') | KeyCode::Esc)
        || (code == KeyCode::Char('c') && modifiers.contains(KeyModifiers::CONTROL))
}

/// Map a digit key to a column index, rejecting keys beyond the board width.
fn column_for_key(code: KeyCode, cols: usize) -> Option<usize> {
    let KeyCode::Char(ch) = code else {
        return None;
    };
    let column = ch.to_digit(10)? as usize;
    (column < cols).then_some(column)
}

fn parse_seed(args: &[String]) -> Result<Option<u32>> {
    let mut i = 0usize;
    let mut seed = None;
    while i < args.len() {
        match args[i].as_str() {
            "--seed" => {
                i += 1;
                let v = args
                    .get(i)
                    .ok_or_else(|| anyhow!("missing value for --seed"))?;
                seed = Some(
                    v.parse::<u32>()
                        .map_err(|_| anyhow!("invalid --seed value: {}", v))?,
                );
            }
            other => {
                return Err(anyhow!("unknown argument: {}", other));
            }
        }
        i += 1;
    }
    Ok(seed)
}

fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos())
        .unwrap_or(1)
}

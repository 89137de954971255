//! The `flashword play` command.

use std::io::{BufRead, Write};
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;

use flashword_core::{AnswerOutcome, Game, GameState, KeyValueStore};

use crate::terminal::TerminalCues;

pub fn execute(
    user: Option<String>,
    catalog_path: Option<PathBuf>,
    store: Option<PathBuf>,
    config_path: Option<PathBuf>,
) -> Result<()> {
    let (config, session) = super::open_session(config_path.as_deref(), store)?;
    let catalog = super::load_catalog(&config, catalog_path.as_deref())?;
    tracing::debug!(
        "playing catalog '{}' ({} words)",
        catalog.name(),
        catalog.len()
    );

    let cues = Arc::new(TerminalCues::new(config.speech_command.as_deref()));
    let mut game = Game::new(session, catalog)
        .with_scoring(config.scoring)
        .with_cues(cues);

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    run(
        &mut game,
        user.as_deref(),
        &mut stdin.lock(),
        &mut stdout.lock(),
    )
}

/// Drive a game from line-oriented input until `:quit` or end of input.
pub fn run<S: KeyValueStore>(
    game: &mut Game<S>,
    user: Option<&str>,
    input: &mut impl BufRead,
    out: &mut impl Write,
) -> Result<()> {
    let logged_in = match user {
        Some(name) => game.login(name)?.is_some(),
        None => game.resume()?,
    };
    if logged_in {
        print_feedback(game, out)?;
    } else if !prompt_login(game, input, out)? {
        return Ok(());
    }

    loop {
        render(game, out)?;
        let Some(line) = read_line(input)? else {
            writeln!(out)?;
            break;
        };

        match line.trim() {
            ":quit" | ":q" => break,
            ":logout" => {
                game.logout()?;
                writeln!(out, "Logged out.")?;
                if !prompt_login(game, input, out)? {
                    break;
                }
            }
            ":say" => {
                game.speak();
            }
            ":give-up" => {
                if game.give_up() {
                    if let Some(target) = game.revealed_target() {
                        writeln!(out, "The answer was: {target}")?;
                    }
                } else {
                    writeln!(out, "Nothing to give up on, press Enter for the next word.")?;
                }
            }
            ":next" => advance(game, out)?,
            answer => match game.state() {
                GameState::Solved { .. } if answer.is_empty() => advance(game, out)?,
                GameState::Solved { .. } => {
                    writeln!(out, "Press Enter or type :next for the next word.")?;
                }
                _ => {
                    if let Some(outcome) = game.check_answer(answer)? {
                        print_feedback(game, out)?;
                        if let AnswerOutcome::Incorrect { points } = outcome {
                            tracing::debug!("retrying word, {points} point(s) left");
                        }
                    }
                }
            },
        }
    }

    writeln!(out, "Bye!")?;
    Ok(())
}

/// Ask for a username until one is accepted. Returns `false` at end of input.
fn prompt_login<S: KeyValueStore>(
    game: &mut Game<S>,
    input: &mut impl BufRead,
    out: &mut impl Write,
) -> Result<bool> {
    loop {
        write!(out, "Username: ")?;
        out.flush()?;
        let Some(line) = read_line(input)? else {
            writeln!(out)?;
            return Ok(false);
        };
        if game.login(&line)?.is_some() {
            print_feedback(game, out)?;
            return Ok(true);
        }
    }
}

fn advance<S: KeyValueStore>(game: &mut Game<S>, out: &mut impl Write) -> Result<()> {
    if !game.advance()? {
        writeln!(out, "Answer or :give-up first.")?;
    }
    Ok(())
}

fn render<S: KeyValueStore>(game: &Game<S>, out: &mut impl Write) -> Result<()> {
    let points = game.points().unwrap_or(0);
    match game.state() {
        GameState::LoggedOut => {}
        GameState::Presenting { index } => {
            if let Some(word) = game.current_word() {
                writeln!(
                    out,
                    "\n[{}/{}] {}  ({})  points: {points}",
                    index + 1,
                    game.catalog().len(),
                    word.source,
                    word.category
                )?;
            }
            write!(out, "> ")?;
        }
        GameState::Solved { .. } => {
            write!(out, "(Enter for next) ")?;
        }
    }
    out.flush()?;
    Ok(())
}

fn print_feedback<S: KeyValueStore>(game: &Game<S>, out: &mut impl Write) -> Result<()> {
    if let Some(feedback) = game.feedback() {
        writeln!(out, "{feedback}")?;
    }
    Ok(())
}

fn read_line(input: &mut impl BufRead) -> Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
}

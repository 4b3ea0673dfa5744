use super::{Command, Renderer, WheelEvent};
use crate::wheel::{WheelView, MAX_TILES};

use indicatif::{ProgressBar, ProgressStyle};
use log::debug;
use std::io::{self, BufRead, Write};
use std::time::Duration;

/// Line-oriented terminal renderer.
///
/// Commands are read from stdin one line at a time; the spin delay is shown
/// with an indicatif spinner. This is a demo surface for the state machine,
/// not a styled UI.
pub struct TermRenderer {
    spinner: Option<ProgressBar>,
    should_quit: bool,
}

impl TermRenderer {
    pub fn new() -> Self {
        Self {
            spinner: None,
            should_quit: false,
        }
    }

    fn prompt(&self, view: &WheelView) -> String {
        let mut options = Vec::new();

        if view.can_spin {
            options.push("[s]pin");
        }
        if view.can_draw {
            options.push("[d]raw");
        }
        options.push("[q]uit");

        options.join(" / ")
    }
}

impl Default for TermRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl Renderer for TermRenderer {
    type Error = String;

    fn initialize(&mut self, category_names: &[String]) -> Result<(), Self::Error> {
        println!("Categories on the wheel: {}", category_names.join(", "));

        Ok(())
    }

    fn handle_event(&mut self, event: &WheelEvent) -> Result<(), Self::Error> {
        match event {
            WheelEvent::SpinStarted => {
                let spinner = ProgressBar::new_spinner();
                spinner.enable_steady_tick(Duration::from_millis(100));
                spinner.set_style(
                    ProgressStyle::default_spinner()
                        .template("{spinner:.green} {msg}")
                        .map_err(|e| e.to_string())?,
                );
                spinner.set_message("Spinning the wheel...");

                self.spinner = Some(spinner);
            }
            WheelEvent::SpinSettled => {
                if let Some(spinner) = self.spinner.take() {
                    spinner.finish_and_clear();
                }
            }
            WheelEvent::TileDrawn => {}
            WheelEvent::LimitReached => {
                println!("Tile limit reached, spin again for a new category.");
            }
        }

        Ok(())
    }

    fn update(&mut self, view: &WheelView) -> Result<(), Self::Error> {
        if view.spinning {
            return Ok(());
        }

        match &view.selected_category {
            Some(name) => println!(
                "Category: {} (pointer at {:.0}°)",
                name, view.pointer_angle
            ),
            None => println!("Category: — spin the wheel to pick one"),
        }

        if !view.drawn_tiles.is_empty() {
            println!(
                "Tiles ({}/{}): {}",
                view.drawn_tiles.len(),
                MAX_TILES,
                view.drawn_tiles.join(" | ")
            );
        }

        println!("Commands: {}", self.prompt(view));

        Ok(())
    }

    fn poll_command(&mut self) -> Option<Command> {
        print!("> ");
        io::stdout().flush().ok()?;

        let mut line = String::new();

        match io::stdin().lock().read_line(&mut line) {
            // EOF
            Ok(0) => {
                self.should_quit = true;
                Some(Command::Quit)
            }
            Ok(_) => match line.trim().to_lowercase().as_str() {
                "s" | "spin" => Some(Command::Spin),
                "d" | "draw" => Some(Command::Draw),
                "q" | "quit" | "exit" => {
                    self.should_quit = true;
                    Some(Command::Quit)
                }
                "" => None,
                other => {
                    debug!("unknown command {:?}", other);
                    println!("Unknown command: {}", other);
                    None
                }
            },
            Err(_) => {
                self.should_quit = true;
                Some(Command::Quit)
            }
        }
    }

    fn should_quit(&mut self) -> bool {
        self.should_quit
    }

    fn finalize(&mut self, view: &WheelView) -> Result<(), Self::Error> {
        if let Some(spinner) = self.spinner.take() {
            spinner.finish_and_clear();
        }

        if let Some(name) = &view.selected_category {
            println!(
                "Final: {} with {} tile(s): {}",
                name,
                view.drawn_tiles.len(),
                view.drawn_tiles.join(" | ")
            );
        }

        Ok(())
    }
}

use crate::cli::AppConfig;
use crate::render::term_renderer::TermRenderer;
use crate::render::{Command, Renderer, WheelEvent};
use crate::timer::SpinTimer;
use crate::wheel::Wheel;

use log::{debug, info};
use rand::rngs::OsRng;
use rand::Rng;

pub struct WheelApp {
    config: AppConfig,
}

impl WheelApp {
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        let seed = self.config.seed.unwrap_or_else(|| OsRng.gen());

        info!("Using seed: {}", seed);
        info!("{} categories on the wheel", self.config.table.len());

        let mut wheel = Wheel::new(self.config.table.clone(), seed);
        let mut renderer = TermRenderer::new();

        renderer.initialize(&wheel.table().names())?;

        loop {
            renderer.update(&wheel.view())?;

            if renderer.should_quit() {
                break;
            }

            let Some(command) = renderer.poll_command() else {
                continue;
            };

            match command {
                Command::Quit => break,
                Command::Spin => self.spin(&mut wheel, &mut renderer)?,
                Command::Draw => {
                    if wheel.draw_tile().is_some() {
                        renderer.handle_event(&WheelEvent::TileDrawn)?;

                        if !wheel.can_draw() {
                            renderer.handle_event(&WheelEvent::LimitReached)?;
                        }
                    } else {
                        debug!("draw command ignored, no category in play");
                    }
                }
            }
        }

        renderer.finalize(&wheel.view())?;

        info!("Session finished");
        Ok(())
    }

    /// Arm the wheel, wait out the delay, settle. Input is not polled while
    /// the spin is in flight, so the wait can block; dropping the timer on
    /// an early exit cancels the pending completion.
    fn spin(&self, wheel: &mut Wheel, renderer: &mut TermRenderer) -> Result<(), String> {
        if !wheel.spin() {
            debug!("spin command ignored, wheel is locked");
            return Ok(());
        }

        renderer.handle_event(&WheelEvent::SpinStarted)?;

        let timer = SpinTimer::start(self.config.spin_delay);
        timer.wait();

        wheel.finish_spin();
        renderer.handle_event(&WheelEvent::SpinSettled)?;

        Ok(())
    }
}

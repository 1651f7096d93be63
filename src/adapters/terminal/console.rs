//! ConsoleUi - runs the wizard over a line-oriented terminal.

use std::io::{self, BufRead, Write};

use thiserror::Error;
use tracing::debug;

use crate::application::WizardService;
use crate::domain::personality::Advance;
use crate::domain::session::{Screen, WizardError};

use super::render;

/// Errors that end a console run.
#[derive(Debug, Error)]
pub enum ConsoleError {
    #[error("Terminal I/O failed: {0}")]
    Io(#[from] io::Error),

    #[error("Wizard error: {0}")]
    Wizard(#[from] WizardError),
}

/// Whether the run loop keeps going after a screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

/// Terminal front end for one `WizardService`.
pub struct ConsoleUi<R, W> {
    service: WizardService,
    input: R,
    output: W,
    color: bool,
}

impl<R: BufRead, W: Write> ConsoleUi<R, W> {
    pub fn new(service: WizardService, input: R, output: W) -> Self {
        Self {
            service,
            input,
            output,
            color: false,
        }
    }

    /// Enables ANSI colors for the severity badge.
    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    pub fn service(&self) -> &WizardService {
        &self.service
    }

    /// Hands back the service and the writer, e.g. to inspect output.
    pub fn into_parts(self) -> (WizardService, W) {
        (self.service, self.output)
    }

    /// Runs screens until the user quits or input ends.
    pub async fn run(&mut self) -> Result<(), ConsoleError> {
        loop {
            let screen = self.service.screen();
            debug!(%screen, "Showing screen");

            let flow = match screen {
                Screen::Welcome => self.welcome()?,
                Screen::Symptoms => self.symptoms()?,
                Screen::Personality => self.personality()?,
                Screen::Diagnosis => self.diagnosis().await?,
            };

            if flow == Flow::Quit {
                render::goodbye(&mut self.output)?;
                return Ok(());
            }
        }
    }

    fn welcome(&mut self) -> Result<Flow, ConsoleError> {
        render::welcome(&mut self.output)?;
        match self.read_line()? {
            None => Ok(Flow::Quit),
            Some(line) if line.eq_ignore_ascii_case("q") => Ok(Flow::Quit),
            Some(_) => {
                self.service.start()?;
                Ok(Flow::Continue)
            }
        }
    }

    fn symptoms(&mut self) -> Result<Flow, ConsoleError> {
        render::symptoms_intro(&mut self.output)?;

        loop {
            write!(self.output, "> ")?;
            self.output.flush()?;
            let Some(line) = self.read_line()? else {
                return Ok(Flow::Quit);
            };

            let trimmed = line.trim();
            if !trimmed.starts_with('/') {
                if !trimmed.is_empty() {
                    if let Some(form) = self.service.symptom_form() {
                        let index = form.fill_next(line);
                        writeln!(self.output, "Symptom {} recorded.", index + 1)?;
                    }
                }
                continue;
            }

            let (command, arg) = trimmed
                .split_once(' ')
                .map_or((trimmed, ""), |(command, arg)| (command, arg.trim()));
            match command {
                "/done" => {
                    if self.service.submit_symptoms()? {
                        return Ok(Flow::Continue);
                    }
                    writeln!(
                        self.output,
                        "Please enter at least one symptom before beginning the assessment."
                    )?;
                }
                "/list" => self.show_fields()?,
                "/remove" => self.remove_field(arg)?,
                "/info" => {
                    if let Some(form) = self.service.symptom_form() {
                        form.set_additional_info(arg);
                    }
                    writeln!(self.output, "Additional information noted.")?;
                }
                _ => writeln!(self.output, "Unknown command: {}", command)?,
            }
        }
    }

    fn remove_field(&mut self, arg: &str) -> Result<(), ConsoleError> {
        match arg.parse::<usize>() {
            Ok(n) if n >= 1 => {
                if let Some(form) = self.service.symptom_form() {
                    form.remove_field(n - 1);
                }
                self.show_fields()
            }
            _ => {
                writeln!(self.output, "Usage: /remove N")?;
                Ok(())
            }
        }
    }

    fn show_fields(&mut self) -> Result<(), ConsoleError> {
        render::symptom_fields(&mut self.output, self.service.wizard().collector())?;
        Ok(())
    }

    fn personality(&mut self) -> Result<Flow, ConsoleError> {
        loop {
            render::question(&mut self.output, self.service.wizard().scorer())?;
            let Some(line) = self.read_line()? else {
                return Ok(Flow::Quit);
            };

            let choice = match line.trim().parse::<usize>() {
                Ok(n) if n >= 1 => n - 1,
                _ => {
                    writeln!(self.output, "Pick one of the numbered answers.")?;
                    continue;
                }
            };

            match self.service.answer(choice) {
                Ok(Advance::Complete(_)) => return Ok(Flow::Continue),
                Ok(_) => {}
                Err(WizardError::Validation(e)) => {
                    writeln!(self.output, "{}", e)?;
                }
                Err(e) => return Err(e.into()),
            }
        }
    }

    async fn diagnosis(&mut self) -> Result<Flow, ConsoleError> {
        render::analyzing(&mut self.output)?;
        let diagnosis = self.service.reveal_diagnosis().await?;
        render::diagnosis(
            &mut self.output,
            &diagnosis,
            self.service.session().symptoms(),
            self.color,
        )?;

        match self.read_line()? {
            Some(line) if matches!(line.to_ascii_lowercase().as_str(), "y" | "yes") => {
                self.service.restart()?;
                writeln!(self.output)?;
                Ok(Flow::Continue)
            }
            _ => Ok(Flow::Quit),
        }
    }

    /// Next input line without its line ending; `None` at end of input.
    fn read_line(&mut self) -> Result<Option<String>, ConsoleError> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            debug!("Input closed");
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(&['\n', '\r'][..]).to_string()))
    }
}

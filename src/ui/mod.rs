//! Terminal front end
//!
//! Line-oriented input: plain text adds a choice, `:`-prefixed words are commands.
//! The front end owns the tick loop; the session itself never sleeps or reads input.

use std::io::{self, BufRead, Write};
use std::time::Duration;

use crate::WheelError;
use crate::renderer::{Canvas, WheelView};
use crate::settings::Settings;
use crate::sim::{OptionList, Session, WheelEvent, Winner, text_tone_for};

/// Clear the screen and home the cursor
const CLEAR_SCREEN: &str = "\x1b[H\x1b[2J";

pub const HELP: &str = "\
Type a choice and press Enter to add it to the wheel.
  :spin   spin the wheel
  :clear  remove all choices
  :list   show the choices
  :help   show this help
  :quit   exit";

/// A parsed line of user input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Add(String),
    Spin,
    Clear,
    List,
    Help,
    Quit,
    /// Blank line
    Nothing,
    Unknown(String),
}

impl Command {
    pub fn parse(line: &str) -> Self {
        let line = line.trim();
        if line.is_empty() {
            return Command::Nothing;
        }
        let Some(word) = line.strip_prefix(':') else {
            return Command::Add(line.to_string());
        };
        match word.trim().to_lowercase().as_str() {
            "spin" | "s" => Command::Spin,
            "clear" | "c" => Command::Clear,
            "list" | "l" => Command::List,
            "help" | "h" | "?" => Command::Help,
            "quit" | "q" | "exit" => Command::Quit,
            other => Command::Unknown(other.to_string()),
        }
    }
}

/// One-line summary of the current choices
pub fn choices_summary(options: &OptionList) -> String {
    if options.is_empty() {
        "Choices: None added yet".to_string()
    } else {
        let labels: Vec<&str> = options.iter().collect();
        format!("Choices: {}", labels.join(", "))
    }
}

/// Result card drawn on the winner's own color
pub fn winner_banner(winner: &Winner) -> Canvas {
    let title = "*** WINNER! ***";
    let width = title.chars().count().max(winner.label.chars().count()) + 8;
    let mut canvas = Canvas::filled(width, 5, winner.color);
    let fg = Some(text_tone_for(winner.color).color());
    let center = width as f64 / 2.0;
    canvas.put_centered(center, 1, title, fg);
    canvas.put_centered(center, 3, &winner.label, fg);
    canvas
}

/// Interactive session over any line reader and writer
pub struct Frontend<R, W> {
    session: Session,
    settings: Settings,
    view: WheelView,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Frontend<R, W> {
    pub fn new(session: Session, settings: Settings, input: R, output: W) -> Self {
        let view = WheelView::new(settings.wheel_radius);
        Self {
            session,
            settings,
            view,
            input,
            output,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Process input until `:quit` or end of input
    pub fn run(&mut self) -> io::Result<()> {
        writeln!(self.output, "Wheel of Choices")?;
        writeln!(self.output, "{HELP}")?;
        self.draw()?;

        while let Some(line) = self.read_line()? {
            let command = Command::parse(&line);
            if command == Command::Quit {
                break;
            }
            self.handle(command)?;
        }

        self.output.flush()
    }

    /// Run a single command
    pub fn handle(&mut self, command: Command) -> io::Result<()> {
        match command {
            Command::Add(label) => {
                let result = self.session.add_option(&label).map(|_| ());
                self.report(result)?;
            }
            Command::Clear => {
                if self.confirm_clear()? {
                    let result = self.session.clear_options();
                    self.report(result)?;
                }
            }
            Command::Spin => self.spin()?,
            Command::List => {
                writeln!(self.output, "{}", choices_summary(self.session.options()))?;
            }
            Command::Help => writeln!(self.output, "{HELP}")?,
            Command::Unknown(word) => {
                writeln!(self.output, "Unknown command :{word} (try :help)")?;
            }
            Command::Nothing | Command::Quit => {}
        }
        self.handle_events()
    }

    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line))
    }

    fn report(&mut self, result: Result<(), WheelError>) -> io::Result<()> {
        match result {
            Ok(()) => Ok(()),
            Err(e) if e.is_user_facing() => {
                log::warn!("{e}");
                writeln!(self.output, "Warning: {e}")
            }
            Err(e) => {
                log::debug!("Ignored command: {e}");
                Ok(())
            }
        }
    }

    fn confirm_clear(&mut self) -> io::Result<bool> {
        if !self.settings.confirm_clear || self.session.options().is_empty() {
            return Ok(true);
        }
        write!(
            self.output,
            "Are you sure you want to clear all choices? [y/N] "
        )?;
        self.output.flush()?;
        let answer = self.read_line()?.unwrap_or_default();
        Ok(matches!(
            answer.trim().to_lowercase().as_str(),
            "y" | "yes"
        ))
    }

    /// Spin and tick until the wheel rests
    fn spin(&mut self) -> io::Result<()> {
        let started = self.session.start_spin().map(|_| ());
        if started.is_err() {
            return self.report(started);
        }

        let interval = Duration::from_millis(self.settings.frame_interval_ms);
        while self.session.is_spinning() {
            self.session.tick();
            if self.settings.animate && self.session.is_spinning() {
                write!(self.output, "{CLEAR_SCREEN}")?;
                self.write_frame()?;
                self.output.flush()?;
                if !interval.is_zero() {
                    std::thread::sleep(interval);
                }
            }
        }
        Ok(())
    }

    /// React to session notifications
    fn handle_events(&mut self) -> io::Result<()> {
        let events = self.session.drain_events();
        if events.is_empty() {
            return Ok(());
        }

        if self.settings.animate {
            write!(self.output, "{CLEAR_SCREEN}")?;
        }
        self.draw()?;
        for event in events {
            if let WheelEvent::SpinCompleted(winner) = event {
                self.write_canvas(&winner_banner(&winner))?;
            }
        }
        self.output.flush()
    }

    fn draw(&mut self) -> io::Result<()> {
        self.write_frame()?;
        writeln!(self.output, "{}", choices_summary(self.session.options()))
    }

    fn write_frame(&mut self) -> io::Result<()> {
        let canvas = self.view.render(&self.session, self.settings.color);
        self.write_canvas(&canvas)
    }

    fn write_canvas(&mut self, canvas: &Canvas) -> io::Result<()> {
        let text = if self.settings.color {
            canvas.to_ansi()
        } else {
            canvas.to_plain()
        };
        self.output.write_all(text.as_bytes())
    }
}

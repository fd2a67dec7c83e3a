//! Application - Wiring and Interactive Loop
//!
//! Builds the collaborators for the configured store, then reads operator
//! commands line by line. Each command runs to completion before the next one
//! is read.

use crate::app::cli::Cli;
use crate::app::command::Command;
use crate::app::settings::{AppSettings, StoreTarget};
use crate::error::Result;
use crate::eventing::UIEvent;
use crate::features::camera::CameraConfigController;
use crate::i18n::Locale;
use crate::services::{ChannelNotifier, FileStore, HttpStore, PersistWorker};
use crate::state::{EditorEvent, EventOutcome};
use crate::views::render_text;
use crossbeam_channel::Receiver;
use rust_i18n::t;
use std::io::{self, BufRead, Write};
use tracing::{debug, info};

/// Run the editor on stdin/stdout
pub fn run_app(cli: Cli) -> Result<()> {
    let settings = AppSettings::try_load()?.merge_cli(&cli);
    let locale = settings.locale();
    let target = settings.store_target()?;
    info!(destination = ?target, locale = locale.code(), "Starting camera editor");

    let mut session = Session::connect(target, locale)?;
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    session.run(stdin.lock(), &mut stdout)?;
    session.finish(&mut stdout)
}

/// One editing session: the controller plus the UI event stream it feeds
pub struct Session {
    controller: CameraConfigController,
    events: Receiver<UIEvent>,
    locale: Locale,
}

impl Session {
    /// Wrap an existing controller. `events` receives toasts and persistence results.
    pub fn new(controller: CameraConfigController, events: Receiver<UIEvent>, locale: Locale) -> Self {
        Self {
            controller,
            events,
            locale,
        }
    }

    /// Build the collaborators for `target`
    pub fn connect(target: StoreTarget, locale: Locale) -> Result<Self> {
        let (events_tx, events_rx) = crossbeam_channel::unbounded();
        let notifier = ChannelNotifier::new(events_tx.clone());

        let controller = match target {
            StoreTarget::Remote(url) => {
                let store = HttpStore::new(&url)?;
                let worker = PersistWorker::spawn(store.clone(), store.endpoint(), events_tx)?;
                CameraConfigController::new(store, worker, notifier)
            }
            StoreTarget::File(path) => {
                let store = FileStore::new(path);
                let label = store.path().display().to_string();
                let worker = PersistWorker::spawn(store.clone(), label, events_tx)?;
                CameraConfigController::new(store, worker, notifier)
            }
        };

        Ok(Self::new(controller, events_rx, locale))
    }

    /// Load the record, then process commands until `quit` or end of input
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, out: &mut W) -> Result<()> {
        self.controller.reload(self.locale);
        self.show(out)?;
        self.drain_events(out)?;

        for line in input.lines() {
            let line = line?;
            let keep_going = match line.parse::<Command>() {
                Ok(command) => self.execute(command, out)?,
                Err(e) => {
                    debug!(error = %e, input = %line, "Rejected command");
                    let message = t!("cli.unknown_command", locale = self.locale.code(), input = line.trim());
                    writeln!(out, "{message}")?;
                    true
                }
            };
            self.drain_events(out)?;
            if !keep_going {
                break;
            }
        }
        Ok(())
    }

    /// Shut down collaborators and print the last persistence results
    pub fn finish<W: Write>(self, out: &mut W) -> Result<()> {
        let Self {
            controller,
            events,
            locale,
        } = self;
        // Dropping the controller joins the persist worker after it drained
        drop(controller);
        write_events(events.try_iter(), locale, out)
    }

    fn execute<W: Write>(&mut self, command: Command, out: &mut W) -> Result<bool> {
        let event = match command {
            Command::Show => return self.show(out).map(|()| true),
            Command::Help => {
                write!(out, "{}", t!("cli.help", locale = self.locale.code()))?;
                return Ok(true);
            }
            Command::Quit => return Ok(false),
            Command::Reload => {
                if self.controller.reload(self.locale) {
                    writeln!(out, "{}", t!("camera.reloaded", locale = self.locale.code()))?;
                }
                return self.show(out).map(|()| true);
            }
            Command::Set { field, value } => EditorEvent::Text { field, value },
            Command::Toggle { field, checked } => {
                let checked = checked.unwrap_or_else(|| {
                    self.controller
                        .state()
                        .editor()
                        .is_some_and(|editor| !editor.buffer().flag(field))
                });
                EditorEvent::Toggle { field, checked }
            }
            Command::Commit => EditorEvent::Commit,
        };

        match self.controller.handle(event) {
            EventOutcome::Committed(_) => {
                // Report the storage outcome together with this command
                self.controller.flush();
                self.show(out)?
            }
            EventOutcome::Ignored | EventOutcome::Edited => self.show(out)?,
            // The notifier already produced a toast
            EventOutcome::Rejected(_) => {}
        }
        Ok(true)
    }

    fn show<W: Write>(&self, out: &mut W) -> Result<()> {
        let view = self.controller.view(self.locale);
        write!(out, "{}", render_text(&view, self.locale))?;
        Ok(())
    }

    fn drain_events<W: Write>(&self, out: &mut W) -> Result<()> {
        write_events(self.events.try_iter(), self.locale, out)
    }
}

fn write_events<W: Write>(
    events: impl Iterator<Item = UIEvent>,
    locale: Locale,
    out: &mut W,
) -> Result<()> {
    let code = locale.code();
    for event in events {
        match event {
            UIEvent::Toast {
                message,
                is_error: true,
            } => writeln!(out, "! {message}")?,
            UIEvent::Toast { message, .. } => writeln!(out, "{message}")?,
            UIEvent::PersistSucceeded { target } => {
                writeln!(out, "{}", t!("camera.saved", locale = code, target = target))?
            }
            UIEvent::PersistFailed { target, message } => writeln!(
                out,
                "! {}",
                t!("camera.save_failed", locale = code, target = target, message = message)
            )?,
        }
    }
    Ok(())
}

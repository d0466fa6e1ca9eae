//! The interactive shell: one controller, one event loop.
//!
//! All interaction state is owned here and mutated only between awaits, so
//! every handler runs to completion before the next event is looked at.

use std::time::Instant;

use crossterm::event::EventStream;
use futures::StreamExt;
use log::{debug, info};

use staffgrid_core::controller::{GridController, GridEvent};
use staffgrid_core::model::Office;

use crate::error::ShellError;
use crate::events::{DoubleClickDetector, ShellEvent, ShellKey, convert_event};
use crate::layout::{FormField, Hit, ScreenLayout};
use crate::render;
use crate::terminal::TerminalGuard;

pub struct Shell {
    controller: GridController,
    focus: FormField,
    clicks: DoubleClickDetector<(usize, usize)>,
    layout: ScreenLayout,
}

impl Shell {
    pub fn new(controller: GridController) -> Self {
        Self {
            controller,
            focus: FormField::Name,
            clicks: DoubleClickDetector::new(),
            layout: ScreenLayout::default(),
        }
    }

    pub async fn run(mut self) -> Result<(), ShellError> {
        let mut guard = TerminalGuard::new()?;
        let mut events = EventStream::new();
        info!("shell started with {} rows", self.controller.row_count());

        loop {
            self.draw(&mut guard)?;

            // The only timer in the system: the earliest banner expiry.
            let deadline = self.controller.notices().next_deadline();
            tokio::select! {
                maybe_event = events.next() => {
                    match maybe_event {
                        Some(Ok(event)) => {
                            if let Some(event) = convert_event(event)
                                && self.on_event(event)
                            {
                                break;
                            }
                        }
                        Some(Err(err)) => return Err(ShellError::Io(err)),
                        None => break,
                    }
                }
                _ = sleep_until_deadline(deadline) => {
                    let removed = self.controller.notices_mut().sweep(Instant::now());
                    debug!("swept {removed} expired notices");
                }
            }
        }

        info!("shell exiting");
        Ok(())
    }

    fn draw(&mut self, guard: &mut TerminalGuard) -> Result<(), ShellError> {
        let controller = &self.controller;
        let focus = self.focus;
        let mut layout = ScreenLayout::default();
        guard.terminal().draw(|frame| {
            layout = ScreenLayout::compute(
                frame.area(),
                controller.row_count(),
                controller.notices().len(),
            );
            render::draw(frame, controller, focus, &layout);
        })?;
        // Keep the geometry the user is actually looking at for hit-testing.
        self.layout = layout;
        Ok(())
    }

    /// Returns true when the shell should exit.
    fn on_event(&mut self, event: ShellEvent) -> bool {
        match event {
            ShellEvent::Key(key) => return self.on_key(key),
            ShellEvent::Click { x, y } => self.on_click(x, y),
            ShellEvent::Resize => {}
        }
        false
    }

    fn on_key(&mut self, key: ShellKey) -> bool {
        if key == ShellKey::Quit {
            return true;
        }

        // An open edit session captures the keyboard.
        if self.controller.editor().is_editing() {
            match key {
                ShellKey::Char(c) => self.controller.handle(GridEvent::EditInput(c)),
                ShellKey::Backspace => self.controller.handle(GridEvent::EditBackspace),
                ShellKey::Enter => self.controller.handle(GridEvent::EditEnter),
                _ => {}
            }
            return false;
        }

        match key {
            ShellKey::Tab => self.focus = self.focus.next(),
            ShellKey::BackTab => self.focus = self.focus.prev(),
            ShellKey::Enter => self.controller.handle(GridEvent::Submit),
            ShellKey::Up if self.focus == FormField::Office => self.cycle_office(-1),
            ShellKey::Down if self.focus == FormField::Office => self.cycle_office(1),
            ShellKey::Char(c) => self.type_into_field(c),
            ShellKey::Backspace => self.backspace_field(),
            _ => {}
        }
        false
    }

    fn on_click(&mut self, x: u16, y: u16) {
        let hit = self.layout.hit(x, y);

        // A click anywhere else closes an open edit session first, the way
        // focus leaves a control before the click lands.
        if let Some(session) = self.controller.editor().session() {
            let inside = matches!(
                hit,
                Some(Hit::Cell { row, column }) if session.row == row && session.column == column
            );
            if !inside {
                self.controller.handle(GridEvent::EditBlur);
            }
        }

        match hit {
            Some(Hit::Header { column }) => {
                self.controller.handle(GridEvent::HeaderClick { column });
            }
            Some(Hit::Cell { row, column }) => {
                self.controller.handle(GridEvent::RowClick { row });
                if self.clicks.observe((row, column), Instant::now()) {
                    self.controller
                        .handle(GridEvent::CellDoubleClick { row, column });
                }
            }
            Some(Hit::Field(field)) => self.focus = field,
            Some(Hit::SaveButton) => self.controller.handle(GridEvent::Submit),
            None => {}
        }
    }

    /// Step the office select through its options.
    fn cycle_office(&mut self, step: i32) {
        let current = Office::parse(&self.controller.draft().office).unwrap_or(Office::Tokyo);
        let index = Office::ALL.iter().position(|o| *o == current).unwrap_or(0);
        let len = Office::ALL.len() as i32;
        let next = (index as i32 + step).rem_euclid(len) as usize;
        self.controller.draft_mut().office = Office::ALL[next].label().to_string();
    }

    fn type_into_field(&mut self, c: char) {
        let focus = self.focus;
        let draft = self.controller.draft_mut();
        match focus {
            FormField::Name => draft.name.push(c),
            FormField::Position => draft.position.push(c),
            FormField::Age => draft.age.push(c),
            FormField::Salary => draft.salary.push(c),
            // The select is not a typing surface.
            FormField::Office => {}
        }
    }

    fn backspace_field(&mut self) {
        let focus = self.focus;
        let draft = self.controller.draft_mut();
        match focus {
            FormField::Name => {
                draft.name.pop();
            }
            FormField::Position => {
                draft.position.pop();
            }
            FormField::Age => {
                draft.age.pop();
            }
            FormField::Salary => {
                draft.salary.pop();
            }
            FormField::Office => {}
        }
    }
}

/// Sleep until the deadline, or forever when there is none.
async fn sleep_until_deadline(deadline: Option<Instant>) {
    match deadline {
        Some(deadline) => tokio::time::sleep_until(tokio::time::Instant::from_std(deadline)).await,
        None => std::future::pending::<()>().await,
    }
}

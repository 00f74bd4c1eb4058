//! Status cadence: reveal status strings one per tick, then finish.
//!
//! DESIGN
//! ======
//! A [`CadenceSlot`] owns at most one running cadence together with its timer
//! handle. Installing or taking a cadence bumps the slot generation, so a tick
//! from a replaced timer is recognised as stale. Dropping the timer handle is
//! what cancels it.

#[cfg(test)]
#[path = "cadence_test.rs"]
mod cadence_test;

use std::any::Any;

use crate::net::types::ChatAnswer;

/// Cursor over one answer's status updates.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StatusCadence {
    updates: Vec<String>,
    next: usize,
    answer: ChatAnswer,
}

impl StatusCadence {
    /// Build a cadence for `answer`.
    ///
    /// # Errors
    ///
    /// Gives the answer back unchanged when it has no status updates.
    pub fn new(mut answer: ChatAnswer) -> Result<Self, ChatAnswer> {
        if answer.status_updates.is_empty() {
            return Err(answer);
        }
        let updates = std::mem::take(&mut answer.status_updates);
        Ok(Self { updates, next: 0, answer })
    }

    /// Next status to display, or `None` once every status has been shown.
    pub fn advance(&mut self) -> Option<&str> {
        let status = self.updates.get(self.next)?;
        self.next += 1;
        Some(status.as_str())
    }

    #[must_use]
    pub fn remaining(&self) -> usize {
        self.updates.len() - self.next
    }

    #[must_use]
    pub fn into_answer(self) -> ChatAnswer {
        self.answer
    }
}

/// A cadence removed from the slot, with the timer that was driving it.
pub struct Retired {
    pub cadence: StatusCadence,
    pub timer: Option<Box<dyn Any>>,
}

/// Result of one tick against the slot.
pub enum SlotTick {
    Show(String),
    /// Every status has been shown; the cadence has left the slot.
    Exhausted(Retired),
    /// The tick belongs to a cadence that is no longer installed.
    Stale,
}

struct Active {
    cadence: StatusCadence,
    timer: Option<Box<dyn Any>>,
}

/// Single-owner slot for the active status cadence.
#[derive(Default)]
pub struct CadenceSlot {
    generation: u64,
    active: Option<Active>,
}

impl CadenceSlot {
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active.is_some()
    }

    /// Install `cadence`, returning its generation and whatever it displaced.
    pub fn install(&mut self, cadence: StatusCadence) -> (u64, Option<Retired>) {
        let displaced = self.take();
        self.active = Some(Active { cadence, timer: None });
        (self.generation, displaced)
    }

    /// Remove the active cadence, if any. Ticks for it become stale.
    pub fn take(&mut self) -> Option<Retired> {
        self.generation += 1;
        self.active
            .take()
            .map(|active| Retired { cadence: active.cadence, timer: active.timer })
    }

    /// Hand the slot the timer driving `generation`.
    ///
    /// # Errors
    ///
    /// Returns the timer if `generation` is no longer installed; the caller
    /// should drop it.
    pub fn attach_timer(&mut self, generation: u64, timer: Box<dyn Any>) -> Result<(), Box<dyn Any>> {
        match self.active.as_mut() {
            Some(active) if generation == self.generation => {
                active.timer = Some(timer);
                Ok(())
            }
            _ => Err(timer),
        }
    }

    pub fn tick(&mut self, generation: u64) -> SlotTick {
        if generation != self.generation {
            return SlotTick::Stale;
        }
        let Some(active) = self.active.as_mut() else {
            return SlotTick::Stale;
        };
        if let Some(status) = active.cadence.advance() {
            return SlotTick::Show(status.to_owned());
        }
        match self.take() {
            Some(retired) => SlotTick::Exhausted(retired),
            None => SlotTick::Stale,
        }
    }
}

//! Command history
//!
//! The invoker runs commands against a ledger and keeps two stacks. A command only
//! enters the undo stack once its `execute` succeeded; executing any new command
//! discards the redo stack, since redo history is only meaningful against the
//! linear sequence that produced it.

use crate::command::Command;
use crate::core::Ledger;
use crate::types::LedgerError;

/// Executes commands and maintains undo/redo history
#[derive(Debug, Default)]
pub struct CommandInvoker {
    undo_stack: Vec<Box<dyn Command>>,
    redo_stack: Vec<Box<dyn Command>>,
}

impl CommandInvoker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Execute a command and record it in the history
    ///
    /// # Arguments
    ///
    /// * `ledger` - The ledger the command runs against
    /// * `command` - The command to execute
    ///
    /// # Returns
    ///
    /// * `Ok(())` if the command succeeded; it is pushed onto the undo stack and the
    ///   redo stack is cleared
    /// * `Err(LedgerError)` if it failed; the history is left untouched
    pub fn execute<C>(&mut self, ledger: &mut Ledger, command: C) -> Result<(), LedgerError>
    where
        C: Command + 'static,
    {
        self.execute_boxed(ledger, Box::new(command))
    }

    /// Same as [`execute`](Self::execute) for an already boxed command
    pub fn execute_boxed(
        &mut self,
        ledger: &mut Ledger,
        mut command: Box<dyn Command>,
    ) -> Result<(), LedgerError> {
        if let Err(err) = command.execute(ledger) {
            tracing::debug!(command = command.name(), error = %err, "command rejected");
            return Err(err);
        }

        tracing::debug!(command = command.name(), "command executed");
        self.undo_stack.push(command);
        self.redo_stack.clear();
        Ok(())
    }

    /// Undo the most recent command
    ///
    /// # Returns
    ///
    /// * `Ok(true)` if a command was undone and moved to the redo stack
    /// * `Ok(false)` if there was nothing to undo
    ///
    /// # Errors
    ///
    /// If the command's `undo` fails, the command is dropped from the history and
    /// the error is returned.
    pub fn undo(&mut self, ledger: &mut Ledger) -> Result<bool, LedgerError> {
        let Some(mut command) = self.undo_stack.pop() else {
            return Ok(false);
        };

        if let Err(err) = command.undo(ledger) {
            tracing::warn!(command = command.name(), error = %err, "undo failed, command dropped");
            return Err(err);
        }

        tracing::debug!(command = command.name(), "command undone");
        self.redo_stack.push(command);
        Ok(true)
    }

    /// Re-execute the most recently undone command
    ///
    /// # Returns
    ///
    /// * `Ok(true)` if a command was re-executed and moved back to the undo stack
    /// * `Ok(false)` if there was nothing to redo
    ///
    /// # Errors
    ///
    /// If re-execution fails, the command is dropped from the history and the error
    /// is returned.
    pub fn redo(&mut self, ledger: &mut Ledger) -> Result<bool, LedgerError> {
        let Some(mut command) = self.redo_stack.pop() else {
            return Ok(false);
        };

        if let Err(err) = command.execute(ledger) {
            tracing::warn!(command = command.name(), error = %err, "redo failed, command dropped");
            return Err(err);
        }

        tracing::debug!(command = command.name(), "command redone");
        self.undo_stack.push(command);
        Ok(true)
    }

    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    pub fn undo_len(&self) -> usize {
        self.undo_stack.len()
    }

    pub fn redo_len(&self) -> usize {
        self.redo_stack.len()
    }

    /// Forget all history
    pub fn clear(&mut self) {
        self.undo_stack.clear();
        self.redo_stack.clear();
    }
}

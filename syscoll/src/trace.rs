use alloc::format;
use alloc::string::ToString;
use alloc::vec::Vec;
use core::fmt;

use crate::delegate::Listener;
use crate::error::Result;

/// A set of trace listeners, passed to whatever needs to write diagnostics.
///
/// Every message is also emitted as a `tracing` event under the
/// `syscoll::trace` target, so a context without listeners still reaches
/// the installed subscriber.
#[derive(Debug, Default)]
pub struct TraceContext<'f> {
    listeners: Vec<Listener<'f>>,
}

impl<'f> TraceContext<'f> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            listeners: Vec::new(),
        }
    }

    /// Registers `listener`.
    ///
    /// # Errors
    ///
    /// Returns `NotInvocable` if `listener` is unbound.
    pub fn add_listener(&mut self, listener: Listener<'f>) -> Result<()> {
        listener.bind("listener")?;
        self.listeners.push(listener);
        Ok(())
    }

    pub fn clear_listeners(&mut self) {
        self.listeners.clear();
    }

    #[must_use]
    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    pub fn write(&self, message: &str) {
        tracing::trace!(target: "syscoll::trace", listeners = self.listeners.len(), "{message}");
        // Registration only accepts bound listeners
        for listener in &self.listeners {
            if let Ok(write) = listener.bind("listener") {
                write(message);
            }
        }
    }

    pub fn write_line(&self, message: &str) {
        self.write(&format!("{message}\n"));
    }

    pub fn write_line_fmt(&self, args: fmt::Arguments<'_>) {
        self.write_line(&args.to_string());
    }

    /// Writes `Assertion failed[: message]` when `condition` is false.
    pub fn assert(&self, condition: bool, message: &str) {
        if condition {
            return;
        }
        if message.is_empty() {
            self.write_line("Assertion failed");
        } else {
            self.write_line(&format!("Assertion failed: {message}"));
        }
    }
}

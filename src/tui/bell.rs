//! Audible end-of-interval cue.

use std::io::{self, Stdout, Write};

use crate::core::{IntervalEnded, Notifier, NotifyError};

/// Rings the terminal bell by writing BEL to the terminal.
#[derive(Debug)]
pub struct BellNotifier<W = Stdout> {
    out: W,
    enabled: bool,
}

impl BellNotifier<Stdout> {
    #[must_use]
    pub fn stdout(enabled: bool) -> Self {
        Self::new(io::stdout(), enabled)
    }
}

impl<W: Write> BellNotifier<W> {
    pub const fn new(out: W, enabled: bool) -> Self {
        Self { out, enabled }
    }
}

impl<W: Write> Notifier for BellNotifier<W> {
    fn interval_ended(&mut self, _event: &IntervalEnded) -> Result<(), NotifyError> {
        if !self.enabled {
            return Ok(());
        }
        self.out.write_all(b"\x07")?;
        self.out.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Mode;

    fn event() -> IntervalEnded {
        IntervalEnded {
            finished: Mode::Work,
            next: Mode::ShortBreak,
            completed_work_sessions: 1,
        }
    }

    #[test]
    fn test_bell_writes_bel() {
        let mut bell = BellNotifier::new(Vec::new(), true);
        bell.interval_ended(&event()).unwrap();
        assert_eq!(bell.out, b"\x07");
    }

    #[test]
    fn test_disabled_bell_is_silent() {
        let mut bell = BellNotifier::new(Vec::new(), false);
        bell.interval_ended(&event()).unwrap();
        assert!(bell.out.is_empty());
    }

    struct Broken;

    impl Write for Broken {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_write_failure_is_reported_not_panicked() {
        let mut bell = BellNotifier::new(Broken, true);
        assert!(bell.interval_ended(&event()).is_err());
    }
}

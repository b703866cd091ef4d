//! Warn, then delegate.

use crate::entry_point::EntryPoint;
use crate::error::Result;
use crate::notice::deprecation_notice;

/// Emit the deprecation notice through `warn`, then run `entry`.
///
/// The notice is emitted exactly once, before the entry point runs, and
/// regardless of whether the entry point can be started. The entry point's
/// exit code or startup error is returned unchanged.
pub fn forward<E, W>(entry: &mut E, warn: W) -> Result<i32>
where
    E: EntryPoint + ?Sized,
    W: FnOnce(&str),
{
    warn(deprecation_notice());

    let result = entry.run();
    if let Err(err) = &result {
        tracing::debug!(entry_point = %entry.name(), error = %err, "Entry point failed to start");
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entry_point::FnEntryPoint;
    use crate::error::StartupError;
    use crate::notice::REPLACEMENT_ENTRY_POINTS;
    use pretty_assertions::assert_eq;
    use std::cell::RefCell;

    #[derive(Debug, PartialEq)]
    enum Event {
        Warned(String),
        Delegated,
    }

    fn run_with_stub(code: Result<i32>) -> (Result<i32>, Vec<Event>) {
        let events = RefCell::new(Vec::new());
        let mut code = Some(code);
        let result = {
            let mut entry = FnEntryPoint::new("stub", || {
                events.borrow_mut().push(Event::Delegated);
                code.take().expect("stub entry point called twice")
            });
            forward(&mut entry, |notice| {
                events.borrow_mut().push(Event::Warned(notice.to_string()))
            })
        };
        (result, events.into_inner())
    }

    #[test]
    fn test_warns_once_before_delegating() {
        let (result, events) = run_with_stub(Ok(0));
        assert_eq!(result.unwrap(), 0);
        assert_eq!(
            events,
            vec![
                Event::Warned(deprecation_notice().to_string()),
                Event::Delegated
            ]
        );
    }

    #[test]
    fn test_warning_names_both_replacements() {
        let (_, events) = run_with_stub(Ok(0));
        let Some(Event::Warned(notice)) = events.first() else {
            panic!("first event was not a warning: {events:?}");
        };
        for replacement in REPLACEMENT_ENTRY_POINTS {
            assert!(notice.contains(replacement));
        }
    }

    #[test]
    fn test_exit_code_is_returned_unchanged() {
        for expected in [0, 1, 2, 130] {
            let (result, _) = run_with_stub(Ok(expected));
            assert_eq!(result.unwrap(), expected);
        }
    }

    #[test]
    fn test_startup_error_propagates_after_warning() {
        let (result, events) = run_with_stub(Err(StartupError::Unavailable("stub".into())));
        assert!(matches!(result, Err(StartupError::Unavailable(_))));
        assert_eq!(events.len(), 2);
        assert!(matches!(events[0], Event::Warned(_)));
    }

    #[test]
    fn test_repeated_runs_are_identical() {
        let first = run_with_stub(Ok(2));
        let second = run_with_stub(Ok(2));
        assert_eq!(first.0.unwrap(), second.0.unwrap());
        assert_eq!(first.1, second.1);
    }

    #[test]
    fn test_accepts_trait_object() {
        let mut stub = FnEntryPoint::new("stub", || Ok(5));
        let entry: &mut dyn EntryPoint = &mut stub;
        let mut warnings = 0;
        assert_eq!(forward(entry, |_| warnings += 1).unwrap(), 5);
        assert_eq!(warnings, 1);
    }
}

use std::io::{self, BufRead};

use log::{debug, warn};

use crate::input::{InputError, TokenReader};
use crate::report::Report;
use crate::toggle_set::{CapacityExceeded, Toggle, ToggleSet};

/// What to do when a value has to be inserted into a full set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OverflowPolicy {
    /// Drop the value and keep going.
    #[default]
    Drop,
    /// Stop with [`DriverError::Capacity`].
    Fail,
}

#[derive(Debug, thiserror::Error)]
pub enum DriverError {
    #[error(transparent)]
    Input(#[from] InputError),
    #[error("value #{} overflowed the set", .step + 1)]
    Capacity {
        step: u64,
        #[source]
        source: CapacityExceeded,
    },
    #[error("failed to record step #{}", .step + 1)]
    Observer {
        step: u64,
        #[source]
        source: io::Error,
    },
}

/// One applied toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Step {
    /// 0-based position of the value in the input.
    pub index: u64,
    pub value: i32,
    pub outcome: Toggle,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DriverOutcome {
    pub set: ToggleSet,
    pub report: Report,
    pub toggles: u64,
    pub dropped: u64,
}

pub fn run<R: BufRead>(reader: R, policy: OverflowPolicy) -> Result<DriverOutcome, DriverError> {
    run_with(reader, policy, |_, _| Ok(()))
}

/// Reads the count and the values from `reader`, toggles each value into a
/// fresh set and calls `observe` after every step with the updated set.
pub fn run_with<R, F>(
    reader: R,
    policy: OverflowPolicy,
    mut observe: F,
) -> Result<DriverOutcome, DriverError>
where
    R: BufRead,
    F: FnMut(&Step, &ToggleSet) -> io::Result<()>,
{
    let mut tokens = TokenReader::new(reader);
    let count = tokens.read_count()?;
    if count < 0 {
        warn!("negative count {}, no values will be read", count);
    }
    let expected = count.max(0) as u64;
    debug!("reading {} values", expected);

    let mut set = ToggleSet::new();
    let mut dropped = 0;
    for index in 0..expected {
        let value = tokens.read_value(index, expected)?;
        let outcome = set.toggle(value);
        match outcome {
            Toggle::Inserted { slot } => {
                debug!("#{} {} inserted at slot {}", index + 1, value, slot)
            }
            Toggle::Removed { slot } => {
                debug!("#{} {} removed from slot {}", index + 1, value, slot)
            }
            Toggle::Dropped => {
                if policy == OverflowPolicy::Fail {
                    return Err(DriverError::Capacity {
                        step: index,
                        source: CapacityExceeded { value },
                    });
                }
                warn!("#{} {} dropped: set is full {}", index + 1, value, set);
                dropped += 1;
            }
        }
        let step = Step { index, value, outcome };
        observe(&step, &set).map_err(|source| DriverError::Observer { step: index, source })?;
    }

    let report = Report::from_set(&set);
    Ok(DriverOutcome {
        set,
        report,
        toggles: expected,
        dropped,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_str(s: &str) -> DriverOutcome {
        run(s.as_bytes(), OverflowPolicy::Drop).unwrap()
    }

    #[test]
    fn zero_count_reports_all_empty() {
        let out = run_str("0");
        assert!(out.set.is_empty());
        assert_eq!(out.report.to_string(), "-1 -1 -1");
    }

    #[test]
    fn three_inserts() {
        let out = run_str("3 \n 5 2 9");
        assert_eq!(out.set.slots(), &[Some(5), Some(2), Some(9), None]);
        assert_eq!(out.report.to_string(), "2 5 9");
    }

    #[test]
    fn insert_then_remove_leaves_hole() {
        let out = run_str("4 \n 5 2 9 5");
        assert_eq!(out.set.slots(), &[None, Some(2), Some(9), None]);
        assert_eq!(out.report.to_string(), "-1 2 9");
    }

    #[test]
    fn overflow_is_dropped_by_default() {
        let out = run_str("5 \n 1 2 3 4 5");
        assert_eq!(out.set.slots(), &[Some(1), Some(2), Some(3), Some(4)]);
        assert_eq!(out.dropped, 1);
        assert_eq!(out.report.to_string(), "1 2 3");
    }

    #[test]
    fn overflow_fails_when_strict() {
        let err = run("5 \n 1 2 3 4 5".as_bytes(), OverflowPolicy::Fail).unwrap_err();
        match err {
            DriverError::Capacity { step, source } => {
                assert_eq!(step, 4);
                assert_eq!(source.value, 5);
            }
            other => panic!("unexpected error: {}", other),
        }
    }

    #[test]
    fn negative_count_reads_nothing() {
        let out = run_str("-3 7 8");
        assert_eq!(out.toggles, 0);
        assert!(out.set.is_empty());
    }

    #[test]
    fn trailing_tokens_are_ignored() {
        let out = run_str("2 4 6 8 10 junk");
        assert_eq!(out.set.slots(), &[Some(4), Some(6), None, None]);
    }

    #[test]
    fn nothing_after_the_last_value_is_read() {
        let out = run(&b"1 5\n\xff\xfe\n"[..], OverflowPolicy::Drop).unwrap();
        assert_eq!(out.set.slots(), &[Some(5), None, None, None]);

        let mut input = &b"2 1\n2\nrest\n"[..];
        run(&mut input, OverflowPolicy::Drop).unwrap();
        assert_eq!(input, b"rest\n");
    }

    #[test]
    fn missing_values_fail() {
        let err = run("3 1 2".as_bytes(), OverflowPolicy::Drop).unwrap_err();
        assert!(matches!(
            err,
            DriverError::Input(InputError::MissingValue { index: 2, expected: 3 })
        ));
    }

    #[test]
    fn malformed_value_fails() {
        let err = run("2 1 x".as_bytes(), OverflowPolicy::Drop).unwrap_err();
        assert_eq!(err.to_string(), "line 1: invalid value #2 \"x\"");
    }

    #[test]
    fn observer_sees_every_step() {
        let mut seen = Vec::new();
        run_with("5 1 2 1 3 4".as_bytes(), OverflowPolicy::Drop, |step, set| {
            seen.push((step.value, step.outcome, set.len()));
            Ok(())
        })
        .unwrap();
        assert_eq!(
            seen,
            vec![
                (1, Toggle::Inserted { slot: 0 }, 1),
                (2, Toggle::Inserted { slot: 1 }, 2),
                (1, Toggle::Removed { slot: 0 }, 1),
                (3, Toggle::Inserted { slot: 0 }, 2),
                (4, Toggle::Inserted { slot: 2 }, 3),
            ]
        );
    }

    #[test]
    fn observer_errors_stop_the_run() {
        let err = run_with("2 1 2".as_bytes(), OverflowPolicy::Drop, |step, _| {
            if step.index == 1 {
                Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
            } else {
                Ok(())
            }
        })
        .unwrap_err();
        assert!(matches!(err, DriverError::Observer { step: 1, .. }));
    }
}

use tracing::warn;

use crate::error::{ArithmeticError, ArithmeticStatus};
use crate::fixed::Fixed;

/// Result of an arithmetic operation under the zero-sentinel policy.
///
/// `value` is the exact result when the operation succeeded and
/// [`Fixed::ZERO`] when it overflowed or divided by zero. The error that
/// caused the sentinel is kept alongside so callers can inspect it.
///
/// # Examples
///
/// ```
/// use fixed_point::{ArithmeticStatus, Fixed};
///
/// let outcome = Fixed::from_int(5).div_with_status(Fixed::ZERO);
/// assert_eq!(outcome.value(), Fixed::ZERO);
/// assert_eq!(outcome.status(), ArithmeticStatus::DivisionByZero);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Outcome {
    value: Fixed,
    error: Option<ArithmeticError>,
}

impl Outcome {
    /// Returns the value, which is the zero sentinel on failure.
    pub fn value(&self) -> Fixed {
        self.value
    }

    pub fn status(&self) -> ArithmeticStatus {
        self.error
            .as_ref()
            .map_or(ArithmeticStatus::Ok, ArithmeticError::status)
    }

    pub fn error(&self) -> Option<&ArithmeticError> {
        self.error.as_ref()
    }

    pub fn is_ok(&self) -> bool {
        self.error.is_none()
    }

    /// Converts back into a strict result, dropping the sentinel.
    pub fn into_result(self) -> Result<Fixed, ArithmeticError> {
        match self.error {
            Some(err) => Err(err),
            None => Ok(self.value),
        }
    }

    /// Returns the value, emitting a warning event if the sentinel was used.
    ///
    /// This is what the arithmetic operators go through: the installed
    /// `tracing` subscriber receives every substituted result.
    pub fn report(self) -> Fixed {
        if let Some(err) = self.error {
            warn!(status = ?err.status(), "{err}, substituting zero");
        }
        self.value
    }
}

impl From<Result<Fixed, ArithmeticError>> for Outcome {
    fn from(result: Result<Fixed, ArithmeticError>) -> Self {
        match result {
            Ok(value) => Self { value, error: None },
            Err(err) => Self {
                value: Fixed::ZERO,
                error: Some(err),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Operation;

    use std::fmt::{self, Write};
    use std::sync::{Arc, Mutex};

    use tracing::field::{Field, Visit};
    use tracing_subscriber::Layer;
    use tracing_subscriber::layer::{Context, SubscriberExt};

    /// Collects the message of every event seen while installed.
    #[derive(Clone, Default)]
    struct Captured(Arc<Mutex<Vec<String>>>);

    struct MessageVisitor<'a>(&'a mut String);

    impl Visit for MessageVisitor<'_> {
        fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
            if field.name() == "message" {
                let _ = write!(self.0, "{value:?}");
            }
        }
    }

    impl<S: tracing::Subscriber> Layer<S> for Captured {
        fn on_event(&self, event: &tracing::Event<'_>, _ctx: Context<'_, S>) {
            let mut message = String::new();
            event.record(&mut MessageVisitor(&mut message));
            self.0.lock().unwrap().push(message);
        }
    }

    /// Runs `f` with a capturing subscriber and returns its result and events.
    fn capture<R>(f: impl FnOnce() -> R) -> (R, Vec<String>) {
        let captured = Captured::default();
        let subscriber = tracing_subscriber::registry().with(captured.clone());
        let result = tracing::subscriber::with_default(subscriber, f);
        let events = captured.0.lock().unwrap().clone();
        (result, events)
    }

    #[test]
    fn test_ok_outcome() {
        let outcome = Outcome::from(Ok::<_, ArithmeticError>(Fixed::ONE));
        assert!(outcome.is_ok());
        assert_eq!(outcome.status(), ArithmeticStatus::Ok);
        assert_eq!(outcome.value(), Fixed::ONE);
        assert_eq!(outcome.into_result(), Ok(Fixed::ONE));
    }

    #[test]
    fn test_error_outcome_uses_zero_sentinel() {
        let err = ArithmeticError::Overflow {
            op: Operation::Mul,
            lhs: i32::MAX,
            rhs: i32::MAX,
        };
        let outcome = Outcome::from(Err::<Fixed, _>(err));
        assert_eq!(outcome.value(), Fixed::ZERO);
        assert_eq!(outcome.status(), ArithmeticStatus::Overflow);
        assert_eq!(outcome.error(), Some(&err));
        assert_eq!(outcome.into_result(), Err(err));
    }

    #[test]
    fn test_report_warns_only_on_error() {
        let (value, events) = capture(|| Outcome::from(Ok::<_, ArithmeticError>(Fixed::ONE)).report());
        assert_eq!(value, Fixed::ONE);
        assert!(events.is_empty());

        let (value, events) =
            capture(|| Outcome::from(Err::<Fixed, _>(ArithmeticError::DivisionByZero { lhs: 256 })).report());
        assert_eq!(value, Fixed::ZERO);
        assert_eq!(events.len(), 1);
        assert!(events[0].contains("division by zero"));
    }

    #[test]
    fn test_operator_overflow_is_logged() {
        let (sum, events) = capture(|| Fixed::from_raw(i32::MAX - 100) + Fixed::from_raw(200));
        assert_eq!(sum, Fixed::ZERO);
        assert_eq!(events.len(), 1);
        assert!(events[0].contains("overflow in addition"));
    }
}

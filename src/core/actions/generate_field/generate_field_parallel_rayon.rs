use rayon::prelude::*;

use crate::core::actions::cancellation::{CancelToken, Cancelled, NeverCancel};
use crate::core::actions::generate_field::ports::field_algorithm::FieldAlgorithm;
use crate::core::data::grid_point::GridPoint;

/// Error type for cancelable field generation.
///
/// Keeps cancellation apart from algorithm failures so callers can treat
/// an abandoned render as ordinary control flow.
#[derive(Debug, PartialEq)]
pub enum GenerateFieldError<E> {
    Cancelled(Cancelled),
    Algorithm(E),
}

impl<E: std::fmt::Display> std::fmt::Display for GenerateFieldError<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GenerateFieldError::Cancelled(c) => write!(f, "{}", c),
            GenerateFieldError::Algorithm(e) => write!(f, "algorithm error: {}", e),
        }
    }
}

impl<E: std::error::Error + 'static> std::error::Error for GenerateFieldError<E> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GenerateFieldError::Cancelled(c) => Some(c),
            GenerateFieldError::Algorithm(e) => Some(e),
        }
    }
}

/// Evaluates a `width` x `height` grid in parallel on rayon's work-stealing
/// pool. Output is row-major, identical to [`generate_field_serial`].
///
/// [`generate_field_serial`]: super::generate_field_serial::generate_field_serial
pub fn generate_field_parallel_rayon<Alg>(
    width: u32,
    height: u32,
    algorithm: &Alg,
) -> Result<Vec<Alg::Success>, Alg::Failure>
where
    Alg: FieldAlgorithm + Sync,
    Alg::Success: Send,
    Alg::Failure: Send,
{
    generate_field_parallel_rayon_cancelable(width, height, algorithm, &NeverCancel).map_err(
        |e| match e {
            GenerateFieldError::Algorithm(alg_err) => alg_err,
            GenerateFieldError::Cancelled(_) => {
                unreachable!("NeverCancel token should never signal cancellation")
            }
        },
    )
}

/// Parallel field generation that polls `cancel` at the start of each row
/// and then on every [`CancelToken::poll`] boundary within the row.
pub fn generate_field_parallel_rayon_cancelable<Alg, C>(
    width: u32,
    height: u32,
    algorithm: &Alg,
    cancel: &C,
) -> Result<Vec<Alg::Success>, GenerateFieldError<Alg::Failure>>
where
    Alg: FieldAlgorithm + Sync,
    Alg::Success: Send,
    Alg::Failure: Send,
    C: CancelToken,
{
    let rows: Result<Vec<Vec<Alg::Success>>, GenerateFieldError<Alg::Failure>> = (0..height)
        .into_par_iter()
        .map(|y| {
            let mut row = Vec::with_capacity(width as usize);

            for (i, x) in (0..width).enumerate() {
                cancel.poll(i).map_err(GenerateFieldError::Cancelled)?;

                let result = algorithm
                    .compute(GridPoint { x, y })
                    .map_err(GenerateFieldError::Algorithm)?;
                row.push(result);
            }

            Ok(row)
        })
        .collect();

    rows.map(|r| r.into_iter().flatten().collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::actions::generate_field::generate_field_serial::generate_field_serial;
    use std::error::Error;
    use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

    #[derive(Debug, PartialEq)]
    struct StubError {}

    impl std::fmt::Display for StubError {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            write!(f, "StubError")
        }
    }

    impl Error for StubError {}

    struct StubSuccessAlgorithm {}

    impl FieldAlgorithm for StubSuccessAlgorithm {
        type Success = u64;
        type Failure = StubError;

        fn compute(&self, cell: GridPoint) -> Result<Self::Success, Self::Failure> {
            Ok(u64::from(cell.x) * 7 + u64::from(cell.y))
        }
    }

    struct StubFailureAlgorithm {}

    impl FieldAlgorithm for StubFailureAlgorithm {
        type Success = u64;
        type Failure = StubError;

        fn compute(&self, _: GridPoint) -> Result<Self::Success, Self::Failure> {
            Err(StubError {})
        }
    }

    #[test]
    fn test_rayon_generates_same_results_as_serial() {
        let algorithm = StubSuccessAlgorithm {};

        let serial = generate_field_serial(11, 9, &algorithm).unwrap();
        let parallel = generate_field_parallel_rayon(11, 9, &algorithm).unwrap();

        assert_eq!(parallel, serial);
    }

    #[test]
    fn test_rayon_with_large_grid() {
        let algorithm = StubSuccessAlgorithm {};

        let serial = generate_field_serial(101, 101, &algorithm).unwrap();
        let parallel = generate_field_parallel_rayon(101, 101, &algorithm).unwrap();

        assert_eq!(parallel, serial);
    }

    #[test]
    fn test_rayon_propagates_algorithm_failure() {
        let result = generate_field_parallel_rayon(4, 5, &StubFailureAlgorithm {});
        assert_eq!(result, Err(StubError {}));
    }

    #[test]
    fn test_cancelable_returns_cancelled_when_token_is_set() {
        let cancelled = AtomicBool::new(true);
        let cancel_token = || cancelled.load(Ordering::Relaxed);

        let algorithm = StubSuccessAlgorithm {};
        let result = generate_field_parallel_rayon_cancelable(10, 8, &algorithm, &cancel_token);

        assert!(matches!(result, Err(GenerateFieldError::Cancelled(_))));
    }

    #[test]
    fn test_cancelable_propagates_algorithm_failure() {
        let result =
            generate_field_parallel_rayon_cancelable(3, 4, &StubFailureAlgorithm {}, &NeverCancel);

        assert!(matches!(result, Err(GenerateFieldError::Algorithm(_))));
    }

    #[test]
    fn test_cancellation_polled_at_row_start() {
        let poll_count = AtomicUsize::new(0);
        let cancel_token = || {
            poll_count.fetch_add(1, Ordering::Relaxed);
            false
        };

        let result =
            generate_field_parallel_rayon_cancelable(2, 5, &StubSuccessAlgorithm {}, &cancel_token);

        assert!(result.is_ok());
        let polls = poll_count.load(Ordering::Relaxed);
        assert!(polls >= 5, "Expected at least 5 polls for 5 rows, got {}", polls);
    }

    #[test]
    fn test_cancellation_polled_multiple_times_on_wide_rows() {
        let poll_count = AtomicUsize::new(0);
        let cancel_token = || {
            poll_count.fetch_add(1, Ordering::Relaxed);
            false
        };

        let result = generate_field_parallel_rayon_cancelable(
            3000,
            2,
            &StubSuccessAlgorithm {},
            &cancel_token,
        );

        assert!(result.is_ok());
        let polls = poll_count.load(Ordering::Relaxed);
        assert!(polls >= 6, "Expected at least 6 polls for 2 wide rows, got {}", polls);
    }

    #[test]
    fn test_generate_field_error_display() {
        let cancelled: GenerateFieldError<StubError> = GenerateFieldError::Cancelled(Cancelled);
        let failed: GenerateFieldError<StubError> = GenerateFieldError::Algorithm(StubError {});

        assert_eq!(cancelled.to_string(), "field generation cancelled");
        assert_eq!(failed.to_string(), "algorithm error: StubError");
    }
}

//! Grammar correction
//!
//! The pipeline treats correction as optional polish: every call may fail
//! and a failure only degrades that item to its uncorrected text. Batches
//! run on a bounded Rayon pool and come back in input order.

pub mod languagetool;

use log::warn;
use rayon::prelude::*;
use std::sync::Arc;
use thiserror::Error;

pub use languagetool::LanguageToolCorrector;

/// Failure of a single correction request
#[derive(Error, Debug)]
pub enum CorrectionError {
    /// Transport failure or timeout
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Non-success HTTP status
    #[error("service returned status {0}")]
    Status(u16),

    /// The corrector is not usable (e.g. client construction failed)
    #[error("corrector unavailable: {0}")]
    Unavailable(String),
}

/// Corrects one sentence.
///
/// Implementations must be shareable across threads; batches call
/// `correct` concurrently.
pub trait GrammarCorrector: Send + Sync {
    fn correct(&self, sentence: &str) -> Result<String, CorrectionError>;

    /// Short name used in log lines
    fn name(&self) -> &str {
        "corrector"
    }

    /// True when `correct` never changes its input
    fn is_noop(&self) -> bool {
        false
    }
}

impl<T: GrammarCorrector + ?Sized> GrammarCorrector for &T {
    fn correct(&self, sentence: &str) -> Result<String, CorrectionError> {
        (**self).correct(sentence)
    }

    fn name(&self) -> &str {
        (**self).name()
    }

    fn is_noop(&self) -> bool {
        (**self).is_noop()
    }
}

impl<T: GrammarCorrector + ?Sized> GrammarCorrector for Box<T> {
    fn correct(&self, sentence: &str) -> Result<String, CorrectionError> {
        (**self).correct(sentence)
    }

    fn name(&self) -> &str {
        (**self).name()
    }

    fn is_noop(&self) -> bool {
        (**self).is_noop()
    }
}

impl<T: GrammarCorrector + ?Sized> GrammarCorrector for Arc<T> {
    fn correct(&self, sentence: &str) -> Result<String, CorrectionError> {
        (**self).correct(sentence)
    }

    fn name(&self) -> &str {
        (**self).name()
    }

    fn is_noop(&self) -> bool {
        (**self).is_noop()
    }
}

/// Returns every sentence unchanged
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopCorrector;

impl GrammarCorrector for NoopCorrector {
    fn correct(&self, sentence: &str) -> Result<String, CorrectionError> {
        Ok(sentence.to_string())
    }

    fn name(&self) -> &str {
        "noop"
    }

    fn is_noop(&self) -> bool {
        true
    }
}

/// Correct `items` with at most `concurrency` requests in flight.
///
/// Results are in input order regardless of completion order. Single-item
/// batches, a concurrency of one and no-op correctors run on the calling
/// thread; so does everything else if the pool cannot be built.
pub fn correct_batch<C: GrammarCorrector + ?Sized>(
    corrector: &C,
    items: &[String],
    concurrency: usize,
) -> Vec<Result<String, CorrectionError>> {
    let sequential = || -> Vec<Result<String, CorrectionError>> {
        items.iter().map(|item| corrector.correct(item)).collect()
    };

    if concurrency <= 1 || items.len() <= 1 || corrector.is_noop() {
        return sequential();
    }

    match rayon::ThreadPoolBuilder::new()
        .num_threads(concurrency.min(items.len()))
        .build()
    {
        Ok(pool) => pool.install(|| {
            items
                .par_iter()
                .map(|item| corrector.correct(item))
                .collect()
        }),
        Err(e) => {
            warn!("correction pool unavailable ({e}); correcting sequentially");
            sequential()
        }
    }
}

/// Corrected text when it succeeds and passes `accept`, otherwise the
/// original. Failures are logged and swallowed.
pub fn resolve_correction(
    original: &str,
    result: Result<String, CorrectionError>,
    accept: impl Fn(&str) -> bool,
) -> String {
    match result {
        Ok(corrected) => {
            let corrected = corrected.trim();
            if accept(corrected) {
                corrected.to_string()
            } else {
                original.to_string()
            }
        }
        Err(e) => {
            warn!("grammar correction failed, keeping original: {e}");
            original.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::thread;
    use std::time::Duration;

    struct Upper;

    impl GrammarCorrector for Upper {
        fn correct(&self, sentence: &str) -> Result<String, CorrectionError> {
            Ok(sentence.to_uppercase())
        }
    }

    /// Sleeps longer for earlier items so completion order is reversed
    struct Staggered {
        calls: AtomicUsize,
    }

    impl GrammarCorrector for Staggered {
        fn correct(&self, sentence: &str) -> Result<String, CorrectionError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            let delay = 40u64.saturating_sub(sentence.len() as u64 * 5);
            thread::sleep(Duration::from_millis(delay));
            Ok(format!("{sentence}!"))
        }
    }

    struct Failing;

    impl GrammarCorrector for Failing {
        fn correct(&self, _sentence: &str) -> Result<String, CorrectionError> {
            Err(CorrectionError::Unavailable("offline".into()))
        }
    }

    fn items(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_noop() {
        assert_eq!(NoopCorrector.correct("as is").unwrap(), "as is");
    }

    #[test]
    fn test_batch_preserves_order() {
        let corrector = Staggered {
            calls: AtomicUsize::new(0),
        };
        let input = items(&["a", "bb", "ccc", "dddd", "eeeee"]);
        let out: Vec<String> = correct_batch(&corrector, &input, 4)
            .into_iter()
            .map(|r| r.unwrap())
            .collect();
        assert_eq!(out, vec!["a!", "bb!", "ccc!", "dddd!", "eeeee!"]);
        assert_eq!(corrector.calls.load(Ordering::SeqCst), 5);
    }

    #[test]
    fn test_batch_boxed_dyn() {
        let boxed: Box<dyn GrammarCorrector> = Box::new(Upper);
        let out = correct_batch(&boxed, &items(&["x y z"]), 1);
        assert_eq!(out[0].as_ref().unwrap(), "X Y Z");
    }

    /// Records which threads served its calls
    struct ThreadRecorder {
        noop: bool,
        threads: std::sync::Mutex<Vec<thread::ThreadId>>,
    }

    impl ThreadRecorder {
        fn new(noop: bool) -> Self {
            Self {
                noop,
                threads: std::sync::Mutex::new(Vec::new()),
            }
        }

        fn ran_on_caller(&self) -> bool {
            let caller = thread::current().id();
            self.threads.lock().unwrap().iter().all(|id| *id == caller)
        }
    }

    impl GrammarCorrector for ThreadRecorder {
        fn correct(&self, sentence: &str) -> Result<String, CorrectionError> {
            self.threads.lock().unwrap().push(thread::current().id());
            Ok(sentence.to_string())
        }

        fn is_noop(&self) -> bool {
            self.noop
        }
    }

    #[test]
    fn test_noop_batch_stays_on_caller() {
        let input = items(&["a", "b", "c", "d"]);

        let noop = ThreadRecorder::new(true);
        assert_eq!(correct_batch(&noop, &input, 4).len(), 4);
        assert!(noop.ran_on_caller());

        let single = ThreadRecorder::new(false);
        correct_batch(&single, &input, 1);
        assert!(single.ran_on_caller());

        let parallel = ThreadRecorder::new(false);
        correct_batch(&parallel, &input, 4);
        assert!(!parallel.ran_on_caller());
    }

    #[test]
    fn test_is_noop_forwards() {
        assert!(NoopCorrector.is_noop());
        assert!(!Upper.is_noop());
        let boxed: Box<dyn GrammarCorrector> = Box::new(NoopCorrector);
        assert!(boxed.is_noop());
        assert!(Arc::new(NoopCorrector).is_noop());
    }

    #[test]
    fn test_batch_empty() {
        assert!(correct_batch(&Upper, &[], 2).is_empty());
    }

    #[test]
    fn test_resolve_correction() {
        let three_words = |s: &str| s.split_whitespace().count() >= 3;

        assert_eq!(
            resolve_correction("what is a heap", Ok(" What is a heap? ".into()), three_words),
            "What is a heap?"
        );
        assert_eq!(
            resolve_correction("what is a heap", Ok("Heap".into()), three_words),
            "what is a heap"
        );
        assert_eq!(
            resolve_correction("what is a heap", Failing.correct("x"), three_words),
            "what is a heap"
        );
    }
}

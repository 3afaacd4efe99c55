//! Workloads: the units of work a trial times.
//!
//! A workload is any zero-argument operation. Closures are adapted with
//! [`from_fn`] (cannot fail) or [`try_from_fn`] (returns `Result`), and
//! [`repeat`] turns a single expression into a fixed-size loop, the usual
//! shape of a micro-benchmark body.

use std::hint::black_box;

use crate::error::WorkloadError;

/// A zero-argument operation performing a fixed amount of work.
pub trait Workload {
    /// Execute the work once.
    fn run(&mut self) -> Result<(), WorkloadError>;
}

impl<W: Workload + ?Sized> Workload for &mut W {
    fn run(&mut self) -> Result<(), WorkloadError> {
        (**self).run()
    }
}

impl<W: Workload + ?Sized> Workload for Box<W> {
    fn run(&mut self) -> Result<(), WorkloadError> {
        (**self).run()
    }
}

/// Heap-allocated workload, for catalogues holding heterogeneous closures.
pub type BoxedWorkload = Box<dyn Workload>;

/// Workload built from an infallible closure. See [`from_fn`].
pub struct FromFn<F>(F);

/// Wrap a closure that cannot fail.
///
/// The closure's return value is passed through [`black_box`] so the work
/// producing it is not optimized away.
pub fn from_fn<F, T>(f: F) -> FromFn<F>
where
    F: FnMut() -> T,
{
    FromFn(f)
}

impl<F, T> Workload for FromFn<F>
where
    F: FnMut() -> T,
{
    #[inline]
    fn run(&mut self) -> Result<(), WorkloadError> {
        black_box((self.0)());
        Ok(())
    }
}

/// Workload built from a fallible closure. See [`try_from_fn`].
pub struct TryFromFn<F>(F);

/// Wrap a closure returning `Result`.
///
/// An `Err` aborts the phase it occurs in.
pub fn try_from_fn<F, T, E>(f: F) -> TryFromFn<F>
where
    F: FnMut() -> Result<T, E>,
    E: Into<WorkloadError>,
{
    TryFromFn(f)
}

impl<F, T, E> Workload for TryFromFn<F>
where
    F: FnMut() -> Result<T, E>,
    E: Into<WorkloadError>,
{
    #[inline]
    fn run(&mut self) -> Result<(), WorkloadError> {
        match (self.0)() {
            Ok(value) => {
                black_box(value);
                Ok(())
            }
            Err(e) => Err(e.into()),
        }
    }
}

/// Runs an inner workload a fixed number of times per invocation.
#[derive(Debug, Clone)]
pub struct Repeat<W> {
    iterations: usize,
    inner: W,
}

/// Loop `inner` `iterations` times per run, stopping at the first error.
pub fn repeat<W: Workload>(iterations: usize, inner: W) -> Repeat<W> {
    Repeat { iterations, inner }
}

impl<W> Repeat<W> {
    /// Iterations per run.
    pub fn iterations(&self) -> usize {
        self.iterations
    }
}

impl<W: Workload> Workload for Repeat<W> {
    fn run(&mut self) -> Result<(), WorkloadError> {
        for _ in 0..self.iterations {
            self.inner.run()?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_fn_runs_closure_each_time() {
        let mut calls = 0;
        {
            let mut w = from_fn(|| calls += 1);
            w.run().unwrap();
            w.run().unwrap();
        }
        assert_eq!(calls, 2);
    }

    #[test]
    fn try_from_fn_propagates_error() {
        let mut w = try_from_fn(|| "x".parse::<u32>());
        let err = w.run().unwrap_err();
        assert!(err.to_string().contains("invalid digit"));
    }

    #[test]
    fn repeat_loops_and_stops_on_error() {
        let mut count = 0u32;
        {
            let mut w = repeat(
                10,
                try_from_fn(|| {
                    count += 1;
                    if count == 4 {
                        Err("fourth call")
                    } else {
                        Ok(count)
                    }
                }),
            );
            assert_eq!(w.iterations(), 10);
            assert!(w.run().is_err());
        }
        assert_eq!(count, 4);
    }

    #[test]
    fn boxed_workload_dispatches() {
        let mut w: BoxedWorkload = Box::new(from_fn(|| 1 + 1));
        assert!(w.run().is_ok());
    }
}

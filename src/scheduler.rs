//! Submodule providing the discrete-event scheduler: a
//! thin assembly of the dense matrix engine (C2), core algebra (C4) and
//! spectral engine (C6) atop a system matrix, state vector and input
//! vector.

use alloc::string::String;
use alloc::vec;
use alloc::vec::Vec;

use crate::algebra::matvec_dense;
use crate::errors::{PalmaError, Result};
use crate::matrix::DenseMatrix;
use crate::scalar::{NEG_INF, POS_INF, Scalar};
use crate::semiring::SemiringKind;
use crate::spectral::eigenvalue;

/// A discrete-event scheduler over `n_tasks` tasks (spec.md §3, §4.8).
///
/// The system matrix `A` is built incrementally by [`add_constraint`]:
/// `A[to, from] += duration` encodes "`to` cannot start before `from`
/// finishes, plus `duration`". Solving the fixed point `x ← A⊗x ⊕ b ⊕ x`
/// yields each task's completion time in `x`; the system's cycle time
/// (throughput bound) is the tropical eigenvalue of `A`.
///
/// [`add_constraint`]: Scheduler::add_constraint
pub struct Scheduler {
    n_tasks: usize,
    semiring: SemiringKind,
    a: DenseMatrix<'static>,
    x: Vec<Scalar>,
    b: Vec<Scalar>,
    names: Vec<Option<String>>,
}

impl Scheduler {
    /// Creates a scheduler for `n_tasks` tasks over `semiring`, which
    /// must be [`SemiringKind::MaxPlus`] (the usual "earliest start"
    /// reading) or [`SemiringKind::MinPlus`].
    ///
    /// # Errors
    ///
    /// Returns [`PalmaError::InvalidDimensions`] if `n_tasks` is zero,
    /// or [`PalmaError::Unsupported`] if `semiring` is not `MaxPlus` or
    /// `MinPlus`.
    pub fn new(n_tasks: usize, semiring: SemiringKind) -> Result<Self> {
        if n_tasks == 0 {
            return Err(PalmaError::InvalidDimensions("n_tasks must be non-zero"));
        }
        if !semiring.is_additive_tropical() {
            return Err(PalmaError::Unsupported(
                "the scheduler requires the MaxPlus or MinPlus semiring",
            ));
        }
        Ok(Self {
            n_tasks,
            semiring,
            a: DenseMatrix::create_zero(n_tasks, n_tasks, semiring)?,
            x: vec![semiring.zero(); n_tasks],
            b: vec![semiring.zero(); n_tasks],
            names: vec![None; n_tasks],
        })
    }

    /// Returns the number of tasks.
    #[must_use]
    pub const fn n_tasks(&self) -> usize {
        self.n_tasks
    }

    fn check_task(&self, task: usize) -> Result<()> {
        if task >= self.n_tasks {
            return Err(PalmaError::IndexOutOfBounds { row: task, col: 0, rows: self.n_tasks, cols: self.n_tasks });
        }
        Ok(())
    }

    /// Records "`to` cannot start before `from` finishes, plus
    /// `duration`": `A[to, from] ← A[to, from] ⊕ duration`. Calling this
    /// more than once for the same `(from, to)` pair combines the
    /// durations monotonically rather than overwriting.
    ///
    /// # Errors
    ///
    /// Returns [`PalmaError::IndexOutOfBounds`] if `from` or `to` is out
    /// of range.
    pub fn add_constraint(&mut self, from: usize, to: usize, duration: Scalar) -> Result<()> {
        self.check_task(from)?;
        self.check_task(to)?;
        let current = self.a.get(to, from);
        self.a.set(to, from, self.semiring.add(current, duration));
        Ok(())
    }

    /// Seeds `task`'s ready time: both `b[task]` and the initial state
    /// `x[task]` are combined monotonically with `r` via `⊕`.
    ///
    /// # Errors
    ///
    /// Returns [`PalmaError::IndexOutOfBounds`] if `task` is out of
    /// range.
    pub fn set_ready_time(&mut self, task: usize, r: Scalar) -> Result<()> {
        self.check_task(task)?;
        self.b[task] = self.semiring.add(self.b[task], r);
        self.x[task] = self.semiring.add(self.x[task], r);
        Ok(())
    }

    /// Assigns a human-readable name to `task`, used only by
    /// [`critical_path`](Self::critical_path) reports built on top of
    /// this scheduler.
    ///
    /// # Errors
    ///
    /// Returns [`PalmaError::IndexOutOfBounds`] if `task` is out of
    /// range.
    pub fn set_task_name(&mut self, task: usize, name: String) -> Result<()> {
        self.check_task(task)?;
        self.names[task] = Some(name);
        Ok(())
    }

    /// Returns `task`'s name, if one was set.
    #[must_use]
    pub fn task_name(&self, task: usize) -> Option<&str> {
        self.names.get(task).and_then(Option::as_deref)
    }

    /// Iterates the fixed point `x ← (A⊗prev) ⊕ b ⊕ prev` until `x`
    /// stops changing or `max_iter` iterations elapse (`max_iter == 0`
    /// defaults to `n_tasks`). Returns the number of iterations run.
    ///
    /// A positive-mean cycle under `MaxPlus` never converges: this is
    /// not an error (spec.md §4.8), it returns `max_iter` and the caller
    /// is expected to notice via [`cycle_time`](Self::cycle_time).
    ///
    /// # Errors
    ///
    /// Only returns an error if the underlying matrix-vector multiply
    /// does (it cannot, given the scheduler's own invariants; this
    /// signature stays fallible to absorb future changes).
    pub fn solve(&mut self, max_iter: usize) -> Result<usize> {
        let max_iter = if max_iter == 0 { self.n_tasks } else { max_iter };
        let mut tmp = vec![self.semiring.zero(); self.n_tasks];
        for iteration in 1..=max_iter {
            let prev = self.x.clone();
            matvec_dense(&self.a, &prev, &mut tmp)?;
            for i in 0..self.n_tasks {
                self.x[i] = self.semiring.add(self.semiring.add(tmp[i], self.b[i]), prev[i]);
            }
            if self.x == prev {
                return Ok(iteration);
            }
        }
        Ok(max_iter)
    }

    /// Returns `task`'s completion time after [`solve`](Self::solve).
    ///
    /// # Errors
    ///
    /// Returns [`PalmaError::IndexOutOfBounds`] if `task` is out of
    /// range.
    pub fn get_completion(&self, task: usize) -> Result<Scalar> {
        self.check_task(task)?;
        Ok(self.x[task])
    }

    /// Returns the system's cycle time: the tropical eigenvalue of the
    /// system matrix.
    ///
    /// # Errors
    ///
    /// Propagates [`eigenvalue`]'s errors (it cannot fail here, since
    /// the scheduler's matrix is always square and additive-tropical).
    pub fn cycle_time(&self) -> Result<Scalar> {
        eigenvalue(&self.a)
    }

    /// Returns `1 / cycle_time()` if the cycle time is finite and
    /// non-zero, else `0.0`.
    ///
    /// # Errors
    ///
    /// Propagates [`cycle_time`](Self::cycle_time)'s errors.
    pub fn throughput(&self) -> Result<f64> {
        let lambda = self.cycle_time()?;
        if lambda == NEG_INF || lambda == POS_INF || lambda == 0 {
            Ok(0.0)
        } else {
            Ok(1.0 / f64::from(lambda))
        }
    }

    /// Backtracks the critical path: starting from the task with the
    /// maximal completion time (ties broken by smallest index), repeats
    /// choosing a predecessor `j` such that
    /// `x[current] == x[j] ⊗ A[current, j]` (again smallest index on
    /// ties) until none exists or `max_len` steps have been taken
    /// (`max_len == 0` defaults to `n_tasks`, which always bounds an
    /// acyclic backtrack). Writes the path in root-to-end order into
    /// `out` and returns how many entries were written.
    pub fn critical_path(&self, out: &mut [usize], max_len: usize) -> usize {
        let limit = if max_len == 0 { self.n_tasks } else { max_len.min(self.n_tasks) };

        let mut end = 0;
        for i in 1..self.n_tasks {
            if self.x[i] > self.x[end] {
                end = i;
            }
        }

        let mut path = vec![end];
        let mut current = end;
        while path.len() < limit {
            let mut predecessor = None;
            for j in 0..self.n_tasks {
                let duration = self.a.get(current, j);
                if self.semiring.is_zero(duration) {
                    continue;
                }
                if self.semiring.mul(self.x[j], duration) == self.x[current] {
                    predecessor = Some(j);
                    break;
                }
            }
            match predecessor {
                Some(j) => {
                    path.push(j);
                    current = j;
                }
                None => break,
            }
        }
        path.reverse();

        let written = path.len().min(out.len());
        out[..written].copy_from_slice(&path[..written]);
        written
    }
}

#[cfg(test)]
mod tests {
    use super::Scheduler;
    use crate::semiring::SemiringKind;

    /// Scenario B (spec.md §8): 6 tasks, a boot dependency graph.
    #[test]
    fn scenario_b_boot_schedule() {
        let mut sched = Scheduler::new(6, SemiringKind::MaxPlus).unwrap();
        sched.add_constraint(0, 1, 10).unwrap();
        sched.add_constraint(1, 2, 20).unwrap();
        sched.add_constraint(1, 3, 20).unwrap();
        sched.add_constraint(1, 4, 20).unwrap();
        sched.add_constraint(2, 5, 15).unwrap();
        sched.add_constraint(3, 5, 25).unwrap();
        sched.add_constraint(4, 5, 30).unwrap();
        sched.set_ready_time(0, 0).unwrap();

        sched.solve(0).unwrap();

        let expected = [0, 10, 30, 30, 30, 60];
        for (task, &want) in expected.iter().enumerate() {
            assert_eq!(sched.get_completion(task).unwrap(), want, "task {task}");
        }
        let makespan = sched.get_completion(5).unwrap() + 10;
        assert_eq!(makespan, 70);
    }

    #[test]
    fn critical_path_ends_at_the_latest_task() {
        let mut sched = Scheduler::new(3, SemiringKind::MaxPlus).unwrap();
        sched.add_constraint(0, 1, 5).unwrap();
        sched.add_constraint(1, 2, 7).unwrap();
        sched.set_ready_time(0, 0).unwrap();
        sched.solve(0).unwrap();

        let mut path = [0usize; 3];
        let n = sched.critical_path(&mut path, 0);
        assert_eq!(&path[..n], &[0, 1, 2]);
    }

    #[test]
    fn out_of_range_task_is_rejected() {
        let sched = Scheduler::new(2, SemiringKind::MaxPlus).unwrap();
        assert!(sched.get_completion(5).is_err());
    }

    #[test]
    fn non_tropical_semiring_is_rejected_at_construction() {
        assert!(Scheduler::new(2, SemiringKind::Boolean).is_err());
    }
}

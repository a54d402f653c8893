//! Cancellable delayed tasks.
//!
//! The core never owns a real timer. It records what should happen and when,
//! hands the host a [`TaskId`] plus delay, and runs the task when the host
//! reports it fired. Tests drive the same queue with a virtual clock via
//! [`Scheduler::advance`].

#[cfg(test)]
#[path = "scheduler_test.rs"]
mod scheduler_test;

use std::collections::BTreeMap;

/// Handle for a scheduled task. Ids are never reused within one scheduler.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TaskId(pub u64);

/// Delayed jobs the landing page needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Task {
    /// Return the carousel to idle after a transition.
    ReleaseCarousel,
    /// Accept wheel input again.
    EndWheelCooldown,
    /// Finish the mocked registration.
    CompleteRegistration,
    /// Start observing the grid item at this index.
    ObserveGridItem(usize),
}

#[derive(Debug, Clone, Copy)]
struct Pending {
    task: Task,
    due_ms: f64,
}

/// Pending task table keyed by id.
#[derive(Debug, Default)]
pub struct Scheduler {
    next_id: u64,
    clock_ms: f64,
    pending: BTreeMap<TaskId, Pending>,
}

impl Scheduler {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue `task` to run `delay_ms` from the scheduler's current time.
    pub fn schedule(&mut self, task: Task, delay_ms: f64) -> TaskId {
        let id = TaskId(self.next_id);
        self.next_id += 1;
        self.pending.insert(id, Pending { task, due_ms: self.clock_ms + delay_ms.max(0.0) });
        id
    }

    /// Remove a task before it runs. Returns `false` if it already ran or was cancelled.
    pub fn cancel(&mut self, id: TaskId) -> bool {
        self.pending.remove(&id).is_some()
    }

    /// Remove every pending task, returning their ids in order.
    pub fn cancel_all(&mut self) -> Vec<TaskId> {
        let ids = self.pending.keys().copied().collect();
        self.pending.clear();
        ids
    }

    /// Claim a task the host reports as fired.
    pub fn take(&mut self, id: TaskId) -> Option<Task> {
        self.pending.remove(&id).map(|p| p.task)
    }

    /// Move the virtual clock forward and claim everything now due,
    /// ordered by due time and then by id.
    pub fn advance(&mut self, elapsed_ms: f64) -> Vec<(TaskId, Task)> {
        self.clock_ms += elapsed_ms.max(0.0);
        let mut due = self
            .pending
            .iter()
            .filter(|(_, p)| p.due_ms <= self.clock_ms)
            .map(|(id, p)| (*id, p.task, p.due_ms))
            .collect::<Vec<_>>();
        due.sort_by(|a, b| a.2.total_cmp(&b.2).then(a.0.cmp(&b.0)));
        for (id, _, _) in &due {
            self.pending.remove(id);
        }
        due.into_iter().map(|(id, task, _)| (id, task)).collect()
    }

    #[must_use]
    pub fn is_pending(&self, id: TaskId) -> bool {
        self.pending.contains_key(&id)
    }

    #[must_use]
    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    /// Virtual time elapsed through [`Self::advance`].
    #[must_use]
    pub fn clock_ms(&self) -> f64 {
        self.clock_ms
    }
}

//! Regeneration stage for sequencing overlapping map requests.
//!
//! Following the stage pattern: Enqueue → Tick → Completions.
//!
//! The queue is single-slot: each request carries a monotonically
//! increasing generation counter, and enqueueing replaces any request that
//! has not started yet (latest wins). [`RegenStage::drain_latest`] keeps
//! only the newest completion; stale results are discarded rather than
//! cancelled, since each run is short-lived and deterministic.

use rayon::prelude::*;
use web_time::Instant;

use crate::pipeline::{generate_map, GeneratedMap};
use crate::types::{ConfigError, MapConfig};

/// Request to regenerate the map.
#[derive(Clone)]
pub struct RegenRequest {
  /// Generation counter value assigned at enqueue time.
  pub generation: u64,
  /// Generation parameters.
  pub config: MapConfig,
}

/// Completed regeneration result.
pub struct RegenCompletion {
  /// Generation this completion corresponds to.
  pub generation: u64,
  /// Pipeline output, or the configuration error that rejected the run.
  pub result: Result<GeneratedMap, ConfigError>,
  /// Raw pipeline time in microseconds.
  pub pipeline_time_us: u64,
}

/// Regeneration stage that processes the most recent request and publishes
/// only the newest result.
#[derive(Default)]
pub struct RegenStage {
  /// Single-slot pending queue; at most one request waits per tick.
  pending: Vec<RegenRequest>,
  /// Completed results ready to be collected.
  completed: Vec<RegenCompletion>,
  /// Next generation counter value.
  next_generation: u64,
}

impl RegenStage {
  /// Create a new regeneration stage.
  pub fn new() -> Self {
    Self::default()
  }

  /// Enqueue a regeneration request, returning its generation.
  ///
  /// Replaces any request that has not started yet; superseded requests
  /// are never executed.
  pub fn enqueue(&mut self, config: MapConfig) -> u64 {
    let generation = self.next_generation;
    self.next_generation += 1;

    self.pending.clear();
    self.pending.push(RegenRequest { generation, config });

    generation
  }

  /// Process the pending request off the main thread pool and move its
  /// completion to output. Returns the number of requests processed this
  /// tick.
  pub fn tick(&mut self) -> usize {
    if self.pending.is_empty() {
      return 0;
    }

    let requests = std::mem::take(&mut self.pending);
    let count = requests.len();

    let completions: Vec<RegenCompletion> = requests
      .into_par_iter()
      .map(|req| {
        let start = Instant::now();
        let result = generate_map(&req.config);
        let pipeline_time_us = start.elapsed().as_micros() as u64;
        RegenCompletion {
          generation: req.generation,
          result,
          pipeline_time_us,
        }
      })
      .collect();

    self.completed.extend(completions);
    count
  }

  /// Take the newest completion, discarding any stale ones.
  pub fn drain_latest(&mut self) -> Option<RegenCompletion> {
    let completions = std::mem::take(&mut self.completed);
    completions.into_iter().max_by_key(|c| c.generation)
  }

  /// Number of pending requests.
  pub fn pending_count(&self) -> usize {
    self.pending.len()
  }

  /// Number of completed results waiting to be drained.
  pub fn completed_count(&self) -> usize {
    self.completed.len()
  }

  /// True when no work remains.
  pub fn is_idle(&self) -> bool {
    self.pending.is_empty() && self.completed.is_empty()
  }
}

#[cfg(test)]
#[path = "task_queue_test.rs"]
mod task_queue_test;

use super::*;
use crate::types::MapSeed;

fn small_config(seed: u64) -> MapConfig {
  MapConfig::new(16, 16)
    .with_seed(MapSeed::Value(seed))
    .with_smooth_iterations(2)
}

#[test]
fn test_starts_idle() {
  let stage = RegenStage::new();
  assert!(stage.is_idle());
  assert_eq!(stage.pending_count(), 0);
  assert_eq!(stage.completed_count(), 0);
}

#[test]
fn test_tick_on_empty_queue_does_nothing() {
  let mut stage = RegenStage::new();
  assert_eq!(stage.tick(), 0);
  assert!(stage.drain_latest().is_none());
}

#[test]
fn test_enqueue_tick_drain() {
  let mut stage = RegenStage::new();
  let generation = stage.enqueue(small_config(7));
  assert_eq!(generation, 0);
  assert_eq!(stage.pending_count(), 1);

  assert_eq!(stage.tick(), 1);
  assert_eq!(stage.completed_count(), 1);

  let completion = stage.drain_latest().unwrap();
  assert_eq!(completion.generation, 0);
  let map = completion.result.unwrap();
  assert!(!map.mesh.is_empty());
  assert!(stage.is_idle());
}

#[test]
fn test_generations_are_monotonic() {
  let mut stage = RegenStage::new();
  assert_eq!(stage.enqueue(small_config(1)), 0);
  assert_eq!(stage.enqueue(small_config(2)), 1);
  assert_eq!(stage.enqueue(small_config(3)), 2);
}

#[test]
fn test_enqueue_replaces_unstarted_request() {
  // single-slot queue: a superseded request is dropped before it ever
  // runs, and only the newest generation executes
  let mut stage = RegenStage::new();
  stage.enqueue(small_config(1));
  stage.enqueue(small_config(2));
  let newest = stage.enqueue(small_config(3));

  assert_eq!(stage.pending_count(), 1);
  assert_eq!(stage.tick(), 1);
  assert_eq!(stage.completed_count(), 1);

  let completion = stage.drain_latest().unwrap();
  assert_eq!(completion.generation, newest);
  assert!(stage.is_idle());
}

#[test]
fn test_drain_latest_discards_stale_results() {
  // completions from earlier ticks go stale once a newer one lands
  let mut stage = RegenStage::new();
  stage.enqueue(small_config(1));
  stage.tick();
  let newest = stage.enqueue(small_config(2));
  stage.tick();
  assert_eq!(stage.completed_count(), 2);

  let completion = stage.drain_latest().unwrap();
  assert_eq!(completion.generation, newest);
  // stale completions are gone, not queued for later
  assert_eq!(stage.completed_count(), 0);
  assert!(stage.drain_latest().is_none());
}

#[test]
fn test_latest_result_matches_direct_generation() {
  let mut stage = RegenStage::new();
  stage.enqueue(small_config(1));
  stage.enqueue(small_config(42));
  stage.tick();

  let completion = stage.drain_latest().unwrap();
  let stage_map = completion.result.unwrap();

  let direct = crate::pipeline::generate_map(&small_config(42)).unwrap();
  assert_eq!(stage_map.grid, direct.grid);
  assert_eq!(stage_map.mesh, direct.mesh);
}

#[test]
fn test_invalid_config_surfaces_error_in_completion() {
  let mut stage = RegenStage::new();
  stage.enqueue(MapConfig::new(0, 16));
  stage.tick();

  let completion = stage.drain_latest().unwrap();
  assert!(completion.result.is_err());
}

#[test]
fn test_requests_enqueued_after_tick_run_next_tick() {
  let mut stage = RegenStage::new();
  stage.enqueue(small_config(1));
  assert_eq!(stage.tick(), 1);

  stage.enqueue(small_config(2));
  assert_eq!(stage.pending_count(), 1);
  assert_eq!(stage.tick(), 1);
  assert_eq!(stage.completed_count(), 2);

  let completion = stage.drain_latest().unwrap();
  assert_eq!(completion.generation, 1);
}

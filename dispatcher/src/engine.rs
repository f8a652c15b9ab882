use std::str::FromStr;
use std::sync::{Arc, Mutex};

use log::{debug, error, info};
use shared::errors::ConfigError;
use shared::models::canvas::CanvasSpec;
use shared::models::jobs::job::Job;
use shared::models::jobs::tile_result::TileResult;
use shared::models::tile::Tile;
use shared::networking::endpoint::Endpoint;
use shared::networking::fetch_tile;
use shared::networking::result::NetworkingResult;
use tokio::sync::mpsc;

use crate::error::{RenderError, RenderResult};

/// Pool tasks spawned per configured endpoint in pooled mode.
const TASKS_PER_ENDPOINT: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatchMode {
    /// One request at a time, in tile order. Reference/debug path.
    Sequential,
    /// Fixed task pool over a shared job queue. Completion order is
    /// nondeterministic; results are placed by their embedded origin.
    Pooled,
}

impl FromStr for DispatchMode {
    type Err = ConfigError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw {
            "sequential" => Ok(DispatchMode::Sequential),
            "pooled" => Ok(DispatchMode::Pooled),
            _ => Err(ConfigError::UnknownDispatchMode(raw.to_string())),
        }
    }
}

/// Sends every tile to an endpoint chosen by `index % endpoints.len()`
/// and returns once all results are in. Any transport failure fails the
/// whole render; there is no retry and no partial result.
pub async fn dispatch_all(
    spec: &CanvasSpec,
    tiles: &[Tile],
    endpoints: &[Endpoint],
    mode: DispatchMode,
) -> RenderResult<Vec<TileResult>> {
    if endpoints.is_empty() {
        return Err(ConfigError::NoEndpoints.into());
    }

    info!(
        "Dispatching {} tiles to {} endpoints ({:?})",
        tiles.len(),
        endpoints.len(),
        mode
    );
    match mode {
        DispatchMode::Sequential => dispatch_sequential(spec, tiles, endpoints).await,
        DispatchMode::Pooled => dispatch_pooled(spec, tiles, endpoints).await,
    }
}

async fn dispatch_sequential(
    spec: &CanvasSpec,
    tiles: &[Tile],
    endpoints: &[Endpoint],
) -> RenderResult<Vec<TileResult>> {
    let mut results = Vec::with_capacity(tiles.len());
    for (index, &tile) in tiles.iter().enumerate() {
        let endpoint = &endpoints[index % endpoints.len()];
        let result = fetch_tile(endpoint, &Job::new(spec, tile)).await?;
        results.push(result);
    }
    Ok(results)
}

async fn dispatch_pooled(
    spec: &CanvasSpec,
    tiles: &[Tile],
    endpoints: &[Endpoint],
) -> RenderResult<Vec<TileResult>> {
    let (job_tx, job_rx) = mpsc::channel::<(Endpoint, Job)>(tiles.len().max(1));
    let job_rx = Arc::new(tokio::sync::Mutex::new(job_rx));
    let results = Arc::new(Mutex::new(Vec::with_capacity(tiles.len())));

    let pool_size = endpoints.len() * TASKS_PER_ENDPOINT;
    let mut pool = Vec::with_capacity(pool_size);
    for _ in 0..pool_size {
        pool.push(tokio::spawn(run_pool_task(
            Arc::clone(&job_rx),
            Arc::clone(&results),
        )));
    }

    for (index, &tile) in tiles.iter().enumerate() {
        let endpoint = endpoints[index % endpoints.len()].clone();
        if job_tx.send((endpoint, Job::new(spec, tile))).await.is_err() {
            // Every pool task is already gone; the join below reports why.
            break;
        }
    }
    drop(job_tx);

    let barrier = async {
        let mut first_error = None;
        for handle in pool {
            match handle.await {
                Ok(Ok(())) => {}
                Ok(Err(e)) => {
                    error!("Pool task failed: {}", e);
                    if first_error.is_none() {
                        first_error = Some(e);
                    }
                }
                Err(e) => error!("Pool task died: {}", e),
            }
        }
        match first_error {
            Some(e) => Err(RenderError::Transport(e)),
            None => Ok(()),
        }
    };

    tokio::select! {
        outcome = barrier => outcome?,
        _ = tokio::signal::ctrl_c() => {
            info!("Interrupted, abandoning in-flight tiles");
            return Err(RenderError::Cancelled);
        }
    }

    // Every pool task has been joined, so this is the only handle left.
    let results = Arc::try_unwrap(results)
        .expect("pool tasks still hold the results collection")
        .into_inner()
        .unwrap();
    Ok(results)
}

async fn run_pool_task(
    job_rx: Arc<tokio::sync::Mutex<mpsc::Receiver<(Endpoint, Job)>>>,
    results: Arc<Mutex<Vec<TileResult>>>,
) -> NetworkingResult<()> {
    loop {
        // Hold the queue lock only while pulling the next job, never
        // across the request round-trip.
        let next = { job_rx.lock().await.recv().await };
        match next {
            Some((endpoint, job)) => {
                debug!(
                    "Fetching tile ({}, {}) from {}",
                    job.origin_x, job.origin_y, endpoint
                );
                let result = fetch_tile(&endpoint, &job).await?;
                results.lock().unwrap().push(result);
            }
            None => return Ok(()),
        }
    }
}

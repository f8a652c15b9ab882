use actix_web::dev::Server;
use actix_web::middleware::Logger;
use actix_web::{web, App, HttpRequest, HttpResponse, HttpServer, Responder};
use log::{debug, error, info};
use shared::models::jobs::job::Job;
use shared::networking::endpoint::Endpoint;

/// Handles one tile-compute request. The service is stateless: every
/// request carries the full canvas description, and a malformed one
/// fails alone without touching anything a later request depends on.
async fn compute_tile(req: HttpRequest) -> impl Responder {
    let job = match Job::from_path(req.path()) {
        Ok(job) => job,
        Err(e) => {
            error!("Rejecting job request {:?}: {}", req.path(), e);
            return HttpResponse::BadRequest().body(e.to_string());
        }
    };

    debug!(
        "Computing {}x{} tile at ({}, {})",
        job.tile_edge, job.tile_edge, job.origin_x, job.origin_y
    );
    let result = job.perform();
    HttpResponse::Ok().json(result.to_json())
}

/// Binds the worker service and hands back the server so callers can
/// decide how to drive it.
pub fn start_worker(endpoint: &Endpoint) -> std::io::Result<Server> {
    let server = HttpServer::new(|| {
        App::new()
            .wrap(Logger::default())
            .default_service(web::get().to(compute_tile))
    })
    .bind((endpoint.address.as_str(), endpoint.port))?
    .run();

    info!("Worker listening on {}", endpoint);
    Ok(server)
}

pub async fn run_worker(endpoint: &Endpoint) -> std::io::Result<()> {
    start_worker(endpoint)?.await
}

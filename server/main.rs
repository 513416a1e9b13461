mod config;

use actix_web::http::StatusCode;
use actix_web::{get, middleware, post, web, App, HttpResponse, HttpServer, ResponseError};
use metro_graph::{load_network_file, CsvImportConfig, GraphError, Itinerary, Route, RouteKind, SharedNetwork};
use serde::{Deserialize, Serialize};
use std::io;
use thiserror::Error;

use config::ServerConfig;

#[derive(Debug, Error)]
enum ApiError {
    #[error(transparent)]
    Graph(#[from] GraphError),
    #[error("station {0} is already closed")]
    AlreadyClosed(String),
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::Graph(GraphError::StationNotFound(_) | GraphError::SegmentNotFound { .. }) => StatusCode::NOT_FOUND,
            Self::Graph(GraphError::InvalidWeight(_)) => StatusCode::BAD_REQUEST,
            Self::AlreadyClosed(_) => StatusCode::CONFLICT,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ErrorBody {
            error: self.to_string(),
        })
    }
}

#[derive(Deserialize)]
struct RouteQuery {
    from: String,
    to: String,
    #[serde(default)]
    format: Option<String>,
}

#[derive(Serialize, Deserialize)]
struct RouteResponse {
    route: Option<Route>,
}

#[derive(Deserialize)]
struct DelayRequest {
    from: String,
    to: String,
    line: String,
    minutes: f64,
}

#[derive(Serialize, Deserialize)]
struct DelayResponse {
    delayed: usize,
}

#[derive(Deserialize)]
struct ClosureRequest {
    station: String,
}

fn route_response(network: &SharedNetwork, query: &RouteQuery, kind: RouteKind) -> Result<HttpResponse, ApiError> {
    let route = network.compute_route(kind, &query.from, &query.to)?;

    if query.format.as_deref() == Some("text") {
        let body = match &route {
            Some(route) => Itinerary::from_route(kind, route).to_string(),
            None => Itinerary::no_route_message(kind, &query.from, &query.to),
        };
        return Ok(HttpResponse::Ok().content_type("text/plain; charset=utf-8").body(body));
    }

    Ok(HttpResponse::Ok().json(RouteResponse { route }))
}

#[get("/stations")]
async fn stations(network: web::Data<SharedNetwork>) -> HttpResponse {
    HttpResponse::Ok().json(network.stations())
}

#[get("/route/fastest")]
async fn fastest(network: web::Data<SharedNetwork>, query: web::Query<RouteQuery>) -> Result<HttpResponse, ApiError> {
    route_response(&network, &query, RouteKind::Fastest)
}

#[get("/route/fewest-changes")]
async fn fewest_changes(
    network: web::Data<SharedNetwork>,
    query: web::Query<RouteQuery>,
) -> Result<HttpResponse, ApiError> {
    route_response(&network, &query, RouteKind::FewestChanges)
}

#[post("/delays")]
async fn add_delay(network: web::Data<SharedNetwork>, request: web::Json<DelayRequest>) -> Result<HttpResponse, ApiError> {
    let delayed = network.apply_delay(&request.from, &request.to, &request.line, request.minutes)?;
    Ok(HttpResponse::Ok().json(DelayResponse { delayed }))
}

#[post("/closures")]
async fn add_closure(
    network: web::Data<SharedNetwork>,
    request: web::Json<ClosureRequest>,
) -> Result<HttpResponse, ApiError> {
    if network.apply_closure(&request.station)? {
        Ok(HttpResponse::NoContent().finish())
    } else {
        Err(ApiError::AlreadyClosed(request.station.clone()))
    }
}

fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(stations)
        .service(fastest)
        .service(fewest_changes)
        .service(add_delay)
        .service(add_closure);
}

#[actix_web::main]
async fn main() -> io::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = ServerConfig::from_env();

    let graph = load_network_file(&config.network_csv, &CsvImportConfig::default())
        .map_err(|err| io::Error::new(io::ErrorKind::InvalidData, err))?;
    log::info!(
        "Loaded {} stations and {} connections from {}",
        graph.station_count(),
        graph.connection_count(),
        config.network_csv.display()
    );

    let network = web::Data::new(SharedNetwork::new(graph));

    log::info!("Starting server on {}:{}", config.bind_address, config.port);

    HttpServer::new(move || {
        App::new()
            .app_data(network.clone())
            .wrap(middleware::Compress::default())
            .wrap(middleware::Logger::default())
            .configure(configure)
    })
    .bind((config.bind_address.as_str(), config.port))?
    .run()
    .await
}

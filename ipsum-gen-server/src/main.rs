use actix_web::error::{InternalError, QueryPayloadError};
use actix_web::http::header;
use actix_web::middleware::Logger;
use actix_web::{get, web, App, HttpResponse, HttpServer, Responder};
use clap::Parser;

use ipsum_gen_core::api::GenerateQuery;
use ipsum_gen_core::model::theme::{themes, ThemeSummary};

/// Generated text only depends on the query string, so responses can be cached.
const CACHE_CONTROL: &str = "public, max-age=3600";

/// Command-line and environment configuration of the server.
#[derive(Parser, Debug)]
#[command(version, about = "HTTP API serving deterministic placeholder text")]
struct Args {
	/// Address to bind
	#[arg(long, env = "IPSUM_GEN_HOST", default_value = "127.0.0.1")]
	host: String,

	/// Port to bind
	#[arg(long, env = "IPSUM_GEN_PORT", default_value_t = 5000)]
	port: u16,
}

/// Answers query strings that cannot be read at all (such as a repeated
/// key) with the same plain-text 400 as a rejected parameter.
fn query_config() -> web::QueryConfig {
	web::QueryConfig::default().error_handler(|err, _req| {
		let message = match &err {
			QueryPayloadError::Deserialize(inner) => format!("Invalid query: {inner}"),
			other => format!("Invalid query: {other}"),
		};
		log::debug!("Rejected generate request: {message}");
		InternalError::from_response(err, HttpResponse::BadRequest().body(message)).into()
	})
}

/// HTTP GET endpoint `/api/generate`
///
/// Validates the query parameters and returns the generated text as JSON.
/// Invalid parameters are answered with a 400 naming the parameter.
#[get("/api/generate")]
async fn get_generated(query: web::Query<GenerateQuery>) -> impl Responder {
	let request = match query.validate() {
		Ok(request) => request,
		Err(e) => {
			log::debug!("Rejected generate request: {e}");
			return HttpResponse::BadRequest().body(e.to_string());
		}
	};

	HttpResponse::Ok()
		.insert_header((header::CACHE_CONTROL, CACHE_CONTROL))
		.json(request.render())
}

/// HTTP GET endpoint `/api/themes`
///
/// Lists the available themes (id, label, icon) in display order.
#[get("/api/themes")]
async fn get_themes() -> impl Responder {
	let summaries: Vec<ThemeSummary> = themes().iter().map(|theme| theme.summary()).collect();
	HttpResponse::Ok()
		.insert_header((header::CACHE_CONTROL, CACHE_CONTROL))
		.json(summaries)
}

/// Main entry point for the server.
///
/// Theme data is static and generation is pure, so handlers share no
/// state and need no locking.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
	env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
	let args = Args::parse();

	log::info!("Listening on {}:{}", args.host, args.port);

	HttpServer::new(|| {
		App::new()
			.wrap(Logger::default())
			.app_data(query_config())
			.service(get_generated)
			.service(get_themes)
	})
		.bind((args.host.as_str(), args.port))?
		.run()
		.await
}

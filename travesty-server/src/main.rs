use std::sync::atomic::AtomicBool;

use actix_cors::Cors;
use actix_web::middleware::Logger;
use actix_web::{App, HttpResponse, HttpServer, Responder, get, post, web};
use env_logger::Env;
use log::warn;
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::Deserialize;

use travesty_core::text::paragraph::ParagraphPolicy;
use travesty_core::{Settings, TravestyError, travesty};

/// Default listen address, overridden by `TRAVESTY_BIND`.
const DEFAULT_BIND: &str = "127.0.0.1:5000";

/// Largest source text accepted in a request body.
const MAX_SOURCE_BYTES: usize = 8 * 1024 * 1024;

/// Largest output size a request may ask for, in percent of its body.
const MAX_REQUEST_SIZE_PERCENT: u32 = 1_000;

/// Struct representing query parameters for the `/v1/travesty` endpoint
#[derive(Deserialize, Default)]
struct TravestyParams {
	granularity: Option<String>,
	depth: Option<usize>,
	size: Option<u32>,
	paragraph_period: Option<i64>,
	exact_paragraphs: Option<bool>,
	format: Option<bool>,
	scrub: Option<bool>,
	seed: Option<u64>,
}

impl TravestyParams {
	/// Overlays the query parameters on the server defaults.
	fn settings(&self, defaults: &Settings) -> Result<Settings, TravestyError> {
		let mut settings = defaults.clone();
		if let Some(granularity) = &self.granularity {
			settings.granularity = granularity.parse()?;
		}
		if let Some(depth) = self.depth {
			settings.depth = depth;
		}
		if let Some(size) = self.size {
			if size > MAX_REQUEST_SIZE_PERCENT {
				return Err(TravestyError::InvalidConfig(format!(
					"size must be at most {MAX_REQUEST_SIZE_PERCENT} percent, got {size}"
				)));
			}
			settings.size_percent = size;
		}
		if let Some(period) = self.paragraph_period {
			settings.paragraph_period = period;
		}
		if self.exact_paragraphs == Some(true) {
			settings.paragraph_policy = ParagraphPolicy::Exact;
		}
		if let Some(format) = self.format {
			settings.format = format;
		}
		if let Some(scrub) = self.scrub {
			settings.scrub = scrub;
		}
		if self.seed.is_some() {
			settings.seed = self.seed;
		}
		settings.validate()?;
		Ok(settings)
	}
}

/// Maps a failed run to a status: the caller's text or parameters are at
/// fault for everything but I/O.
fn error_response(error: TravestyError) -> HttpResponse {
	let message = format!("{} failed: {error}", error.phase());
	match error {
		TravestyError::Read { .. } | TravestyError::Write { .. } => {
			warn!("{message}");
			HttpResponse::InternalServerError().body(message)
		}
		_ => HttpResponse::BadRequest().body(message),
	}
}

/// HTTP POST endpoint `/v1/travesty`
///
/// Trains a table on the request body and returns a travesty of it.
/// The table only lives for the duration of the request.
#[post("/v1/travesty")]
async fn post_travesty(defaults: web::Data<Settings>, query: web::Query<TravestyParams>, body: String) -> impl Responder {
	let settings = match query.settings(&defaults) {
		Ok(s) => s,
		Err(e) => return error_response(e),
	};

	// The walk is CPU bound: keep it off the async workers
	let run = web::block(move || {
		let mut rng = match settings.seed {
			Some(seed) => StdRng::seed_from_u64(seed),
			None => StdRng::from_os_rng(),
		};
		// Requests are never interrupted
		let stop = AtomicBool::new(false);
		travesty(&body, &settings, &mut rng, &stop)
	})
	.await;

	match run {
		Ok(Ok(result)) => HttpResponse::Ok().content_type("text/plain; charset=utf-8").body(result.text),
		Ok(Err(e)) => error_response(e),
		Err(e) => {
			warn!("generate failed: {e}");
			HttpResponse::InternalServerError().body(format!("generate failed: {e}"))
		}
	}
}

/// HTTP GET endpoint `/v1/settings`
///
/// Returns the defaults applied to parameters missing from a request.
#[get("/v1/settings")]
async fn get_settings(defaults: web::Data<Settings>) -> impl Responder {
	HttpResponse::Ok().json(defaults.get_ref())
}

/// Registers the endpoints and their shared data.
fn configure(cfg: &mut web::ServiceConfig) {
	cfg.app_data(web::Data::new(Settings::default()))
		.app_data(web::PayloadConfig::new(MAX_SOURCE_BYTES))
		.service(post_travesty)
		.service(get_settings);
}

/// Main entry point for the server.
///
/// Binds to `TRAVESTY_BIND` (default 127.0.0.1:5000) with permissive CORS
/// and request logging through `env_logger`.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
	env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();
	let bind = std::env::var("TRAVESTY_BIND").unwrap_or_else(|_| DEFAULT_BIND.to_owned());

	HttpServer::new(|| {
		App::new()
			.wrap(Logger::default())
			.wrap(Cors::permissive())
			.configure(configure)
	})
		.bind(bind)?
		.run()
		.await
}

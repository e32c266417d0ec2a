use std::sync::{Arc, Mutex};

use actix_web::dev::ServerHandle;
use actix_web::http::StatusCode;
use actix_web::{App, HttpRequest, HttpResponse, HttpServer, web};
use pesapal_proxy::infrastructure::gateway::pesapal_gateway::{
	REQUEST_TOKEN_PATH, SUBMIT_ORDER_PATH,
};

#[derive(Debug, Clone)]
pub struct Reply {
	pub status: u16,
	pub body:   String,
}

impl Reply {
	pub fn json(status: u16, body: serde_json::Value) -> Self {
		Self {
			status,
			body: body.to_string(),
		}
	}

	pub fn text(status: u16, body: &str) -> Self {
		Self {
			status,
			body: body.to_string(),
		}
	}
}

#[derive(Debug, Clone)]
pub struct RecordedRequest {
	pub path:          String,
	pub accept:        Option<String>,
	pub content_type:  Option<String>,
	pub authorization: Option<String>,
	pub body:          serde_json::Value,
}

struct FakePesapalState {
	token_reply: Reply,
	order_reply: Reply,
	requests:    Arc<Mutex<Vec<RecordedRequest>>>,
}

/// Pesapal stand-in served by actix-web on an ephemeral local port.
pub struct FakePesapal {
	pub base_url: String,
	requests:     Arc<Mutex<Vec<RecordedRequest>>>,
	handle:       ServerHandle,
}

impl FakePesapal {
	pub async fn start(token_reply: Reply, order_reply: Reply) -> Self {
		let requests = Arc::new(Mutex::new(Vec::new()));
		let state = web::Data::new(FakePesapalState {
			token_reply,
			order_reply,
			requests: requests.clone(),
		});

		let server = HttpServer::new(move || {
			App::new()
				.app_data(state.clone())
				.route(REQUEST_TOKEN_PATH, web::post().to(request_token))
				.route(SUBMIT_ORDER_PATH, web::post().to(submit_order))
		})
		.workers(1)
		.bind(("127.0.0.1", 0))
		.unwrap();

		let addr = server.addrs()[0];
		let server = server.run();
		let handle = server.handle();
		actix_web::rt::spawn(server);

		Self {
			base_url: format!("http://{addr}"),
			requests,
			handle,
		}
	}

	pub fn requests(&self) -> Vec<RecordedRequest> {
		self.requests.lock().unwrap().clone()
	}

	pub async fn stop(self) {
		self.handle.stop(false).await;
	}
}

fn header(req: &HttpRequest, name: &str) -> Option<String> {
	req.headers()
		.get(name)
		.and_then(|value| value.to_str().ok())
		.map(str::to_string)
}

fn record(req: &HttpRequest, body: &web::Bytes, state: &FakePesapalState) {
	state.requests.lock().unwrap().push(RecordedRequest {
		path:          req.path().to_string(),
		accept:        header(req, "Accept"),
		content_type:  header(req, "Content-Type"),
		authorization: header(req, "Authorization"),
		body:          serde_json::from_slice(body).unwrap_or(serde_json::Value::Null),
	});
}

fn respond(reply: &Reply) -> HttpResponse {
	HttpResponse::build(StatusCode::from_u16(reply.status).unwrap())
		.content_type("application/json")
		.body(reply.body.clone())
}

async fn request_token(
	req: HttpRequest,
	body: web::Bytes,
	state: web::Data<FakePesapalState>,
) -> HttpResponse {
	record(&req, &body, &state);
	respond(&state.token_reply)
}

async fn submit_order(
	req: HttpRequest,
	body: web::Bytes,
	state: web::Data<FakePesapalState>,
) -> HttpResponse {
	record(&req, &body, &state);
	respond(&state.order_reply)
}

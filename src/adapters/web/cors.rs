use actix_web::HttpResponseBuilder;

/// Headers attached to every proxy response, the empty preflight included.
pub const CORS_HEADERS: [(&str, &str); 4] = [
	("Access-Control-Allow-Origin", "*"),
	("Access-Control-Allow-Headers", "Content-Type"),
	("Access-Control-Allow-Methods", "POST, OPTIONS"),
	("Content-Type", "application/json"),
];

pub fn with_cors(mut builder: HttpResponseBuilder) -> HttpResponseBuilder {
	for header in CORS_HEADERS {
		builder.insert_header(header);
	}
	builder
}

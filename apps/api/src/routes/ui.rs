use axum::response::Html;

/// GET /
/// Serves the embedded single-page shell. No server-side templating — the
/// page drives the JSON API with fetch calls and holds the generated result
/// between the generate call and the PDF download call.
pub async fn index_handler() -> Html<&'static str> {
    Html(include_str!("../../assets/index.html"))
}

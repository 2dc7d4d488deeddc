// SPDX-License-Identifier: Apache-2.0

use crate::AppState;
use axum::body::Body;
use axum::extract::{Path, State};
use axum::http::{HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use serieteca_model::Serie;

fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

fn html_response(status: StatusCode, html: String) -> Response {
    let mut resp = Response::new(Body::from(html));
    *resp.status_mut() = status;
    resp.headers_mut().insert(
        "content-type",
        HeaderValue::from_static("text/html; charset=utf-8"),
    );
    resp
}

fn page(title: &str, body: &str) -> String {
    format!(
        "<!doctype html><html><head><meta charset=\"utf-8\"><title>{title}</title></head><body>{body}</body></html>"
    )
}

fn nombre_html(serie: &Serie) -> String {
    escape_html(serie.nombre.as_deref().unwrap_or("(sin nombre)"))
}

fn fecha_html(serie: &Serie) -> String {
    serie
        .fecha_estreno
        .map_or_else(|| "-".to_string(), |fecha| fecha.to_string())
}

pub(crate) async fn index_handler() -> Response {
    let body = format!(
        "<h1>Hola mundo</h1>\
<p>Serieteca <code>{}</code></p>\
<ul>\
<li><a href=\"/series\">/series</a></li>\
<li><a href=\"/api/series\">/api/series</a></li>\
</ul>",
        env!("CARGO_PKG_VERSION")
    );
    html_response(StatusCode::OK, page("Serieteca", &body))
}

pub(crate) async fn series_index_handler(State(state): State<AppState>) -> Response {
    let series = state.store.list().await;
    let mut rows = String::new();
    for serie in &series {
        let id = serie.id.unwrap_or_default();
        rows.push_str(&format!(
            "<tr><td><a href=\"/series/{id}\">{id}</a></td><td>{}</td><td>{}</td></tr>",
            nombre_html(serie),
            fecha_html(serie)
        ));
    }
    if rows.is_empty() {
        rows.push_str("<tr><td colspan=\"3\">No hay series todavia.</td></tr>");
    }
    let body = format!(
        "<h1>Series</h1>\
<table><thead><tr><th>Id</th><th>Nombre</th><th>Estreno</th></tr></thead>\
<tbody>{rows}</tbody></table>"
    );
    html_response(StatusCode::OK, page("Series", &body))
}

pub(crate) async fn serie_detail_handler(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Response {
    match state.store.find_by_id(id).await {
        Some(serie) => {
            let body = format!(
                "<h1>{}</h1>\
<ul><li>Id: <code>{id}</code></li><li>Estreno: {}</li></ul>\
<p><a href=\"/series\">Volver</a></p>",
                nombre_html(&serie),
                fecha_html(&serie)
            );
            html_response(StatusCode::OK, page("Serie", &body))
        }
        None => {
            let body = format!(
                "<h1>Serie no encontrada</h1>\
<p>No hay serie con id <code>{id}</code>.</p>\
<p><a href=\"/series\">Volver</a></p>"
            );
            html_response(StatusCode::NOT_FOUND, page("Serie no encontrada", &body))
        }
    }
}

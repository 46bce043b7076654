// Shared test helpers: mock directory service and proxy fixtures.
//
// Both services are served by one `httptest` server; the directory lives under
// `/api` and the proxy answers on `/get`.

use httptest::{matchers::*, responders::*, Expectation, Server};
use serde_json::json;

use city_holidays::Config;

/// Holiday page as served by the holiday site.
#[allow(dead_code)] // Used by other test files
pub const HOLIDAY_PAGE: &str = r#"<!DOCTYPE html>
<html><head><title>Feriados 2026</title></head>
<body>
  <ul class="multi-column">
    <li><span>01/01 - Confraternização Universal</span></li>
    <li><span class="style_lista_facultativos">25/01 - Aniversário da cidade - Edição especial</span></li>
    <li><div>propaganda</div></li>
    <li><span>25/12 - Natal</span></li>
  </ul>
</body></html>"#;

/// Config pointing every endpoint at the mock server.
#[allow(dead_code)] // Used by other test files
pub fn config_for(server: &Server) -> Config {
    Config {
        directory_url: format!("http://{}/api", server.addr()),
        proxy_url: format!("http://{}/get", server.addr()),
        site_url: "https://www.feriados.com.br".to_string(),
        timeout_seconds: 5,
        ..Default::default()
    }
}

/// Serves the region list (unsorted, the way the directory returns it).
#[allow(dead_code)] // Used by other test files
pub fn expect_regions(server: &Server) {
    server.expect(
        Expectation::matching(request::method_path("GET", "/api/estados")).respond_with(
            json_encoded(json!([
                {"id": 35, "sigla": "SP", "nome": "São Paulo"},
                {"id": 12, "sigla": "AC", "nome": "Acre"},
                {"id": 33, "sigla": "RJ", "nome": "Rio de Janeiro"}
            ])),
        ),
    );
}

/// Serves the districts of SP.
#[allow(dead_code)] // Used by other test files
pub fn expect_sp_districts(server: &Server) {
    server.expect(
        Expectation::matching(request::method_path("GET", "/api/estados/sp/distritos"))
            .respond_with(json_encoded(json!([
                {"id": 355030805, "nome": "São Paulo"},
                {"id": 354850205, "nome": "Santos"},
                {"id": 350010905, "nome": "Águas de São Pedro"},
                {"id": 350950205, "nome": "Campinas"}
            ]))),
    );
}

/// Serves `body` as the proxied page when the proxy is asked for `target`.
#[allow(dead_code)] // Used by other test files
pub fn expect_proxied_page(server: &Server, target: &str, body: &str) {
    server.expect(
        Expectation::matching(all_of![
            request::method_path("GET", "/get"),
            request::query(url_decoded(contains(("url", target.to_string())))),
        ])
        .respond_with(json_encoded(json!({
            "contents": body,
            "status": {"url": target, "http_code": 200}
        }))),
    );
}

//! Fetch tests against a throwaway `tiny_http` server on a random port.

use std::net::TcpListener;
use std::time::Duration;

use pretty_assertions::assert_eq;
use recon_config::SourceConfig;
use recon_core::{Driver, RecordKey, Section, Vehicle};
use recon_source::{FetchError, SourceClient};

type Route = (&'static str, i32, &'static str);

/// Serve fixed bodies by path until the test process exits.
fn serve(routes: Vec<Route>) -> String {
    let server = tiny_http::Server::http("127.0.0.1:0").expect("bind test server");
    let port = server
        .server_addr()
        .to_ip()
        .map(|a| a.port())
        .expect("test server has an ip address");

    std::thread::spawn(move || {
        for request in server.incoming_requests() {
            let (status, body) = routes
                .iter()
                .find(|(path, ..)| *path == request.url())
                .map_or((404, "not found"), |(_, status, body)| (*status, *body));
            let _ = request.respond(tiny_http::Response::from_string(body).with_status_code(status));
        }
    });

    format!("http://127.0.0.1:{port}")
}

/// Accept every request but answer only after `delay`.
fn serve_slowly(delay: Duration) -> String {
    let server = tiny_http::Server::http("127.0.0.1:0").expect("bind test server");
    let port = server
        .server_addr()
        .to_ip()
        .map(|a| a.port())
        .expect("test server has an ip address");

    std::thread::spawn(move || {
        for request in server.incoming_requests() {
            std::thread::sleep(delay);
            let _ = request.respond(tiny_http::Response::from_string(r#"{"data":[]}"#));
        }
    });

    format!("http://127.0.0.1:{port}")
}

fn client(base_url: String) -> SourceClient {
    SourceClient::new(&SourceConfig {
        base_url,
        timeout_secs: 5,
    })
    .expect("client builds")
}

fn healthy_routes() -> Vec<Route> {
    vec![
        (
            "/api/data/section/drivers",
            200,
            r#"{"data":[{"id":"D1","name":"Ana"},{"id":"D3","first_name":"Luis","last_name":"Gómez"}]}"#,
        ),
        (
            "/api/data/section/vehicles",
            200,
            r#"{"data":[{"id":"V1","brand":"Toyota","model":"Hiace","plate":"ABC-123"}]}"#,
        ),
        (
            "/api/data/section/reservations",
            200,
            r#"{"data":[{"id":"R1","driver_id":"D1","vehicle_id":"V1"},{"id":"R2","driver_id":"D99"}]}"#,
        ),
    ]
}

#[tokio::test]
async fn fetches_single_section() {
    let client = client(serve(healthy_routes()));
    let drivers: Vec<Driver> = client.fetch_collection(Section::Drivers).await.unwrap();
    assert_eq!(drivers.len(), 2);
    assert_eq!(drivers[1].id, Some(RecordKey::text("D3")));
}

#[tokio::test]
async fn fetches_all_sections_in_server_order() {
    let client = client(serve(healthy_routes()));
    let data = client.fetch_all().await.unwrap();
    assert_eq!(data.drivers.len(), 2);
    assert_eq!(data.vehicles.len(), 1);
    let ids: Vec<String> = data
        .reservations
        .iter()
        .filter_map(|r| r.id.as_ref().map(ToString::to_string))
        .collect();
    assert_eq!(ids, vec!["R1", "R2"]);
}

#[tokio::test]
async fn server_error_on_one_section_fails_the_run() {
    let mut routes = healthy_routes();
    routes[1] = ("/api/data/section/vehicles", 500, "boom");
    let client = client(serve(routes));

    let err = client.fetch_all().await.unwrap_err();
    assert!(matches!(
        err,
        FetchError::Api {
            section: Section::Vehicles,
            status: 500,
            ..
        }
    ));
}

#[tokio::test]
async fn malformed_body_is_parse_error() {
    let mut routes = healthy_routes();
    routes[2] = ("/api/data/section/reservations", 200, "{\"data\": [");
    let client = client(serve(routes));

    let err = client.fetch_all().await.unwrap_err();
    assert_eq!(err.section(), Some(Section::Reservations));
    assert!(matches!(err, FetchError::Parse { .. }));
}

#[tokio::test]
async fn connection_refused_is_transport_error() {
    // Reserve a port, then release it so nothing is listening there.
    let port = {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap().port()
    };
    let client = client(format!("http://127.0.0.1:{port}"));

    let err = client
        .fetch_collection::<Driver>(Section::Vehicles)
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        FetchError::Transport {
            section: Section::Vehicles,
            ..
        }
    ));
    assert!(err.to_string().starts_with("failed to fetch vehicles"));
}

#[tokio::test]
async fn slow_section_times_out_as_transport_error() {
    let client = SourceClient::new(&SourceConfig {
        base_url: serve_slowly(Duration::from_secs(3)),
        timeout_secs: 1,
    })
    .expect("client builds");

    let err = client
        .fetch_collection::<Vehicle>(Section::Vehicles)
        .await
        .unwrap_err();
    match err {
        FetchError::Transport { section, source } => {
            assert_eq!(section, Section::Vehicles);
            assert!(source.is_timeout(), "expected a timeout, got {source}");
        }
        other => panic!("expected Transport error, got {other:?}"),
    }
}

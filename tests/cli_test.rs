use httpmock::prelude::*;
use std::net::TcpListener;
use std::process::{Command, Output};

fn run(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_privat-rates"))
        .args(args)
        .env("RUST_LOG", "off")
        .output()
        .expect("failed to launch privat-rates")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).to_string()
}

#[test]
fn test_no_arguments_prints_usage() {
    let output = run(&[]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stdout(&output).contains("Usage: privat-rates <number_of_days>"));
}

#[test]
fn test_extra_arguments_print_usage() {
    let output = run(&["2", "3"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stdout(&output).contains("Usage: privat-rates <number_of_days>"));
}

#[test]
fn test_out_of_range_days_are_rejected() {
    for days in ["0", "11", "-1"] {
        let output = run(&[days]);
        assert_eq!(output.status.code(), Some(1), "days = {days}");
        assert!(
            stdout(&output).contains("Number of days must be between 1 and 10."),
            "days = {days}"
        );
    }
}

#[test]
fn test_non_integer_days_are_rejected() {
    let output = run(&["abc"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stdout(&output).contains("must be an integer"));
}

#[test]
fn test_prints_results_as_json() {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(GET).path("/p24api/exchange_rates");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!({
                "exchangeRate": [
                    {"currency": "USD", "saleRate": 41.3, "purchaseRate": 40.8},
                    {"currency": "GBP", "saleRate": 52.0, "purchaseRate": 51.0}
                ]
            }));
    });

    let base_url = server.url("/p24api/exchange_rates?date=");
    let output = run(&["2", "--base-url", &base_url]);

    assert_eq!(output.status.code(), Some(0));
    api_mock.assert_hits(2);

    let results: serde_json::Value = serde_json::from_str(stdout(&output).trim()).unwrap();
    let days = results.as_array().unwrap();
    assert_eq!(days.len(), 2);
    for day in days {
        let (_, rates) = day.as_object().unwrap().iter().next().unwrap();
        assert_eq!(
            rates,
            &serde_json::json!({"EUR": {}, "USD": {"sale": 41.3, "purchase": 40.8}})
        );
    }
}

#[test]
fn test_reads_base_url_from_config_file() {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(GET).path("/rates");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!({"exchangeRate": []}));
    });

    let temp_dir = tempfile::TempDir::new().unwrap();
    let config_path = temp_dir.path().join("rates.toml");
    std::fs::write(
        &config_path,
        format!("[source]\nbase_url = \"{}\"\n", server.url("/rates?date=")),
    )
    .unwrap();

    let output = run(&["1", "--config", config_path.to_str().unwrap()]);

    assert_eq!(output.status.code(), Some(0));
    api_mock.assert();
    assert!(stdout(&output).contains("{\"EUR\":{},\"USD\":{}}"));
}

#[test]
fn test_malformed_response_exits_without_output() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/p24api/exchange_rates");
        then.status(200)
            .header("Content-Type", "application/json")
            .body("not json at all");
    });

    let base_url = server.url("/p24api/exchange_rates?date=");
    let output = run(&["3", "--base-url", &base_url]);

    assert_eq!(output.status.code(), Some(1));
    assert!(stdout(&output).trim().is_empty());
}

#[test]
fn test_invalid_base_url_is_a_config_error() {
    let output = run(&["1", "--base-url", "ftp://example.com/rates?date="]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stdout(&output).trim().is_empty());
}

#[test]
fn test_transport_errors_are_logged_to_stderr_only() {
    let port = TcpListener::bind("127.0.0.1:0")
        .unwrap()
        .local_addr()
        .unwrap()
        .port();
    let base_url = format!("http://127.0.0.1:{}/r?date=", port);

    let output = Command::new(env!("CARGO_BIN_EXE_privat-rates"))
        .args(["2", "--base-url", &base_url])
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to launch privat-rates");

    assert_eq!(output.status.code(), Some(0));

    let results: serde_json::Value = serde_json::from_str(stdout(&output).trim()).unwrap();
    let days = results.as_array().unwrap();
    assert_eq!(days.len(), 2);
    for day in days {
        let (_, value) = day.as_object().unwrap().iter().next().unwrap();
        assert_eq!(value, "Error fetching data");
    }

    let log = stderr(&output);
    for day in days {
        let date = day.as_object().unwrap().keys().next().unwrap();
        assert!(
            log.contains(&format!("Error fetching data for {}", date)),
            "stderr: {log}"
        );
    }
    assert!(!stdout(&output).contains("WARN"));
}

use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use serde_json::json;
use std::fs;

mod common;
use common::{StubServer, TestEnv, expired_token, fresh_token};

/// Far enough ahead that no slot is ever in the past.
const FUTURE_DAY: &str = "2099-03-04";

fn courts_json() -> serde_json::Value {
    json!([{
        "_id": "c1", "name": "Cancha 1", "color": "#1976D2",
        "pricing": { "sixAM": 100, "sevenToFifteen": 120, "sixteenToTwentyOne": 1500,
                     "twentyTwo": 130, "twentyThree": 110 }
    }])
}

fn booking_json(id: &str, date: &str, slot: &str, client: &str) -> serde_json::Value {
    json!({
        "_id": id, "court": "c1", "date": date, "timeSlot": slot,
        "clientName": client, "deposit": 0, "status": "No llegó"
    })
}

#[test]
fn test_init_and_config_check() {
    let env = TestEnv::new();

    env.cmd()
        .args(["--api-url", "http://example.test/api", "init"])
        .assert()
        .success()
        .stdout(contains("initialization completed"));

    let conf = common::read(&env.config_dir().join("courtbook.conf"));
    assert!(conf.contains("api_url: http://example.test/api"));

    env.cmd()
        .args(["config", "--check"])
        .assert()
        .success()
        .stdout(contains("up to date"));

    // a second init refuses to overwrite
    env.cmd().arg("init").assert().failure().stderr(contains("--force"));
}

#[test]
fn test_config_migrate_adds_missing_fields() {
    let env = TestEnv::new();
    fs::create_dir_all(env.config_dir()).unwrap();
    let path = env.config_dir().join("courtbook.conf");
    fs::write(&path, "api_url: http://old.test/api\n").unwrap();

    env.cmd()
        .args(["config", "--check"])
        .assert()
        .success()
        .stdout(contains("rows_per_page"));

    env.cmd()
        .args(["config", "--migrate"])
        .assert()
        .success()
        .stdout(contains("migrated"));

    let conf = common::read(&path);
    assert!(conf.contains("api_url: http://old.test/api"));
    assert!(conf.contains("rows_per_page: 10"));
    assert!(conf.contains("log_level: warn"));
}

#[test]
fn test_whoami_without_session() {
    let env = TestEnv::new();
    env.cmd()
        .arg("whoami")
        .assert()
        .success()
        .stdout(contains("Not logged in"));
}

#[test]
fn test_login_stores_token() {
    let server = StubServer::start();
    let token = fresh_token("admin");
    server.route("POST", "/auth/login", 200, json!({ "token": token }));
    let env = TestEnv::new();

    env.cmd_with(&server)
        .args(["login", "ana@example.com", "--password", "secret"])
        .assert()
        .success()
        .stdout(contains("Logged in as Ana (admin)"));

    assert_eq!(common::read(&env.token_path()), token);

    env.cmd()
        .arg("whoami")
        .assert()
        .success()
        .stdout(contains("ana@example.com").and(contains("admin")));

    env.cmd().arg("logout").assert().success().stdout(contains("Logged out"));
    assert!(!env.token_path().exists());
}

#[test]
fn test_wrong_password_shows_server_message() {
    let server = StubServer::start();
    server.route("POST", "/auth/login", 400, json!({ "msg": "Invalid credentials" }));
    let env = TestEnv::new();

    env.cmd_with(&server)
        .args(["login", "ana@example.com", "--password", "nope"])
        .assert()
        .failure()
        .stderr(contains("Invalid credentials"));
}

#[test]
fn test_failed_login_keeps_saved_session() {
    let server = StubServer::start();
    server.route("POST", "/auth/login", 400, json!({ "msg": "Invalid credentials" }));
    let env = TestEnv::new();
    let token = fresh_token("admin");
    env.store_token(&token);

    env.cmd_with(&server)
        .args(["login", "ana@example.com", "--password", "nope"])
        .assert()
        .failure()
        .stderr(contains("Invalid credentials"));

    assert!(env.token_path().exists());
    assert_eq!(common::read(&env.token_path()), token);

    env.cmd()
        .arg("whoami")
        .assert()
        .success()
        .stdout(contains("ana@example.com"));
}

#[test]
fn test_grid_requires_login() {
    let env = TestEnv::new();
    env.cmd()
        .args(["grid", "c1"])
        .assert()
        .failure()
        .stderr(contains("Not logged in"));
}

#[test]
fn test_expired_session_is_cleared() {
    let server = StubServer::start();
    server.route("GET", "/courts", 200, courts_json());
    let env = TestEnv::new();
    env.store_token(&expired_token("regular"));

    env.cmd_with(&server)
        .args(["grid", "Cancha 1"])
        .assert()
        .failure()
        .stdout(contains("session has expired"));

    assert!(!env.token_path().exists());
    assert!(server.requests().is_empty());
}

#[test]
fn test_grid_shows_week() {
    let server = StubServer::start();
    server.route("GET", "/courts", 200, courts_json());
    server.route(
        "GET",
        "/bookings/court/c1/range",
        200,
        json!([booking_json("b1", FUTURE_DAY, "10:00", "Luis")]),
    );
    let env = TestEnv::new();
    env.store_token(&fresh_token("regular"));

    env.cmd_with(&server)
        .args(["grid", "cancha 1", "--date", FUTURE_DAY])
        .assert()
        .success()
        .stdout(contains("Cancha 1").and(contains("Luis")).and(contains("Q1,500.00")));

    let req = &server.requests_to("GET", "/bookings/court/c1/range")[0];
    assert!(req.target.contains("startDate=2099-03-02"));
    assert!(req.target.contains("endDate=2099-03-08"));
}

#[test]
fn test_grid_week_offset_out_of_range() {
    let server = StubServer::start();
    server.route("GET", "/courts", 200, courts_json());
    let env = TestEnv::new();
    env.store_token(&fresh_token("regular"));

    env.cmd_with(&server)
        .args(["grid", "c1", "--date", FUTURE_DAY, "--week", "100000000"])
        .assert()
        .code(1)
        .stderr(contains("out of range").and(contains("panicked").not()));

    env.cmd_with(&server)
        .args(["export", "c1", "--week", "-9223372036854775808"])
        .assert()
        .code(1)
        .stderr(contains("out of range"));

    assert!(server.requests_to("GET", "/bookings/court/c1/range").is_empty());
}

#[test]
fn test_grid_degrades_when_court_list_fails() {
    let server = StubServer::start();
    server.route("GET", "/courts", 500, json!({ "msg": "boom" }));
    server.route("GET", "/bookings/court/c1/range", 200, json!([]));
    let env = TestEnv::new();
    env.store_token(&fresh_token("regular"));

    env.cmd_with(&server)
        .args(["grid", "c1", "--date", FUTURE_DAY])
        .assert()
        .success()
        .stdout(contains("Hour"));
}

#[test]
fn test_regular_booking_is_sent_as_not_arrived() {
    let server = StubServer::start();
    server.route("GET", "/courts", 200, courts_json());
    server.route("GET", "/clients", 200, json!([{ "_id": "k1", "name": "Luis", "phone": "5555" }]));
    server.route_sequence(
        "GET",
        "/bookings/court/c1/range",
        vec![json!([]), json!([booking_json("b1", FUTURE_DAY, "14:00", "Luis")])],
    );
    server.route("POST", "/bookings", 201, json!({ "_id": "b1" }));
    let env = TestEnv::new();
    env.store_token(&fresh_token("regular"));

    env.cmd_with(&server)
        .args([
            "book", "c1", FUTURE_DAY, "14", "--client", "luis", "--deposit", "50", "--arrived",
        ])
        .assert()
        .success()
        .stdout(contains("Booking created successfully").and(contains("14:00: Luis")));

    let body = server.requests_to("POST", "/bookings")[0].json();
    assert_eq!(body["status"], "No llegó");
    assert_eq!(body["client"], "k1");
    assert_eq!(body["clientName"], "Luis");
    assert_eq!(body["date"], FUTURE_DAY);
    assert_eq!(body["timeSlot"], "14:00");
    assert_eq!(body["deposit"], 50.0);

    // initial load plus the refresh after saving
    assert_eq!(server.requests_to("GET", "/bookings/court/c1/range").len(), 2);
}

#[test]
fn test_negative_deposit_is_rejected_locally() {
    let server = StubServer::start();
    server.route("GET", "/courts", 200, courts_json());
    server.route("GET", "/clients", 200, json!([]));
    server.route("GET", "/bookings/court/c1/range", 200, json!([]));
    let env = TestEnv::new();
    env.store_token(&fresh_token("admin"));

    env.cmd_with(&server)
        .args(["book", "c1", FUTURE_DAY, "9", "--client", "Luis", "--deposit=-5"])
        .assert()
        .failure()
        .stderr(contains("negative"));

    assert!(server.requests_to("POST", "/bookings").is_empty());
}

#[test]
fn test_past_slot_is_locked_for_regular_users() {
    let server = StubServer::start();
    server.route("GET", "/courts", 200, courts_json());
    server.route("GET", "/clients", 200, json!([]));
    server.route("GET", "/bookings/court/c1/range", 200, json!([]));
    let env = TestEnv::new();
    env.store_token(&fresh_token("regular"));

    env.cmd_with(&server)
        .args(["book", "c1", "2001-01-01", "10", "--client", "Luis"])
        .assert()
        .failure()
        .stderr(contains("past"));

    assert!(server.requests_to("POST", "/bookings").is_empty());
}

#[test]
fn test_admin_adds_unknown_client_before_booking() {
    let server = StubServer::start();
    server.route("GET", "/courts", 200, courts_json());
    server.route("GET", "/clients", 200, json!([]));
    server.route("POST", "/clients", 201, json!({ "_id": "k7", "name": "Nuevo", "phone": "" }));
    server.route("GET", "/bookings/court/c1/range", 200, json!([]));
    server.route("POST", "/bookings", 201, json!({ "_id": "b9" }));
    let env = TestEnv::new();
    env.store_token(&fresh_token("admin"));

    env.cmd_with(&server)
        .args(["book", "c1", FUTURE_DAY, "20:00", "--client", "Nuevo", "--add-client", "--arrived"])
        .assert()
        .success()
        .stdout(contains("Client created successfully"));

    let client = server.requests_to("POST", "/clients")[0].json();
    assert_eq!(client["name"], "Nuevo");
    assert_eq!(client["email"], "");

    let body = server.requests_to("POST", "/bookings")[0].json();
    assert_eq!(body["client"], "k7");
    assert_eq!(body["status"], "Llegó");
}

#[test]
fn test_regular_user_cannot_unbook() {
    let server = StubServer::start();
    server.route("GET", "/courts", 200, courts_json());
    server.route(
        "GET",
        "/bookings/court/c1/range",
        200,
        json!([booking_json("b1", FUTURE_DAY, "10:00", "Luis")]),
    );
    let env = TestEnv::new();
    env.store_token(&fresh_token("regular"));

    env.cmd_with(&server)
        .args(["unbook", "c1", FUTURE_DAY, "10", "--yes"])
        .assert()
        .failure()
        .stderr(contains("only admins"));

    assert!(server.requests_to("DELETE", "/bookings/b1").is_empty());
}

#[test]
fn test_admin_unbook_after_confirmation() {
    let server = StubServer::start();
    server.route("GET", "/courts", 200, courts_json());
    server.route_sequence(
        "GET",
        "/bookings/court/c1/range",
        vec![
            json!([booking_json("b1", FUTURE_DAY, "10:00", "Luis")]),
            json!([booking_json("b1", FUTURE_DAY, "10:00", "Luis")]),
            json!([]),
        ],
    );
    server.route("DELETE", "/bookings/b1", 200, json!({ "msg": "deleted" }));
    let env = TestEnv::new();
    env.store_token(&fresh_token("admin"));

    // declined
    env.cmd_with(&server)
        .args(["unbook", "c1", FUTURE_DAY, "10"])
        .write_stdin("n\n")
        .assert()
        .success()
        .stdout(contains("cancelled"));
    assert!(server.requests_to("DELETE", "/bookings/b1").is_empty());

    env.cmd_with(&server)
        .args(["unbook", "c1", FUTURE_DAY, "10:00", "--yes"])
        .assert()
        .success()
        .stdout(contains("Booking deleted successfully"));
    assert_eq!(server.requests_to("DELETE", "/bookings/b1").len(), 1);
}

#[test]
fn test_permanent_toggle() {
    let server = StubServer::start();
    server.route("GET", "/courts", 200, courts_json());
    server.route(
        "GET",
        "/bookings/court/c1/range",
        200,
        json!([booking_json("b1", FUTURE_DAY, "10:00", "Luis")]),
    );
    server.route("PUT", "/bookings/b1/permanent", 200, json!({ "msg": "ok" }));
    let env = TestEnv::new();
    env.store_token(&fresh_token("admin"));

    env.cmd_with(&server)
        .args(["permanent", "c1", FUTURE_DAY, "10"])
        .assert()
        .success()
        .stdout(contains("12 months"));

    let body = server.requests_to("PUT", "/bookings/b1/permanent")[0].json();
    assert_eq!(body["isPermanent"], true);
}

#[test]
fn test_court_validation_and_creation() {
    let server = StubServer::start();
    server.route("GET", "/courts", 200, courts_json());
    server.route("POST", "/courts", 201, json!({ "_id": "c2" }));
    let env = TestEnv::new();
    env.store_token(&fresh_token("admin"));

    env.cmd_with(&server)
        .args(["courts", "add", "--name", "Cancha 2", "--color", "blue", "--no-original"])
        .assert()
        .failure()
        .stderr(contains("#RRGGBB"));

    env.cmd_with(&server)
        .args(["courts", "add", "--name", "Cancha 2", "--color", "#00ff00", "--six-am=-1", "--no-original"])
        .assert()
        .failure()
        .stderr(contains("negative"));

    assert!(server.requests_to("POST", "/courts").is_empty());

    env.cmd_with(&server)
        .args([
            "courts", "add", "--name", "Cancha 2", "--color", "#00ff00", "--seven-to-fifteen", "90",
            "--no-original",
        ])
        .assert()
        .success()
        .stdout(contains("Court created successfully").and(contains("Cancha 1")));

    let body = server.requests_to("POST", "/courts")[0].json();
    assert_eq!(body["color"], "#00FF00");
    assert_eq!(body["createOriginal"], false);
    assert_eq!(body["pricing"]["sevenToFifteen"], 90.0);
    assert_eq!(body["pricing"]["sixAM"], 0.0);
}

#[test]
fn test_original_courts_need_password_confirmation() {
    let server = StubServer::start();
    server.route("POST", "/auth/re-auth", 200, json!({ "msg": "ok" }));
    server.route("GET", "/courts/originals", 200, courts_json());
    let env = TestEnv::new();
    env.store_token(&fresh_token("admin"));

    env.cmd_with(&server)
        .args(["courts", "originals", "--password", "secret"])
        .assert()
        .success()
        .stdout(contains("Original courts").and(contains("Cancha 1")));

    let paths: Vec<String> = server
        .requests()
        .iter()
        .map(|r| format!("{} {}", r.method, r.path()))
        .collect();
    let re_auth = paths.iter().position(|p| p == "POST /api/auth/re-auth");
    let listing = paths.iter().position(|p| p == "GET /api/courts/originals");
    assert!(re_auth.is_some() && listing.is_some());
    assert!(re_auth < listing);

    let sent = &server.requests_to("POST", "/auth/re-auth")[0];
    assert_eq!(sent.json()["password"], "secret");
    assert!(sent.header("x-auth-token").is_some());
}

#[test]
fn test_rejected_password_hides_original_courts() {
    let server = StubServer::start();
    server.route("POST", "/auth/re-auth", 401, json!({ "msg": "Incorrect password" }));
    server.route("GET", "/courts/originals", 200, courts_json());
    let env = TestEnv::new();
    env.store_token(&fresh_token("admin"));

    env.cmd_with(&server)
        .args(["courts", "originals", "--password", "wrong"])
        .assert()
        .failure()
        .stderr(contains("Incorrect password"))
        .stdout(contains("Cancha 1").not());

    assert_eq!(server.requests_to("POST", "/auth/re-auth").len(), 1);
    assert!(server.requests_to("GET", "/courts/originals").is_empty());
}

#[test]
fn test_regular_user_cannot_manage_users() {
    let server = StubServer::start();
    let env = TestEnv::new();
    env.store_token(&fresh_token("regular"));

    env.cmd_with(&server)
        .args(["users", "list"])
        .assert()
        .failure()
        .stderr(contains("only admins"));
    assert!(server.requests().is_empty());
}

#[test]
fn test_client_bookings_filters() {
    let server = StubServer::start();
    server.route(
        "GET",
        "/clients/k1/bookings",
        200,
        json!([
            { "_id": "b1", "court": { "_id": "c1", "name": "Cancha 1" }, "date": "2024-03-04",
              "timeSlot": "10:00", "clientName": "Luis", "deposit": 10, "status": "Llegó" },
            { "_id": "b2", "court": { "_id": "c2", "name": "Cancha 2" }, "date": "2024-04-04",
              "timeSlot": "11:00", "clientName": "Luis", "deposit": 20, "status": "No llegó" }
        ]),
    );
    let env = TestEnv::new();
    env.store_token(&fresh_token("admin"));

    env.cmd_with(&server)
        .args(["clients", "bookings", "k1", "--status", "arrived"])
        .assert()
        .success()
        .stdout(contains("Cancha 1").and(contains("Cancha 2").not()).and(contains("1 of 2")));
}

#[test]
fn test_financial_report() {
    let server = StubServer::start();
    server.route(
        "GET",
        "/stats/financial",
        200,
        json!({
            "totalIncome": 12345.5,
            "byPeriod": [{ "date": "2024-03-04", "income": 345.5 }],
            "byCourt": [{ "courtId": "c1", "courtName": "Cancha 1", "income": 12000 }],
            "bySchedule": [{ "hour": 18, "income": 500 }]
        }),
    );
    let env = TestEnv::new();
    env.store_token(&fresh_token("admin"));

    env.cmd_with(&server)
        .args(["stats", "financial", "--period", "week"])
        .assert()
        .success()
        .stdout(contains("Q12,345.50").and(contains("18:00")).and(contains("Q12,000.00")));

    assert!(server.requests_to("GET", "/stats/financial")[0].target.contains("type=week"));
}

#[test]
fn test_client_report_top_attendance() {
    let server = StubServer::start();
    server.route(
        "GET",
        "/stats/clients",
        200,
        json!([
            { "_id": "k1", "name": "Luis", "email": "", "phone": "", "bookingsCount": 9,
              "attendanceCount": 3, "attendanceRate": 0.333 },
            { "_id": "k2", "name": "Marta", "email": "", "phone": "", "bookingsCount": 2,
              "attendanceCount": 2, "attendanceRate": 1.0 }
        ]),
    );
    let env = TestEnv::new();
    env.store_token(&fresh_token("admin"));

    env.cmd_with(&server)
        .args(["stats", "clients", "--view", "top-attendance"])
        .assert()
        .success()
        .stdout(contains("100.0%").and(contains("33.3%")));
}

#[test]
fn test_logs_filtered_by_user() {
    let server = StubServer::start();
    server.route(
        "GET",
        "/logs",
        200,
        json!([
            { "_id": "l1", "createdAt": "2024-03-05T03:15:00.000Z", "user": "Ana", "action": "Reserva creada" },
            { "_id": "l2", "createdAt": "2024-03-05T16:00:00.000Z", "user": "Luis", "action": "Cliente eliminado" }
        ]),
    );
    let env = TestEnv::new();
    env.store_token(&fresh_token("admin"));

    env.cmd_with(&server)
        .args(["logs", "--user", "ana"])
        .assert()
        .success()
        .stdout(contains("2024-03-04 21:15:00").and(contains("Cliente eliminado").not()));
}

#[test]
fn test_export_week_to_csv() {
    let server = StubServer::start();
    server.route("GET", "/courts", 200, courts_json());
    server.route(
        "GET",
        "/bookings/court/c1/range",
        200,
        json!([booking_json("b1", FUTURE_DAY, "10:00", "Luis")]),
    );
    let env = TestEnv::new();
    env.store_token(&fresh_token("admin"));
    let out = env.path("week.csv");

    env.cmd_with(&server)
        .args(["export", "c1", "--date", FUTURE_DAY, "--format", "csv", "--file"])
        .arg(&out)
        .assert()
        .success()
        .stdout(contains("CSV export completed"));

    assert!(common::read(&out).contains("Luis\nDeposit: 0\nStatus: Not arrived"));
}

#[test]
fn test_report_download() {
    let server = StubServer::start();
    server.route_bytes("GET", "/stats/clients/export", 200, b"PK\x03\x04report".to_vec());
    let env = TestEnv::new();
    env.store_token(&fresh_token("admin"));
    let out = env.path("clients.xlsx");

    env.cmd_with(&server)
        .args(["stats", "export", "clients", "--period", "year", "--file"])
        .arg(&out)
        .assert()
        .success();

    assert_eq!(fs::read(&out).unwrap(), b"PK\x03\x04report");
}

#[test]
fn test_export_format_from_extension() {
    let server = StubServer::start();
    server.route("GET", "/courts", 200, courts_json());
    server.route("GET", "/bookings/court/c1/range", 200, json!([]));
    let env = TestEnv::new();
    env.store_token(&fresh_token("regular"));
    let out = env.path("exports/week.json");

    env.cmd_with(&server)
        .args(["export", "Cancha 1", "--date", FUTURE_DAY, "--file"])
        .arg(&out)
        .assert()
        .success()
        .stdout(contains("JSON export completed").and(contains("empty grid")));

    let json: serde_json::Value = serde_json::from_str(&common::read(&out)).unwrap();
    assert_eq!(json["court"], "Cancha 1");
    assert_eq!(json["start"], "2099-03-02");
}

//! End-to-end integration tests
//!
//! These tests drive the complete HTTP application through
//! `tower::ServiceExt::oneshot`, the same router the server binds, over fresh
//! in-memory stores. They cover:
//! - Member create/lookup/update/delete and the failure mapping (404/400)
//! - Administrator accounts and the admin login lookup
//! - Profile search and the login lookup
//! - Catalog and ledger routes
//! - Loading the seed fixture in tests/fixtures/seed and exporting members

#[cfg(test)]
mod tests {
    use axum::body::Body;
    use axum::http::{Method, Request, StatusCode};
    use axum::Router;
    use gamezone_accounts::core::{Services, Stores};
    use gamezone_accounts::{build_app, seed, write_members_csv, AppState};
    use http_body_util::BodyExt;
    use rstest::rstest;
    use serde_json::{json, Value};
    use std::path::Path;
    use tower::ServiceExt;

    fn app() -> Router {
        build_app(AppState::in_memory())
    }

    /// Send one request and decode the JSON body (`Value::Null` when empty)
    async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(body) => builder
                .header("content-type", "application/json")
                .body(Body::from(body.to_string())),
            None => builder.body(Body::empty()),
        }
        .unwrap();

        let response = app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let value = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, value)
    }

    fn ann() -> Value {
        json!({
            "name": "Ann Lee",
            "phoneNumber": "1234567890",
            "email": "ann@x.com",
            "balance": 100
        })
    }

    fn minecraft() -> Value {
        json!({
            "name": "Minecraft",
            "price": 26.95,
            "description": "Build, explore, and survive in a blocky world.",
            "genre": "Sandbox"
        })
    }

    #[rstest]
    #[case::health("/health")]
    #[case::api_health("/api/health")]
    #[tokio::test]
    async fn test_health(#[case] uri: &str) {
        let (status, body) = send(&app(), Method::GET, uri, None).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "UP");
        assert_eq!(body["service"], "GameZone Accounts");
        assert!(body["timestamp"].is_string());
    }

    #[tokio::test]
    async fn test_index_lists_endpoints() {
        let (status, body) = send(&app(), Method::GET, "/", None).await;

        assert_eq!(status, StatusCode::OK);
        let endpoints = body["endpoints"].as_array().unwrap();
        assert!(endpoints.contains(&json!("POST /members/search")));
    }

    #[tokio::test]
    async fn test_member_scenario() {
        let app = app();

        let (status, created) = send(&app, Method::POST, "/members", Some(ann())).await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(created["balance"], json!(100.0));
        assert_eq!(created["country"], "India");
        assert_eq!(created["gender"], "OTHER");
        let id = created["id"].as_str().unwrap().to_string();
        assert!(!id.is_empty());

        let duplicate = json!({
            "name": "Ann Clone",
            "phoneNumber": "1234567890",
            "email": "clone@x.com"
        });
        let (status, body) = send(&app, Method::POST, "/members", Some(duplicate)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(
            body,
            json!({"success": false, "message": "Phone number already exists."})
        );

        let mut negative = ann();
        negative["balance"] = json!(-5);
        let (status, body) =
            send(&app, Method::PUT, &format!("/members/{}", id), Some(negative)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["message"], "Balance cannot be negative.");

        let recharge = json!({"memberId": id, "amount": 50, "paymentMethod": "PayPal"});
        let (status, _) = send(&app, Method::POST, "/recharges", Some(recharge)).await;
        assert_eq!(status, StatusCode::CREATED);

        let (status, profile) = send(
            &app,
            Method::POST,
            "/members/search",
            Some(json!({"phone": "1234567890"})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(profile["member"]["id"], json!(id));
        assert_eq!(profile["member"]["balance"], json!(100.0));
        let history = profile["recharge_history"].as_array().unwrap();
        assert_eq!(history.len(), 1);
        assert_eq!(history[0]["amount"], json!(50.0));
        assert!(profile["played_history"].as_array().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_new_member_is_active_even_when_asked_otherwise() {
        let app = app();
        let mut inactive = ann();
        inactive["active"] = json!(false);

        let (status, created) = send(&app, Method::POST, "/members", Some(inactive)).await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(created["active"], true);

        let uri = format!("/members/{}", created["id"].as_str().unwrap());
        let (_, fetched) = send(&app, Method::GET, &uri, None).await;
        assert_eq!(fetched["active"], true);
    }

    #[tokio::test]
    async fn test_admin_accounts() {
        let app = app();
        let root = json!({
            "username": "admin",
            "email": "admin@gamezone.com",
            "fullName": "GameZone Administrator"
        });

        let (status, admin) = send(&app, Method::POST, "/admin", Some(root.clone())).await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(admin["role"], "ADMIN");
        assert_eq!(admin["active"], true);
        let uri = format!("/admin/{}", admin["id"].as_str().unwrap());

        let (status, body) = send(&app, Method::POST, "/admin", Some(root)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({"success": false, "message": "Username already exists"}));

        let (status, body) = send(
            &app,
            Method::POST,
            "/admin/login",
            Some(json!({"username": "admin"})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["message"], "Login successful");
        assert_eq!(body["admin"]["fullName"], "GameZone Administrator");

        let (status, body) = send(
            &app,
            Method::POST,
            "/admin/login",
            Some(json!({"username": "nobody"})),
        )
        .await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body, json!({"success": false, "message": "Invalid username"}));

        let renamed = json!({"username": "root", "email": "root@gamezone.com"});
        let (status, updated) = send(&app, Method::PUT, &uri, Some(renamed)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(updated["username"], "root");
        assert_eq!(updated["createdAt"], admin["createdAt"]);

        let (status, _) = send(&app, Method::DELETE, &uri, None).await;
        assert_eq!(status, StatusCode::NO_CONTENT);
        let (status, body) = send(&app, Method::GET, &uri, None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(
            body["message"],
            format!("Admin not found with id: {}", admin["id"].as_str().unwrap())
        );
    }

    #[tokio::test]
    async fn test_member_update_and_delete() {
        let app = app();
        let (_, created) = send(&app, Method::POST, "/members", Some(ann())).await;
        let uri = format!("/members/{}", created["id"].as_str().unwrap());

        let mut changed = ann();
        changed["name"] = json!("Ann Leigh");
        changed["isActive"] = json!(false);
        let (status, updated) = send(&app, Method::PUT, &uri, Some(changed)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(updated["name"], "Ann Leigh");
        assert_eq!(updated["active"], false);
        assert_eq!(updated["joiningDate"], created["joiningDate"]);

        let (status, body) = send(&app, Method::DELETE, &uri, None).await;
        assert_eq!(status, StatusCode::NO_CONTENT);
        assert_eq!(body, Value::Null);

        let (status, body) = send(&app, Method::GET, &uri, None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["success"], false);
    }

    #[rstest]
    #[case::member("/members/missing", "Member not found with id: missing")]
    #[case::admin("/admin/missing", "Admin not found with id: missing")]
    #[case::game("/games/missing", "Game not found with id: missing")]
    #[case::recharge("/recharges/missing", "Recharge not found with id: missing")]
    #[case::transaction("/transactions/missing", "Transaction not found with id: missing")]
    #[tokio::test]
    async fn test_find_by_missing_id(#[case] uri: &str, #[case] expected: &str) {
        let (status, body) = send(&app(), Method::GET, uri, None).await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, json!({"success": false, "message": expected}));
    }

    #[rstest]
    #[case::short_name(json!({"name": "A", "phoneNumber": "1234567890", "email": "a@x.com"}), "Member name must be at least 2 characters long.")]
    #[case::bad_email(json!({"name": "Ann", "phoneNumber": "1234567890", "email": "ann"}), "Invalid email format.")]
    #[case::missing_phone(json!({"name": "Ann", "email": "ann@x.com"}), "Phone number is required.")]
    #[case::client_id(json!({"id": "m-1", "name": "Ann", "phoneNumber": "1234567890", "email": "ann@x.com"}), "Member id is assigned by the server.")]
    #[tokio::test]
    async fn test_member_create_rejections(#[case] body: Value, #[case] expected: &str) {
        let app = app();

        let (status, response) = send(&app, Method::POST, "/members", Some(body)).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(response["message"], expected);
        let (_, members) = send(&app, Method::GET, "/members", None).await;
        assert!(members.as_array().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_search_unknown_phone() {
        let (status, body) = send(
            &app(),
            Method::POST,
            "/members/search",
            Some(json!({"phone": "0000000000"})),
        )
        .await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["message"], "Member not found with phone: 0000000000");
    }

    #[tokio::test]
    async fn test_login_lookup() {
        let app = app();
        send(&app, Method::POST, "/members", Some(ann())).await;

        let (status, body) = send(
            &app,
            Method::POST,
            "/members/login",
            Some(json!({"email": "ann@x.com"})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["success"], true);
        assert_eq!(body["message"], "Login successful");
        assert_eq!(body["user"]["phoneNumber"], "1234567890");
        assert_eq!(body["user"]["role"], "USER");

        let (status, body) = send(
            &app,
            Method::POST,
            "/members/login",
            Some(json!({"email": "nobody@x.com"})),
        )
        .await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body, json!({"success": false, "message": "Invalid email"}));
    }

    #[tokio::test]
    async fn test_malformed_json_is_rejected_by_extractor() {
        let request = Request::builder()
            .method(Method::POST)
            .uri("/members")
            .header("content-type", "application/json")
            .body(Body::from("{not json"))
            .unwrap();

        let response = app().oneshot(request).await.unwrap();

        assert!(response.status().is_client_error());
    }

    #[tokio::test]
    async fn test_game_catalog_routes() {
        let app = app();

        let (status, game) = send(&app, Method::POST, "/games", Some(minecraft())).await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(game["status"], "ACTIVE");
        assert_eq!(game["minAge"], 3);
        assert_eq!(game["developer"], "Unknown Developer");
        let uri = format!("/games/{}", game["id"].as_str().unwrap());

        let mut update = minecraft();
        update["status"] = json!("MAINTENANCE");
        update["price"] = json!(19.99);
        let (status, updated) = send(&app, Method::PUT, &uri, Some(update)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(updated["status"], "MAINTENANCE");
        assert_eq!(updated["price"], json!(19.99));

        let mut invalid = minecraft();
        invalid["status"] = json!("active");
        let (status, body) = send(&app, Method::PUT, &uri, Some(invalid)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(
            body["message"],
            "Invalid game status. Must be ACTIVE, INACTIVE, or MAINTENANCE."
        );

        let (status, _) = send(&app, Method::DELETE, &uri, None).await;
        assert_eq!(status, StatusCode::NO_CONTENT);
        let (_, games) = send(&app, Method::GET, "/games", None).await;
        assert!(games.as_array().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_deleted_member_leaves_ledger_orphans() {
        let app = app();
        let (_, member) = send(&app, Method::POST, "/members", Some(ann())).await;
        let id = member["id"].as_str().unwrap().to_string();
        let (_, game) = send(&app, Method::POST, "/games", Some(minecraft())).await;

        let purchase = json!({"memberId": id, "gameId": game["id"], "amount": 26.95});
        let (status, transaction) = send(&app, Method::POST, "/transactions", Some(purchase)).await;
        assert_eq!(status, StatusCode::CREATED);
        assert!(transaction["date"].is_string());

        let (status, _) = send(&app, Method::DELETE, &format!("/members/{}", id), None).await;
        assert_eq!(status, StatusCode::NO_CONTENT);

        let (status, owned) =
            send(&app, Method::GET, &format!("/transactions/member/{}", id), None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(owned.as_array().unwrap().len(), 1);
        let (_, owned) = send(&app, Method::GET, &format!("/recharges/member/{}", id), None).await;
        assert!(owned.as_array().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_purchase_records_without_debiting_balance() {
        let app = app();
        let (_, member) = send(&app, Method::POST, "/members", Some(ann())).await;
        let (_, game) = send(&app, Method::POST, "/games", Some(minecraft())).await;

        let purchase = json!({"memberId": member["id"], "gameId": game["id"], "amount": 26.95});
        send(&app, Method::POST, "/transactions", Some(purchase)).await;

        let (_, profile) = send(
            &app,
            Method::POST,
            "/members/search",
            Some(json!({"phone": "1234567890"})),
        )
        .await;
        assert_eq!(profile["member"]["balance"], json!(100.0));
        assert_eq!(profile["played_history"][0]["game_name"], "Minecraft");
        // The catalog section filters on a lower-case status label
        assert!(profile["games"].as_array().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_ledger_rejects_client_id() {
        let body = json!({"id": "r-1", "memberId": "m-1", "amount": 5, "paymentMethod": "PayPal"});

        let (status, response) = send(&app(), Method::POST, "/recharges", Some(body)).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(response["message"], "Recharge id is assigned by the server.");
    }

    #[tokio::test]
    async fn test_seed_fixture_and_export() {
        let stores = Stores::in_memory();
        let services = Services::new(&stores);

        let report = seed::seed_from_dir(&services, Path::new("tests/fixtures/seed"))
            .await
            .unwrap();

        assert_eq!(report.games, 3);
        assert_eq!(report.members, 3);
        assert_eq!(report.recharges, 3);
        assert_eq!(report.transactions, 3);

        let app = build_app(AppState::new(&stores));
        let (status, profile) = send(
            &app,
            Method::POST,
            "/members/search",
            Some(json!({"phone": "1234567890"})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(profile["recharge_history"].as_array().unwrap().len(), 2);
        let names: Vec<&str> = profile["played_history"]
            .as_array()
            .unwrap()
            .iter()
            .map(|entry| entry["game_name"].as_str().unwrap())
            .collect();
        assert_eq!(names, vec!["Minecraft", "Valorant"]);

        let mut output = Vec::new();
        write_members_csv(&services.members.find_all(), &mut output).unwrap();
        let csv = String::from_utf8(output).unwrap();
        let rows: Vec<Vec<&str>> = csv
            .lines()
            .skip(1)
            .map(|line| line.split(',').skip(1).collect())
            .collect();
        assert_eq!(
            rows,
            vec![
                vec!["Ann Lee", "1234567890", "ann@x.com", "100.00", "true"],
                vec!["Bob Ray", "0987654321", "bob@x.com", "250.50", "true"],
                vec!["Cara Diaz", "5566778899", "cara@x.com", "0.00", "true"],
            ]
        );
    }
}

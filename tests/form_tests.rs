// tests/form_tests.rs

use movie_survey::{config::Config, routes, state::AppState};
use std::path::PathBuf;

async fn spawn_app() -> (String, PathBuf) {
    let data_dir = std::env::temp_dir().join(format!("survey-form-{}", uuid::Uuid::new_v4()));

    let config = Config {
        data_dir: data_dir.clone(),
        rust_log: "error".to_string(),
        ..Config::default()
    };

    let app = routes::create_router(AppState::new(config));
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let port = listener.local_addr().unwrap().port();
    let address = format!("http://127.0.0.1:{}", port);

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    (address, data_dir)
}

fn browser() -> reqwest::Client {
    reqwest::Client::builder()
        .cookie_store(true)
        .build()
        .unwrap()
}

#[tokio::test]
async fn test_form_flow() {
    // Arrange
    let (address, data_dir) = spawn_app().await;
    let client = browser();

    // 1. First visit renders the empty form
    let page = client
        .get(&format!("{}/", address))
        .send()
        .await
        .expect("Failed to load form");
    assert_eq!(page.status().as_u16(), 200);
    let html = page.text().await.unwrap();
    assert!(html.contains("action=\"/submit\""));
    assert!(html.contains("name=\"favorite_genres\""));

    // 2. Submitting without a name re-renders the form with the answers kept
    let rejected = client
        .post(&format!("{}/submit", address))
        .header("Content-Type", "application/x-www-form-urlencoded")
        .body("name=&age=44&favorite_genres=Action")
        .send()
        .await
        .unwrap();
    assert_eq!(rejected.status().as_u16(), 422);
    let html = rejected.text().await.unwrap();
    assert!(html.contains("class=\"error\""));
    assert!(html.contains("value=\"44\""));
    assert!(html.contains("value=\"Action\" checked"));
    assert!(!data_dir.exists());

    // 3. A valid submission shows the summary with the chart
    let accepted = client
        .post(&format!("{}/submit", address))
        .header("Content-Type", "application/x-www-form-urlencoded")
        .body("name=Alex&age=30&favorite_genres=Comedy&favorite_genres=Drama&story_quality=8")
        .send()
        .await
        .unwrap();
    assert_eq!(accepted.status().as_u16(), 200);
    let html = accepted.text().await.unwrap();
    assert!(html.contains("class=\"notice\""));
    assert!(html.contains("<strong>Name:</strong> Alex"));
    assert!(html.contains("<strong>Age:</strong> 30"));
    assert!(html.contains("class=\"chart\""));
    assert!(html.contains("style=\"width: 80%\""));
    assert!(html.contains("action=\"/reset\""));
    assert_eq!(std::fs::read_dir(&data_dir).unwrap().count(), 1);

    // 4. Later render passes keep showing the summary without writing again
    let html = client
        .get(&format!("{}/", address))
        .send()
        .await
        .unwrap()
        .text()
        .await
        .unwrap();
    assert!(html.contains("<strong>Name:</strong> Alex"));
    assert!(!html.contains("class=\"notice\""));
    assert_eq!(std::fs::read_dir(&data_dir).unwrap().count(), 1);

    // 5. Reset redirects back to an empty form
    let reset = client
        .post(&format!("{}/reset", address))
        .send()
        .await
        .unwrap();
    assert_eq!(reset.status().as_u16(), 200);
    let html = reset.text().await.unwrap();
    assert!(html.contains("action=\"/submit\""));
    assert!(!html.contains("<strong>Name:</strong>"));

    let _ = std::fs::remove_dir_all(&data_dir);
}

#[tokio::test]
async fn unknown_choice_is_bad_request() {
    let (address, data_dir) = spawn_app().await;
    let client = browser();

    let response = client
        .post(&format!("{}/submit", address))
        .header("Content-Type", "application/x-www-form-urlencoded")
        .body("name=Alex&favorite_genres=Musical")
        .send()
        .await
        .unwrap();

    assert_eq!(response.status().as_u16(), 400);
    let html = response.text().await.unwrap();
    assert!(html.contains("class=\"error\""));
    assert!(!data_dir.exists());
}

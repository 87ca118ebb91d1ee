//! Router tests (in-process, jitter pinned to zero)

use std::sync::Arc;

use axum::{
    body::{to_bytes, Body},
    http::{header, Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tempfile::{tempdir, TempDir};
use tower::ServiceExt;

use crate::config::Config;
use crate::logic::model::RiskModel;
use crate::logic::scoring::FixedJitter;
use crate::{create_router, AppState};

const BOUNDARY: &str = "agri-risk-test-boundary";

fn test_app() -> (Router, AppState, TempDir) {
    let dir = tempdir().unwrap();
    let config = Config {
        model_dir: dir.path().join("model_data"),
        risk_jitter: 0.0,
        ..Config::default()
    };
    let state = AppState::new(config, RiskModel::default(), Arc::new(FixedJitter(0.0)));
    (create_router(state.clone()), state, dir)
}

async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}

fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn upload(filename: &str, content: impl AsRef<[u8]>) -> Request<Body> {
    let mut body = format!(
        "--{b}\r\nContent-Disposition: form-data; name=\"file\"; filename=\"{f}\"\r\nContent-Type: application/octet-stream\r\n\r\n",
        b = BOUNDARY,
        f = filename
    )
    .into_bytes();
    body.extend_from_slice(content.as_ref());
    body.extend_from_slice(format!("\r\n--{}--\r\n", BOUNDARY).as_bytes());
    Request::builder()
        .method("POST")
        .uri("/train_model")
        .header(header::CONTENT_TYPE, format!("multipart/form-data; boundary={}", BOUNDARY))
        .body(Body::from(body))
        .unwrap()
}

const TRAINING_CSV: &str = "Age,Ancienneté agricole,H travail / jour,J travail / Sem,Masque pour pesticides,Gants,Bottes\n\
                            62,30,10,6,jamais,parfois,toujours\n\
                            35,5,8,5,toujours,toujours,toujours\n\
                            48,20,9,7,souvent,jamais,parfois\n";

fn high_risk_record() -> Value {
    json!({
        "age": 62,
        "work_experience": 3,
        "work_hours_per_day": 10,
        "work_days_per_week": 6,
        "protective_equipment": [],
        "chemical_exposure": ["pesticides", "herbicides"],
        "has_respiratory_conditions": true
    })
}

// ============================================================================
// INFO
// ============================================================================

#[test]
fn test_root_message() {
    let body = tokio_test::block_on(super::health::root());
    assert_eq!(body.0.message, "Agricultural Health Risk Prediction API");
}

#[tokio::test]
async fn test_health_reports_untrained_model() {
    let (app, _, _dir) = test_app();
    let (status, body) = send(app, get("/health")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["model_trained"], false);
    assert_eq!(body["feature_names"], json!([]));
}

// ============================================================================
// PREDICTION
// ============================================================================

#[tokio::test]
async fn test_predict_risk_high_risk_worker() {
    let (app, _, _dir) = test_app();
    let (status, body) = send(app, post_json("/predict_risk", high_risk_record())).await;

    assert_eq!(status, StatusCode::OK);
    let overall = body["overall_risk"].as_f64().unwrap();
    let expected = 20.0 + 16.0 + (60.0 / 35.0 - 1.0) * 15.0 + 6.0 + 20.0 + 15.0 + 5.0;
    assert!((overall - expected).abs() < 1e-9);
    assert_eq!(body["respiratory_risk"], 100.0);
    assert_eq!(body["recommendations"].as_array().unwrap().len(), 5);
    assert_eq!(body["feature_importance"].as_array().unwrap().len(), 10);
    assert_eq!(body["what_if_scenarios"].as_array().unwrap().len(), 4);
    assert_eq!(body["risk_factors"][0], "Âge supérieur à 50 ans (62.0 ans)");
}

#[tokio::test]
async fn test_predict_risk_rejects_out_of_range_age() {
    let (app, _, _dir) = test_app();
    let mut record = high_risk_record();
    record["age"] = json!(300);

    let (status, body) = send(app, post_json("/predict_risk", record)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["status"], 400);
}

#[tokio::test]
async fn test_predict_risk_missing_required_field() {
    let (app, _, _dir) = test_app();
    let mut record = high_risk_record();
    record.as_object_mut().unwrap().remove("has_respiratory_conditions");

    let (status, _) = send(app, post_json("/predict_risk", record)).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_empty_text_matches_structured_defaults() {
    let (app, _, _dir) = test_app();
    let empty_text = json!({
        "general_description": "",
        "chemicals_text": "",
        "tasks_text": "",
        "health_text": "",
        "protection_text": ""
    });
    let defaults = json!({
        "age": 40,
        "work_experience": 10,
        "work_hours_per_day": 8,
        "work_days_per_week": 5,
        "protective_equipment": [],
        "chemical_exposure": [],
        "has_respiratory_conditions": false,
        "marital_status": "mariée",
        "number_of_children": 2,
        "socio_economic_status": "moyen",
        "employment_status": "permanente"
    });

    let (status_text, from_text) = send(app.clone(), post_json("/predict_risk_from_text", empty_text)).await;
    let (status_structured, structured) = send(app, post_json("/predict_risk", defaults)).await;

    assert_eq!(status_text, StatusCode::OK);
    assert_eq!(status_structured, StatusCode::OK);
    assert_eq!(from_text, structured);
}

#[tokio::test]
async fn test_predict_from_text_reads_description() {
    let (app, _, _dir) = test_app();
    let record = json!({
        "general_description": "J'ai 58 ans, 20 ans d'expérience, je travaille 9 heures par jour",
        "chemicals_text": "J'utilise des pesticides",
        "tasks_text": "pulvérisation",
        "health_text": "J'ai de l'asthme",
        "protection_text": "Je porte des gants"
    });

    let (status, body) = send(app, post_json("/predict_risk_from_text", record)).await;
    assert_eq!(status, StatusCode::OK);

    let factors: Vec<&str> = body["risk_factors"]
        .as_array()
        .unwrap()
        .iter()
        .filter_map(Value::as_str)
        .collect();
    assert!(factors.contains(&"Âge supérieur à 50 ans (58.0 ans)"));
    assert!(factors.contains(&"Présence de troubles respiratoires préexistants"));
}

// ============================================================================
// TEXT
// ============================================================================

#[tokio::test]
async fn test_extract_keywords_in_dictionary_order() {
    let (app, _, _dir) = test_app();
    let request = post_json(
        "/extract_keywords?type=protection",
        json!({"text": "Je porte toujours un masque et des gants"}),
    );

    let (status, body) = send(app, request).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["keywords"], json!(["masque", "gants"]));
}

#[tokio::test]
async fn test_extract_keywords_defaults_to_chemical() {
    let (app, _, _dir) = test_app();
    let request = post_json("/extract_keywords", json!({"text": "Du glyphosate et des gants"}));

    let (_, body) = send(app, request).await;
    assert_eq!(body["keywords"], json!(["glyphosate"]));
}

#[tokio::test]
async fn test_extract_keywords_unknown_type_is_empty() {
    let (app, _, _dir) = test_app();
    let request = post_json("/extract_keywords?type=weather", json!({"text": "masque"}));

    let (status, body) = send(app, request).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["keywords"], json!([]));
}

#[tokio::test]
async fn test_text_endpoints_require_text() {
    let (app, _, _dir) = test_app();

    let (status, body) = send(app.clone(), post_json("/extract_keywords", json!({"text": ""}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Text field is required");

    let (status, _) = send(app, post_json("/analyze_text", json!({}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_analyze_text_reports_keywords() {
    let (app, _, _dir) = test_app();
    let request = post_json(
        "/analyze_text",
        json!({"text": "J'utilise des pesticides et j'ai de la toux. Je porte des gants."}),
    );

    let (status, body) = send(app, request).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["keywords"]["chemicals"], json!(["pesticides", "pesticide"]));
    assert_eq!(body["keywords"]["protection"], json!(["gants"]));
    assert_eq!(body["factors"][0]["exposure"], "pesticides");
    assert_eq!(body["factors"][0]["healthIssue"], "toux");
}

// ============================================================================
// TRAINING
// ============================================================================

#[tokio::test]
async fn test_train_model_swaps_in_trained_model() {
    let (app, state, _dir) = test_app();
    let (status, body) = send(app.clone(), upload("survey.csv", TRAINING_CSV)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Model trained successfully");
    assert!(state.current_model().is_trained());

    let (_, health) = send(app, get("/health")).await;
    assert_eq!(health["model_trained"], true);
    assert_eq!(health["feature_names"].as_array().unwrap().len(), 11);
}

fn survey_workbook() -> Vec<u8> {
    let rows: [(f64, f64, f64, f64, &str, &str, &str); 3] = [
        (62.0, 30.0, 10.0, 6.0, "jamais", "parfois", "toujours"),
        (35.0, 5.0, 8.0, 5.0, "toujours", "toujours", "toujours"),
        (48.0, 20.0, 9.0, 7.0, "souvent", "jamais", "parfois"),
    ];
    let headers = [
        "Age",
        "Ancienneté agricole",
        "H travail / jour",
        "J travail / Sem",
        "Masque pour pesticides",
        "Gants",
        "Bottes",
    ];

    let mut workbook = rust_xlsxwriter::Workbook::new();
    let sheet = workbook.add_worksheet();
    for (col, header) in headers.iter().enumerate() {
        sheet.write_string(0, col as u16, *header).unwrap();
    }
    for (i, (age, experience, hours, days, mask, gloves, boots)) in rows.iter().enumerate() {
        let row = i as u32 + 1;
        for (col, value) in [age, experience, hours, days].into_iter().enumerate() {
            sheet.write_number(row, col as u16, *value).unwrap();
        }
        for (offset, answer) in [mask, gloves, boots].into_iter().enumerate() {
            sheet.write_string(row, 4 + offset as u16, *answer).unwrap();
        }
    }
    workbook.save_to_buffer().unwrap()
}

#[tokio::test]
async fn test_train_model_from_xlsx() {
    let (app, state, _dir) = test_app();
    let (status, body) = send(app, upload("survey.xlsx", survey_workbook())).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Model trained successfully");
    assert!(state.current_model().is_trained());
}

#[tokio::test]
async fn test_train_model_rejects_unknown_format() {
    let (app, state, _dir) = test_app();
    let (status, _) = send(app, upload("survey.txt", TRAINING_CSV)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(!state.current_model().is_trained());
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_uploads_always_swap_a_trained_model() {
    let (app, state, _dir) = test_app();

    let uploads: Vec<_> = (0..8)
        .map(|_| {
            let app = app.clone();
            tokio::spawn(async move { send(app, upload("survey.csv", TRAINING_CSV)).await })
        })
        .collect();

    for upload in uploads {
        let (status, body) = upload.await.unwrap();
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["message"], "Model trained successfully");
        assert!(state.current_model().is_trained());
    }
}

#[tokio::test]
async fn test_train_model_too_few_rows_fails() {
    let (app, state, _dir) = test_app();
    let (status, body) = send(app, upload("survey.csv", "Age\n40\n")).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "Training error: Model training failed");
    assert!(!state.current_model().is_trained());
}

use std::path::Path;
use std::sync::Arc;

use actix_web::{App, http::StatusCode, test, web};
use serde_json::{Value, json};
use tempfile::TempDir;

use rust_resultboard::config::UploadConfig;
use rust_resultboard::routes;
use rust_resultboard::storage::{Storage, sea_orm_storage::SeaOrmStorage};
use rust_resultboard::utils::{json_error_handler, query_error_handler};

const BOUNDARY: &str = "resultboard-test-boundary";
const PNG_BYTES: &[u8] = &[
    0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A, 0x00, 0x00, 0x00, 0x0D, 0x49, 0x48, 0x44, 0x52,
];
const JPEG_BYTES: &[u8] = &[0xFF, 0xD8, 0xFF, 0xE0, 0x00, 0x10, 0x4A, 0x46];

struct Fixture {
    storage: Arc<dyn Storage>,
    upload: UploadConfig,
    upload_dir: TempDir,
}

async fn fixture() -> Fixture {
    let storage: Arc<dyn Storage> = Arc::new(SeaOrmStorage::in_memory().await.unwrap());
    let upload_dir = tempfile::tempdir().unwrap();
    let upload = UploadConfig {
        dir: upload_dir.path().to_string_lossy().into_owned(),
        max_size: 1024,
        allowed_types: vec![".png".into(), ".jpg".into(), ".jpeg".into()],
    };
    Fixture {
        storage,
        upload,
        upload_dir,
    }
}

macro_rules! init_app {
    ($fixture:expr) => {
        test::init_service(
            App::new()
                .app_data(web::QueryConfig::default().error_handler(query_error_handler))
                .app_data(web::JsonConfig::default().error_handler(json_error_handler))
                .app_data(web::Data::new($fixture.storage.clone()))
                .app_data(web::Data::new($fixture.upload.clone()))
                .configure(routes::configure_system_routes)
                .configure(routes::configure_subject_routes)
                .configure(routes::configure_result_routes)
                .configure(routes::configure_student_routes)
                .configure(routes::configure_upload_routes),
        )
        .await
    };
}

/// 构造 multipart/form-data 请求体
fn multipart_body(fields: &[(&str, &str)], photo: Option<(&str, &[u8])>) -> Vec<u8> {
    let mut body = Vec::new();
    for (name, value) in fields {
        body.extend_from_slice(
            format!(
                "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{name}\"\r\n\r\n{value}\r\n"
            )
            .as_bytes(),
        );
    }
    if let Some((file_name, data)) = photo {
        body.extend_from_slice(
            format!(
                "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"photo\"; filename=\"{file_name}\"\r\nContent-Type: application/octet-stream\r\n\r\n"
            )
            .as_bytes(),
        );
        body.extend_from_slice(data);
        body.extend_from_slice(b"\r\n");
    }
    body.extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());
    body
}

fn multipart_request(
    method: test::TestRequest,
    fields: &[(&str, &str)],
    photo: Option<(&str, &[u8])>,
) -> test::TestRequest {
    method
        .insert_header((
            "content-type",
            format!("multipart/form-data; boundary={BOUNDARY}"),
        ))
        .set_payload(multipart_body(fields, photo))
}

fn subject_payload(regno: &str, name: &str, code: &str, title: &str, ia: &str, ea: &str) -> Value {
    json!({
        "regno": regno,
        "name": name,
        "department": "CSE",
        "year": "2",
        "semester": "3",
        "subject_code": code,
        "subject_title": title,
        "ia": ia,
        "ea": ea,
    })
}

#[actix_web::test]
async fn test_health_check() {
    let fixture = fixture().await;
    let app = init_app!(fixture);

    let resp = test::call_service(&app, test::TestRequest::get().uri("/").to_request()).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body, json!({ "status": "Backend running successfully" }));
}

#[actix_web::test]
async fn test_create_subject_derives_total_from_string_marks() {
    let fixture = fixture().await;
    let app = init_app!(fixture);

    let req = test::TestRequest::post()
        .uri("/api/results")
        .set_json(subject_payload("21CS001", "Asha", "CS301", "DBMS", "40", "55"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["code"], 0);
    assert_eq!(body["message"], "Subject added successfully");
    assert_eq!(body["data"]["total"].as_f64(), Some(95.0));
    assert_eq!(body["data"]["result"], "PASS");

    // 缺省分数按 0 处理
    let req = test::TestRequest::post()
        .uri("/api/results")
        .set_json(json!({ "regno": "21CS002", "name": "Ravi", "subject_code": "CS302", "subject_title": "OS" }))
        .to_request();
    let body: Value = test::read_body_json(test::call_service(&app, req).await).await;
    assert_eq!(body["data"]["total"].as_f64(), Some(0.0));
    assert_eq!(body["data"]["result"], "FAIL");
}

#[actix_web::test]
async fn test_malformed_marks_are_rejected() {
    let fixture = fixture().await;
    let app = init_app!(fixture);

    let req = test::TestRequest::post()
        .uri("/api/results")
        .set_json(subject_payload("21CS001", "Asha", "CS301", "DBMS", "forty", "55"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn test_subject_standings_and_dashboard() {
    let fixture = fixture().await;
    let app = init_app!(fixture);

    for payload in [
        subject_payload("21CS001", "Asha", "CS301", "DBMS", "40", "55"),
        subject_payload("21CS002", "Ravi", "CS301", "DBMS", "30", "42"),
        subject_payload("21CS002", "Ravi", "CS302", "OS", "10", "20"),
    ] {
        let req = test::TestRequest::post()
            .uri("/api/results")
            .set_json(payload)
            .to_request();
        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::OK);
    }

    let req = test::TestRequest::get()
        .uri("/api/results?subject=DBMS")
        .to_request();
    let standings: Value = test::call_and_read_body_json(&app, req).await;
    let standings = standings.as_array().unwrap();
    assert_eq!(standings.len(), 2);
    assert_eq!(standings[0]["regno"], "21CS001");
    assert_eq!(standings[0]["position"], 1);
    assert_eq!(standings[0]["gpa"], 10);
    assert_eq!(standings[1]["regno"], "21CS002");
    assert_eq!(standings[1]["position"], 2);
    assert_eq!(standings[1]["gpa"], 8);

    let req = test::TestRequest::get().uri("/api/results").to_request();
    let dashboard: Value = test::call_and_read_body_json(&app, req).await;
    let dashboard = dashboard.as_array().unwrap();
    assert_eq!(dashboard.len(), 2);
    assert_eq!(dashboard[0]["regno"], "21CS001");
    assert_eq!(dashboard[0]["arrears"], 0);
    assert_eq!(dashboard[0]["cgpa"].as_f64(), Some(10.0));
    assert_eq!(dashboard[1]["regno"], "21CS002");
    assert_eq!(dashboard[1]["arrears"], 1);
    assert_eq!(dashboard[1]["cgpa"].as_f64(), Some(4.0));

    // 空过滤条件等同于不过滤
    let req = test::TestRequest::get()
        .uri("/api/results?year=&semester=&subject=")
        .to_request();
    let unfiltered: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(unfiltered.as_array().unwrap(), dashboard);

    let req = test::TestRequest::get().uri("/api/subjects?year=2").to_request();
    let subjects: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(
        subjects,
        json!([{ "subject_title": "DBMS" }, { "subject_title": "OS" }])
    );

    let req = test::TestRequest::get().uri("/api/subjects?year=4").to_request();
    let subjects: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(subjects, json!([]));
}

#[actix_web::test]
async fn test_update_and_delete_subject_row() {
    let fixture = fixture().await;
    let app = init_app!(fixture);

    let req = test::TestRequest::post()
        .uri("/api/results")
        .set_json(subject_payload("21CS001", "Asha", "CS301", "DBMS", "10", "20"))
        .to_request();
    let created: Value = test::call_and_read_body_json(&app, req).await;
    let id = created["data"]["id"].as_i64().unwrap();

    let req = test::TestRequest::put()
        .uri(&format!("/api/results/{id}"))
        .set_json(json!({ "ia": "25", "ea": 40 }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "Marks updated successfully");

    let req = test::TestRequest::get().uri("/api/results/21CS001").to_request();
    let rows: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(rows[0]["total"].as_f64(), Some(65.0));
    assert_eq!(rows[0]["result"], "PASS");

    let req = test::TestRequest::put()
        .uri("/api/results/9999")
        .set_json(json!({ "ia": 1, "ea": 1 }))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::NOT_FOUND);

    let req = test::TestRequest::put()
        .uri("/api/results/abc")
        .set_json(json!({ "ia": 1, "ea": 1 }))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::BAD_REQUEST);

    let req = test::TestRequest::delete()
        .uri(&format!("/api/results/{id}"))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["message"], "Subject deleted");

    let req = test::TestRequest::delete()
        .uri(&format!("/api/results/{id}"))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn test_student_photo_is_stored_served_and_inherited() {
    let fixture = fixture().await;
    let app = init_app!(fixture);

    let req = multipart_request(
        test::TestRequest::post().uri("/api/students"),
        &[
            ("regno", "21CS001"),
            ("name", "Asha  Kumari"),
            ("department", "CSE"),
            ("year", "2"),
        ],
        Some(("me.png", PNG_BYTES)),
    )
    .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "Student added successfully");

    let photo = body["data"]["photo"].as_str().unwrap().to_string();
    assert!(photo.starts_with("asha_kumari_"));
    assert!(photo.ends_with(".png"));
    let stored = Path::new(&fixture.upload.dir).join(&photo);
    assert_eq!(std::fs::read(&stored).unwrap(), PNG_BYTES);
    assert!(fixture.upload_dir.path().join(&photo).exists());

    let req = test::TestRequest::get().uri("/api/students").to_request();
    let students: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(students[0]["regno"], "21CS001");
    assert_eq!(students[0]["photo"], photo.as_str());

    // 新增科目沿用已有照片
    let req = test::TestRequest::post()
        .uri("/api/results")
        .set_json(subject_payload("21CS001", "Asha  Kumari", "CS301", "DBMS", "40", "55"))
        .to_request();
    let created: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(created["data"]["photo"], photo.as_str());

    let req = test::TestRequest::get()
        .uri(&format!("/uploads/{photo}"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        resp.headers().get("content-type").unwrap().to_str().unwrap(),
        "image/png"
    );
    let served = test::read_body(resp).await;
    assert_eq!(served.as_ref(), PNG_BYTES);
}

#[actix_web::test]
async fn test_student_without_photo_gets_empty_photo() {
    let fixture = fixture().await;
    let app = init_app!(fixture);

    // 空文件名的照片部分视为未上传
    let req = multipart_request(
        test::TestRequest::post().uri("/api/students"),
        &[("regno", "21CS003"), ("name", "Meena"), ("year", "1")],
        Some(("", b"")),
    )
    .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["code"], 0);
    assert_eq!(body["data"]["photo"], "");

    let req = test::TestRequest::get().uri("/api/students").to_request();
    let students: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(students.as_array().unwrap().len(), 1);
    assert_eq!(students[0]["photo"], "");
}

#[actix_web::test]
async fn test_rejects_invalid_photos() {
    let fixture = fixture().await;
    let app = init_app!(fixture);
    let fields = [("regno", "21CS001"), ("name", "Asha")];

    let req = multipart_request(
        test::TestRequest::post().uri("/api/students"),
        &fields,
        Some(("notes.txt", b"hello")),
    )
    .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::BAD_REQUEST);

    // 扩展名与内容不一致
    let req = multipart_request(
        test::TestRequest::post().uri("/api/students"),
        &fields,
        Some(("me.png", JPEG_BYTES)),
    )
    .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::BAD_REQUEST);

    let oversized = [PNG_BYTES, &[0u8; 2048][..]].concat();
    let req = multipart_request(
        test::TestRequest::post().uri("/api/students"),
        &fields,
        Some(("big.png", &oversized)),
    )
    .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::BAD_REQUEST);

    let req = test::TestRequest::get().uri("/api/students").to_request();
    let students: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(students, json!([]));
    assert_eq!(std::fs::read_dir(fixture.upload_dir.path()).unwrap().count(), 0);
}

#[actix_web::test]
async fn test_failed_student_write_discards_saved_photo() {
    let fixture = fixture().await;
    let app = init_app!(fixture);

    // 缺少学号，照片已保存但写库失败
    let req = multipart_request(
        test::TestRequest::post().uri("/api/students"),
        &[("name", "Asha")],
        Some(("me.png", PNG_BYTES)),
    )
    .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(std::fs::read_dir(fixture.upload_dir.path()).unwrap().count(), 0);

    let req = multipart_request(
        test::TestRequest::post().uri("/api/students"),
        &[("regno", "21CS001"), ("name", "Asha")],
        None,
    )
    .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::OK);

    let req = test::TestRequest::get().uri("/api/students").to_request();
    let students: Value = test::call_and_read_body_json(&app, req).await;
    let student_id = students[0]["id"].as_i64().unwrap();

    // regno 为 NOT NULL，不带学号的更新在数据库层失败
    let req = multipart_request(
        test::TestRequest::put().uri(&format!("/api/students/{student_id}")),
        &[("name", "Asha K")],
        Some(("me.jpg", JPEG_BYTES)),
    )
    .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(std::fs::read_dir(fixture.upload_dir.path()).unwrap().count(), 0);

    let req = test::TestRequest::get().uri("/api/results/21CS001").to_request();
    let rows: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(rows, json!([]));
    let req = test::TestRequest::get().uri("/api/students").to_request();
    let students: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(students[0]["name"], "Asha");
}

#[actix_web::test]
async fn test_update_student_fans_out_over_all_rows() {
    let fixture = fixture().await;
    let app = init_app!(fixture);

    let req = multipart_request(
        test::TestRequest::post().uri("/api/students"),
        &[("regno", "21CS001"), ("name", "Asha"), ("department", "CSE"), ("year", "2")],
        Some(("me.jpg", JPEG_BYTES)),
    )
    .to_request();
    let created: Value = test::call_and_read_body_json(&app, req).await;
    let photo = created["data"]["photo"].as_str().unwrap().to_string();

    for payload in [
        subject_payload("21CS001", "Asha", "CS301", "DBMS", "40", "55"),
        subject_payload("21CS001", "Asha", "CS302", "OS", "30", "30"),
        subject_payload("21CS002", "Ravi", "CS301", "DBMS", "30", "30"),
    ] {
        let req = test::TestRequest::post()
            .uri("/api/results")
            .set_json(payload)
            .to_request();
        test::call_service(&app, req).await;
    }

    let req = test::TestRequest::get().uri("/api/students").to_request();
    let students: Value = test::call_and_read_body_json(&app, req).await;
    let student_id = students[0]["id"].as_i64().unwrap();

    let req = multipart_request(
        test::TestRequest::put().uri(&format!("/api/students/{student_id}")),
        &[("regno", "21CS099"), ("name", "Asha K"), ("department", "ECE"), ("year", "3")],
        None,
    )
    .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "Student profile updated successfully");

    let req = test::TestRequest::get().uri("/api/results/21CS001").to_request();
    let old_rows: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(old_rows, json!([]));

    let req = test::TestRequest::get().uri("/api/results/21CS099").to_request();
    let rows: Value = test::call_and_read_body_json(&app, req).await;
    let rows = rows.as_array().unwrap();
    assert_eq!(rows.len(), 2);
    for row in rows {
        assert_eq!(row["name"], "Asha K");
        assert_eq!(row["department"], "ECE");
        assert_eq!(row["year"], "3");
        // 未重新上传时保留原照片
        assert_eq!(row["photo"], photo.as_str());
    }

    let req = test::TestRequest::get().uri("/api/results/21CS002").to_request();
    let untouched: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(untouched[0]["name"], "Ravi");
    assert_eq!(untouched[0]["department"], "CSE");

    let req = multipart_request(
        test::TestRequest::put().uri("/api/students/9999"),
        &[("regno", "X"), ("name", "Y")],
        None,
    )
    .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn test_delete_student_removes_every_row() {
    let fixture = fixture().await;
    let app = init_app!(fixture);

    let req = multipart_request(
        test::TestRequest::post().uri("/api/students"),
        &[("regno", "21CS001"), ("name", "Asha")],
        None,
    )
    .to_request();
    test::call_service(&app, req).await;
    let req = test::TestRequest::post()
        .uri("/api/results")
        .set_json(subject_payload("21CS001", "Asha", "CS301", "DBMS", "40", "55"))
        .to_request();
    test::call_service(&app, req).await;

    let req = test::TestRequest::delete()
        .uri("/api/students/9999")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "Student not found");

    let req = test::TestRequest::get().uri("/api/students").to_request();
    let students: Value = test::call_and_read_body_json(&app, req).await;
    let student_id = students[0]["id"].as_i64().unwrap();

    let req = test::TestRequest::delete()
        .uri(&format!("/api/students/{student_id}"))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["message"], "Student and all subjects deleted successfully");

    let req = test::TestRequest::get().uri("/api/students").to_request();
    let students: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(students, json!([]));
    let req = test::TestRequest::get().uri("/api/results").to_request();
    let dashboard: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(dashboard, json!([]));
}

#[actix_web::test]
async fn test_photo_route_rejects_unknown_and_traversal() {
    let fixture = fixture().await;
    std::fs::write(fixture.upload_dir.path().join("..secret.png"), PNG_BYTES).unwrap();
    let app = init_app!(fixture);

    let req = test::TestRequest::get()
        .uri("/uploads/missing.png")
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::NOT_FOUND);

    let req = test::TestRequest::get()
        .uri("/uploads/..secret.png")
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::NOT_FOUND);
}

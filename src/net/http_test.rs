use super::*;

fn request(bearer: Option<&str>, body: RequestBody) -> HttpRequest {
    HttpRequest {
        method: Method::Post,
        url: "https://api.test/posts".to_owned(),
        bearer: bearer.map(str::to_owned),
        body,
    }
}

#[test]
fn authorization_formats_bearer_header() {
    let req = request(Some("abc"), RequestBody::Empty);
    assert_eq!(req.authorization().as_deref(), Some("Bearer abc"));
}

#[test]
fn authorization_absent_for_anonymous_request() {
    assert_eq!(request(None, RequestBody::Empty).authorization(), None);
}

#[test]
fn form_part_finds_named_field() {
    let req = request(
        None,
        RequestBody::Multipart(vec![
            FormPart::text("type", "post"),
            FormPart::File {
                name: "image".to_owned(),
                file_name: "a.png".to_owned(),
                content_type: "image/png".to_owned(),
                bytes: vec![1, 2, 3],
            },
        ]),
    );
    assert_eq!(req.form_part("type"), Some(&FormPart::text("type", "post")));
    assert!(matches!(req.form_part("image"), Some(FormPart::File { bytes, .. }) if bytes == &[1, 2, 3]));
    assert!(req.form_part("video").is_none());
}

#[test]
fn form_part_is_none_for_json_body() {
    let req = request(None, RequestBody::Json(serde_json::json!({ "type": "post" })));
    assert!(req.form_part("type").is_none());
}

#[test]
fn response_ok_covers_2xx_only() {
    assert!(HttpResponse { status: 200, body: Vec::new() }.ok());
    assert!(HttpResponse { status: 204, body: Vec::new() }.ok());
    assert!(!HttpResponse { status: 301, body: Vec::new() }.ok());
    assert!(!HttpResponse { status: 401, body: Vec::new() }.ok());
}

#[test]
fn method_names_match_http_verbs() {
    assert_eq!(Method::Get.as_str(), "GET");
    assert_eq!(Method::Patch.as_str(), "PATCH");
    assert_eq!(Method::Delete.as_str(), "DELETE");
}

#[cfg(not(feature = "csr"))]
#[test]
fn browser_transport_fails_off_browser() {
    let result = futures::executor::block_on(BrowserTransport.send(request(None, RequestBody::Empty)));
    assert!(matches!(result, Err(ApiError::Network(_))));
}

// =============================================================
// Response bodies
// =============================================================

#[test]
fn unreadable_success_body_is_network_error() {
    let result = HttpResponse::from_body_read(200, Err("stream aborted".to_owned()));
    assert!(matches!(result, Err(ApiError::Network(msg)) if msg.contains("stream aborted")));
}

#[test]
fn unreadable_error_body_keeps_status() {
    let response = HttpResponse::from_body_read(500, Err("stream aborted".to_owned())).unwrap();
    assert_eq!(response, HttpResponse { status: 500, body: Vec::new() });
}

#[test]
fn readable_body_is_kept() {
    let response = HttpResponse::from_body_read(201, Ok(b"{}".to_vec())).unwrap();
    assert!(response.ok());
    assert_eq!(response.body, b"{}".to_vec());
}

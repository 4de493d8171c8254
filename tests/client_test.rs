//! HTTPクライアントの応答デコードテスト（ローカルの1回限りサーバ）

use person_detect::client::DetectionClient;
use person_detect_common::{BackendConfig, Error, QueryState};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

/// 1リクエストだけ固定の応答を返すサーバを起動し、そのURLを返す
async fn serve_once(status_line: &'static str, body: &'static str) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind failed");
    let addr = listener.local_addr().expect("no local addr");

    tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.expect("accept failed");
        let mut buf = [0u8; 4096];
        let _ = socket.read(&mut buf).await;
        let response = format!(
            "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            status_line,
            body.len(),
            body
        );
        let _ = socket.write_all(response.as_bytes()).await;
        let _ = socket.shutdown().await;
    });

    format!("http://{}", addr)
}

fn client(base_url: &str) -> DetectionClient {
    DetectionClient::new(BackendConfig::new(base_url).unwrap(), 5).unwrap()
}

#[tokio::test]
async fn test_history_body_is_decoded() {
    let url = serve_once(
        "200 OK",
        r#"{"records":[{"id":7,"timestamp":"2024-03-05T14:07:09.123456","num_people":2,"image_path":"outputs/vis_7.jpg"}],"total":11}"#,
    )
    .await;

    let page = client(&url).fetch_history(&QueryState::default()).await.unwrap();
    assert_eq!(page.total, 11);
    assert_eq!(page.records.len(), 1);
    assert_eq!(page.records[0].id, 7);
    assert_eq!(page.records[0].num_people, 2);
}

/// 不正なボディも request failed 扱い
#[tokio::test]
async fn test_undecodable_body_is_request_failure() {
    let url = serve_once("200 OK", "<html>oops</html>").await;

    let error = client(&url).fetch_history(&QueryState::default()).await.unwrap_err();
    assert!(error.is_request_failure());
    assert!(matches!(error, Error::Http(_)));
}

#[tokio::test]
async fn test_error_status_is_reported() {
    let url = serve_once("500 Internal Server Error", r#"{"detail":"boom"}"#).await;

    let error = client(&url).fetch_history(&QueryState::default()).await.unwrap_err();
    assert!(matches!(error, Error::Status(500)));
}

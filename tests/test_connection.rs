use hearth::http::connection::Connection;
use tokio::io::{AsyncReadExt, AsyncWriteExt, duplex};

async fn exchange(raw: &[u8], close_client_write: bool) -> String {
    let (mut client, server) = duplex(4096);

    let handle = tokio::spawn(async move {
        let mut conn = Connection::new(server);
        conn.run().await.is_ok()
    });

    client.write_all(raw).await.unwrap();
    if close_client_write {
        client.shutdown().await.unwrap();
    }

    let mut out = Vec::new();
    client.read_to_end(&mut out).await.unwrap();

    assert!(handle.await.unwrap());

    String::from_utf8(out).unwrap()
}

#[tokio::test]
async fn test_root_scenario() {
    let out = exchange(b"GET / HTTP/1.1\r\n\r\n", false).await;

    assert_eq!(
        out,
        "HTTP/1.1 200 OK\r\nContent-Type: text/plain\r\nContent-Length: 0\r\n\r\n"
    );
}

#[tokio::test]
async fn test_echo_scenario() {
    let out = exchange(b"GET /echo/abc HTTP/1.1\r\nHost: localhost:4221\r\n\r\n", false).await;

    assert_eq!(
        out,
        "HTTP/1.1 200 OK\r\nContent-Type: text/plain\r\nContent-Length: 3\r\n\r\nabc"
    );
}

#[tokio::test]
async fn test_user_agent_scenario() {
    let out = exchange(
        b"GET /user-agent HTTP/1.1\r\nHost: localhost:4221\r\nUser-Agent: curl/8.1\r\nAccept: */*\r\n\r\n",
        false,
    )
    .await;

    assert_eq!(
        out,
        "HTTP/1.1 200 OK\r\nContent-Type: text/plain\r\nContent-Length: 8\r\n\r\ncurl/8.1"
    );
}

#[tokio::test]
async fn test_not_found_scenario() {
    let out = exchange(b"GET /nope HTTP/1.1\r\n\r\n", false).await;

    assert_eq!(
        out,
        "HTTP/1.1 404 Not Found\r\nContent-Type: text/plain\r\nContent-Length: 0\r\n\r\n"
    );
}

#[tokio::test]
async fn test_request_body_is_not_read() {
    let out = exchange(
        b"POST /echo/x HTTP/1.1\r\nContent-Length: 5\r\n\r\nhello",
        false,
    )
    .await;

    assert!(out.ends_with("Content-Length: 1\r\n\r\nx"));
}

#[tokio::test]
async fn test_partial_request_is_still_answered() {
    let out = exchange(b"GET /echo/partial HTTP/1.1\r\nHost: a\r\n", true).await;

    assert!(out.starts_with("HTTP/1.1 200 OK\r\n"));
    assert!(out.ends_with("\r\n\r\npartial"));
}

#[tokio::test]
async fn test_empty_connection_gets_not_found() {
    let out = exchange(b"", true).await;

    assert_eq!(
        out,
        "HTTP/1.1 404 Not Found\r\nContent-Type: text/plain\r\nContent-Length: 0\r\n\r\n"
    );
}

#[tokio::test]
async fn test_output_has_single_blank_line_and_matching_length() {
    let out = exchange(b"GET /echo/a/b/c HTTP/1.1\r\n\r\n", false).await;

    let (head, body) = out.split_once("\r\n\r\n").unwrap();
    assert!(!body.contains("\r\n\r\n"));
    assert!(head.starts_with("HTTP/1.1 200 OK"));
    assert!(head.contains(&format!("Content-Length: {}", body.len())));
    assert_eq!(body, "a/b/c");
}

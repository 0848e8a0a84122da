#![allow(dead_code)]

pub mod http {
    use std::io::{Read, Write};
    use std::net::{SocketAddr, TcpStream};
    use std::time::Duration;

    /// Raw HTTP/1.1 response split into its parts
    pub struct RawResponse {
        pub status: u16,
        pub headers: Vec<(String, String)>,
        pub body: String,
    }

    impl RawResponse {
        /// First value for `name`, case-insensitive
        pub fn header(&self, name: &str) -> Option<&str> {
            self.headers
                .iter()
                .find(|(k, _)| k.eq_ignore_ascii_case(name))
                .map(|(_, v)| v.as_str())
        }
    }

    /// Send a GET with the given extra headers and read until the server closes
    pub fn send_request(addr: &SocketAddr, headers: &[(&str, &str)]) -> RawResponse {
        let mut req = String::from("GET / HTTP/1.1\r\nHost: localhost\r\nConnection: close\r\n");
        for (k, v) in headers {
            req.push_str(&format!("{k}: {v}\r\n"));
        }
        req.push_str("\r\n");

        let mut stream = TcpStream::connect(addr).unwrap();
        stream.write_all(req.as_bytes()).unwrap();
        stream
            .set_read_timeout(Some(Duration::from_secs(5)))
            .unwrap();
        let mut buf = Vec::new();
        stream.read_to_end(&mut buf).unwrap();
        parse_response(&String::from_utf8_lossy(&buf))
    }

    fn parse_response(resp: &str) -> RawResponse {
        let (head, body) = resp.split_once("\r\n\r\n").unwrap_or((resp, ""));
        let mut lines = head.lines();
        let status = lines
            .next()
            .and_then(|l| l.split_whitespace().nth(1))
            .and_then(|s| s.parse().ok())
            .unwrap_or(0);
        let headers = lines
            .filter_map(|line| line.split_once(':'))
            .map(|(k, v)| (k.trim().to_string(), v.trim().to_string()))
            .collect();
        RawResponse {
            status,
            headers,
            body: body.to_string(),
        }
    }
}

pub mod test_server {
    use hxkit::BufferedResponse;
    use std::net::SocketAddr;
    use std::sync::Arc;
    use std::thread::{self, JoinHandle};

    pub type Headers = Vec<(String, String)>;

    /// tiny_http server that answers every request through `handler`
    ///
    /// Stops and joins its thread on drop.
    pub struct HxTestServer {
        pub addr: SocketAddr,
        server: Arc<tiny_http::Server>,
        handle: Option<JoinHandle<()>>,
    }

    impl HxTestServer {
        pub fn start<F>(handler: F) -> Self
        where
            F: Fn(&Headers) -> BufferedResponse + Send + 'static,
        {
            let server = Arc::new(tiny_http::Server::http("127.0.0.1:0").unwrap());
            let addr = server.server_addr().to_ip().unwrap();
            let worker = Arc::clone(&server);
            let handle = thread::spawn(move || {
                for request in worker.incoming_requests() {
                    let headers: Headers = request
                        .headers()
                        .iter()
                        .map(|h| (h.field.as_str().to_string(), h.value.to_string()))
                        .collect();
                    let res = handler(&headers);
                    let _ = request.respond(into_tiny(res));
                }
            });
            Self {
                addr,
                server,
                handle: Some(handle),
            }
        }
    }

    impl Drop for HxTestServer {
        fn drop(&mut self) {
            self.server.unblock();
            if let Some(handle) = self.handle.take() {
                let _ = handle.join();
            }
        }
    }

    fn into_tiny(res: BufferedResponse) -> tiny_http::Response<std::io::Cursor<Vec<u8>>> {
        let mut out = tiny_http::Response::from_data(res.body).with_status_code(res.status);
        for (name, value) in &res.headers {
            out.add_header(tiny_http::Header::from_bytes(name.as_bytes(), value.as_bytes()).unwrap());
        }
        out
    }
}

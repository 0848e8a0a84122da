//! End-to-end tests: htmx responses committed through a real HTTP server
//!
//! Each test starts a tiny_http server on an ephemeral port, builds the
//! response with [`HxResponse`] into a [`BufferedResponse`] and checks what
//! arrives on the wire over a raw `TcpStream`.

mod common;

use common::http::send_request;
use common::test_server::HxTestServer;
use hxkit::{
    request, BufferedResponse, HxResponse, ScrollDirection, Swap, SwapStyle, Trigger,
    STATUS_STOP_POLLING,
};

#[test]
fn test_all_directives_reach_the_wire() {
    let server = HxTestServer::start(|_headers| {
        let mut res = BufferedResponse::new();
        HxResponse::new()
            .status_code(STATUS_STOP_POLLING)
            .add_trigger("myEvent")
            .location("/profiles")
            .redirect("/pull")
            .push_url("/push")
            .refresh(true)
            .replace_url("/water")
            .retarget("#world")
            .reselect("#hello")
            .reswap(Swap::inner_html().show_on("#swappy", ScrollDirection::Top))
            .commit(&mut res)
            .unwrap();
        res
    });

    let resp = send_request(&server.addr, &[]);
    assert_eq!(resp.status, 286);
    assert_eq!(resp.header("HX-Trigger"), Some("myEvent"));
    assert_eq!(resp.header("HX-Location"), Some("/profiles"));
    assert_eq!(resp.header("HX-Redirect"), Some("/pull"));
    assert_eq!(resp.header("HX-Push-Url"), Some("/push"));
    assert_eq!(resp.header("HX-Refresh"), Some("true"));
    assert_eq!(resp.header("HX-Replace-Url"), Some("/water"));
    assert_eq!(resp.header("HX-Retarget"), Some("#world"));
    assert_eq!(resp.header("HX-Reselect"), Some("#hello"));
    assert_eq!(
        resp.header("HX-Reswap"),
        Some("innerHTML show:#swappy:top")
    );
}

#[test]
fn test_render_html_body_and_headers() {
    let server = HxTestServer::start(|_headers| {
        let mut res = BufferedResponse::new();
        let written = HxResponse::new()
            .retarget("#list")
            .reswap(SwapStyle::BeforeEnd)
            .render_html(&mut res, "<li>Tom</li>")
            .unwrap();
        assert_eq!(written, "<li>Tom</li>".len());
        res
    });

    let resp = send_request(&server.addr, &[]);
    assert_eq!(resp.status, 200);
    assert_eq!(resp.header("HX-Retarget"), Some("#list"));
    assert_eq!(resp.header("HX-Reswap"), Some("beforeend"));
    assert_eq!(resp.body, "<li>Tom</li>");
}

#[test]
fn test_must_render_html() {
    let server = HxTestServer::start(|_headers| {
        let mut res = BufferedResponse::new();
        HxResponse::new()
            .add_trigger(Trigger::detail("notify", "saved"))
            .must_render_html(&mut res, "<p>ok</p>");
        res
    });

    let resp = send_request(&server.addr, &[]);
    assert_eq!(resp.header("HX-Trigger"), Some(r#"{"notify":"saved"}"#));
    assert_eq!(resp.body, "<p>ok</p>");
}

#[test]
fn test_fragment_or_full_page_by_request_headers() {
    let server = HxTestServer::start(|headers| {
        let mut res = BufferedResponse::new();
        let mut hx = HxResponse::new();
        if request::is_htmx(headers) {
            hx.retarget(request::target(headers).as_deref().unwrap_or("body"));
            hx.render_html(&mut res, "<div>fragment</div>").unwrap();
        } else {
            hx.render_html(&mut res, "<html>page</html>").unwrap();
        }
        res
    });

    let fragment = send_request(
        &server.addr,
        &[("HX-Request", "true"), ("HX-Target", "main")],
    );
    assert_eq!(fragment.header("HX-Retarget"), Some("main"));
    assert_eq!(fragment.body, "<div>fragment</div>");

    let page = send_request(&server.addr, &[("HX-Request", "1")]);
    assert_eq!(page.header("HX-Retarget"), None);
    assert_eq!(page.body, "<html>page</html>");
}

#[test]
fn test_status_untouched_without_status_code() {
    let server = HxTestServer::start(|_headers| {
        let mut res = BufferedResponse::new();
        res.status = 201;
        HxResponse::new().refresh(false).commit(&mut res).unwrap();
        res
    });

    let resp = send_request(&server.addr, &[]);
    assert_eq!(resp.status, 201);
    assert_eq!(resp.header("HX-Refresh"), Some("false"));
}

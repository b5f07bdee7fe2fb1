use super::*;

// =============================================================
// URL construction
// =============================================================

#[test]
fn url_appends_path_to_fixed_base() {
    assert_eq!(url("/patients"), format!("{API_BASE}/patients"));
}

// =============================================================
// Bearer header derivation
// =============================================================

#[test]
fn bearer_present_iff_token_present() {
    assert_eq!(bearer(None), None);
    assert_eq!(bearer(Some("abc".to_owned())), Some("Bearer abc".to_owned()));
}

// =============================================================
// Native stubs
// =============================================================

#[test]
fn native_requests_report_unsupported() {
    let result = futures_executor_block_on(get_json::<serde_json::Value>("/patients", None));
    assert_eq!(result.unwrap_err(), ApiError::Unsupported);
}

#[test]
fn error_display_uses_backend_message() {
    let err = ApiError::Status {
        status: 400,
        message: "Patient not found".to_owned(),
    };
    assert_eq!(err.to_string(), "Patient not found");
}

/// Minimal block_on for the stub futures, which resolve immediately.
fn futures_executor_block_on<F: std::future::Future>(fut: F) -> F::Output {
    use std::pin::pin;
    use std::sync::Arc;
    use std::task::{Context, Poll, Wake, Waker};

    struct NoopWake;
    impl Wake for NoopWake {
        fn wake(self: Arc<Self>) {}
    }

    let waker = Waker::from(Arc::new(NoopWake));
    let mut cx = Context::from_waker(&waker);
    let mut fut = pin!(fut);
    match fut.as_mut().poll(&mut cx) {
        Poll::Ready(out) => out,
        Poll::Pending => unreachable!("stub futures are immediate"),
    }
}

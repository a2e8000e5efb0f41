// service-result/tests/logging.rs
// Outcome logging through a tracing subscriber

use service_result::ServiceResult;
use std::io;
use std::sync::{Arc, Mutex};

#[derive(Clone, Default)]
struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

impl CapturedLogs {
    fn contents(&self) -> String {
        String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
    }
}

impl io::Write for CapturedLogs {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

fn capture(f: impl FnOnce()) -> String {
    let logs = CapturedLogs::default();
    let writer = logs.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_ansi(false)
        .with_writer(move || writer.clone())
        .finish();
    tracing::subscriber::with_default(subscriber, f);
    logs.contents()
}

#[test]
fn test_server_failure_logs_error() {
    let output = capture(|| {
        ServiceResult::<()>::failure("database unreachable").log_outcome("load_user");
    });
    assert!(output.contains("ERROR"));
    assert!(output.contains("Operation failed"));
    assert!(output.contains("load_user"));
    assert!(output.contains("status_code=500"));
    assert!(output.contains("database unreachable"));
}

#[test]
fn test_client_failure_logs_warning() {
    let output = capture(|| {
        ServiceResult::<()>::failure_with_status(404, "not found").log_outcome("load_user");
    });
    assert!(output.contains("WARN"));
    assert!(output.contains("Operation rejected"));
    assert!(output.contains("status_code=404"));
    assert!(!output.contains("ERROR"));
}

#[test]
fn test_success_logs_debug() {
    let output = capture(|| {
        let result = ServiceResult::new(7).logged("count");
        assert_eq!(result.into_data(), Some(7));
    });
    assert!(output.contains("DEBUG"));
    assert!(output.contains("Operation succeeded"));
    assert!(output.contains("status_code=200"));
}

#[test]
fn test_construction_does_not_log() {
    let output = capture(|| {
        let _ = ServiceResult::new(1);
        let _ = ServiceResult::<i32>::failure("boom");
        let _: ServiceResult<i32> = (404, "missing").into();
    });
    assert!(output.is_empty());
}

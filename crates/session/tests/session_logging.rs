use std::io;
use std::sync::{Arc, Mutex};

use shopmatch_catalog::{NewProduct, ProductId, ProductPatch};
use shopmatch_parties::ProfilePatch;
use shopmatch_session::{Session, SessionConfig};

/// Collects formatted log output in memory.
#[derive(Clone, Default)]
struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

impl CapturedLogs {
    fn text(&self) -> String {
        let bytes = self.0.lock().map(|b| b.clone()).unwrap_or_default();
        String::from_utf8_lossy(&bytes).into_owned()
    }
}

impl io::Write for CapturedLogs {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        if let Ok(mut bytes) = self.0.lock() {
            bytes.extend_from_slice(buf);
        }
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

fn with_captured_logs(f: impl FnOnce()) -> String {
    let logs = CapturedLogs::default();
    let writer = logs.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(move || writer.clone())
        .with_ansi(false)
        .with_max_level(tracing::Level::DEBUG)
        .finish();
    tracing::subscriber::with_default(subscriber, f);
    logs.text()
}

/// String fields may be rendered quoted or bare depending on how they were recorded.
fn has_field(line: &str, name: &str, value: &str) -> bool {
    line.contains(&format!("{name}={value}")) || line.contains(&format!("{name}=\"{value}\""))
}

#[test]
fn catalog_events_carry_session_fields() {
    let mut session_id = String::new();
    let output = with_captured_logs(|| {
        let session = Session::start(SessionConfig::default().with_username("carlos"));
        session_id = session.id().to_string();

        session.catalog().add(NewProduct::new("Correa", 25.0).with_stock(8)).unwrap();
        session
            .catalog()
            .update(ProductId::new(5), ProductPatch::stock(0))
            .unwrap();
        session.catalog().delete(ProductId::new(5));
    });

    for message in ["session started", "product added", "product updated", "product deleted"] {
        let line = output
            .lines()
            .find(|line| line.contains(message))
            .unwrap_or_else(|| panic!("no `{message}` event in:\n{output}"));
        assert!(has_field(line, "username", "carlos"), "missing username: {line}");
        assert!(line.contains(&format!("session_id={session_id}")), "missing session_id: {line}");
    }
}

#[test]
fn anonymous_session_records_placeholder_username() {
    let output = with_captured_logs(|| {
        let mut session = Session::start(SessionConfig::default());
        session
            .update_profile(ProfilePatch {
                phone: Some("+52 555 999 0000".to_string()),
                ..ProfilePatch::default()
            })
            .unwrap();
    });

    let line = output
        .lines()
        .find(|line| line.contains("profile updated"))
        .unwrap_or_else(|| panic!("no profile event in:\n{output}"));
    assert!(has_field(line, "username", "-"), "missing username: {line}");
}

use std::fs;
use std::time::{Duration, SystemTime};

use rustylog::context::LoggingContext;
use rustylog::priority::Priority;

fn bump_mtime(path: &std::path::Path, secs: u64) {
    let later = SystemTime::now() + Duration::from_secs(secs);
    let file = fs::OpenOptions::new().write(true).open(path).unwrap();
    file.set_modified(later).unwrap();
}

#[test]
fn changed_source_is_reloaded_exactly_once() {
    let dir = tempfile::tempdir().unwrap();
    let rc = dir.path().join("rc.conf");
    fs::write(&rc, "[category svc]\npriority = info\n").unwrap();

    let ctx = LoggingContext::new();
    ctx.load_file(&rc).unwrap();
    assert_eq!(
        ctx.categories().lookup("svc").unwrap().priority(),
        Priority::Info
    );

    // Untouched file: nothing to do.
    assert_eq!(ctx.reread(), 0);

    fs::write(&rc, "[category svc]\npriority = error\n").unwrap();
    bump_mtime(&rc, 5);

    assert_eq!(ctx.reread(), 1);
    assert_eq!(
        ctx.categories().lookup("svc").unwrap().priority(),
        Priority::Error
    );

    // The change was consumed; the next check is clean.
    assert_eq!(ctx.reread(), 0);
}

#[test]
fn loading_the_same_file_twice_still_reloads_once() {
    let dir = tempfile::tempdir().unwrap();
    let rc = dir.path().join("rc.conf");
    fs::write(&rc, "[category svc]\npriority = info\n").unwrap();

    let ctx = LoggingContext::new();
    ctx.load_file(&rc).unwrap();
    ctx.load_file(&rc).unwrap();

    fs::write(&rc, "[category svc]\npriority = error\n").unwrap();
    bump_mtime(&rc, 5);

    assert_eq!(ctx.reread(), 1);
    assert_eq!(ctx.reread(), 0);
}

#[test]
fn reread_can_be_disabled_by_configuration() {
    let dir = tempfile::tempdir().unwrap();
    let rc = dir.path().join("rc.conf");
    fs::write(&rc, "[config]\nreread = false\n\n[category svc]\npriority = info\n").unwrap();

    let ctx = LoggingContext::new();
    ctx.load_file(&rc).unwrap();

    fs::write(&rc, "[category svc]\npriority = error\n").unwrap();
    bump_mtime(&rc, 5);

    assert_eq!(ctx.reread(), 0);
    assert_eq!(
        ctx.categories().lookup("svc").unwrap().priority(),
        Priority::Info
    );
}

#[test]
fn interval_rate_limits_the_checks() {
    let dir = tempfile::tempdir().unwrap();
    let rc = dir.path().join("rc.conf");
    fs::write(&rc, "[config]\nreread_interval = 3600\n").unwrap();

    let ctx = LoggingContext::new();
    ctx.load_file(&rc).unwrap();

    // First call records the check time.
    assert_eq!(ctx.reread(), 0);

    fs::write(&rc, "[config]\nreread_interval = 3600\n[category svc]\npriority = warn\n").unwrap();
    bump_mtime(&rc, 5);

    // Within the interval the change is not even looked at.
    assert_eq!(ctx.reread(), 0);
    assert!(ctx.categories().lookup("svc").is_none());
}

#[test]
fn reread_merges_onto_live_instances() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("svc.log");
    let rc = dir.path().join("rc.conf");
    fs::write(
        &rc,
        format!(
            "[appender logfile]\ntype = file\npath = {}\n\n\
             [category svc]\npriority = info\nappender = logfile\n",
            out.display()
        ),
    )
    .unwrap();

    let ctx = LoggingContext::new();
    ctx.load_file(&rc).unwrap();
    let before = ctx.categories().lookup("svc").unwrap();

    fs::write(&rc, "[category svc]\npriority = debug\n").unwrap();
    bump_mtime(&rc, 5);
    assert_eq!(ctx.reread(), 1);

    // Same shared instance, updated in place; the appender binding from
    // the first load survives.
    let after = ctx.categories().lookup("svc").unwrap();
    assert!(std::sync::Arc::ptr_eq(&before, &after));
    assert_eq!(after.priority(), Priority::Debug);
    assert_eq!(after.appender(), Some("logfile".to_string()));
}

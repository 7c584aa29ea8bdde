use std::fs;

use rustylog::appender::AppenderKind;
use rustylog::context::LoggingContext;
use rustylog::layout::LayoutKind;
use rustylog::priority::Priority;

#[test]
fn full_file_wires_every_element_kind() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("svc.log");
    let rc = dir.path().join("rc.conf");
    fs::write(
        &rc,
        format!(
            "# service logging setup\n\
             [config]\n\
             bufsize = 0\n\
             reread = false\n\
             \n\
             [layout plain]\n\
             type = basic\n\
             \n\
             [rollingpolicy keep3]\n\
             type = sizewin\n\
             maxsize = 1KB\n\
             maxnum = 3\n\
             \n\
             [appender logfile]\n\
             type = file\n\
             path = {}\n\
             layout = plain\n\
             \n\
             [category root]\n\
             priority = warn\n\
             \n\
             [category svc]\n\
             priority = debug\n\
             appender = logfile\n",
            out.display()
        ),
    )
    .unwrap();

    let ctx = LoggingContext::new();
    ctx.load_file(&rc).unwrap();

    assert_eq!(ctx.layouts().lookup("plain").unwrap().kind(), LayoutKind::Basic);
    assert_eq!(
        ctx.rolling_policies().lookup("keep3").unwrap().params().maxnum,
        3
    );
    assert_eq!(
        ctx.appenders().lookup("logfile").unwrap().kind(),
        AppenderKind::File
    );
    assert_eq!(
        ctx.categories().lookup("svc").unwrap().priority(),
        Priority::Debug
    );

    ctx.log("svc.worker", Priority::Info, format_args!("started"), None)
        .unwrap();
    ctx.fini();

    assert_eq!(
        fs::read_to_string(&out).unwrap(),
        "info     svc.worker - started\n"
    );
}

#[test]
fn missing_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let ctx = LoggingContext::new();
    assert!(ctx.load_file(&dir.path().join("absent.conf")).is_err());
}

#[test]
fn malformed_element_is_skipped_but_the_rest_loads() {
    let dir = tempfile::tempdir().unwrap();
    let rc = dir.path().join("rc.conf");
    fs::write(
        &rc,
        "[layout broken]\ntype = nosuchlayout\n\n\
         [category svc]\npriority = info\nadditivity = maybe\n\n\
         [category ok]\npriority = trace\n",
    )
    .unwrap();

    let ctx = LoggingContext::new();
    ctx.load_file(&rc).unwrap();

    // The broken layout kept its default; the bad additivity value was
    // reported after the priority had already been applied; the last
    // element loaded normally.
    assert_eq!(
        ctx.layouts().lookup("broken").unwrap().kind(),
        LayoutKind::Basic
    );
    let svc = ctx.categories().lookup("svc").unwrap();
    assert_eq!(svc.priority(), Priority::Info);
    assert!(svc.additivity());
    assert_eq!(
        ctx.categories().lookup("ok").unwrap().priority(),
        Priority::Trace
    );
}

#[test]
fn syntax_error_fails_the_whole_load() {
    let dir = tempfile::tempdir().unwrap();
    let rc = dir.path().join("rc.conf");
    fs::write(&rc, "[appender a\npath = x\n").unwrap();

    let ctx = LoggingContext::new();
    assert!(ctx.load_file(&rc).is_err());
    assert!(ctx.appenders().lookup("a").is_none());
}

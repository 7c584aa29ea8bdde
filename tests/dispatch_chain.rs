use rustylog::conf::parse_str;
use rustylog::context::LoggingContext;
use rustylog::priority::Priority;
use rustylog::rc::load_nodes;

fn read(path: &std::path::Path) -> String {
    std::fs::read_to_string(path).unwrap_or_default()
}

#[test]
fn additive_chain_reaches_every_ancestor_appender() {
    let dir = tempfile::tempdir().unwrap();
    let leaf = dir.path().join("leaf.log");
    let mid = dir.path().join("mid.log");
    let root = dir.path().join("root.log");
    let conf = format!(
        "[appender a_leaf]\ntype = file\npath = {}\n\n\
         [appender a_mid]\ntype = file\npath = {}\n\n\
         [appender a_root]\ntype = file\npath = {}\n\n\
         [category root]\npriority = debug\nappender = a_root\n\n\
         [category svc]\nappender = a_mid\n\n\
         [category svc.sub]\nappender = a_leaf\n",
        leaf.display(),
        mid.display(),
        root.display()
    );

    let ctx = LoggingContext::new();
    load_nodes(&ctx, &parse_str(&conf).unwrap());
    ctx.log("svc.sub", Priority::Info, format_args!("up the chain"), None)
        .unwrap();
    ctx.fini();

    for path in [&leaf, &mid, &root] {
        assert_eq!(read(path), "info     svc.sub - up the chain\n");
    }
}

#[test]
fn non_additive_category_cuts_the_walk() {
    let dir = tempfile::tempdir().unwrap();
    let mid = dir.path().join("mid.log");
    let root = dir.path().join("root.log");
    let conf = format!(
        "[appender a_mid]\ntype = file\npath = {}\n\n\
         [appender a_root]\ntype = file\npath = {}\n\n\
         [category root]\npriority = debug\nappender = a_root\n\n\
         [category svc]\nappender = a_mid\nadditivity = false\n",
        mid.display(),
        root.display()
    );

    let ctx = LoggingContext::new();
    load_nodes(&ctx, &parse_str(&conf).unwrap());
    ctx.log("svc.sub", Priority::Warn, format_args!("stops at svc"), None)
        .unwrap();
    ctx.fini();

    assert_eq!(read(&mid), "warn     svc.sub - stops at svc\n");
    assert_eq!(read(&root), "");
}

#[test]
fn category_without_appender_is_a_transparent_link() {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path().join("root.log");
    let conf = format!(
        "[appender a_root]\ntype = file\npath = {}\n\n\
         [category root]\npriority = debug\nappender = a_root\n\n\
         [category svc]\npriority = info\n",
        root.display()
    );

    let ctx = LoggingContext::new();
    load_nodes(&ctx, &parse_str(&conf).unwrap());
    ctx.log("svc.sub", Priority::Info, format_args!("passes through"), None)
        .unwrap();
    ctx.fini();

    assert_eq!(read(&root), "info     svc.sub - passes through\n");
}

#[test]
fn failures_aggregate_leaf_first_and_never_stop_the_walk() {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path().join("root.log");
    // Both failing appenders point into a directory that does not exist,
    // so their lazy open fails at dispatch time.
    let conf = format!(
        "[appender bad_leaf]\ntype = file\npath = {missing}/leaf.log\n\n\
         [appender bad_mid]\ntype = file\npath = {missing}/mid.log\n\n\
         [appender a_root]\ntype = file\npath = {root}\n\n\
         [category root]\npriority = debug\nappender = a_root\n\n\
         [category svc]\nappender = bad_mid\n\n\
         [category svc.sub]\nappender = bad_leaf\n",
        missing = dir.path().join("no_such_dir").display(),
        root = root.display()
    );

    let ctx = LoggingContext::new();
    load_nodes(&ctx, &parse_str(&conf).unwrap());
    let err = ctx
        .log("svc.sub", Priority::Error, format_args!("still lands"), None)
        .unwrap_err();

    let names: Vec<&str> = err.failures().iter().map(|(n, _)| n.as_str()).collect();
    assert_eq!(names, ["bad_leaf", "bad_mid"]);

    // The root appender still received the event.
    ctx.fini();
    assert_eq!(read(&root), "error    svc.sub - still lands\n");
}

#[test]
fn below_effective_priority_is_filtered_by_the_threshold_check() {
    let ctx = LoggingContext::new();
    load_nodes(
        &ctx,
        &parse_str("[category root]\npriority = error\n\n[category svc]\npriority = debug\n")
            .unwrap(),
    );

    // svc overrides the stricter root threshold for its subtree.
    assert!(ctx.is_priority_enabled("svc.sub", Priority::Debug));
    assert!(!ctx.is_priority_enabled("other", Priority::Debug));
    assert!(ctx.is_priority_enabled("other", Priority::Error));
}

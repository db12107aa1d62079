use caresync::core::banner::BannerLogic;
use caresync::db::log::{events, load_entries, track};
use caresync::db::pool::DbPool;
use caresync::db::storage::{
    TRUST_BANNER_DISMISSED_KEY, get_flag, get_item, remove_item, set_flag, set_item,
};

#[test]
fn storage_set_get_remove() {
    let pool = DbPool::in_memory().unwrap();
    let conn = &pool.conn;

    assert_eq!(get_item(conn, "k").unwrap(), None);
    set_item(conn, "k", "one").unwrap();
    set_item(conn, "k", "two").unwrap();
    assert_eq!(get_item(conn, "k").unwrap().as_deref(), Some("two"));
    remove_item(conn, "k").unwrap();
    assert_eq!(get_item(conn, "k").unwrap(), None);
}

#[test]
fn flag_is_true_only_for_literal_true() {
    let pool = DbPool::in_memory().unwrap();
    let conn = &pool.conn;

    set_item(conn, TRUST_BANNER_DISMISSED_KEY, "yes").unwrap();
    assert!(!get_flag(conn, TRUST_BANNER_DISMISSED_KEY).unwrap());

    set_flag(conn, TRUST_BANNER_DISMISSED_KEY, true).unwrap();
    assert!(get_flag(conn, TRUST_BANNER_DISMISSED_KEY).unwrap());

    set_flag(conn, TRUST_BANNER_DISMISSED_KEY, false).unwrap();
    assert!(!get_flag(conn, TRUST_BANNER_DISMISSED_KEY).unwrap());
}

#[test]
fn banner_lifecycle() {
    let pool = DbPool::in_memory().unwrap();
    let conn = &pool.conn;

    assert!(!BannerLogic::should_show(conn, false).unwrap());
    assert!(BannerLogic::should_show(conn, true).unwrap());

    BannerLogic::dismiss(conn).unwrap();
    assert!(BannerLogic::is_dismissed(conn).unwrap());
    assert!(!BannerLogic::should_show(conn, true).unwrap());

    BannerLogic::reset(conn).unwrap();
    assert!(BannerLogic::should_show(conn, true).unwrap());

    let ops: Vec<String> = load_entries(conn)
        .unwrap()
        .into_iter()
        .map(|e| e.operation)
        .filter(|op| op.starts_with("trust_banner"))
        .collect();
    assert_eq!(
        ops,
        vec![
            events::TRUST_BANNER_VIEWED,
            events::TRUST_BANNER_DISMISSED,
            events::TRUST_BANNER_RESET,
            events::TRUST_BANNER_VIEWED,
        ]
    );
}

#[test]
fn tracked_events_are_read_back_in_order() {
    let pool = DbPool::in_memory().unwrap();
    let conn = &pool.conn;

    track(conn, events::TIMELINE_VIEWED, "filter=lab", "3 of 11 events shown").unwrap();
    track(conn, events::LAB_TREND_OPENED, "Lipid Panel", "6 result(s)").unwrap();

    let entries: Vec<_> = load_entries(conn)
        .unwrap()
        .into_iter()
        .filter(|e| e.operation != "migration_applied")
        .collect();

    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].operation, events::TIMELINE_VIEWED);
    assert_eq!(entries[0].target, "filter=lab");
    assert_eq!(entries[1].target, "Lipid Panel");
}

#[test]
fn schema_init_is_idempotent() {
    let pool = DbPool::in_memory().unwrap();
    assert_eq!(caresync::db::initialize::init_db(&pool.conn).unwrap(), 0);
}

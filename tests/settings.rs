use school_admin::settings::AppConfig;
use school_admin::AdminPanel;
use serial_test::serial;

const VARS: [&str; 5] = [
    "ADMIN_BIND_ADDR",
    "ADMIN_PORT",
    "FRONTEND_URL",
    "ADMIN_SEED_DEMO_DATA",
    "ALERT_PAGE_SIZE",
];

fn clear_env() {
    for v in VARS {
        std::env::remove_var(v);
    }
}

#[test]
#[serial]
fn defaults_when_unset() {
    clear_env();
    assert_eq!(AppConfig::from_env(), AppConfig::default());
    let cfg = AppConfig::default();
    assert_eq!(cfg.port, 8080);
    assert_eq!(cfg.bind_addr, "0.0.0.0");
    assert!(cfg.seed_demo_data);
    assert_eq!(cfg.alert_page_size, 10);
}

#[test]
#[serial]
fn reads_overrides_and_ignores_garbage() {
    clear_env();
    std::env::set_var("ADMIN_BIND_ADDR", "127.0.0.1");
    std::env::set_var("ADMIN_PORT", "not-a-port");
    std::env::set_var("FRONTEND_URL", "http://localhost:3000");
    std::env::set_var("ADMIN_SEED_DEMO_DATA", "false");
    std::env::set_var("ALERT_PAGE_SIZE", "0");

    let cfg = AppConfig::from_env();
    clear_env();

    assert_eq!(cfg.bind_addr, "127.0.0.1");
    assert_eq!(cfg.port, 8080);
    assert_eq!(cfg.frontend_url.as_deref(), Some("http://localhost:3000"));
    assert!(!cfg.seed_demo_data);
    assert_eq!(cfg.alert_page_size, 1);
}

#[test]
fn panel_follows_config() {
    let cfg = AppConfig { seed_demo_data: false, alert_page_size: 4, ..AppConfig::default() };
    let panel = AdminPanel::from_config(&cfg);
    assert!(panel.books().is_empty());
    assert!(panel.manager().list_teachers().is_empty());
    assert_eq!(panel.subjects().len(), 10);
    assert_eq!(panel.alerts().page_size(), 4);

    let seeded = AdminPanel::from_config(&AppConfig::default());
    assert_eq!(seeded.books().len(), 5);
    assert_eq!(seeded.alerts().alerts().len(), 2);
}

#[test]
fn panel_stores_are_shared_with_the_manager() {
    use school_admin::repo::{SpeechRepo, TeacherRepo};

    let mut panel = AdminPanel::seeded();
    assert!(panel.manager().delete_book("5"));
    assert_eq!(panel.books().len(), 4);
    assert_eq!(panel.teachers().list_teachers().len(), 5);
    assert_eq!(panel.speeches().list_speeches().len(), 2);

    let form = school_admin::models::AlertForm {
        title: "Holiday".into(),
        message: "School closed on Monday.".into(),
        ..Default::default()
    };
    panel.alerts_mut().save(None, form).unwrap();
    assert_eq!(panel.alerts().stats().draft, 1);
}

//! Unit tests for service configuration parsing and validation.

use std::ffi::OsString;

use env_lock::lock_env;
use rstest::rstest;

use super::*;

const ENV_VARS: [&str; 11] = [
    "ORDERS_BIND_ADDR",
    "ORDERS_DATABASE_URL",
    "ORDERS_DB_MAX_CONNECTIONS",
    "ORDERS_DB_MIN_IDLE",
    "ORDERS_DB_CONNECTION_TIMEOUT_MS",
    "ORDERS_USER_SERVICE_URL",
    "ORDERS_MAIL_SERVICE_URL",
    "ORDERS_NOTIFICATIONS_ENABLED",
    "ORDERS_ADMIN_EMAIL",
    "ORDERS_UPSTREAM_TIMEOUT_MS",
    "ORDERS_NOTIFICATION_MAX_ATTEMPTS",
];

fn load_from_empty_args() -> OrderServiceSettings {
    OrderServiceSettings::load_from_iter([OsString::from("order-backend")])
        .expect("config should load")
}

fn minimal() -> OrderServiceSettings {
    OrderServiceSettings {
        bind_addr: None,
        database_url: None,
        db_max_connections: None,
        db_min_idle: None,
        db_connection_timeout_ms: None,
        user_service_url: Some("http://users.internal:8081".to_owned()),
        mail_service_url: None,
        notifications_enabled: false,
        admin_email: None,
        upstream_timeout_ms: None,
        notification_max_attempts: None,
    }
}

fn notifying() -> OrderServiceSettings {
    OrderServiceSettings {
        mail_service_url: Some("http://mail.internal/api/send".to_owned()),
        notifications_enabled: true,
        admin_email: Some("ops@example.com".to_owned()),
        ..minimal()
    }
}

#[rstest]
fn defaults_apply_when_environment_is_empty() {
    let _guard = lock_env(ENV_VARS.map(|name| (name, None::<String>)));

    let settings = load_from_empty_args();
    assert!(!settings.notifications_enabled);
    assert!(settings.user_service_url.is_none());
    assert_eq!(
        settings.validate(),
        Err(ConfigError::Missing {
            field: "user_service_url"
        })
    );
}

#[rstest]
fn environment_overrides_are_respected() {
    let _guard = lock_env([
        ("ORDERS_BIND_ADDR", Some("127.0.0.1:9090".to_owned())),
        (
            "ORDERS_DATABASE_URL",
            Some("postgres://orders@db.internal/orders".to_owned()),
        ),
        ("ORDERS_DB_MAX_CONNECTIONS", Some("4".to_owned())),
        ("ORDERS_DB_MIN_IDLE", Some("1".to_owned())),
        ("ORDERS_DB_CONNECTION_TIMEOUT_MS", Some("1500".to_owned())),
        (
            "ORDERS_USER_SERVICE_URL",
            Some("http://users.internal".to_owned()),
        ),
        (
            "ORDERS_MAIL_SERVICE_URL",
            Some("http://mail.internal/send".to_owned()),
        ),
        ("ORDERS_NOTIFICATIONS_ENABLED", Some("true".to_owned())),
        ("ORDERS_ADMIN_EMAIL", Some("admin@example.com".to_owned())),
        ("ORDERS_UPSTREAM_TIMEOUT_MS", Some("250".to_owned())),
        ("ORDERS_NOTIFICATION_MAX_ATTEMPTS", Some("3".to_owned())),
    ]);

    let config = load_from_empty_args()
        .validate()
        .expect("configuration is valid");
    assert_eq!(config.bind_addr, "127.0.0.1:9090".parse().expect("addr"));
    assert_eq!(config.upstream_timeout, Duration::from_millis(250));
    let database = config.database.expect("database configured");
    assert_eq!(database.database_url(), "postgres://orders@db.internal/orders");
    assert_eq!(database.max_size(), 4);
    assert_eq!(database.min_idle(), Some(1));
    assert_eq!(database.connection_timeout(), Duration::from_millis(1500));
    assert_eq!(
        config.notifications,
        NotificationSettings::enabled(EmailAddress::new("admin@example.com").expect("email"))
            .with_max_attempts(NonZeroU32::new(3).expect("non-zero"))
    );
}

#[rstest]
fn minimal_settings_use_defaults() {
    let config = minimal().validate().expect("minimal config is valid");
    assert_eq!(config.bind_addr, DEFAULT_BIND_ADDR.parse().expect("addr"));
    assert_eq!(
        config.upstream_timeout,
        Duration::from_millis(DEFAULT_UPSTREAM_TIMEOUT_MS)
    );
    assert_eq!(config.notifications, NotificationSettings::Disabled);
    assert!(config.mail_service_url.is_none());
}

#[rstest]
fn enabled_notifications_default_to_one_attempt() {
    let config = notifying().validate().expect("config is valid");
    match config.notifications {
        NotificationSettings::Enabled {
            recipient,
            max_attempts,
        } => {
            assert_eq!(recipient.as_str(), "ops@example.com");
            assert_eq!(max_attempts.get(), 1);
        }
        NotificationSettings::Disabled => panic!("notifications should be enabled"),
    }
}

#[rstest]
#[case::missing_mail(
    OrderServiceSettings { mail_service_url: None, ..notifying() },
    ConfigError::Missing { field: "mail_service_url" }
)]
#[case::missing_admin(
    OrderServiceSettings { admin_email: None, ..notifying() },
    ConfigError::Missing { field: "admin_email" }
)]
fn enabled_notifications_require_mail_settings(
    #[case] settings: OrderServiceSettings,
    #[case] expected: ConfigError,
) {
    assert_eq!(settings.validate(), Err(expected));
}

#[rstest]
#[case::bad_bind(OrderServiceSettings { bind_addr: Some("localhost".to_owned()), ..minimal() }, "bind_addr")]
#[case::bad_user_url(OrderServiceSettings { user_service_url: Some("users".to_owned()), ..minimal() }, "user_service_url")]
#[case::ftp_user_url(OrderServiceSettings { user_service_url: Some("ftp://users".to_owned()), ..minimal() }, "user_service_url")]
#[case::zero_timeout(OrderServiceSettings { upstream_timeout_ms: Some(0), ..minimal() }, "upstream_timeout_ms")]
#[case::bad_email(OrderServiceSettings { admin_email: Some("ops".to_owned()), ..notifying() }, "admin_email")]
#[case::zero_attempts(OrderServiceSettings { notification_max_attempts: Some(0), ..notifying() }, "notification_max_attempts")]
fn malformed_values_are_rejected(#[case] settings: OrderServiceSettings, #[case] field: &str) {
    match settings.validate() {
        Err(ConfigError::Invalid { field: actual, .. }) => assert_eq!(actual, field),
        other => panic!("expected invalid {field}, got {other:?}"),
    }
}

#[rstest]
fn blank_database_url_means_in_memory() {
    let settings = OrderServiceSettings {
        database_url: Some("  ".to_owned()),
        ..minimal()
    };
    assert!(settings.validate().expect("valid").database.is_none());
}

fn with_database() -> OrderServiceSettings {
    OrderServiceSettings {
        database_url: Some("postgres://localhost/orders".to_owned()),
        ..minimal()
    }
}

#[rstest]
fn database_url_alone_keeps_pool_defaults() {
    let database = with_database()
        .validate()
        .expect("valid")
        .database
        .expect("database configured");
    assert_eq!(database, PoolConfig::new("postgres://localhost/orders"));
}

#[rstest]
fn small_pools_clamp_the_default_idle_count() {
    let settings = OrderServiceSettings {
        db_max_connections: Some(1),
        ..with_database()
    };
    let database = settings
        .validate()
        .expect("valid")
        .database
        .expect("database configured");
    assert_eq!(database.max_size(), 1);
    assert_eq!(database.min_idle(), Some(1));
}

#[rstest]
#[case::zero_connections(OrderServiceSettings { db_max_connections: Some(0), ..with_database() }, "db_max_connections")]
#[case::idle_above_max(OrderServiceSettings { db_max_connections: Some(2), db_min_idle: Some(3), ..with_database() }, "db_min_idle")]
#[case::zero_timeout(OrderServiceSettings { db_connection_timeout_ms: Some(0), ..with_database() }, "db_connection_timeout_ms")]
fn malformed_pool_settings_are_rejected(
    #[case] settings: OrderServiceSettings,
    #[case] field: &str,
) {
    match settings.validate() {
        Err(ConfigError::Invalid { field: actual, .. }) => assert_eq!(actual, field),
        other => panic!("expected invalid {field}, got {other:?}"),
    }
}

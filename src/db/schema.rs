use sqlx::PgPool;

/// Roles every fresh catalog starts with
pub const SEED_ROLES: &[&str] = &["USER", "ADMIN"];

const CREATE_ORDERS_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS orders (
    order_id     BIGSERIAL PRIMARY KEY,
    product_name TEXT NOT NULL,
    unit_price   NUMERIC NOT NULL,
    quantity     INTEGER NOT NULL,
    created_at   TIMESTAMPTZ NOT NULL DEFAULT NOW()
)"#;

const CREATE_ROLES_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS roles (
    role_name TEXT PRIMARY KEY
)"#;

const CREATE_USERS_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS users (
    user_id       BIGSERIAL PRIMARY KEY,
    username      TEXT NOT NULL UNIQUE,
    password_hash TEXT NOT NULL,
    created_at    TIMESTAMPTZ NOT NULL DEFAULT NOW()
)"#;

const CREATE_USER_ROLES_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS user_roles (
    user_id   BIGINT NOT NULL REFERENCES users (user_id) ON DELETE CASCADE,
    role_name TEXT   NOT NULL REFERENCES roles (role_name),
    PRIMARY KEY (user_id, role_name)
)"#;

/// Initialize the order/user schema
pub async fn init_schema(pool: &PgPool) -> Result<(), sqlx::Error> {
    tracing::info!("Initializing PostgreSQL schema...");

    for ddl in [
        CREATE_ORDERS_TABLE,
        CREATE_ROLES_TABLE,
        CREATE_USERS_TABLE,
        CREATE_USER_ROLES_TABLE,
    ] {
        sqlx::query(ddl).execute(pool).await?;
    }

    for role in SEED_ROLES {
        sqlx::query("INSERT INTO roles (role_name) VALUES ($1) ON CONFLICT DO NOTHING")
            .bind(*role)
            .execute(pool)
            .await?;
    }

    tracing::info!("PostgreSQL schema initialized successfully");
    Ok(())
}

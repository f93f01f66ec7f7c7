//! Database schema and migrations for inquirydesk.
//!
//! Migrations are applied sequentially when the database is first opened
//! or upgraded. The schema_version table tracks which have been applied.

/// Database migrations.
pub const MIGRATIONS: &[&str] = &[
    // v1: administrator credentials
    r#"
CREATE TABLE administrators (
    id              INTEGER PRIMARY KEY AUTOINCREMENT,
    singleton       INTEGER NOT NULL DEFAULT 1 UNIQUE CHECK (singleton = 1),
    login           TEXT NOT NULL UNIQUE COLLATE NOCASE,
    password_hash   TEXT NOT NULL,           -- Argon2 PHC string
    created_at      TEXT NOT NULL DEFAULT (datetime('now'))
);
"#,
    // v2: submitted inquiries
    r#"
CREATE TABLE inquiries (
    id              TEXT PRIMARY KEY,        -- UUIDv4, never reused
    name            TEXT NOT NULL,
    email           TEXT NOT NULL,
    phone           TEXT NOT NULL,
    country_code    TEXT NOT NULL,
    message         TEXT NOT NULL,
    created_at      TEXT NOT NULL            -- RFC3339, fixed microsecond precision
);

CREATE INDEX idx_inquiries_created_at ON inquiries(created_at);
"#,
];

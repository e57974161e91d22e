// SQLite-backed lead store

use crate::filter::LeadFilter;
use crate::models::{Lead, NewLead, now_stamp};
use eyre::{Context, Result};
use rusqlite::Connection;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Lead store over a single SQLite table.
///
/// Constructed once with an explicit database path. Each operation opens
/// a fresh connection and releases it on every exit path; cross-process
/// serialization is left to SQLite itself.
pub struct Store {
    db_path: PathBuf,
}

impl Store {
    /// Open or create a store backed by the given database file.
    ///
    /// Creates the parent directory if needed and ensures the schema
    /// exists. Storage errors (permissions, missing path, disk) are
    /// fatal and propagate to the caller.
    pub fn new<P: AsRef<Path>>(db_path: P) -> Result<Self> {
        let db_path = db_path.as_ref().to_path_buf();

        if let Some(parent) = db_path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).context("Failed to create database directory")?;
            }
        }

        let store = Self { db_path };
        store.ensure_schema()?;
        Ok(store)
    }

    /// Path of the backing database file.
    pub fn db_path(&self) -> &Path {
        &self.db_path
    }

    fn connect(&self) -> Result<Connection> {
        Connection::open(&self.db_path).context("Failed to open SQLite database")
    }

    /// Create the leads table if absent. Idempotent; never touches
    /// existing rows.
    pub fn ensure_schema(&self) -> Result<()> {
        let db = self.connect()?;
        db.execute_batch(
            r#"
            CREATE TABLE IF NOT EXISTS leads (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                created_at TEXT NOT NULL,
                tema TEXT, nombre TEXT, apellido TEXT, puesto TEXT,
                tel_trabajo TEXT, tel_movil TEXT, email TEXT,
                compania TEXT, web TEXT,
                calle1 TEXT, calle2 TEXT, calle3 TEXT,
                ciudad TEXT, estado TEXT, pais TEXT,
                notas TEXT, fuente TEXT
            )
            "#,
        )
        .context("Failed to create leads table")?;
        Ok(())
    }

    /// Insert one lead, stamping `created_at` with the current local
    /// time. Returns the generated id.
    pub fn insert(&self, lead: &NewLead) -> Result<i64> {
        self.insert_at(lead, &now_stamp())
    }

    fn insert_at(&self, lead: &NewLead, created_at: &str) -> Result<i64> {
        self.ensure_schema()?;
        let db = self.connect()?;

        db.execute(
            "INSERT INTO leads (
                created_at, tema, nombre, apellido, puesto,
                tel_trabajo, tel_movil, email, compania, web,
                calle1, calle2, calle3, ciudad, estado, pais,
                notas, fuente
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13, ?14, ?15, ?16, ?17, ?18)",
            rusqlite::params![
                created_at,
                lead.tema,
                lead.nombre,
                lead.apellido,
                lead.puesto,
                lead.tel_trabajo,
                lead.tel_movil,
                lead.email,
                lead.compania,
                lead.web,
                lead.calle1,
                lead.calle2,
                lead.calle3,
                lead.ciudad,
                lead.estado,
                lead.pais,
                lead.notas,
                lead.fuente,
            ],
        )
        .context("Failed to insert lead")?;

        let id = db.last_insert_rowid();
        debug!(id, created_at, "Inserted lead");
        Ok(id)
    }

    /// Return all leads matching the filter, newest first (id
    /// descending). The default filter returns the whole table.
    pub fn query(&self, filter: &LeadFilter) -> Result<Vec<Lead>> {
        self.ensure_schema()?;
        let db = self.connect()?;

        let (where_sql, values) = filter.to_sql();
        let mut sql = String::from(
            "SELECT id, created_at, tema, nombre, apellido, puesto,
                    tel_trabajo, tel_movil, email, compania, web,
                    calle1, calle2, calle3, ciudad, estado, pais,
                    notas, fuente
             FROM leads",
        );
        if !where_sql.is_empty() {
            sql.push_str(" WHERE ");
            sql.push_str(&where_sql);
        }
        sql.push_str(" ORDER BY id DESC");

        debug!(bound = values.len(), "Running lead query");

        let mut stmt = db.prepare(&sql)?;
        let rows = stmt.query_map(rusqlite::params_from_iter(values.iter()), |row| {
            Ok(Lead {
                id: row.get(0)?,
                created_at: row.get(1)?,
                tema: row.get(2)?,
                nombre: row.get(3)?,
                apellido: row.get(4)?,
                puesto: row.get(5)?,
                tel_trabajo: row.get(6)?,
                tel_movil: row.get(7)?,
                email: row.get(8)?,
                compania: row.get(9)?,
                web: row.get(10)?,
                calle1: row.get(11)?,
                calle2: row.get(12)?,
                calle3: row.get(13)?,
                ciudad: row.get(14)?,
                estado: row.get(15)?,
                pais: row.get(16)?,
                notas: row.get(17)?,
                fuente: row.get(18)?,
            })
        })?;

        let mut leads = Vec::new();
        for row in rows {
            leads.push(row.context("Failed to read lead row")?);
        }
        Ok(leads)
    }
}

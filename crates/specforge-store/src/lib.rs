//! Specforge Storage Layer
//!
//! Implements the `SpecStore` trait over SQLite.
//!
//! # Architecture
//!
//! - SQLite for laptops and specification rows
//! - Structured payloads stored as JSON text in the `structured_value`
//!   column, decoded through the category tag on read
//! - Transaction-per-batch semantics: every mutating trait method that
//!   takes a slice applies all of it or none of it
//!
//! # Examples
//!
//! ```no_run
//! use specforge_store::SqliteStore;
//!
//! let store = SqliteStore::new(":memory:").unwrap();
//! // Store is now ready for ingestion and pipeline runs
//! ```

#![warn(missing_docs)]

use rusqlite::{params, Connection, OptionalExtension, Row};
use specforge_domain::traits::SpecStore;
use specforge_domain::{
    Category, Laptop, LaptopId, NewSpecification, SpecId, Specification, StructuredValue,
};
use std::path::Path;
use thiserror::Error;

/// Errors that can occur during storage operations
#[derive(Error, Debug)]
pub enum StoreError {
    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    /// Structured payload could not be serialized or decoded
    #[error("Payload error: {0}")]
    Payload(#[from] serde_json::Error),

    /// Invalid data in a stored row
    #[error("Invalid data: {0}")]
    InvalidData(String),
}

const SPEC_COLUMNS: &str =
    "id, laptop_id, category, specification_name, specification_value, unit, structured_value";

/// SQLite-based implementation of `SpecStore`
///
/// # Thread Safety
///
/// SQLite connections are not thread-safe. Each thread should have its own
/// `SqliteStore` instance; the pipeline is single-threaded by design.
pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    /// Create a new store with the given database path.
    ///
    /// Use `:memory:` for an in-memory database (useful for testing).
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use specforge_store::SqliteStore;
    ///
    /// let store = SqliteStore::new("specforge.db").unwrap();
    /// ```
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self, StoreError> {
        let conn = Connection::open(path)?;
        conn.pragma_update(None, "foreign_keys", true)?;
        let store = Self { conn };
        store.initialize_schema()?;
        Ok(store)
    }

    /// Initialize the database schema
    fn initialize_schema(&self) -> Result<(), StoreError> {
        let schema = include_str!("schema.sql");
        self.conn.execute_batch(schema)?;
        Ok(())
    }

    /// Insert a laptop, returning its id.
    ///
    /// Identity (brand + model + variant) is unique; inserting an existing
    /// identity is a database error.
    pub fn insert_laptop(
        &mut self,
        brand: &str,
        model: &str,
        variant: Option<&str>,
    ) -> Result<LaptopId, StoreError> {
        self.conn.execute(
            "INSERT INTO laptops (brand, model, variant) VALUES (?1, ?2, ?3)",
            params![brand, model, variant],
        )?;
        Ok(LaptopId(self.conn.last_insert_rowid()))
    }

    /// Look up a laptop by identity.
    pub fn find_laptop(
        &self,
        brand: &str,
        model: &str,
        variant: Option<&str>,
    ) -> Result<Option<Laptop>, StoreError> {
        let laptop = self
            .conn
            .query_row(
                "SELECT id, brand, model, variant FROM laptops
                 WHERE brand = ?1 AND model = ?2 AND variant IS ?3",
                params![brand, model, variant],
                row_to_laptop,
            )
            .optional()?;
        Ok(laptop)
    }

    /// Fetch a laptop by id.
    pub fn laptop(&self, id: LaptopId) -> Result<Option<Laptop>, StoreError> {
        let laptop = self
            .conn
            .query_row(
                "SELECT id, brand, model, variant FROM laptops WHERE id = ?1",
                params![id.0],
                row_to_laptop,
            )
            .optional()?;
        Ok(laptop)
    }

    /// Delete a laptop and, via cascade, every child specification.
    pub fn delete_laptop(&mut self, id: LaptopId) -> Result<(), StoreError> {
        self.conn
            .execute("DELETE FROM laptops WHERE id = ?1", params![id.0])?;
        Ok(())
    }

    /// Sample of stored specifications with their laptop's name, newest
    /// first. Used by the preview command.
    pub fn preview(&self, limit: usize) -> Result<Vec<(Specification, String)>, StoreError> {
        let mut stmt = self.conn.prepare(&format!(
            "SELECT s.{}, l.brand, l.model, l.variant
             FROM specifications s JOIN laptops l ON l.id = s.laptop_id
             ORDER BY s.id DESC LIMIT ?1",
            SPEC_COLUMNS.replace(", ", ", s.")
        ))?;

        let rows = stmt.query_map(params![limit as i64], |row| {
            let spec = row_to_spec(row)?;
            let brand: String = row.get(7)?;
            let model: String = row.get(8)?;
            let variant: Option<String> = row.get(9)?;
            let laptop = Laptop {
                id: spec.laptop_id,
                brand,
                model,
                variant,
            };
            Ok((spec, laptop.full_model_name()))
        })?;

        rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
    }

    /// Per-category row counts, descending. Used by the preview command.
    pub fn category_distribution(&self) -> Result<Vec<(String, usize)>, StoreError> {
        let mut stmt = self.conn.prepare(
            "SELECT category, COUNT(*) AS n FROM specifications
             GROUP BY category ORDER BY n DESC",
        )?;
        let rows = stmt.query_map([], |row| {
            Ok((row.get::<_, String>(0)?, row.get::<_, i64>(1)? as usize))
        })?;
        rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
    }

    /// Distinct specification names in a category, up to a limit.
    pub fn sample_names(&self, category: &str, limit: usize) -> Result<Vec<String>, StoreError> {
        let mut stmt = self.conn.prepare(
            "SELECT DISTINCT specification_name FROM specifications
             WHERE category = ?1 ORDER BY specification_name LIMIT ?2",
        )?;
        let rows = stmt.query_map(params![category, limit as i64], |row| row.get(0))?;
        rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
    }

    /// Total specification row count.
    pub fn count_specifications(&self) -> Result<usize, StoreError> {
        let count: i64 =
            self.conn
                .query_row("SELECT COUNT(*) FROM specifications", [], |row| row.get(0))?;
        Ok(count as usize)
    }
}

fn row_to_laptop(row: &Row<'_>) -> rusqlite::Result<Laptop> {
    Ok(Laptop {
        id: LaptopId(row.get(0)?),
        brand: row.get(1)?,
        model: row.get(2)?,
        variant: row.get(3)?,
    })
}

/// Map a row selected with `SPEC_COLUMNS` to a `Specification`.
fn row_to_spec(row: &Row<'_>) -> rusqlite::Result<Specification> {
    let category = Category::parse(&row.get::<_, String>(2)?);
    let structured_text: Option<String> = row.get(6)?;

    let structured_value = match structured_text {
        Some(text) => {
            let json: serde_json::Value = serde_json::from_str(&text).map_err(|e| {
                rusqlite::Error::FromSqlConversionFailure(
                    6,
                    rusqlite::types::Type::Text,
                    Box::new(e),
                )
            })?;
            let value = StructuredValue::decode(&category, json).map_err(|e| {
                rusqlite::Error::FromSqlConversionFailure(
                    6,
                    rusqlite::types::Type::Text,
                    Box::new(e),
                )
            })?;
            Some(value)
        }
        None => None,
    };

    Ok(Specification {
        id: SpecId(row.get(0)?),
        laptop_id: LaptopId(row.get(1)?),
        category,
        specification_name: row.get(3)?,
        specification_value: row.get(4)?,
        unit: row.get(5)?,
        structured_value,
    })
}

fn encode_structured(value: &StructuredValue) -> Result<String, StoreError> {
    let json = value.encode()?;
    Ok(json.to_string())
}

impl SpecStore for SqliteStore {
    type Error = StoreError;

    fn replace_specifications(
        &mut self,
        laptop_id: LaptopId,
        specs: Vec<NewSpecification>,
    ) -> Result<usize, Self::Error> {
        let tx = self.conn.transaction()?;

        tx.execute(
            "DELETE FROM specifications WHERE laptop_id = ?1",
            params![laptop_id.0],
        )?;

        let mut inserted = 0;
        {
            let mut stmt = tx.prepare(
                "INSERT INTO specifications
                 (laptop_id, category, specification_name, specification_value, unit)
                 VALUES (?1, ?2, ?3, ?4, ?5)",
            )?;
            for spec in &specs {
                inserted += stmt.execute(params![
                    laptop_id.0,
                    spec.category.as_str(),
                    spec.specification_name,
                    spec.specification_value,
                    spec.unit,
                ])?;
            }
        }

        tx.commit()?;
        Ok(inserted)
    }

    fn unstructured_ids(&self) -> Result<Vec<SpecId>, Self::Error> {
        let mut stmt = self.conn.prepare(
            "SELECT id FROM specifications WHERE structured_value IS NULL ORDER BY id",
        )?;
        let rows = stmt.query_map([], |row| Ok(SpecId(row.get(0)?)))?;
        rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
    }

    fn fetch_by_ids(&self, ids: &[SpecId]) -> Result<Vec<Specification>, Self::Error> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let placeholders = vec!["?"; ids.len()].join(", ");
        let sql = format!(
            "SELECT {} FROM specifications WHERE id IN ({}) ORDER BY id",
            SPEC_COLUMNS, placeholders
        );

        let mut stmt = self.conn.prepare(&sql)?;
        let params: Vec<&dyn rusqlite::ToSql> =
            ids.iter().map(|id| &id.0 as &dyn rusqlite::ToSql).collect();

        let rows = stmt.query_map(&params[..], row_to_spec)?;
        rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
    }

    fn commit_structured(
        &mut self,
        updates: &[(SpecId, StructuredValue)],
    ) -> Result<(), Self::Error> {
        let tx = self.conn.transaction()?;
        {
            let mut stmt =
                tx.prepare("UPDATE specifications SET structured_value = ?1 WHERE id = ?2")?;
            for (id, value) in updates {
                let text = encode_structured(value)?;
                stmt.execute(params![text, id.0])?;
            }
        }
        tx.commit()?;
        Ok(())
    }

    fn laptops_with_category(&self, category: &Category) -> Result<Vec<LaptopId>, Self::Error> {
        let mut stmt = self.conn.prepare(
            "SELECT DISTINCT laptop_id FROM specifications WHERE category = ?1 ORDER BY laptop_id",
        )?;
        let rows = stmt.query_map(params![category.as_str()], |row| Ok(LaptopId(row.get(0)?)))?;
        rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
    }

    fn specs_for_laptop(
        &self,
        laptop_id: LaptopId,
        category: &Category,
    ) -> Result<Vec<Specification>, Self::Error> {
        let sql = format!(
            "SELECT {} FROM specifications WHERE laptop_id = ?1 AND category = ?2 ORDER BY id",
            SPEC_COLUMNS
        );
        let mut stmt = self.conn.prepare(&sql)?;
        let rows = stmt.query_map(params![laptop_id.0, category.as_str()], row_to_spec)?;
        rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
    }

    fn specs_in_category(
        &self,
        category: &Category,
        name_contains: Option<&str>,
    ) -> Result<Vec<Specification>, Self::Error> {
        let mut sql = format!(
            "SELECT {} FROM specifications WHERE category = ?1",
            SPEC_COLUMNS
        );
        if name_contains.is_some() {
            sql.push_str(" AND specification_name LIKE ?2");
        }
        sql.push_str(" ORDER BY id");

        let mut stmt = self.conn.prepare(&sql)?;
        let rows = match name_contains {
            Some(fragment) => {
                let pattern = format!("%{}%", fragment);
                stmt.query_map(params![category.as_str(), pattern], row_to_spec)?
                    .collect::<Result<Vec<_>, _>>()?
            }
            None => stmt
                .query_map(params![category.as_str()], row_to_spec)?
                .collect::<Result<Vec<_>, _>>()?,
        };
        Ok(rows)
    }

    fn apply_consolidation(
        &mut self,
        updates: &[(SpecId, StructuredValue)],
        deletions: &[SpecId],
    ) -> Result<(), Self::Error> {
        let tx = self.conn.transaction()?;
        {
            let mut update_stmt =
                tx.prepare("UPDATE specifications SET structured_value = ?1 WHERE id = ?2")?;
            for (id, value) in updates {
                let text = encode_structured(value)?;
                update_stmt.execute(params![text, id.0])?;
            }

            let mut delete_stmt = tx.prepare("DELETE FROM specifications WHERE id = ?1")?;
            for id in deletions {
                delete_stmt.execute(params![id.0])?;
            }
        }
        tx.commit()?;
        Ok(())
    }

    fn count_structured(&self) -> Result<usize, Self::Error> {
        let count: i64 = self.conn.query_row(
            "SELECT COUNT(*) FROM specifications WHERE structured_value IS NOT NULL",
            [],
            |row| row.get(0),
        )?;
        Ok(count as usize)
    }
}

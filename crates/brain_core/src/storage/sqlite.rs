//! SQLite-backed storage gateway over the `kv_store` table.

use super::{StorageGateway, StorageResult};
use log::{debug, error};
use rusqlite::{params, Connection, OptionalExtension};

/// Storage gateway borrowing an open, migrated connection.
pub struct SqliteStorage<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteStorage<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

const UPSERT_SQL: &str = "INSERT INTO kv_store (key, value) VALUES (?1, ?2)
     ON CONFLICT(key) DO UPDATE SET
        value = excluded.value,
        updated_at = (strftime('%s', 'now') * 1000);";

impl StorageGateway for SqliteStorage<'_> {
    fn get_raw(&self, key: &str) -> StorageResult<Option<String>> {
        let value = self
            .conn
            .query_row(
                "SELECT value FROM kv_store WHERE key = ?1;",
                [key],
                |row| row.get::<_, String>(0),
            )
            .optional()?;
        Ok(value)
    }

    fn set_raw(&self, key: &str, json: &str) -> StorageResult<()> {
        if let Err(err) = self.conn.execute(UPSERT_SQL, params![key, json]) {
            error!("event=storage_set module=storage status=error key={key} error={err}");
            return Err(err.into());
        }
        debug!(
            "event=storage_set module=storage status=ok key={key} bytes={}",
            json.len()
        );
        Ok(())
    }

    fn set_many_raw(&self, entries: &[(&str, String)]) -> StorageResult<()> {
        let tx = self.conn.unchecked_transaction()?;
        for (key, json) in entries {
            tx.execute(UPSERT_SQL, params![key, json])?;
        }
        tx.commit()?;
        debug!(
            "event=storage_set_many module=storage status=ok count={}",
            entries.len()
        );
        Ok(())
    }

    fn remove(&self, key: &str) -> StorageResult<()> {
        self.conn.execute("DELETE FROM kv_store WHERE key = ?1;", [key])?;
        Ok(())
    }

    fn clear(&self) -> StorageResult<()> {
        let tx = self.conn.unchecked_transaction()?;
        let removed = tx.execute("DELETE FROM kv_store;", [])?;
        tx.commit()?;
        debug!("event=storage_clear module=storage status=ok removed={removed}");
        Ok(())
    }

    fn keys(&self) -> StorageResult<Vec<String>> {
        let mut stmt = self
            .conn
            .prepare("SELECT key FROM kv_store ORDER BY key ASC;")?;
        let keys = stmt
            .query_map([], |row| row.get::<_, String>(0))?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(keys)
    }
}

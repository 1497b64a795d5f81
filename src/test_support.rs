use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, PooledConnection};
use tempfile::TempDir;

use crate::data::EntryStore;
use crate::data::store::{DbConnection, DbPool};
use crate::schema::api_kbbi_iv;

const CREATE_TABLE: &str = "CREATE TABLE api_kbbi_IV (word TEXT, arti TEXT, type INTEGER)";

/// SQLite database in a temporary directory, removed on drop.
pub struct TestDatabase {
    pool: DbPool,
    _dir: TempDir,
}

impl TestDatabase {
    pub fn without_table() -> Self {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let path = dir.path().join("kbbi.db");
        let manager = ConnectionManager::<DbConnection>::new(path.to_string_lossy());
        let pool = DbPool::builder()
            .max_size(2)
            .build(manager)
            .expect("Failed to create test pool");

        Self { pool, _dir: dir }
    }

    pub fn with_entries(entries: &[(&str, &str, i32)]) -> Self {
        let db = Self::without_table();
        let mut conn = db.connection();

        diesel::sql_query(CREATE_TABLE)
            .execute(&mut conn)
            .expect("Failed to create table");

        conn.transaction::<_, diesel::result::Error, _>(|conn| {
            for (word, arti, word_type) in entries {
                diesel::insert_into(api_kbbi_iv::table)
                    .values((
                        api_kbbi_iv::word.eq(*word),
                        api_kbbi_iv::arti.eq(*arti),
                        api_kbbi_iv::word_type.eq(*word_type),
                    ))
                    .execute(conn)?;
            }
            Ok(())
        })
        .expect("Failed to insert entries");

        drop(conn);
        db
    }

    pub fn insert_raw(&self, statement: &str) {
        diesel::sql_query(statement)
            .execute(&mut self.connection())
            .expect("Failed to run statement");
    }

    pub fn connection(&self) -> PooledConnection<ConnectionManager<DbConnection>> {
        self.pool.get().expect("Failed to get connection")
    }

    pub fn store(&self) -> EntryStore {
        EntryStore::new(self.pool.clone())
    }
}

/// Database module for storing rooms and their section layouts

mod types;

pub use types::{DbRoom, RoomDbError};

use chrono::{DateTime, Utc};
use rusqlite::{Connection, OptionalExtension, Row};
use std::sync::{Mutex, MutexGuard};

use crate::scheduling::Section;

const SCHEMA_SQL: &str = include_str!("../../sql/init_rooms.sql");

const ROOM_COLUMNS: &str = "room_id, name, sections_json, created_at, updated_at";

pub struct RoomDbManager {
    db: Mutex<Connection>,
}

impl RoomDbManager {
    /// Opens (or creates) the database at `db_path` and initializes the schema.
    ///
    /// Pass `":memory:"` for a throwaway in-memory store.
    pub fn new(db_path: &str) -> Result<Self, RoomDbError> {
        let conn = Connection::open(db_path)?;
        conn.execute_batch(SCHEMA_SQL)?;

        Ok(Self {
            db: Mutex::new(conn),
        })
    }

    fn lock(&self) -> Result<MutexGuard<'_, Connection>, RoomDbError> {
        self.db.lock().map_err(|_| RoomDbError::LockPoisoned)
    }

    /// Inserts a new room and returns it as stored
    pub fn create_room(&self, name: &str, sections: &[Section]) -> Result<DbRoom, RoomDbError> {
        let sections_json = serde_json::to_string(sections)?;
        let now = Utc::now();

        let db = self.lock()?;
        db.execute(
            "INSERT INTO rooms (name, sections_json, created_at, updated_at)
             VALUES (?1, ?2, ?3, ?3)",
            (name, &sections_json, now),
        )?;

        Ok(DbRoom {
            room_id: db.last_insert_rowid(),
            name: name.to_string(),
            sections: sections.to_vec(),
            created_at: now,
            updated_at: now,
        })
    }

    /// Gets a room by ID
    pub fn get_room(&self, room_id: i64) -> Result<Option<DbRoom>, RoomDbError> {
        let db = self.lock()?;
        let row = db
            .query_row(
                &format!("SELECT {ROOM_COLUMNS} FROM rooms WHERE room_id = ?"),
                [room_id],
                read_room_row,
            )
            .optional()?;

        row.map(RawRoom::into_room).transpose()
    }

    /// Checks if a room exists without decoding its sections
    pub fn room_exists(&self, room_id: i64) -> Result<bool, RoomDbError> {
        let db = self.lock()?;
        let count: i64 = db.query_row(
            "SELECT COUNT(*) FROM rooms WHERE room_id = ?",
            [room_id],
            |row| row.get(0),
        )?;
        Ok(count > 0)
    }

    /// Gets all rooms ordered by ID
    pub fn list_rooms(&self) -> Result<Vec<DbRoom>, RoomDbError> {
        let db = self.lock()?;
        let mut stmt = db.prepare(&format!(
            "SELECT {ROOM_COLUMNS} FROM rooms ORDER BY room_id"
        ))?;

        let raw: Vec<RawRoom> = stmt
            .query_map([], read_room_row)?
            .collect::<rusqlite::Result<Vec<_>>>()?;

        raw.into_iter().map(RawRoom::into_room).collect()
    }

    /// Replaces a room's whole section list.
    ///
    /// Returns false if no room has that ID.
    pub fn replace_sections(
        &self,
        room_id: i64,
        sections: &[Section],
    ) -> Result<bool, RoomDbError> {
        let sections_json = serde_json::to_string(sections)?;

        let db = self.lock()?;
        let updated = db.execute(
            "UPDATE rooms SET sections_json = ?1, updated_at = ?2 WHERE room_id = ?3",
            (&sections_json, Utc::now(), room_id),
        )?;

        Ok(updated > 0)
    }

    /// Deletes a room. Returns false if no room has that ID.
    pub fn delete_room(&self, room_id: i64) -> Result<bool, RoomDbError> {
        let db = self.lock()?;
        let deleted = db.execute("DELETE FROM rooms WHERE room_id = ?", [room_id])?;
        Ok(deleted > 0)
    }
}

/// A room row before its sections JSON has been decoded.
struct RawRoom {
    room_id: i64,
    name: String,
    sections_json: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl RawRoom {
    fn into_room(self) -> Result<DbRoom, RoomDbError> {
        Ok(DbRoom {
            room_id: self.room_id,
            name: self.name,
            sections: serde_json::from_str(&self.sections_json)?,
            created_at: self.created_at,
            updated_at: self.updated_at,
        })
    }
}

fn read_room_row(row: &Row<'_>) -> rusqlite::Result<RawRoom> {
    Ok(RawRoom {
        room_id: row.get(0)?,
        name: row.get(1)?,
        sections_json: row.get(2)?,
        created_at: row.get(3)?,
        updated_at: row.get(4)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scheduling::{generate_default_sections, generate_sample_sections};

    fn manager() -> RoomDbManager {
        RoomDbManager::new(":memory:").unwrap()
    }

    #[test]
    fn test_create_and_get_room() {
        let db = manager();
        let created = db.create_room("Lab 101", &generate_default_sections()).unwrap();

        let fetched = db.get_room(created.room_id).unwrap().unwrap();
        assert_eq!(fetched.name, "Lab 101");
        assert_eq!(fetched.sections, generate_default_sections());
        assert!(db.room_exists(created.room_id).unwrap());
        assert!(db.get_room(created.room_id + 1).unwrap().is_none());
    }

    #[test]
    fn test_replace_sections() {
        let db = manager();
        let room = db.create_room("Hall B", &generate_default_sections()).unwrap();

        assert!(db
            .replace_sections(room.room_id, &generate_sample_sections())
            .unwrap());
        let fetched = db.get_room(room.room_id).unwrap().unwrap();
        assert_eq!(fetched.sections, generate_sample_sections());
        assert!(fetched.updated_at >= room.updated_at);

        assert!(!db.replace_sections(999, &generate_sample_sections()).unwrap());
    }

    #[test]
    fn test_list_and_delete() {
        let db = manager();
        let a = db.create_room("A", &generate_default_sections()).unwrap();
        let b = db.create_room("B", &generate_sample_sections()).unwrap();

        let names: Vec<String> = db.list_rooms().unwrap().into_iter().map(|r| r.name).collect();
        assert_eq!(names, vec!["A", "B"]);

        assert!(db.delete_room(a.room_id).unwrap());
        assert!(!db.delete_room(a.room_id).unwrap());
        assert!(!db.room_exists(a.room_id).unwrap());
        assert_eq!(db.list_rooms().unwrap().len(), 1);
        assert!(db.room_exists(b.room_id).unwrap());
    }
}

use anyhow::Context;
use chrono::Utc;
use uuid::Uuid;

use super::{Result, TodoRepo};
use crate::db::driver::Db;
use crate::models::Todo;

const PREFIX: &str = "todo:";

fn key(id: &str) -> String {
    format!("{PREFIX}{id}")
}

/// [`TodoRepo`] backed by the embedded sled database.
#[derive(Debug, Clone)]
pub struct SledTodoRepo {
    db: Db,
}
impl SledTodoRepo {
    pub fn new(db: Db) -> Self {
        Self { db }
    }
}

impl TodoRepo for SledTodoRepo {
    fn get(&self, id: &str) -> Result<Option<Todo>> {
        let todo = self
            .db
            .get::<Todo, _>(key(id))
            .with_context(|| format!("could not get todo {id} from database"))?;
        Ok(todo)
    }

    fn get_all(&self) -> Result<Vec<Todo>> {
        let mut todos = Vec::new();
        for item in self.db.iter_prefix::<Todo>(PREFIX) {
            let (_, todo) = item.context("could not get todos from database")?;
            todos.push(todo);
        }
        Ok(todos)
    }

    fn save(&self, todo: &mut Todo) -> Result<()> {
        if !todo.has_id() {
            todo.id = Uuid::new_v4().to_string();
        }
        todo.mod_time = Utc::now();

        self.db
            .insert(key(&todo.id), &*todo)
            .with_context(|| format!("could not save todo {} to database", todo.id))?;
        tracing::trace!(id = %todo.id, "todo written");
        Ok(())
    }

    fn delete(&self, id: &str) -> Result<()> {
        self.db
            .remove(key(id))
            .with_context(|| format!("could not delete todo {id} from database"))?;
        Ok(())
    }
}

use std::sync::atomic::{AtomicBool, Ordering};

use super::{Result, StorageError, TodoRepo};
use crate::models::Todo;

type GetFn = Box<dyn Fn(&str) -> Result<Option<Todo>> + Send + Sync>;
type GetAllFn = Box<dyn Fn() -> Result<Vec<Todo>> + Send + Sync>;
type SaveFn = Box<dyn Fn(&mut Todo) -> Result<()> + Send + Sync>;
type DeleteFn = Box<dyn Fn(&str) -> Result<()> + Send + Sync>;

/// Closure-driven [`TodoRepo`] that remembers which operations were called.
/// Operations without a closure fail with a storage error.
#[derive(Default)]
pub struct MockTodoRepo {
    get_fn: Option<GetFn>,
    get_all_fn: Option<GetAllFn>,
    save_fn: Option<SaveFn>,
    delete_fn: Option<DeleteFn>,
    get_invoked: AtomicBool,
    get_all_invoked: AtomicBool,
    save_invoked: AtomicBool,
    delete_invoked: AtomicBool,
}

impl MockTodoRepo {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_get(
        mut self,
        f: impl Fn(&str) -> Result<Option<Todo>> + Send + Sync + 'static,
    ) -> Self {
        self.get_fn = Some(Box::new(f));
        self
    }
    pub fn on_get_all(mut self, f: impl Fn() -> Result<Vec<Todo>> + Send + Sync + 'static) -> Self {
        self.get_all_fn = Some(Box::new(f));
        self
    }
    pub fn on_save(mut self, f: impl Fn(&mut Todo) -> Result<()> + Send + Sync + 'static) -> Self {
        self.save_fn = Some(Box::new(f));
        self
    }
    pub fn on_delete(mut self, f: impl Fn(&str) -> Result<()> + Send + Sync + 'static) -> Self {
        self.delete_fn = Some(Box::new(f));
        self
    }

    pub fn get_invoked(&self) -> bool {
        self.get_invoked.load(Ordering::SeqCst)
    }
    pub fn get_all_invoked(&self) -> bool {
        self.get_all_invoked.load(Ordering::SeqCst)
    }
    pub fn save_invoked(&self) -> bool {
        self.save_invoked.load(Ordering::SeqCst)
    }
    pub fn delete_invoked(&self) -> bool {
        self.delete_invoked.load(Ordering::SeqCst)
    }
    pub fn any_invoked(&self) -> bool {
        self.get_invoked() || self.get_all_invoked() || self.save_invoked() || self.delete_invoked()
    }
}

fn unexpected(op: &str) -> StorageError {
    StorageError::new(format!("unexpected call to {op}"))
}

impl TodoRepo for MockTodoRepo {
    fn get(&self, id: &str) -> Result<Option<Todo>> {
        self.get_invoked.store(true, Ordering::SeqCst);
        let f = self.get_fn.as_ref().ok_or_else(|| unexpected("get"))?;
        f(id)
    }

    fn get_all(&self) -> Result<Vec<Todo>> {
        self.get_all_invoked.store(true, Ordering::SeqCst);
        let f = self.get_all_fn.as_ref().ok_or_else(|| unexpected("get_all"))?;
        f()
    }

    fn save(&self, todo: &mut Todo) -> Result<()> {
        self.save_invoked.store(true, Ordering::SeqCst);
        let f = self.save_fn.as_ref().ok_or_else(|| unexpected("save"))?;
        f(todo)
    }

    fn delete(&self, id: &str) -> Result<()> {
        self.delete_invoked.store(true, Ordering::SeqCst);
        let f = self.delete_fn.as_ref().ok_or_else(|| unexpected("delete"))?;
        f(id)
    }
}

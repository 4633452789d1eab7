use std::rc::Rc;
use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_CONTEXT_ID: AtomicU64 = AtomicU64::new(0);

/// Owner of IR modules. Cloning shares the context.
#[derive(Debug, Clone)]
pub struct Context {
    id: Rc<u64>,
}

impl Context {
    pub fn new() -> Self {
        Self {
            id: Rc::new(NEXT_CONTEXT_ID.fetch_add(1, Ordering::Relaxed)),
        }
    }

    pub fn id(&self) -> u64 {
        *self.id
    }

    /// Whether both handles refer to the same context.
    pub fn same_as(&self, other: &Context) -> bool {
        Rc::ptr_eq(&self.id, &other.id)
    }
}

impl Default for Context {
    fn default() -> Self {
        Self::new()
    }
}

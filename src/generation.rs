use std::cell::Cell;
use std::rc::Rc;

/// Request-generation counter for one kind of lookup.
///
/// Starting a lookup takes a new [`Ticket`]; any older ticket from the same
/// counter becomes stale, and its response must be dropped. Clones share
/// the counter.
#[derive(Debug, Clone, Default)]
pub struct RequestGeneration {
    current: Rc<Cell<u64>>,
}

impl RequestGeneration {
    pub fn new() -> Self {
        Self::default()
    }

    /// Supersedes every outstanding ticket and returns the new one.
    pub fn begin(&self) -> Ticket {
        let next = self.current.get().wrapping_add(1);
        self.current.set(next);
        Ticket {
            issued: next,
            current: Rc::clone(&self.current),
        }
    }
}

impl PartialEq for RequestGeneration {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.current, &other.current)
    }
}

/// Proof that a lookup was started at a given generation.
#[derive(Debug)]
pub struct Ticket {
    issued: u64,
    current: Rc<Cell<u64>>,
}

impl Ticket {
    pub fn generation(&self) -> u64 {
        self.issued
    }

    /// False once a newer lookup of the same kind has started.
    pub fn is_current(&self) -> bool {
        self.current.get() == self.issued
    }
}

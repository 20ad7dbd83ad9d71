//! In-memory table primitive
//!
//! Each entity kind gets one [`Table`]: a `BTreeMap` keyed by id plus a
//! monotonically increasing id counter, both behind a single
//! `parking_lot::RwLock`. Ids are assigned under the write lock, so
//! concurrent creates always receive distinct ids. The checked insert
//! and replace operations run their validation closure under the same
//! write lock as the mutation, so invariants that only involve this
//! table hold under concurrent callers.

use std::collections::BTreeMap;

use parking_lot::RwLock;

struct TableInner<T> {
    rows: BTreeMap<u32, T>,
    next_id: u32,
}

/// Lock-guarded table of rows keyed by generated id.
pub struct Table<T> {
    inner: RwLock<TableInner<T>>,
}

impl<T: Clone> Table<T> {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(TableInner {
                rows: BTreeMap::new(),
                next_id: 1,
            }),
        }
    }

    /// Insert a new row, assigning the next id under the write lock.
    pub fn insert(&self, make: impl FnOnce(u32) -> T) -> T {
        let mut inner = self.inner.write();
        let id = inner.next_id;
        inner.next_id += 1;
        let row = make(id);
        inner.rows.insert(id, row.clone());
        row
    }

    /// Validate against the current rows and insert, as one atomic
    /// operation. No id is consumed when the check fails.
    pub fn insert_checked<E>(
        &self,
        check: impl FnOnce(&BTreeMap<u32, T>) -> Result<(), E>,
        make: impl FnOnce(u32) -> T,
    ) -> Result<T, E> {
        let mut inner = self.inner.write();
        check(&inner.rows)?;
        let id = inner.next_id;
        inner.next_id += 1;
        let row = make(id);
        inner.rows.insert(id, row.clone());
        Ok(row)
    }

    pub fn get(&self, id: u32) -> Option<T> {
        self.inner.read().rows.get(&id).cloned()
    }

    pub fn contains(&self, id: u32) -> bool {
        self.inner.read().rows.contains_key(&id)
    }

    /// Snapshot of all rows in id (insertion) order.
    pub fn all(&self) -> Vec<T> {
        self.inner.read().rows.values().cloned().collect()
    }

    pub fn find(&self, pred: impl Fn(&T) -> bool) -> Option<T> {
        self.inner.read().rows.values().find(|row| pred(row)).cloned()
    }

    /// Compute a replacement row from the existing one and the current
    /// table contents, and store it, as one atomic operation. Returns
    /// `None` when the id is absent; the row is left untouched when
    /// the closure fails.
    pub fn replace_checked<E>(
        &self,
        id: u32,
        f: impl FnOnce(&T, &BTreeMap<u32, T>) -> Result<T, E>,
    ) -> Option<Result<T, E>> {
        let mut inner = self.inner.write();
        let existing = inner.rows.get(&id)?.clone();
        match f(&existing, &inner.rows) {
            Ok(updated) => {
                inner.rows.insert(id, updated.clone());
                Some(Ok(updated))
            }
            Err(e) => Some(Err(e)),
        }
    }

    /// Remove a row and apply a cleanup mutation to every remaining
    /// row, under one write lock. Returns false if the id was already
    /// absent (nothing is swept in that case).
    pub fn remove_and_sweep(&self, id: u32, mut sweep: impl FnMut(&mut T)) -> bool {
        let mut inner = self.inner.write();
        if inner.rows.remove(&id).is_none() {
            return false;
        }
        for row in inner.rows.values_mut() {
            sweep(row);
        }
        true
    }
}

impl<T: Clone> Default for Table<T> {
    fn default() -> Self {
        Self::new()
    }
}

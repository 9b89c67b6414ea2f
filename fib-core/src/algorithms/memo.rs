use super::checked_index;
use crate::{FibError, Index, Value};

/// Computes the n-th Fibonacci number with top-down memoized recursion.
///
/// A fresh [`MemoTable`] sized for `n` is created per call, lent to the recursive helper
/// by `&mut`, and dropped on return. Nothing survives between calls.
///
/// # Errors
///
/// [`FibError::InvalidArgument`] if `n < 0` or `n > MAX_INDEX`.
pub fn memo(n: Index) -> Result<Value, FibError> {
    let n = checked_index(n)?;
    let mut table = MemoTable::new(n);
    Ok(resolve(n, &mut table))
}

fn resolve(n: usize, table: &mut MemoTable) -> Value {
    if n <= 1 {
        return n as Value;
    }
    if let Some(value) = table.get(n) {
        return value;
    }
    let value = resolve(n - 1, table) + resolve(n - 2, table);
    table.insert(n, value);
    value
}

/// Dense table of optional values for indices `0..=n`.
///
/// `None` marks a slot that has not been computed yet.
#[derive(Debug)]
struct MemoTable {
    slots: Vec<Option<Value>>,
}

impl MemoTable {
    /// Creates a table covering indices `0..=n`, all empty.
    fn new(n: usize) -> Self {
        Self {
            slots: vec![None; n + 1],
        }
    }

    fn get(&self, index: usize) -> Option<Value> {
        self.slots[index]
    }

    fn insert(&mut self, index: usize, value: Value) {
        debug_assert!(self.slots[index].is_none(), "slot {index} computed twice");
        self.slots[index] = Some(value);
    }

    #[cfg(test)]
    fn filled(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }
}

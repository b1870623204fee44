//! Seeded random mutation of source vectors.

/// One structural change applied by [`SourceMutator`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mutation {
    Push,
    Pop,
    Insert(usize),
    Remove(usize),
    Clear,
}

/// Applies random pushes, pops, inserts, removals and (rarely) clears to a
/// vector.
///
/// Runs are reproducible for a given seed. Inserted values come from a
/// counter, so every value the mutator adds is distinct from the ones before
/// it (until the counter wraps).
pub struct SourceMutator {
    rng: fastrand::Rng,
    next_value: u16,
    max_len: usize,
}

impl SourceMutator {
    pub fn new(seed: u64) -> SourceMutator {
        SourceMutator {
            rng: fastrand::Rng::with_seed(seed),
            next_value: 1000,
            max_len: 64,
        }
    }

    /// Stops the mutator from growing a vector past `max_len` elements.
    pub fn with_max_len(mut self, max_len: usize) -> SourceMutator {
        self.max_len = max_len;
        self
    }

    fn next_value<T: From<u16>>(&mut self) -> T {
        let value = self.next_value;
        self.next_value = self.next_value.wrapping_add(1);
        T::from(value)
    }

    /// Picks and applies one mutation, returning it.
    pub fn step<T: From<u16>>(&mut self, values: &mut Vec<T>) -> Mutation {
        let len = values.len();
        let can_grow = len < self.max_len;
        let mutation = match self.rng.u8(0..20) {
            0 => Mutation::Clear,
            1..=6 if can_grow => Mutation::Push,
            7..=10 if can_grow => Mutation::Insert(self.rng.usize(0..=len)),
            _ if len == 0 => Mutation::Push,
            11..=14 => Mutation::Pop,
            _ => Mutation::Remove(self.rng.usize(0..len)),
        };
        match mutation {
            Mutation::Push => {
                let value = self.next_value();
                values.push(value);
            }
            Mutation::Pop => {
                values.pop();
            }
            Mutation::Insert(index) => {
                let value = self.next_value();
                values.insert(index, value);
            }
            Mutation::Remove(index) => {
                values.remove(index);
            }
            Mutation::Clear => values.clear(),
        }
        mutation
    }
}

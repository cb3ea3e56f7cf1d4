//! Cursor over a produced leaf stream.
//!
//! Tracks how many leaves have been consumed so failures can report the
//! exact stream position alongside the spec path.

use remold_core::{ReshapeError, SpecPath, Value};

pub(crate) struct ScalarStream {
    items: std::vec::IntoIter<Value>,
    consumed: usize,
}

impl ScalarStream {
    pub(crate) fn new(items: Vec<Value>) -> Self {
        Self {
            items: items.into_iter(),
            consumed: 0,
        }
    }

    /// Leaves consumed so far; also the stream index of the next leaf.
    pub(crate) fn consumed(&self) -> usize {
        self.consumed
    }

    pub(crate) fn remaining(&self) -> usize {
        self.items.len()
    }

    /// Take one leaf for the scalar spec at `path`.
    pub(crate) fn next_leaf(&mut self, path: &SpecPath) -> Result<Value, ReshapeError> {
        match self.items.next() {
            Some(value) => {
                self.consumed += 1;
                Ok(value)
            }
            None => Err(ReshapeError::InsufficientScalars {
                needed: 1,
                available: 0,
                path: path.clone(),
            }),
        }
    }

    /// Take a whole block of `count` leaves for an array leaf at `path`.
    ///
    /// Checked up front so the error reports the full shortfall rather
    /// than failing one element in.
    pub(crate) fn take_block(
        &mut self,
        count: usize,
        path: &SpecPath,
    ) -> Result<Vec<Value>, ReshapeError> {
        if self.remaining() < count {
            return Err(ReshapeError::InsufficientScalars {
                needed: count,
                available: self.remaining(),
                path: path.clone(),
            });
        }
        self.consumed += count;
        Ok(self.items.by_ref().take(count).collect())
    }

    /// Drain whatever is left, for callers that surface the remainder.
    pub(crate) fn into_remainder(self) -> Vec<Value> {
        self.items.collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn block_shortfall_reports_needed_and_available() {
        let mut stream = ScalarStream::new(vec![Value::int(1), Value::int(2)]);
        let err = stream.take_block(5, &SpecPath::new()).unwrap_err();
        assert_eq!(
            err,
            ReshapeError::InsufficientScalars {
                needed: 5,
                available: 2,
                path: SpecPath::new(),
            }
        );
        // A failed block takes nothing.
        assert_eq!(stream.remaining(), 2);
        assert_eq!(stream.consumed(), 0);
    }

    #[test]
    fn consumed_tracks_position() {
        let mut stream = ScalarStream::new(vec![Value::int(1), Value::int(2), Value::int(3)]);
        stream.next_leaf(&SpecPath::new()).unwrap();
        assert_eq!(stream.consumed(), 1);
        stream.take_block(2, &SpecPath::new()).unwrap();
        assert_eq!(stream.consumed(), 3);
        assert_eq!(stream.remaining(), 0);
    }
}

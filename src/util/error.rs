use derive_more::{Display, Error, From, IsVariant, TryInto};

#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("Index {index} out of bounds for collection with {len} elements!")]
pub struct IndexOutOfBounds {
    pub index: usize,
    pub len: usize,
}

#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("Range {start}..{end} out of bounds for collection with {len} elements!")]
pub struct RangeOutOfBounds {
    pub start: usize,
    pub end: usize,
    pub len: usize,
}

#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("Capacity overflow!")]
pub struct CapacityOverflow;

#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("Fixed capacity of {cap} can't hold {required} elements!")]
pub struct CapacityExceeded {
    pub required: usize,
    pub cap: usize,
}

/// The ways a ring can fail to make room for more elements.
#[derive(Debug, Display, Error, From, TryInto, IsVariant, Clone, Copy, PartialEq, Eq)]
pub enum ReserveError {
    CapacityOverflow(CapacityOverflow),
    CapacityExceeded(CapacityExceeded),
}

/// The ways an insertion at an arbitrary index can fail: a bad index, or any [`ReserveError`].
#[derive(Debug, Display, Error, From, TryInto, IsVariant, Clone, Copy, PartialEq, Eq)]
pub enum InsertError {
    IndexOutOfBounds(IndexOutOfBounds),
    CapacityOverflow(CapacityOverflow),
    CapacityExceeded(CapacityExceeded),
}

impl From<ReserveError> for InsertError {
    fn from(value: ReserveError) -> Self {
        match value {
            ReserveError::CapacityOverflow(e) => e.into(),
            ReserveError::CapacityExceeded(e) => e.into(),
        }
    }
}

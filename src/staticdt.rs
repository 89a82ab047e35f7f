use rand::Rng;

use crate::walker::AliasTable;

/// An alias table over a `&'static [T]` of outcomes.
///
/// The enum derives build these: the variant list is a constant emitted by the
/// macro, so the table is the only thing allocated. Outcome `i` of the table is
/// `items[i]`.
#[derive(Debug, Clone)]
pub struct StaticDropTable<T: 'static> {
    table: AliasTable,
    items: &'static [T],
}

impl<T> StaticDropTable<T> {
    /// `table.len()` must equal `items.len()`.
    pub fn new(table: AliasTable, items: &'static [T]) -> Self {
        debug_assert_eq!(table.len(), items.len());
        Self { table, items }
    }

    #[inline]
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.table.len()
    }

    #[inline]
    pub fn total(&self) -> u128 {
        self.table.total()
    }

    /// Whether every item is equally likely (no alias lookups on draw).
    #[inline]
    pub fn is_uniform(&self) -> bool {
        self.table.is_uniform()
    }

    #[inline]
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> &'static T {
        &self.items[self.table.sample_index(rng)]
    }

    #[inline]
    pub fn sample_owned<R: Rng + ?Sized>(&self, rng: &mut R) -> T
    where
        T: Copy,
    {
        *self.sample(rng)
    }

    #[inline]
    pub const fn items(&self) -> &'static [T] {
        self.items
    }

    pub fn table(&self) -> &AliasTable {
        &self.table
    }
}

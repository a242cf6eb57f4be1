use smol_str::SmolStr;

/// A result window: skip `index_start` rows, return at most `max_results`.
///
/// `order_by` is a dialect-native ordering clause body (`"name DESC"`) passed
/// through verbatim. Whether it may be omitted depends on the dialect: the
/// OFFSET/FETCH family refuses to paginate without one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Pagination {
    pub index_start: u64,
    pub max_results: u64,
    pub order_by: Option<SmolStr>,
}

impl Pagination {
    pub fn new(index_start: u64, max_results: u64) -> Self {
        Self {
            index_start,
            max_results,
            order_by: None,
        }
    }

    pub fn order_by(mut self, clause: impl Into<SmolStr>) -> Self {
        self.order_by = Some(clause.into());
        self
    }
}

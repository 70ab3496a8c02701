/// Sort specification over a numeric JSON field.
///
/// Ties are always broken by holder id ascending, so repeated identical
/// queries return the same order on every driver.
#[derive(Debug, Clone, PartialEq)]
pub struct SortSpec {
    pub field: String,
    pub descending: bool,
}

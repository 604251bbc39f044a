/// Domain name as stored in the dataset.
/// Example: `wikipedia.org`
pub type Domain = String;
/// Person identifier recorded against a domain. Stored uppercased by this crate.
/// Examples: `DANIEL`, `ERIK`, `VLAD`
pub type Assignee = String;
/// Value of an ordering column (`shuffled #` or `Trexa # `).
/// Examples: `1`, `48213`
pub type OrderKey = i64;
/// Header text of a dataset column.
/// Example: `assigned for change-password forms`
pub type ColumnName = String;
/// Free-form annotation text.
/// Example: `redirects to login`
pub type Note = String;

//! subtrack-core: shared transaction model for statement parsing and spend analysis

pub mod money;
pub mod period;
pub mod transaction;

pub use money::{format_amount, DEFAULT_CURRENCY};
pub use period::YearMonth;
pub use transaction::{
    CategorizedTransaction, Category, ClassifiedTransaction, HasCategory, Transaction,
    TransactionLike,
};

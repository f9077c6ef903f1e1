pub mod list_ops;
pub mod review_ops;

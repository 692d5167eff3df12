pub mod pool_form;
pub mod types;

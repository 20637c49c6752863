pub mod as_dyn_error;
pub mod result_ext;

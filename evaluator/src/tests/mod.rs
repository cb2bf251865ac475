mod common;
mod test_compile;
mod test_eval;

pub mod tests_find;

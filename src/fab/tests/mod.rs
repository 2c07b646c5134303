mod test_dedupe_basic;
mod test_holder_basic;

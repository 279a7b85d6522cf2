pub fn page_size() -> usize {
    page_size::get()
}

// Cached regular expression compilation

mod cache;

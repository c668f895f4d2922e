// Cached regular expressions for the terminal patterns

mod cache;

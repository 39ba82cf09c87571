pub mod paged;

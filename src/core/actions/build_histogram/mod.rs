pub mod build_histogram;

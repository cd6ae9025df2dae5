pub mod analysis;

#[cfg(test)]
mod analysis_test;

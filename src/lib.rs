pub mod demand;
pub mod elevator;
pub mod error;
pub mod report;
pub mod sim;
pub mod trace;

#[cfg(test)]
mod test;

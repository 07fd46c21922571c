pub mod queue;
pub mod ride;
pub mod sim;

#[cfg(test)]
mod test;
